use sqlx::PgPool;
use storage::{
    dto::{
        masterpoints::MasterpointSummary,
        player::{CreatePlayerRequest, PlayerListFilter, UpdatePlayerRequest},
        ratings::{CurrentRating, PlayerRatingsResponse},
    },
    error::{Result, StorageError},
    models::Player,
    repository::{
        masterpoint::MasterpointRepository, player::PlayerRepository, rating::RatingRepository,
    },
    services::{masterpoints, ratings},
};

/// List players with optional status/organization filtering
pub async fn list_players(pool: &PgPool, filter: &PlayerListFilter) -> Result<Vec<Player>> {
    let repo = PlayerRepository::new(pool);
    repo.list(filter).await
}

/// Get player by id
pub async fn get_player(pool: &PgPool, id: i32) -> Result<Player> {
    let repo = PlayerRepository::new(pool);
    repo.find_by_id(id).await
}

/// Register a new player
pub async fn create_player(pool: &PgPool, request: &CreatePlayerRequest) -> Result<Player> {
    let repo = PlayerRepository::new(pool);
    repo.create(request).await
}

/// Update a player's profile fields
pub async fn update_player(
    pool: &PgPool,
    id: i32,
    request: &UpdatePlayerRequest,
) -> Result<Player> {
    let repo = PlayerRepository::new(pool);

    let existing = repo.find_by_id(id).await?;
    repo.update(id, &existing, request).await
}

/// Aggregate a player's masterpoint history into category totals.
/// A player with no awards gets a zeroed summary, not an error.
pub async fn get_masterpoint_summary(pool: &PgPool, player_id: i32) -> Result<MasterpointSummary> {
    PlayerRepository::new(pool).find_by_id(player_id).await?;

    let awards = MasterpointRepository::new(pool)
        .awards_by_player(player_id)
        .await?;

    Ok(masterpoints::summarize(player_id, &awards))
}

/// Resolve the player's current rating per methodology. An unrated
/// player gets an empty list.
pub async fn get_current_ratings(pool: &PgPool, player_id: i32) -> Result<PlayerRatingsResponse> {
    PlayerRepository::new(pool).find_by_id(player_id).await?;

    let snapshots = RatingRepository::new(pool).by_player(player_id).await?;

    Ok(PlayerRatingsResponse {
        player_id,
        ratings: ratings::current_ratings_by_type(&snapshots),
    })
}

/// Resolve the current rating for one methodology. No snapshot for
/// the pair is surfaced as NotFound here; the handler maps it to 404.
pub async fn get_current_rating(
    pool: &PgPool,
    player_id: i32,
    rating_type: &str,
) -> Result<CurrentRating> {
    PlayerRepository::new(pool).find_by_id(player_id).await?;

    let snapshots = RatingRepository::new(pool)
        .by_player_and_type(player_id, rating_type)
        .await?;

    ratings::current_rating(&snapshots)
        .map(CurrentRating::from)
        .ok_or(StorageError::NotFound)
}
