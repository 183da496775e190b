use sqlx::PgPool;
use storage::{
    dto::{common::PaginationParams, outcome::CreateResultRequest},
    error::Result,
    models::EventOutcome,
    repository::{event::EventRepository, outcome::OutcomeRepository, player::PlayerRepository},
};

/// Results for an event in position order
pub async fn results_by_event(
    pool: &PgPool,
    event_id: i32,
    pagination: &PaginationParams,
) -> Result<Vec<EventOutcome>> {
    EventRepository::new(pool).find_by_id(event_id).await?;

    let repo = OutcomeRepository::new(pool);
    repo.by_event(event_id, pagination).await
}

/// A player's result history, newest first
pub async fn results_by_player(
    pool: &PgPool,
    player_id: i32,
    pagination: &PaginationParams,
) -> Result<Vec<EventOutcome>> {
    PlayerRepository::new(pool).find_by_id(player_id).await?;

    let repo = OutcomeRepository::new(pool);
    repo.by_player(player_id, pagination).await
}

/// Record a new result row
pub async fn create_result(pool: &PgPool, request: &CreateResultRequest) -> Result<EventOutcome> {
    let repo = OutcomeRepository::new(pool);
    repo.create(request).await
}
