use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{
    create_player, get_player, get_player_masterpoints, get_player_rating, get_player_ratings,
    list_players, update_player,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_players).post(create_player))
        .route("/:id", get(get_player).put(update_player))
        .route("/:id/masterpoints", get(get_player_masterpoints))
        .route("/:id/ratings", get(get_player_ratings))
        .route("/:id/ratings/:rating_type", get(get_player_rating))
}
