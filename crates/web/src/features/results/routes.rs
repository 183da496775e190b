use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{create_result, get_event_results, get_player_results};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", post(create_result))
        .route("/event/:event_id", get(get_event_results))
        .route("/player/:player_id", get(get_player_results))
}
