use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{
    create_event, get_event, get_event_sessions, get_event_standings, list_events, recent_events,
    update_event,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_events).post(create_event))
        .route("/recent", get(recent_events))
        .route("/:id", get(get_event).put(update_event))
        .route("/:id/standings", get(get_event_standings))
        .route("/:id/sessions", get(get_event_sessions))
}
