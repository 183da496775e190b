use chrono::NaiveDate;
use sqlx::PgPool;
use storage::{
    dto::event::{
        CreateEventRequest, EventListFilter, EventStandingsResponse, UpdateEventRequest,
    },
    error::Result,
    models::{Event, Session},
    repository::event::EventRepository,
};

/// List events with filtering, newest first
pub async fn list_events(pool: &PgPool, filter: &EventListFilter) -> Result<Vec<Event>> {
    let repo = EventRepository::new(pool);
    repo.list(filter).await
}

/// Events starting within the trailing `days` window. `today` is
/// injected by the handler so the window is deterministic under test.
pub async fn recent_events(pool: &PgPool, today: NaiveDate, days: i64) -> Result<Vec<Event>> {
    let repo = EventRepository::new(pool);
    let cutoff = today - chrono::Duration::days(days);
    repo.recent(cutoff).await
}

/// Get event by id
pub async fn get_event(pool: &PgPool, id: i32) -> Result<Event> {
    let repo = EventRepository::new(pool);
    repo.find_by_id(id).await
}

/// Final standings for an event in position order
pub async fn get_standings(pool: &PgPool, event_id: i32) -> Result<EventStandingsResponse> {
    let repo = EventRepository::new(pool);

    let event = repo.find_by_id(event_id).await?;
    let results = repo.standings(event_id).await?;

    Ok(EventStandingsResponse {
        event_id: event.id,
        event_name: event.name,
        results,
    })
}

/// Sessions of an event in play order
pub async fn get_sessions(pool: &PgPool, event_id: i32) -> Result<Vec<Session>> {
    let repo = EventRepository::new(pool);

    repo.find_by_id(event_id).await?;
    repo.sessions(event_id).await
}

/// Create a new event
pub async fn create_event(pool: &PgPool, request: &CreateEventRequest) -> Result<Event> {
    let repo = EventRepository::new(pool);
    repo.create(request).await
}

/// Update an event
pub async fn update_event(pool: &PgPool, id: i32, request: &UpdateEventRequest) -> Result<Event> {
    let repo = EventRepository::new(pool);

    let existing = repo.find_by_id(id).await?;
    repo.update(id, &existing, request).await
}
