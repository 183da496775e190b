use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::event::{
        CreateEventRequest, EventListFilter, EventResponse, EventStandingsResponse,
        RecentEventsQuery, UpdateEventRequest,
    },
    models::Session,
};
use validator::Validate;

use crate::error::{WebError, check_id};

use super::services;

#[utoipa::path(
    get,
    path = "/api/events",
    params(EventListFilter),
    responses(
        (status = 200, description = "List events successfully", body = Vec<EventResponse>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "events"
)]
pub async fn list_events(
    State(db): State<Database>,
    Query(filter): Query<EventListFilter>,
) -> Result<Response, WebError> {
    filter.validate().map_err(WebError::BadRequest)?;

    let events = services::list_events(db.pool(), &filter).await?;

    let response: Vec<EventResponse> = events.into_iter().map(EventResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/recent",
    params(RecentEventsQuery),
    responses(
        (status = 200, description = "Events within the trailing window, newest first", body = Vec<EventResponse>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "events"
)]
pub async fn recent_events(
    State(db): State<Database>,
    Query(query): Query<RecentEventsQuery>,
) -> Result<Response, WebError> {
    query.validate().map_err(WebError::BadRequest)?;

    let today = chrono::Utc::now().date_naive();
    let events = services::recent_events(db.pool(), today, query.days).await?;

    let response: Vec<EventResponse> = events.into_iter().map(EventResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(
        ("id" = i32, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Event found", body = EventResponse),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    check_id(id, "event id")?;

    let event = services::get_event(db.pool(), id).await?;

    Ok(Json(EventResponse::from(event)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{id}/standings",
    params(
        ("id" = i32, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Standings in position order", body = EventStandingsResponse),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_event_standings(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    check_id(id, "event id")?;

    let standings = services::get_standings(db.pool(), id).await?;

    Ok(Json(standings).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{id}/sessions",
    params(
        ("id" = i32, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Sessions in play order", body = Vec<Session>),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_event_sessions(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    check_id(id, "event id")?;

    let sessions = services::get_sessions(db.pool(), id).await?;

    Ok(Json(sessions).into_response())
}

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created successfully", body = EventResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Organization or parent event does not exist")
    ),
    tag = "events"
)]
pub async fn create_event(
    State(db): State<Database>,
    Json(req): Json<CreateEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let event = services::create_event(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(EventResponse::from(event))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/events/{id}",
    params(
        ("id" = i32, Path, description = "Event id")
    ),
    request_body = UpdateEventRequest,
    responses(
        (status = 200, description = "Event updated successfully", body = EventResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn update_event(
    State(db): State<Database>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateEventRequest>,
) -> Result<Response, WebError> {
    check_id(id, "event id")?;
    req.validate()?;

    let event = services::update_event(db.pool(), id, &req).await?;

    Ok(Json(EventResponse::from(event)).into_response())
}
