use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::outcome::{CreateResultRequest, ResultListFilter, ResultResponse},
};
use validator::Validate;

use crate::error::{WebError, check_id};

use super::services;

#[utoipa::path(
    get,
    path = "/api/results/event/{event_id}",
    params(
        ("event_id" = i32, Path, description = "Event id"),
        ResultListFilter
    ),
    responses(
        (status = 200, description = "Results in position order", body = Vec<ResultResponse>),
        (status = 404, description = "Event not found")
    ),
    tag = "results"
)]
pub async fn get_event_results(
    State(db): State<Database>,
    Path(event_id): Path<i32>,
    Query(filter): Query<ResultListFilter>,
) -> Result<Response, WebError> {
    check_id(event_id, "event id")?;
    filter.validate().map_err(WebError::BadRequest)?;

    let results = services::results_by_event(db.pool(), event_id, &filter.pagination).await?;

    let response: Vec<ResultResponse> = results.into_iter().map(ResultResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/results/player/{player_id}",
    params(
        ("player_id" = i32, Path, description = "Player id"),
        ResultListFilter
    ),
    responses(
        (status = 200, description = "Player's results, newest first", body = Vec<ResultResponse>),
        (status = 404, description = "Player not found")
    ),
    tag = "results"
)]
pub async fn get_player_results(
    State(db): State<Database>,
    Path(player_id): Path<i32>,
    Query(filter): Query<ResultListFilter>,
) -> Result<Response, WebError> {
    check_id(player_id, "player id")?;
    filter.validate().map_err(WebError::BadRequest)?;

    let results = services::results_by_player(db.pool(), player_id, &filter.pagination).await?;

    let response: Vec<ResultResponse> = results.into_iter().map(ResultResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/results",
    request_body = CreateResultRequest,
    responses(
        (status = 201, description = "Result recorded successfully", body = ResultResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Event, player or session does not exist")
    ),
    tag = "results"
)]
pub async fn create_result(
    State(db): State<Database>,
    Json(req): Json<CreateResultRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let result = services::create_result(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(ResultResponse::from(result))).into_response())
}
