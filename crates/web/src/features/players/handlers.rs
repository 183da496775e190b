use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        masterpoints::MasterpointSummary,
        player::{CreatePlayerRequest, PlayerListFilter, PlayerResponse, UpdatePlayerRequest},
        ratings::{CurrentRating, PlayerRatingsResponse},
    },
};
use validator::Validate;

use crate::error::{WebError, check_id};

use super::services;

#[utoipa::path(
    get,
    path = "/api/players",
    params(PlayerListFilter),
    responses(
        (status = 200, description = "List players successfully", body = Vec<PlayerResponse>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "players"
)]
pub async fn list_players(
    State(db): State<Database>,
    Query(filter): Query<PlayerListFilter>,
) -> Result<Response, WebError> {
    filter.validate().map_err(WebError::BadRequest)?;

    let players = services::list_players(db.pool(), &filter).await?;

    let response: Vec<PlayerResponse> = players.into_iter().map(PlayerResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/players/{id}",
    params(
        ("id" = i32, Path, description = "Player id")
    ),
    responses(
        (status = 200, description = "Player found", body = PlayerResponse),
        (status = 404, description = "Player not found")
    ),
    tag = "players"
)]
pub async fn get_player(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    check_id(id, "player id")?;

    let player = services::get_player(db.pool(), id).await?;

    Ok(Json(PlayerResponse::from(player)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/players",
    request_body = CreatePlayerRequest,
    responses(
        (status = 201, description = "Player created successfully", body = PlayerResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Player number already exists")
    ),
    tag = "players"
)]
pub async fn create_player(
    State(db): State<Database>,
    Json(req): Json<CreatePlayerRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let player = services::create_player(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(PlayerResponse::from(player))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/players/{id}",
    params(
        ("id" = i32, Path, description = "Player id")
    ),
    request_body = UpdatePlayerRequest,
    responses(
        (status = 200, description = "Player updated successfully", body = PlayerResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Player not found")
    ),
    tag = "players"
)]
pub async fn update_player(
    State(db): State<Database>,
    Path(id): Path<i32>,
    Json(req): Json<UpdatePlayerRequest>,
) -> Result<Response, WebError> {
    check_id(id, "player id")?;
    req.validate()?;

    let player = services::update_player(db.pool(), id, &req).await?;

    Ok(Json(PlayerResponse::from(player)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/players/{id}/masterpoints",
    params(
        ("id" = i32, Path, description = "Player id")
    ),
    responses(
        (status = 200, description = "Masterpoint summary by category", body = MasterpointSummary),
        (status = 404, description = "Player not found")
    ),
    tag = "players"
)]
pub async fn get_player_masterpoints(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    check_id(id, "player id")?;

    let summary = services::get_masterpoint_summary(db.pool(), id).await?;

    Ok(Json(summary).into_response())
}

#[utoipa::path(
    get,
    path = "/api/players/{id}/ratings",
    params(
        ("id" = i32, Path, description = "Player id")
    ),
    responses(
        (status = 200, description = "Current rating per methodology; empty list when unrated", body = PlayerRatingsResponse),
        (status = 404, description = "Player not found")
    ),
    tag = "players"
)]
pub async fn get_player_ratings(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    check_id(id, "player id")?;

    let ratings = services::get_current_ratings(db.pool(), id).await?;

    Ok(Json(ratings).into_response())
}

#[utoipa::path(
    get,
    path = "/api/players/{id}/ratings/{rating_type}",
    params(
        ("id" = i32, Path, description = "Player id"),
        ("rating_type" = String, Path, description = "Rating methodology, e.g. openskill")
    ),
    responses(
        (status = 200, description = "Current rating for the methodology", body = CurrentRating),
        (status = 404, description = "Player not found or unrated for this methodology")
    ),
    tag = "players"
)]
pub async fn get_player_rating(
    State(db): State<Database>,
    Path((id, rating_type)): Path<(i32, String)>,
) -> Result<Response, WebError> {
    check_id(id, "player id")?;

    let rating = services::get_current_rating(db.pool(), id, &rating_type).await?;

    Ok(Json(rating).into_response())
}
