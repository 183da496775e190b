use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::leaderboard::{LeaderboardFilter, LeaderboardResponse},
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/leaderboard",
    params(LeaderboardFilter),
    responses(
        (status = 200, description = "Masterpoint leaderboard for the window", body = LeaderboardResponse),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "leaderboard"
)]
pub async fn get_leaderboard(
    State(db): State<Database>,
    Query(filter): Query<LeaderboardFilter>,
) -> Result<Response, WebError> {
    filter.validate().map_err(WebError::BadRequest)?;

    let today = chrono::Utc::now().date_naive();
    let response = services::get_leaderboard(db.pool(), &filter, today).await?;

    Ok(Json(response).into_response())
}
