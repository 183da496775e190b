use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Session {
    pub id: i32,
    pub event_id: i32,
    pub session_number: i32,
    pub date: chrono::NaiveDate,
    pub status: String,
    pub boards_played: Option<i32>,
    pub movement_type: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}
