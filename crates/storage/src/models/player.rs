use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Player {
    pub id: i32,
    /// External-facing member number, unique across the federation.
    pub number: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: Option<String>,
    pub organization_id: Option<i32>,
    pub status: String,
    pub gender: Option<String>,
    pub birthdate: Option<chrono::NaiveDate>,
    pub joindate: Option<chrono::NaiveDate>,
    pub created_at: chrono::NaiveDateTime,
}
