use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Event {
    pub id: i32,
    pub organization_id: Option<i32>,
    /// Multi-stage events (e.g. a congress) nest under a parent event.
    pub parent_event_id: Option<i32>,
    pub code: Option<String>,
    pub name: String,
    pub event_type: String,
    pub start_date: chrono::NaiveDate,
    pub end_date: Option<chrono::NaiveDate>,
    pub status: String,
    pub created_at: chrono::NaiveDateTime,
}
