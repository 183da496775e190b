use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Organizations form a tree via `parent_id`; children are looked up
/// on demand rather than held as back-references.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Organization {
    pub id: i32,
    pub name: String,
    pub org_type: String,
    pub parent_id: Option<i32>,
    pub country: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}
