use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Append-only award record. Duplicate awards for the same
/// (player, event, category) are additive; nothing ever deletes one.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MasterpointAward {
    pub id: i32,
    pub player_id: i32,
    pub event_id: i32,
    pub organization_id: Option<i32>,
    /// local, national, regional or international; unknown categories
    /// are tolerated and only count towards the overall total.
    pub award_type: String,
    pub points: Decimal,
    pub awarded_date: chrono::NaiveDate,
    pub created_at: chrono::NaiveDateTime,
}
