use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One row per player per event. Pair events store symmetric rows, one
/// from each partner's perspective; event-level aggregation must dedupe
/// by (event_id, pair_number), never by row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EventOutcome {
    pub id: i32,
    pub session_id: Option<i32>,
    pub event_id: i32,
    pub player_id: i32,
    pub partner_id: Option<i32>,
    pub pair_number: Option<i32>,
    pub position: Option<i32>,
    pub score: Option<Decimal>,
    pub percentage: Option<Decimal>,
    pub masterpoints_awarded: Option<Decimal>,
    pub created_at: chrono::NaiveDateTime,
}
