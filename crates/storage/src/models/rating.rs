use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Append-only skill estimate written by the external rating process.
/// A new rating is always a new row; the current one for a
/// (player, rating_type) pair is the row with the latest `as_of_date`,
/// ties resolved by highest id.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RatingSnapshot {
    pub id: i32,
    pub player_id: i32,
    pub rating_type: String,
    pub event_id: Option<i32>,
    pub as_of_date: chrono::NaiveDate,
    pub mu: Decimal,
    pub sigma: Decimal,
    pub created_at: chrono::NaiveDateTime,
}
