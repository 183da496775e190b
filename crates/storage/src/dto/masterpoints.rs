use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifetime masterpoint totals for one player, bucketed by award
/// category. Unknown categories count towards `total_points` only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MasterpointSummary {
    pub player_id: i32,
    pub local_points: Decimal,
    pub national_points: Decimal,
    pub regional_points: Decimal,
    pub international_points: Decimal,
    pub total_points: Decimal,
    pub events_played: i64,
    pub last_award_date: Option<NaiveDate>,
}

impl MasterpointSummary {
    pub fn empty(player_id: i32) -> Self {
        Self {
            player_id,
            local_points: Decimal::ZERO,
            national_points: Decimal::ZERO,
            regional_points: Decimal::ZERO,
            international_points: Decimal::ZERO,
            total_points: Decimal::ZERO,
            events_played: 0,
            last_award_date: None,
        }
    }
}
