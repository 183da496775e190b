use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::RatingSnapshot;
use crate::services::ratings::conservative;

/// The current snapshot for one rating methodology, with the
/// conservative estimate derived at read time.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CurrentRating {
    #[serde(rename = "type")]
    pub rating_type: String,
    pub mu: Decimal,
    pub sigma: Decimal,
    pub conservative_rating: Decimal,
    pub date: NaiveDate,
}

impl From<&RatingSnapshot> for CurrentRating {
    fn from(snapshot: &RatingSnapshot) -> Self {
        Self {
            rating_type: snapshot.rating_type.clone(),
            mu: snapshot.mu,
            sigma: snapshot.sigma,
            conservative_rating: conservative(snapshot.mu, snapshot.sigma),
            date: snapshot.as_of_date,
        }
    }
}

/// An empty `ratings` list is the valid "unrated" state, not an error.
#[derive(Debug, Serialize, ToSchema)]
pub struct PlayerRatingsResponse {
    pub player_id: i32,
    pub ratings: Vec<CurrentRating>,
}
