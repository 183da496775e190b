use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::common::PaginationParams;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateResultRequest {
    #[validate(range(min = 1))]
    pub session_id: Option<i32>,

    #[validate(range(min = 1, message = "event_id must be positive"))]
    pub event_id: i32,

    #[validate(range(min = 1, message = "player_id must be positive"))]
    pub player_id: i32,

    #[validate(range(min = 1))]
    pub partner_id: Option<i32>,

    #[validate(range(min = 1))]
    pub pair_number: Option<i32>,

    #[validate(range(min = 1, message = "position must be a positive rank"))]
    pub position: Option<i32>,

    pub score: Option<Decimal>,
    pub percentage: Option<Decimal>,
    pub masterpoints_awarded: Option<Decimal>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ResultListFilter {
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

impl ResultListFilter {
    pub fn validate(&self) -> Result<(), String> {
        self.pagination.validate()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResultResponse {
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
    pub created_at: NaiveDateTime,
}

impl From<crate::models::EventOutcome> for ResultResponse {
    fn from(outcome: crate::models::EventOutcome) -> Self {
        Self {
            id: outcome.id,
            session_id: outcome.session_id,
            event_id: outcome.event_id,
            player_id: outcome.player_id,
            partner_id: outcome.partner_id,
            pair_number: outcome.pair_number,
            position: outcome.position,
            score: outcome.score,
            percentage: outcome.percentage,
            masterpoints_awarded: outcome.masterpoints_awarded,
            created_at: outcome.created_at,
        }
    }
}
