use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::common::PaginationParams;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEventRequest {
    #[validate(range(min = 1))]
    pub organization_id: Option<i32>,

    #[validate(range(min = 1))]
    pub parent_event_id: Option<i32>,

    #[validate(length(max = 50))]
    pub code: Option<String>,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(custom(function = "validate_event_type"))]
    pub event_type: String,

    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,

    #[serde(default = "default_event_status")]
    #[validate(custom(function = "validate_event_status"))]
    pub status: String,
}

fn default_event_status() -> String {
    "planned".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateEventRequest {
    #[validate(length(max = 50))]
    pub code: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(custom(function = "validate_event_type"))]
    pub event_type: Option<String>,

    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,

    #[validate(custom(function = "validate_event_status"))]
    pub status: Option<String>,
}

fn validate_event_type(event_type: &str) -> Result<(), validator::ValidationError> {
    const VALID_TYPES: &[&str] = &["pairs", "teams", "swiss", "knockout", "individual"];

    if VALID_TYPES.contains(&event_type) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_event_type"))
    }
}

fn validate_event_status(status: &str) -> Result<(), validator::ValidationError> {
    const VALID_STATUSES: &[&str] = &["planned", "running", "completed", "cancelled"];

    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_event_status"))
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct EventListFilter {
    #[serde(flatten)]
    pub pagination: PaginationParams,
    pub status: Option<String>,
    pub event_type: Option<String>,
    pub organization_id: Option<i32>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

impl EventListFilter {
    pub fn validate(&self) -> Result<(), String> {
        self.pagination.validate()?;

        if let Some(org_id) = self.organization_id
            && org_id < 1
        {
            return Err("organization_id must be positive".to_string());
        }

        if let (Some(from), Some(to)) = (self.from_date, self.to_date)
            && from > to
        {
            return Err("from_date must not be after to_date".to_string());
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct RecentEventsQuery {
    #[serde(default = "default_recent_days")]
    pub days: i64,
}

fn default_recent_days() -> i64 {
    30
}

impl RecentEventsQuery {
    pub fn validate(&self) -> Result<(), String> {
        if self.days < 1 || self.days > 365 {
            return Err("days must be between 1 and 365".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventResponse {
    pub id: i32,
    pub organization_id: Option<i32>,
    pub parent_event_id: Option<i32>,
    pub code: Option<String>,
    pub name: String,
    pub event_type: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub status: String,
    pub created_at: NaiveDateTime,
}

impl From<crate::models::Event> for EventResponse {
    fn from(event: crate::models::Event) -> Self {
        Self {
            id: event.id,
            organization_id: event.organization_id,
            parent_event_id: event.parent_event_id,
            code: event.code,
            name: event.name,
            event_type: event.event_type,
            start_date: event.start_date,
            end_date: event.end_date,
            status: event.status,
            created_at: event.created_at,
        }
    }
}

/// One line of an event's final standings, from a single player's
/// perspective (pair events produce one row per partner).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EventStandingRow {
    pub position: Option<i32>,
    pub player_id: i32,
    pub player_name: String,
    pub player_number: i32,
    pub score: Decimal,
    pub percentage: Decimal,
    pub masterpoints: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EventStandingsResponse {
    pub event_id: i32,
    pub event_name: String,
    pub results: Vec<EventStandingRow>,
}
