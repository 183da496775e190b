use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::common::PaginationParams;

/// Request payload for registering a new player
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePlayerRequest {
    #[validate(range(min = 1, message = "Member number must be positive"))]
    pub number: i32,

    #[validate(length(
        min = 1,
        max = 255,
        message = "First name must be between 1 and 255 characters"
    ))]
    pub firstname: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Last name must be between 1 and 255 characters"
    ))]
    pub lastname: String,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(range(min = 1))]
    pub organization_id: Option<i32>,

    #[serde(default = "default_status")]
    #[validate(custom(function = "validate_status"))]
    pub status: String,

    #[validate(custom(function = "validate_gender"))]
    pub gender: Option<String>,

    pub birthdate: Option<NaiveDate>,
    pub joindate: Option<NaiveDate>,
}

fn default_status() -> String {
    "active".to_string()
}

/// Request payload for updating profile fields. The member number is
/// immutable once assigned.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePlayerRequest {
    #[validate(length(min = 1, max = 255))]
    pub firstname: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub lastname: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(range(min = 1))]
    pub organization_id: Option<i32>,

    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,

    #[validate(custom(function = "validate_gender"))]
    pub gender: Option<String>,

    pub birthdate: Option<NaiveDate>,
}

fn validate_status(status: &str) -> Result<(), validator::ValidationError> {
    const VALID_STATUSES: &[&str] = &["active", "inactive", "suspended"];

    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_status"))
    }
}

fn validate_gender(gender: &str) -> Result<(), validator::ValidationError> {
    const VALID_GENDERS: &[&str] = &["M", "F"];

    if VALID_GENDERS.contains(&gender) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_gender"))
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct PlayerListFilter {
    #[serde(flatten)]
    pub pagination: PaginationParams,
    pub status: Option<String>,
    pub organization_id: Option<i32>,
}

impl PlayerListFilter {
    pub fn validate(&self) -> Result<(), String> {
        self.pagination.validate()?;

        if let Some(org_id) = self.organization_id
            && org_id < 1
        {
            return Err("organization_id must be positive".to_string());
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlayerResponse {
    pub id: i32,
    pub number: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: Option<String>,
    pub organization_id: Option<i32>,
    pub status: String,
    pub gender: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub joindate: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
}

impl From<crate::models::Player> for PlayerResponse {
    fn from(player: crate::models::Player) -> Self {
        Self {
            id: player.id,
            number: player.number,
            firstname: player.firstname,
            lastname: player.lastname,
            email: player.email,
            organization_id: player.organization_id,
            status: player.status,
            gender: player.gender,
            birthdate: player.birthdate,
            joindate: player.joindate,
            created_at: player.created_at,
        }
    }
}
