use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrganizationRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(custom(function = "validate_org_type"))]
    pub org_type: String,

    #[validate(range(min = 1))]
    pub parent_id: Option<i32>,

    #[validate(length(min = 2, max = 3, message = "Country must be an ISO code"))]
    pub country: Option<String>,
}

fn validate_org_type(org_type: &str) -> Result<(), validator::ValidationError> {
    const VALID_TYPES: &[&str] = &["club", "region", "national", "international"];

    if VALID_TYPES.contains(&org_type) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_org_type"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrganizationResponse {
    pub id: i32,
    pub name: String,
    pub org_type: String,
    pub parent_id: Option<i32>,
    pub country: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<crate::models::Organization> for OrganizationResponse {
    fn from(org: crate::models::Organization) -> Self {
        Self {
            id: org.id,
            name: org.name,
            org_type: org.org_type,
            parent_id: org.parent_id,
            country: org.country,
            created_at: org.created_at,
        }
    }
}
