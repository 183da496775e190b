use sqlx::PgPool;

use crate::dto::organization::CreateOrganizationRequest;
use crate::error::{Result, StorageError};
use crate::models::Organization;

const ORG_COLUMNS: &str = "id, name, org_type, parent_id, country, created_at";

pub struct OrganizationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrganizationRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Organization>> {
        let organizations = sqlx::query_as::<_, Organization>(&format!(
            "SELECT {ORG_COLUMNS} FROM organizations ORDER BY name"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(organizations)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Organization> {
        let organization = sqlx::query_as::<_, Organization>(&format!(
            "SELECT {ORG_COLUMNS} FROM organizations WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(organization)
    }

    /// Direct children of an organization in the club/region/national
    /// tree. The table owns all nodes; no in-memory back-references.
    pub async fn children(&self, parent_id: i32) -> Result<Vec<Organization>> {
        let children = sqlx::query_as::<_, Organization>(&format!(
            "SELECT {ORG_COLUMNS} FROM organizations WHERE parent_id = $1 ORDER BY name"
        ))
        .bind(parent_id)
        .fetch_all(self.pool)
        .await?;

        Ok(children)
    }

    pub async fn create(&self, req: &CreateOrganizationRequest) -> Result<Organization> {
        let organization = sqlx::query_as::<_, Organization>(&format!(
            "INSERT INTO organizations (name, org_type, parent_id, country) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {ORG_COLUMNS}"
        ))
        .bind(&req.name)
        .bind(&req.org_type)
        .bind(req.parent_id)
        .bind(&req.country)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_foreign_key_violation() {
                StorageError::ConstraintViolation("Parent organization does not exist".to_string())
            } else {
                err
            }
        })?;

        Ok(organization)
    }
}
