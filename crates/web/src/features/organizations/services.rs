use sqlx::PgPool;
use storage::{
    dto::organization::CreateOrganizationRequest,
    error::Result,
    models::Organization,
    repository::organization::OrganizationRepository,
};

/// List all organizations
pub async fn list_organizations(pool: &PgPool) -> Result<Vec<Organization>> {
    let repo = OrganizationRepository::new(pool);
    repo.list().await
}

/// Get organization by id
pub async fn get_organization(pool: &PgPool, id: i32) -> Result<Organization> {
    let repo = OrganizationRepository::new(pool);
    repo.find_by_id(id).await
}

/// Direct children in the organization tree
pub async fn get_children(pool: &PgPool, id: i32) -> Result<Vec<Organization>> {
    let repo = OrganizationRepository::new(pool);

    repo.find_by_id(id).await?;
    repo.children(id).await
}

/// Create a new organization
pub async fn create_organization(
    pool: &PgPool,
    request: &CreateOrganizationRequest,
) -> Result<Organization> {
    let repo = OrganizationRepository::new(pool);
    repo.create(request).await
}
