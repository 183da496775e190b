use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::organization::{CreateOrganizationRequest, OrganizationResponse},
};
use validator::Validate;

use crate::error::{WebError, check_id};

use super::services;

#[utoipa::path(
    get,
    path = "/api/organizations",
    responses(
        (status = 200, description = "List all organizations successfully", body = Vec<OrganizationResponse>)
    ),
    tag = "organizations"
)]
pub async fn list_organizations(State(db): State<Database>) -> Result<Response, WebError> {
    let organizations = services::list_organizations(db.pool()).await?;

    let response: Vec<OrganizationResponse> = organizations
        .into_iter()
        .map(OrganizationResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/organizations/{id}",
    params(
        ("id" = i32, Path, description = "Organization id")
    ),
    responses(
        (status = 200, description = "Organization found", body = OrganizationResponse),
        (status = 404, description = "Organization not found")
    ),
    tag = "organizations"
)]
pub async fn get_organization(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    check_id(id, "organization id")?;

    let organization = services::get_organization(db.pool(), id).await?;

    Ok(Json(OrganizationResponse::from(organization)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/organizations/{id}/children",
    params(
        ("id" = i32, Path, description = "Organization id")
    ),
    responses(
        (status = 200, description = "Direct children in the organization tree", body = Vec<OrganizationResponse>),
        (status = 404, description = "Organization not found")
    ),
    tag = "organizations"
)]
pub async fn get_organization_children(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    check_id(id, "organization id")?;

    let children = services::get_children(db.pool(), id).await?;

    let response: Vec<OrganizationResponse> = children
        .into_iter()
        .map(OrganizationResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/organizations",
    request_body = CreateOrganizationRequest,
    responses(
        (status = 201, description = "Organization created successfully", body = OrganizationResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Parent organization does not exist")
    ),
    tag = "organizations"
)]
pub async fn create_organization(
    State(db): State<Database>,
    Json(req): Json<CreateOrganizationRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let organization = services::create_organization(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(OrganizationResponse::from(organization))).into_response())
}
