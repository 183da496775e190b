use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{
    create_organization, get_organization, get_organization_children, list_organizations,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_organizations).post(create_organization))
        .route("/:id", get(get_organization))
        .route("/:id/children", get(get_organization_children))
}
