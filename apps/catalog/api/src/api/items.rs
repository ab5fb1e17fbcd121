//! Catalog item routes

use axum::Router;
use domain_catalog::{handlers, CatalogService};

use crate::state::AppState;

/// `/items` and `/items/{id}` backed by the shared catalog
pub fn router(state: &AppState) -> Router {
    let service = CatalogService::new(state.repository.clone());
    handlers::router(service)
}
