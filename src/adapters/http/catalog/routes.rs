//! HTTP routes for catalog and health endpoints.

use std::sync::Arc;

use axum::{routing::get, Router};

use super::handlers::{health, list_categories, list_subsidies, suggest_menus};
use crate::domain::plan::PlanEngine;

/// Creates the catalog router, mounted at the root.
///
/// # Routes
/// - `GET /`, `GET /health` - Service status
/// - `GET /api/categories` - Category taxonomy
/// - `GET /api/subsidies/:area` - Subsidy programmes for an area
/// - `GET /api/menus/:category/:concept` - Menu suggestions
pub fn catalog_routes(engine: Arc<PlanEngine>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/api/categories", get(list_categories))
        .route("/api/subsidies/:area", get(list_subsidies))
        .route("/api/menus/:category/:concept", get(suggest_menus))
        .with_state(engine)
}
