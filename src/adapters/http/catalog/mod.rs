//! HTTP adapter for catalog, subsidy, menu and health endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CategoriesResponse, HealthResponse, MenuSuggestionsResponse, SubsidiesResponse};
pub use routes::catalog_routes;
