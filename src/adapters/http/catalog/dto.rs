//! HTTP DTOs for catalog and health endpoints.

use serde::Serialize;

use crate::domain::plan::{CatalogEntry, MenuExample, Subsidy};

/// Service status.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            service: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// The category taxonomy.
#[derive(Debug, Clone, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CatalogEntry>,
}

/// Subsidy programmes for an area.
#[derive(Debug, Clone, Serialize)]
pub struct SubsidiesResponse {
    /// The recognised area label, or `None` when the generic list applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    pub subsidies: Vec<Subsidy>,
}

/// Menu suggestions for a category and concept keyword.
#[derive(Debug, Clone, Serialize)]
pub struct MenuSuggestionsResponse {
    pub category: String,
    pub concept: String,
    pub menu_examples: Vec<MenuExample>,
}
