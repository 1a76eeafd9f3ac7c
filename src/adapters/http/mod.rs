//! HTTP adapters - REST API implementations.
//!
//! Each area of the API has its own module with DTOs, handlers and routes;
//! `router` assembles them with authentication and transport layers.

pub mod catalog;
pub mod middleware;
pub mod plan;
mod router;

pub use catalog::catalog_routes;
pub use plan::{plan_routes, PlanHandlers};
pub use router::{api_router, with_http_layers, AppDependencies};
