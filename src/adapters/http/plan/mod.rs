//! HTTP adapter for plan endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreatePlanRequest, ErrorResponse, ListPlansQuery, PlanListResponse, PlanResponse};
pub use handlers::{PlanHandlers, REQUEST_ID_HEADER};
pub use routes::plan_routes;
