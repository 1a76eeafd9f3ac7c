//! HTTP routes for plan endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_plan, get_plan, list_my_plans, PlanHandlers};

/// Creates the plan router, to be mounted at `/api/plans`.
///
/// # Routes
/// - `POST /` - Generate a plan (authentication optional)
/// - `GET /my` - List the caller's plans (authentication required)
/// - `GET /:id` - Get one plan (owned plans only for their owner)
pub fn plan_routes(handlers: PlanHandlers) -> Router {
    Router::new()
        .route("/", post(create_plan))
        .route("/my", get(list_my_plans))
        .route("/:id", get(get_plan))
        .with_state(handlers)
}
