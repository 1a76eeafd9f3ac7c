//! HTTP handlers for plan endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::{OptionalAuth, RequireAuth};
use crate::application::handlers::plan::{
    GeneratePlanCommand, GeneratePlanHandler, GetPlanHandler, GetPlanQuery, ListUserPlansHandler,
    ListUserPlansQuery,
};
use crate::domain::foundation::{CommandMetadata, PlanId};
use crate::domain::plan::PlanError;

use super::dto::{CreatePlanRequest, ErrorResponse, ListPlansQuery, PlanListResponse, PlanResponse};

/// Header carrying the per-request id set by the request-id layer.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PlanHandlers {
    generate_handler: Arc<GeneratePlanHandler>,
    get_handler: Arc<GetPlanHandler>,
    list_handler: Arc<ListUserPlansHandler>,
}

impl PlanHandlers {
    pub fn new(
        generate_handler: Arc<GeneratePlanHandler>,
        get_handler: Arc<GetPlanHandler>,
        list_handler: Arc<ListUserPlansHandler>,
    ) -> Self {
        Self {
            generate_handler,
            get_handler,
            list_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/plans - Generate and store a plan
pub async fn create_plan(
    State(handlers): State<PlanHandlers>,
    OptionalAuth(user): OptionalAuth,
    headers: HeaderMap,
    body: Result<Json<CreatePlanRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Unreadable plan request body");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(rejection.body_text())),
            )
                .into_response();
        }
    };

    let cmd = GeneratePlanCommand {
        request: req.into(),
    };
    let metadata = CommandMetadata::for_caller(user.map(|u| u.id))
        .with_correlation_id(correlation_id(&headers))
        .with_source("http");

    match handlers.generate_handler.handle(cmd, metadata).await {
        Ok(result) => {
            let response: PlanResponse = result.plan.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_plan_error(e),
    }
}

/// GET /api/plans/:id - Get a plan visible to the caller
pub async fn get_plan(
    State(handlers): State<PlanHandlers>,
    OptionalAuth(user): OptionalAuth,
    Path(plan_id): Path<String>,
) -> Response {
    let plan_id = match plan_id.parse::<PlanId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid plan ID")),
            )
                .into_response()
        }
    };

    let query = GetPlanQuery {
        plan_id,
        caller: user.map(|u| u.id),
    };

    match handlers.get_handler.handle(query).await {
        Ok(plan) => {
            let response: PlanResponse = plan.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_plan_error(e),
    }
}

/// GET /api/plans/my - List the caller's plans, newest first
pub async fn list_my_plans(
    State(handlers): State<PlanHandlers>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<ListPlansQuery>,
) -> Response {
    let query = ListUserPlansQuery {
        user_id: user.id,
        skip: params.skip,
        limit: params.limit,
    };
    let skip = query.skip.unwrap_or(0);

    match handlers.list_handler.handle(query).await {
        Ok(plans) => (StatusCode::OK, Json(PlanListResponse::new(plans, skip))).into_response(),
        Err(e) => handle_plan_error(e),
    }
}

/// The request id assigned upstream, or a fresh one.
fn correlation_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_plan_error(error: PlanError) -> Response {
    match &error {
        PlanError::Validation(_) | PlanError::Format(_) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::validation(&error)),
        )
            .into_response(),
        PlanError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Plan", &id.to_string())),
        )
            .into_response(),
        PlanError::Infrastructure(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(
                ErrorResponse::internal("The plan store is temporarily unavailable")
                    .with_details(serde_json::json!({ "retryable": true })),
            ),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ValidationError;
    use crate::domain::plan::FormatError;

    #[test]
    fn validation_error_maps_to_400() {
        let error = PlanError::from(ValidationError::empty_field("category"));
        let response = handle_plan_error(error);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn format_error_maps_to_400() {
        let response = handle_plan_error(PlanError::from(FormatError::Empty));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = handle_plan_error(PlanError::NotFound(PlanId::new()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn infrastructure_maps_to_500() {
        let response = handle_plan_error(PlanError::infrastructure("db down"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn correlation_id_prefers_request_header() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, "req-42".parse().unwrap());
        assert_eq!(correlation_id(&headers), "req-42");
        assert!(!correlation_id(&HeaderMap::new()).is_empty());
    }
}
