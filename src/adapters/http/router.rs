//! Full application router: routes, authentication and HTTP layers.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, HeaderValue, Method, Request},
    middleware, Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::catalog::catalog_routes;
use super::middleware::auth_middleware;
use super::plan::{plan_routes, PlanHandlers, REQUEST_ID_HEADER};
use crate::application::handlers::plan::{
    GeneratePlanHandler, GetPlanHandler, ListUserPlansHandler,
};
use crate::domain::plan::PlanEngine;
use crate::ports::{PlanRepository, SessionValidator};

/// Collaborators the HTTP API is built from.
#[derive(Clone)]
pub struct AppDependencies {
    pub engine: Arc<PlanEngine>,
    pub repository: Arc<dyn PlanRepository>,
    pub session_validator: Arc<dyn SessionValidator>,
    pub default_list_limit: u32,
    pub max_list_limit: u32,
}

impl AppDependencies {
    pub fn new(
        engine: Arc<PlanEngine>,
        repository: Arc<dyn PlanRepository>,
        session_validator: Arc<dyn SessionValidator>,
    ) -> Self {
        Self {
            engine,
            repository,
            session_validator,
            default_list_limit: 10,
            max_list_limit: 100,
        }
    }

    pub fn with_list_limits(mut self, default_limit: u32, max_limit: u32) -> Self {
        self.default_list_limit = default_limit;
        self.max_list_limit = max_limit;
        self
    }
}

/// Routes plus authentication, without transport layers.
///
/// Every route sees the caller injected by `auth_middleware`; routes that
/// need a caller enforce it with `RequireAuth`.
pub fn api_router(deps: AppDependencies) -> Router {
    let handlers = PlanHandlers::new(
        Arc::new(GeneratePlanHandler::new(
            deps.engine.clone(),
            deps.repository.clone(),
        )),
        Arc::new(GetPlanHandler::new(deps.repository.clone())),
        Arc::new(
            ListUserPlansHandler::new(deps.repository)
                .with_limits(deps.default_list_limit, deps.max_list_limit),
        ),
    );

    Router::new()
        .merge(catalog_routes(deps.engine))
        .nest("/api/plans", plan_routes(handlers))
        .layer(middleware::from_fn_with_state(
            deps.session_validator,
            auth_middleware,
        ))
}

/// Wraps a router with request ids, tracing, CORS and a request timeout.
pub fn with_http_layers(router: Router, request_timeout: Duration, cors_origins: &[String]) -> Router {
    router
        .layer(TimeoutLayer::new(request_timeout))
        .layer(cors_layer(cors_origins))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("-");
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id,
                )
            }),
        )
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .expose_headers([header::HeaderName::from_static(REQUEST_ID_HEADER)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockSessionValidator;
    use crate::adapters::storage::InMemoryPlanRepository;
    use crate::domain::plan::EnginePolicy;
    use axum::http::StatusCode;
    use tower::ServiceExt;

    fn app() -> Router {
        let deps = AppDependencies::new(
            Arc::new(PlanEngine::standard(EnginePolicy::default()).unwrap()),
            Arc::new(InMemoryPlanRepository::new()),
            Arc::new(MockSessionValidator::new()),
        );
        with_http_layers(
            api_router(deps),
            Duration::from_secs(5),
            &["http://localhost:3000".to_string()],
        )
    }

    #[tokio::test]
    async fn responses_carry_a_request_id() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn incoming_request_id_is_propagated() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(REQUEST_ID_HEADER, "req-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()[REQUEST_ID_HEADER], "req-123");
    }

    #[tokio::test]
    async fn cors_preflight_allows_configured_origin() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/plans")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:3000"
        );
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let response = app()
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
