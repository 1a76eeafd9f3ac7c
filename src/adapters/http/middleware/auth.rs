//! Bearer-token authentication for the plan API.
//!
//! `auth_middleware` resolves the `Authorization` header through the
//! [`SessionValidator`] port and stores the caller in request extensions.
//! Handlers read it back with [`RequireAuth`] or [`OptionalAuth`].
//!
//! No header means an anonymous caller. A header that is present but does
//! not validate is a 401 on every route, so a plan is never stored
//! anonymously by a caller who meant to own it.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::SessionValidator;

/// State carried by [`auth_middleware`].
pub type AuthState = Arc<dyn SessionValidator>;

pub async fn auth_middleware(
    State(validator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = match bearer_token(&request) {
        Ok(Some(token)) => token.to_owned(),
        Ok(None) => return next.run(request).await,
        Err(rejection) => return rejection.into_response(),
    };

    match validator.validate(&token).await {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(e) => AuthRejection::from(e).into_response(),
    }
}

/// `Ok(None)` without an `Authorization` header. Any other scheme, or an
/// empty token, is an invalid token.
fn bearer_token(request: &Request) -> Result<Option<&str>, AuthRejection> {
    let Some(value) = request.headers().get(header::AUTHORIZATION) else {
        return Ok(None);
    };
    let token = value
        .to_str()
        .ok()
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .unwrap_or_default();
    if token.is_empty() {
        return Err(AuthRejection::InvalidToken);
    }
    Ok(Some(token))
}

/// The authenticated caller; anonymous requests are rejected with 401.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for RequireAuth {
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<AuthenticatedUser>() {
            Some(user) => Ok(Self(user.clone())),
            None => Err(AuthRejection::Unauthenticated),
        }
    }
}

/// The caller if one authenticated, `None` otherwise. Never rejects.
#[derive(Debug, Clone)]
pub struct OptionalAuth(pub Option<AuthenticatedUser>);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for OptionalAuth {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(parts.extensions.get::<AuthenticatedUser>().cloned()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRejection {
    /// The route needs a caller and none authenticated.
    Unauthenticated,
    InvalidToken,
    TokenExpired,
    ServiceUnavailable,
}

impl AuthRejection {
    fn parts(&self) -> (StatusCode, &'static str, &'static str) {
        match self {
            Self::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHENTICATED",
                "Authentication required",
            ),
            Self::InvalidToken => (StatusCode::UNAUTHORIZED, "AUTH_ERROR", "Invalid token"),
            Self::TokenExpired => (StatusCode::UNAUTHORIZED, "AUTH_ERROR", "Token expired"),
            Self::ServiceUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "AUTH_UNAVAILABLE",
                "Authentication service unavailable",
            ),
        }
    }
}

impl From<AuthError> for AuthRejection {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidToken => Self::InvalidToken,
            AuthError::TokenExpired => Self::TokenExpired,
            AuthError::ServiceUnavailable(reason) => {
                tracing::error!(%reason, "session validator unavailable");
                Self::ServiceUnavailable
            }
        }
    }
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        let body = Json(serde_json::json!({ "code": code, "message": message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockSessionValidator;
    use crate::domain::foundation::UserId;
    use axum::body::Body;
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    fn test_user() -> AuthenticatedUser {
        AuthenticatedUser::new(
            UserId::new("owner-7").unwrap(),
            Some("owner@omise.example.jp".to_string()),
        )
    }

    async fn whoami(OptionalAuth(user): OptionalAuth) -> String {
        user.map(|u| u.id.to_string())
            .unwrap_or_else(|| "anonymous".to_string())
    }

    async fn private(RequireAuth(user): RequireAuth) -> String {
        user.id.to_string()
    }

    fn app(validator: MockSessionValidator) -> Router {
        let state: AuthState = Arc::new(validator);
        Router::new()
            .route("/whoami", get(whoami))
            .route("/private", get(private))
            .layer(axum::middleware::from_fn_with_state(state, auth_middleware))
    }

    async fn call(app: Router, uri: &str, auth: Option<&str>) -> (StatusCode, String) {
        let mut builder = axum::http::Request::builder().uri(uri);
        if let Some(value) = auth {
            builder = builder.header("Authorization", value);
        }
        let response = app
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn valid_token_injects_user() {
        let app = app(MockSessionValidator::new().with_user("good", test_user()));
        let (status, body) = call(app, "/whoami", Some("Bearer good")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "owner-7");
    }

    #[tokio::test]
    async fn missing_header_passes_through_anonymously() {
        let app = app(MockSessionValidator::new());
        let (status, body) = call(app, "/whoami", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "anonymous");
    }

    #[tokio::test]
    async fn invalid_token_is_rejected_even_when_auth_is_optional() {
        let app = app(MockSessionValidator::new());
        let (status, body) = call(app, "/whoami", Some("Bearer bad")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("Invalid token"));
    }

    #[tokio::test]
    async fn non_bearer_scheme_is_rejected() {
        let app = app(MockSessionValidator::new().with_user("good", test_user()));
        let (status, _) = call(app, "/whoami", Some("Basic dXNlcjpwYXNz")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn expired_token_is_reported() {
        let app = app(MockSessionValidator::new().with_error(AuthError::TokenExpired));
        let (status, body) = call(app, "/whoami", Some("Bearer any")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("Token expired"));
    }

    #[tokio::test]
    async fn unavailable_validator_maps_to_503() {
        let app = app(
            MockSessionValidator::new().with_error(AuthError::service_unavailable("down")),
        );
        let (status, _) = call(app, "/whoami", Some("Bearer any")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn require_auth_rejects_anonymous_callers() {
        let app = app(MockSessionValidator::new());
        let (status, body) = call(app, "/private", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("UNAUTHENTICATED"));
    }

    #[tokio::test]
    async fn require_auth_extracts_user_from_extensions() {
        let mut request: axum::http::Request<()> =
            axum::http::Request::builder().uri("/test").body(()).unwrap();
        request.extensions_mut().insert(test_user());
        let (mut parts, _body) = request.into_parts();

        let RequireAuth(user) = RequireAuth::from_request_parts(&mut parts, &()).await.unwrap();

        assert_eq!(user.email.as_deref(), Some("owner@omise.example.jp"));
    }

    #[tokio::test]
    async fn optional_auth_returns_none_when_absent() {
        let request: axum::http::Request<()> =
            axum::http::Request::builder().uri("/test").body(()).unwrap();
        let (mut parts, _body) = request.into_parts();

        let OptionalAuth(user) = OptionalAuth::from_request_parts(&mut parts, &()).await.unwrap();

        assert!(user.is_none());
    }

    #[test]
    fn auth_errors_map_to_rejections() {
        assert_eq!(AuthRejection::from(AuthError::InvalidToken), AuthRejection::InvalidToken);
        assert_eq!(AuthRejection::from(AuthError::TokenExpired), AuthRejection::TokenExpired);
        assert_eq!(
            AuthRejection::from(AuthError::service_unavailable("x")),
            AuthRejection::ServiceUnavailable
        );
    }

    #[tokio::test]
    async fn empty_bearer_token_is_rejected() {
        let app = app(MockSessionValidator::new());
        let (status, body) = call(app, "/whoami", Some("Bearer   ")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("AUTH_ERROR"));
    }
}
