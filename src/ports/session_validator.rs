//! Identity provider boundary.
//!
//! Tokens are issued elsewhere; the planner only asks who a bearer token
//! belongs to. The answer becomes the owner of any plan the caller creates.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Resolves a bearer token to the calling user.
///
/// Error contract:
/// - bad signature, malformed token or missing subject: `AuthError::InvalidToken`
/// - expired: `AuthError::TokenExpired`
/// - the provider cannot answer right now: `AuthError::ServiceUnavailable`
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// `token` is the raw credential, without the `Bearer ` scheme.
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use std::sync::Arc;

    /// Accepts any token of the form `user:<id>`.
    struct PrefixValidator;

    #[async_trait]
    impl SessionValidator for PrefixValidator {
        async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
            let id = token.strip_prefix("user:").ok_or(AuthError::InvalidToken)?;
            let id = UserId::new(id).map_err(|_| AuthError::InvalidToken)?;
            Ok(AuthenticatedUser::new(id, None))
        }
    }

    #[tokio::test]
    async fn usable_as_a_trait_object() {
        let validator: Arc<dyn SessionValidator> = Arc::new(PrefixValidator);

        let user = validator.validate("user:owner-1").await.unwrap();

        assert_eq!(user.id.as_str(), "owner-1");
        assert_eq!(validator.validate("owner-1").await, Err(AuthError::InvalidToken));
    }
}
