//! Mock session validator for testing.
//!
//! Implements the `SessionValidator` port without a signing secret, so HTTP
//! and handler tests can present fixed bearer tokens.
//!
//! # Example
//!
//! ```ignore
//! use omise_planner::adapters::auth::MockSessionValidator;
//!
//! let validator = MockSessionValidator::new().with_test_user("owner-token", "owner-1");
//!
//! let user = validator.validate("owner-token").await?;
//! assert_eq!(user.id.as_str(), "owner-1");
//! ```

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Maps fixed tokens to users. Unknown tokens return `InvalidToken`.
///
/// Built once with the `with_*` methods and then shared read-only.
#[derive(Debug, Default, Clone)]
pub struct MockSessionValidator {
    tokens: HashMap<String, AuthenticatedUser>,
    /// Returned for every validation when set.
    forced_error: Option<AuthError>,
}

impl MockSessionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.tokens.insert(token.into(), user);
        self
    }

    /// Registers `token` for `user_id` with a `<id>@test.example.com` email.
    ///
    /// Ids that `UserId` rejects are skipped, so the token stays invalid.
    pub fn with_test_user(self, token: impl Into<String>, user_id: &str) -> Self {
        match UserId::new(user_id) {
            Ok(id) => {
                let email = Some(format!("{}@test.example.com", user_id));
                self.with_user(token, AuthenticatedUser::new(id, email))
            }
            Err(_) => self,
        }
    }

    /// Every validation fails with `error`, registered tokens included.
    pub fn with_error(mut self, error: AuthError) -> Self {
        self.forced_error = Some(error);
        self
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = &self.forced_error {
            return Err(error.clone());
        }
        self.tokens.get(token).cloned().ok_or(AuthError::InvalidToken)
    }
}
