//! The caller, as seen by the domain.
//!
//! A `SessionValidator` turns a bearer token into an `AuthenticatedUser`.
//! Plans only keep the opaque `UserId`; the domain never issues or checks
//! credentials itself.

use super::UserId;
use thiserror::Error;

/// A caller whose token has been verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Subject of the token; becomes the owner of plans the caller creates.
    pub id: UserId,
    pub email: Option<String>,
}

impl AuthenticatedUser {
    pub fn new(id: UserId, email: Option<String>) -> Self {
        Self { id, email }
    }
}

/// Why a bearer token could not be turned into a caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    /// The identity provider could not answer; the token may still be good.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }
}
