//! HMAC-signed JWT adapter for the `SessionValidator` port.
//!
//! Tokens are issued by an external identity provider sharing the signing
//! secret. This adapter only verifies them:
//!
//! 1. Signature against the shared secret (HS256, HS384 or HS512)
//! 2. Expiry, with a configurable leeway
//! 3. Presence of the `sub` claim, which becomes the plan owner id
//!
//! # Example
//!
//! ```ignore
//! use jsonwebtoken::Algorithm;
//! use secrecy::Secret;
//! use omise_planner::adapters::auth::JwtSessionValidator;
//!
//! let validator = JwtSessionValidator::new(&Secret::new(secret), Algorithm::HS256, 60)?;
//! let user = validator.validate("eyJ...").await?;
//! ```

use async_trait::async_trait;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Algorithms accepted for shared-secret tokens.
pub const SUPPORTED_ALGORITHMS: [Algorithm; 3] =
    [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// Claims read from an access token.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject - the user ID
    pub sub: String,

    /// Expiry timestamp (Unix epoch seconds)
    pub exp: i64,

    #[serde(default)]
    pub email: Option<String>,
}

/// Construction errors for `JwtSessionValidator`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtSetupError {
    #[error("Unsupported JWT algorithm {0:?}: only HS256, HS384 and HS512 are accepted")]
    UnsupportedAlgorithm(Algorithm),

    #[error("JWT secret must not be empty")]
    EmptySecret,
}

/// Shared-secret JWT session validator.
pub struct JwtSessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtSessionValidator {
    pub fn new(
        secret: &SecretString,
        algorithm: Algorithm,
        leeway_secs: u64,
    ) -> Result<Self, JwtSetupError> {
        if !SUPPORTED_ALGORITHMS.contains(&algorithm) {
            return Err(JwtSetupError::UnsupportedAlgorithm(algorithm));
        }
        let secret = secret.expose_secret();
        if secret.is_empty() {
            return Err(JwtSetupError::EmptySecret);
        }

        let mut validation = Validation::new(algorithm);
        validation.leeway = leeway_secs;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }

    fn decode_claims(&self, token: &str) -> Result<AccessClaims, AuthError> {
        decode::<AccessClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token expired");
                    AuthError::TokenExpired
                }
                ErrorKind::InvalidSignature => {
                    tracing::warn!("Token signature mismatch");
                    AuthError::InvalidToken
                }
                _ => {
                    tracing::warn!("Token validation failed: {}", e);
                    AuthError::InvalidToken
                }
            })
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let claims = self.decode_claims(token)?;

        let user_id = UserId::new(claims.sub.as_str()).map_err(|_| {
            tracing::warn!("Token carries an empty subject");
            AuthError::InvalidToken
        })?;

        Ok(AuthenticatedUser::new(user_id, claims.email))
    }
}

impl std::fmt::Debug for JwtSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionValidator")
            .field("algorithms", &self.validation.algorithms)
            .field("leeway", &self.validation.leeway)
            .finish_non_exhaustive()
    }
}
