//! Authentication configuration

use jsonwebtoken::Algorithm;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::str::FromStr;

use super::error::ValidationError;
use super::server::Environment;

/// Smallest signing secret accepted in production.
pub const MIN_PRODUCTION_SECRET_BYTES: usize = 32;

/// Authentication configuration (shared-secret JWT)
#[derive(Deserialize)]
pub struct AuthConfig {
    /// Secret shared with the identity provider that signs access tokens
    pub jwt_secret: SecretString,

    /// Signing algorithm: HS256, HS384 or HS512
    #[serde(default = "default_jwt_algorithm")]
    pub jwt_algorithm: String,

    /// Clock skew tolerated when checking expiry, in seconds
    #[serde(default = "default_leeway")]
    pub leeway_secs: u64,
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: SecretString::new(jwt_secret.into()),
            jwt_algorithm: default_jwt_algorithm(),
            leeway_secs: default_leeway(),
        }
    }

    /// Parsed signing algorithm.
    pub fn algorithm(&self) -> Result<Algorithm, ValidationError> {
        let unsupported = || ValidationError::UnsupportedJwtAlgorithm(self.jwt_algorithm.clone());
        let algorithm = Algorithm::from_str(self.jwt_algorithm.trim()).map_err(|_| unsupported())?;
        match algorithm {
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => Ok(algorithm),
            _ => Err(unsupported()),
        }
    }

    /// Validate authentication configuration
    ///
    /// The secret is always required; production additionally requires a
    /// secret of at least 32 bytes.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let secret = self.jwt_secret.expose_secret();
        if secret.is_empty() {
            return Err(ValidationError::MissingRequired("JWT_SECRET"));
        }
        if *environment == Environment::Production && secret.len() < MIN_PRODUCTION_SECRET_BYTES {
            return Err(ValidationError::JwtSecretTooShort {
                min: MIN_PRODUCTION_SECRET_BYTES,
            });
        }
        self.algorithm()?;
        Ok(())
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_algorithm", &self.jwt_algorithm)
            .field("leeway_secs", &self.leeway_secs)
            .finish()
    }
}

fn default_jwt_algorithm() -> String {
    "HS256".to_string()
}

fn default_leeway() -> u64 {
    60
}
