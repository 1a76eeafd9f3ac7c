//! Configuration error types

use thiserror::Error;

/// Failure to read configuration into `AppConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Unreadable .env file: {0}")]
    DotEnv(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// A loaded value that is out of range or inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidHost(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("JWT secret must be at least {min} bytes in production")]
    JwtSecretTooShort { min: usize },

    #[error("Unsupported JWT algorithm: {0}")]
    UnsupportedJwtAlgorithm(String),

    #[error("Labor rate must be strictly between 0 and 1")]
    InvalidLaborRate,

    #[error("Operating days per month must be between 1 and 31")]
    InvalidOperatingDays,

    #[error("List limits must satisfy 1 <= default <= max")]
    InvalidListLimits,

    #[error("Plan store capacity must be at least 1")]
    InvalidStoreCapacity,
}
