//! Typed configuration for the planner service.
//!
//! Values come from the process environment, after loading `.env` when one
//! exists. Keys use the `OMISE_PLANNER` prefix and `__` between sections:
//!
//! | Variable | Field |
//! |---|---|
//! | `OMISE_PLANNER__SERVER__PORT` | `server.port` |
//! | `OMISE_PLANNER__SERVER__ENVIRONMENT` | `server.environment` |
//! | `OMISE_PLANNER__AUTH__JWT_SECRET` | `auth.jwt_secret` (required) |
//! | `OMISE_PLANNER__ENGINE__LABOR_RATE` | `engine.labor_rate` |
//! | `OMISE_PLANNER__ENGINE__MAX_STORED_PLANS` | `engine.max_stored_plans` |
//!
//! ```no_run
//! use omise_planner::config::AppConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! config.validate()?;
//! println!("listening on {}", config.server.socket_addr()?);
//! # Ok(())
//! # }
//! ```

mod auth;
mod engine;
mod error;
mod server;

pub use auth::{AuthConfig, MIN_PRODUCTION_SECRET_BYTES};
pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "OMISE_PLANNER";

/// Root configuration. Only `auth` has no usable default.
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    pub auth: AuthConfig,

    /// Policy values for the KPI calculator and plan listings.
    #[serde(default)]
    pub engine: EngineConfig,
}

impl AppConfig {
    /// Reads `.env` (if present) and the `OMISE_PLANNER__*` variables.
    ///
    /// Fails when `auth.jwt_secret` is missing or a value does not parse
    /// into its field type. Range checks are left to [`AppConfig::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotEnv(e.to_string()));
            }
        }

        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Checks every section; the first failure wins.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.auth.validate(&self.server.environment)?;
        self.engine.validate()
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Environment variables are process-global.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const KEYS: [&str; 4] = [
        "OMISE_PLANNER__AUTH__JWT_SECRET",
        "OMISE_PLANNER__SERVER__PORT",
        "OMISE_PLANNER__SERVER__ENVIRONMENT",
        "OMISE_PLANNER__ENGINE__LABOR_RATE",
    ];

    /// Loads with exactly `vars` set among the keys above.
    fn load_with(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        for key in KEYS {
            env::remove_var(key);
        }
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let result = AppConfig::load();
        for key in KEYS {
            env::remove_var(key);
        }
        result
    }

    const SECRET: (&str, &str) = ("OMISE_PLANNER__AUTH__JWT_SECRET", "dev-secret");

    #[test]
    fn loads_with_only_a_secret() {
        let config = load_with(&[SECRET]).unwrap();

        assert_eq!(config.auth.jwt_secret.expose_secret(), "dev-secret");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.engine.operating_days_per_month, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_secret_fails_to_load() {
        assert!(matches!(load_with(&[]), Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn nested_keys_override_defaults() {
        let config = load_with(&[
            SECRET,
            ("OMISE_PLANNER__SERVER__PORT", "3000"),
            ("OMISE_PLANNER__ENGINE__LABOR_RATE", "0.3"),
        ])
        .unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.engine.policy().unwrap().labor_rate.basis_points(), 3000);
    }

    #[test]
    fn production_rejects_a_short_secret() {
        let config = load_with(&[SECRET, ("OMISE_PLANNER__SERVER__ENVIRONMENT", "production")])
            .unwrap();

        assert!(config.is_production());
        assert_eq!(
            config.validate(),
            Err(ValidationError::JwtSecretTooShort {
                min: MIN_PRODUCTION_SECRET_BYTES
            })
        );
    }
}
