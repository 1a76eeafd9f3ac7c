//! Authentication adapters.
//!
//! Implementations of the `SessionValidator` port:
//!
//! - `jwt` - Shared-secret JWT validation for production
//! - `mock` - Fixed tokens for tests that don't need signed JWTs

mod jwt;
mod mock;

pub use jwt::{AccessClaims, JwtSessionValidator, JwtSetupError, SUPPORTED_ALGORITHMS};
pub use mock::MockSessionValidator;
