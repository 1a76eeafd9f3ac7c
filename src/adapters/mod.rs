//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Session validators (shared-secret JWT, mock)
//! - `storage` - Plan repositories (in-memory, failing test double)
//! - `http` - axum REST API

pub mod auth;
pub mod http;
pub mod storage;

pub use auth::{JwtSessionValidator, MockSessionValidator};
pub use storage::{FailingPlanRepository, InMemoryPlanRepository};
