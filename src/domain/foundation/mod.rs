//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, errors and authentication types
//! that form the vocabulary of the plan domain.

mod auth;
mod command;
mod errors;
mod ids;
mod rate;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{PlanId, UserId};
pub use rate::Rate;
pub(crate) use rate::round_half_up;
pub use timestamp::Timestamp;
