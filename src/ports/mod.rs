//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PlanRepository` - Persistence collaborator for generated plans
//! - `SessionValidator` - Identity provider boundary (bearer tokens)

mod plan_repository;
mod session_validator;

pub use plan_repository::{ListOptions, PlanRepository};
pub use session_validator::SessionValidator;
