//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `plan` - Plan generation engine: validation, rate and content tables,
//!   KPI calculation and plan assembly

pub mod foundation;
pub mod plan;
