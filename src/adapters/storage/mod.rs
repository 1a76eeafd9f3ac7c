//! Storage Adapters
//!
//! Implementations of the PlanRepository port.
//!
//! ## Available Adapters
//!
//! - **InMemoryPlanRepository** - Stores plans in memory, bounded by a capacity
//! - **FailingPlanRepository** - Fails every call (error-path testing)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::InMemoryPlanRepository;
//!
//! let repo: Arc<dyn PlanRepository> = Arc::new(InMemoryPlanRepository::with_capacity(1_000));
//! ```

mod in_memory_plan_repository;

pub use in_memory_plan_repository::{
    FailingPlanRepository, InMemoryPlanRepository, DEFAULT_CAPACITY,
};
