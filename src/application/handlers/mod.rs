//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod plan;

pub use plan::{
    GeneratePlanCommand, GeneratePlanHandler, GeneratePlanResult, GetPlanHandler, GetPlanQuery,
    ListUserPlansHandler, ListUserPlansQuery,
};
