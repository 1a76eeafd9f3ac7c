//! Plan command and query handlers.

mod generate_plan;
mod get_plan;
mod list_user_plans;

pub use generate_plan::{GeneratePlanCommand, GeneratePlanHandler, GeneratePlanResult};
pub use get_plan::{GetPlanHandler, GetPlanQuery};
pub use list_user_plans::{ListUserPlansHandler, ListUserPlansQuery};
