//! GetPlanHandler - Query handler for retrieving a stored plan.

use std::sync::Arc;

use crate::domain::foundation::{PlanId, UserId};
use crate::domain::plan::{PlanError, PlanRecord};
use crate::ports::PlanRepository;

/// Query to get a plan by ID.
#[derive(Debug, Clone)]
pub struct GetPlanQuery {
    pub plan_id: PlanId,
    /// The authenticated caller, if any.
    pub caller: Option<UserId>,
}

/// Handler for retrieving plans.
pub struct GetPlanHandler {
    repository: Arc<dyn PlanRepository>,
}

impl GetPlanHandler {
    pub fn new(repository: Arc<dyn PlanRepository>) -> Self {
        Self { repository }
    }

    /// Returns the plan if it exists and the caller may see it.
    ///
    /// A plan owned by someone else is reported as not found, so its
    /// existence is not disclosed.
    pub async fn handle(&self, query: GetPlanQuery) -> Result<PlanRecord, PlanError> {
        let plan = self
            .repository
            .find_by_id(&query.plan_id)
            .await
            .map_err(|err| {
                tracing::error!(plan_id = %query.plan_id, error = %err, "Failed to load plan");
                PlanError::from(err)
            })?
            .ok_or(PlanError::NotFound(query.plan_id))?;

        if !plan.is_visible_to(query.caller.as_ref()) {
            tracing::debug!(plan_id = %query.plan_id, "Plan hidden from non-owner");
            return Err(PlanError::NotFound(query.plan_id));
        }

        Ok(plan)
    }
}
