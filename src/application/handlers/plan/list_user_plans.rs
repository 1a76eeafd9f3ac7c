//! ListUserPlansHandler - Query handler for listing a user's plans.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::plan::{PlanError, PlanRecord};
use crate::ports::{ListOptions, PlanRepository};

/// Query to list plans owned by a user.
#[derive(Debug, Clone)]
pub struct ListUserPlansQuery {
    pub user_id: UserId,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl ListUserPlansQuery {
    /// First page with the handler's default limit.
    pub fn first_page(user_id: UserId) -> Self {
        Self {
            user_id,
            skip: None,
            limit: None,
        }
    }

    pub fn paginated(user_id: UserId, skip: u32, limit: u32) -> Self {
        Self {
            user_id,
            skip: Some(skip),
            limit: Some(limit),
        }
    }
}

/// Handler for listing user plans, newest first.
pub struct ListUserPlansHandler {
    repository: Arc<dyn PlanRepository>,
    default_limit: u32,
    max_limit: u32,
}

impl ListUserPlansHandler {
    pub fn new(repository: Arc<dyn PlanRepository>) -> Self {
        Self {
            repository,
            default_limit: ListOptions::default().limit,
            max_limit: 100,
        }
    }

    /// Overrides the page size used when none is given and the largest
    /// page a caller may request.
    pub fn with_limits(mut self, default_limit: u32, max_limit: u32) -> Self {
        self.max_limit = max_limit.max(1);
        self.default_limit = default_limit.clamp(1, self.max_limit);
        self
    }

    fn to_list_options(&self, query: &ListUserPlansQuery) -> ListOptions {
        let limit = query
            .limit
            .unwrap_or(self.default_limit)
            .clamp(1, self.max_limit);
        ListOptions::new(query.skip.unwrap_or(0), limit)
    }

    pub async fn handle(&self, query: ListUserPlansQuery) -> Result<Vec<PlanRecord>, PlanError> {
        let options = self.to_list_options(&query);
        let plans = self
            .repository
            .list_by_owner(&query.user_id, &options)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "Failed to list plans");
                PlanError::from(err)
            })?;
        Ok(plans)
    }
}
