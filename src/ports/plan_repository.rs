//! Plan repository port (persistence collaborator).
//!
//! The engine hands over a complete `PlanDraft`; the repository assigns a
//! durable id and creation time, stores the resulting `PlanRecord`, and
//! serves it back by id or by owner.
//!
//! # Contract
//!
//! - `insert` is all-or-nothing: either the full record is stored and
//!   returned, or an error is returned and nothing is visible.
//! - Stored records are never mutated.
//! - `list_by_owner` returns most-recent-first and an empty list (not an
//!   error) when the owner has no plans.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PlanId, UserId};
use crate::domain::plan::{PlanDraft, PlanRecord};

/// Persistence port for generated plans.
#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// Assigns identity and creation time to a draft and stores it.
    async fn insert(&self, draft: PlanDraft) -> Result<PlanRecord, DomainError>;

    /// Finds a plan by id. Returns `None` if not found.
    async fn find_by_id(&self, id: &PlanId) -> Result<Option<PlanRecord>, DomainError>;

    /// Lists plans owned by a user, newest first.
    async fn list_by_owner(
        &self,
        owner: &UserId,
        options: &ListOptions,
    ) -> Result<Vec<PlanRecord>, DomainError>;
}

/// Pagination for plan listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    /// Number of records to skip.
    pub skip: u32,

    /// Maximum number of records to return.
    pub limit: u32,
}

impl ListOptions {
    pub fn new(skip: u32, limit: u32) -> Self {
        Self { skip, limit }
    }
}

impl Default for ListOptions {
    fn default() -> Self {
        Self { skip: 0, limit: 10 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_options_default_to_first_ten() {
        assert_eq!(ListOptions::default(), ListOptions::new(0, 10));
    }

    #[test]
    fn plan_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn PlanRepository) {}
    }

    #[test]
    fn plan_repository_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn PlanRepository>();
    }
}
