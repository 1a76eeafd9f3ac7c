//! In-Memory Plan Repository
//!
//! Stores plan records in process memory. Used by the binary when no durable
//! store is configured, and by tests.
//!
//! Records are lost on restart. Memory is bounded by a capacity: once it is
//! reached, each insert evicts the oldest record.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, PlanId, Timestamp, UserId};
use crate::domain::plan::{PlanDraft, PlanRecord};
use crate::ports::{ListOptions, PlanRepository};

/// Records kept when no capacity is given.
pub const DEFAULT_CAPACITY: usize = 10_000;

/// In-memory storage for plan records, kept in insertion order.
#[derive(Debug, Clone)]
pub struct InMemoryPlanRepository {
    records: Arc<RwLock<VecDeque<PlanRecord>>>,
    capacity: usize,
}

impl InMemoryPlanRepository {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Keeps at most `capacity` records (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Arc::default(),
            capacity: capacity.max(1),
        }
    }
}

impl Default for InMemoryPlanRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlanRepository for InMemoryPlanRepository {
    async fn insert(&self, draft: PlanDraft) -> Result<PlanRecord, DomainError> {
        let record = PlanRecord::from_draft(PlanId::new(), Timestamp::now(), draft);
        let mut records = self.records.write().await;
        while records.len() >= self.capacity {
            if let Some(evicted) = records.pop_front() {
                tracing::debug!(plan_id = %evicted.id(), "Evicted oldest plan at capacity");
            }
        }
        records.push_back(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: &PlanId) -> Result<Option<PlanRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id() == *id).cloned())
    }

    async fn list_by_owner(
        &self,
        owner: &UserId,
        options: &ListOptions,
    ) -> Result<Vec<PlanRecord>, DomainError> {
        let records = self.records.read().await;

        // Newest insertion first, so equal timestamps keep insertion recency.
        let mut owned: Vec<&PlanRecord> = records
            .iter()
            .rev()
            .filter(|r| r.owner_id() == Some(owner))
            .collect();
        owned.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

        Ok(owned
            .into_iter()
            .skip(options.skip as usize)
            .take(options.limit as usize)
            .cloned()
            .collect())
    }
}

/// Repository whose every call fails with `DATABASE_ERROR`.
///
/// Stands in for an unavailable store when testing error paths.
#[derive(Debug, Clone)]
pub struct FailingPlanRepository {
    message: String,
}

impl FailingPlanRepository {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn error(&self) -> DomainError {
        DomainError::new(ErrorCode::DatabaseError, self.message.clone())
    }
}

impl Default for FailingPlanRepository {
    fn default() -> Self {
        Self::new("plan store unavailable")
    }
}

#[async_trait]
impl PlanRepository for FailingPlanRepository {
    async fn insert(&self, _draft: PlanDraft) -> Result<PlanRecord, DomainError> {
        Err(self.error())
    }

    async fn find_by_id(&self, _id: &PlanId) -> Result<Option<PlanRecord>, DomainError> {
        Err(self.error())
    }

    async fn list_by_owner(
        &self,
        _owner: &UserId,
        _options: &ListOptions,
    ) -> Result<Vec<PlanRecord>, DomainError> {
        Err(self.error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plan::{EnginePolicy, PlanEngine, RawPlanRequest};

    fn draft(owner: Option<&str>, seats: i64) -> PlanDraft {
        PlanEngine::standard(EnginePolicy::default())
            .unwrap()
            .generate(
                &RawPlanRequest {
                    category: "カフェ・スイーツ - コーヒー専門店".to_string(),
                    seats,
                    average_ticket: 900,
                    hours: "モーニング:8:00-11:00".to_string(),
                    area: "駅近".to_string(),
                },
                owner.map(|o| UserId::new(o).unwrap()),
            )
            .unwrap()
    }

    #[tokio::test]
    async fn insert_assigns_identity_and_keeps_content() {
        let repo = InMemoryPlanRepository::new();
        let original = draft(Some("user-1"), 12);

        let record = repo.insert(original.clone()).await.unwrap();

        assert_eq!(record.inputs(), &original.inputs);
        assert_eq!(record.kpis(), &original.kpis);
    }

    #[tokio::test]
    async fn insert_assigns_distinct_ids() {
        let repo = InMemoryPlanRepository::new();
        let a = repo.insert(draft(None, 12)).await.unwrap();
        let b = repo.insert(draft(None, 12)).await.unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[tokio::test]
    async fn find_by_id_returns_stored_record() {
        let repo = InMemoryPlanRepository::new();
        let record = repo.insert(draft(None, 12)).await.unwrap();

        let found = repo.find_by_id(&record.id()).await.unwrap();

        assert_eq!(found, Some(record));
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_unknown() {
        let repo = InMemoryPlanRepository::new();
        assert_eq!(repo.find_by_id(&PlanId::new()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn list_by_owner_is_newest_first_and_scoped() {
        let repo = InMemoryPlanRepository::new();
        let first = repo.insert(draft(Some("user-1"), 10)).await.unwrap();
        repo.insert(draft(Some("user-2"), 11)).await.unwrap();
        let second = repo.insert(draft(Some("user-1"), 12)).await.unwrap();
        repo.insert(draft(None, 13)).await.unwrap();

        let owner = UserId::new("user-1").unwrap();
        let listed = repo.list_by_owner(&owner, &ListOptions::default()).await.unwrap();

        let ids: Vec<PlanId> = listed.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![second.id(), first.id()]);
    }

    #[tokio::test]
    async fn list_by_owner_applies_skip_and_limit() {
        let repo = InMemoryPlanRepository::new();
        for seats in 1..=5 {
            repo.insert(draft(Some("user-1"), seats)).await.unwrap();
        }
        let owner = UserId::new("user-1").unwrap();

        let page = repo.list_by_owner(&owner, &ListOptions::new(1, 2)).await.unwrap();

        let seats: Vec<u32> = page.iter().map(|r| r.inputs().seats).collect();
        assert_eq!(seats, vec![4, 3]);
    }

    #[tokio::test]
    async fn list_by_owner_is_empty_for_unknown_owner() {
        let repo = InMemoryPlanRepository::new();
        repo.insert(draft(None, 12)).await.unwrap();

        let owner = UserId::new("nobody").unwrap();
        let listed = repo.list_by_owner(&owner, &ListOptions::default()).await.unwrap();

        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn full_store_evicts_the_oldest_record() {
        let repo = InMemoryPlanRepository::with_capacity(2);
        let oldest = repo.insert(draft(Some("user-1"), 10)).await.unwrap();
        let middle = repo.insert(draft(Some("user-1"), 11)).await.unwrap();
        let newest = repo.insert(draft(Some("user-1"), 12)).await.unwrap();

        assert_eq!(repo.find_by_id(&oldest.id()).await.unwrap(), None);

        let owner = UserId::new("user-1").unwrap();
        let listed = repo.list_by_owner(&owner, &ListOptions::default()).await.unwrap();
        let ids: Vec<PlanId> = listed.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![newest.id(), middle.id()]);
    }

    #[tokio::test]
    async fn zero_capacity_still_keeps_the_latest_record() {
        let repo = InMemoryPlanRepository::with_capacity(0);
        let record = repo.insert(draft(None, 12)).await.unwrap();
        assert_eq!(repo.find_by_id(&record.id()).await.unwrap(), Some(record));
    }

    #[tokio::test]
    async fn failing_repository_reports_database_error() {
        let repo = FailingPlanRepository::default();

        let err = repo.insert(draft(None, 12)).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(repo.find_by_id(&PlanId::new()).await.is_err());
    }
}
