//! GeneratePlanHandler - Command handler for generating and storing a plan.

use std::sync::Arc;

use crate::domain::foundation::CommandMetadata;
use crate::domain::plan::{PlanEngine, PlanError, PlanRecord, RawPlanRequest};
use crate::ports::PlanRepository;

/// Command to generate a plan from raw request fields.
#[derive(Debug, Clone)]
pub struct GeneratePlanCommand {
    pub request: RawPlanRequest,
}

/// Result of successful plan generation.
#[derive(Debug, Clone)]
pub struct GeneratePlanResult {
    pub plan: PlanRecord,
}

/// Handler for generating plans.
///
/// The caller in `CommandMetadata` (if any) becomes the plan owner.
pub struct GeneratePlanHandler {
    engine: Arc<PlanEngine>,
    repository: Arc<dyn PlanRepository>,
}

impl GeneratePlanHandler {
    pub fn new(engine: Arc<PlanEngine>, repository: Arc<dyn PlanRepository>) -> Self {
        Self { engine, repository }
    }

    pub async fn handle(
        &self,
        cmd: GeneratePlanCommand,
        metadata: CommandMetadata,
    ) -> Result<GeneratePlanResult, PlanError> {
        let correlation_id = metadata.correlation_id();

        // 1. Validate and compute; nothing is stored on failure
        let draft = self
            .engine
            .generate(&cmd.request, metadata.user_id.clone())
            .map_err(|err| {
                tracing::warn!(
                    correlation_id = %correlation_id,
                    field = err.field().unwrap_or("-"),
                    error = %err,
                    "Rejected plan request"
                );
                err
            })?;

        // 2. Persist; the repository assigns id and creation time
        let plan = self.repository.insert(draft).await.map_err(|err| {
            tracing::error!(correlation_id = %correlation_id, error = %err, "Failed to store plan");
            PlanError::from(err)
        })?;

        tracing::info!(
            correlation_id = %correlation_id,
            source = metadata.source(),
            plan_id = %plan.id(),
            category = %plan.inputs().category,
            owned = plan.owner_id().is_some(),
            "Plan generated"
        );

        Ok(GeneratePlanResult { plan })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, ErrorCode, PlanId, UserId};
    use crate::domain::plan::{EnginePolicy, PlanDraft};
    use crate::ports::ListOptions;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockPlanRepository {
        inserted: Mutex<Vec<PlanDraft>>,
        fail_insert: bool,
    }

    impl MockPlanRepository {
        fn new() -> Self {
            Self {
                inserted: Mutex::new(Vec::new()),
                fail_insert: false,
            }
        }

        fn failing() -> Self {
            Self {
                inserted: Mutex::new(Vec::new()),
                fail_insert: true,
            }
        }

        fn inserted(&self) -> Vec<PlanDraft> {
            self.inserted.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PlanRepository for MockPlanRepository {
        async fn insert(&self, draft: PlanDraft) -> Result<PlanRecord, DomainError> {
            if self.fail_insert {
                return Err(DomainError::new(
                    ErrorCode::DatabaseError,
                    "Simulated insert failure",
                ));
            }
            self.inserted.lock().unwrap().push(draft.clone());
            Ok(PlanRecord::from_draft(
                PlanId::new(),
                crate::domain::foundation::Timestamp::now(),
                draft,
            ))
        }

        async fn find_by_id(&self, _id: &PlanId) -> Result<Option<PlanRecord>, DomainError> {
            Ok(None)
        }

        async fn list_by_owner(
            &self,
            _owner: &UserId,
            _options: &ListOptions,
        ) -> Result<Vec<PlanRecord>, DomainError> {
            Ok(vec![])
        }
    }

    fn engine() -> Arc<PlanEngine> {
        Arc::new(PlanEngine::standard(EnginePolicy::default()).unwrap())
    }

    fn command() -> GeneratePlanCommand {
        GeneratePlanCommand {
            request: RawPlanRequest {
                category: "ラーメン・麺 - ラーメン".to_string(),
                seats: 20,
                average_ticket: 1050,
                hours: "ランチタイム:11:00-14:00".to_string(),
                area: "住宅街".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn stores_plan_owned_by_caller() {
        let repo = Arc::new(MockPlanRepository::new());
        let handler = GeneratePlanHandler::new(engine(), repo.clone());
        let owner = UserId::new("user-1").unwrap();

        let result = handler
            .handle(command(), CommandMetadata::new(owner.clone()))
            .await
            .unwrap();

        assert_eq!(result.plan.owner_id(), Some(&owner));
        assert_eq!(result.plan.kpis().monthly_sales, 1_417_500);
        assert_eq!(repo.inserted().len(), 1);
    }

    #[tokio::test]
    async fn anonymous_caller_yields_unowned_plan() {
        let repo = Arc::new(MockPlanRepository::new());
        let handler = GeneratePlanHandler::new(engine(), repo);

        let result = handler
            .handle(command(), CommandMetadata::anonymous())
            .await
            .unwrap();

        assert!(result.plan.owner_id().is_none());
    }

    #[tokio::test]
    async fn invalid_request_stores_nothing() {
        let repo = Arc::new(MockPlanRepository::new());
        let handler = GeneratePlanHandler::new(engine(), repo.clone());
        let mut cmd = command();
        cmd.request.hours = "11:00-14:00,".to_string();

        let err = handler
            .handle(cmd, CommandMetadata::anonymous())
            .await
            .unwrap_err();

        assert_eq!(err.field(), Some("hours"));
        assert!(repo.inserted().is_empty());
    }

    #[tokio::test]
    async fn storage_failure_is_retryable_infrastructure_error() {
        let repo = Arc::new(MockPlanRepository::failing());
        let handler = GeneratePlanHandler::new(engine(), repo);

        let err = handler
            .handle(command(), CommandMetadata::anonymous())
            .await
            .unwrap_err();

        assert!(matches!(err, PlanError::Infrastructure(_)));
        assert!(err.is_retryable());
    }
}
