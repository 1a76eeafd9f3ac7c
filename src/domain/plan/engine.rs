//! Plan generation engine: validator, resolvers, calculator and assembler
//! wired together.

use std::sync::Arc;

use super::assembler::PlanAssembler;
use super::content::ContentTable;
use super::errors::{ConfigurationGap, PlanError};
use super::kpi::{EnginePolicy, KpiCalculator};
use super::rates::RateTable;
use super::record::PlanDraft;
use super::request::RawPlanRequest;
use super::validator::RequestValidator;
use crate::domain::foundation::UserId;

/// Stateless, shareable plan generator.
///
/// Tables are immutable after construction, so one engine serves all
/// requests concurrently without locking.
#[derive(Debug, Clone)]
pub struct PlanEngine {
    validator: RequestValidator,
    rates: Arc<RateTable>,
    content: Arc<ContentTable>,
    calculator: KpiCalculator,
    assembler: PlanAssembler,
}

impl PlanEngine {
    pub fn new(rates: RateTable, content: ContentTable, policy: EnginePolicy) -> Self {
        Self {
            validator: RequestValidator::new(),
            rates: Arc::new(rates),
            content: Arc::new(content),
            calculator: KpiCalculator::new(policy),
            assembler: PlanAssembler::new(),
        }
    }

    /// Engine over the built-in tables. Fails only if a table is incomplete.
    pub fn standard(policy: EnginePolicy) -> Result<Self, ConfigurationGap> {
        Ok(Self::new(RateTable::standard()?, ContentTable::standard()?, policy))
    }

    /// Validates the request and computes a complete plan draft.
    ///
    /// Either every section is produced or an error is returned.
    pub fn generate(
        &self,
        raw: &RawPlanRequest,
        owner_id: Option<UserId>,
    ) -> Result<PlanDraft, PlanError> {
        let request = self.validator.validate(raw)?;

        let profile = self.rates.resolve(request.category(), request.area());
        let content = self.content.select(&request);
        tracing::debug!(
            category = %request.category(),
            area = %request.area(),
            rate_source = %profile.source,
            content_source = %content.source,
            "Resolved plan tables"
        );

        let kpis = self.calculator.calculate(&request, &profile);
        Ok(self.assembler.assemble(&request, kpis, content, owner_id))
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn content(&self) -> &ContentTable {
        &self.content
    }

    pub fn policy(&self) -> &EnginePolicy {
        self.calculator.policy()
    }
}
