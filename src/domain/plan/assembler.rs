//! Merges computed figures and selected content into a plan draft.

use super::content::ContentProfile;
use super::kpi::PlanKpis;
use super::record::{PlanDraft, PlanInputs};
use super::request::PlanRequest;
use crate::domain::foundation::UserId;

/// Stateless assembler. Identity and timestamp are left to persistence.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanAssembler;

impl PlanAssembler {
    pub fn new() -> Self {
        Self
    }

    pub fn assemble(
        &self,
        request: &PlanRequest,
        kpis: PlanKpis,
        content: ContentProfile,
        owner_id: Option<UserId>,
    ) -> PlanDraft {
        PlanDraft {
            owner_id,
            inputs: PlanInputs::from(request),
            kpis,
            content,
        }
    }
}
