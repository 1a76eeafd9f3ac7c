//! Plan records: the engine's output.
//!
//! `PlanDraft` is what the engine produces; the persistence collaborator
//! turns it into a `PlanRecord` by assigning an id and creation time.
//! Records are immutable: there are no setters, and a changed plan is a
//! new record.

use serde::Serialize;

use super::content::ContentProfile;
use super::hours::OpeningSlot;
use super::kpi::PlanKpis;
use super::request::{AreaArchetype, PlanRequest};
use crate::domain::foundation::{PlanId, Timestamp, UserId};

/// The request fields echoed back in a plan, in normalized form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanInputs {
    pub category: String,
    pub seats: u32,
    pub average_ticket: i64,
    /// Canonical wire form of `slots`.
    pub hours: String,
    pub slots: Vec<OpeningSlot>,
    pub area: AreaArchetype,
}

impl From<&PlanRequest> for PlanInputs {
    fn from(request: &PlanRequest) -> Self {
        Self {
            category: request.category().key(),
            seats: request.seats(),
            average_ticket: request.average_ticket(),
            hours: request.hours(),
            slots: request.slots().to_vec(),
            area: request.area(),
        }
    }
}

/// A fully computed plan that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanDraft {
    pub owner_id: Option<UserId>,
    pub inputs: PlanInputs,
    pub kpis: PlanKpis,
    pub content: ContentProfile,
}

/// A stored plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanRecord {
    id: PlanId,
    owner_id: Option<UserId>,
    created_at: Timestamp,
    inputs: PlanInputs,
    kpis: PlanKpis,
    content: ContentProfile,
}

impl PlanRecord {
    /// Stamps a draft with its durable identity.
    pub fn from_draft(id: PlanId, created_at: Timestamp, draft: PlanDraft) -> Self {
        Self {
            id,
            owner_id: draft.owner_id,
            created_at,
            inputs: draft.inputs,
            kpis: draft.kpis,
            content: draft.content,
        }
    }

    pub fn id(&self) -> PlanId {
        self.id
    }

    pub fn owner_id(&self) -> Option<&UserId> {
        self.owner_id.as_ref()
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn inputs(&self) -> &PlanInputs {
        &self.inputs
    }

    pub fn kpis(&self) -> &PlanKpis {
        &self.kpis
    }

    pub fn content(&self) -> &ContentProfile {
        &self.content
    }

    /// Whether `caller` may read this plan.
    ///
    /// Anonymous plans are readable by anyone holding the id; owned plans
    /// only by their owner.
    pub fn is_visible_to(&self, caller: Option<&UserId>) -> bool {
        match &self.owner_id {
            None => true,
            Some(owner) => caller == Some(owner),
        }
    }
}
