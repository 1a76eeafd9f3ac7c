//! HTTP DTOs for plan endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::plan::{ContentProfile, PlanError, PlanInputs, PlanKpis, PlanRecord, RawPlanRequest};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to generate a plan.
///
/// Missing fields default to empty values so validation can name the
/// offending field instead of failing the whole body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePlanRequest {
    /// `"Main - Sub"` category key.
    #[serde(default, alias = "type")]
    pub category: String,
    #[serde(default)]
    pub seats: i64,
    /// Average spend per guest in yen.
    #[serde(default, alias = "atv")]
    pub average_ticket: i64,
    #[serde(default)]
    pub hours: String,
    #[serde(default)]
    pub area: String,
}

impl From<CreatePlanRequest> for RawPlanRequest {
    fn from(req: CreatePlanRequest) -> Self {
        Self {
            category: req.category,
            seats: req.seats,
            average_ticket: req.average_ticket,
            hours: req.hours,
            area: req.area,
        }
    }
}

/// Query parameters for listing plans.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListPlansQuery {
    #[serde(default)]
    pub skip: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A stored plan as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct PlanResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    pub created_at: String,
    pub inputs: PlanInputs,
    pub kpis: PlanKpis,
    pub content: ContentProfile,
}

impl From<PlanRecord> for PlanResponse {
    fn from(record: PlanRecord) -> Self {
        Self {
            id: record.id().to_string(),
            owner_id: record.owner_id().map(|id| id.to_string()),
            created_at: record.created_at().to_rfc3339(),
            inputs: record.inputs().clone(),
            kpis: record.kpis().clone(),
            content: record.content().clone(),
        }
    }
}

/// A page of the caller's plans, newest first.
#[derive(Debug, Clone, Serialize)]
pub struct PlanListResponse {
    pub items: Vec<PlanResponse>,
    pub skip: u32,
    pub count: usize,
}

impl PlanListResponse {
    pub fn new(records: Vec<PlanRecord>, skip: u32) -> Self {
        let items: Vec<PlanResponse> = records.into_iter().map(Into::into).collect();
        Self {
            count: items.len(),
            items,
            skip,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Field-scoped rejection of a plan request.
    pub fn validation(error: &PlanError) -> Self {
        Self {
            code: error.code().to_string(),
            message: error.to_string(),
            details: error
                .field()
                .map(|field| serde_json::json!({ "field": field })),
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
