//! Identifiers for plans and their owners.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Unique identifier for a persisted business plan.
///
/// Assigned by the persistence collaborator, never by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanId(Uuid);

impl PlanId {
    /// A fresh random (v4) id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PlanId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for PlanId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Owner of a plan: the token subject, opaque to the planner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Rejects blank ids; an anonymous caller has no `UserId` at all.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("user_id"));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "550e8400-e29b-41d4-a716-446655440000";

    #[test]
    fn fresh_plan_ids_differ() {
        assert_ne!(PlanId::new(), PlanId::new());
    }

    #[test]
    fn plan_id_text_and_json_forms_match() {
        let id: PlanId = SAMPLE.parse().unwrap();

        assert_eq!(id.to_string(), SAMPLE);
        assert_eq!(serde_json::to_value(id).unwrap(), SAMPLE);
        assert!("plan-1".parse::<PlanId>().is_err());
    }

    #[test]
    fn user_id_keeps_the_subject_verbatim() {
        assert_eq!(UserId::new("auth0|42").unwrap().as_str(), "auth0|42");
    }

    #[test]
    fn blank_user_id_is_rejected() {
        assert_eq!(UserId::new(" \t"), Err(ValidationError::empty_field("user_id")));
    }
}
