//! Request context passed alongside every command.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserId;

/// Who issued a command and which request it belongs to.
///
/// `user_id` is `None` for anonymous callers; plan generation allows them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,

    /// Entry point that issued the command, e.g. `http`.
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl CommandMetadata {
    pub fn new(user_id: UserId) -> Self {
        Self::for_caller(Some(user_id))
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn for_caller(user_id: Option<UserId>) -> Self {
        Self {
            user_id,
            ..Self::default()
        }
    }

    pub fn with_correlation_id(self, id: impl Into<String>) -> Self {
        Self {
            correlation_id: Some(id.into()),
            ..self
        }
    }

    pub fn with_source(self, source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            ..self
        }
    }

    /// The request's correlation id, or a fresh UUID when none was given.
    pub fn correlation_id(&self) -> String {
        match &self.correlation_id {
            Some(id) => id.clone(),
            None => Uuid::new_v4().to_string(),
        }
    }

    /// `"unknown"` when no source was recorded.
    pub fn source(&self) -> &str {
        self.source.as_deref().unwrap_or("unknown")
    }
}
