//! Plan engine errors.

use thiserror::Error;

use super::hours::FormatError;
use crate::domain::foundation::{DomainError, ErrorCode, PlanId, ValidationError};

/// Errors surfaced by plan generation and retrieval.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// A request field is missing, malformed or out of range.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The opening-hours string could not be decoded.
    #[error("invalid opening hours: {0}")]
    Format(#[from] FormatError),

    #[error("plan not found: {0}")]
    NotFound(PlanId),

    /// Persistence or another collaborator failed; the caller may retry.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

impl PlanError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        PlanError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PlanError::Validation(ValidationError::EmptyField { .. }) => ErrorCode::EmptyField,
            PlanError::Validation(ValidationError::OutOfRange { .. }) => ErrorCode::OutOfRange,
            PlanError::Validation(ValidationError::InvalidFormat { .. }) => {
                ErrorCode::InvalidFormat
            }
            PlanError::Validation(ValidationError::UnknownValue { .. }) => {
                ErrorCode::UnknownValue
            }
            PlanError::Format(_) => ErrorCode::InvalidFormat,
            PlanError::NotFound(_) => ErrorCode::PlanNotFound,
            PlanError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns the offending request field, for client-correctable errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            PlanError::Validation(err) => Some(err.field()),
            PlanError::Format(_) => Some("hours"),
            _ => None,
        }
    }

    /// Whether the caller can fix the request and try again.
    pub fn is_client_error(&self) -> bool {
        matches!(self, PlanError::Validation(_) | PlanError::Format(_))
    }

    /// Whether retrying the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, PlanError::Infrastructure(_))
    }
}

impl From<DomainError> for PlanError {
    fn from(err: DomainError) -> Self {
        PlanError::Infrastructure(err.to_string())
    }
}

/// A lookup table cannot answer some field for some key.
///
/// Only produced by startup validation of the rate and content tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{table} table cannot resolve '{field}': {reason}")]
pub struct ConfigurationGap {
    pub table: &'static str,
    pub field: &'static str,
    pub reason: &'static str,
}

impl ConfigurationGap {
    /// The default layer leaves `field` undefined.
    pub fn missing(table: &'static str, field: &'static str) -> Self {
        Self {
            table,
            field,
            reason: "no value in the default layer",
        }
    }

    /// Some layer defines `field` with an unusable value.
    pub fn invalid(table: &'static str, field: &'static str, reason: &'static str) -> Self {
        Self {
            table,
            field,
            reason,
        }
    }
}

impl From<ConfigurationGap> for DomainError {
    fn from(gap: ConfigurationGap) -> Self {
        DomainError::new(ErrorCode::ConfigurationGap, gap.to_string())
            .with_detail("table", gap.table)
            .with_detail("field", gap.field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_reports_field() {
        let err: PlanError = ValidationError::out_of_range("seats", 1, 10_000, 0).into();
        assert_eq!(err.field(), Some("seats"));
        assert_eq!(err.code(), ErrorCode::OutOfRange);
        assert!(err.is_client_error());
        assert!(!err.is_retryable());
    }

    #[test]
    fn format_error_is_attributed_to_hours() {
        let err: PlanError = FormatError::Empty.into();
        assert_eq!(err.field(), Some("hours"));
        assert_eq!(err.code(), ErrorCode::InvalidFormat);
    }

    #[test]
    fn domain_error_becomes_retryable_infrastructure_error() {
        let err: PlanError = DomainError::new(ErrorCode::DatabaseError, "connection lost").into();
        assert!(err.is_retryable());
        assert!(!err.is_client_error());
    }

    #[test]
    fn configuration_gap_converts_to_domain_error() {
        let err: DomainError = ConfigurationGap::missing("rate", "cogs_rate").into();
        assert_eq!(err.code, ErrorCode::ConfigurationGap);
        assert_eq!(err.details.get("field").map(String::as_str), Some("cogs_rate"));
    }
}
