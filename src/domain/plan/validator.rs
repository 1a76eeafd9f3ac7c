//! Request validation and normalization.

use super::catalog::Category;
use super::errors::PlanError;
use super::hours;
use super::request::{AreaArchetype, PlanRequest, RawPlanRequest};
use crate::domain::foundation::ValidationError;

/// Upper bound on seats. Keeps every downstream amount well inside `i64`.
pub const MAX_SEATS: i64 = 10_000;

/// Upper bound on the average ticket, in yen.
pub const MAX_AVERAGE_TICKET: i64 = 1_000_000;

/// Stateless validator turning a raw payload into a `PlanRequest`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestValidator;

impl RequestValidator {
    pub fn new() -> Self {
        Self
    }

    /// Checks every field and returns the normalized request.
    ///
    /// Scalar fields are checked before the hours string, so a request
    /// with several problems reports the first one in field order.
    /// Slots are stably sorted by start time.
    pub fn validate(&self, raw: &RawPlanRequest) -> Result<PlanRequest, PlanError> {
        let category = Category::parse(&raw.category)?;
        let seats = Self::check_range("seats", raw.seats, MAX_SEATS)?;
        let average_ticket =
            Self::check_range("average_ticket", raw.average_ticket, MAX_AVERAGE_TICKET)?;
        let area = AreaArchetype::parse(&raw.area)?;

        // The decoder owns the slot rules: 1..=MAX_SLOTS slots, each
        // starting before it ends.
        let mut slots = hours::decode(&raw.hours)?;
        slots.sort_by_key(|slot| slot.start);

        // Range check above bounds seats to MAX_SEATS, which fits in u32.
        Ok(PlanRequest::new(category, seats as u32, average_ticket, slots, area))
    }

    fn check_range(field: &'static str, value: i64, max: i64) -> Result<i64, ValidationError> {
        if (1..=max).contains(&value) {
            Ok(value)
        } else {
            Err(ValidationError::out_of_range(field, 1, max, value))
        }
    }
}
