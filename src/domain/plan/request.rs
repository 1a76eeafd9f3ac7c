//! Plan requests: the raw payload as received, and the normalized form the
//! engine computes over.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::catalog::Category;
use super::hours::{self, OpeningSlot};
use crate::domain::foundation::ValidationError;

/// Closed enumeration of location types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaArchetype {
    StationAdjacent,
    Residential,
    OfficeDistrict,
    TouristArea,
}

impl AreaArchetype {
    pub const ALL: [AreaArchetype; 4] = [
        AreaArchetype::StationAdjacent,
        AreaArchetype::Residential,
        AreaArchetype::OfficeDistrict,
        AreaArchetype::TouristArea,
    ];

    /// Display label, also the primary wire spelling.
    pub fn label(&self) -> &'static str {
        match self {
            AreaArchetype::StationAdjacent => "駅近",
            AreaArchetype::Residential => "住宅街",
            AreaArchetype::OfficeDistrict => "オフィス街",
            AreaArchetype::TouristArea => "観光地",
        }
    }

    /// Maps a free-form area label onto the enumeration.
    ///
    /// Accepts the Japanese label or an English alias, trimmed and ASCII
    /// case-insensitive.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let label = raw.trim();
        if label.is_empty() {
            return Err(ValidationError::empty_field("area"));
        }

        let area = match label.to_ascii_lowercase().as_str() {
            "駅近" | "station" | "station_adjacent" => AreaArchetype::StationAdjacent,
            "住宅街" | "residential" => AreaArchetype::Residential,
            "オフィス街" | "office" | "office_district" => AreaArchetype::OfficeDistrict,
            "観光地" | "tourist" | "tourist_area" => AreaArchetype::TouristArea,
            _ => return Err(ValidationError::unknown_value("area", label)),
        };
        Ok(area)
    }
}

impl fmt::Display for AreaArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A plan request exactly as received from a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPlanRequest {
    /// `"Main - Sub"` category key.
    pub category: String,
    pub seats: i64,
    pub average_ticket: i64,
    /// Opening hours in the `label:HH:MM-HH:MM,...` wire format.
    pub hours: String,
    /// Free-form area label.
    pub area: String,
}

/// A validated, normalized plan request.
///
/// Only the validator constructs these, so every instance satisfies the
/// request invariants: known category, positive seats and ticket, 1 to 4
/// well-formed slots sorted by start time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    category: Category,
    seats: u32,
    average_ticket: i64,
    slots: Vec<OpeningSlot>,
    area: AreaArchetype,
}

impl PlanRequest {
    pub(crate) fn new(
        category: Category,
        seats: u32,
        average_ticket: i64,
        slots: Vec<OpeningSlot>,
        area: AreaArchetype,
    ) -> Self {
        Self {
            category,
            seats,
            average_ticket,
            slots,
            area,
        }
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn seats(&self) -> u32 {
        self.seats
    }

    pub fn average_ticket(&self) -> i64 {
        self.average_ticket
    }

    pub fn slots(&self) -> &[OpeningSlot] {
        &self.slots
    }

    pub fn area(&self) -> AreaArchetype {
        self.area
    }

    /// Total operating minutes per day.
    pub fn operating_minutes(&self) -> u32 {
        hours::total_minutes(&self.slots)
    }

    /// Slots re-encoded to the canonical wire format.
    pub fn hours(&self) -> String {
        hours::encode(&self.slots)
    }
}
