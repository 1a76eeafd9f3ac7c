//! Opening-hours mini-format.
//!
//! Wire format: a comma-separated list of 1 to 4 segments, each
//! `label:HH:MM-HH:MM`, for example
//! `ランチタイム:11:00-14:00,ディナー:17:00-22:00`.
//!
//! The label runs up to the first `:`; the remainder must contain exactly
//! one `-`. Slot order is preserved by both `decode` and `encode`. The
//! 30-minute grid used by the UI is not enforced here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Maximum number of opening slots per day.
pub const MAX_SLOTS: usize = 4;

/// Decode failure, scoped to the offending segment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("opening hours are empty")]
    Empty,

    #[error("too many segments: {count} (at most {max})")]
    TooManySegments { count: usize, max: usize },

    #[error("segment {index} ('{segment}'): {reason}")]
    InvalidSegment {
        index: usize,
        segment: String,
        reason: String,
    },
}

impl FormatError {
    fn segment(index: usize, segment: &str, reason: impl Into<String>) -> Self {
        FormatError::InvalidSegment {
            index,
            segment: segment.to_string(),
            reason: reason.into(),
        }
    }
}

/// A time of day with minute precision. `24:00` is accepted as end of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Creates a time from hours and minutes.
    pub fn new(hour: u16, minute: u16) -> Option<Self> {
        let valid = (hour < 24 && minute < 60) || (hour == 24 && minute == 0);
        valid.then_some(Self(hour * 60 + minute))
    }

    /// The full hour `hour:00`, clamped to `24:00`.
    pub const fn on_the_hour(hour: u16) -> Self {
        if hour > 24 {
            Self(24 * 60)
        } else {
            Self(hour * 60)
        }
    }

    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    pub fn minute(&self) -> u16 {
        self.0 % 60
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> u16 {
        self.0
    }
}

impl FromStr for TimeOfDay {
    type Err = String;

    /// Parses `H:MM` or `HH:MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| format!("'{}' is not a HH:MM time", s))?;
        let digits = |part: &str, max_len: usize| {
            !part.is_empty() && part.len() <= max_len && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !digits(h, 2) || m.len() != 2 || !digits(m, 2) {
            return Err(format!("'{}' is not a HH:MM time", s));
        }
        let hour: u16 = h.parse().map_err(|_| format!("'{}' has an invalid hour", s))?;
        let minute: u16 = m.parse().map_err(|_| format!("'{}' has invalid minutes", s))?;
        TimeOfDay::new(hour, minute).ok_or_else(|| format!("'{}' is not a valid time of day", s))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A labeled contiguous time window during which the business operates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningSlot {
    pub label: String,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl OpeningSlot {
    pub fn new(label: impl Into<String>, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            label: label.into(),
            start,
            end,
        }
    }

    /// Duration in minutes; zero when the window is empty or inverted.
    pub fn duration_minutes(&self) -> u32 {
        u32::from(self.end.minutes().saturating_sub(self.start.minutes()))
    }

    /// Whether this slot intersects the half-open window `[from, to)`.
    pub fn overlaps(&self, from: TimeOfDay, to: TimeOfDay) -> bool {
        self.start < to && from < self.end
    }
}

impl fmt::Display for OpeningSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.label, self.start, self.end)
    }
}

/// Decodes the wire string into slots, preserving segment order.
pub fn decode(raw: &str) -> Result<Vec<OpeningSlot>, FormatError> {
    if raw.trim().is_empty() {
        return Err(FormatError::Empty);
    }

    let segments: Vec<&str> = raw.split(',').collect();
    if segments.len() > MAX_SLOTS {
        return Err(FormatError::TooManySegments {
            count: segments.len(),
            max: MAX_SLOTS,
        });
    }

    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| decode_segment(index, segment))
        .collect()
}

fn decode_segment(index: usize, raw: &str) -> Result<OpeningSlot, FormatError> {
    let segment = raw.trim();
    let (label, window) = segment
        .split_once(':')
        .ok_or_else(|| FormatError::segment(index, segment, "expected 'label:HH:MM-HH:MM'"))?;

    let label = label.trim();
    if label.is_empty() {
        return Err(FormatError::segment(index, segment, "label is empty"));
    }

    let mut bounds = window.split('-');
    let (start, end) = match (bounds.next(), bounds.next(), bounds.next()) {
        (Some(start), Some(end), None) => (start.trim(), end.trim()),
        _ => {
            return Err(FormatError::segment(
                index,
                segment,
                "expected exactly one '-' between start and end",
            ))
        }
    };

    let start: TimeOfDay = start
        .parse()
        .map_err(|reason: String| FormatError::segment(index, segment, reason))?;
    let end: TimeOfDay = end
        .parse()
        .map_err(|reason: String| FormatError::segment(index, segment, reason))?;

    if start >= end {
        return Err(FormatError::segment(
            index,
            segment,
            format!("start {} must be before end {}", start, end),
        ));
    }

    Ok(OpeningSlot::new(label, start, end))
}

/// Encodes slots back to the wire format (zero-padded times, no spaces).
pub fn encode(slots: &[OpeningSlot]) -> String {
    slots
        .iter()
        .map(OpeningSlot::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Normalizes a wire string: trims whitespace around every part and
/// zero-pads times, keeping slot order.
pub fn canonicalize(raw: &str) -> Result<String, FormatError> {
    decode(raw).map(|slots| encode(&slots))
}

/// Total operating minutes across all slots (overlaps are not merged).
pub fn total_minutes(slots: &[OpeningSlot]) -> u32 {
    slots.iter().map(OpeningSlot::duration_minutes).sum()
}
