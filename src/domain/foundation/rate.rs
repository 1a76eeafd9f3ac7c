//! Rate value object: a fraction in [0, 1] held in basis points.
//!
//! Financial rates (cost-of-goods, labor, seat occupancy) are stored as
//! integer basis points so that applying a rate to a currency amount is
//! exact integer arithmetic with a single round-half-up step.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::ValidationError;

const SCALE: u32 = 10_000;

/// A fraction between 0 and 1 inclusive, with basis-point precision.
///
/// Serializes as a plain fraction (`0.28`), which is what API consumers see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rate(u32);

impl Rate {
    /// Zero.
    pub const ZERO: Self = Self(0);

    /// One (100%).
    pub const ONE: Self = Self(SCALE);

    /// Creates a rate from basis points, clamping to 10 000.
    pub const fn from_basis_points(bp: u32) -> Self {
        if bp > SCALE {
            Self(SCALE)
        } else {
            Self(bp)
        }
    }

    /// Creates a rate from a fraction, rounding to the nearest basis point.
    pub fn from_fraction(field: &'static str, value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::invalid_format(
                field,
                format!("{} is not a fraction between 0 and 1", value),
            ));
        }
        Ok(Self((value * f64::from(SCALE)).round() as u32))
    }

    /// Returns the value in basis points.
    pub fn basis_points(&self) -> u32 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / f64::from(SCALE)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Applies the rate to an amount, rounding half up to the nearest unit.
    pub fn apply(&self, amount: i64) -> i64 {
        let numerator = i128::from(amount) * i128::from(self.0);
        round_half_up(numerator, i128::from(SCALE)) as i64
    }
}

/// Integer division rounding half toward positive infinity.
pub(crate) fn round_half_up(numerator: i128, denominator: i128) -> i128 {
    (2 * numerator + denominator).div_euclid(2 * denominator)
}

impl Default for Rate {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", f64::from(self.0) / 100.0)
    }
}

impl Serialize for Rate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_fraction())
    }
}

impl<'de> Deserialize<'de> for Rate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Rate::from_fraction("rate", value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_clamps_to_one() {
        assert_eq!(Rate::from_basis_points(12_000), Rate::ONE);
    }

    #[test]
    fn rate_from_fraction_rounds_to_basis_points() {
        let rate = Rate::from_fraction("cogs_rate", 0.28).unwrap();
        assert_eq!(rate.basis_points(), 2800);
    }

    #[test]
    fn rate_from_fraction_rejects_out_of_range() {
        assert!(Rate::from_fraction("x", 1.5).is_err());
        assert!(Rate::from_fraction("x", -0.1).is_err());
        assert!(Rate::from_fraction("x", f64::NAN).is_err());
    }

    #[test]
    fn apply_rounds_half_up() {
        // 1 050 * 0.5 = 525 exactly
        assert_eq!(Rate::from_basis_points(5000).apply(1050), 525);
        // 5 * 0.3 = 1.5 -> 2
        assert_eq!(Rate::from_basis_points(3000).apply(5), 2);
        // 4 * 0.3 = 1.2 -> 1
        assert_eq!(Rate::from_basis_points(3000).apply(4), 1);
    }

    #[test]
    fn apply_on_large_amounts_is_exact() {
        let rate = Rate::from_basis_points(2800);
        assert_eq!(rate.apply(1_417_500), 396_900);
    }

    #[test]
    fn round_half_up_handles_negative_numerators() {
        // -1.5 rounds to -1, -1.6 rounds to -2
        assert_eq!(round_half_up(-15, 10), -1);
        assert_eq!(round_half_up(-16, 10), -2);
    }

    #[test]
    fn rate_serializes_as_fraction() {
        let json = serde_json::to_string(&Rate::from_basis_points(7500)).unwrap();
        assert_eq!(json, "0.75");
        let back: Rate = serde_json::from_str("0.3").unwrap();
        assert_eq!(back.basis_points(), 3000);
    }

    #[test]
    fn rate_displays_as_percentage() {
        assert_eq!(format!("{}", Rate::from_basis_points(2800)), "28%");
    }
}
