//! Plan engine policy configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::Rate;
use crate::domain::plan::EnginePolicy;

/// Engine-wide policy values and listing limits.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Labor cost as a fraction of monthly sales
    #[serde(default = "default_labor_rate")]
    pub labor_rate: f64,

    #[serde(default = "default_operating_days")]
    pub operating_days_per_month: u32,

    /// Page size for plan listings when the caller gives none
    #[serde(default = "default_list_limit")]
    pub default_list_limit: u32,

    /// Largest page size a caller may request
    #[serde(default = "default_max_list_limit")]
    pub max_list_limit: u32,

    /// Plans kept by the in-memory store before the oldest is evicted
    #[serde(default = "default_max_stored_plans")]
    pub max_stored_plans: usize,
}

impl EngineConfig {
    /// The policy the KPI calculator runs with.
    pub fn policy(&self) -> Result<EnginePolicy, ValidationError> {
        if !(self.labor_rate > 0.0 && self.labor_rate < 1.0) {
            return Err(ValidationError::InvalidLaborRate);
        }
        let labor_rate = Rate::from_fraction("labor_rate", self.labor_rate)
            .map_err(|_| ValidationError::InvalidLaborRate)?;
        if !(1..=31).contains(&self.operating_days_per_month) {
            return Err(ValidationError::InvalidOperatingDays);
        }
        Ok(EnginePolicy::new(labor_rate, self.operating_days_per_month))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.policy()?;
        if self.default_list_limit == 0 || self.default_list_limit > self.max_list_limit {
            return Err(ValidationError::InvalidListLimits);
        }
        if self.max_stored_plans == 0 {
            return Err(ValidationError::InvalidStoreCapacity);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            labor_rate: default_labor_rate(),
            operating_days_per_month: default_operating_days(),
            default_list_limit: default_list_limit(),
            max_list_limit: default_max_list_limit(),
            max_stored_plans: default_max_stored_plans(),
        }
    }
}

fn default_labor_rate() -> f64 {
    0.28
}

fn default_operating_days() -> u32 {
    30
}

fn default_list_limit() -> u32 {
    10
}

fn default_max_list_limit() -> u32 {
    100
}

fn default_max_stored_plans() -> usize {
    10_000
}
