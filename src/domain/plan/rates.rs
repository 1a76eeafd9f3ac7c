//! Rate table: financial assumptions per category and area.
//!
//! # Standard table
//!
//! | Scope | Tier | COGS | Investment (base + per seat) |
//! |-------|------|------|------------------------------|
//! | default | full | 30% | 5,000,000 + 50,000 |
//! | 和食 / 洋食 | full | - | ×1.2 |
//! | 中華 / アジア・エスニック | full | - | ×1.1 |
//! | ラーメン・麺 | quick | - | ×1.1 |
//! | 焼肉・焼き鳥・肉 | full | 32% | ×1.3 |
//! | カフェ・スイーツ | quick | 28% | ×1.0 |
//! | バー・酒場 | long stay | - | - |
//! | ファストフード / ベーカリー / キッチンカー | quick | - | - |
//!
//! Fixed cost defaults to 540,000/month and occupancy to 75%; a few
//! area layers raise rent-driven fixed cost where footfall is high.

use serde::Serialize;
use std::collections::HashMap;

use super::catalog::{Category, MainCategory};
use super::errors::ConfigurationGap;
use super::layers::{self, LayerKey, ProfileSource};
use super::request::AreaArchetype;
use crate::domain::foundation::Rate;

const TABLE: &str = "rate";

/// How long a guest occupies a seat, by style of service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceTier {
    /// Counter, noodle, cafe and take-out style.
    QuickService,
    /// Table service with courses or set meals.
    FullService,
    /// Drinking establishments.
    LongStay,
}

impl ServiceTier {
    /// Assumed visit duration in minutes.
    pub fn visit_minutes(&self) -> u32 {
        match self {
            ServiceTier::QuickService => 60,
            ServiceTier::FullService => 90,
            ServiceTier::LongStay => 120,
        }
    }

    /// Assumed visit duration in hours.
    pub fn visit_hours(&self) -> f64 {
        f64::from(self.visit_minutes()) / 60.0
    }
}

/// Resolved financial assumptions for one category and area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateProfile {
    pub service_tier: ServiceTier,
    pub cogs_rate: Rate,
    /// Share of seats filled on average; always in (0, 1].
    pub seat_occupancy_rate: Rate,
    /// Monthly fixed cost (rent, utilities) in yen.
    pub monthly_fixed_cost: i64,
    pub investment_base: i64,
    pub investment_per_seat: i64,
    /// Cash reserved for the first months of operation.
    pub working_capital: i64,
    /// Most specific layer that contributed a value.
    pub source: ProfileSource,
}

impl RateProfile {
    /// Initial investment for a shop of the given size.
    pub fn initial_investment(&self, seats: u32) -> i64 {
        self.investment_base + self.investment_per_seat * i64::from(seats)
    }
}

/// A partial rate profile. Unset fields fall through to the next layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateLayer {
    pub service_tier: Option<ServiceTier>,
    pub cogs_rate: Option<Rate>,
    pub seat_occupancy_rate: Option<Rate>,
    pub monthly_fixed_cost: Option<i64>,
    pub investment_base: Option<i64>,
    pub investment_per_seat: Option<i64>,
    pub working_capital: Option<i64>,
}

impl RateLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tier(mut self, tier: ServiceTier) -> Self {
        self.service_tier = Some(tier);
        self
    }

    /// Cost-of-goods rate in basis points.
    pub fn cogs(mut self, basis_points: u32) -> Self {
        self.cogs_rate = Some(Rate::from_basis_points(basis_points));
        self
    }

    /// Seat occupancy in basis points.
    pub fn occupancy(mut self, basis_points: u32) -> Self {
        self.seat_occupancy_rate = Some(Rate::from_basis_points(basis_points));
        self
    }

    pub fn fixed_cost(mut self, amount: i64) -> Self {
        self.monthly_fixed_cost = Some(amount);
        self
    }

    pub fn investment(mut self, base: i64, per_seat: i64) -> Self {
        self.investment_base = Some(base);
        self.investment_per_seat = Some(per_seat);
        self
    }

    pub fn working_capital(mut self, amount: i64) -> Self {
        self.working_capital = Some(amount);
        self
    }

    fn check(&self) -> Result<(), ConfigurationGap> {
        if self.seat_occupancy_rate.is_some_and(|r| r.is_zero()) {
            return Err(ConfigurationGap::invalid(
                TABLE,
                "seat_occupancy_rate",
                "occupancy must be above zero",
            ));
        }
        let amounts = [
            ("monthly_fixed_cost", self.monthly_fixed_cost),
            ("investment_base", self.investment_base),
            ("investment_per_seat", self.investment_per_seat),
            ("working_capital", self.working_capital),
        ];
        if let Some((field, _)) = amounts.into_iter().find(|(_, v)| v.is_some_and(|v| v < 0)) {
            return Err(ConfigurationGap::invalid(TABLE, field, "amount is negative"));
        }
        Ok(())
    }

    fn complete(&self) -> Result<RateProfile, ConfigurationGap> {
        let missing = |field| ConfigurationGap::missing(TABLE, field);
        Ok(RateProfile {
            service_tier: self.service_tier.ok_or_else(|| missing("service_tier"))?,
            cogs_rate: self.cogs_rate.ok_or_else(|| missing("cogs_rate"))?,
            seat_occupancy_rate: self
                .seat_occupancy_rate
                .ok_or_else(|| missing("seat_occupancy_rate"))?,
            monthly_fixed_cost: self
                .monthly_fixed_cost
                .ok_or_else(|| missing("monthly_fixed_cost"))?,
            investment_base: self.investment_base.ok_or_else(|| missing("investment_base"))?,
            investment_per_seat: self
                .investment_per_seat
                .ok_or_else(|| missing("investment_per_seat"))?,
            working_capital: self.working_capital.ok_or_else(|| missing("working_capital"))?,
            source: ProfileSource::Default,
        })
    }
}

/// Immutable, layered rate table.
///
/// Construction validates the default layer, so `resolve` cannot fail.
#[derive(Debug, Clone)]
pub struct RateTable {
    layers: HashMap<LayerKey, RateLayer>,
    default: RateProfile,
}

impl RateTable {
    /// Builds a table from its default layer and overrides.
    pub fn new(
        default: RateLayer,
        layers: impl IntoIterator<Item = (LayerKey, RateLayer)>,
    ) -> Result<Self, ConfigurationGap> {
        default.check()?;
        let default = default.complete()?;
        let layers: HashMap<LayerKey, RateLayer> = layers.into_iter().collect();
        for layer in layers.values() {
            layer.check()?;
        }
        Ok(Self { layers, default })
    }

    /// The built-in table.
    pub fn standard() -> Result<Self, ConfigurationGap> {
        use AreaArchetype::*;
        use MainCategory::*;
        use ServiceTier::*;

        let default = RateLayer::new()
            .tier(FullService)
            .cogs(3000)
            .occupancy(7500)
            .fixed_cost(540_000)
            .investment(5_000_000, 50_000)
            .working_capital(2_000_000);

        let layers = vec![
            (LayerKey::main(Japanese), RateLayer::new().investment(6_000_000, 60_000)),
            (
                LayerKey::sub(Japanese, "焼き鳥"),
                RateLayer::new().cogs(3200).investment(6_500_000, 65_000),
            ),
            (LayerKey::sub(Japanese, "居酒屋"), RateLayer::new().tier(LongStay)),
            (LayerKey::sub(Japanese, "定食・丼"), RateLayer::new().tier(QuickService)),
            (LayerKey::main(Western), RateLayer::new().investment(6_000_000, 60_000)),
            (LayerKey::sub(Western, "ハンバーガー"), RateLayer::new().tier(QuickService)),
            (LayerKey::main(Chinese), RateLayer::new().investment(5_500_000, 55_000)),
            (LayerKey::main(AsianEthnic), RateLayer::new().investment(5_500_000, 55_000)),
            (
                LayerKey::main(CafeSweets),
                RateLayer::new().tier(QuickService).cogs(2800),
            ),
            (
                LayerKey::main(CafeSweets).in_area(StationAdjacent),
                RateLayer::new().fixed_cost(620_000),
            ),
            (
                LayerKey::main(CafeSweets).in_area(TouristArea),
                RateLayer::new().fixed_cost(600_000),
            ),
            (LayerKey::main(Bar), RateLayer::new().tier(LongStay)),
            (
                LayerKey::main(Bar).in_area(OfficeDistrict),
                RateLayer::new().fixed_cost(580_000),
            ),
            (
                LayerKey::main(Noodles),
                RateLayer::new().tier(QuickService).investment(5_500_000, 55_000),
            ),
            (
                LayerKey::main(Noodles).in_area(StationAdjacent),
                RateLayer::new().fixed_cost(600_000),
            ),
            (
                LayerKey::main(Grill),
                RateLayer::new().cogs(3200).investment(6_500_000, 65_000),
            ),
            (LayerKey::sub(Grill, "焼き鳥"), RateLayer::new().tier(LongStay)),
            (LayerKey::main(FastFood), RateLayer::new().tier(QuickService)),
            (LayerKey::main(Bakery), RateLayer::new().tier(QuickService)),
            (
                LayerKey::main(KitchenCar),
                RateLayer::new()
                    .tier(QuickService)
                    .fixed_cost(200_000)
                    .investment(3_000_000, 0),
            ),
            (
                LayerKey::main(KitchenCar).in_area(TouristArea),
                RateLayer::new().fixed_cost(250_000),
            ),
        ];

        Self::new(default, layers)
    }

    /// Resolves the profile for a category and area, field by field.
    pub fn resolve(&self, category: &Category, area: AreaArchetype) -> RateProfile {
        let found = layers::matching(&self.layers, category, area);
        let d = &self.default;

        RateProfile {
            service_tier: layers::first(&found, |l| l.service_tier).unwrap_or(d.service_tier),
            cogs_rate: layers::first(&found, |l| l.cogs_rate).unwrap_or(d.cogs_rate),
            seat_occupancy_rate: layers::first(&found, |l| l.seat_occupancy_rate)
                .unwrap_or(d.seat_occupancy_rate),
            monthly_fixed_cost: layers::first(&found, |l| l.monthly_fixed_cost)
                .unwrap_or(d.monthly_fixed_cost),
            investment_base: layers::first(&found, |l| l.investment_base)
                .unwrap_or(d.investment_base),
            investment_per_seat: layers::first(&found, |l| l.investment_per_seat)
                .unwrap_or(d.investment_per_seat),
            working_capital: layers::first(&found, |l| l.working_capital)
                .unwrap_or(d.working_capital),
            source: found
                .iter()
                .find(|(_, layer)| **layer != RateLayer::default())
                .map(|(source, _)| *source)
                .unwrap_or(ProfileSource::Default),
        }
    }
}
