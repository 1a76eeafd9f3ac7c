//! Plan module - the plan generation engine.
//!
//! Turns a category, seat count, average ticket, opening hours and area
//! into a business-opening plan: KPIs, a P&L breakdown, payback and
//! qualitative content.
//!
//! # Flow
//!
//! `RequestValidator` (with the hours parser) → `RateTable` and
//! `ContentTable` → `KpiCalculator` → `PlanAssembler`. `PlanEngine` wires
//! these together.

mod assembler;
mod catalog;
mod content;
mod engine;
mod errors;
mod funding;
pub mod hours;
mod kpi;
mod layers;
mod menus;
mod rates;
mod record;
mod request;
mod validator;

pub use assembler::PlanAssembler;
pub use catalog::{catalog, CatalogEntry, Category, MainCategory, CATEGORY_SEPARATOR};
pub use content::{peak_guidance, staff_count, ContentLayer, ContentProfile, ContentTable};
pub use engine::PlanEngine;
pub use errors::{ConfigurationGap, PlanError};
pub use funding::{funding_methods, subsidies_for, Subsidy};
pub use hours::{FormatError, OpeningSlot, TimeOfDay};
pub use kpi::{payback_months, EnginePolicy, KpiCalculator, PlanKpis};
pub use layers::{CategoryScope, LayerKey, ProfileSource};
pub use menus::{default_menu, MenuExample, CONCEPTS};
pub use rates::{RateLayer, RateProfile, RateTable, ServiceTier};
pub use record::{PlanDraft, PlanInputs, PlanRecord};
pub use request::{AreaArchetype, PlanRequest, RawPlanRequest};
pub use validator::{RequestValidator, MAX_AVERAGE_TICKET, MAX_SEATS};
