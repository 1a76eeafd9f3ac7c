//! Omise Planner - business-opening plan generation
//!
//! Turns a handful of facts about a planned shop (category, seats, average
//! ticket, opening hours and area) into a plan with KPIs, a simplified P&L,
//! payback period and category-specific advice, served over a JSON API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
