//! KPI calculator: the numeric core of plan generation.
//!
//! All currency amounts are whole yen in `i64`. Each derived amount is
//! rounded once, half up, from exact integer inputs, so
//! `cogs + gross_profit == monthly_sales` holds exactly.

use serde::Serialize;

use super::rates::RateProfile;
use super::request::PlanRequest;
use crate::domain::foundation::{round_half_up, Rate};

/// Policy constants that apply to every plan regardless of category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnginePolicy {
    /// Labor cost as a share of monthly sales.
    pub labor_rate: Rate,
    pub operating_days_per_month: u32,
}

impl EnginePolicy {
    pub fn new(labor_rate: Rate, operating_days_per_month: u32) -> Self {
        Self {
            labor_rate,
            operating_days_per_month,
        }
    }
}

impl Default for EnginePolicy {
    fn default() -> Self {
        Self {
            labor_rate: Rate::from_basis_points(2800),
            operating_days_per_month: 30,
        }
    }
}

/// Computed financial indicators for one plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanKpis {
    pub operating_hours_per_day: f64,
    /// Full seatings per day.
    pub turnover: f64,
    pub daily_guests: i64,
    pub monthly_sales: i64,
    pub cogs_rate: Rate,
    pub cogs: i64,
    pub gross_profit: i64,
    pub labor_rate: Rate,
    pub labor_cost: i64,
    pub fixed_cost: i64,
    /// Monthly operating income; negative when the plan loses money.
    pub op_income: i64,
    pub initial_investment: i64,
    pub opening_cost: i64,
    /// Months to recover the initial investment; `None` when `op_income <= 0`.
    pub payback_months: Option<i64>,
    pub seat_occupancy_rate: Rate,
}

/// Stateless calculator over a normalized request and its rate profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct KpiCalculator {
    policy: EnginePolicy,
}

impl KpiCalculator {
    pub fn new(policy: EnginePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &EnginePolicy {
        &self.policy
    }

    /// Computes every KPI for the request.
    pub fn calculate(&self, request: &PlanRequest, profile: &RateProfile) -> PlanKpis {
        let minutes = i128::from(request.operating_minutes());
        let visit_minutes = i128::from(profile.service_tier.visit_minutes());
        let occupancy = profile.seat_occupancy_rate;

        // seats × (minutes / visit) × occupancy, rounded once.
        let daily_guests = round_half_up(
            i128::from(request.seats()) * minutes * i128::from(occupancy.basis_points()),
            visit_minutes * 10_000,
        ) as i64;

        let monthly_sales = daily_guests
            * request.average_ticket()
            * i64::from(self.policy.operating_days_per_month);

        let cogs = profile.cogs_rate.apply(monthly_sales);
        let gross_profit = monthly_sales - cogs;
        let labor_cost = self.policy.labor_rate.apply(monthly_sales);
        let fixed_cost = profile.monthly_fixed_cost;
        let op_income = gross_profit - labor_cost - fixed_cost;

        let initial_investment = profile.initial_investment(request.seats());
        let opening_cost = initial_investment + profile.working_capital;
        let operating_hours_per_day = minutes as f64 / 60.0;

        PlanKpis {
            operating_hours_per_day,
            turnover: operating_hours_per_day / profile.service_tier.visit_hours(),
            daily_guests,
            monthly_sales,
            cogs_rate: profile.cogs_rate,
            cogs,
            gross_profit,
            labor_rate: self.policy.labor_rate,
            labor_cost,
            fixed_cost,
            op_income,
            initial_investment,
            opening_cost,
            payback_months: payback_months(initial_investment, op_income),
            seat_occupancy_rate: occupancy,
        }
    }
}

/// `ceil(investment / monthly_income)`, at least one month; `None` when
/// the business never earns the investment back.
pub fn payback_months(investment: i64, monthly_income: i64) -> Option<i64> {
    if monthly_income <= 0 {
        return None;
    }
    let months = investment.max(0).div_euclid(monthly_income)
        + i64::from(investment.max(0).rem_euclid(monthly_income) != 0);
    Some(months.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plan::layers::ProfileSource;
    use crate::domain::plan::rates::ServiceTier;
    use crate::domain::plan::request::RawPlanRequest;
    use crate::domain::plan::validator::RequestValidator;

    fn request(seats: i64, ticket: i64, hours: &str) -> PlanRequest {
        RequestValidator::new()
            .validate(&RawPlanRequest {
                category: "ラーメン・麺 - ラーメン".to_string(),
                seats,
                average_ticket: ticket,
                hours: hours.to_string(),
                area: "住宅街".to_string(),
            })
            .unwrap()
    }

    fn profile(tier: ServiceTier) -> RateProfile {
        RateProfile {
            service_tier: tier,
            cogs_rate: Rate::from_basis_points(3000),
            seat_occupancy_rate: Rate::from_basis_points(7500),
            monthly_fixed_cost: 540_000,
            investment_base: 5_500_000,
            investment_per_seat: 55_000,
            working_capital: 2_000_000,
            source: ProfileSource::Default,
        }
    }

    #[test]
    fn lunch_only_noodle_shop_example() {
        let kpis = KpiCalculator::default().calculate(
            &request(20, 1050, "ランチタイム:11:00-14:00"),
            &profile(ServiceTier::QuickService),
        );

        assert_eq!(kpis.turnover, 3.0);
        assert_eq!(kpis.daily_guests, 45);
        assert_eq!(kpis.monthly_sales, 1_417_500);
        assert_eq!(kpis.cogs, 425_250);
        assert_eq!(kpis.gross_profit, 992_250);
        assert_eq!(kpis.labor_cost, 396_900);
        assert_eq!(kpis.fixed_cost, 540_000);
        assert_eq!(kpis.op_income, 55_350);
        assert_eq!(kpis.initial_investment, 6_600_000);
        assert_eq!(kpis.opening_cost, 8_600_000);
        assert_eq!(kpis.payback_months, Some(120));
    }

    #[test]
    fn longer_visits_reduce_turnover() {
        let kpis = KpiCalculator::default().calculate(
            &request(20, 1050, "ランチタイム:11:00-14:00"),
            &profile(ServiceTier::FullService),
        );
        assert_eq!(kpis.turnover, 2.0);
        assert_eq!(kpis.daily_guests, 30);
    }

    #[test]
    fn guests_round_half_up() {
        // 3 × 0.75 = 2.25 → 2; 2 × 0.75 = 1.5 → 2
        let calc = KpiCalculator::default();
        let quick = profile(ServiceTier::QuickService);
        assert_eq!(calc.calculate(&request(3, 1000, "a:10:00-11:00"), &quick).daily_guests, 2);
        assert_eq!(calc.calculate(&request(2, 1000, "a:10:00-11:00"), &quick).daily_guests, 2);
    }

    #[test]
    fn loss_making_plan_has_no_payback() {
        let kpis = KpiCalculator::default().calculate(
            &request(4, 500, "朝:07:00-08:00"),
            &profile(ServiceTier::QuickService),
        );
        assert!(kpis.op_income <= 0);
        assert_eq!(kpis.payback_months, None);
    }

    #[test]
    fn overlapping_slots_count_twice() {
        let kpis = KpiCalculator::default().calculate(
            &request(10, 1000, "a:11:00-14:00,b:12:00-13:00"),
            &profile(ServiceTier::QuickService),
        );
        assert_eq!(kpis.operating_hours_per_day, 4.0);
    }

    #[test]
    fn policy_values_flow_into_costs() {
        let calc = KpiCalculator::new(EnginePolicy::new(Rate::from_basis_points(3000), 25));
        let kpis = calc.calculate(
            &request(20, 1050, "ランチタイム:11:00-14:00"),
            &profile(ServiceTier::QuickService),
        );
        assert_eq!(kpis.monthly_sales, 45 * 1050 * 25);
        assert_eq!(kpis.labor_cost, kpis.monthly_sales * 3 / 10);
    }

    #[test]
    fn payback_rounds_up() {
        assert_eq!(payback_months(1000, 300), Some(4));
        assert_eq!(payback_months(900, 300), Some(3));
        assert_eq!(payback_months(0, 300), Some(1));
        assert_eq!(payback_months(1000, 0), None);
        assert_eq!(payback_months(1000, -5), None);
    }
}
