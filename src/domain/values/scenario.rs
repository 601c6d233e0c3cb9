//! Holding-period return simulation.
//!
//! Projects the outcome of buying at the listed price, renting the property
//! out at `rental_yield` while paying `interest_rate` on the full price, and
//! selling after `holding_period_months` at a value grown by
//! `market_growth` per year (compounded annually). All rates are
//! percentages.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub name: String,
    pub interest_rate: f64,
    #[serde(rename = "holdingPeriod")]
    pub holding_period_months: u32,
    pub market_growth: f64,
    pub rental_yield: f64,
}

impl Scenario {
    pub fn new(
        name: impl Into<String>,
        interest_rate: f64,
        holding_period_months: u32,
        market_growth: f64,
        rental_yield: f64,
    ) -> Self {
        Self {
            name: name.into(),
            interest_rate,
            holding_period_months,
            market_growth,
            rental_yield,
        }
    }

    /// Base, optimistic and pessimistic cases shown by default.
    pub fn defaults() -> Vec<Scenario> {
        vec![
            Scenario::new("Base Case", 3.5, 24, 2.5, 4.0),
            Scenario::new("Optimistic", 2.5, 24, 5.0, 5.0),
            Scenario::new("Pessimistic", 5.0, 24, 0.0, 3.0),
        ]
    }

    pub fn with_holding_period(self, months: u32) -> Self {
        Self {
            holding_period_months: months,
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioReturns {
    pub initial_investment: f64,
    pub final_value: f64,
    pub appreciation: f64,
    pub total_rental_income: f64,
    pub total_interest: f64,
    pub net_cash_flow: f64,
    pub total_return: f64,
    #[serde(rename = "totalROI")]
    pub total_roi: f64,
    #[serde(rename = "annualizedROI")]
    pub annualized_roi: f64,
}

pub fn calculate_returns(price: f64, scenario: &Scenario) -> Result<ScenarioReturns, DomainError> {
    if !(price > 0.0) {
        return Err(DomainError::InvalidInput(format!(
            "Price must be positive, got {price}"
        )));
    }
    if scenario.holding_period_months == 0 {
        return Err(DomainError::InvalidInput(format!(
            "Scenario '{}' has a zero holding period",
            scenario.name
        )));
    }

    let months = scenario.holding_period_months as f64;
    let monthly_rental = price * scenario.rental_yield / 100.0 / 12.0;
    let monthly_interest = price * scenario.interest_rate / 100.0 / 12.0;

    let final_value = price * (1.0 + scenario.market_growth / 100.0).powf(months / 12.0);
    let appreciation = final_value - price;
    let total_rental_income = monthly_rental * months;
    let total_interest = monthly_interest * months;
    let net_cash_flow = total_rental_income - total_interest;

    let total_return = appreciation + net_cash_flow;
    let total_roi = total_return / price * 100.0;
    let annualized_roi = total_roi / months * 12.0;

    Ok(ScenarioReturns {
        initial_investment: price,
        final_value,
        appreciation,
        total_rental_income,
        total_interest,
        net_cash_flow,
        total_return,
        total_roi,
        annualized_roi,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_market_returns_only_cash_flow() {
        // 12 months, no growth, 5% yield, 3% interest => 2% net
        let scenario = Scenario::new("flat", 3.0, 12, 0.0, 5.0);
        let r = calculate_returns(100_000.0, &scenario).unwrap();
        assert!((r.final_value - 100_000.0).abs() < 1e-6);
        assert!((r.total_rental_income - 5_000.0).abs() < 1e-6);
        assert!((r.total_interest - 3_000.0).abs() < 1e-6);
        assert!((r.total_roi - 2.0).abs() < 1e-9);
        assert!((r.annualized_roi - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_growth_compounds_annually() {
        let scenario = Scenario::new("growth", 0.0, 24, 10.0, 0.0);
        let r = calculate_returns(1000.0, &scenario).unwrap();
        assert!((r.final_value - 1210.0).abs() < 1e-6);
        assert!((r.total_roi - 21.0).abs() < 1e-6);
        assert!((r.annualized_roi - 10.5).abs() < 1e-6);
    }

    #[test]
    fn test_optimistic_beats_pessimistic() {
        let defaults = Scenario::defaults();
        let opt = calculate_returns(300_000.0, &defaults[1]).unwrap();
        let pes = calculate_returns(300_000.0, &defaults[2]).unwrap();
        assert!(opt.total_return > pes.total_return);
        assert!(pes.net_cash_flow < 0.0);
    }

    #[test]
    fn test_invalid_inputs() {
        let base = Scenario::defaults().remove(0);
        assert!(calculate_returns(0.0, &base).is_err());
        assert!(calculate_returns(100.0, &base.with_holding_period(0)).is_err());
    }
}
