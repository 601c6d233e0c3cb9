use crate::domain::error::DomainError;
use crate::domain::ports::property_repository::PropertyRepository;
use crate::domain::values::scenario::{calculate_returns, Scenario, ScenarioReturns};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    pub scenario: Scenario,
    pub returns: ScenarioReturns,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Simulation {
    pub property_id: String,
    pub price: f64,
    pub outcomes: Vec<ScenarioOutcome>,
}

pub struct ScenarioUseCase {
    repo: Arc<dyn PropertyRepository>,
}

impl ScenarioUseCase {
    pub fn new(repo: Arc<dyn PropertyRepository>) -> Self {
        Self { repo }
    }

    /// Runs each scenario against the property's listed price. An empty
    /// scenario list falls back to [`Scenario::defaults`]; `holding_period`
    /// replaces every scenario's own period when given.
    pub fn simulate(
        &self,
        property_id: &str,
        scenarios: Vec<Scenario>,
        holding_period: Option<u32>,
    ) -> Result<Simulation, DomainError> {
        let property = self
            .repo
            .get(property_id)?
            .ok_or_else(|| DomainError::NotFound(format!("Property not found: {property_id}")))?;
        let scenarios = if scenarios.is_empty() {
            Scenario::defaults()
        } else {
            scenarios
        };
        let scenarios: Vec<Scenario> = match holding_period {
            Some(months) => scenarios
                .into_iter()
                .map(|s| s.with_holding_period(months))
                .collect(),
            None => scenarios,
        };

        let outcomes = scenarios
            .into_iter()
            .map(|scenario| {
                let returns = calculate_returns(property.price, &scenario)?;
                Ok(ScenarioOutcome { scenario, returns })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        Ok(Simulation {
            property_id: property.id,
            price: property.price,
            outcomes,
        })
    }
}
