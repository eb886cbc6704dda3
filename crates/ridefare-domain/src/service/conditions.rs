//! Current weather/traffic readings

use ridefare_types::Conditions;

/// Supplies the weather and traffic keys for a city
pub trait ConditionsProvider {
    fn current_conditions(&self, city: &str) -> Conditions;
}

/// Returns the same readings for every city
#[derive(Debug, Clone)]
pub struct FixedConditions {
    conditions: Conditions,
}

impl FixedConditions {
    pub fn new(weather: impl Into<String>, traffic: impl Into<String>) -> Self {
        Self {
            conditions: Conditions::new(weather, traffic),
        }
    }
}

impl Default for FixedConditions {
    /// Clear weather, moderate traffic
    fn default() -> Self {
        Self::new("clear", "moderate")
    }
}

impl ConditionsProvider for FixedConditions {
    fn current_conditions(&self, _city: &str) -> Conditions {
        self.conditions.clone()
    }
}
