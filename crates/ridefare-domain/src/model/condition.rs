//! Weather and traffic multipliers

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Multiplier applied to the fare under a given condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionFactor {
    pub condition_key: String,
    pub multiplier: f64,
}

/// Condition key -> multiplier lookup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConditionTable {
    factors: BTreeMap<String, f64>,
}

impl ConditionTable {
    /// Multiplier for conditions the table does not model
    pub const NEUTRAL: f64 = 1.0;

    pub fn new(factors: impl IntoIterator<Item = ConditionFactor>) -> Self {
        Self {
            factors: factors
                .into_iter()
                .map(|f| (f.condition_key, f.multiplier))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.factors.get(key).copied()
    }

    /// Configured multiplier, or 1.0 for an unknown key
    pub fn multiplier_or_neutral(&self, key: &str) -> f64 {
        self.get(key).unwrap_or(Self::NEUTRAL)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.factors.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}

impl FromIterator<(String, f64)> for ConditionTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            factors: iter.into_iter().collect(),
        }
    }
}
