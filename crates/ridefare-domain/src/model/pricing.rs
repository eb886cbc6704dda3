//! Complete pricing configuration, loaded once at startup

use ridefare_types::ConfigError;

use super::{ConditionTable, FallbackDistanceTable, KnownPlace, RouteFactors, TariffTable};

#[derive(Debug, Clone, PartialEq)]
pub struct PricingConfig {
    pub tariffs: TariffTable,
    pub weather: ConditionTable,
    pub traffic: ConditionTable,
    pub routes: RouteFactors,
    pub fallback_distances: FallbackDistanceTable,
    pub places: Vec<KnownPlace>,
    /// Vehicle preselected by booking front-ends
    pub default_vehicle: String,
}

impl PricingConfig {
    /// Check the invariants every pricing service relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tariffs.is_empty() {
            return Err(invalid("vehicle tariff table is empty"));
        }
        for profile in self.tariffs.iter() {
            if profile.base_fare.minor() < 0 || profile.rate_per_km.minor() < 0 {
                return Err(invalid(format!(
                    "vehicle '{}' has a negative fare",
                    profile.type_id
                )));
            }
            if profile.capacity == 0 {
                return Err(invalid(format!(
                    "vehicle '{}' has zero capacity",
                    profile.type_id
                )));
            }
        }
        if !self.tariffs.contains(&self.default_vehicle) {
            return Err(invalid(format!(
                "default vehicle '{}' is not in the tariff table",
                self.default_vehicle
            )));
        }

        validate_conditions("weather", &self.weather)?;
        validate_conditions("traffic", &self.traffic)?;

        let r = &self.routes;
        if !(r.local_distance_factor > 0.0 && r.local_distance_factor < 1.0) {
            return Err(invalid(format!(
                "local_distance_factor must be in (0, 1), got {}",
                r.local_distance_factor
            )));
        }
        if !(r.minutes_per_km_in_traffic > 0.0 && r.minutes_per_km_in_traffic.is_finite())
            || !(r.minutes_per_km_no_traffic > 0.0 && r.minutes_per_km_no_traffic.is_finite())
        {
            return Err(invalid("minutes per km must be positive"));
        }

        if let Some(bad) = self
            .fallback_distances
            .entries()
            .iter()
            .find(|e| !(e.distance_km > 0.0 && e.distance_km.is_finite()))
        {
            return Err(invalid(format!(
                "fallback distance {} -> {} must be positive",
                bad.origin, bad.destination
            )));
        }
        if self
            .fallback_distances
            .entries()
            .iter()
            .any(|e| e.origin.trim().is_empty() || e.destination.trim().is_empty())
        {
            return Err(invalid("fallback distance entries need an origin and a destination"));
        }

        Ok(())
    }
}

fn validate_conditions(name: &str, table: &ConditionTable) -> Result<(), ConfigError> {
    if table.is_empty() {
        return Err(invalid(format!("{} multiplier table is empty", name)));
    }
    for (key, multiplier) in table.iter() {
        if !(multiplier >= 0.0 && multiplier.is_finite()) {
            return Err(invalid(format!(
                "{} multiplier '{}' must be a finite number >= 0, got {}",
                name, key, multiplier
            )));
        }
    }
    Ok(())
}

fn invalid(msg: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConditionFactor, DistanceEntry, VehicleProfile};
    use ridefare_types::Money;

    fn config() -> PricingConfig {
        PricingConfig {
            tariffs: TariffTable::new([VehicleProfile {
                type_id: "car".to_string(),
                base_fare: Money::from_major(40.0),
                rate_per_km: Money::from_major(12.0),
                capacity: 4,
                display_name: "Car".to_string(),
                icon: String::new(),
            }]),
            weather: ConditionTable::new([ConditionFactor {
                condition_key: "clear".to_string(),
                multiplier: 1.0,
            }]),
            traffic: ConditionTable::new([ConditionFactor {
                condition_key: "light".to_string(),
                multiplier: 1.0,
            }]),
            routes: RouteFactors::default(),
            fallback_distances: FallbackDistanceTable::default(),
            places: Vec::new(),
            default_vehicle: "car".to_string(),
        }
    }

    #[test]
    fn test_valid() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_missing_default_vehicle() {
        let mut c = config();
        c.default_vehicle = "bike".to_string();
        assert!(matches!(c.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_empty_tables_rejected() {
        let mut c = config();
        c.traffic = ConditionTable::default();
        assert!(c.validate().is_err());

        let mut c = config();
        c.tariffs = TariffTable::default();
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_negative_multiplier_rejected() {
        let mut c = config();
        c.weather = ConditionTable::new([ConditionFactor {
            condition_key: "storm".to_string(),
            multiplier: -0.5,
        }]);
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_local_factor_bounds() {
        let mut c = config();
        c.routes.local_distance_factor = 1.0;
        assert!(c.validate().is_err());
        c.routes.local_distance_factor = 0.0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_bad_fallback_distance() {
        let mut c = config();
        c.fallback_distances = FallbackDistanceTable::new(vec![DistanceEntry {
            origin: "a".to_string(),
            destination: "b".to_string(),
            distance_km: 0.0,
        }]);
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_blank_fallback_place_rejected() {
        let mut c = config();
        c.fallback_distances = FallbackDistanceTable::new(vec![DistanceEntry {
            origin: "  ".to_string(),
            destination: "Pune".to_string(),
            distance_km: 150.0,
        }]);
        assert!(matches!(c.validate(), Err(ConfigError::Invalid(_))));
    }
}
