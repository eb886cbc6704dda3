//! Fare calculation
//!
//! base = base_fare + rate_per_km x distance
//! weather_adjusted = base x weather multiplier
//! traffic_adjusted = weather_adjusted x traffic multiplier
//! final = traffic_adjusted rounded to paise, then split 75/25 between
//! driver and company with the rounding remainder going to the company.

use ridefare_types::{FareBreakdown, Money, PricingError};

use crate::model::{ConditionTable, TariffTable, VehicleProfile};

/// Driver's share of every final fare
pub const DRIVER_SHARE: f64 = 0.75;

/// Prices a distance against borrowed tariff and condition tables
#[derive(Debug, Clone, Copy)]
pub struct FareCalculator<'a> {
    tariffs: &'a TariffTable,
    weather: &'a ConditionTable,
    traffic: &'a ConditionTable,
}

impl<'a> FareCalculator<'a> {
    pub fn new(
        tariffs: &'a TariffTable,
        weather: &'a ConditionTable,
        traffic: &'a ConditionTable,
    ) -> Self {
        Self {
            tariffs,
            weather,
            traffic,
        }
    }

    pub fn compute(
        &self,
        distance_km: f64,
        vehicle_type: &str,
        weather_key: &str,
        traffic_key: &str,
    ) -> Result<FareBreakdown, PricingError> {
        let profile = self
            .tariffs
            .get(vehicle_type)
            .ok_or_else(|| PricingError::InvalidVehicleType(vehicle_type.to_string()))?;

        if !(distance_km > 0.0 && distance_km.is_finite()) {
            return Err(PricingError::InvalidDistance(distance_km));
        }

        let weather_multiplier = self.weather.multiplier_or_neutral(weather_key);
        let traffic_multiplier = self.traffic.multiplier_or_neutral(traffic_key);
        let amounts = fare_amounts(distance_km, profile, weather_multiplier, traffic_multiplier);
        let representable = amounts
            .iter()
            .all(|amount| Money::try_from_major(*amount).is_some());
        if !representable {
            return Err(PricingError::FareOutOfRange(distance_km));
        }

        Ok(calculate_fare_explicit(
            distance_km,
            profile,
            weather_multiplier,
            traffic_multiplier,
        ))
    }
}

/// Price a trip with explicit multipliers; inputs are assumed valid
pub fn calculate_fare_explicit(
    distance_km: f64,
    profile: &VehicleProfile,
    weather_multiplier: f64,
    traffic_multiplier: f64,
) -> FareBreakdown {
    let [base, weather_adjusted, traffic_adjusted] =
        fare_amounts(distance_km, profile, weather_multiplier, traffic_multiplier);

    let final_fare = Money::from_major(traffic_adjusted);
    let (driver_earnings, company_profit) = split_fare(final_fare);

    FareBreakdown {
        base_cost: Money::from_major(base),
        weather_multiplier,
        traffic_multiplier,
        weather_adjusted_cost: Money::from_major(weather_adjusted),
        traffic_adjusted_cost: Money::from_major(traffic_adjusted),
        final_fare,
        driver_earnings,
        company_profit,
    }
}

/// Unrounded (base, weather_adjusted, traffic_adjusted) in major units
fn fare_amounts(
    distance_km: f64,
    profile: &VehicleProfile,
    weather_multiplier: f64,
    traffic_multiplier: f64,
) -> [f64; 3] {
    let base = profile.base_fare.as_major() + profile.rate_per_km.as_major() * distance_km;
    let weather_adjusted = base * weather_multiplier;
    [base, weather_adjusted, weather_adjusted * traffic_multiplier]
}

/// (driver_earnings, company_profit); always sums to `final_fare`
pub fn split_fare(final_fare: Money) -> (Money, Money) {
    final_fare.split(DRIVER_SHARE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConditionFactor, VehicleProfile};

    fn tariffs() -> TariffTable {
        TariffTable::new([
            VehicleProfile {
                type_id: "car".to_string(),
                base_fare: Money::from_major(40.0),
                rate_per_km: Money::from_major(12.0),
                capacity: 4,
                display_name: "Car".to_string(),
                icon: "🚗".to_string(),
            },
            VehicleProfile {
                type_id: "bike".to_string(),
                base_fare: Money::from_major(20.0),
                rate_per_km: Money::from_major(7.5),
                capacity: 1,
                display_name: "Bike".to_string(),
                icon: "🏍️".to_string(),
            },
        ])
    }

    fn table(entries: &[(&str, f64)]) -> ConditionTable {
        ConditionTable::new(entries.iter().map(|(k, m)| ConditionFactor {
            condition_key: k.to_string(),
            multiplier: *m,
        }))
    }

    fn weather() -> ConditionTable {
        table(&[("clear", 1.0), ("light_rain", 1.2), ("storm", 1.8)])
    }

    fn traffic() -> ConditionTable {
        table(&[("light", 1.0), ("busy", 1.1), ("severe", 2.2)])
    }

    #[test]
    fn test_reference_fare() {
        let (t, w, tr) = (tariffs(), weather(), traffic());
        let calc = FareCalculator::new(&t, &w, &tr);
        let fare = calc.compute(10.0, "car", "light_rain", "busy").unwrap();

        assert_eq!(fare.base_cost, Money::from_minor(16000));
        assert_eq!(fare.weather_adjusted_cost, Money::from_minor(19200));
        assert_eq!(fare.traffic_adjusted_cost, Money::from_minor(21120));
        assert_eq!(fare.final_fare, Money::from_minor(21120));
        assert_eq!(fare.driver_earnings, Money::from_minor(15840));
        assert_eq!(fare.company_profit, Money::from_minor(5280));
        assert_eq!(fare.weather_multiplier, 1.2);
        assert_eq!(fare.traffic_multiplier, 1.1);
    }

    #[test]
    fn test_negative_distance() {
        let (t, w, tr) = (tariffs(), weather(), traffic());
        let calc = FareCalculator::new(&t, &w, &tr);
        assert_eq!(
            calc.compute(-1.0, "car", "clear", "light"),
            Err(PricingError::InvalidDistance(-1.0))
        );
    }

    #[test]
    fn test_zero_and_nan_distance() {
        let (t, w, tr) = (tariffs(), weather(), traffic());
        let calc = FareCalculator::new(&t, &w, &tr);
        assert!(matches!(
            calc.compute(0.0, "car", "clear", "light"),
            Err(PricingError::InvalidDistance(_))
        ));
        assert!(matches!(
            calc.compute(f64::NAN, "car", "clear", "light"),
            Err(PricingError::InvalidDistance(_))
        ));
    }

    #[test]
    fn test_unrepresentable_fare_rejected() {
        let (t, w, tr) = (tariffs(), weather(), traffic());
        let calc = FareCalculator::new(&t, &w, &tr);
        assert_eq!(
            calc.compute(1e300, "car", "clear", "light"),
            Err(PricingError::FareOutOfRange(1e300))
        );
        // long but finite trips are still priced
        assert!(calc.compute(1e12, "car", "storm", "severe").is_ok());
    }

    #[test]
    fn test_unknown_vehicle() {
        let (t, w, tr) = (tariffs(), weather(), traffic());
        let calc = FareCalculator::new(&t, &w, &tr);
        assert_eq!(
            calc.compute(10.0, "jet", "clear", "light"),
            Err(PricingError::InvalidVehicleType("jet".to_string()))
        );
    }

    #[test]
    fn test_unknown_conditions_are_neutral() {
        let (t, w, tr) = (tariffs(), weather(), traffic());
        let calc = FareCalculator::new(&t, &w, &tr);
        let unknown = calc.compute(7.3, "bike", "hail", "gridlock").unwrap();
        let neutral = calculate_fare_explicit(7.3, t.get("bike").unwrap(), 1.0, 1.0);
        assert_eq!(unknown, neutral);
    }

    #[test]
    fn test_split_is_exact_across_inputs() {
        let (t, w, tr) = (tariffs(), weather(), traffic());
        let calc = FareCalculator::new(&t, &w, &tr);
        for vehicle in ["car", "bike"] {
            for weather_key in ["clear", "light_rain", "storm", "unknown"] {
                for traffic_key in ["light", "busy", "severe"] {
                    for step in 1..200 {
                        let distance = step as f64 * 0.37;
                        let fare = calc
                            .compute(distance, vehicle, weather_key, traffic_key)
                            .unwrap();
                        assert_eq!(
                            fare.driver_earnings + fare.company_profit,
                            fare.final_fare
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_split_rounding_goes_to_company() {
        // 0.75 x 1.01 = 0.7575 -> driver 0.76, company 0.25
        let (driver, company) = split_fare(Money::from_minor(101));
        assert_eq!(driver.minor(), 76);
        assert_eq!(company.minor(), 25);
    }
}
