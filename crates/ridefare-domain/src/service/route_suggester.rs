//! Two-route suggestion: main roads vs local roads

use ridefare_types::{PricingError, RouteCandidate, RouteLabel};

use crate::model::RouteFactors;

#[derive(Debug, Clone, Copy)]
pub struct RouteSuggester {
    factors: RouteFactors,
}

impl RouteSuggester {
    pub fn new(factors: RouteFactors) -> Self {
        Self { factors }
    }

    /// Always main first, local second. Not sorted by price.
    pub fn suggest(&self, total_distance_km: f64) -> Result<[RouteCandidate; 2], PricingError> {
        if !(total_distance_km > 0.0 && total_distance_km.is_finite()) {
            return Err(PricingError::InvalidDistance(total_distance_km));
        }

        let main_km = total_distance_km;
        let local_km = total_distance_km * self.factors.local_distance_factor;

        Ok([
            RouteCandidate {
                label: RouteLabel::Main,
                distance_km: main_km,
                estimated_minutes: minutes(main_km, self.factors.minutes_per_km_in_traffic),
            },
            RouteCandidate {
                label: RouteLabel::Local,
                distance_km: local_km,
                estimated_minutes: minutes(local_km, self.factors.minutes_per_km_no_traffic),
            },
        ])
    }
}

// Rounded to whole minutes; never below 1
fn minutes(distance_km: f64, minutes_per_km: f64) -> u32 {
    let m = (distance_km * minutes_per_km).round();
    if m < 1.0 {
        1
    } else if m > u32::MAX as f64 {
        u32::MAX
    } else {
        m as u32
    }
}
