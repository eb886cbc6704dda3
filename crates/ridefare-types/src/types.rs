//! Shared value types for pricing, bookings and analytics

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::{Money, StoreError};

/// Which of the two suggested paths a candidate represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteLabel {
    /// Highways and main roads
    Main,
    /// Shorter path over local roads
    Local,
}

impl RouteLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteLabel::Main => "main",
            RouteLabel::Local => "local",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RouteLabel::Main => "Main roads (with traffic)",
            RouteLabel::Local => "Local roads (less traffic)",
        }
    }
}

impl fmt::Display for RouteLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RouteLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "main" => Ok(RouteLabel::Main),
            "local" => Ok(RouteLabel::Local),
            other => Err(format!("unknown route label: {}", other)),
        }
    }
}

/// One proposed path between origin and destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteCandidate {
    pub label: RouteLabel,
    pub distance_km: f64,
    pub estimated_minutes: u32,
}

/// Priced fare for a single route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareBreakdown {
    /// base_fare + rate_per_km x distance
    pub base_cost: Money,
    pub weather_multiplier: f64,
    pub traffic_multiplier: f64,
    pub weather_adjusted_cost: Money,
    pub traffic_adjusted_cost: Money,
    pub final_fare: Money,
    pub driver_earnings: Money,
    pub company_profit: Money,
}

/// A route candidate together with its price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedRoute {
    pub route: RouteCandidate,
    pub fare: FareBreakdown,
}

/// Weather and traffic readings used to pick multipliers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conditions {
    pub weather: String,
    pub traffic: String,
}

impl Conditions {
    pub fn new(weather: impl Into<String>, traffic: impl Into<String>) -> Self {
        Self {
            weather: weather.into(),
            traffic: traffic.into(),
        }
    }
}

/// Booking lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    /// Allowed moves: pending -> confirmed, pending/confirmed -> cancelled
    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (BookingStatus::Pending, BookingStatus::Confirmed)
                | (BookingStatus::Pending, BookingStatus::Cancelled)
                | (BookingStatus::Confirmed, BookingStatus::Cancelled)
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Persisted ride booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub city: String,
    pub origin: String,
    pub destination: String,
    pub vehicle_type: String,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub confirmed_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub cancelled_at: Option<DateTime<Utc>>,

    /// Route picked at confirmation
    #[serde(default)]
    pub selected_route: Option<RouteCandidate>,

    /// Fare for the picked route
    #[serde(default)]
    pub pricing: Option<FareBreakdown>,
}

impl Booking {
    /// Key used for per-route statistics
    pub fn route_key(&self) -> String {
        route_key(&self.origin, &self.destination)
    }

    /// Move to `next`, stamping the matching timestamp
    pub fn transition_to(&mut self, next: BookingStatus, at: DateTime<Utc>) -> Result<(), StoreError> {
        if !self.status.can_transition_to(next) {
            return Err(StoreError::InvalidTransition {
                id: self.id.clone(),
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        match next {
            BookingStatus::Confirmed => self.confirmed_at = Some(at),
            BookingStatus::Cancelled => self.cancelled_at = Some(at),
            BookingStatus::Pending => {}
        }
        Ok(())
    }
}

pub fn route_key(origin: &str, destination: &str) -> String {
    format!("{}_to_{}", origin, destination)
}

/// Registered user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub state: String,
    pub city: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

/// Admin privilege record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminGrant {
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub granted_at: DateTime<Utc>,
    pub is_super_admin: bool,
}

/// Per-route booking totals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteStats {
    pub total_bookings: u64,
    pub total_revenue: Money,
    pub average_fare: Money,
}

/// Aggregated revenue across all confirmed bookings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminSummary {
    pub total_bookings: u64,
    pub total_revenue: Money,
    pub total_driver_earnings: Money,
    pub total_company_profit: Money,
    #[serde(default)]
    pub route_statistics: BTreeMap<String, RouteStats>,
}

impl AdminSummary {
    /// Fold one confirmed fare into the totals
    pub fn record(&mut self, route_key: &str, fare: &FareBreakdown) {
        self.total_bookings += 1;
        self.total_revenue += fare.final_fare;
        self.total_driver_earnings += fare.driver_earnings;
        self.total_company_profit += fare.company_profit;

        let stats = self
            .route_statistics
            .entry(route_key.to_string())
            .or_default();
        stats.total_bookings += 1;
        stats.total_revenue += fare.final_fare;
        stats.average_fare = stats.total_revenue.average(stats.total_bookings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fare(final_minor: i64) -> FareBreakdown {
        let final_fare = Money::from_minor(final_minor);
        let (driver_earnings, company_profit) = final_fare.split(0.75);
        FareBreakdown {
            base_cost: final_fare,
            weather_multiplier: 1.0,
            traffic_multiplier: 1.0,
            weather_adjusted_cost: final_fare,
            traffic_adjusted_cost: final_fare,
            final_fare,
            driver_earnings,
            company_profit,
        }
    }

    #[test]
    fn test_status_transitions() {
        use BookingStatus::*;
        assert!(Pending.can_transition_to(Confirmed));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Confirmed.can_transition_to(Cancelled));
        assert!(!Cancelled.can_transition_to(Confirmed));
        assert!(!Cancelled.can_transition_to(Cancelled));
        assert!(!Confirmed.can_transition_to(Pending));
    }

    #[test]
    fn test_summary_record() {
        let mut summary = AdminSummary::default();
        summary.record("Paldi_to_Kankaria", &fare(20000));
        summary.record("Paldi_to_Kankaria", &fare(10000));
        summary.record("Vadaj_to_Paldi", &fare(5000));

        assert_eq!(summary.total_bookings, 3);
        assert_eq!(summary.total_revenue.minor(), 35000);
        assert_eq!(
            summary.total_driver_earnings + summary.total_company_profit,
            summary.total_revenue
        );
        let stats = &summary.route_statistics["Paldi_to_Kankaria"];
        assert_eq!(stats.total_bookings, 2);
        assert_eq!(stats.average_fare.minor(), 15000);
    }

    #[test]
    fn test_booking_transition_stamps_time() {
        let mut booking = Booking {
            id: "b1".to_string(),
            user_id: "u1".to_string(),
            city: "Pune".to_string(),
            origin: "Shaniwar Wada".to_string(),
            destination: "Aga Khan Palace".to_string(),
            vehicle_type: "auto".to_string(),
            status: BookingStatus::Pending,
            created_at: Utc::now(),
            confirmed_at: None,
            cancelled_at: None,
            selected_route: None,
            pricing: None,
        };
        let now = Utc::now();
        booking.transition_to(BookingStatus::Confirmed, now).unwrap();
        assert_eq!(booking.confirmed_at, Some(now));
        booking.transition_to(BookingStatus::Cancelled, now).unwrap();
        assert_eq!(booking.cancelled_at, Some(now));

        let err = booking
            .transition_to(BookingStatus::Confirmed, now)
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidTransition {
                from: BookingStatus::Cancelled,
                to: BookingStatus::Confirmed,
                ..
            }
        ));
        assert_eq!(booking.status, BookingStatus::Cancelled);
    }

    #[test]
    fn test_route_label_parse() {
        assert_eq!("Main".parse::<RouteLabel>().unwrap(), RouteLabel::Main);
        assert_eq!(" local ".parse::<RouteLabel>().unwrap(), RouteLabel::Local);
        assert!("scenic".parse::<RouteLabel>().is_err());
    }
}
