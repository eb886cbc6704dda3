//! Revenue aggregation and plain-text reporting

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use ridefare_types::{AdminSummary, Booking, BookingStatus, Money, RouteStats};

use crate::model::TariffTable;

/// Totals for one vehicle type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleStats {
    pub bookings: u64,
    pub revenue: Money,
    pub profit: Money,
}

/// Per-vehicle totals over confirmed, priced bookings
pub fn vehicle_breakdown(bookings: &[Booking]) -> BTreeMap<String, VehicleStats> {
    let mut stats: BTreeMap<String, VehicleStats> = BTreeMap::new();
    for booking in bookings {
        if booking.status != BookingStatus::Confirmed {
            continue;
        }
        let Some(pricing) = &booking.pricing else {
            continue;
        };
        let entry = stats.entry(booking.vehicle_type.clone()).or_default();
        entry.bookings += 1;
        entry.revenue += pricing.final_fare;
        entry.profit += pricing.company_profit;
    }
    stats
}

/// Routes ordered by revenue, highest first; ties by route key
pub fn top_routes(summary: &AdminSummary, limit: usize) -> Vec<(String, RouteStats)> {
    let mut routes: Vec<_> = summary
        .route_statistics
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    routes.sort_by(|a, b| {
        b.1.total_revenue
            .cmp(&a.1.total_revenue)
            .then_with(|| a.0.cmp(&b.0))
    });
    routes.truncate(limit);
    routes
}

pub fn generate_revenue_report(
    summary: &AdminSummary,
    vehicles: &BTreeMap<String, VehicleStats>,
    tariffs: &TariffTable,
) -> String {
    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("                 Revenue Report                   \n");
    report.push_str("==================================================\n\n");
    report.push_str("[Summary]\n");
    report.push_str(&format!("  Confirmed bookings:   {}\n", summary.total_bookings));
    report.push_str(&format!("  Total revenue:        {}\n", summary.total_revenue));
    report.push_str(&format!(
        "  Driver earnings:      {}\n",
        summary.total_driver_earnings
    ));
    report.push_str(&format!(
        "  Company profit:       {}\n",
        summary.total_company_profit
    ));
    if summary.total_bookings > 0 {
        report.push_str(&format!(
            "  Average fare:         {}\n",
            summary.total_revenue.average(summary.total_bookings)
        ));
    }
    report.push('\n');

    let routes = top_routes(summary, 5);
    if routes.is_empty() {
        report.push_str("[No confirmed routes yet]\n\n");
    } else {
        report.push_str("[Top Routes]\n");
        report.push_str("-".repeat(70).as_str());
        report.push('\n');
        report.push_str(&format!(
            "{:<36} {:>8} {:>12} {:>12}\n",
            "Route", "Bookings", "Revenue", "Avg Fare"
        ));
        report.push_str("-".repeat(70).as_str());
        report.push('\n');
        for (key, stats) in &routes {
            report.push_str(&format!(
                "{:<36} {:>8} {:>12} {:>12}\n",
                truncate_str(key, 35),
                stats.total_bookings,
                stats.total_revenue.to_string(),
                stats.average_fare.to_string()
            ));
        }
        report.push('\n');
    }

    if !vehicles.is_empty() {
        report.push_str("[By Vehicle]\n");
        report.push_str("-".repeat(60).as_str());
        report.push('\n');
        report.push_str(&format!(
            "{:<20} {:>8} {:>14} {:>14}\n",
            "Vehicle", "Bookings", "Revenue", "Profit"
        ));
        report.push_str("-".repeat(60).as_str());
        report.push('\n');
        for (type_id, stats) in vehicles {
            let name = tariffs
                .get(type_id)
                .map(|p| p.display_name.as_str())
                .unwrap_or(type_id.as_str());
            report.push_str(&format!(
                "{:<20} {:>8} {:>14} {:>14}\n",
                truncate_str(name, 19),
                stats.bookings,
                stats.revenue.to_string(),
                stats.profit.to_string()
            ));
        }
        report.push('\n');
    }

    report.push_str("==================================================\n");
    report
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
