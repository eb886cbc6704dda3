//! Analytics Service - admin dashboard and revenue reporting

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use ridefare_domain::model::TariffTable;
use ridefare_domain::repository::{AdminSummaryRepository, BookingRepository};
use ridefare_domain::service::{
    generate_revenue_report, top_routes, vehicle_breakdown, VehicleStats,
};
use ridefare_types::{AdminSummary, Booking, BookingStatus, OutputFormat, Result, RouteStats};

const RECENT_BOOKINGS: usize = 10;
const TOP_ROUTES: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub summary: AdminSummary,
    /// Newest first
    pub recent_bookings: Vec<Booking>,
    pub pending_count: usize,
    /// Recent bookings confirmed on the current UTC day
    pub confirmed_today: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteAnalytics {
    pub top_routes: Vec<(String, RouteStats)>,
    pub all_routes: BTreeMap<String, RouteStats>,
}

#[derive(Serialize)]
struct RevenueReport<'r> {
    summary: &'r AdminSummary,
    top_routes: Vec<(String, RouteStats)>,
    vehicles: &'r BTreeMap<String, VehicleStats>,
}

pub struct AnalyticsService<'a> {
    bookings: &'a dyn BookingRepository,
    summary: &'a dyn AdminSummaryRepository,
    tariffs: &'a TariffTable,
}

impl<'a> AnalyticsService<'a> {
    pub fn new(
        bookings: &'a dyn BookingRepository,
        summary: &'a dyn AdminSummaryRepository,
        tariffs: &'a TariffTable,
    ) -> Self {
        Self {
            bookings,
            summary,
            tariffs,
        }
    }

    pub fn dashboard(&self) -> Result<Dashboard> {
        self.dashboard_at(Utc::now())
    }

    /// Dashboard with "today" taken from `now`
    pub fn dashboard_at(&self, now: DateTime<Utc>) -> Result<Dashboard> {
        let all = self.bookings.find_all()?;
        let pending_count = all.iter().filter(|b| b.status == BookingStatus::Pending).count();
        let recent_bookings: Vec<_> = all.into_iter().take(RECENT_BOOKINGS).collect();
        let confirmed_today = recent_bookings
            .iter()
            .filter_map(|b| b.confirmed_at)
            .filter(|t| t.date_naive() == now.date_naive())
            .count();

        Ok(Dashboard {
            summary: self.summary.load()?,
            recent_bookings,
            pending_count,
            confirmed_today,
        })
    }

    pub fn route_analytics(&self) -> Result<RouteAnalytics> {
        let summary = self.summary.load()?;
        Ok(RouteAnalytics {
            top_routes: top_routes(&summary, TOP_ROUTES),
            all_routes: summary.route_statistics,
        })
    }

    pub fn vehicle_analytics(&self) -> Result<BTreeMap<String, VehicleStats>> {
        Ok(vehicle_breakdown(&self.bookings.find_all()?))
    }

    /// Revenue report as a text table or pretty JSON
    pub fn report(&self, format: OutputFormat) -> Result<String> {
        let summary = self.summary.load()?;
        let vehicles = self.vehicle_analytics()?;

        match format {
            OutputFormat::Table => Ok(generate_revenue_report(&summary, &vehicles, self.tariffs)),
            OutputFormat::Json => {
                let report = RevenueReport {
                    summary: &summary,
                    top_routes: top_routes(&summary, TOP_ROUTES),
                    vehicles: &vehicles,
                };
                Ok(serde_json::to_string_pretty(&report)?)
            }
        }
    }
}
