//! Analytics engine wiring the three analyzers to one record store.

use tracing::{info, instrument};

use crate::booking::BookingPatternAnalyzer;
use crate::error::Result;
use crate::occupancy::OccupancyAnalyzer;
use crate::reports::DashboardReport;
use crate::revenue::RevenueAnalyzer;
use hotel_domain::DateRange;
use hotel_store::SharedRecordStore;

/// Entry point holding one analyzer of each kind over a shared store.
#[derive(Clone)]
pub struct AnalyticsEngine {
    booking: BookingPatternAnalyzer,
    occupancy: OccupancyAnalyzer,
    revenue: RevenueAnalyzer,
}

impl AnalyticsEngine {
    pub fn new(store: SharedRecordStore) -> Self {
        Self {
            booking: BookingPatternAnalyzer::new(store.clone()),
            occupancy: OccupancyAnalyzer::new(store.clone()),
            revenue: RevenueAnalyzer::new(store),
        }
    }

    pub fn booking(&self) -> &BookingPatternAnalyzer {
        &self.booking
    }

    pub fn occupancy(&self) -> &OccupancyAnalyzer {
        &self.occupancy
    }

    pub fn revenue(&self) -> &RevenueAnalyzer {
        &self.revenue
    }

    /// Run every analytic and collect the results.
    ///
    /// The analyzers are independent and run concurrently; the first failure
    /// aborts the whole report.
    #[instrument(skip(self))]
    pub async fn dashboard(&self, occupancy_range: DateRange, year: i32) -> Result<DashboardReport> {
        let (occupancy, room_type_occupancy, revenue, weekday_patterns, customer_summary, status_distribution) =
            tokio::try_join!(
                self.occupancy
                    .occupancy_rate(occupancy_range.start(), occupancy_range.end()),
                self.occupancy.room_type_occupancy(),
                self.revenue.revenue_report(year),
                self.booking.weekday_patterns(),
                self.booking.customer_statistics(),
                self.booking.status_distribution(),
            )?;

        info!(
            occupancy_days = occupancy.len(),
            revenue_months = revenue.monthly.len(),
            weekdays = weekday_patterns.len(),
            "Dashboard computed"
        );

        Ok(DashboardReport {
            occupancy_range,
            occupancy,
            room_type_occupancy,
            revenue,
            weekday_patterns,
            customer_summary,
            status_distribution,
        })
    }
}
