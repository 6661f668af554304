//! Booking pattern analytics: weekday demand, customer statistics and the
//! reservation status distribution.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::Result;
use crate::numeric::{average, percentage, ratio};
use hotel_domain::{Customer, Reservation, ReservationFilter, ReservationStatus};
use hotel_store::SharedRecordStore;

/// Bookings created on one day of the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayMetric {
    /// 1 = Sunday … 7 = Saturday
    pub day_index: u32,
    pub day_of_week: String,
    pub booking_count: u64,
    pub avg_booking_value: Decimal,
}

/// Customer base summary.
///
/// The averages are `None` when their denominator is zero: no customers for
/// `avg_bookings_per_customer`, no reservations for `avg_booking_value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSummary {
    pub total_customers: u64,
    pub total_reservations: u64,
    pub avg_bookings_per_customer: Option<Decimal>,
    pub avg_booking_value: Option<Decimal>,
}

/// Share of reservations in one status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDistribution {
    pub status: ReservationStatus,
    pub count: u64,
    pub percentage_of_total: Decimal,
}

pub(crate) fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// Eligible bookings grouped by the weekday they were created on, Sunday first.
pub fn weekday_patterns(reservations: &[Reservation]) -> Vec<WeekdayMetric> {
    let mut groups: BTreeMap<u32, (Weekday, u64, Decimal)> = BTreeMap::new();

    for reservation in reservations.iter().filter(|r| r.status.is_eligible()) {
        let day = reservation.created_at.weekday();
        let entry = groups
            .entry(day.number_from_sunday())
            .or_insert((day, 0, Decimal::ZERO));
        entry.1 += 1;
        entry.2 += reservation.total_amount;
    }

    groups
        .into_iter()
        .map(|(day_index, (day, count, sum))| WeekdayMetric {
            day_index,
            day_of_week: weekday_name(day).to_string(),
            booking_count: count,
            avg_booking_value: average(sum, count).unwrap_or_default(),
        })
        .collect()
}

/// Every customer counted once, with the reservations that reference them.
///
/// Reservations pointing at unknown customers are ignored, matching a
/// customers-left-join-reservations read.
pub fn customer_statistics(customers: &[Customer], reservations: &[Reservation]) -> CustomerSummary {
    let known: BTreeSet<i64> = customers.iter().map(|c| c.customer_id).collect();

    let (total_reservations, amount_sum) = reservations
        .iter()
        .filter(|r| known.contains(&r.customer_id))
        .fold((0u64, Decimal::ZERO), |(n, sum), r| (n + 1, sum + r.total_amount));

    let total_customers = known.len() as u64;

    CustomerSummary {
        total_customers,
        total_reservations,
        avg_bookings_per_customer: ratio(
            Decimal::from(total_reservations),
            Decimal::from(total_customers),
        )
        .ok(),
        avg_booking_value: average(amount_sum, total_reservations),
    }
}

/// Count and share of every observed status, in lifecycle order.
pub fn status_distribution(reservations: &[Reservation]) -> Vec<StatusDistribution> {
    let mut counts: BTreeMap<ReservationStatus, u64> = BTreeMap::new();
    for reservation in reservations {
        *counts.entry(reservation.status).or_default() += 1;
    }

    let total = reservations.len() as u64;
    counts
        .into_iter()
        .map(|(status, count)| StatusDistribution {
            status,
            count,
            percentage_of_total: percentage(count, total),
        })
        .collect()
}

/// Booking pattern analyzer over an injected record store.
#[derive(Clone)]
pub struct BookingPatternAnalyzer {
    store: SharedRecordStore,
}

impl BookingPatternAnalyzer {
    pub fn new(store: SharedRecordStore) -> Self {
        Self { store }
    }

    /// Eligible bookings per weekday of creation.
    #[instrument(skip(self))]
    pub async fn weekday_patterns(&self) -> Result<Vec<WeekdayMetric>> {
        let reservations = self.store.reservations(&ReservationFilter::eligible()).await?;
        let rows = weekday_patterns(&reservations);
        debug!(reservations = reservations.len(), rows = rows.len(), "Weekday patterns computed");
        Ok(rows)
    }

    /// Customer totals and per-customer averages.
    #[instrument(skip(self))]
    pub async fn customer_statistics(&self) -> Result<CustomerSummary> {
        let customers = self.store.customers().await?;
        let reservations = self.store.reservations(&ReservationFilter::all()).await?;
        let summary = customer_statistics(&customers, &reservations);
        debug!(
            customers = summary.total_customers,
            reservations = summary.total_reservations,
            "Customer statistics computed"
        );
        Ok(summary)
    }

    /// Distribution of all reservations over their statuses.
    #[instrument(skip(self))]
    pub async fn status_distribution(&self) -> Result<Vec<StatusDistribution>> {
        let reservations = self.store.reservations(&ReservationFilter::all()).await?;
        let rows = status_distribution(&reservations);
        debug!(reservations = reservations.len(), rows = rows.len(), "Status distribution computed");
        Ok(rows)
    }
}
