//! Revenue analytics over completed payments.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, Month};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{AnalyticsError, Result};
use crate::numeric::average;
use hotel_domain::{Payment, PaymentFilter, PaymentStatus, Reservation, ReservationFilter, Room, RoomType};
use hotel_store::SharedRecordStore;

/// Years accepted by the revenue views.
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1000..=9999;

/// Completed payment totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    pub month_number: u32,
    pub month_name: String,
    pub total_revenue: Decimal,
    pub transaction_count: u64,
}

/// Completed payment totals for one room type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomTypeRevenue {
    pub type_name: String,
    pub booking_count: u64,
    pub total_revenue: Decimal,
    pub avg_revenue_per_booking: Decimal,
}

/// Reject anything that is not a four-digit year.
pub fn validate_year(year: i32) -> Result<i32> {
    if YEAR_RANGE.contains(&year) {
        Ok(year)
    } else {
        Err(AnalyticsError::InvalidYear(year))
    }
}

pub(crate) fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map_or("Unknown", |m| m.name())
}

/// Completed payments in `year` summed per month, January first.
///
/// Months without a completed payment are absent.
pub fn monthly_revenue(payments: &[Payment], year: i32) -> Vec<MonthlyRevenue> {
    let mut months: BTreeMap<u32, (Decimal, u64)> = BTreeMap::new();
    for payment in payments {
        if payment.payment_status != PaymentStatus::Completed || payment.payment_date.year() != year {
            continue;
        }
        let entry = months.entry(payment.payment_date.month()).or_default();
        entry.0 += payment.amount;
        entry.1 += 1;
    }

    months
        .into_iter()
        .map(|(month_number, (total_revenue, transaction_count))| MonthlyRevenue {
            month_number,
            month_name: month_name(month_number).to_string(),
            total_revenue,
            transaction_count,
        })
        .collect()
}

/// Completed payments joined payment → reservation → room → room type.
///
/// `booking_count` counts joined payment rows, so a reservation paid in two
/// instalments counts twice. Unresolvable joins are dropped.
pub fn revenue_by_room_type(
    payments: &[Payment],
    reservations: &[Reservation],
    rooms: &[Room],
    room_types: &[RoomType],
) -> Vec<RoomTypeRevenue> {
    let reservation_rooms: HashMap<i64, i64> = reservations
        .iter()
        .map(|r| (r.reservation_id, r.room_id))
        .collect();
    let room_to_type: HashMap<i64, i64> = rooms.iter().map(|r| (r.room_id, r.room_type_id)).collect();
    let type_names: HashMap<i64, &str> = room_types
        .iter()
        .map(|t| (t.room_type_id, t.type_name.as_str()))
        .collect();

    let mut groups: BTreeMap<&str, (u64, Decimal)> = BTreeMap::new();
    for payment in payments.iter().filter(|p| p.payment_status == PaymentStatus::Completed) {
        let type_name = reservation_rooms
            .get(&payment.reservation_id)
            .and_then(|room_id| room_to_type.get(room_id))
            .and_then(|type_id| type_names.get(type_id).copied());
        let Some(type_name) = type_name else {
            continue;
        };
        let entry = groups.entry(type_name).or_default();
        entry.0 += 1;
        entry.1 += payment.amount;
    }

    groups
        .into_iter()
        .map(|(type_name, (booking_count, total_revenue))| RoomTypeRevenue {
            type_name: type_name.to_string(),
            booking_count,
            total_revenue,
            avg_revenue_per_booking: average(total_revenue, booking_count).unwrap_or_default(),
        })
        .collect()
}

/// Revenue analyzer over an injected record store.
#[derive(Clone)]
pub struct RevenueAnalyzer {
    store: SharedRecordStore,
}

impl RevenueAnalyzer {
    pub fn new(store: SharedRecordStore) -> Self {
        Self { store }
    }

    /// Completed revenue and transaction count per month of `year`.
    ///
    /// # Errors
    ///
    /// `InvalidYear` outside 1000..=9999, `DataUnavailable` when a fetch fails.
    #[instrument(skip(self))]
    pub async fn monthly_revenue(&self, year: i32) -> Result<Vec<MonthlyRevenue>> {
        let year = validate_year(year)?;
        let payments = self.store.payments(&PaymentFilter::completed().in_year(year)).await?;

        let rows = monthly_revenue(&payments, year);
        debug!(payments = payments.len(), months = rows.len(), "Monthly revenue computed");
        Ok(rows)
    }

    /// Completed revenue per room type, across all years.
    #[instrument(skip(self))]
    pub async fn revenue_by_room_type(&self) -> Result<Vec<RoomTypeRevenue>> {
        let payments = self.store.payments(&PaymentFilter::completed()).await?;
        let reservations = self.store.reservations(&ReservationFilter::all()).await?;
        let rooms = self.store.rooms().await?;
        let room_types = self.store.room_types().await?;

        let rows = revenue_by_room_type(&payments, &reservations, &rooms, &room_types);
        debug!(payments = payments.len(), types = rows.len(), "Revenue by room type computed");
        Ok(rows)
    }
}
