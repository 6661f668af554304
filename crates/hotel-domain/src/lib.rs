//! # Hotel Reservation System - Domain Model
//!
//! Transactional records (reservations, payments, rooms, room types,
//! customers) and the typed filters used to fetch them. These types are
//! shared by the record store, the analytics engine and the dashboard.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// ENUMS
// =============================================================================

/// Reservation lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl ReservationStatus {
    /// Every status in lifecycle order
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Confirmed,
        Self::Cancelled,
        Self::Completed,
    ];

    /// Statuses that count as a real booking in occupancy and pattern views
    pub const ELIGIBLE: [Self; 2] = [Self::Confirmed, Self::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Cancelled => "CANCELLED",
            Self::Completed => "COMPLETED",
        }
    }

    #[must_use]
    pub fn is_eligible(&self) -> bool {
        Self::ELIGIBLE.contains(self)
    }
}

/// Payment settlement status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
            Self::Refunded => "REFUNDED",
        }
    }
}

/// Payment instrument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    CreditCard,
    DebitCard,
    Upi,
    NetBanking,
}

// =============================================================================
// ENTITY TYPES
// =============================================================================

/// Reservation entity - one booking of one room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub reservation_id: i64,
    pub customer_id: i64,
    pub room_id: i64,

    // Stay
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_guests: Option<i32>,

    pub status: ReservationStatus,
    pub total_amount: Decimal,

    pub created_at: NaiveDateTime,
}

impl Reservation {
    /// Nights between check-in and check-out (negative if the dates are swapped)
    #[must_use]
    pub fn stay_nights(&self) -> i64 {
        (self.check_out_date - self.check_in_date).num_days()
    }
}

/// Payment entity - money received against a reservation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub payment_id: i64,
    pub reservation_id: i64,
    pub amount: Decimal,
    pub payment_date: NaiveDateTime,
    pub payment_status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
}

/// Room entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub room_id: i64,
    pub room_type_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
}

/// Room type reference entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomType {
    pub room_type_id: i64,
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_price: Option<Decimal>,
}

/// Customer entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

// =============================================================================
// QUERY/FILTER TYPES
// =============================================================================

/// Inclusive calendar date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        if start > end {
            return Err(DomainError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Range of `days` days ending on `end`, both bounds included.
    pub fn trailing_days(end: NaiveDate, days: u32) -> Result<Self, DomainError> {
        let start = end
            .checked_sub_days(chrono::Days::new(u64::from(days)))
            .ok_or(DomainError::DateOutOfRange)?;
        Self::new(start, end)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Filter pushed down to the record store when fetching reservations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationFilter {
    /// `None` means every status
    pub statuses: Option<Vec<ReservationStatus>>,
    pub check_in: Option<DateRange>,
}

impl ReservationFilter {
    /// No restriction at all.
    pub fn all() -> Self {
        Self::default()
    }

    /// CONFIRMED and COMPLETED reservations only.
    pub fn eligible() -> Self {
        Self {
            statuses: Some(ReservationStatus::ELIGIBLE.to_vec()),
            check_in: None,
        }
    }

    #[must_use]
    pub fn with_check_in(mut self, range: DateRange) -> Self {
        self.check_in = Some(range);
        self
    }

    pub fn matches(&self, reservation: &Reservation) -> bool {
        let status_ok = self
            .statuses
            .as_ref()
            .is_none_or(|s| s.contains(&reservation.status));
        let date_ok = self
            .check_in
            .is_none_or(|r| r.contains(reservation.check_in_date));
        status_ok && date_ok
    }
}

/// Filter pushed down to the record store when fetching payments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentFilter {
    /// `None` means every status
    pub statuses: Option<Vec<PaymentStatus>>,
    /// Calendar year of `payment_date`
    pub year: Option<i32>,
}

impl PaymentFilter {
    /// Settled payments only.
    pub fn completed() -> Self {
        Self {
            statuses: Some(vec![PaymentStatus::Completed]),
            year: None,
        }
    }

    #[must_use]
    pub fn in_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn matches(&self, payment: &Payment) -> bool {
        let status_ok = self
            .statuses
            .as_ref()
            .is_none_or(|s| s.contains(&payment.payment_status));
        let year_ok = self.year.is_none_or(|y| payment.payment_date.year() == y);
        status_ok && year_ok
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Domain-level errors
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Date arithmetic left the supported calendar range")]
    DateOutOfRange,
}
