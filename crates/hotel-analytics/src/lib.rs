//! # Hotel Analytics
//!
//! Descriptive analytics for a hotel reservation business, computed from
//! reservations, payments, rooms, room types and customers.
//!
//! ## Features
//!
//! - Daily occupancy rate over a date range
//! - Bookings and average stay per room type
//! - Monthly revenue and revenue by room type, with a yearly report
//! - Booking demand per weekday
//! - Customer statistics and reservation status distribution
//!
//! Every analytic is a pure function over record slices (see the `booking`,
//! `occupancy` and `revenue` modules); the analyzers fetch a snapshot from an
//! injected [`hotel_store::RecordStore`] and apply them. Groupings are sparse:
//! a day, month or room type only appears when the filtered input has rows
//! for it.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod booking;
pub mod charts;
pub mod engine;
pub mod error;
pub mod numeric;
pub mod occupancy;
pub mod reports;
pub mod revenue;

#[cfg(test)]
mod testing;

pub use booking::{BookingPatternAnalyzer, CustomerSummary, StatusDistribution, WeekdayMetric};
pub use engine::AnalyticsEngine;
pub use error::{AnalyticsError, Result};
pub use occupancy::{DailyMetric, OccupancyAnalyzer, RoomTypeOccupancy};
pub use reports::{DashboardReport, JsonPrinter, MarkdownPrinter, ReportPrinter, RevenueReport};
pub use revenue::{MonthlyRevenue, RevenueAnalyzer, RoomTypeRevenue};
