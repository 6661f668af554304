//! Analytics error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Analytics errors.
#[derive(Error, Debug)]
pub enum AnalyticsError {
    /// Date range with start after end
    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// Year outside the four-digit calendar range
    #[error("Invalid year: {0}")]
    InvalidYear(i32),

    /// Ratio requested over a zero denominator
    #[error("Division undefined: denominator is zero")]
    DivisionUndefined,

    /// Record store fetch failed
    #[error("Data unavailable: {0}")]
    DataUnavailable(#[from] hotel_store::StoreError),

    /// Report serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for analytics operations.
pub type Result<T> = std::result::Result<T, AnalyticsError>;
