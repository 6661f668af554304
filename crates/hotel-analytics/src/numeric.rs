//! Rounding and ratio helpers shared by every analyzer.
//!
//! All averages, rates and percentages are exact decimals rounded to two
//! places with round-half-up (midpoint away from zero), so `2.345` becomes
//! `2.35` regardless of platform float behaviour.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{AnalyticsError, Result};

/// Decimal places kept on every derived average, rate and percentage.
pub const SCALE: u32 = 2;

/// Round half-up to two places and pad the scale so `150` renders as `150.00`.
#[must_use]
pub fn round2(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(SCALE);
    rounded
}

/// `numerator / denominator`, rounded; fails on a zero denominator.
pub fn ratio(numerator: Decimal, denominator: Decimal) -> Result<Decimal> {
    if denominator.is_zero() {
        return Err(AnalyticsError::DivisionUndefined);
    }
    Ok(round2(numerator / denominator))
}

/// Rounded mean of `sum` over `count` items, `None` when there are no items.
#[must_use]
pub fn average(sum: Decimal, count: u64) -> Option<Decimal> {
    ratio(sum, Decimal::from(count)).ok()
}

/// `part * 100 / whole`, rounded; zero when `whole` is zero.
#[must_use]
pub fn percentage(part: u64, whole: u64) -> Decimal {
    ratio(Decimal::from(part) * Decimal::ONE_HUNDRED, Decimal::from(whole))
        .unwrap_or_else(|_| round2(Decimal::ZERO))
}
