//! Conversion between major currency units and the minor units the processor expects.

use crate::constants::MINOR_UNIT_FACTOR;
use crate::error::{AdyenError, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Scale a major-unit amount (e.g. `10.50`) to minor units (e.g. `1050`).
///
/// The multiplication happens in decimal arithmetic, so two-digit fractions are exact.
/// Anything finer than a minor unit is rounded half away from zero.
///
/// # Errors
/// Returns `InvalidAmount` if the scaled value does not fit in an `i64`.
pub fn to_minor_units(value: Decimal) -> Result<i64> {
    value
        .checked_mul(Decimal::from(MINOR_UNIT_FACTOR))
        .map(|scaled| scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|scaled| scaled.to_i64())
        .ok_or_else(|| AdyenError::InvalidAmount(value.to_string()))
}

/// Parse a user-supplied major-unit amount such as `"10"` or `"12.34"`.
pub fn parse_amount(input: &str) -> Result<Decimal> {
    let trimmed = input.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| AdyenError::InvalidAmount(input.to_string()))
}
