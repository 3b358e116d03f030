//! Amount validation for the change maker.
//!
//! Turns user input into an [`Amount`] of whole cents and checks it
//! against the accepted range:
//! - **Unparseable** input (not a non-negative decimal with at most two
//!   fractional digits) fails with `InvalidAmount`.
//! - **Out-of-range** amounts fail with `OutOfRange`.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::config::Bounds;
use crate::error::{ChangeError, Result};
use crate::models::amount::Amount;

/// Whole-dollar digits that can still fit in a `u32` cent count.
const MAX_WHOLE_DIGITS: usize = 7;

/// Parse and range-check raw user input such as `"1.41"` or `"$12.30"`.
pub fn parse_amount(raw: &str, bounds: &Bounds) -> Result<Amount> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('$').unwrap_or(trimmed).trim_start();
    if digits.is_empty() {
        return Err(invalid(raw, "amount is empty"));
    }

    if digits.starts_with('-') {
        return Err(invalid(raw, "amount must not be negative"));
    }

    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    let plain = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !plain(whole) || !plain(fraction) {
        return Err(invalid(raw, "amount must be digits with at most one decimal point"));
    }

    let whole = whole.trim_start_matches('0');
    let fraction = fraction.trim_end_matches('0');
    if fraction.len() > 2 {
        return Err(invalid(raw, "amount has more than two fractional digits"));
    }
    // More whole digits than a u32 cent count can hold.
    if whole.len() > MAX_WHOLE_DIGITS {
        return Err(out_of_range(trimmed, bounds));
    }

    let whole = if whole.is_empty() { "0" } else { whole };
    let text = if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{whole}.{fraction}")
    };
    let value = Decimal::from_str(&text).map_err(|e| invalid(raw, &e.to_string()))?;
    let amount = to_cents(value, raw, bounds)?;
    validate_amount(amount, bounds)
}

/// Convert an exact decimal into cents, without the range check.
pub fn parse_decimal(value: Decimal) -> Result<Amount> {
    to_cents(value, &value.to_string(), &Bounds::default())
}

/// Range check. Returns the amount unchanged when it is within `bounds`.
pub fn validate_amount(amount: Amount, bounds: &Bounds) -> Result<Amount> {
    if bounds.contains(amount) {
        Ok(amount)
    } else {
        Err(ChangeError::OutOfRange {
            value: amount.to_string(),
            min: bounds.min,
            max: bounds.max,
        })
    }
}

fn to_cents(value: Decimal, input: &str, bounds: &Bounds) -> Result<Amount> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(invalid(input, "amount must not be negative"));
    }
    if value.normalize().scale() > 2 {
        return Err(invalid(input, "amount has more than two fractional digits"));
    }

    // Too large for a u32 cent count: certainly above any bound.
    value
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|cents| cents.to_u32())
        .map(Amount::from_cents)
        .ok_or_else(|| out_of_range(input.trim(), bounds))
}

fn out_of_range(value: &str, bounds: &Bounds) -> ChangeError {
    ChangeError::OutOfRange {
        value: value.to_string(),
        min: bounds.min,
        max: bounds.max,
    }
}

fn invalid(input: &str, reason: &str) -> ChangeError {
    ChangeError::InvalidAmount {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}
