//! Fixed-point decimal rounding.
//!
//! Values are rounded to the nearest number with `decimals` fractional
//! digits, using the exact binary value of the input. Exact decimal ties round
//! away from zero, so `0.125` becomes `0.13` at two decimals while `0.15`
//! (stored as `0.1499999999999999944…`) becomes `0.1` at one decimal.
//!
//! The secant solver rounds every intermediate value with [`round_to`];
//! callers use [`to_fixed`] to print iteration tables.

/// Enough fractional digits to print any finite `f64` exactly.
const EXACT_DIGITS: usize = 1074;

/// Formats `value` with exactly `decimals` fractional digits.
///
/// Non-finite values are formatted as-is.
#[must_use]
pub fn to_fixed(value: f64, decimals: u32) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let digits = decimals as usize;
    let target = if is_exact_tie(value, digits) {
        away_from_zero(value)
    } else {
        value
    };
    format!("{target:.digits$}")
}

/// Rounds `value` to `decimals` fractional digits.
///
/// Non-finite values are returned unchanged.
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    to_fixed(value, decimals).parse().unwrap_or(value)
}

/// Returns true if `value` lies exactly halfway between two `digits`-place decimals.
fn is_exact_tie(value: f64, digits: usize) -> bool {
    // A tie prints as `…5` at one extra digit without any rounding.
    let extended = format!("{value:.prec$}", prec = digits + 1);
    if !extended.ends_with('5') {
        return false;
    }

    let exact = format!("{:.prec$}", value.abs(), prec = EXACT_DIGITS);
    let Some((_, fraction)) = exact.split_once('.') else {
        return false;
    };
    let fraction = fraction.as_bytes();
    fraction.get(digits) == Some(&b'5') && fraction[digits + 1..].iter().all(|&d| d == b'0')
}

/// Returns the next representable value away from zero.
fn away_from_zero(value: f64) -> f64 {
    // Sign-magnitude layout: incrementing the bits grows the magnitude.
    f64::from_bits(value.to_bits() + 1)
}
