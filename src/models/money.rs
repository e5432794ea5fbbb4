//! Integer-cent money helpers.
//!
//! Prices are stored as integer cents. Conversion to major units happens once,
//! after summing, so totals never accumulate floating point error.

/// Convert an integer cent amount to major currency units.
pub fn cents_to_major(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Round a cent amount to the nearest whole major unit, halves rounding up.
pub fn round_to_major(cents: i64) -> i64 {
    (cents + 50).div_euclid(100)
}
