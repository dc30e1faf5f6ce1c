//! Unit conversions — decibels, kilometres, scientific notation
//!
//! Gains are decibels relative to isotropic, powers are decibels relative to
//! one watt (dBW). Unlike display-oriented helpers that clamp tiny values,
//! the logarithmic conversions here refuse non-positive input so an undefined
//! logarithm surfaces as an error instead of a silently clamped number.
//!
//! ## Example
//!
//! ```rust
//! use friis_core::units::{from_db, power_to_dbw, format_scientific};
//!
//! assert!((from_db(20.0) - 100.0).abs() < 1e-9);
//! assert!((power_to_dbw("p", 1e-3).unwrap() - (-30.0)).abs() < 1e-12);
//! assert_eq!(format_scientific(0.0123, 2), "1.23e-02");
//! ```

use crate::types::{BudgetError, BudgetResult};

/// Speed of light used throughout (m/s). Fixed at 3e8, not 299 792 458.
pub const SPEED_OF_LIGHT_M_S: f64 = 3e8;

/// Metres per kilometre.
pub const METERS_PER_KM: f64 = 1e3;

/// Convert a decibel ratio to linear: `10^(db/10)`.
#[inline]
pub fn from_db(db: f64) -> f64 {
    10.0f64.powf(db / 10.0)
}

/// Convert a linear power ratio to decibels: `10 * log10(x)`.
///
/// `quantity` names the value in the error when `linear` is zero, negative
/// or non-finite.
pub fn to_db(quantity: &'static str, linear: f64) -> BudgetResult<f64> {
    if linear > 0.0 && linear.is_finite() {
        Ok(10.0 * linear.log10())
    } else {
        Err(BudgetError::NumericDomain {
            quantity,
            value: linear,
        })
    }
}

/// Convert a power in watts to dBW.
#[inline]
pub fn power_to_dbw(quantity: &'static str, watts: f64) -> BudgetResult<f64> {
    to_db(quantity, watts)
}

/// Convert metres to kilometres.
#[inline]
pub fn meters_to_km(meters: f64) -> f64 {
    meters / METERS_PER_KM
}

/// Format `value` in scientific notation with `precision` mantissa digits and
/// a signed exponent of at least two digits, e.g. `8.84e-01`, `1.50e+03`.
///
/// Non-finite values are returned as Rust prints them (`inf`, `NaN`).
pub fn format_scientific(value: f64, precision: usize) -> String {
    let formatted = format!("{:.*e}", precision, value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => formatted,
    }
}
