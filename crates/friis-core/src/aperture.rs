//! Antenna effective aperture
//!
//! An antenna of gain G operating at wavelength λ captures power as if it
//! had an area of `A_eff = G·λ² / 4π`. A 0 dBi (isotropic) antenna therefore
//! has an aperture of `λ² / 4π`.

use crate::types::{ensure_finite, ensure_positive, BudgetResult};
use crate::units::{from_db, to_db};
use std::f64::consts::PI;

/// Effective aperture (m²) of an antenna with `gain_db` dBi at `wavelength_m`.
///
/// Gains extreme enough to push the aperture to infinity or zero are an
/// error on `aperture_m2`.
pub fn effective_aperture(gain_db: f64, wavelength_m: f64) -> BudgetResult<f64> {
    let gain_db = ensure_finite("gain_db", gain_db)?;
    let wavelength_m = ensure_positive("wavelength_m", wavelength_m)?;
    ensure_positive(
        "aperture_m2",
        from_db(gain_db) * wavelength_m.powi(2) / (4.0 * PI),
    )
}

/// Gain (dBi) of an antenna with effective aperture `aperture_m2` at
/// `wavelength_m`; the inverse of [`effective_aperture`].
pub fn gain_from_aperture_db(aperture_m2: f64, wavelength_m: f64) -> BudgetResult<f64> {
    let aperture_m2 = ensure_positive("aperture_m2", aperture_m2)?;
    let wavelength_m = ensure_positive("wavelength_m", wavelength_m)?;
    to_db("antenna_gain", 4.0 * PI * aperture_m2 / wavelength_m.powi(2))
}
