//! Link Budget — Friis free-space received power over a distance sweep
//!
//! For a carrier of wavelength λ and a transmitter/receiver pair separated by
//! R metres, the Friis transmission equation gives
//!
//! ```text
//! P_rx = P_tx · G_tx · G_rx · (λ / 4πR)²
//! ```
//!
//! with all quantities linear. The result is reported in dBW for every
//! distance of the sweep, in the order the distances were supplied.
//!
//! Inputs are validated before any arithmetic: frequency, transmit power and
//! every distance must be positive and finite, gains must be finite. A linear
//! received power that cannot be taken to decibels is a
//! [`BudgetError::NumericDomain`] rather than a `-inf` or `NaN` in the output.
//!
//! ## Example
//!
//! ```rust
//! use friis_core::link_budget::{link_budget, LinkParameters};
//!
//! let params = LinkParameters::new(900e6).with_distances_m(vec![1e4, 3.8e7]);
//! let result = link_budget(&params).unwrap();
//!
//! assert_eq!(result.received_power_dbw.len(), 2);
//! assert!((result.received_power_dbw[0] - (-121.5)).abs() < 0.1);
//! assert!(result.received_power_dbw[1] < result.received_power_dbw[0]);
//! ```

use crate::types::{ensure_finite, ensure_positive, BudgetError, BudgetResult};
use crate::units::{from_db, meters_to_km, power_to_dbw, SPEED_OF_LIGHT_M_S};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Default transmit antenna gain (dBi).
pub const DEFAULT_TX_GAIN_DB: f64 = 20.0;
/// Default receive antenna gain (dBi).
pub const DEFAULT_RX_GAIN_DB: f64 = 0.0;
/// Default transmit power (W), i.e. 1 mW.
pub const DEFAULT_TX_POWER_W: f64 = 1e-3;
/// First distance of the default sweep (m).
pub const DEFAULT_SWEEP_START_M: f64 = 1e4;
/// Last distance of the default sweep (m), roughly geostationary range.
pub const DEFAULT_SWEEP_STOP_M: f64 = 3.8e7;
/// Number of points in the default sweep.
pub const DEFAULT_SWEEP_POINTS: usize = 1000;

// ---------------------------------------------------------------------------
// Distance sweeps
// ---------------------------------------------------------------------------

/// `n` evenly spaced values from `start` to `stop`, both ends included.
///
/// `n == 0` yields an empty vector and `n == 1` yields `[start]`. The last
/// element is exactly `stop`.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// The default distance sweep: 1000 points from 10 km to 38 000 km.
///
/// Every call allocates a fresh vector; nothing is shared between callers.
pub fn default_distances_m() -> Vec<f64> {
    linspace(DEFAULT_SWEEP_START_M, DEFAULT_SWEEP_STOP_M, DEFAULT_SWEEP_POINTS)
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Inputs to one link budget evaluation.
///
/// Built with [`LinkParameters::new`] and the `with_*` overrides; every field
/// not overridden takes its documented default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkParameters {
    frequency_hz: f64,
    tx_gain_db: f64,
    rx_gain_db: f64,
    tx_power_w: f64,
    distances_m: Vec<f64>,
}

impl LinkParameters {
    /// Parameters for `frequency_hz` with the default gains, power and sweep.
    pub fn new(frequency_hz: f64) -> Self {
        Self {
            frequency_hz,
            tx_gain_db: DEFAULT_TX_GAIN_DB,
            rx_gain_db: DEFAULT_RX_GAIN_DB,
            tx_power_w: DEFAULT_TX_POWER_W,
            distances_m: default_distances_m(),
        }
    }

    pub fn with_tx_gain_db(mut self, gain_db: f64) -> Self {
        self.tx_gain_db = gain_db;
        self
    }

    pub fn with_rx_gain_db(mut self, gain_db: f64) -> Self {
        self.rx_gain_db = gain_db;
        self
    }

    pub fn with_tx_power_w(mut self, power_w: f64) -> Self {
        self.tx_power_w = power_w;
        self
    }

    pub fn with_distances_m(mut self, distances_m: Vec<f64>) -> Self {
        self.distances_m = distances_m;
        self
    }

    pub fn frequency_hz(&self) -> f64 {
        self.frequency_hz
    }

    pub fn tx_gain_db(&self) -> f64 {
        self.tx_gain_db
    }

    pub fn rx_gain_db(&self) -> f64 {
        self.rx_gain_db
    }

    pub fn tx_power_w(&self) -> f64 {
        self.tx_power_w
    }

    pub fn distances_m(&self) -> &[f64] {
        &self.distances_m
    }

    /// Check every parameter, reporting the first one that is out of range.
    pub fn validate(&self) -> BudgetResult<()> {
        ensure_positive("frequency_hz", self.frequency_hz)?;
        ensure_finite("tx_gain_db", self.tx_gain_db)?;
        ensure_finite("rx_gain_db", self.rx_gain_db)?;
        ensure_positive("tx_power_w", self.tx_power_w)?;
        if self.distances_m.is_empty() {
            return Err(BudgetError::InvalidParameter {
                name: "distances_m",
                value: 0.0,
                reason: "at least one distance is required",
            });
        }
        for &distance in &self.distances_m {
            ensure_positive("distance_m", distance)?;
        }
        Ok(())
    }
}

/// Received power over the sweep, with the values it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkResult {
    /// Received power (dBW), one entry per distance, same order.
    pub received_power_dbw: Vec<f64>,
    /// Transmit antenna gain used (dBi).
    pub tx_gain_db: f64,
    /// Receive antenna gain used (dBi).
    pub rx_gain_db: f64,
    /// The input distances (m), echoed.
    pub distances_m: Vec<f64>,
    /// Carrier wavelength (m).
    pub wavelength_m: f64,
}

impl LinkResult {
    /// Number of evaluated distances.
    pub fn len(&self) -> usize {
        self.received_power_dbw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.received_power_dbw.is_empty()
    }

    /// `(distance_m, received_power_dbw)` pairs in sweep order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.distances_m
            .iter()
            .copied()
            .zip(self.received_power_dbw.iter().copied())
    }

    /// `[distance_km, received_power_dbw]` pairs, ready for plotting.
    pub fn series_km(&self) -> Vec<[f64; 2]> {
        self.points()
            .map(|(distance_m, power_dbw)| [meters_to_km(distance_m), power_dbw])
            .collect()
    }

}

// ---------------------------------------------------------------------------
// Computation
// ---------------------------------------------------------------------------

/// Carrier wavelength `c / f` (m).
///
/// Frequencies so small that `c / f` overflows are rejected as an invalid
/// `frequency_hz`.
pub fn wavelength_m(frequency_hz: f64) -> BudgetResult<f64> {
    let frequency_hz = ensure_positive("frequency_hz", frequency_hz)?;
    let wavelength = SPEED_OF_LIGHT_M_S / frequency_hz;
    if !wavelength.is_finite() {
        return Err(BudgetError::InvalidParameter {
            name: "frequency_hz",
            value: frequency_hz,
            reason: "too small, wavelength overflows",
        });
    }
    Ok(wavelength)
}

/// Free-space path loss factor `(λ / 4πR)²` (linear, < 1 in the far field).
pub fn path_loss_factor(wavelength_m: f64, distance_m: f64) -> BudgetResult<f64> {
    let wavelength_m = ensure_positive("wavelength_m", wavelength_m)?;
    let distance_m = ensure_positive("distance_m", distance_m)?;
    Ok((wavelength_m / (4.0 * PI * distance_m)).powi(2))
}

/// Free-space path loss expressed as a positive number of decibels.
pub fn free_space_path_loss_db(wavelength_m: f64, distance_m: f64) -> BudgetResult<f64> {
    let factor = path_loss_factor(wavelength_m, distance_m)?;
    power_to_dbw("path_loss_factor", factor).map(|db| -db)
}

/// Evaluate the Friis equation for every distance in `params`.
pub fn link_budget(params: &LinkParameters) -> BudgetResult<LinkResult> {
    params.validate()?;

    let wavelength = wavelength_m(params.frequency_hz)?;
    // Everything except the distance term.
    let gain_product =
        params.tx_power_w * from_db(params.tx_gain_db) * from_db(params.rx_gain_db);

    let received_power_dbw = params
        .distances_m
        .iter()
        .map(|&distance| {
            let factor = path_loss_factor(wavelength, distance)?;
            power_to_dbw("received_power_w", gain_product * factor)
        })
        .collect::<BudgetResult<Vec<f64>>>()?;

    tracing::debug!(
        frequency_hz = params.frequency_hz,
        wavelength_m = wavelength,
        points = received_power_dbw.len(),
        "computed link budget"
    );

    Ok(LinkResult {
        received_power_dbw,
        tx_gain_db: params.tx_gain_db,
        rx_gain_db: params.rx_gain_db,
        distances_m: params.distances_m.clone(),
        wavelength_m: wavelength,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn uhf_at(distances_m: Vec<f64>) -> LinkResult {
        link_budget(&LinkParameters::new(900e6).with_distances_m(distances_m)).unwrap()
    }

    #[test]
    fn test_linspace_endpoints_inclusive() {
        let v = linspace(1.0, 2.0, 5);
        assert_eq!(v, vec![1.0, 1.25, 1.5, 1.75, 2.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }

    #[test]
    fn test_default_distances() {
        let d = default_distances_m();
        assert_eq!(d.len(), 1000);
        assert_eq!(d[0], 1e4);
        assert_eq!(d[999], 3.8e7);
        assert!(d.windows(2).all(|w| w[1] > w[0]), "sweep must be increasing");
    }

    #[test]
    fn test_default_distances_are_fresh() {
        let mut first = default_distances_m();
        first[0] = -1.0;
        let second = default_distances_m();
        assert_eq!(second[0], 1e4, "mutating one sweep must not affect the next");

        let params = LinkParameters::new(1.5e9);
        assert_eq!(params.distances_m(), default_distances_m().as_slice());
    }

    #[test]
    fn test_parameter_defaults() {
        let p = LinkParameters::new(17.7e9);
        assert_eq!(p.frequency_hz(), 17.7e9);
        assert_eq!(p.tx_gain_db(), 20.0);
        assert_eq!(p.rx_gain_db(), 0.0);
        assert_eq!(p.tx_power_w(), 1e-3);
        assert_eq!(p.distances_m().len(), 1000);
    }

    #[test]
    fn test_wavelength() {
        for f in [900e6, 1.5e9, 17.7e9, 1.0, 3e12] {
            let lambda = wavelength_m(f).unwrap();
            assert!(((lambda - 3e8 / f) / lambda).abs() < 1e-15);
        }
        assert!((wavelength_m(900e6).unwrap() - 0.3333).abs() < 1e-4);
    }

    #[test]
    fn test_path_loss_factor_scenario() {
        let factor = path_loss_factor(1.0 / 3.0, 1e4).unwrap();
        // (0.3333 / (4π · 1e4))² ≈ 7.04e-12
        assert!((factor - 7.04e-12).abs() < 0.01e-12, "got {factor:e}");
    }

    #[test]
    fn test_free_space_path_loss_db() {
        let lambda = wavelength_m(900e6).unwrap();
        let fspl = free_space_path_loss_db(lambda, 1e4).unwrap();
        // 20·log10(4πR/λ) = 20·log10(4π·1e4·3) ≈ 111.53 dB
        assert!((fspl - 111.53).abs() < 0.01, "got {fspl}");
    }

    #[test]
    fn test_received_power_at_10km() {
        let result = uhf_at(vec![1e4]);
        // 1e-3 · 100 · 1 · 7.04e-12 ≈ 7.04e-13 W ≈ -121.5 dBW
        assert!(
            (result.received_power_dbw[0] - (-121.5)).abs() < 0.1,
            "got {}",
            result.received_power_dbw[0]
        );
        assert_eq!(result.tx_gain_db, 20.0);
        assert_eq!(result.rx_gain_db, 0.0);
        assert!((result.wavelength_m - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_inverse_square_scaling() {
        let result = uhf_at(vec![1e4, 3.8e7]);
        let drop = result.received_power_dbw[0] - result.received_power_dbw[1];
        let expected = 20.0 * (3.8e7f64 / 1e4).log10();
        assert!((expected - 71.6).abs() < 0.05);
        assert!((drop - expected).abs() < 1e-9, "drop {drop} vs {expected}");
    }

    #[test]
    fn test_received_power_monotonic_over_default_sweep() {
        let result = link_budget(&LinkParameters::new(1.5e9)).unwrap();
        assert_eq!(result.len(), 1000);
        assert!(
            result.received_power_dbw.windows(2).all(|w| w[1] <= w[0]),
            "received power must not increase with distance"
        );
    }

    #[test]
    fn test_output_length_and_order_preserved() {
        for n in [1usize, 2, 7, 64] {
            let distances = linspace(5e3, 5e6, n);
            let result = uhf_at(distances.clone());
            assert_eq!(result.len(), n);
            assert_eq!(result.distances_m, distances);
        }

        // Unsorted input keeps its order.
        let result = uhf_at(vec![2e4, 1e4, 4e4]);
        assert!(result.received_power_dbw[1] > result.received_power_dbw[0]);
        assert!(result.received_power_dbw[0] > result.received_power_dbw[2]);
    }

    #[test]
    fn test_gain_and_power_overrides_shift_result() {
        let base = uhf_at(vec![1e5]).received_power_dbw[0];
        let params = LinkParameters::new(900e6)
            .with_distances_m(vec![1e5])
            .with_tx_gain_db(23.0)
            .with_rx_gain_db(-5.0)
            .with_tx_power_w(1.0);
        let shifted = link_budget(&params).unwrap().received_power_dbw[0];
        // +3 dB tx gain, -5 dB rx gain, +30 dB power.
        assert!((shifted - base - 28.0).abs() < 1e-9, "shift {}", shifted - base);
    }

    #[test]
    fn test_higher_frequency_receives_less() {
        let low = uhf_at(vec![1e6]).received_power_dbw[0];
        let params = LinkParameters::new(17.7e9).with_distances_m(vec![1e6]);
        let high = link_budget(&params).unwrap().received_power_dbw[0];
        let expected = 20.0 * (17.7e9f64 / 900e6).log10();
        assert!((low - high - expected).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_frequency_rejected() {
        for f in [0.0, -900e6, f64::NAN] {
            let err = link_budget(&LinkParameters::new(f)).unwrap_err();
            assert_eq!(err.parameter(), Some("frequency_hz"), "frequency {f}");
        }
    }

    #[test]
    fn test_invalid_distance_rejected() {
        for d in [0.0, -1e4] {
            let params = LinkParameters::new(900e6).with_distances_m(vec![1e4, d, 2e4]);
            let err = link_budget(&params).unwrap_err();
            assert!(matches!(
                err,
                BudgetError::InvalidParameter { name: "distance_m", .. }
            ));
        }
        let empty = LinkParameters::new(900e6).with_distances_m(Vec::new());
        assert_eq!(link_budget(&empty).unwrap_err().parameter(), Some("distances_m"));
    }

    #[test]
    fn test_invalid_power_and_gain_rejected() {
        let no_power = LinkParameters::new(900e6).with_tx_power_w(0.0);
        assert_eq!(link_budget(&no_power).unwrap_err().parameter(), Some("tx_power_w"));

        let bad_gain = LinkParameters::new(900e6).with_rx_gain_db(f64::INFINITY);
        assert_eq!(link_budget(&bad_gain).unwrap_err().parameter(), Some("rx_gain_db"));
    }

    #[test]
    fn test_underflow_is_numeric_domain_error() {
        // 10^(-4000/10) underflows to 0 W.
        let params = LinkParameters::new(900e6)
            .with_distances_m(vec![1e4])
            .with_tx_gain_db(-4000.0);
        let err = link_budget(&params).unwrap_err();
        assert!(
            matches!(err, BudgetError::NumericDomain { quantity: "received_power_w", .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn test_series_km() {
        let result = uhf_at(vec![1e4, 3.8e7]);
        let series = result.series_km();
        assert_eq!(series[0], [10.0, result.received_power_dbw[0]]);
        assert_eq!(series[1], [38_000.0, result.received_power_dbw[1]]);
    }

    #[test]
    fn test_wavelength_overflow_names_frequency() {
        let err = wavelength_m(1e-300).unwrap_err();
        assert!(
            matches!(err, BudgetError::InvalidParameter { name: "frequency_hz", value, .. } if value == 1e-300),
            "{err:?}"
        );

        let err = link_budget(&LinkParameters::new(1e-300)).unwrap_err();
        assert_eq!(err.parameter(), Some("frequency_hz"), "{err:?}");
    }
}
