//! Driver configuration
//!
//! Defines which carriers are evaluated and the link parameters shared by
//! all of them. The defaults reproduce the standard three-band study: 900 MHz,
//! 1.5 GHz and 17.7 GHz with a 20 dBi transmit antenna, an isotropic receive
//! antenna and 1 mW of transmit power, swept from 10 km to 38 000 km.

use crate::link_budget::{
    linspace, LinkParameters, DEFAULT_RX_GAIN_DB, DEFAULT_SWEEP_POINTS, DEFAULT_SWEEP_START_M,
    DEFAULT_SWEEP_STOP_M, DEFAULT_TX_GAIN_DB, DEFAULT_TX_POWER_W,
};
use serde::{Deserialize, Serialize};

/// A carrier frequency with its display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyBand {
    /// Human-readable label, e.g. "900 MHz"
    pub label: String,
    /// Carrier frequency in Hz
    pub frequency_hz: f64,
}

impl FrequencyBand {
    pub fn new(label: impl Into<String>, frequency_hz: f64) -> Self {
        Self {
            label: label.into(),
            frequency_hz,
        }
    }
}

/// Linear distance sweep, both ends included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// First distance in metres
    pub start_m: f64,
    /// Last distance in metres
    pub stop_m: f64,
    /// Number of points
    pub points: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start_m: DEFAULT_SWEEP_START_M,  // 10 km
            stop_m: DEFAULT_SWEEP_STOP_M,    // 38 000 km
            points: DEFAULT_SWEEP_POINTS,
        }
    }
}

impl SweepConfig {
    /// Build a fresh distance vector for this sweep.
    pub fn distances_m(&self) -> Vec<f64> {
        linspace(self.start_m, self.stop_m, self.points)
    }
}

/// Everything the driver needs to produce its charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Carriers, evaluated and rendered in this order
    pub bands: Vec<FrequencyBand>,
    /// Transmit antenna gain in dBi
    pub tx_gain_db: f64,
    /// Receive antenna gain in dBi
    pub rx_gain_db: f64,
    /// Transmit power in W
    pub tx_power_w: f64,
    /// Distance sweep
    pub sweep: SweepConfig,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            bands: Self::standard_bands(),
            tx_gain_db: DEFAULT_TX_GAIN_DB,
            rx_gain_db: DEFAULT_RX_GAIN_DB,
            tx_power_w: DEFAULT_TX_POWER_W, // 1 mW
            sweep: SweepConfig::default(),
        }
    }
}

impl DriverConfig {
    /// 900 MHz, 1.5 GHz and 17.7 GHz, in that order.
    pub fn standard_bands() -> Vec<FrequencyBand> {
        vec![
            FrequencyBand::new("900 MHz", 900e6),
            FrequencyBand::new("1.5 GHz", 1.5e9),
            FrequencyBand::new("17.7 GHz", 17.7e9),
        ]
    }

    /// Replace the band list.
    pub fn with_bands(mut self, bands: Vec<FrequencyBand>) -> Self {
        self.bands = bands;
        self
    }

    /// Replace the distance sweep.
    pub fn with_sweep(mut self, start_m: f64, stop_m: f64, points: usize) -> Self {
        self.sweep = SweepConfig {
            start_m,
            stop_m,
            points,
        };
        self
    }

    /// Link parameters for one band, with a freshly built sweep.
    pub fn link_parameters(&self, band: &FrequencyBand) -> LinkParameters {
        LinkParameters::new(band.frequency_hz)
            .with_tx_gain_db(self.tx_gain_db)
            .with_rx_gain_db(self.rx_gain_db)
            .with_tx_power_w(self.tx_power_w)
            .with_distances_m(self.sweep.distances_m())
    }
}
