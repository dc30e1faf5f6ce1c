//! # Friis Free-Space Link Budget
//!
//! Received power against distance for a transmitter/receiver pair in free
//! space, and the effective aperture of both antennas, evaluated for a set of
//! carrier frequencies.
//!
//! ## Overview
//!
//! - **Link budget**: Friis equation over a distance sweep, in dBW
//! - **Effective aperture**: `G·λ²/4π` for the transmit and receive gains
//! - **Reports**: per-band results, computed without touching any chart code
//! - **Charts**: a [`chart::ChartSink`] renders one chart per band
//!
//! ## Pipeline
//!
//! ```text
//! DriverConfig ─► compute_reports ─► [FrequencyReport] ─► render_reports ─► ChartSink
//!                  (link_budget +                          (ChartSpec per
//!                   effective_aperture ×2)                  band, in order)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use friis_core::prelude::*;
//!
//! let params = LinkParameters::new(1.5e9).with_distances_m(vec![1e4, 1e5]);
//! let link = link_budget(&params).unwrap();
//! let tx_aperture = effective_aperture(link.tx_gain_db, link.wavelength_m).unwrap();
//!
//! assert_eq!(link.received_power_dbw.len(), 2);
//! assert!(tx_aperture > 0.0);
//! ```

pub mod aperture;
pub mod chart;
pub mod config;
pub mod link_budget;
pub mod observe;
pub mod report;
pub mod types;
pub mod units;

/// Commonly used items.
pub mod prelude {
    pub use crate::aperture::{effective_aperture, gain_from_aperture_db};
    pub use crate::chart::{ChartSink, ChartSpec, HeadlessSink};
    pub use crate::config::{DriverConfig, FrequencyBand, SweepConfig};
    pub use crate::link_budget::{
        default_distances_m, link_budget, wavelength_m, LinkParameters, LinkResult,
    };
    pub use crate::report::{compute_reports, render_reports, run, FrequencyReport, RenderSummary};
    pub use crate::types::{BudgetError, BudgetResult};
}
