//! Per-band reports and the chart driver
//!
//! The driver runs in two stages:
//!
//! 1. [`compute_reports`] — pure. For every configured band, one link budget
//!    and two effective apertures (transmit and receive gain, both at that
//!    band's wavelength). Each band succeeds or fails on its own.
//! 2. [`render_reports`] — hands one [`ChartSpec`] per successful band to a
//!    [`ChartSink`], in band order. Failed bands are logged and skipped.
//!
//! [`run`] chains the two.
//!
//! ## Example
//!
//! ```rust
//! use friis_core::chart::HeadlessSink;
//! use friis_core::config::DriverConfig;
//! use friis_core::report::run;
//!
//! let mut sink = HeadlessSink::new();
//! let summary = run(&DriverConfig::default(), &mut sink);
//!
//! assert!(summary.is_complete());
//! assert_eq!(summary.rendered, ["900 MHz", "1.5 GHz", "17.7 GHz"]);
//! ```

use crate::aperture::effective_aperture;
use crate::chart::{ChartSink, ChartSpec};
use crate::config::{DriverConfig, FrequencyBand};
use crate::link_budget::{link_budget, LinkResult};
use crate::types::{BudgetError, BudgetResult};
use crate::units::format_scientific;

/// X axis label of every received power chart.
pub const DISTANCE_AXIS_LABEL: &str = "Distance (km)";
/// Y axis label of every received power chart.
pub const POWER_AXIS_LABEL: &str = "Received Power (dBW)";

/// Link budget and antenna apertures for one band.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyReport {
    pub band: FrequencyBand,
    pub link: LinkResult,
    /// Effective aperture of the transmit antenna (m²)
    pub tx_aperture_m2: f64,
    /// Effective aperture of the receive antenna (m²)
    pub rx_aperture_m2: f64,
}

impl FrequencyReport {
    /// Evaluate `band` with the gains, power and sweep of `config`.
    pub fn compute(band: &FrequencyBand, config: &DriverConfig) -> BudgetResult<Self> {
        let link = link_budget(&config.link_parameters(band))?;
        let tx_aperture_m2 = effective_aperture(link.tx_gain_db, link.wavelength_m)?;
        let rx_aperture_m2 = effective_aperture(link.rx_gain_db, link.wavelength_m)?;
        Ok(Self {
            band: band.clone(),
            link,
            tx_aperture_m2,
            rx_aperture_m2,
        })
    }

    /// Three-line chart title naming the band and both apertures.
    pub fn title(&self) -> String {
        format!(
            "Received Power vs Distance @ {}\n\
             Effective Aperture of Tx Antenna: {} m²\n\
             Effective Aperture of Rx Antenna: {} m²",
            self.band.label,
            format_scientific(self.tx_aperture_m2, 2),
            format_scientific(self.rx_aperture_m2, 2),
        )
    }

    /// Received power (dBW) against distance (km).
    pub fn chart_spec(&self) -> ChartSpec {
        ChartSpec {
            title: self.title(),
            x_label: DISTANCE_AXIS_LABEL.to_string(),
            y_label: POWER_AXIS_LABEL.to_string(),
            grid: true,
            series: self.link.series_km(),
        }
    }
}

/// Outcome of the computation stage for one band.
#[derive(Debug, Clone, PartialEq)]
pub struct BandOutcome {
    pub band: FrequencyBand,
    pub report: BudgetResult<FrequencyReport>,
}

/// A band that produced no chart, and why.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedBand {
    pub band: FrequencyBand,
    pub error: BudgetError,
}

/// What the rendering stage did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderSummary {
    /// Labels of the bands that were charted, in order
    pub rendered: Vec<String>,
    /// Bands that were skipped, in order
    pub skipped: Vec<SkippedBand>,
}

impl RenderSummary {
    /// True when every band was charted.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Compute every configured band, in configuration order.
pub fn compute_reports(config: &DriverConfig) -> Vec<BandOutcome> {
    config
        .bands
        .iter()
        .map(|band| BandOutcome {
            band: band.clone(),
            report: FrequencyReport::compute(band, config),
        })
        .collect()
}

/// Chart each successful outcome through `sink`, logging and skipping the rest.
pub fn render_reports<S>(outcomes: &[BandOutcome], sink: &mut S) -> RenderSummary
where
    S: ChartSink + ?Sized,
{
    let mut summary = RenderSummary::default();

    for outcome in outcomes {
        let band = &outcome.band;
        let result = match &outcome.report {
            Ok(report) => sink.plot(&report.chart_spec()),
            Err(error) => {
                tracing::warn!(
                    band = %band.label,
                    frequency_hz = band.frequency_hz,
                    %error,
                    "skipping chart: link budget failed"
                );
                summary.skipped.push(SkippedBand {
                    band: band.clone(),
                    error: error.clone(),
                });
                continue;
            }
        };

        match result {
            Ok(()) => {
                tracing::info!(band = %band.label, "chart rendered");
                summary.rendered.push(band.label.clone());
            }
            Err(error) => {
                tracing::error!(
                    band = %band.label,
                    frequency_hz = band.frequency_hz,
                    %error,
                    "chart rendering failed"
                );
                summary.skipped.push(SkippedBand {
                    band: band.clone(),
                    error,
                });
            }
        }
    }

    summary
}

/// Compute and render every configured band.
pub fn run<S>(config: &DriverConfig, sink: &mut S) -> RenderSummary
where
    S: ChartSink + ?Sized,
{
    let outcomes = compute_reports(config);
    render_reports(&outcomes, sink)
}
