//! Friis Link Budget Charts (Native Entry Point)
//!
//! Computes the received power against distance at 900 MHz, 1.5 GHz and
//! 17.7 GHz and shows one chart window per frequency. Close a window to move
//! on to the next frequency.

use friis_core::config::DriverConfig;
use friis_core::observe::{init_logging, LogConfig};
use friis_core::report::run;
use friis_gui::{EguiChartSink, WindowOptions};
use std::process::ExitCode;

fn main() -> ExitCode {
    if !init_logging(&LogConfig::default()) {
        tracing::warn!("a tracing subscriber was already installed; keeping it");
    }

    let mut sink = EguiChartSink::new(WindowOptions::default());
    let summary = run(&DriverConfig::default(), &mut sink);

    for skipped in &summary.skipped {
        tracing::error!(
            band = %skipped.band.label,
            frequency_hz = skipped.band.frequency_hz,
            error = %skipped.error,
            "no chart produced"
        );
    }

    if summary.is_complete() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
