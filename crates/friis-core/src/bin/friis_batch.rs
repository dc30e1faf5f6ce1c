//! Headless link budget run
//!
//! Computes every standard band and prints a summary table instead of
//! opening chart windows. Charts go to a [`HeadlessSink`], which only logs.
//!
//! Run with: cargo run -p friis-core --bin friis-batch

use friis_core::chart::HeadlessSink;
use friis_core::config::DriverConfig;
use friis_core::observe::{init_logging, LogConfig};
use friis_core::report::{compute_reports, render_reports};
use friis_core::units::format_scientific;
use std::process::ExitCode;

fn main() -> ExitCode {
    if !init_logging(&LogConfig::default()) {
        tracing::warn!("a tracing subscriber was already installed; keeping it");
    }

    let config = DriverConfig::default();
    let outcomes = compute_reports(&config);

    println!(
        "{:<10} {:>12} {:>12} {:>12} {:>14} {:>14}",
        "Band", "Lambda (m)", "A_tx (m²)", "A_rx (m²)", "P_rx near dBW", "P_rx far dBW"
    );
    println!("{}", "-".repeat(80));

    for outcome in &outcomes {
        match &outcome.report {
            Ok(report) => {
                let powers = &report.link.received_power_dbw;
                println!(
                    "{:<10} {:>12.4} {:>12} {:>12} {:>14.2} {:>14.2}",
                    outcome.band.label,
                    report.link.wavelength_m,
                    format_scientific(report.tx_aperture_m2, 2),
                    format_scientific(report.rx_aperture_m2, 2),
                    powers.first().copied().unwrap_or(f64::NAN),
                    powers.last().copied().unwrap_or(f64::NAN),
                );
            }
            Err(error) => println!("{:<10} failed: {}", outcome.band.label, error),
        }
    }

    let mut sink = HeadlessSink::new();
    let summary = render_reports(&outcomes, &mut sink);

    if summary.is_complete() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
