//! Chart sink abstraction
//!
//! The numeric code never talks to a plotting library directly. It describes
//! each chart as a [`ChartSpec`] (series, multi-line title, axis labels, grid
//! flag) and hands it to a [`ChartSink`], which renders it and returns once
//! the chart has been dismissed.
//!
//! ```text
//! FrequencyReport ──► ChartSpec ──► ChartSink::plot()
//!                                     ├─ HeadlessSink  (batch: record + log)
//!                                     └─ EguiChartSink (friis-gui: window)
//! ```

use crate::types::BudgetResult;
use serde::{Deserialize, Serialize};

/// A single line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Title, possibly spanning several lines
    pub title: String,
    /// X axis label
    pub x_label: String,
    /// Y axis label
    pub y_label: String,
    /// Draw grid lines
    pub grid: bool,
    /// `[x, y]` points in drawing order
    pub series: Vec<[f64; 2]>,
}

impl ChartSpec {
    /// First line of the title, used for window titles and log lines.
    pub fn headline(&self) -> &str {
        self.title.lines().next().unwrap_or_default()
    }

    /// Minimum and maximum y value, `None` for an empty series.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        let mut ys = self.series.iter().map(|p| p[1]);
        let first = ys.next()?;
        Some(ys.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }
}

/// Something that can render a chart.
///
/// `plot` blocks until the chart is dismissed; batch implementations return
/// immediately.
pub trait ChartSink {
    fn plot(&mut self, spec: &ChartSpec) -> BudgetResult<()>;
}

/// Renders nothing. Keeps every chart it was given and logs a summary line.
#[derive(Debug, Default)]
pub struct HeadlessSink {
    charts: Vec<ChartSpec>,
}

impl HeadlessSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Charts received so far, in order.
    pub fn charts(&self) -> &[ChartSpec] {
        &self.charts
    }

    pub fn into_charts(self) -> Vec<ChartSpec> {
        self.charts
    }
}

impl ChartSink for HeadlessSink {
    fn plot(&mut self, spec: &ChartSpec) -> BudgetResult<()> {
        match spec.y_range() {
            Some((lo, hi)) => tracing::info!(
                chart = spec.headline(),
                points = spec.series.len(),
                y_min = lo,
                y_max = hi,
                "chart recorded (headless)"
            ),
            None => tracing::info!(chart = spec.headline(), "empty chart recorded (headless)"),
        }
        self.charts.push(spec.clone());
        Ok(())
    }
}
