//! Received Power Charts
//!
//! An egui/eframe implementation of [`ChartSink`]: each chart opens its own
//! native window with an `egui_plot` line plot and blocks until the window is
//! closed, so charts appear one after another in band order.

use egui::{RichText, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints};
use friis_core::chart::{ChartSink, ChartSpec};
use friis_core::types::{BudgetError, BudgetResult};

/// Window geometry for chart windows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowOptions {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 700.0,
        }
    }
}

/// Opens one blocking window per chart.
#[derive(Debug)]
pub struct EguiChartSink {
    options: WindowOptions,
}

impl EguiChartSink {
    pub fn new(options: WindowOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> WindowOptions {
        self.options
    }

    fn viewport(&self, title: &str) -> egui::ViewportBuilder {
        egui::ViewportBuilder::default()
            .with_inner_size([self.options.width, self.options.height])
            .with_min_inner_size([480.0, 360.0])
            .with_title(title)
    }
}

impl ChartSink for EguiChartSink {
    fn plot(&mut self, spec: &ChartSpec) -> BudgetResult<()> {
        let native_options = eframe::NativeOptions {
            viewport: self.viewport(spec.headline()),
            ..Default::default()
        };

        let window = ChartWindow::new(spec.clone());
        tracing::debug!(chart = spec.headline(), "opening chart window");

        eframe::run_native(
            spec.headline(),
            native_options,
            Box::new(|_cc| Ok(Box::new(window))),
        )
        .map_err(|e| BudgetError::Render(e.to_string()))
    }
}

/// The eframe app behind a single chart window.
pub struct ChartWindow {
    spec: ChartSpec,
}

impl ChartWindow {
    pub fn new(spec: ChartSpec) -> Self {
        Self { spec }
    }

    fn render_title(&self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            let mut lines = self.spec.title.lines();
            if let Some(headline) = lines.next() {
                ui.heading(headline);
            }
            for line in lines {
                ui.label(RichText::new(line).monospace());
            }
        });
    }

    fn render_plot(&self, ui: &mut Ui) {
        let points: PlotPoints = self.spec.series.iter().copied().collect();

        Plot::new("received_power_plot")
            .legend(Legend::default())
            .x_axis_label(self.spec.x_label.clone())
            .y_axis_label(self.spec.y_label.clone())
            .show_grid(self.spec.grid)
            .allow_zoom(true)
            .allow_drag(true)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(points)
                        .name(self.spec.y_label.clone())
                        .color(egui::Color32::LIGHT_BLUE)
                        .width(2.0),
                );
            });
    }
}

impl eframe::App for ChartWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_title(ui);
            ui.add_space(8.0);
            self.render_plot(ui);
        });
    }
}
