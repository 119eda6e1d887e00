//! History view: X and Y coordinate time series for the current view window.

use eframe::egui;
use egui::Color32;
use egui_plot::{Line, Plot};

use crate::color_scheme::PlotColors;
use crate::data::axis::AxisRange;
use crate::data::frames::HistoryFrame;

struct SeriesPlot<'a> {
    id: &'static str,
    title: &'static str,
    y_label: &'static str,
    color: Color32,
    points: &'a [[f64; 2]],
    time: Option<AxisRange>,
    value: Option<AxisRange>,
}

/// Draw both series stacked. Before the first [`HistoryFrame`] exists the
/// plots are shown empty with their default bounds.
pub fn show(ui: &mut egui::Ui, frame: Option<&HistoryFrame>, colors: PlotColors) {
    let plot_height = ((ui.available_height() - 2.0 * ui.spacing().item_spacing.y) / 2.0 - 20.0).max(60.0);

    let empty: &[[f64; 2]] = &[];
    let x_plot = SeriesPlot {
        id: "x_history_plot",
        title: "X Coordinate History",
        y_label: "X Position",
        color: colors.x_line,
        points: frame.map_or(empty, |f| f.x_series.as_slice()),
        time: frame.map(|f| f.time),
        value: frame.map(|f| f.x_range),
    };
    let y_plot = SeriesPlot {
        id: "y_history_plot",
        title: "Y Coordinate History",
        y_label: "Y Position",
        color: colors.y_line,
        points: frame.map_or(empty, |f| f.y_series.as_slice()),
        time: frame.map(|f| f.time),
        value: frame.map(|f| f.y_range),
    };

    show_series(ui, x_plot, plot_height);
    show_series(ui, y_plot, plot_height);
}

fn show_series(ui: &mut egui::Ui, series: SeriesPlot<'_>, height: f32) {
    ui.label(egui::RichText::new(series.title).strong());
    let plot = Plot::new(series.id)
        .height(height)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_grid(true)
        .x_axis_label("Time (seconds)")
        .y_axis_label(series.y_label);

    plot.show(ui, |plot_ui| {
        if let Some(time) = series.time {
            plot_ui.set_plot_bounds_x(time.as_range());
        }
        if let Some(value) = series.value {
            plot_ui.set_plot_bounds_y(value.as_range());
        }
        if !series.points.is_empty() {
            plot_ui.line(Line::new(series.title, series.points.to_vec()).color(series.color));
        }
    });
}
