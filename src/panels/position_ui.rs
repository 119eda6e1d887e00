//! Position view: fading trail, recency scatter and the current point.

use eframe::egui;
use egui_plot::{Line, Plot, Points};

use crate::color_scheme::PlotColors;
use crate::data::frames::PositionFrame;
use crate::platform::ScreenSize;

/// Screen Y grows downwards; the plot draws `-y` and labels ticks with `|y|`.
fn to_plot([x, y]: [f64; 2]) -> [f64; 2] {
    [x, -y]
}

pub fn show(ui: &mut egui::Ui, frame: &PositionFrame, screen: ScreenSize, colors: PlotColors) {
    ui.label(egui::RichText::new("Current Mouse Position (Y-axis inverted)").strong());

    let width = screen.width as f64;
    let height = screen.height as f64;

    let plot = Plot::new("position_plot")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .x_axis_label("X Coordinate")
        .y_axis_label("Y Coordinate (0 at top)")
        .y_axis_formatter(|y, _range| format!("{:.0}", -y.value));

    plot.show(ui, |plot_ui| {
        plot_ui.set_plot_bounds_x(0.0..=width);
        plot_ui.set_plot_bounds_y(-height..=0.0);

        if frame.trail.len() >= 2 {
            let trail: Vec<[f64; 2]> = frame.trail.iter().copied().map(to_plot).collect();
            plot_ui.line(Line::new("Trail", trail).color(colors.trail).width(1.5));
        }

        for &(p, color) in &frame.scatter {
            plot_ui.points(Points::new("", vec![to_plot(p)]).radius(2.5).color(color));
        }

        if let Some(p) = frame.latest {
            plot_ui.points(
                Points::new("Current", vec![to_plot(p)])
                    .radius(5.0)
                    .color(colors.latest),
            );
        }
    });
}
