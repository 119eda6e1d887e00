//! Color scheme definitions for the tracker UI.
//!
//! This module contains the [`ColorScheme`] enum, the per-scheme plot colours
//! and the viridis ramp used to colour the recency scatter.

use eframe::egui::{Color32, Context, Visuals};

/// Visual theme for the tracker window.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ColorScheme {
    /// Follow the eframe default (dark).
    #[default]
    Dark,
    Light,
}

/// Colours of the individual plot elements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotColors {
    /// Fading trail line.
    pub trail: Color32,
    /// Highlighted latest position.
    pub latest: Color32,
    /// X-coordinate history line.
    pub x_line: Color32,
    /// Y-coordinate history line.
    pub y_line: Color32,
}

impl ColorScheme {
    /// Apply this scheme's visuals to an egui context.
    pub fn apply(&self, ctx: &Context) {
        let visuals = match self {
            ColorScheme::Dark => Visuals::dark(),
            ColorScheme::Light => Visuals::light(),
        };
        ctx.set_visuals(visuals);
    }

    /// Both schemes share the tab10 palette; only the surrounding visuals differ.
    pub fn plot_colors(&self) -> PlotColors {
        PlotColors {
            trail: Color32::from_rgb(214, 39, 40).gamma_multiply(0.7),
            latest: Color32::from_rgb(31, 119, 180),
            x_line: Color32::from_rgb(31, 119, 180),
            y_line: Color32::from_rgb(44, 160, 44),
        }
    }
}

/// Stops of matplotlib's viridis map at 0, 1/8, ..., 1.
const VIRIDIS: [[u8; 3]; 9] = [
    [68, 1, 84],
    [71, 45, 123],
    [59, 82, 139],
    [44, 114, 142],
    [33, 145, 140],
    [40, 174, 128],
    [94, 201, 98],
    [173, 220, 48],
    [253, 231, 37],
];

/// Viridis colour for `t` in `0..=1` (clamped), linearly interpolated between stops.
pub fn viridis(t: f32) -> Color32 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let scaled = t * (VIRIDIS.len() - 1) as f32;
    let lo = (scaled.floor() as usize).min(VIRIDIS.len() - 2);
    let frac = scaled - lo as f32;
    let [r0, g0, b0] = VIRIDIS[lo];
    let [r1, g1, b1] = VIRIDIS[lo + 1];
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * frac).round() as u8;
    Color32::from_rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viridis_endpoints() {
        assert_eq!(viridis(0.0), Color32::from_rgb(68, 1, 84));
        assert_eq!(viridis(1.0), Color32::from_rgb(253, 231, 37));
        assert_eq!(viridis(2.0), viridis(1.0));
        assert_eq!(viridis(-1.0), viridis(0.0));
    }

    #[test]
    fn light_and_dark_share_plot_colors() {
        assert_eq!(ColorScheme::Light.plot_colors(), ColorScheme::Dark.plot_colors());
        assert_eq!(ColorScheme::default(), ColorScheme::Dark);
    }

    #[test]
    fn viridis_hits_middle_stop() {
        assert_eq!(viridis(0.5), Color32::from_rgb(33, 145, 140));
    }
}
