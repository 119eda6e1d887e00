//! Render model: what the two panels draw, computed without touching egui.

use egui::Color32;

use crate::color_scheme::viridis;
use crate::config::PaddingConfig;
use crate::data::axis::{padded_range, AxisRange};
use crate::data::history::History;
use crate::data::view_window::ViewWindow;

/// Scatter alpha, matching the trail's translucent look.
const SCATTER_ALPHA: f32 = 0.6;

/// Contents of the position view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionFrame {
    /// Trail polyline in screen coordinates, oldest first.
    pub trail: Vec<[f64; 2]>,
    /// Most recent samples with their recency colour (newest brightest).
    pub scatter: Vec<([f64; 2], Color32)>,
    /// Latest cursor position.
    pub latest: Option<[f64; 2]>,
}

impl PositionFrame {
    pub fn build(history: &History, scatter_len: usize) -> Self {
        let trail = history
            .trail()
            .iter()
            .map(|&[x, y]| [x as f64, y as f64])
            .collect();

        let recent: Vec<[f64; 2]> = history
            .recent(scatter_len)
            .map(|s| [s.x as f64, s.y as f64])
            .collect();
        let scatter = recent
            .iter()
            .zip(recency_ramp(recent.len()))
            .map(|(&p, t)| (p, viridis(t).gamma_multiply(SCATTER_ALPHA)))
            .collect();

        Self {
            trail,
            scatter,
            latest: history.latest().map(|s| [s.x as f64, s.y as f64]),
        }
    }
}

/// `n` evenly spaced values from 0 to 1 inclusive (a single value is 0).
pub fn recency_ramp(n: usize) -> impl Iterator<Item = f32> {
    let denom = n.saturating_sub(1).max(1) as f32;
    (0..n).map(move |i| i as f32 / denom)
}

/// Contents of the two history plots for one view window.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryFrame {
    pub window: ViewWindow,
    /// `[t, x]` points.
    pub x_series: Vec<[f64; 2]>,
    /// `[t, y]` points.
    pub y_series: Vec<[f64; 2]>,
    /// Shared, padded time axis.
    pub time: AxisRange,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
}

impl HistoryFrame {
    /// `None` when `window` is empty or reaches past the end of `history`.
    pub fn build(history: &History, window: ViewWindow, padding: &PaddingConfig) -> Option<Self> {
        if window.is_empty() || window.end > history.len() {
            return None;
        }
        let slice: Vec<_> = history.slice(window).copied().collect();
        let first = slice.first()?;
        let last = slice.last()?;

        let time = AxisRange::new(first.t, last.t).padded(padding.time);
        let x_range = padded_range(slice.iter().map(|s| s.x as f64), padding.coord)?;
        let y_range = padded_range(slice.iter().map(|s| s.y as f64), padding.coord)?;

        Some(Self {
            window,
            x_series: slice.iter().map(|s| [s.t, s.x as f64]).collect(),
            y_series: slice.iter().map(|s| [s.t, s.y as f64]).collect(),
            time,
            x_range,
            y_range,
        })
    }
}
