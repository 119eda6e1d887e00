//! Selection of the history slice shown by the time-series plots.
//!
//! Two mutually exclusive modes exist: auto-scroll, which always shows the
//! newest `window_size` samples, and manual, where the scrub slider position
//! picks the start of the window. Dragging the slider enters manual mode;
//! only re-enabling auto-scroll leaves it. A manual window is pinned when the
//! slider moves and keeps its indices while new samples arrive.

use crate::config::WindowConfig;

/// Half-open index range `[start, end)` into the history buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewWindow {
    pub start: usize,
    pub end: usize,
}

impl ViewWindow {
    /// Degenerate window used while there is too little data.
    pub const EMPTY: ViewWindow = ViewWindow { start: 0, end: 0 };

    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: start.min(end),
            end,
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Scroll state of the history view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollMode {
    Auto,
    /// Slider value in `0.0..=100.0`.
    Manual { value: f64 },
}

/// Number of samples shown at once for a history of `len` samples:
/// `max(ceil(fraction * len), min_size)`.
pub fn window_size(len: usize, cfg: &WindowConfig) -> usize {
    // Round away float noise first so that e.g. 0.2 * 505 gives 101, not 102.
    let scaled = ((len as f64 * cfg.fraction) * 1e6).round() / 1e6;
    (scaled.ceil() as usize).max(cfg.min_size)
}

/// The newest `window_size` samples.
pub fn auto_window(len: usize, cfg: &WindowConfig) -> ViewWindow {
    if len < 2 {
        return ViewWindow::EMPTY;
    }
    let size = window_size(len, cfg);
    ViewWindow::new(len.saturating_sub(size), len)
}

/// Window whose start is placed by a slider `value` in `0..=100`.
pub fn manual_window(len: usize, value: f64, cfg: &WindowConfig) -> ViewWindow {
    if len < 2 {
        return ViewWindow::EMPTY;
    }
    let size = window_size(len, cfg);
    let max_start = len.saturating_sub(size);
    let value = clamp_slider(value);
    let start = ((value / 100.0 * max_start as f64).floor() as usize).min(max_start);
    ViewWindow::new(start, (start + size).min(len))
}

fn clamp_slider(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Owns the scroll mode and turns it into a [`ViewWindow`] each tick.
#[derive(Debug, Clone)]
pub struct ViewSelector {
    mode: ScrollMode,
    /// Window fixed by the last scrub; only read in manual mode.
    pinned: ViewWindow,
    cfg: WindowConfig,
}

impl Default for ViewSelector {
    fn default() -> Self {
        Self::new(WindowConfig::default())
    }
}

impl ViewSelector {
    pub fn new(cfg: WindowConfig) -> Self {
        Self {
            mode: ScrollMode::Auto,
            pinned: ViewWindow::EMPTY,
            cfg,
        }
    }

    pub fn mode(&self) -> ScrollMode {
        self.mode
    }

    pub fn is_auto_scroll(&self) -> bool {
        matches!(self.mode, ScrollMode::Auto)
    }

    /// Turning auto-scroll off pins the window auto-scroll showed for a
    /// history of `len` samples (slider at 100).
    pub fn set_auto_scroll(&mut self, enabled: bool, len: usize) {
        match (enabled, self.mode) {
            (true, _) => self.mode = ScrollMode::Auto,
            (false, ScrollMode::Auto) => {
                self.mode = ScrollMode::Manual { value: 100.0 };
                self.pinned = auto_window(len, &self.cfg);
            }
            (false, ScrollMode::Manual { .. }) => {}
        }
    }

    /// User moved the slider: switch to manual mode at `value` and pin the
    /// window it selects for a history of `len` samples.
    pub fn scrub(&mut self, value: f64, len: usize) {
        let value = clamp_slider(value);
        self.mode = ScrollMode::Manual { value };
        self.pinned = manual_window(len, value, &self.cfg);
    }

    /// Slider position to display: pinned to 100 while auto-scrolling.
    pub fn slider_value(&self) -> f64 {
        match self.mode {
            ScrollMode::Auto => 100.0,
            ScrollMode::Manual { value } => value,
        }
    }

    pub fn select(&self, len: usize) -> ViewWindow {
        match self.mode {
            ScrollMode::Auto => auto_window(len, &self.cfg),
            ScrollMode::Manual { .. } if len < 2 => ViewWindow::EMPTY,
            ScrollMode::Manual { .. } => {
                ViewWindow::new(self.pinned.start.min(len), self.pinned.end.min(len))
            }
        }
    }
}
