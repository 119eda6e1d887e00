//! Tracker state and the per-tick update.
//!
//! [`TrackerState`] holds every buffer and the derived render model. The UI
//! owns one instance and drives it; nothing in here touches egui, so the
//! whole poll → append → rebuild flow is testable headless.

use crate::config::{PaddingConfig, TrackerConfig};
use crate::data::frames::{HistoryFrame, PositionFrame};
use crate::data::history::{History, Sample};
use crate::data::view_window::{ScrollMode, ViewSelector, ViewWindow};
use crate::error::TrackerResult;
use crate::platform::PointerSource;

pub struct TrackerState {
    history: History,
    selector: ViewSelector,
    padding: PaddingConfig,
    scatter_len: usize,
    min_history_for_plots: usize,

    window: ViewWindow,
    position: PositionFrame,
    /// Last frame handed to the history plots; `None` until enough data exists.
    history_frame: Option<HistoryFrame>,

    ticks: u64,
    failed_ticks: u64,
}

impl Default for TrackerState {
    fn default() -> Self {
        Self::new(&TrackerConfig::default())
    }
}

impl TrackerState {
    pub fn new(cfg: &TrackerConfig) -> Self {
        Self {
            history: History::new(&cfg.buffers),
            selector: ViewSelector::new(cfg.window.clone()),
            padding: cfg.padding.clone(),
            scatter_len: cfg.buffers.scatter_len,
            min_history_for_plots: cfg.window.min_history_for_plots,
            window: ViewWindow::EMPTY,
            position: PositionFrame::default(),
            history_frame: None,
            ticks: 0,
            failed_ticks: 0,
        }
    }

    /// Record one sample and rebuild everything derived from it.
    pub fn apply_sample(&mut self, sample: Sample) {
        self.history.record(sample);
        self.position = PositionFrame::build(&self.history, self.scatter_len);
        self.refresh_view();
        self.ticks += 1;
    }

    /// Recompute the view window and, when enough data exists, the history
    /// frame. Below the plot threshold the previous frame is left as is.
    pub fn refresh_view(&mut self) {
        self.window = self.selector.select(self.history.len());
        if self.history.len() < self.min_history_for_plots || self.window.is_empty() {
            return;
        }
        if let Some(frame) = HistoryFrame::build(&self.history, self.window, &self.padding) {
            self.history_frame = Some(frame);
        }
    }

    /// Read the pointer once and record it at `elapsed_secs`.
    pub fn tick(&mut self, pointer: &mut dyn PointerSource, elapsed_secs: f64) -> TrackerResult<()> {
        let (x, y) = pointer.position()?;
        self.apply_sample(Sample::new(x, y, elapsed_secs));
        Ok(())
    }

    /// Run [`tick`](Self::tick), logging and swallowing any error so the
    /// schedule keeps going. Returns whether the tick succeeded.
    pub fn best_effort_tick(&mut self, pointer: &mut dyn PointerSource, elapsed_secs: f64) -> bool {
        match self.tick(pointer, elapsed_secs) {
            Ok(()) => true,
            Err(e) => {
                self.failed_ticks += 1;
                tracing::warn!(
                    source = pointer.name(),
                    failed_ticks = self.failed_ticks,
                    "Error in update: {e}"
                );
                false
            }
        }
    }

    // ── View controls ───────────────────────────────────────────────────────

    pub fn set_auto_scroll(&mut self, enabled: bool) {
        self.selector.set_auto_scroll(enabled, self.history.len());
        self.refresh_view();
    }

    pub fn toggle_auto_scroll(&mut self) {
        let enabled = !self.selector.is_auto_scroll();
        self.set_auto_scroll(enabled);
    }

    /// Slider moved to `value` (0..=100): enter manual mode there. The window
    /// stays put until auto-scroll is re-enabled.
    pub fn scrub(&mut self, value: f64) {
        self.selector.scrub(value, self.history.len());
        self.refresh_view();
    }

    pub fn is_auto_scroll(&self) -> bool {
        self.selector.is_auto_scroll()
    }

    pub fn scroll_mode(&self) -> ScrollMode {
        self.selector.mode()
    }

    pub fn slider_value(&self) -> f64 {
        self.selector.slider_value()
    }

    // ── Accessors ───────────────────────────────────────────────────────────

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn window(&self) -> ViewWindow {
        self.window
    }

    pub fn position_frame(&self) -> &PositionFrame {
        &self.position
    }

    pub fn history_frame(&self) -> Option<&HistoryFrame> {
        self.history_frame.as_ref()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn failed_ticks(&self) -> u64 {
        self.failed_ticks
    }

    /// `Points: n | Current: (x, y)`, or `Points: 0` before the first sample.
    pub fn status_text(&self) -> String {
        match self.history.latest() {
            Some(s) => format!("Points: {} | Current: ({}, {})", self.history.len(), s.x, s.y),
            None => "Points: 0".to_string(),
        }
    }
}
