//! Configuration types for the cursor tracker.

use crate::color_scheme::ColorScheme;
use crate::hotkeys::Hotkeys;

// ─────────────────────────────────────────────────────────────────────────────
// Buffers
// ─────────────────────────────────────────────────────────────────────────────

/// Capacities of the rolling buffers.
#[derive(Clone, Debug, PartialEq)]
pub struct BufferConfig {
    /// Number of samples kept in the history buffer. Default: `1000`.
    pub history_capacity: usize,
    /// Number of positions kept for the fading trail. Default: `100`.
    pub trail_capacity: usize,
    /// Number of most recent samples drawn in the recency scatter. Default: `100`.
    pub scatter_len: usize,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            history_capacity: 1000,
            trail_capacity: 100,
            scatter_len: 100,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// View window
// ─────────────────────────────────────────────────────────────────────────────

/// Parameters of the history view-window selection.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowConfig {
    /// Share of the history shown at once. Default: `0.2`.
    pub fraction: f64,
    /// Lower bound on the window size in samples. Default: `100`.
    pub min_size: usize,
    /// History plots stay untouched until this many samples exist. Default: `10`.
    pub min_history_for_plots: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            fraction: 0.2,
            min_size: 100,
            min_history_for_plots: 10,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Axis padding
// ─────────────────────────────────────────────────────────────────────────────

/// Relative padding and absolute floor applied around an axis range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Padding {
    pub fraction: f64,
    pub floor: f64,
}

/// Padding used by the history plots.
#[derive(Clone, Debug, PartialEq)]
pub struct PaddingConfig {
    /// Time axis. Default: 5% with a 0.1 s floor.
    pub time: Padding,
    /// X/Y coordinate axes. Default: 10% with a 10 px floor.
    pub coord: Padding,
}

impl Default for PaddingConfig {
    fn default() -> Self {
        Self {
            time: Padding {
                fraction: 0.05,
                floor: 0.1,
            },
            coord: Padding {
                fraction: 0.1,
                floor: 10.0,
            },
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Pointer backend
// ─────────────────────────────────────────────────────────────────────────────

/// Where cursor samples come from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerBackend {
    /// Global cursor position from the host windowing system.
    #[default]
    System,
    /// Pointer position as seen by the tracker window itself (only while it is
    /// hovered). Useful where global pointer queries are not permitted.
    Viewport,
}

// ─────────────────────────────────────────────────────────────────────────────
// TrackerConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the tracker.
///
/// | Field          | Purpose |
/// |----------------|---------|
/// | `buffers`      | Rolling buffer capacities |
/// | `window`       | View-window selection parameters |
/// | `padding`      | History-plot axis padding |
/// | `color_scheme` | Visual theme |
/// | `hotkeys`      | Keyboard shortcuts |
#[derive(Clone)]
pub struct TrackerConfig {
    // ── Data ─────────────────────────────────────────────────────────────────
    pub buffers: BufferConfig,
    pub window: WindowConfig,
    pub padding: PaddingConfig,

    // ── Sampling ─────────────────────────────────────────────────────────────
    /// Source of cursor samples.
    pub pointer: PointerBackend,
    /// Tick rate used when the display refresh rate cannot be detected.
    pub fallback_refresh_hz: u32,
    /// Skip detection and tick at this rate.
    pub refresh_hz_override: Option<u32>,

    // ── Window / chrome ──────────────────────────────────────────────────────
    /// Native window title.
    pub title: String,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
    pub color_scheme: ColorScheme,
    pub hotkeys: Hotkeys,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            buffers: BufferConfig::default(),
            window: WindowConfig::default(),
            padding: PaddingConfig::default(),

            pointer: PointerBackend::System,
            fallback_refresh_hz: 60,
            refresh_hz_override: None,

            title: "Mouse Position Tracker".to_string(),
            native_options: None,
            color_scheme: ColorScheme::default(),
            hotkeys: Hotkeys::default(),
        }
    }
}
