//! Cursor tracker crate root: re-exports and module wiring.
//!
//! The tracker samples the on-screen cursor once per tick and shows the
//! samples in two live views built on egui/eframe:
//! - a position view with a fading trail and a recency-coloured scatter
//! - a scrolling X/Y history view that either follows the newest data or
//!   sits where the user scrubbed it
//!
//! Modules:
//! - `data`: rolling buffers, view-window selection, axis padding, render model
//! - `tracker`: explicit tracker state and the best-effort tick
//! - `scheduler`: repeating tick schedule with cancellation
//! - `platform`: cursor sampling, refresh-rate detection, screen geometry
//! - `panels`: egui_plot drawing code
//! - `app`: eframe application and `run_tracker`

pub mod app;
pub mod color_scheme;
pub mod config;
pub mod data;
pub mod error;
pub mod hotkeys;
pub mod panels;
pub mod platform;
pub mod scheduler;
pub mod tracker;

// Public re-exports for a compact external API
pub use app::{run_tracker, TrackerApp};
pub use color_scheme::ColorScheme;
pub use config::{BufferConfig, PaddingConfig, PointerBackend, TrackerConfig, WindowConfig};
pub use data::history::{History, Sample};
pub use data::view_window::{ScrollMode, ViewSelector, ViewWindow};
pub use error::{TrackerError, TrackerResult};
pub use tracker::TrackerState;
