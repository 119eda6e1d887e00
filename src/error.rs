//! Error type shared by the sampling, probing and tick code paths.

use thiserror::Error;

/// Errors raised while sampling the cursor or probing the display.
///
/// None of these are fatal: the tick loop logs and swallows them, and the
/// refresh-rate probe falls back to a default rate.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The cursor position could not be read this tick.
    #[error("pointer position unavailable: {0}")]
    Pointer(String),

    /// A refresh-rate probe produced no usable value.
    #[error("refresh rate unavailable: {0}")]
    RefreshRate(String),

    /// Monitor enumeration failed.
    #[error("display query failed: {0}")]
    Display(String),

    /// An external helper ran but exited unsuccessfully.
    #[error("`{command}` exited with {status}")]
    CommandFailed { command: String, status: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type TrackerResult<T> = Result<T, TrackerError>;
