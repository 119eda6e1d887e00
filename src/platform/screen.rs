//! Primary screen geometry.

use crate::error::{TrackerError, TrackerResult};

/// Screen size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ScreenSize {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

/// Size of the primary monitor as reported by `display-info`.
pub fn query_primary_screen() -> TrackerResult<ScreenSize> {
    let displays =
        display_info::DisplayInfo::all().map_err(|e| TrackerError::Display(e.to_string()))?;
    displays
        .iter()
        .find(|d| d.is_primary)
        .or_else(|| displays.first())
        .filter(|d| d.width > 0 && d.height > 0)
        .map(|d| ScreenSize {
            width: d.width,
            height: d.height,
        })
        .ok_or_else(|| TrackerError::Display("no usable display reported".into()))
}

/// Like [`query_primary_screen`], falling back to 1920x1080.
pub fn primary_screen_size() -> ScreenSize {
    query_primary_screen().unwrap_or_else(|e| {
        let fallback = ScreenSize::default();
        tracing::warn!(
            "{e}; assuming {}x{} screen",
            fallback.width,
            fallback.height
        );
        fallback
    })
}
