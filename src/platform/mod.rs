//! Host-system collaborators: cursor sampling, refresh-rate detection and
//! screen geometry. Everything here sits behind a small trait or a function
//! with a fallback so the rest of the crate can be tested without a display.

pub mod pointer;
pub mod refresh;
pub mod screen;

pub use pointer::{PointerSource, SystemPointer, ViewportPointer};
pub use refresh::{default_probes, detect_refresh_rate, RefreshRateProbe};
pub use screen::{primary_screen_size, ScreenSize};

use crate::config::PointerBackend;

/// Build the pointer source selected by the configuration.
pub fn pointer_source(backend: PointerBackend) -> Box<dyn PointerSource> {
    match backend {
        PointerBackend::System => Box::new(SystemPointer::new()),
        PointerBackend::Viewport => Box::new(ViewportPointer::new()),
    }
}
