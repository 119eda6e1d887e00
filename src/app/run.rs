//! Top-level entry point for running the tracker as a native window.
//!
//! [`run_tracker`] probes the display once, builds the application and
//! enters the eframe event loop.

use eframe::egui;

use crate::config::TrackerConfig;
use crate::platform::{default_probes, detect_refresh_rate, primary_screen_size};

use super::tracker_app::TrackerApp;

/// Launch the tracker in a native window.
///
/// This:
///
/// 1. Detects the display refresh rate (unless overridden), falling back to
///    `cfg.fallback_refresh_hz`.
/// 2. Measures the primary screen for the position view and window size.
/// 3. Opens a maximized native window and enters the eframe event loop.
///
/// The call blocks until the window is closed. Failing to create the window
/// is the only error returned.
pub fn run_tracker(mut cfg: TrackerConfig) -> eframe::Result<()> {
    let refresh_hz = cfg
        .refresh_hz_override
        .unwrap_or_else(|| detect_refresh_rate(&default_probes(), cfg.fallback_refresh_hz));
    let screen = primary_screen_size();
    tracing::info!(
        refresh_hz,
        width = screen.width,
        height = screen.height,
        "starting {}",
        cfg.title
    );

    let app = TrackerApp::new(&cfg, refresh_hz, screen);

    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    if opts.viewport.icon.is_none() {
        if let Some(icon) = load_app_icon_svg() {
            opts.viewport = opts.viewport.clone().with_icon(icon);
        }
    }

    // Open at screen size, like a maximized window.
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(screen.width as f32, screen.height as f32))
            .with_maximized(true);
    }

    let result = eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    );
    if result.is_ok() {
        tracing::info!("Exited cleanly.");
    }
    result
}

const ICON_SVG: &[u8] = include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/icon.svg"));

/// Render the bundled `icon.svg` into an [`egui::IconData`].
///
/// Returns `None` if the SVG cannot be parsed or rendered.
fn load_app_icon_svg() -> Option<egui::IconData> {
    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(ICON_SVG, &opt).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    let mut canvas = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::default(), &mut canvas);
    let rgba = pixmap.take();
    Some(egui::IconData {
        rgba,
        width: size.width(),
        height: size.height(),
    })
}
