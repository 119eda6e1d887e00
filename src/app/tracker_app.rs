//! Standalone tracker application that implements [`eframe::App`].
//!
//! [`TrackerApp`] glues the headless [`TrackerState`] to the window. Every
//! frame it:
//!
//! 1. Applies the colour scheme (first frame only).
//! 2. Feeds the in-window pointer position to the pointer source.
//! 3. Handles hotkeys and window-close requests.
//! 4. Runs a best-effort tick if the scheduler says one is due.
//! 5. Draws the control strip, the position view and the history view.
//! 6. Requests the next repaint for when the following tick is due.

use std::time::Instant;

use eframe::egui;

use crate::color_scheme::ColorScheme;
use crate::config::TrackerConfig;
use crate::hotkeys::{HotkeyAction, Hotkeys};
use crate::panels::{controls_ui, history_ui, position_ui};
use crate::platform::{pointer_source, PointerSource, ScreenSize};
use crate::scheduler::{interval_for_rate, TickScheduler};
use crate::tracker::TrackerState;

pub struct TrackerApp {
    pub state: TrackerState,
    pointer: Box<dyn PointerSource>,
    scheduler: TickScheduler,
    started: Instant,

    /// Detected (or fallback) display refresh rate, also the tick rate.
    pub refresh_hz: u32,
    /// Extent of the position view's axes.
    pub screen: ScreenSize,

    hotkeys: Hotkeys,
    color_scheme: ColorScheme,
    color_scheme_applied: bool,
    exiting: bool,
}

impl TrackerApp {
    pub fn new(cfg: &TrackerConfig, refresh_hz: u32, screen: ScreenSize) -> Self {
        Self::with_pointer(cfg, refresh_hz, screen, pointer_source(cfg.pointer))
    }

    /// Like [`new`](Self::new) but with an explicit pointer source.
    pub fn with_pointer(
        cfg: &TrackerConfig,
        refresh_hz: u32,
        screen: ScreenSize,
        pointer: Box<dyn PointerSource>,
    ) -> Self {
        let interval = interval_for_rate(refresh_hz, cfg.fallback_refresh_hz);
        tracing::info!(
            refresh_hz,
            interval_ms = interval.as_millis() as u64,
            pointer = pointer.name(),
            "tracker ready"
        );
        Self {
            state: TrackerState::new(cfg),
            pointer,
            scheduler: TickScheduler::new(interval),
            started: Instant::now(),
            refresh_hz,
            screen,
            hotkeys: cfg.hotkeys.clone(),
            color_scheme: cfg.color_scheme.clone(),
            color_scheme_applied: false,
            exiting: false,
        }
    }

    /// Cancel the tick schedule and close the window. Idempotent.
    fn shutdown(&mut self, ctx: &egui::Context) {
        if self.exiting {
            return;
        }
        tracing::info!("Cleaning up and exiting...");
        self.exiting = true;
        self.scheduler.cancel();
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }

    /// Pointer position over the window in physical screen pixels.
    fn viewport_pointer(ctx: &egui::Context) -> Option<(i32, i32)> {
        ctx.input(|i| {
            let inner = i.viewport().inner_rect?;
            let p = i.pointer.latest_pos()?;
            let ppp = i.pixels_per_point;
            Some((
                ((inner.min.x + p.x) * ppp).round() as i32,
                ((inner.min.y + p.y) * ppp).round() as i32,
            ))
        })
    }
}

impl eframe::App for TrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.color_scheme_applied {
            self.color_scheme.apply(ctx);
            self.color_scheme_applied = true;
        }

        self.pointer.observe_viewport(Self::viewport_pointer(ctx));

        let actions = ctx.input(|i| self.hotkeys.triggered(i));
        for action in actions {
            match action {
                HotkeyAction::ToggleAutoScroll => self.state.toggle_auto_scroll(),
                HotkeyAction::Exit => self.shutdown(ctx),
            }
        }
        if ctx.input(|i| i.viewport().close_requested()) {
            self.shutdown(ctx);
        }

        let now = Instant::now();
        if self.scheduler.poll(now) {
            let elapsed = now.duration_since(self.started).as_secs_f64();
            self.state.best_effort_tick(self.pointer.as_mut(), elapsed);
        }

        let colors = self.color_scheme.plot_colors();

        let controls = egui::TopBottomPanel::bottom("controls")
            .show(ctx, |ui| {
                controls_ui::show(ui, &mut self.state, self.refresh_hz, &self.hotkeys)
            })
            .inner;
        if controls.exit_requested {
            self.shutdown(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |cols| {
                position_ui::show(
                    &mut cols[0],
                    self.state.position_frame(),
                    self.screen,
                    colors,
                );
                history_ui::show(&mut cols[1], self.state.history_frame(), colors);
            });
        });

        if let Some(delay) = self.scheduler.time_until_next(Instant::now()) {
            ctx.request_repaint_after(delay);
        }
    }
}
