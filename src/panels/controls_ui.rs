//! Control strip: auto-scroll toggle, scrub slider, status and exit.

use eframe::egui;
use egui_phosphor::regular::SIGN_OUT;

use crate::hotkeys::{format_button_tooltip, Hotkeys};
use crate::tracker::TrackerState;

/// What the user asked for in this frame beyond direct state edits.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ControlsResponse {
    pub exit_requested: bool,
}

pub fn show(
    ui: &mut egui::Ui,
    state: &mut TrackerState,
    refresh_hz: u32,
    hotkeys: &Hotkeys,
) -> ControlsResponse {
    let mut response = ControlsResponse::default();

    ui.horizontal(|ui| {
        let mut auto_scroll = state.is_auto_scroll();
        let toggle = ui
            .checkbox(&mut auto_scroll, "Auto-scroll")
            .on_hover_text(format_button_tooltip(
                "Follow the newest samples",
                hotkeys.toggle_auto_scroll.as_ref(),
            ));
        if toggle.changed() {
            state.set_auto_scroll(auto_scroll);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let exit = ui
                .button(format!("{SIGN_OUT} Exit"))
                .on_hover_text(format_button_tooltip("Exit", hotkeys.exit.as_ref()));
            if exit.clicked() {
                response.exit_requested = true;
            }
            ui.label(format!("Refresh: {refresh_hz}Hz"));
            ui.label(state.status_text());

            // Whatever width is left goes to the slider.
            ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                ui.spacing_mut().slider_width = (ui.available_width() - 8.0).max(50.0);
                let mut value = state.slider_value();
                let slider = ui.add(egui::Slider::new(&mut value, 0.0..=100.0).show_value(false));
                if slider.changed() {
                    state.scrub(value);
                }
            });
        });
    });

    response
}
