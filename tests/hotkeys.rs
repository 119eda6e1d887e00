use cursor_tracker::hotkeys::*;
use eframe::egui::Key;

#[test]
fn tooltip_with_no_hotkey_returns_label_only() {
    assert_eq!(format_button_tooltip("Exit", None), "Exit");
}

#[test]
fn tooltip_with_plain_hotkey() {
    let hk = Hotkey::new(Modifier::None, Key::A);
    assert_eq!(format_button_tooltip("Auto-scroll", Some(&hk)), "Auto-scroll [A]");
}

#[test]
fn tooltip_with_ctrl_hotkey() {
    let hk = Hotkey::new(Modifier::Ctrl, Key::Q);
    assert_eq!(format_button_tooltip("Exit", Some(&hk)), "Exit [Ctrl+Q]");
}

#[test]
fn default_bindings() {
    let hk = Hotkeys::default();
    assert_eq!(hk.toggle_auto_scroll, Some(Hotkey::new(Modifier::None, Key::A)));
    assert_eq!(hk.exit, Some(Hotkey::new(Modifier::None, Key::Escape)));
    assert_eq!(hk.exit_alt, Some(Hotkey::new(Modifier::Ctrl, Key::Q)));
}
