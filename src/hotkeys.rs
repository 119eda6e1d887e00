//! Keyboard shortcuts for the tracker window.

use std::fmt;

use eframe::egui;

/// Modifier keys used for hotkeys.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Modifier {
    None,
    Ctrl,
    Alt,
    Shift,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Modifier::None => "",
            Modifier::Ctrl => "Ctrl",
            Modifier::Alt => "Alt",
            Modifier::Shift => "Shift",
        };
        write!(f, "{}", s)
    }
}

/// A single hotkey consisting of an optional modifier and a key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Hotkey {
    pub modifier: Modifier,
    pub key: egui::Key,
}

impl Hotkey {
    pub const fn new(modifier: Modifier, key: egui::Key) -> Self {
        Self { modifier, key }
    }

    fn modifiers_match(&self, m: &egui::Modifiers) -> bool {
        match self.modifier {
            Modifier::None => !m.ctrl && !m.command && !m.alt,
            Modifier::Ctrl => m.ctrl || m.command,
            Modifier::Alt => m.alt,
            Modifier::Shift => m.shift,
        }
    }

    /// Whether this hotkey was pressed in the current frame's input.
    pub fn pressed(&self, input: &egui::InputState) -> bool {
        input.events.iter().any(|e| match e {
            egui::Event::Key {
                key,
                pressed: true,
                repeat: false,
                modifiers,
                ..
            } => *key == self.key && self.modifiers_match(modifiers),
            _ => false,
        })
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifier == Modifier::None {
            write!(f, "{}", self.key.symbol_or_name())
        } else {
            write!(f, "{}+{}", self.modifier, self.key.symbol_or_name())
        }
    }
}

/// Configured shortcuts. `None` disables a binding.
#[derive(Clone, Debug, PartialEq)]
pub struct Hotkeys {
    pub toggle_auto_scroll: Option<Hotkey>,
    pub exit: Option<Hotkey>,
    pub exit_alt: Option<Hotkey>,
}

impl Default for Hotkeys {
    fn default() -> Self {
        Self {
            toggle_auto_scroll: Some(Hotkey::new(Modifier::None, egui::Key::A)),
            exit: Some(Hotkey::new(Modifier::None, egui::Key::Escape)),
            exit_alt: Some(Hotkey::new(Modifier::Ctrl, egui::Key::Q)),
        }
    }
}

/// Actions a hotkey can trigger.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HotkeyAction {
    ToggleAutoScroll,
    Exit,
}

impl Hotkeys {
    /// Actions triggered in this frame, in a fixed order.
    pub fn triggered(&self, input: &egui::InputState) -> Vec<HotkeyAction> {
        let mut actions = Vec::new();
        if self.toggle_auto_scroll.is_some_and(|h| h.pressed(input)) {
            actions.push(HotkeyAction::ToggleAutoScroll);
        }
        if self.exit.is_some_and(|h| h.pressed(input))
            || self.exit_alt.is_some_and(|h| h.pressed(input))
        {
            actions.push(HotkeyAction::Exit);
        }
        actions
    }
}

/// Tooltip text for a button: `"Label [Hotkey]"`, or just the label.
pub fn format_button_tooltip(label: &str, hotkey: Option<&Hotkey>) -> String {
    match hotkey {
        Some(hk) => format!("{} [{}]", label, hk),
        None => label.to_string(),
    }
}
