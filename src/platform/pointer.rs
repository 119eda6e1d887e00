//! Cursor position sources.

use crate::error::{TrackerError, TrackerResult};

/// Something that can report the current cursor position in screen pixels.
pub trait PointerSource {
    /// Read the cursor position once.
    fn position(&mut self) -> TrackerResult<(i32, i32)>;

    /// Pointer position as observed by the tracker window this frame, already
    /// translated to screen pixels. Only sources that rely on it need to care.
    fn observe_viewport(&mut self, _pos: Option<(i32, i32)>) {}

    /// Short name for log output.
    fn name(&self) -> &'static str;
}

// ─────────────────────────────────────────────────────────────────────────────
// System pointer
// ─────────────────────────────────────────────────────────────────────────────

/// Global cursor position from the host windowing system.
#[derive(Debug, Default)]
pub struct SystemPointer;

impl SystemPointer {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_os = "windows")]
impl PointerSource for SystemPointer {
    fn position(&mut self) -> TrackerResult<(i32, i32)> {
        use windows::Win32::Foundation::POINT;
        use windows::Win32::UI::WindowsAndMessaging::GetCursorPos;

        let mut point = POINT::default();
        unsafe { GetCursorPos(&mut point) }.map_err(|e| TrackerError::Pointer(e.to_string()))?;
        Ok((point.x, point.y))
    }

    fn name(&self) -> &'static str {
        "GetCursorPos"
    }
}

#[cfg(target_os = "macos")]
impl PointerSource for SystemPointer {
    fn position(&mut self) -> TrackerResult<(i32, i32)> {
        use core_graphics::event::CGEvent;
        use core_graphics::event_source::{CGEventSource, CGEventSourceStateID};

        // CGEvent locations are in global display coordinates with the origin
        // at the top-left of the main display.
        let source = CGEventSource::new(CGEventSourceStateID::CombinedSessionState)
            .map_err(|_| TrackerError::Pointer("cannot create CGEventSource".into()))?;
        let event = CGEvent::new(source)
            .map_err(|_| TrackerError::Pointer("cannot create CGEvent".into()))?;
        let p = event.location();
        Ok((p.x.round() as i32, p.y.round() as i32))
    }

    fn name(&self) -> &'static str {
        "CGEvent"
    }
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
impl PointerSource for SystemPointer {
    fn position(&mut self) -> TrackerResult<(i32, i32)> {
        let output = std::process::Command::new("xdotool")
            .args(["getmouselocation", "--shell"])
            .output()?;
        if !output.status.success() {
            return Err(TrackerError::CommandFailed {
                command: "xdotool getmouselocation".to_string(),
                status: output.status.to_string(),
            });
        }
        parse_xdotool_location(&String::from_utf8_lossy(&output.stdout))
    }

    fn name(&self) -> &'static str {
        "xdotool"
    }
}

/// Parse the `--shell` output of `xdotool getmouselocation`
/// (`X=..`, `Y=..`, `SCREEN=..`, `WINDOW=..` lines).
pub fn parse_xdotool_location(text: &str) -> TrackerResult<(i32, i32)> {
    let mut x = None;
    let mut y = None;
    for line in text.lines() {
        let Some((key, value)) = line.trim().split_once('=') else {
            continue;
        };
        match key {
            "X" => x = value.trim().parse::<i32>().ok(),
            "Y" => y = value.trim().parse::<i32>().ok(),
            _ => {}
        }
    }
    match (x, y) {
        (Some(x), Some(y)) => Ok((x, y)),
        _ => Err(TrackerError::Pointer(format!(
            "unexpected xdotool output: {:?}",
            text.trim()
        ))),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Viewport pointer
// ─────────────────────────────────────────────────────────────────────────────

/// Pointer position as seen by the tracker window. Only known while the
/// cursor is over the window; the last known position is kept after it
/// leaves.
#[derive(Debug, Default)]
pub struct ViewportPointer {
    last: Option<(i32, i32)>,
}

impl ViewportPointer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PointerSource for ViewportPointer {
    fn position(&mut self) -> TrackerResult<(i32, i32)> {
        self.last
            .ok_or_else(|| TrackerError::Pointer("pointer has not entered the window yet".into()))
    }

    fn observe_viewport(&mut self, pos: Option<(i32, i32)>) {
        if pos.is_some() {
            self.last = pos;
        }
    }

    fn name(&self) -> &'static str {
        "viewport"
    }
}
