//! Display refresh-rate detection.
//!
//! Detection runs once at startup. Every probe is allowed to fail; the
//! tracker then ticks at the configured fallback rate.

use crate::error::{TrackerError, TrackerResult};

/// A way of asking the platform for the active display refresh rate.
pub trait RefreshRateProbe {
    /// Refresh rate in whole Hz, rounded up.
    fn refresh_rate(&self) -> TrackerResult<u32>;

    /// Short name for log output.
    fn name(&self) -> &'static str;
}

/// Queries `xrandr --current` and reads the mode marked active (`*`).
#[derive(Debug, Default)]
pub struct XrandrProbe;

impl RefreshRateProbe for XrandrProbe {
    fn refresh_rate(&self) -> TrackerResult<u32> {
        let output = std::process::Command::new("xrandr")
            .arg("--current")
            .output()?;
        if !output.status.success() {
            return Err(TrackerError::CommandFailed {
                command: "xrandr --current".to_string(),
                status: output.status.to_string(),
            });
        }
        parse_xrandr_rate(&String::from_utf8_lossy(&output.stdout))
    }

    fn name(&self) -> &'static str {
        "xrandr"
    }
}

/// Extract the active mode's refresh rate from an xrandr report.
///
/// Mode lines look like `   1920x1080     60.00*+  59.94    50.00`; the
/// token carrying `*` is the active rate (`+` marks the preferred one). The
/// first active rate found wins and is rounded up.
pub fn parse_xrandr_rate(report: &str) -> TrackerResult<u32> {
    report
        .lines()
        .flat_map(str::split_whitespace)
        .find(|token| token.contains('*'))
        .ok_or_else(|| TrackerError::RefreshRate("no active mode in xrandr output".into()))
        .and_then(|token| {
            let digits = token.trim_end_matches(['*', '+']);
            let rate: f64 = digits.parse().map_err(|_| {
                TrackerError::RefreshRate(format!("cannot parse rate from {token:?}"))
            })?;
            round_up_rate(rate)
        })
}

/// Asks `display-info` for the primary monitor's frequency.
#[derive(Debug, Default)]
pub struct DisplayInfoProbe;

impl RefreshRateProbe for DisplayInfoProbe {
    fn refresh_rate(&self) -> TrackerResult<u32> {
        let displays = display_info::DisplayInfo::all()
            .map_err(|e| TrackerError::Display(e.to_string()))?;
        let display = displays
            .iter()
            .find(|d| d.is_primary)
            .or_else(|| displays.first())
            .ok_or_else(|| TrackerError::Display("no displays reported".into()))?;
        round_up_rate(display.frequency as f64)
    }

    fn name(&self) -> &'static str {
        "display-info"
    }
}

fn round_up_rate(rate: f64) -> TrackerResult<u32> {
    if rate.is_finite() && rate > 0.0 {
        Ok(rate.ceil() as u32)
    } else {
        Err(TrackerError::RefreshRate(format!("invalid rate {rate}")))
    }
}

/// Probes to try on this platform, in order.
pub fn default_probes() -> Vec<Box<dyn RefreshRateProbe>> {
    let mut probes: Vec<Box<dyn RefreshRateProbe>> = Vec::new();
    if cfg!(all(unix, not(target_os = "macos"))) {
        probes.push(Box::new(XrandrProbe));
    }
    probes.push(Box::new(DisplayInfoProbe));
    probes
}

/// First successful probe wins; if all fail, `fallback_hz` is used.
pub fn detect_refresh_rate(probes: &[Box<dyn RefreshRateProbe>], fallback_hz: u32) -> u32 {
    for probe in probes {
        match probe.refresh_rate() {
            Ok(hz) => {
                tracing::debug!(probe = probe.name(), hz, "refresh rate detected");
                return hz;
            }
            Err(e) => tracing::warn!("Error getting refresh rate via {}: {e}", probe.name()),
        }
    }
    tracing::info!("falling back to {fallback_hz} Hz");
    fallback_hz
}
