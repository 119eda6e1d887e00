use std::cell::Cell;

use cursor_tracker::error::{TrackerError, TrackerResult};
use cursor_tracker::platform::refresh::*;

const XRANDR_REPORT: &str = "\
Screen 0: minimum 8 x 8, current 2560 x 1440, maximum 32767 x 32767
DP-1 connected primary 2560x1440+0+0 (normal left inverted right x axis y axis) 597mm x 336mm
   2560x1440    143.97*+ 120.00    99.95    59.95
   1920x1080    119.88    60.00
HDMI-1 disconnected (normal left inverted right x axis y axis)
";

#[test]
fn parses_active_preferred_mode_and_rounds_up() {
    assert_eq!(parse_xrandr_rate(XRANDR_REPORT).unwrap(), 144);
}

#[test]
fn integral_rate_is_kept() {
    let report = "   1920x1080     60.00*+  59.94    50.00\n";
    assert_eq!(parse_xrandr_rate(report).unwrap(), 60);
}

#[test]
fn active_but_not_preferred_mode_is_accepted() {
    let report = "   1920x1080     60.00 +  74.97*   59.94\n";
    assert_eq!(parse_xrandr_rate(report).unwrap(), 75);
}

#[test]
fn report_without_active_mode_is_an_error() {
    let report = "   1920x1080     60.00 +  59.94\n";
    assert!(matches!(
        parse_xrandr_rate(report),
        Err(TrackerError::RefreshRate(_))
    ));
}

#[test]
fn garbage_rate_is_an_error() {
    assert!(parse_xrandr_rate("   1920x1080   abc*+\n").is_err());
    assert!(parse_xrandr_rate("   1920x1080   0.00*+\n").is_err());
}

struct FixedProbe {
    result: Option<u32>,
    calls: Cell<u32>,
}

impl FixedProbe {
    fn boxed(result: Option<u32>) -> Box<dyn RefreshRateProbe> {
        Box::new(Self {
            result,
            calls: Cell::new(0),
        })
    }
}

impl RefreshRateProbe for FixedProbe {
    fn refresh_rate(&self) -> TrackerResult<u32> {
        self.calls.set(self.calls.get() + 1);
        self.result
            .ok_or_else(|| TrackerError::RefreshRate("probe unavailable".into()))
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

#[test]
fn first_successful_probe_wins() {
    let probes = vec![
        FixedProbe::boxed(None),
        FixedProbe::boxed(Some(75)),
        FixedProbe::boxed(Some(240)),
    ];
    assert_eq!(detect_refresh_rate(&probes, 60), 75);
}

#[test]
fn all_probes_failing_falls_back() {
    let probes = vec![FixedProbe::boxed(None), FixedProbe::boxed(None)];
    assert_eq!(detect_refresh_rate(&probes, 60), 60);
}

#[test]
fn no_probes_falls_back() {
    assert_eq!(detect_refresh_rate(&[], 60), 60);
}

#[test]
fn default_probes_always_include_display_info() {
    let probes = default_probes();
    assert_eq!(probes.last().map(|p| p.name()), Some("display-info"));
}
