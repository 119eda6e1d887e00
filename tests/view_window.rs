use cursor_tracker::config::WindowConfig;
use cursor_tracker::data::view_window::*;

fn cfg() -> WindowConfig {
    WindowConfig::default()
}

fn expected_size(len: usize) -> usize {
    // ceil(0.2 * len) in integers
    ((len + 4) / 5).max(100)
}

#[test]
fn window_size_matches_formula() {
    for len in 2..=5000 {
        assert_eq!(window_size(len, &cfg()), expected_size(len), "len = {len}");
    }
}

#[test]
fn window_size_examples() {
    assert_eq!(window_size(50, &cfg()), 100);
    assert_eq!(window_size(500, &cfg()), 100);
    assert_eq!(window_size(501, &cfg()), 101);
    assert_eq!(window_size(505, &cfg()), 101);
    assert_eq!(window_size(1000, &cfg()), 200);
}

#[test]
fn auto_window_tracks_the_end() {
    for len in 2..=1000 {
        let w = auto_window(len, &cfg());
        assert_eq!(w.end, len);
        assert_eq!(w.start, len.saturating_sub(expected_size(len)));
        assert!(w.start <= w.end);
    }
}

#[test]
fn auto_window_at_full_history() {
    assert_eq!(auto_window(1000, &cfg()), ViewWindow { start: 800, end: 1000 });
}

#[test]
fn fewer_than_two_samples_gives_empty_window() {
    for len in 0..2 {
        assert_eq!(auto_window(len, &cfg()), ViewWindow::EMPTY);
        assert_eq!(manual_window(len, 50.0, &cfg()), ViewWindow::EMPTY);
    }
}

#[test]
fn manual_window_places_start_by_slider() {
    // len 1000 -> window 200, max_start 800
    assert_eq!(manual_window(1000, 0.0, &cfg()), ViewWindow { start: 0, end: 200 });
    assert_eq!(manual_window(1000, 50.0, &cfg()), ViewWindow { start: 400, end: 600 });
    assert_eq!(manual_window(1000, 100.0, &cfg()), ViewWindow { start: 800, end: 1000 });
    // floor(0.333 * 800) = 266
    assert_eq!(manual_window(1000, 33.3, &cfg()).start, 266);
}

#[test]
fn manual_window_property() {
    for len in [2usize, 10, 99, 100, 101, 350, 777, 1000] {
        let size = expected_size(len);
        let max_start = len.saturating_sub(size);
        for v in 0..=100 {
            let w = manual_window(len, v as f64, &cfg());
            let expected = ((v as f64 / 100.0 * max_start as f64).floor() as usize).min(max_start);
            assert_eq!(w.start, expected, "len = {len}, v = {v}");
            assert_eq!(w.end, (w.start + size).min(len));
            assert!(w.end <= len);
        }
    }
}

#[test]
fn manual_window_clamps_out_of_range_slider() {
    assert_eq!(manual_window(1000, -20.0, &cfg()).start, 0);
    assert_eq!(manual_window(1000, 250.0, &cfg()).start, 800);
}

#[test]
fn short_history_in_manual_mode_shows_everything() {
    let w = manual_window(60, 75.0, &cfg());
    assert_eq!(w, ViewWindow { start: 0, end: 60 });
}

#[test]
fn selector_starts_in_auto_mode_with_slider_pinned() {
    let sel = ViewSelector::default();
    assert!(sel.is_auto_scroll());
    assert_eq!(sel.slider_value(), 100.0);
    assert_eq!(sel.select(1000), auto_window(1000, &cfg()));
}

#[test]
fn scrub_enters_manual_mode_and_holds_position() {
    let mut sel = ViewSelector::default();
    sel.scrub(25.0, 1000);
    assert_eq!(sel.mode(), ScrollMode::Manual { value: 25.0 });
    assert_eq!(sel.select(1000), ViewWindow { start: 200, end: 400 });
    // Still at the same place on the next tick.
    assert_eq!(sel.select(1000), ViewWindow { start: 200, end: 400 });
}

#[test]
fn enabling_auto_scroll_leaves_manual_mode() {
    let mut sel = ViewSelector::default();
    sel.scrub(10.0, 1000);
    sel.set_auto_scroll(true, 1000);
    assert!(sel.is_auto_scroll());
    assert_eq!(sel.select(1000), ViewWindow { start: 800, end: 1000 });
}

#[test]
fn disabling_auto_scroll_keeps_latest_window() {
    let mut sel = ViewSelector::default();
    sel.set_auto_scroll(false, 1000);
    assert_eq!(sel.mode(), ScrollMode::Manual { value: 100.0 });
    assert_eq!(sel.select(1000), ViewWindow { start: 800, end: 1000 });

    sel.scrub(40.0, 1000);
    sel.set_auto_scroll(false, 1000);
    assert_eq!(sel.slider_value(), 40.0);
    assert_eq!(sel.select(1000), ViewWindow { start: 320, end: 520 });
}

#[test]
fn scrubbed_window_is_pinned_while_history_grows() {
    let mut sel = ViewSelector::default();
    // len 500 -> window 100, max_start 400
    sel.scrub(50.0, 500);
    assert_eq!(sel.select(500), ViewWindow { start: 200, end: 300 });
    for len in 501..=1000 {
        assert_eq!(sel.select(len), ViewWindow { start: 200, end: 300 }, "len = {len}");
    }
}

#[test]
fn disabling_auto_scroll_pins_the_current_tail() {
    let mut sel = ViewSelector::default();
    sel.set_auto_scroll(false, 300);
    assert_eq!(sel.select(300), ViewWindow { start: 200, end: 300 });
    assert_eq!(sel.select(450), ViewWindow { start: 200, end: 300 });
}

#[test]
fn pinned_window_is_clipped_to_a_shorter_history() {
    let mut sel = ViewSelector::default();
    sel.scrub(100.0, 1000);
    assert_eq!(sel.select(900), ViewWindow { start: 800, end: 900 });
    assert_eq!(sel.select(1), ViewWindow::EMPTY);
}

#[test]
fn custom_window_config_is_respected() {
    let cfg = WindowConfig {
        fraction: 0.5,
        min_size: 10,
        min_history_for_plots: 10,
    };
    assert_eq!(window_size(40, &cfg), 20);
    assert_eq!(window_size(8, &cfg), 10);
    assert_eq!(auto_window(40, &cfg), ViewWindow { start: 20, end: 40 });
}
