use std::time::{Duration, Instant};

use cursor_tracker::scheduler::*;

#[test]
fn interval_is_whole_milliseconds_per_frame() {
    assert_eq!(interval_for_rate(60, 60), Duration::from_millis(16));
    assert_eq!(interval_for_rate(144, 60), Duration::from_millis(6));
    assert_eq!(interval_for_rate(30, 60), Duration::from_millis(33));
}

#[test]
fn zero_rate_uses_fallback_and_huge_rate_is_floored() {
    assert_eq!(interval_for_rate(0, 60), Duration::from_millis(16));
    assert_eq!(interval_for_rate(5000, 60), Duration::from_millis(1));
}

#[test]
fn first_tick_is_due_immediately() {
    let now = Instant::now();
    let mut s = TickScheduler::new(Duration::from_millis(16));
    assert_eq!(s.time_until_next(now), Some(Duration::ZERO));
    assert!(s.poll(now));
}

#[test]
fn ticks_are_spaced_by_the_interval() {
    let t0 = Instant::now();
    let mut s = TickScheduler::new(Duration::from_millis(16));
    assert!(s.poll(t0));
    assert!(!s.poll(t0 + Duration::from_millis(5)));
    assert_eq!(
        s.time_until_next(t0 + Duration::from_millis(5)),
        Some(Duration::from_millis(11))
    );
    assert!(s.poll(t0 + Duration::from_millis(16)));
}

#[test]
fn late_frames_do_not_burst() {
    let t0 = Instant::now();
    let mut s = TickScheduler::new(Duration::from_millis(10));
    assert!(s.poll(t0));
    let late = t0 + Duration::from_millis(100);
    assert!(s.poll(late));
    assert!(!s.poll(late + Duration::from_millis(1)));
}

#[test]
fn cancel_stops_all_future_ticks() {
    let t0 = Instant::now();
    let mut s = TickScheduler::new(Duration::from_millis(10));
    assert!(s.poll(t0));
    s.cancel();
    assert!(s.is_cancelled());
    assert!(!s.poll(t0 + Duration::from_secs(5)));
    assert_eq!(s.time_until_next(t0), None);
}
