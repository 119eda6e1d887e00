//! Repeating tick schedule driven from the UI frame loop.
//!
//! egui repaints on demand, so the tracker does not own a timer thread.
//! Each frame asks [`TickScheduler::poll`] whether a tick is due and then
//! requests the next repaint after [`TickScheduler::time_until_next`].

use std::time::{Duration, Instant};

/// Tick interval for a display refresh rate, in whole milliseconds
/// (`1000 / hz`, at least 1 ms). A rate of zero uses `fallback_hz`.
pub fn interval_for_rate(hz: u32, fallback_hz: u32) -> Duration {
    let hz = if hz == 0 { fallback_hz.max(1) } else { hz };
    Duration::from_millis((1000 / hz as u64).max(1))
}

/// Fixed-delay repeating task with cancellation.
#[derive(Debug, Clone)]
pub struct TickScheduler {
    interval: Duration,
    next_due: Option<Instant>,
    cancelled: bool,
}

impl TickScheduler {
    /// The first tick is due immediately.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
            cancelled: false,
        }
    }

    /// Returns `true` if a tick should run now. The next tick is scheduled
    /// one interval after `now`; missed ticks are not made up.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.cancelled {
            return false;
        }
        match self.next_due {
            Some(due) if now < due => false,
            _ => {
                self.next_due = Some(now + self.interval);
                true
            }
        }
    }

    /// Delay until the next tick, or `None` once cancelled.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        if self.cancelled {
            return None;
        }
        Some(
            self.next_due
                .map(|due| due.saturating_duration_since(now))
                .unwrap_or(Duration::ZERO),
        )
    }

    /// Stop the schedule for good.
    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.next_due = None;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}
