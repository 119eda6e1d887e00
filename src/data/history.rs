//! Rolling cursor history and the short trail used by the position view.

use crate::config::BufferConfig;
use crate::data::ring::RingBuffer;
use crate::data::view_window::ViewWindow;

/// One cursor reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Horizontal screen coordinate in pixels.
    pub x: i32,
    /// Vertical screen coordinate in pixels (0 at the top).
    pub y: i32,
    /// Seconds elapsed since tracking started.
    pub t: f64,
}

impl Sample {
    pub fn new(x: i32, y: i32, t: f64) -> Self {
        Self { x, y, t }
    }

    pub fn position(&self) -> [i32; 2] {
        [self.x, self.y]
    }
}

/// Bounded history of samples plus the shorter position trail.
///
/// Both buffers only grow through [`History::record`] and only shrink through
/// capacity eviction.
#[derive(Debug, Clone)]
pub struct History {
    samples: RingBuffer<Sample>,
    trail: RingBuffer<[i32; 2]>,
}

impl Default for History {
    fn default() -> Self {
        Self::new(&BufferConfig::default())
    }
}

impl History {
    pub fn new(cfg: &BufferConfig) -> Self {
        Self {
            samples: RingBuffer::new(cfg.history_capacity),
            trail: RingBuffer::new(cfg.trail_capacity),
        }
    }

    /// Append a sample to the history and its position to the trail.
    pub fn record(&mut self, sample: Sample) {
        self.samples.push(sample);
        self.trail.push(sample.position());
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &RingBuffer<Sample> {
        &self.samples
    }

    pub fn trail(&self) -> &RingBuffer<[i32; 2]> {
        &self.trail
    }

    pub fn latest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    /// Samples covered by `window`.
    pub fn slice(&self, window: ViewWindow) -> impl DoubleEndedIterator<Item = &Sample> + '_ {
        self.samples.range(window.start..window.end)
    }

    /// The newest `n` samples, oldest first.
    pub fn recent(&self, n: usize) -> impl DoubleEndedIterator<Item = &Sample> + '_ {
        self.samples.recent(n)
    }
}
