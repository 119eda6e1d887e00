//! Fixed-capacity FIFO buffer.

use std::collections::VecDeque;
use std::ops::Range;

/// Bounded buffer that silently drops its oldest entry when a push would
/// exceed the capacity.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> RingBuffer<T> {
    /// Create an empty buffer. A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append `item`, evicting the oldest entry if the buffer is full.
    /// Returns the evicted entry, if any.
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.items.len() == self.capacity {
            self.items.pop_front()
        } else {
            None
        };
        self.items.push_back(item);
        evicted
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.items.iter()
    }

    /// Entries in `range`, clamped to the current length.
    pub fn range(&self, range: Range<usize>) -> impl DoubleEndedIterator<Item = &T> + '_ {
        let end = range.end.min(self.items.len());
        let start = range.start.min(end);
        self.items.range(start..end)
    }

    /// The newest `n` entries (or fewer), oldest first.
    pub fn recent(&self, n: usize) -> impl DoubleEndedIterator<Item = &T> + '_ {
        let len = self.items.len();
        self.range(len.saturating_sub(n)..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut buf = RingBuffer::new(0);
        assert_eq!(buf.capacity(), 1);
        buf.push(1);
        assert_eq!(buf.push(2), Some(1));
        assert_eq!(buf.len(), 1);
    }

    #[test]
    fn range_is_clamped() {
        let mut buf = RingBuffer::new(4);
        for i in 0..3 {
            buf.push(i);
        }
        assert_eq!(buf.range(1..10).copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(buf.range(5..10).count(), 0);
    }
}
