//! Axis range computation for the history plots.

use crate::config::Padding;

/// Closed interval shown on one plot axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Widen by `max(span * fraction, floor)` on both sides.
    pub fn padded(self, padding: Padding) -> Self {
        let pad = (self.span() * padding.fraction).max(padding.floor);
        Self {
            min: self.min - pad,
            max: self.max + pad,
        }
    }

    pub fn as_range(&self) -> std::ops::RangeInclusive<f64> {
        self.min..=self.max
    }
}

/// Min/max of `values`, or `None` when there are none. NaNs are skipped.
pub fn data_range<I>(values: I) -> Option<AxisRange>
where
    I: IntoIterator<Item = f64>,
{
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    (min <= max).then(|| AxisRange::new(min, max))
}

/// Data range of `values` with padding applied. Never zero-width as long as
/// `padding.floor > 0`.
pub fn padded_range<I>(values: I, padding: Padding) -> Option<AxisRange>
where
    I: IntoIterator<Item = f64>,
{
    data_range(values).map(|r| r.padded(padding))
}
