//! Half-open ranges and fixed-width interval partitioning

use std::fmt;
use std::iter::FusedIterator;

/// A half-open window `[lower, upper)` of candidate values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    lower: u64,
    upper: u64,
}

impl Segment {
    /// Create a new segment
    ///
    /// # Panics
    ///
    /// Panics if `lower > upper`. Use [`Segment::checked`] for bounds that
    /// have not been ordered yet.
    pub fn new(lower: u64, upper: u64) -> Self {
        assert!(lower <= upper, "segment bounds out of order");
        Self { lower, upper }
    }

    /// Create a segment, or `None` when `lower > upper`
    pub fn checked(lower: u64, upper: u64) -> Option<Self> {
        (lower <= upper).then_some(Self { lower, upper })
    }

    /// Inclusive lower bound
    pub fn lower(&self) -> u64 {
        self.lower
    }

    /// Exclusive upper bound
    pub fn upper(&self) -> u64 {
        self.upper
    }

    /// Number of candidate values in the segment
    pub fn len(&self) -> u64 {
        self.upper - self.lower
    }

    /// Whether the segment holds no values
    pub fn is_empty(&self) -> bool {
        self.lower == self.upper
    }

    /// Whether `value` lies inside `[lower, upper)`
    pub fn contains(&self, value: u64) -> bool {
        self.lower <= value && value < self.upper
    }
}

impl From<(u64, u64)> for Segment {
    fn from((lower, upper): (u64, u64)) -> Self {
        Segment::new(lower, upper)
    }
}

impl From<Segment> for (u64, u64) {
    fn from(segment: Segment) -> Self {
        (segment.lower, segment.upper)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.lower, self.upper)
    }
}

/// Lazy sequence of contiguous segments covering `[0, extent)`
///
/// Every segment is `width` wide except possibly the last, whose upper bound
/// is always exactly `extent`. An extent no larger than the width yields the
/// single segment `[0, extent)`.
#[derive(Debug, Clone)]
pub struct Partition {
    extent: u64,
    width: u64,
    next_lower: u64,
    finished: bool,
}

/// Partition `[0, extent)` into windows of `width`
///
/// # Panics
///
/// Panics if `width` is zero.
pub fn partition(extent: u64, width: u64) -> Partition {
    assert!(width > 0, "partition width must be positive");
    Partition {
        extent,
        width,
        next_lower: 0,
        finished: false,
    }
}

impl Partition {
    /// Total extent being partitioned
    pub fn extent(&self) -> u64 {
        self.extent
    }

    /// Fixed window width
    pub fn width(&self) -> u64 {
        self.width
    }
}

impl Iterator for Partition {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        if self.finished {
            return None;
        }

        let lower = self.next_lower;
        let upper = match lower.checked_add(self.width) {
            Some(end) if end < self.extent => end,
            _ => self.extent,
        };

        if upper == self.extent {
            self.finished = true;
        }
        self.next_lower = upper;

        Some(Segment::new(lower, upper))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.finished {
            0
        } else {
            let rest = self.extent - self.next_lower;
            rest.div_ceil(self.width).max(1) as usize
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Partition {}

impl FusedIterator for Partition {}
