//! Full-range prime streams
//!
//! Small bounds are served by one full sieve. Larger bounds are split into
//! fixed-width segments that are sieved one after another, so at most one
//! segment's flag array is alive at any time.

use crate::{config::EngineConfig, range::RangeSieve};
use segsieve_core::{partition, FullSieve, Partition};
use std::iter::FusedIterator;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// One sieve over the whole bound
    Full,
    /// Fixed-width segments sieved in sequence
    Segmented,
}

/// Select the execution mode for a bound
pub fn auto_select(bound: u64, threshold: u64) -> ExecutionMode {
    if bound < threshold {
        ExecutionMode::Full
    } else {
        ExecutionMode::Segmented
    }
}

/// Lazy ascending stream of every prime below a bound
#[derive(Debug)]
pub struct PrimeStream {
    bound: u64,
    inner: StreamInner,
}

#[derive(Debug)]
enum StreamInner {
    Full {
        sieve: FullSieve,
        exhausted: bool,
    },
    Segmented {
        segments: Partition,
        total: usize,
        current: Option<RangeSieve>,
        completed: usize,
    },
}

impl PrimeStream {
    /// Create a stream for `bound` with an already validated configuration
    pub(crate) fn new(bound: u64, config: &EngineConfig) -> Self {
        let mode = auto_select(bound, config.full_sieve_threshold);
        log::debug!(
            "primes below {bound}: {mode:?} mode (segment width {})",
            config.segment_width
        );

        let inner = match mode {
            ExecutionMode::Full => StreamInner::Full {
                sieve: FullSieve::new(bound),
                exhausted: false,
            },
            ExecutionMode::Segmented => {
                let segments = partition(bound, config.segment_width);
                StreamInner::Segmented {
                    total: segments.len(),
                    segments,
                    current: None,
                    completed: 0,
                }
            }
        };

        Self { bound, inner }
    }

    /// Exclusive upper bound of the stream
    pub fn bound(&self) -> u64 {
        self.bound
    }

    /// The execution mode this stream is using
    pub fn mode(&self) -> ExecutionMode {
        match self.inner {
            StreamInner::Full { .. } => ExecutionMode::Full,
            StreamInner::Segmented { .. } => ExecutionMode::Segmented,
        }
    }

    /// Number of segments the stream walks (1 in full mode)
    pub fn segments_total(&self) -> usize {
        match self.inner {
            StreamInner::Full { .. } => 1,
            StreamInner::Segmented { total, .. } => total,
        }
    }

    /// Number of segments fully consumed so far
    pub fn segments_completed(&self) -> usize {
        match self.inner {
            StreamInner::Full { exhausted, .. } => usize::from(exhausted),
            StreamInner::Segmented { completed, .. } => completed,
        }
    }
}

impl Iterator for PrimeStream {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        match &mut self.inner {
            StreamInner::Full { sieve, exhausted } => {
                let next = sieve.next();
                if next.is_none() {
                    *exhausted = true;
                }
                next
            }
            StreamInner::Segmented {
                segments,
                current,
                completed,
                ..
            } => loop {
                if let Some(sieve) = current {
                    if let Some(p) = sieve.next() {
                        return Some(p);
                    }
                    // Release this segment before the next one is allocated
                    *current = None;
                    *completed += 1;
                }

                let segment = segments.next()?;
                log::trace!("sieving segment {segment}");
                *current = Some(RangeSieve::new(segment));
            },
        }
    }
}

impl FusedIterator for PrimeStream {}
