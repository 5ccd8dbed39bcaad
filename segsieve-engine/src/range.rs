//! Segmented sieve over an arbitrary half-open range
//!
//! Memory is bounded by the window width plus the base primes up to
//! `isqrt(upper)`, never by the magnitude of `upper` itself.
//!
//! A window that starts above `isqrt(upper)` is marked directly. A window
//! that starts at or below it first emits the base primes that fall inside
//! it, then delegates the remainder `[isqrt(upper) + 1, upper)` to a nested
//! sieve. The nested sieve reuses the base primes and is only built once the
//! small primes are exhausted.

use segsieve_core::{isqrt, FullSieve, Segment, WindowSieve};
use std::iter::FusedIterator;
use std::mem;

/// Which path a range sieve took
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SieveCase {
    /// The window lies entirely above the base-prime threshold
    Window,
    /// The window overlaps the base primes; the rest is delegated
    Delegating,
}

/// Lazy ascending stream of the primes in `[lower, upper)`
#[derive(Debug)]
pub struct RangeSieve {
    segment: Segment,
    key: u64,
    case: SieveCase,
    state: RangeState,
}

#[derive(Debug)]
enum RangeState {
    Window(WindowSieve),
    Small {
        base: Vec<u64>,
        cursor: usize,
        remainder: Option<Segment>,
    },
    Delegated(Box<RangeSieve>),
    Done,
}

impl RangeSieve {
    /// Sieve the primes of `segment`
    pub fn new(segment: Segment) -> Self {
        let key = isqrt(segment.upper());
        let base: Vec<u64> = FullSieve::new(key + 1).collect();
        Self::from_base(segment, key, base)
    }

    /// Build from already computed base primes (every prime `<= key`)
    fn from_base(segment: Segment, key: u64, base: Vec<u64>) -> Self {
        if segment.lower() > key {
            log::trace!("window sieve over {segment} with {} base primes", base.len());
            return Self {
                segment,
                key,
                case: SieveCase::Window,
                state: RangeState::Window(WindowSieve::new(segment, &base)),
            };
        }

        let cursor = base.partition_point(|&p| p < segment.lower());
        let remainder =
            (key + 1 < segment.upper()).then(|| Segment::new(key + 1, segment.upper()));
        log::trace!(
            "range {segment} overlaps base primes up to {key}; remainder {:?}",
            remainder
        );

        Self {
            segment,
            key,
            case: SieveCase::Delegating,
            state: RangeState::Small {
                base,
                cursor,
                remainder,
            },
        }
    }

    /// The range being sieved
    pub fn segment(&self) -> Segment {
        self.segment
    }

    /// Largest value a base prime may take: `isqrt(upper)`
    pub fn key(&self) -> u64 {
        self.key
    }

    /// Which path this sieve took
    pub fn case(&self) -> SieveCase {
        self.case
    }
}

impl Iterator for RangeSieve {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        loop {
            match &mut self.state {
                RangeState::Window(window) => return window.next(),
                RangeState::Small {
                    base,
                    cursor,
                    remainder,
                } => {
                    if let Some(&p) = base.get(*cursor) {
                        *cursor += 1;
                        return Some(p);
                    }

                    let base = mem::take(base);
                    let rest = remainder.take();
                    self.state = match rest {
                        Some(rest) => {
                            RangeState::Delegated(Box::new(Self::from_base(rest, self.key, base)))
                        }
                        None => RangeState::Done,
                    };
                }
                RangeState::Delegated(inner) => return inner.next(),
                RangeState::Done => return None,
            }
        }
    }
}

impl FusedIterator for RangeSieve {}
