//! Windowed marking over `[lower, upper)` using precomputed base primes

use crate::segment::Segment;
use std::iter::FusedIterator;

/// Primes inside a single window, produced in ascending order
///
/// The flag array covers only the window, so memory is proportional to
/// `upper - lower` regardless of how large the values are.
///
/// The caller supplies base primes covering every prime up to
/// `isqrt(upper)`; all of them must lie strictly below `lower`, otherwise a
/// base prime inside the window would be struck out as its own multiple.
#[derive(Debug, Clone)]
pub struct WindowSieve {
    lower: u64,
    composite: Vec<bool>,
    cursor: usize,
}

impl WindowSieve {
    /// Mark composites of `segment` with every prime in `base_primes`
    ///
    /// # Panics
    ///
    /// Panics if the window length does not fit in `usize`.
    pub fn new(segment: Segment, base_primes: &[u64]) -> Self {
        debug_assert!(
            base_primes.iter().all(|&p| p < segment.lower()),
            "base primes must lie below the window"
        );

        let len = usize::try_from(segment.len()).expect("window exceeds addressable memory");
        let mut composite = vec![false; len];

        // 0 and 1 are never prime
        for value in segment.lower()..segment.upper().min(2) {
            composite[(value - segment.lower()) as usize] = true;
        }

        for &p in base_primes {
            let offset = (p - segment.lower() % p) % p;
            let Ok(start) = usize::try_from(offset) else {
                continue;
            };
            if start >= len {
                continue;
            }
            for index in (start..len).step_by(p as usize) {
                composite[index] = true;
            }
        }

        Self {
            lower: segment.lower(),
            composite,
            cursor: 0,
        }
    }

    /// The window this sieve covers
    pub fn segment(&self) -> Segment {
        Segment::new(self.lower, self.lower + self.composite.len() as u64)
    }
}

impl Iterator for WindowSieve {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        while self.cursor < self.composite.len() {
            let index = self.cursor;
            self.cursor += 1;
            if !self.composite[index] {
                return Some(self.lower + index as u64);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.composite.len() - self.cursor))
    }
}

impl FusedIterator for WindowSieve {}
