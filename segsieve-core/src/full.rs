//! Classical sieve of Eratosthenes over `[0, n)`

use std::iter::FusedIterator;

/// All primes strictly below a bound, produced in ascending order
///
/// Marking happens up front when the sieve is created; iteration then walks
/// the flag array. Memory is one `bool` per value below the bound, which is
/// why large bounds go through a windowed sieve instead.
#[derive(Debug, Clone)]
pub struct FullSieve {
    composite: Vec<bool>,
    cursor: usize,
}

impl FullSieve {
    /// Sieve every value below `n`
    ///
    /// # Panics
    ///
    /// Panics if `n` does not fit in `usize`.
    pub fn new(n: u64) -> Self {
        let n = usize::try_from(n).expect("sieve bound exceeds addressable memory");
        if n <= 2 {
            return Self {
                composite: Vec::new(),
                cursor: 0,
            };
        }

        let mut composite = vec![false; n];
        composite[0] = true;
        composite[1] = true;

        let mut p = 2;
        while p * p < n {
            if !composite[p] {
                for multiple in (p * p..n).step_by(p) {
                    composite[multiple] = true;
                }
            }
            p += 1;
        }

        Self {
            composite,
            cursor: 0,
        }
    }

    /// Exclusive upper bound of this sieve
    pub fn bound(&self) -> u64 {
        self.composite.len() as u64
    }
}

impl Iterator for FullSieve {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        while self.cursor < self.composite.len() {
            let index = self.cursor;
            self.cursor += 1;
            if !self.composite[index] {
                return Some(index as u64);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.composite.len() - self.cursor))
    }
}

impl FusedIterator for FullSieve {}
