//! Twin-prime detection over any ascending prime stream

use std::fmt;
use std::iter::FusedIterator;

/// Two primes that differ by exactly 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TwinPair {
    /// The smaller prime
    pub lower: u64,
    /// The larger prime, always `lower + 2`
    pub upper: u64,
}

impl From<TwinPair> for (u64, u64) {
    fn from(pair: TwinPair) -> Self {
        (pair.lower, pair.upper)
    }
}

impl fmt::Display for TwinPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lower, self.upper)
    }
}

/// Adjacent primes of an ascending stream that differ by 2
///
/// Only the previous prime is remembered, so memory beyond the wrapped
/// stream is constant.
#[derive(Debug, Clone)]
pub struct TwinPrimes<I> {
    primes: I,
    previous: Option<u64>,
}

impl<I> TwinPrimes<I>
where
    I: Iterator<Item = u64>,
{
    /// Wrap a strictly increasing stream of primes
    pub fn new(primes: I) -> Self {
        Self {
            primes,
            previous: None,
        }
    }

    /// The wrapped prime stream
    pub fn primes(&self) -> &I {
        &self.primes
    }
}

impl<I> Iterator for TwinPrimes<I>
where
    I: Iterator<Item = u64>,
{
    type Item = TwinPair;

    fn next(&mut self) -> Option<TwinPair> {
        for current in self.primes.by_ref() {
            let previous = self.previous.replace(current);
            if previous.is_some_and(|p| p + 2 == current) {
                return previous.map(|lower| TwinPair {
                    lower,
                    upper: current,
                });
            }
        }
        None
    }
}

impl<I> FusedIterator for TwinPrimes<I> where I: FusedIterator<Item = u64> {}
