//! Validated entry points and builder
//!
//! Every operation checks its inputs before any sieve work begins; a stream
//! that is returned has already passed validation and cannot fail later.

use crate::{
    config::EngineConfig,
    error::Result,
    range::RangeSieve,
    stream::PrimeStream,
    twin::TwinPrimes,
    validate::{check_input, check_range},
};
use segsieve_core::{is_prime_u64, FullSieve};

/// Main prime generator
///
/// Holds an [`EngineConfig`] and hands out fresh, independent streams; no
/// state is shared between calls.
///
/// ```
/// use segsieve_engine::Primes;
///
/// let primes = Primes::new();
/// let below_ten: Vec<u64> = primes.sieve(10)?.collect();
/// assert_eq!(below_ten, vec![2, 3, 5, 7]);
/// # Ok::<(), segsieve_engine::SieveError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Primes {
    config: EngineConfig,
}

impl Primes {
    /// Create a generator with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator with a custom configuration
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Start building a generator
    pub fn builder() -> PrimesBuilder {
        PrimesBuilder::new()
    }

    /// Get the current configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Whether `x` is prime
    pub fn is_prime(&self, x: i64) -> Result<bool> {
        let x = check_input(x)?;
        Ok(is_prime_u64(x))
    }

    /// Every prime below `n` from one full sieve
    pub fn sieve(&self, n: i64) -> Result<FullSieve> {
        let n = check_input(n)?;
        Ok(FullSieve::new(n))
    }

    /// Every prime in `[lower, upper)`
    pub fn range_sieve(&self, lower: i64, upper: i64) -> Result<RangeSieve> {
        let segment = check_range(lower, upper)?;
        Ok(RangeSieve::new(segment))
    }

    /// Every prime below `n`, segmented when `n` is large
    pub fn primes_upto(&self, n: i64) -> Result<PrimeStream> {
        let n = check_input(n)?;
        Ok(PrimeStream::new(n, &self.config))
    }

    /// Every twin-prime pair with both members below `n`
    pub fn twin_primes(&self, n: i64) -> Result<TwinPrimes<PrimeStream>> {
        Ok(TwinPrimes::new(self.primes_upto(n)?))
    }
}

/// Builder for [`Primes`]
///
/// The full-sieve threshold follows the segment width unless it is set
/// explicitly. A preset passed to [`PrimesBuilder::config`] keeps its own
/// threshold until the width is changed afterwards.
#[derive(Debug, Clone, Default)]
pub struct PrimesBuilder {
    config: EngineConfig,
    threshold: Option<u64>,
    width_changed: bool,
}

impl PrimesBuilder {
    /// Create a builder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the segment width
    pub fn segment_width(mut self, width: u64) -> Self {
        self.config.segment_width = width;
        self.width_changed = true;
        self
    }

    /// Set the bound below which a single full sieve is used
    pub fn full_sieve_threshold(mut self, threshold: u64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Start from a preset configuration
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self.width_changed = false;
        self
    }

    /// Build the generator
    pub fn build(self) -> Result<Primes> {
        let mut config = self.config;
        if let Some(threshold) = self.threshold {
            config.full_sieve_threshold = threshold;
        } else if self.width_changed {
            config.full_sieve_threshold = config.segment_width;
        }
        Primes::with_config(config)
    }
}

// Convenience functions

/// Whether `x` is prime
pub fn is_prime(x: i64) -> Result<bool> {
    Primes::new().is_prime(x)
}

/// Every prime below `n` from one full sieve
pub fn sieve(n: i64) -> Result<FullSieve> {
    Primes::new().sieve(n)
}

/// Every prime in `[lower, upper)` with the default configuration
pub fn range_sieve(lower: i64, upper: i64) -> Result<RangeSieve> {
    Primes::new().range_sieve(lower, upper)
}

/// Every prime below `n` with the default configuration
pub fn primes_upto(n: i64) -> Result<PrimeStream> {
    Primes::new().primes_upto(n)
}

/// Every twin-prime pair below `n` with the default configuration
pub fn twin_primes(n: i64) -> Result<TwinPrimes<PrimeStream>> {
    Primes::new().twin_primes(n)
}
