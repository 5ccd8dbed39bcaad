//! Configuration types for the engine

use crate::error::{Result, SieveError};

/// Width of one segment when a range is sieved in chunks
pub const DEFAULT_SEGMENT_WIDTH: u64 = 10_000_000;

/// Engine configuration
///
/// Changing either value never changes which primes are produced, only how
/// much memory a single step of a stream holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Width of each segment in the chunked stream
    pub segment_width: u64,
    /// Bounds below this go straight to a single full sieve
    pub full_sieve_threshold: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            segment_width: DEFAULT_SEGMENT_WIDTH,
            full_sieve_threshold: DEFAULT_SEGMENT_WIDTH,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with one width used for both segmenting and
    /// the full-sieve cutoff
    pub fn with_segment_width(segment_width: u64) -> Self {
        Self {
            segment_width,
            full_sieve_threshold: segment_width,
        }
    }

    /// Create a low-memory configuration (1M values per segment)
    pub fn compact() -> Self {
        Self::with_segment_width(1_000_000)
    }

    /// Check that the configuration can drive a stream
    pub fn validate(&self) -> Result<()> {
        if self.segment_width == 0 {
            return Err(SieveError::InvalidConfig(
                "segment width must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
