//! Lazy, memory-bounded prime generation
//!
//! This crate validates inputs and composes the primitives from
//! `segsieve-core` into streams: a range sieve that delegates the small
//! primes below `isqrt(upper)`, a chunked stream that walks fixed-width
//! segments, and a twin-prime detector on top of it.
//!
//! ```
//! use segsieve_engine::{range_sieve, twin_primes};
//!
//! let primes: Vec<u64> = range_sieve(3, 29)?.collect();
//! assert_eq!(primes, vec![3, 5, 7, 11, 13, 17, 19, 23]);
//!
//! let twins: Vec<(u64, u64)> = twin_primes(30)?.map(Into::into).collect();
//! assert_eq!(twins, vec![(3, 5), (5, 7), (11, 13), (17, 19)]);
//! # Ok::<(), segsieve_engine::SieveError>(())
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod primes;
pub mod range;
pub mod stream;
pub mod twin;
pub mod validate;

// Re-export key types
pub use config::{EngineConfig, DEFAULT_SEGMENT_WIDTH};
pub use error::{Result, SieveError};
pub use primes::{is_prime, primes_upto, range_sieve, sieve, twin_primes, Primes, PrimesBuilder};
pub use range::{RangeSieve, SieveCase};
pub use stream::{ExecutionMode, PrimeStream};
pub use twin::{TwinPair, TwinPrimes};
pub use validate::parse_input;

// Re-export from core for convenience
pub use segsieve_core::{FullSieve, Segment};
