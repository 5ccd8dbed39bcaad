//! Numeric primitives for segmented prime sieving
//!
//! This crate holds the infallible building blocks: interval partitioning,
//! the classical sieve of Eratosthenes, window marking against a set of base
//! primes, and integer helpers. Validation and stream composition live in
//! `segsieve-engine`.

#![warn(missing_docs)]

pub mod arith;
pub mod full;
pub mod segment;
pub mod window;

// Re-export key types
pub use arith::{is_prime_u64, isqrt};
pub use full::FullSieve;
pub use segment::{partition, Partition, Segment};
pub use window::WindowSieve;
