//! Error types for validated sieve operations

use thiserror::Error;

/// Errors raised at the boundary of a public operation, before any sieving
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SieveError {
    /// Input is not an integer
    #[error("input should be a non-negative integer, got '{input}'")]
    WrongType {
        /// The offending input text
        input: String,
    },

    /// Input is a negative integer
    #[error("integer should not be negative, got {value}")]
    NegativeInteger {
        /// The negative value that was supplied
        value: i128,
    },

    /// A range query with its bounds reversed
    #[error("lower bound cannot be greater than upper bound ({lower} > {upper})")]
    LowerGreaterThanUpper {
        /// Requested lower bound
        lower: u64,
        /// Requested upper bound
        upper: u64,
    },

    /// Configuration error
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, SieveError>;
