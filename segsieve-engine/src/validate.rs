//! Input validation at the public boundary
//!
//! Three failures are distinguished: text that is not an integer, a negative
//! integer, and a range whose lower bound exceeds its upper bound.

use crate::error::{Result, SieveError};
use segsieve_core::Segment;

/// Accept a non-negative integer
pub fn check_input(value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|_| SieveError::NegativeInteger {
        value: i128::from(value),
    })
}

/// Accept an ordered pair of non-negative integers as a half-open range
pub fn check_range(lower: i64, upper: i64) -> Result<Segment> {
    let lower = check_input(lower)?;
    let upper = check_input(upper)?;
    check_order(lower, upper)
}

/// Accept an already non-negative pair if it is ordered
pub fn check_order(lower: u64, upper: u64) -> Result<Segment> {
    Segment::checked(lower, upper).ok_or(SieveError::LowerGreaterThanUpper { lower, upper })
}

/// Parse user-supplied text into a non-negative integer
///
/// Digit separators `_` are accepted, so `50_000_000` parses.
pub fn parse_input(text: &str) -> Result<u64> {
    let trimmed = text.trim();
    let digits: String = trimmed.chars().filter(|&c| c != '_').collect();

    if let Ok(value) = digits.parse::<u64>() {
        return Ok(value);
    }

    match digits.parse::<i128>() {
        Ok(value) if value < 0 => Err(SieveError::NegativeInteger { value }),
        _ => Err(SieveError::WrongType {
            input: trimmed.to_string(),
        }),
    }
}
