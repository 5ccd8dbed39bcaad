//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration file not found or inaccessible
    ConfigNotFound(String),
    /// Configuration file could not be parsed
    ConfigError(String),
    /// Value does not fit the engine's signed input range
    ValueTooLarge(u64),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigNotFound(path) => write!(f, "Configuration file not found: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ValueTooLarge(value) => {
                write!(f, "Value too large: {value} exceeds {}", i64::MAX)
            }
        }
    }
}

impl std::error::Error for CliError {}
