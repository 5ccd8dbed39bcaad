//! segsieve CLI library
//!
//! This library provides the command-line interface for the segmented
//! prime generator in `segsieve-engine`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod progress;

pub use cli::Cli;
pub use error::CliError;
