//! Twins command implementation

use crate::cli::{parse_bound, RunContext};
use anyhow::Result;
use clap::Args;

/// Arguments for the twins command
#[derive(Debug, Args)]
pub struct TwinsArgs {
    /// Exclusive upper bound for both members of a pair
    #[arg(value_name = "N", allow_negative_numbers = true, value_parser = parse_bound)]
    pub n: i64,
}

impl TwinsArgs {
    /// Execute the twins command
    pub fn execute(&self, context: &RunContext) -> Result<()> {
        let pairs = context.primes.twin_primes(self.n)?;
        log::info!("Listing twin primes below {}", self.n);

        let mut formatter = context.formatter()?;
        for pair in pairs {
            formatter.format_pair(pair)?;
        }
        formatter.finish()
    }
}
