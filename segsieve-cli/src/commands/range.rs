//! Range command implementation

use super::write_primes;
use crate::cli::{parse_bound, RunContext};
use anyhow::Result;
use clap::Args;

/// Arguments for the range command
#[derive(Debug, Args)]
pub struct RangeArgs {
    /// Inclusive lower bound
    #[arg(value_name = "LOWER", allow_negative_numbers = true, value_parser = parse_bound)]
    pub lower: i64,

    /// Exclusive upper bound
    #[arg(value_name = "UPPER", allow_negative_numbers = true, value_parser = parse_bound)]
    pub upper: i64,
}

impl RangeArgs {
    /// Execute the range command
    pub fn execute(&self, context: &RunContext) -> Result<()> {
        let primes = context.primes.range_sieve(self.lower, self.upper)?;
        log::info!("Listing primes in {} ({:?})", primes.segment(), primes.case());
        write_primes(context, primes)
    }
}
