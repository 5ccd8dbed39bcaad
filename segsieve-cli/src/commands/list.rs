//! List command implementation

use super::write_primes;
use crate::cli::{parse_bound, RunContext};
use anyhow::Result;
use clap::Args;

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Exclusive upper bound
    #[arg(value_name = "N", allow_negative_numbers = true, value_parser = parse_bound)]
    pub n: i64,
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self, context: &RunContext) -> Result<()> {
        let primes = context.primes.primes_upto(self.n)?;
        log::info!(
            "Listing primes below {} ({:?} mode, {} segment(s))",
            self.n,
            primes.mode(),
            primes.segments_total()
        );
        write_primes(context, primes)
    }
}
