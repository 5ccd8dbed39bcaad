//! CLI command implementations

use crate::cli::RunContext;
use anyhow::Result;
use clap::Subcommand;

pub mod check;
pub mod count;
pub mod generate_config;
pub mod list;
pub mod range;
pub mod twins;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every prime below N
    List(list::ListArgs),

    /// List the primes in [LOWER, UPPER)
    Range(range::RangeArgs),

    /// List twin-prime pairs below N
    Twins(twins::TwinsArgs),

    /// Check whether a number is prime
    Check(check::CheckArgs),

    /// Count primes (or twin pairs) below N
    Count(count::CountArgs),

    /// Write a configuration file with the default settings
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Run the command
    pub fn execute(&self, context: &RunContext) -> Result<()> {
        match self {
            Commands::List(args) => args.execute(context),
            Commands::Range(args) => args.execute(context),
            Commands::Twins(args) => args.execute(context),
            Commands::Check(args) => args.execute(context),
            Commands::Count(args) => args.execute(context),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Write every prime of `primes` through the context's formatter
pub(crate) fn write_primes<I>(context: &RunContext, primes: I) -> Result<()>
where
    I: Iterator<Item = u64>,
{
    let mut formatter = context.formatter()?;
    for prime in primes {
        formatter.format_prime(prime)?;
    }
    formatter.finish()
}
