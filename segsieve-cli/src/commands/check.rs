//! Check command implementation

use crate::{
    cli::{parse_bound, RunContext},
    output::OutputFormat,
};
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::io::Write;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Number to test
    #[arg(value_name = "X", allow_negative_numbers = true, value_parser = parse_bound)]
    pub value: i64,
}

/// JSON shape of a primality answer
#[derive(Debug, Serialize)]
struct CheckReport {
    value: i64,
    prime: bool,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self, context: &RunContext) -> Result<()> {
        let prime = context.primes.is_prime(self.value)?;
        let mut out = context.writer()?;

        match context.format {
            OutputFormat::Json => {
                let report = CheckReport {
                    value: self.value,
                    prime,
                };
                serde_json::to_writer(&mut out, &report)?;
                writeln!(out)?;
            }
            OutputFormat::Text | OutputFormat::Markdown => {
                let verdict = if prime { "is prime" } else { "is not prime" };
                writeln!(out, "{} {verdict}", self.value)?;
            }
        }

        out.flush()?;
        Ok(())
    }
}
