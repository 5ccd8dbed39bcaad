//! Count command implementation

use crate::{
    cli::{parse_bound, RunContext},
    output::OutputFormat,
    progress::ProgressReporter,
};
use anyhow::Result;
use clap::Args;
use segsieve_engine::PrimeStream;
use serde::Serialize;
use std::io::Write;

/// Arguments for the count command
#[derive(Debug, Args)]
pub struct CountArgs {
    /// Exclusive upper bound
    #[arg(value_name = "N", allow_negative_numbers = true, value_parser = parse_bound)]
    pub n: i64,

    /// Count twin-prime pairs instead of primes
    #[arg(short, long)]
    pub twins: bool,
}

/// JSON shape of a count
#[derive(Debug, Serialize)]
struct CountReport {
    bound: i64,
    kind: &'static str,
    count: u64,
}

impl CountArgs {
    /// Execute the count command
    pub fn execute(&self, context: &RunContext) -> Result<()> {
        let mut progress = ProgressReporter::new(context.quiet);

        let count = if self.twins {
            let mut pairs = context.primes.twin_primes(self.n)?;
            progress.init_segments(pairs.primes().segments_total() as u64);

            let mut count = 0;
            while pairs.next().is_some() {
                count += 1;
                report(&progress, pairs.primes(), count);
            }
            count
        } else {
            let mut primes = context.primes.primes_upto(self.n)?;
            progress.init_segments(primes.segments_total() as u64);

            let mut count = 0;
            while primes.next().is_some() {
                count += 1;
                report(&progress, &primes, count);
            }
            count
        };
        progress.finish();

        let kind = if self.twins { "twin pairs" } else { "primes" };
        log::info!("Counted {count} {kind} below {}", self.n);

        let mut out = context.writer()?;
        match context.format {
            OutputFormat::Json => {
                let report = CountReport {
                    bound: self.n,
                    kind,
                    count,
                };
                serde_json::to_writer(&mut out, &report)?;
                writeln!(out)?;
            }
            OutputFormat::Text => writeln!(out, "{count}")?,
            OutputFormat::Markdown => writeln!(out, "**{count}** {kind} below {}", self.n)?,
        }

        out.flush()?;
        Ok(())
    }
}

fn report(progress: &ProgressReporter, stream: &PrimeStream, found: u64) {
    if progress.is_active() {
        progress.update(stream.segments_completed() as u64, found);
    }
}
