//! Top-level argument parsing and shared command context

use crate::{
    commands::Commands,
    config::CliConfig,
    error::CliError,
    output::{create_formatter, OutputFormat, OutputFormatter},
};
use anyhow::{Context, Result};
use clap::{Args, Parser};
use segsieve_engine::{parse_input, Primes};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Segmented prime generation from the command line
#[derive(Debug, Parser)]
#[command(name = "segsieve", version, about, long_about = None)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Options shared by every command
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Options shared by every command
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", global = true, env = "SEGSIEVE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Values per segment when sieving large bounds
    #[arg(short = 'w', long, value_name = "WIDTH", global = true, value_parser = parse_width)]
    pub segment_width: Option<u64>,

    /// Suppress progress output and logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Resolved settings a command runs with
pub struct RunContext {
    /// Prime generator built from config and flags
    pub primes: Primes,
    /// Output format after merging config and flags
    pub format: OutputFormat,
    /// Pretty print JSON output
    pub pretty_json: bool,
    /// Output file (stdout when absent)
    pub output: Option<PathBuf>,
    /// Suppress progress bars
    pub quiet: bool,
}

impl RunContext {
    /// Open the configured destination: the output file, else stdout
    pub fn writer(&self) -> Result<Box<dyn Write + Send + Sync>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(BufWriter::new(io::stdout()))),
        }
    }

    /// Open the configured destination and wrap it in the chosen formatter
    pub fn formatter(&self) -> Result<Box<dyn OutputFormatter>> {
        Ok(create_formatter(
            self.format,
            self.writer()?,
            self.pretty_json,
        ))
    }
}

impl Cli {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::info!("Starting segsieve");
        log::debug!("Arguments: {:?}", self);

        let context = self.global.resolve()?;
        self.command.execute(&context)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.global.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.global.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }

        Ok(())
    }
}

impl GlobalArgs {
    /// Merge the configuration file with command-line overrides
    pub fn resolve(&self) -> Result<RunContext> {
        let config = match &self.config {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                CliConfig::load(path)?
            }
            None => CliConfig::default(),
        };

        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_name(&config.output.default_format).ok_or_else(|| {
                CliError::ConfigError(format!(
                    "unknown output format '{}'",
                    config.output.default_format
                ))
            })?,
        };

        let engine_config = config.engine_config(self.segment_width);
        log::debug!("Engine configuration: {:?}", engine_config);
        let primes = Primes::with_config(engine_config)?;

        Ok(RunContext {
            primes,
            format,
            pretty_json: config.output.pretty_json,
            output: self.output.clone(),
            quiet: self.quiet,
        })
    }
}

/// Parse a numeric argument into the engine's signed input type
///
/// Text that is not an integer and negative integers are rejected with the
/// engine's own error messages.
pub fn parse_bound(text: &str) -> std::result::Result<i64, String> {
    let value = parse_input(text).map_err(|e| e.to_string())?;
    i64::try_from(value).map_err(|_| CliError::ValueTooLarge(value).to_string())
}

/// Parse a segment width, which must be positive
fn parse_width(text: &str) -> std::result::Result<u64, String> {
    match parse_input(text).map_err(|e| e.to_string())? {
        0 => Err("segment width must be positive".to_string()),
        width => Ok(width),
    }
}
