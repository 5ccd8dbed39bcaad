//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use segsieve_engine::TwinPair;
use std::io::Write;

/// Markdown formatter - outputs values as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    count: usize,
    label: &'static str,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            count: 0,
            label: "items",
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_prime(&mut self, prime: u64) -> Result<()> {
        self.count += 1;
        self.label = "primes";
        writeln!(self.writer, "{}. {}", self.count, prime)?;
        Ok(())
    }

    fn format_pair(&mut self, pair: TwinPair) -> Result<()> {
        self.count += 1;
        self.label = "pairs";
        writeln!(self.writer, "{}. {}", self.count, pair)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total {}: {}*", self.label, self.count)?;
        self.writer.flush()?;
        Ok(())
    }
}
