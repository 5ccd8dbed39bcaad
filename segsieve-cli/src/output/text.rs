//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use segsieve_engine::TwinPair;
use std::io::Write;

/// Plain text formatter - outputs one value per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_prime(&mut self, prime: u64) -> Result<()> {
        writeln!(self.writer, "{prime}")?;
        Ok(())
    }

    fn format_pair(&mut self, pair: TwinPair) -> Result<()> {
        writeln!(self.writer, "{} {}", pair.lower, pair.upper)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_output() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            formatter.format_prime(2).unwrap();
            formatter.format_prime(3).unwrap();
            formatter
                .format_pair(TwinPair { lower: 3, upper: 5 })
                .unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap(), "2\n3\n3 5\n");
    }
}
