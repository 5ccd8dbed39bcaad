//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use segsieve_engine::TwinPair;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - streams values into a single JSON array
///
/// Each element is written as soon as it arrives; only the element count is
/// kept, so output of any length runs in constant memory.
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    written: usize,
}

/// One element of the JSON array
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Entry {
    /// A prime, written as a bare number
    Prime(u64),
    /// A twin-prime pair
    Pair(PairData),
}

/// Data structure for a twin pair in JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PairData {
    /// The smaller prime
    pub lower: u64,
    /// The larger prime
    pub upper: u64,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            written: 0,
        }
    }

    fn write_entry(&mut self, entry: &Entry) -> Result<()> {
        let separator: &[u8] = if self.written == 0 { b"[" } else { b"," };
        self.writer.write_all(separator)?;

        if self.pretty {
            // Indent nested lines to match serde_json's pretty layout
            let text = serde_json::to_string_pretty(entry)?;
            write!(self.writer, "\n  {}", text.replace('\n', "\n  "))?;
        } else {
            serde_json::to_writer(&mut self.writer, entry)?;
        }

        self.written += 1;
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_prime(&mut self, prime: u64) -> Result<()> {
        self.write_entry(&Entry::Prime(prime))
    }

    fn format_pair(&mut self, pair: TwinPair) -> Result<()> {
        self.write_entry(&Entry::Pair(PairData {
            lower: pair.lower,
            upper: pair.upper,
        }))
    }

    fn finish(&mut self) -> Result<()> {
        if self.written == 0 {
            self.writer.write_all(b"[")?;
        } else if self.pretty {
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "]")?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_primes() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, false);
            for p in [2, 3, 5] {
                formatter.format_prime(p).unwrap();
            }
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap(), "[2,3,5]\n");
    }

    #[test]
    fn test_pairs_parse_back() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, true);
            formatter
                .format_pair(TwinPair { lower: 3, upper: 5 })
                .unwrap();
            formatter.finish().unwrap();
        }
        let parsed: Vec<Entry> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, vec![Entry::Pair(PairData { lower: 3, upper: 5 })]);
    }

    #[test]
    fn test_pretty_layout_matches_serde_json() {
        let entries = vec![
            Entry::Prime(2),
            Entry::Pair(PairData { lower: 3, upper: 5 }),
        ];
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, true);
            formatter.format_prime(2).unwrap();
            formatter
                .format_pair(TwinPair { lower: 3, upper: 5 })
                .unwrap();
            formatter.finish().unwrap();
        }
        let expected = serde_json::to_string_pretty(&entries).unwrap() + "\n";
        assert_eq!(String::from_utf8(buffer).unwrap(), expected);
    }

    #[test]
    fn test_primes_are_written_before_finish() {
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        for p in 0..100_000 {
            formatter.format_prime(p).unwrap();
        }
        assert_eq!(formatter.written, 100_000);
        assert!(formatter.writer.starts_with(b"[0,1,2,"));
        assert!(formatter.writer.ends_with(b",99999"));

        formatter.finish().unwrap();
        let parsed: Vec<u64> = serde_json::from_slice(&formatter.writer).unwrap();
        assert_eq!(parsed.len(), 100_000);
    }

    #[test]
    fn test_empty_output() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, false);
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap(), "[]\n");
    }
}
