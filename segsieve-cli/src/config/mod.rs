//! Configuration module

use crate::error::CliError;
use anyhow::Result;
use segsieve_engine::{EngineConfig, DEFAULT_SEGMENT_WIDTH};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Sieve configuration
    #[serde(default)]
    pub sieve: SieveConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Sieve-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SieveConfig {
    /// Values per segment in the chunked stream
    pub segment_width: u64,

    /// Bounds below this use a single full sieve (defaults to the width)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_sieve_threshold: Option<u64>,
}

impl Default for SieveConfig {
    fn default() -> Self {
        Self {
            segment_width: DEFAULT_SEGMENT_WIDTH,
            full_sieve_threshold: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|_| CliError::ConfigNotFound(path.display().to_string()))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.message().to_string()))?;
        Ok(config)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Engine configuration, with an optional width override from the command line
    pub fn engine_config(&self, width_override: Option<u64>) -> EngineConfig {
        let segment_width = width_override.unwrap_or(self.sieve.segment_width);
        EngineConfig {
            segment_width,
            full_sieve_threshold: self.sieve.full_sieve_threshold.unwrap_or(segment_width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.sieve.segment_width, 10_000_000);
        assert_eq!(config.output.default_format, "text");
        assert!(config.output.pretty_json);
        assert_eq!(config.engine_config(None), EngineConfig::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = CliConfig::from_toml("[output]\ndefault_format = \"json\"\n").unwrap();
        assert_eq!(config.output.default_format, "json");
        assert!(config.output.pretty_json);
        assert_eq!(config.sieve, SieveConfig::default());
    }

    #[test]
    fn test_engine_config_override() {
        let config =
            CliConfig::from_toml("[sieve]\nsegment_width = 5000\nfull_sieve_threshold = 100\n")
                .unwrap();
        let engine = config.engine_config(None);
        assert_eq!(engine.segment_width, 5000);
        assert_eq!(engine.full_sieve_threshold, 100);

        let engine = config.engine_config(Some(64));
        assert_eq!(engine.segment_width, 64);
        assert_eq!(engine.full_sieve_threshold, 100);
    }

    #[test]
    fn test_roundtrip_through_file() {
        let mut file = NamedTempFile::new().unwrap();
        let text = CliConfig::default().to_toml().unwrap();
        file.write_all(text.as_bytes()).unwrap();

        let loaded = CliConfig::load(file.path()).unwrap();
        assert_eq!(loaded, CliConfig::default());
    }

    #[test]
    fn test_missing_file() {
        let err = CliConfig::load(Path::new("/nonexistent/segsieve.toml")).unwrap_err();
        assert!(err.to_string().contains("Configuration file not found"));
    }

    #[test]
    fn test_invalid_toml() {
        let err = CliConfig::from_toml("[sieve]\nsegment_width = \"wide\"\n").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
