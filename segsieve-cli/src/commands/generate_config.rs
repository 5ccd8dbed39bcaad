//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Path of the configuration file to write
    #[arg(value_name = "FILE")]
    pub path: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = self.generate_template()?;

        fs::write(&self.path, template)
            .with_context(|| format!("Failed to write to {}", self.path.display()))?;

        println!("✓ Configuration written to {}", self.path.display());
        println!(
            "  Use it with: segsieve --config {} list 100",
            self.path.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> Result<String> {
        let body = CliConfig::default().to_toml()?;
        Ok(format!(
            "# segsieve configuration\n\
             #\n\
             # [sieve] segment_width: values sieved per segment for large bounds\n\
             # [sieve] full_sieve_threshold: optional, defaults to segment_width\n\
             # [output] default_format: text, json or markdown\n\n\
             {body}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generated_template_loads() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("segsieve.toml");

        let args = GenerateConfigArgs {
            path: path.clone(),
        };
        args.execute().unwrap();

        let loaded = CliConfig::load(&path).unwrap();
        assert_eq!(loaded, CliConfig::default());
    }
}
