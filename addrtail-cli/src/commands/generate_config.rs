//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Commented configuration template; every value shown is the default
pub const CONFIG_TEMPLATE: &str = r#"# addrtail configuration
#
# Every key is optional. Command-line flags override these values.

[processing]
# Column holding the address tail (CITY STATE ZIP, ZIP APO AE, ...)
address_column = "address"

# Encoding label of the input files: utf-8, windows-1252, latin1, ...
# A byte-order mark in the file takes precedence.
encoding = "utf-8"

# Field delimiter for input and CSV output ("\t" or "tab" for tabs)
delimiter = ","

# Drop rows whose address contains one of the sentinels below
drop_sentinels = false
sentinels = ["RETURNED", "UNKNOWN"]

# Case folding applied to every cell: preserve, upper or lower
case = "preserve"

# Replace runs of whitespace inside a cell with one space
collapse_whitespace = true

# Columns from which every "-" is removed, e.g. ["parcelID"]
strip_hyphen_columns = []

# Column receiving the run timestamp (YYYY-MM-DD HH:MM:SS); empty for none
stamp_column = ""

[output]
# csv, json or markdown
default_format = "csv"
pretty_json = true

# Prefix for the CITY, STATE, ZIPCODE, COUNTRY and FORMAT columns
column_prefix = ""

[performance]
# sequential, parallel or adaptive
execution_mode = "adaptive"

# Row count at which adaptive mode switches to parallel
parallel_threshold_rows = 10000

# Number of worker threads (0 = auto)
worker_threads = 0
"#;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, CONFIG_TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Set processing.address_column to the column in your export");
        println!("2. Validate your configuration:");
        println!("   addrtail validate -c {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   addrtail process -i parcels.csv --config {}",
            self.output.display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    #[test]
    fn test_template_matches_defaults() {
        let config = CliConfig::from_toml(CONFIG_TEMPLATE).unwrap();
        assert_eq!(config, CliConfig::default());
        config.validate().unwrap();
    }

    #[test]
    fn test_generate_writes_file_once() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("addrtail.toml");

        let args = GenerateConfigArgs {
            output: path.clone(),
            force: false,
        };
        args.execute().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), CONFIG_TEMPLATE);

        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("already exists"));

        let forced = GenerateConfigArgs {
            output: path,
            force: true,
        };
        forced.execute().unwrap();
    }
}
