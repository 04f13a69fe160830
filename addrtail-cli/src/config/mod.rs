//! Configuration module
//!
//! Every field has a default, so a config file only needs the keys it
//! changes. Command-line flags override file values.

use crate::error::CliError;
use crate::input::FileReader;
use crate::output::OutputFormat;
use addrtail_engine::{CaseMode, ExecutionMode, DEFAULT_SENTINELS};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Processing-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Column holding the address tail
    pub address_column: String,

    /// Encoding label of the input files
    pub encoding: String,

    /// Field delimiter for input and CSV output
    pub delimiter: String,

    /// Drop rows whose address contains a sentinel
    pub drop_sentinels: bool,

    /// Sentinel substrings
    pub sentinels: Vec<String>,

    /// Case folding: preserve, upper or lower
    pub case: String,

    /// Collapse runs of whitespace inside cells
    pub collapse_whitespace: bool,

    /// Columns to remove hyphens from
    pub strip_hyphen_columns: Vec<String>,

    /// Column receiving the run timestamp (empty = none)
    pub stamp_column: String,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            address_column: "address".to_string(),
            encoding: "utf-8".to_string(),
            delimiter: ",".to_string(),
            drop_sentinels: false,
            sentinels: DEFAULT_SENTINELS.iter().map(|s| s.to_string()).collect(),
            case: "preserve".to_string(),
            collapse_whitespace: true,
            strip_hyphen_columns: Vec::new(),
            stamp_column: String::new(),
        }
    }
}

impl ProcessingConfig {
    /// Parsed case mode
    pub fn case_mode(&self) -> Result<CaseMode> {
        Ok(self.case.parse()?)
    }

    /// Delimiter as a single byte
    pub fn delimiter_byte(&self) -> Result<u8> {
        parse_delimiter(&self.delimiter)
    }

    /// Stamp column, if one is configured
    pub fn stamp_column(&self) -> Option<&str> {
        Some(self.stamp_column.trim()).filter(|s| !s.is_empty())
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Prefix for the CITY..FORMAT column names
    pub column_prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Csv,
            pretty_json: true,
            column_prefix: String::new(),
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// sequential, parallel or adaptive
    pub execution_mode: String,

    /// Row count at which adaptive mode goes parallel
    pub parallel_threshold_rows: usize,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            execution_mode: "adaptive".to_string(),
            parallel_threshold_rows: 10_000,
            worker_threads: 0,
        }
    }
}

impl PerformanceConfig {
    /// Parsed execution mode
    pub fn execution_mode(&self) -> Result<ExecutionMode> {
        Ok(self.execution_mode.parse()?)
    }

    /// Worker thread count, `None` for the rayon default
    pub fn threads(&self) -> Option<usize> {
        Some(self.worker_threads).filter(|&n| n > 0)
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&text)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| CliError::ConfigError(e.message().to_string()).into())
    }

    /// Check every value that is stored as text
    pub fn validate(&self) -> Result<()> {
        let processing = &self.processing;
        if processing.address_column.trim().is_empty() {
            anyhow::bail!(CliError::ConfigError(
                "processing.address_column is empty".to_string()
            ));
        }
        FileReader::resolve_encoding(&processing.encoding)?;
        processing.delimiter_byte()?;
        processing.case_mode()?;
        self.performance.execution_mode()?;
        if self.performance.parallel_threshold_rows == 0 {
            anyhow::bail!(CliError::ConfigError(
                "performance.parallel_threshold_rows must be at least 1".to_string()
            ));
        }
        Ok(())
    }
}

/// Parse a delimiter given as one ASCII character, `\t` or `tab`
pub fn parse_delimiter(text: &str) -> Result<u8> {
    match text {
        "\\t" | "tab" | "\t" => return Ok(b'\t'),
        _ => {}
    }

    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(CliError::ConfigError(format!(
            "delimiter must be a single ASCII character, got '{text}'"
        ))
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CliConfig::default();
        config.validate().unwrap();
        assert_eq!(config.processing.address_column, "address");
        assert_eq!(config.processing.sentinels, vec!["RETURNED", "UNKNOWN"]);
        assert_eq!(config.performance.threads(), None);
        assert_eq!(config.processing.stamp_column(), None);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = CliConfig::from_toml(
            r#"
[processing]
address_column = "current_owner_address"
case = "upper"

[performance]
worker_threads = 4
"#,
        )
        .unwrap();

        assert_eq!(config.processing.address_column, "current_owner_address");
        assert_eq!(config.processing.case_mode().unwrap(), CaseMode::Upper);
        assert!(config.processing.collapse_whitespace);
        assert_eq!(config.output, OutputConfig::default());
        assert_eq!(config.performance.threads(), Some(4));
        assert_eq!(config.performance.parallel_threshold_rows, 10_000);
    }

    #[test]
    fn test_unknown_values_fail_validation() {
        let mut config = CliConfig::default();
        config.performance.execution_mode = "turbo".to_string();
        assert!(config.validate().is_err());

        let mut config = CliConfig::default();
        config.processing.encoding = "klingon".to_string();
        assert!(config.validate().is_err());

        let mut config = CliConfig::default();
        config.processing.delimiter = ";;".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_output_format_fails_to_parse() {
        let err = CliConfig::from_toml("[output]\ndefault_format = \"xml\"\n").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter(",").unwrap(), b',');
        assert_eq!(parse_delimiter("|").unwrap(), b'|');
        assert_eq!(parse_delimiter("\\t").unwrap(), b'\t');
        assert_eq!(parse_delimiter("tab").unwrap(), b'\t');
        assert!(parse_delimiter("").is_err());
        assert!(parse_delimiter("§").is_err());
    }

    #[test]
    fn test_stamp_column_blank_is_none() {
        let mut config = ProcessingConfig::default();
        config.stamp_column = "  ".to_string();
        assert_eq!(config.stamp_column(), None);
        config.stamp_column = "updated_at".to_string();
        assert_eq!(config.stamp_column(), Some("updated_at"));
    }
}
