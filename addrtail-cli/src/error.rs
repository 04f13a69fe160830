//! Error handling for the CLI application
//!
//! Library errors (`EngineError`) pass through `anyhow` unchanged; these
//! variants cover what only the command line can get wrong.

use std::fmt;

/// Errors raised while resolving inputs and settings
#[derive(Debug)]
pub enum CliError {
    /// No input file matched the given names or patterns
    FileNotFound(String),
    /// A glob pattern could not be compiled
    InvalidPattern(String),
    /// A config file or flag value is unusable
    ConfigError(String),
    /// Input bytes are not valid in the selected encoding
    EncodingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::EncodingError(msg) => write!(f, "Encoding error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
