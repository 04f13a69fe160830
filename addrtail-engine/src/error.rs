//! Engine error types

use addrtail_core::CoreError;
use thiserror::Error;

/// Engine-level errors
///
/// Parsing itself never fails; these cover the dataset and configuration
/// around it.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core error
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// A named column is not in the dataset header
    #[error("column '{name}' not found (available: {available})")]
    MissingColumn {
        /// The requested column
        name: String,
        /// Comma-separated header of the dataset
        available: String,
    },

    /// Two datasets being combined have different headers
    #[error("header mismatch: expected [{expected}], found [{found}]")]
    SchemaMismatch {
        /// Header of the dataset being appended to
        expected: String,
        /// Header of the dataset being appended
        found: String,
    },

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// Thread pool could not be built
    #[cfg(feature = "parallel")]
    #[error("thread pool error: {0}")]
    ThreadPool(String),

    /// CSV decoding or encoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::IoError(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_display() {
        let error = EngineError::MissingColumn {
            name: "owner_address".to_string(),
            available: "parcel_id, owner".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "column 'owner_address' not found (available: parcel_id, owner)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error: EngineError = io.into();
        assert!(matches!(error, EngineError::IoError(ref msg) if msg == "gone"));
    }

    #[test]
    fn test_core_error_conversion() {
        let error: EngineError = CoreError::UnknownFormatTag("x".into()).into();
        assert!(error.to_string().starts_with("core error:"));
    }
}
