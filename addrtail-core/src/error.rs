//! Error types for the core crate
//!
//! Classification and extraction never fail; the only fallible operation
//! is reading a format tag back from its serialised name.

use thiserror::Error;

/// Core-level errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A string did not name any known format tag
    #[error("unknown format tag: {0:?}")]
    UnknownFormatTag(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
