//! Batch orchestration for address-tail parsing
//!
//! This crate applies the `addrtail-core` parser across tabular records:
//! it owns the dataset model, sentinel filtering, cell normalisation,
//! sequential/parallel execution and the positional merge of component
//! columns back into each row.

#![warn(missing_docs)]

pub mod config;
pub mod dataset;
pub mod error;
pub mod executor;
pub mod normalize;
pub mod runner;
pub mod sentinel;
pub mod table;

// Re-export key types
pub use config::{EngineConfig, ExecutionMode};
pub use dataset::{Dataset, Record};
pub use error::{EngineError, Result};
pub use normalize::{CaseMode, Normalizer};
pub use runner::{BatchConfig, BatchOutput, BatchRunner, BatchRunnerBuilder, BatchStats};
pub use sentinel::{SentinelFilter, DEFAULT_SENTINELS};
pub use table::{read_csv, read_csv_str, write_csv};

// Re-export from core for convenience
pub use addrtail_core::{AddressComponents, FormatTag, FIELD_NAMES};
