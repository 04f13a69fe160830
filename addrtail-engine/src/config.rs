//! Configuration types for the engine

use crate::error::{EngineError, Result};

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Single-threaded, row by row
    Sequential,
    /// Rows parsed on the rayon pool
    Parallel,
    /// Sequential below the row threshold, parallel at or above it
    Adaptive,
}

impl std::str::FromStr for ExecutionMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sequential" => Ok(ExecutionMode::Sequential),
            "parallel" => Ok(ExecutionMode::Parallel),
            "adaptive" | "auto" => Ok(ExecutionMode::Adaptive),
            other => Err(EngineError::ConfigError(format!(
                "unknown execution mode '{other}'"
            ))),
        }
    }
}

/// Pick sequential or parallel execution from the row count
pub fn auto_select(rows: usize, threshold: usize) -> ExecutionMode {
    if rows < threshold {
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Number of threads for parallel execution (None = rayon default)
    pub threads: Option<usize>,
    /// Row count at which adaptive mode switches to parallel
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: 10_000,
        }
    }
}

impl EngineConfig {
    /// Always run on the calling thread
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            threads: Some(1),
            parallel_threshold: usize::MAX,
        }
    }

    /// Switch to parallel early and use every available core
    pub fn fast() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: 1_000,
        }
    }

    /// Mode to use for a batch of `rows` rows
    pub fn resolve_mode(&self, rows: usize) -> ExecutionMode {
        match self.execution_mode {
            ExecutionMode::Adaptive => auto_select(rows, self.parallel_threshold),
            mode => mode,
        }
    }

    /// Reject settings that cannot run
    pub fn validate(&self) -> Result<()> {
        if self.threads == Some(0) {
            return Err(EngineError::ConfigError(
                "thread count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
