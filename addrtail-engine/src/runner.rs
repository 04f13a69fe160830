//! Batch runner and builder
//!
//! A batch run takes a dataset and the name of its address column, then:
//!
//! 1. normalises cells (optional),
//! 2. drops sentinel rows (optional, caller policy),
//! 3. parses every address cell,
//! 4. merges the five component columns back by row position,
//! 5. stamps a load-time column (optional).

use crate::config::{EngineConfig, ExecutionMode};
use crate::dataset::Dataset;
use crate::error::{EngineError, Result};
use crate::executor;
use crate::normalize::Normalizer;
use crate::sentinel::SentinelFilter;
use addrtail_core::{AddressComponents, FormatTag, FIELD_NAMES};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Instant;

/// Format of the load-time stamp column
pub const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Batch configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// Column holding the raw address tails
    pub address_column: String,
    /// Prefix for the output column names (`""` gives `CITY`, `STATE`, ...)
    pub column_prefix: String,
    /// Drop rows whose address contains a sentinel (None = keep all rows)
    pub sentinel_filter: Option<SentinelFilter>,
    /// Cell normalisation run before anything else
    pub normalizer: Option<Normalizer>,
    /// Column receiving the run timestamp
    pub stamp_column: Option<String>,
    /// Execution settings
    pub engine: EngineConfig,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            address_column: "address".to_string(),
            column_prefix: String::new(),
            sentinel_filter: None,
            normalizer: None,
            stamp_column: None,
            engine: EngineConfig::default(),
        }
    }
}

impl BatchConfig {
    /// Output column names in [`FIELD_NAMES`] order, with the prefix applied
    pub fn output_columns(&self) -> [String; 5] {
        FIELD_NAMES.map(|name| format!("{}{name}", self.column_prefix))
    }

    /// Reject configurations that cannot produce a consistent output
    pub fn validate(&self) -> Result<()> {
        self.engine.validate()?;

        if self.address_column.trim().is_empty() {
            return Err(EngineError::ConfigError(
                "address column name is empty".to_string(),
            ));
        }
        if self.output_columns().contains(&self.address_column) {
            return Err(EngineError::ConfigError(format!(
                "address column '{}' would be overwritten by a component column",
                self.address_column
            )));
        }

        if let Some(stamp) = &self.stamp_column {
            if stamp.trim().is_empty() {
                return Err(EngineError::ConfigError(
                    "stamp column name is empty".to_string(),
                ));
            }
            if self.output_columns().contains(stamp) {
                return Err(EngineError::ConfigError(format!(
                    "stamp column '{stamp}' collides with a component column"
                )));
            }
            if *stamp == self.address_column {
                return Err(EngineError::ConfigError(format!(
                    "stamp column '{stamp}' would overwrite the address column"
                )));
            }
        }
        Ok(())
    }
}

/// Counters for one batch run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchStats {
    /// Rows in the input dataset
    pub rows_read: usize,
    /// Rows removed by the sentinel filter
    pub rows_filtered: usize,
    /// Rows in the output dataset
    pub rows_written: usize,
    /// Output rows per detected format
    pub formats: BTreeMap<FormatTag, usize>,
    /// Execution mode actually used
    pub execution_mode: ExecutionMode,
    /// Wall-clock time of the run in milliseconds
    pub elapsed_ms: f64,
}

impl BatchStats {
    /// Rows tagged `Unknown` or `Empty`
    pub fn needs_review(&self) -> usize {
        self.formats
            .iter()
            .filter(|(tag, _)| tag.needs_review())
            .map(|(_, count)| count)
            .sum()
    }

    /// Count for one tag
    pub fn count(&self, tag: FormatTag) -> usize {
        self.formats.get(&tag).copied().unwrap_or(0)
    }
}

/// Result of a batch run
#[derive(Debug, Clone)]
pub struct BatchOutput {
    /// Input rows with the component columns merged in
    pub dataset: Dataset,
    /// Run counters
    pub stats: BatchStats,
}

/// Applies the address parser across a dataset
#[derive(Debug, Clone)]
pub struct BatchRunner {
    config: BatchConfig,
}

impl BatchRunner {
    /// Create a runner, validating the configuration
    pub fn new(config: BatchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a builder
    pub fn builder() -> BatchRunnerBuilder {
        BatchRunnerBuilder::new()
    }

    /// Current configuration
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Parse a bare column of values, one record per value
    pub fn parse_values(&self, values: &[Option<&str>]) -> Result<Vec<AddressComponents>> {
        executor::parse_all(values, &self.config.engine).map(|(records, _)| records)
    }

    /// Run the batch, stamping with the current local time
    pub fn run(&self, dataset: Dataset) -> Result<BatchOutput> {
        self.run_at(dataset, Local::now().naive_local())
    }

    /// Run the batch with an explicit stamp time
    pub fn run_at(&self, mut dataset: Dataset, stamped_at: NaiveDateTime) -> Result<BatchOutput> {
        let start = Instant::now();
        let address_column = self.config.address_column.as_str();
        let column = dataset.require_column(address_column)?;
        let rows_read = dataset.len();

        if let Some(normalizer) = &self.config.normalizer {
            normalizer.apply(&mut dataset)?;
        }

        let rows_filtered = match &self.config.sentinel_filter {
            Some(filter) => filter.apply(&mut dataset, address_column)?,
            None => 0,
        };

        let values: Vec<Option<&str>> = dataset.column_values(column).collect();
        let (records, execution_mode) = executor::parse_all(&values, &self.config.engine)?;
        drop(values);

        let mut formats = BTreeMap::new();
        for record in &records {
            *formats.entry(record.format).or_insert(0) += 1;
        }

        self.merge(&mut dataset, &records)?;

        if let Some(stamp_column) = &self.config.stamp_column {
            let stamp = stamped_at.format(STAMP_FORMAT).to_string();
            dataset.set_column(stamp_column, vec![stamp; dataset.len()])?;
        }

        let stats = BatchStats {
            rows_read,
            rows_filtered,
            rows_written: dataset.len(),
            formats,
            execution_mode,
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        };

        log::info!(
            "parsed {} rows from '{}' ({:?}, {} filtered, {} need review) in {:.1} ms",
            stats.rows_written,
            address_column,
            stats.execution_mode,
            stats.rows_filtered,
            stats.needs_review(),
            stats.elapsed_ms
        );

        Ok(BatchOutput { dataset, stats })
    }

    /// Write component columns back by row position
    fn merge(&self, dataset: &mut Dataset, records: &[AddressComponents]) -> Result<()> {
        for (field, name) in self.config.output_columns().iter().enumerate() {
            let values = records
                .iter()
                .map(|record| record.values()[field].to_string())
                .collect();
            dataset.set_column(name, values)?;
        }
        Ok(())
    }
}

/// Builder for [`BatchRunner`]
#[derive(Debug, Default)]
pub struct BatchRunnerBuilder {
    config: BatchConfig,
}

impl BatchRunnerBuilder {
    /// Create a builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the address column
    pub fn address_column<S: Into<String>>(mut self, column: S) -> Self {
        self.config.address_column = column.into();
        self
    }

    /// Set the output column prefix
    pub fn column_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.config.column_prefix = prefix.into();
        self
    }

    /// Drop sentinel rows with the given filter
    pub fn sentinel_filter(mut self, filter: SentinelFilter) -> Self {
        self.config.sentinel_filter = Some(filter);
        self
    }

    /// Normalise cells before parsing
    pub fn normalizer(mut self, normalizer: Normalizer) -> Self {
        self.config.normalizer = Some(normalizer);
        self
    }

    /// Stamp each output row with the run time
    pub fn stamp_column<S: Into<String>>(mut self, column: S) -> Self {
        self.config.stamp_column = Some(column.into());
        self
    }

    /// Replace the execution settings
    pub fn engine(mut self, engine: EngineConfig) -> Self {
        self.config.engine = engine;
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.engine.execution_mode = mode;
        self
    }

    /// Set the thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.engine.threads = count;
        self
    }

    /// Set the adaptive row threshold
    pub fn parallel_threshold(mut self, rows: usize) -> Self {
        self.config.engine.parallel_threshold = rows;
        self
    }

    /// Build the runner
    pub fn build(self) -> Result<BatchRunner> {
        BatchRunner::new(self.config)
    }
}
