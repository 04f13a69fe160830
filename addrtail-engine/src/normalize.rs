//! Cell normalisation applied before parsing
//!
//! County exports pad fields with spaces and mix case. Every cell is
//! trimmed; internal whitespace collapsing, case folding and hyphen
//! removal on identifier columns are optional.

use crate::dataset::Dataset;
use crate::error::{EngineError, Result};
use std::str::FromStr;

/// Case folding applied to every cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseMode {
    /// Leave case as read
    #[default]
    Preserve,
    /// Upper-case every cell
    Upper,
    /// Lower-case every cell
    Lower,
}

impl FromStr for CaseMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "preserve" | "" => Ok(CaseMode::Preserve),
            "upper" => Ok(CaseMode::Upper),
            "lower" => Ok(CaseMode::Lower),
            other => Err(EngineError::ConfigError(format!(
                "unknown case mode '{other}' (expected preserve, upper or lower)"
            ))),
        }
    }
}

/// Cell normaliser
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalizer {
    /// Replace runs of whitespace inside a cell with one space
    pub collapse_whitespace: bool,
    /// Case folding
    pub case: CaseMode,
    /// Columns from which every `-` is removed (parcel IDs and the like)
    pub strip_hyphen_columns: Vec<String>,
}

impl Normalizer {
    /// Normalise a single value
    pub fn normalize_value(&self, value: &str) -> String {
        let trimmed = value.trim();
        let spaced = if self.collapse_whitespace {
            trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
        } else {
            trimmed.to_string()
        };

        match self.case {
            CaseMode::Preserve => spaced,
            CaseMode::Upper => spaced.to_uppercase(),
            CaseMode::Lower => spaced.to_lowercase(),
        }
    }

    /// Normalise every cell of `dataset` in place
    pub fn apply(&self, dataset: &mut Dataset) -> Result<()> {
        let hyphen_columns = self
            .strip_hyphen_columns
            .iter()
            .map(|name| dataset.require_column(name))
            .collect::<Result<Vec<_>>>()?;

        dataset.map_cells(|cell| self.normalize_value(cell));
        for column in hyphen_columns {
            dataset.map_column(column, |cell| cell.replace('-', ""));
        }
        Ok(())
    }
}
