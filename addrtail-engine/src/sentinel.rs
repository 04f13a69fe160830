//! Sentinel-row filtering
//!
//! Source systems write placeholders such as `RETURNED` or `UNKNOWN` into
//! the address field when no usable address exists. Dropping those rows is
//! a caller decision taken before parsing; the parser itself would tag
//! them `Unknown`.

use crate::dataset::Dataset;
use crate::error::Result;

/// Placeholders dropped by [`SentinelFilter::default`]
pub const DEFAULT_SENTINELS: [&str; 2] = ["RETURNED", "UNKNOWN"];

/// Substring matcher for placeholder address values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentinelFilter {
    patterns: Vec<String>,
    case_sensitive: bool,
}

impl Default for SentinelFilter {
    fn default() -> Self {
        Self::new(DEFAULT_SENTINELS)
    }
}

impl SentinelFilter {
    /// Case-insensitive filter over the given substrings.
    ///
    /// Blank patterns are ignored; they would match every row.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| p.as_ref().trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();

        Self {
            patterns,
            case_sensitive: false,
        }
    }

    /// Match case exactly
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Configured substrings
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// `true` if `value` contains any configured substring
    pub fn is_sentinel(&self, value: &str) -> bool {
        if self.case_sensitive {
            self.patterns.iter().any(|p| value.contains(p.as_str()))
        } else {
            let value = value.to_uppercase();
            self.patterns
                .iter()
                .any(|p| value.contains(p.to_uppercase().as_str()))
        }
    }

    /// Remove rows whose `column` cell is a sentinel.
    ///
    /// Row order is preserved. Returns the number of rows removed.
    pub fn apply(&self, dataset: &mut Dataset, column: &str) -> Result<usize> {
        let index = dataset.require_column(column)?;
        if self.patterns.is_empty() {
            return Ok(0);
        }

        let removed = dataset.retain_rows(|row| {
            row.get(index)
                .map_or(true, |value| !self.is_sentinel(value))
        });

        if removed > 0 {
            log::info!("dropped {removed} sentinel rows from column '{column}'");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(values: &[&str]) -> Dataset {
        Dataset::with_rows(
            ["id", "addr"],
            values
                .iter()
                .enumerate()
                .map(|(i, v)| vec![i.to_string(), v.to_string()])
                .collect(),
        )
    }

    #[test]
    fn test_default_patterns() {
        let filter = SentinelFilter::default();
        assert!(filter.is_sentinel("RETURNED"));
        assert!(filter.is_sentinel("MAIL RETURNED 2019"));
        assert!(filter.is_sentinel("unknown"));
        assert!(!filter.is_sentinel("RALEIGH NC 27601"));
        assert!(!filter.is_sentinel(""));
    }

    #[test]
    fn test_case_sensitive() {
        let filter = SentinelFilter::default().case_sensitive(true);
        assert!(filter.is_sentinel("RETURNED"));
        assert!(!filter.is_sentinel("returned"));
    }

    #[test]
    fn test_blank_patterns_are_ignored() {
        let filter = SentinelFilter::new(["", "  ", "VACANT"]);
        assert_eq!(filter.patterns(), &["VACANT".to_string()]);
        assert!(!filter.is_sentinel("RALEIGH NC 27601"));
    }

    #[test]
    fn test_apply_preserves_order() {
        let mut data = dataset(&["RALEIGH NC 27601", "RETURNED", "", "UNKNOWN", "09774 DPO AE"]);
        let removed = SentinelFilter::default().apply(&mut data, "addr").unwrap();
        assert_eq!(removed, 2);
        let ids: Vec<_> = data.rows().iter().map(|r| r[0].as_str()).collect();
        assert_eq!(ids, vec!["0", "2", "4"]);
    }

    #[test]
    fn test_apply_keeps_short_rows() {
        let mut data = Dataset::with_rows(["id", "addr"], vec![vec!["0".to_string()]]);
        assert_eq!(SentinelFilter::default().apply(&mut data, "addr").unwrap(), 0);
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn test_apply_missing_column() {
        let mut data = dataset(&["RETURNED"]);
        assert!(SentinelFilter::default().apply(&mut data, "address").is_err());
    }
}
