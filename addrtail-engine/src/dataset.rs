//! Row-oriented tabular data
//!
//! Rows may be shorter than the header (ragged exports); a missing cell
//! reads as absent. Rows are never reordered.

use crate::error::{EngineError, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// A header plus rows of string cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Create an empty dataset with the given header
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Create a dataset from a header and rows
    pub fn with_rows<I, S>(columns: I, rows: Vec<Vec<String>>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dataset = Self::new(columns);
        dataset.rows = rows;
        dataset
    }

    /// Append a row
    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Header names
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All rows
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// `true` if there are no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column in the header
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Position of a column, or [`EngineError::MissingColumn`]
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| EngineError::MissingColumn {
                name: name.to_string(),
                available: self.columns.join(", "),
            })
    }

    /// Cell value, `None` when the row is too short
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
    }

    /// Values of one column in row order
    pub fn column_values(&self, column: usize) -> impl Iterator<Item = Option<&str>> + '_ {
        self.rows
            .iter()
            .map(move |row| row.get(column).map(String::as_str))
    }

    /// Overwrite a column in place, or append it if absent.
    ///
    /// `values` is aligned with the rows by position; short rows are padded
    /// with empty cells first. An appended column is inserted at the header
    /// width, so cells past the header move right instead of being
    /// overwritten.
    pub fn set_column(&mut self, name: &str, values: Vec<String>) -> Result<()> {
        if values.len() != self.rows.len() {
            return Err(EngineError::ConfigError(format!(
                "column '{name}' has {} values for {} rows",
                values.len(),
                self.rows.len()
            )));
        }

        let (index, appended) = match self.column_index(name) {
            Some(index) => (index, false),
            None => {
                self.columns.push(name.to_string());
                (self.columns.len() - 1, true)
            }
        };

        for (row, value) in self.rows.iter_mut().zip(values) {
            if row.len() < index {
                row.resize(index, String::new());
            }
            if appended || index == row.len() {
                row.insert(index, value);
            } else {
                row[index] = value;
            }
        }
        Ok(())
    }

    /// Rewrite every cell of one column in place
    pub fn map_column<F>(&mut self, column: usize, mut f: F)
    where
        F: FnMut(&str) -> String,
    {
        for row in &mut self.rows {
            if let Some(cell) = row.get_mut(column) {
                *cell = f(cell);
            }
        }
    }

    /// Rewrite every cell in place
    pub fn map_cells<F>(&mut self, mut f: F)
    where
        F: FnMut(&str) -> String,
    {
        for cell in self.rows.iter_mut().flatten() {
            *cell = f(cell);
        }
    }

    /// Keep rows for which `keep` holds, preserving order.
    ///
    /// Returns the number of rows removed.
    pub fn retain_rows<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&[String]) -> bool,
    {
        let before = self.rows.len();
        self.rows.retain(|row| keep(row));
        before - self.rows.len()
    }

    /// Append the rows of another dataset with the same header
    pub fn append(&mut self, other: Dataset) -> Result<()> {
        if self.columns.is_empty() && self.rows.is_empty() {
            *self = other;
            return Ok(());
        }
        if self.columns != other.columns {
            return Err(EngineError::SchemaMismatch {
                expected: self.columns.join(", "),
                found: other.columns.join(", "),
            });
        }
        self.rows.extend(other.rows);
        Ok(())
    }

    /// Rows as header-keyed records, in row order
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> + '_ {
        self.rows.iter().map(move |values| Record {
            columns: &self.columns,
            values,
        })
    }

    /// Number of rows with more cells than the header
    pub fn overlong_rows(&self) -> usize {
        let width = self.columns.len();
        self.rows.iter().filter(|row| row.len() > width).count()
    }
}

/// One row viewed through the header.
///
/// Serialises as a map in header order; missing cells are empty strings.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    columns: &'a [String],
    values: &'a [String],
}

impl<'a> Record<'a> {
    /// Value for a column, empty when the row is short
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let index = self.columns.iter().position(|c| c == column)?;
        Some(self.values.get(index).map(String::as_str).unwrap_or(""))
    }

    /// Cells past the header, in row order
    pub fn extra(&self) -> &'a [String] {
        let (columns, values) = (self.columns, self.values);
        values.get(columns.len()..).unwrap_or(&[])
    }

    /// `(column, value)` pairs in header order
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        let (columns, values) = (self.columns, self.values);
        columns
            .iter()
            .enumerate()
            .map(move |(i, c)| (c.as_str(), values.get(i).map(String::as_str).unwrap_or("")))
    }
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, value) in self.iter() {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}
