//! Output formatting module

use addrtail_engine::{Dataset, Record};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Start the output with the header row
    fn begin(&mut self, columns: &[String]) -> Result<()>;

    /// Format and output a single row
    fn format_record(&mut self, record: &Record<'_>) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod csv;
pub mod json;
pub mod markdown;

pub use self::csv::CsvFormatter;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Delimited text with the input columns plus the parsed components
    #[default]
    Csv,
    /// JSON array of row objects keyed by column name
    Json,
    /// Markdown table
    Markdown,
}

impl OutputFormat {
    /// All formats, in the order `list formats` prints them
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Csv, OutputFormat::Json, OutputFormat::Markdown];

    /// Name accepted by `--format`
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description
    pub fn description(self) -> &'static str {
        match self {
            OutputFormat::Csv => "Delimited text, input columns followed by CITY..FORMAT",
            OutputFormat::Json => "JSON array of row objects in column order",
            OutputFormat::Markdown => "Markdown table with a row count footer",
        }
    }
}

/// Settings shared by the formatters
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    /// Field delimiter for CSV output
    pub delimiter: u8,
    /// Indent JSON output
    pub pretty_json: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            pretty_json: true,
        }
    }
}

/// Build the formatter for `format` over `writer`
pub fn create_formatter<W>(
    format: OutputFormat,
    writer: W,
    options: FormatOptions,
) -> Box<dyn OutputFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Csv => Box::new(CsvFormatter::new(writer, options.delimiter)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, options.pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

/// Stream a whole dataset through a formatter
pub fn write_dataset(formatter: &mut dyn OutputFormatter, dataset: &Dataset) -> Result<()> {
    formatter.begin(dataset.columns())?;
    for record in dataset.records() {
        formatter.format_record(&record)?;
    }
    formatter.finish()
}
