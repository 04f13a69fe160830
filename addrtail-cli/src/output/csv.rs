//! CSV output formatter

use super::OutputFormatter;
use addrtail_engine::Record;
use anyhow::Result;
use std::io::Write;

/// CSV formatter - writes the header, then one line per row
pub struct CsvFormatter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvFormatter<W> {
    /// Create a new CSV formatter
    pub fn new(writer: W, delimiter: u8) -> Self {
        let writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_writer(writer);
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for CsvFormatter<W> {
    fn begin(&mut self, columns: &[String]) -> Result<()> {
        self.writer.write_record(columns)?;
        Ok(())
    }

    fn format_record(&mut self, record: &Record<'_>) -> Result<()> {
        let extra = record.extra().iter().map(String::as_str);
        self.writer
            .write_record(record.iter().map(|(_, value)| value).chain(extra))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
