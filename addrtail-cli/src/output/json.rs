//! JSON output formatter

use super::OutputFormatter;
use addrtail_engine::Record;
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs rows as a JSON array of objects.
///
/// Rows are streamed one at a time so key order follows the header.
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    record_count: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            record_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn begin(&mut self, _columns: &[String]) -> Result<()> {
        write!(self.writer, "[")?;
        Ok(())
    }

    fn format_record(&mut self, record: &Record<'_>) -> Result<()> {
        if self.record_count > 0 {
            write!(self.writer, ",")?;
        }
        self.record_count += 1;

        if self.pretty {
            let body = serde_json::to_string_pretty(record)?;
            writeln!(self.writer)?;
            for (i, line) in body.lines().enumerate() {
                if i > 0 {
                    writeln!(self.writer)?;
                }
                write!(self.writer, "  {line}")?;
            }
        } else {
            serde_json::to_writer(&mut self.writer, record)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty && self.record_count > 0 {
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "]")?;
        self.writer.flush()?;
        Ok(())
    }
}
