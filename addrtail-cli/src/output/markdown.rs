//! Markdown output formatter

use super::OutputFormatter;
use addrtail_engine::Record;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs rows as a markdown table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    row_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            row_count: 0,
        }
    }
}

/// Keep a cell on one table row
fn escape(cell: &str) -> String {
    cell.replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace(['\r', '\n'], "<br>")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn begin(&mut self, columns: &[String]) -> Result<()> {
        let header: Vec<String> = columns.iter().map(|c| escape(c)).collect();
        writeln!(self.writer, "| {} |", header.join(" | "))?;
        writeln!(self.writer, "|{}", " --- |".repeat(columns.len()))?;
        Ok(())
    }

    fn format_record(&mut self, record: &Record<'_>) -> Result<()> {
        self.row_count += 1;
        let cells: Vec<String> = record.iter().map(|(_, value)| escape(value)).collect();
        writeln!(self.writer, "| {} |", cells.join(" | "))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total rows: {}*", self.row_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::write_dataset;
    use addrtail_engine::Dataset;

    #[test]
    fn test_markdown_table() {
        let dataset = Dataset::with_rows(
            ["owner", "FORMAT"],
            vec![vec!["A|B".to_string(), "unknown".to_string()]],
        );

        let mut buffer = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buffer);
            write_dataset(&mut formatter, &dataset).unwrap();
        }

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "| owner | FORMAT |\n| --- | --- |\n| A\\|B | unknown |\n\n---\n*Total rows: 1*\n"
        );
    }

    #[test]
    fn test_line_breaks_stay_in_one_row() {
        let dataset = Dataset::with_rows(
            ["owner"],
            vec![vec!["SMITH JOHN\r\nC/O BANK\nTRUST\rDEPT".to_string()]],
        );

        let mut buffer = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buffer);
            write_dataset(&mut formatter, &dataset).unwrap();
        }

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("| SMITH JOHN<br>C/O BANK<br>TRUST<br>DEPT |\n"));
        assert_eq!(text.lines().filter(|line| line.starts_with('|')).count(), 3);
    }
}
