//! CSV reading and writing for datasets

use crate::dataset::Dataset;
use crate::error::Result;
use std::io::{Read, Write};

/// Read a headed CSV table.
///
/// Header names are trimmed. Rows may have fewer or more cells than the
/// header. Short rows read as absent cells. Extra cells (often an unquoted
/// delimiter inside a field) are kept after the named columns, are never
/// addressed by name and are written back out unchanged.
pub fn read_csv<R: Read>(reader: R, delimiter: u8) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(reader);

    let columns: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    let mut dataset = Dataset::new(columns);

    for record in reader.records() {
        let record = record?;
        dataset.push_row(record.iter().map(str::to_string).collect());
    }

    let overlong = dataset.overlong_rows();
    if overlong > 0 {
        log::warn!(
            "{overlong} rows have more cells than the {}-column header; extra cells are kept after the named columns",
            dataset.columns().len()
        );
    }

    log::debug!(
        "read {} rows x {} columns",
        dataset.len(),
        dataset.columns().len()
    );
    Ok(dataset)
}

/// Read a headed CSV table from a string
pub fn read_csv_str(text: &str, delimiter: u8) -> Result<Dataset> {
    read_csv(text.as_bytes(), delimiter)
}

/// Write a dataset as headed CSV
pub fn write_csv<W: Write>(writer: W, dataset: &Dataset, delimiter: u8) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_writer(writer);

    writer.write_record(dataset.columns())?;
    for row in dataset.rows() {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
