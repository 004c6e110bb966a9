use indexmap::{IndexMap, IndexSet};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::error::Result;
use crate::models::ReviewRecord;

/// One row read back from an export. Empty cells are left out.
pub type CsvRow = IndexMap<String, String>;

/// Write the dataset as CSV.
///
/// The header is the union of every record's columns in first-seen order.
/// Columns a record lacks, and an absent rating, are written as empty cells.
pub fn write_csv(dataset: &[ReviewRecord], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_records(dataset, file)
}

pub fn write_records<W: Write>(dataset: &[ReviewRecord], sink: W) -> Result<()> {
    let rows: Vec<IndexMap<String, Option<String>>> =
        dataset.iter().map(ReviewRecord::fields).collect();

    let mut columns: IndexSet<&str> = IndexSet::new();
    for row in &rows {
        columns.extend(row.keys().map(String::as_str));
    }
    debug!("Writing {} rows across {} columns", rows.len(), columns.len());

    let mut writer = csv::Writer::from_writer(sink);
    if rows.is_empty() {
        writer.flush()?;
        return Ok(());
    }

    writer.write_record(columns.iter())?;
    for row in &rows {
        writer.write_record(
            columns
                .iter()
                .map(|column| row.get(*column).and_then(|value| value.as_deref()).unwrap_or("")),
        )?;
    }
    writer.flush()?;

    Ok(())
}

/// Read an exported file back into rows keyed by column name.
pub fn read_csv(path: &Path) -> Result<Vec<CsvRow>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: CsvRow = headers
            .iter()
            .zip(record.iter())
            .filter(|(_, value)| !value.is_empty())
            .map(|(column, value)| (column.to_string(), value.to_string()))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}
