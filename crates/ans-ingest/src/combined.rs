//! Reader and writer for the combined samples file.
//!
//! The combined file is plain UTF-8 CSV with a single header row. The
//! absent sentinel round-trips as an empty field: `Missing` serializes to
//! `""` and empty fields deserialize back to `Missing`.

use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use tracing::info;

use ans_model::{CellValue, Result, SampleTable};

/// Write the unified table as a comma-delimited CSV with a header row.
pub fn write_combined(table: &SampleTable, path: &Path) -> Result<()> {
    let mut writer = WriterBuilder::new().from_path(path)?;
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row.iter().map(|cell| cell.as_text().unwrap_or("")))?;
    }
    writer.flush()?;
    info!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.columns.len(),
        "wrote combined samples"
    );
    Ok(())
}

/// Read a combined samples file back into a table.
pub fn read_combined(path: &Path) -> Result<SampleTable> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let columns: Vec<String> = reader
        .headers()?
        .iter()
        .map(|header| header.trim().trim_matches('\u{feff}').to_string())
        .collect();
    let mut table = SampleTable::new(columns);
    for record in reader.records() {
        let record = record?;
        table.push_row(record.iter().map(CellValue::from_field).collect());
    }
    Ok(table)
}
