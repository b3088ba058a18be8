//! Parser for raw per-dataset sample files.
//!
//! The collection sheets carry a two-row compound header: row one is a
//! coarse group label, row two the specific field name. The effective
//! column name is the sub-header cell when it is non-empty, otherwise the
//! main-header cell. All remaining rows are data.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use ans_model::{CellValue, Result, SampleTable, SurveyError, schema};

fn malformed(path: &Path, reason: impl Into<String>) -> SurveyError {
    SurveyError::MalformedInput {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

fn normalize_field(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Merge the two header rows into one effective header list.
fn merge_headers(path: &Path, main: &[String], sub: &[String]) -> Result<Vec<String>> {
    let width = main.len().max(sub.len());
    let mut headers = Vec::with_capacity(width);
    for idx in 0..width {
        let sub_label = sub.get(idx).map(String::as_str).unwrap_or("");
        let main_label = main.get(idx).map(String::as_str).unwrap_or("");
        let effective = if sub_label.is_empty() {
            main_label
        } else {
            sub_label
        };
        if effective.is_empty() {
            return Err(malformed(
                path,
                format!("column {} has neither a group label nor a field name", idx + 1),
            ));
        }
        if headers.iter().any(|existing| existing == effective) {
            return Err(malformed(
                path,
                format!("duplicate column name '{effective}'"),
            ));
        }
        headers.push(effective.to_string());
    }
    Ok(headers)
}

/// Read one raw sample file into a table tagged with its dataset.
///
/// The dataset value is the filename with its extension removed, stored in
/// a `dataset` column appended to every row. A sheet that already carries
/// a `dataset` column has its values overwritten with the stem: provenance
/// comes from the filename, never from sheet content. Fails with
/// `MalformedInput` when fewer than two header rows exist or a data row's
/// field count does not match the header count; rows are never truncated
/// or padded.
pub fn parse_raw_sample_file(path: &Path) -> Result<SampleTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut records: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Vec<String> = record.iter().map(normalize_field).collect();
        // Blank separator lines in the data region carry no information,
        // but an all-blank main header row is shape: keep the first two.
        if records.len() >= 2 && row.iter().all(String::is_empty) {
            continue;
        }
        records.push(row);
    }

    if records.len() < 2 {
        return Err(malformed(path, "expected two header rows before data"));
    }

    let headers = merge_headers(path, &records[0], &records[1])?;
    let dataset = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let existing_dataset = headers
        .iter()
        .position(|header| header == schema::COL_DATASET);
    let mut columns = headers.clone();
    if existing_dataset.is_none() {
        columns.push(schema::COL_DATASET.to_string());
    }
    let mut table = SampleTable::new(columns);

    for (offset, record) in records[2..].iter().enumerate() {
        if record.len() != headers.len() {
            return Err(malformed(
                path,
                format!(
                    "data row {} has {} fields, expected {}",
                    offset + 1,
                    record.len(),
                    headers.len()
                ),
            ));
        }
        let mut row: Vec<CellValue> = record
            .iter()
            .map(|field| CellValue::from_field(field))
            .collect();
        match existing_dataset {
            Some(idx) => row[idx] = CellValue::Text(dataset.clone()),
            None => row.push(CellValue::Text(dataset.clone())),
        }
        table.push_row(row);
    }

    debug!(
        path = %path.display(),
        dataset = %dataset,
        columns = table.columns.len(),
        rows = table.row_count(),
        "parsed raw sample file"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_header_wins_over_main() {
        let path = Path::new("samples/B Concourse-Android.csv");
        let headers = merge_headers(
            path,
            &["Wi-Fi".to_string(), String::new(), "Info".to_string()],
            &["Ookla DL".to_string(), "Ookla UL".to_string(), String::new()],
        )
        .unwrap();
        assert_eq!(headers, vec!["Ookla DL", "Ookla UL", "Info"]);
    }

    #[test]
    fn unnamed_column_is_malformed() {
        let path = Path::new("samples/bad.csv");
        let result = merge_headers(
            path,
            &[String::new(), "Info".to_string()],
            &[String::new(), String::new()],
        );
        assert!(matches!(
            result,
            Err(SurveyError::MalformedInput { .. })
        ));
    }

    #[test]
    fn duplicate_effective_name_is_malformed() {
        let path = Path::new("samples/bad.csv");
        let result = merge_headers(
            path,
            &["RSSI".to_string(), "RSSI".to_string()],
            &[String::new(), String::new()],
        );
        assert!(matches!(
            result,
            Err(SurveyError::MalformedInput { .. })
        ));
    }
}
