//! Schema unification across parsed per-dataset tables.

use std::collections::BTreeSet;

use tracing::debug;

use ans_model::{CellValue, Result, SampleTable, SurveyError, schema};

/// Normalize a landmark label: split on commas, trim each part, rejoin
/// with `/`. Collapses multi-valued comma-separated annotations into a
/// single slash-delimited join key. Idempotent.
pub fn normalize_landmark(raw: &str) -> String {
    raw.trim()
        .split(',')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("/")
}

/// Unify parsed tables into one combined table.
///
/// The output column set is the union of all input columns in lexicographic
/// order; columns absent from a source table are filled with `Missing` for
/// its rows. Rows keep their within-table order and tables keep the given
/// order. The landmark column is normalized here, once, before anything
/// downstream groups or joins on it.
pub fn unify_tables(tables: &[SampleTable]) -> Result<SampleTable> {
    if tables.is_empty() {
        return Err(SurveyError::EmptyInput);
    }

    let mut all_columns: BTreeSet<String> = BTreeSet::new();
    for table in tables {
        all_columns.extend(table.columns.iter().cloned());
    }
    let columns: Vec<String> = all_columns.into_iter().collect();

    let mut combined = SampleTable::new(columns.clone());
    for table in tables {
        // Positions of the unified columns within this source table.
        let positions: Vec<Option<usize>> = columns
            .iter()
            .map(|column| table.column_index(column))
            .collect();
        for row in &table.rows {
            let unified: Vec<CellValue> = positions
                .iter()
                .map(|position| match position {
                    Some(idx) => row[*idx].clone(),
                    None => CellValue::Missing,
                })
                .collect();
            combined.push_row(unified);
        }
    }

    if let Some(landmark_idx) = combined.column_index(schema::COL_LANDMARK) {
        for row in &mut combined.rows {
            if let CellValue::Text(label) = &row[landmark_idx] {
                let normalized = normalize_landmark(label);
                row[landmark_idx] = CellValue::Text(normalized);
            }
        }
    }

    debug!(
        tables = tables.len(),
        columns = combined.columns.len(),
        rows = combined.row_count(),
        "unified sample tables"
    );
    Ok(combined)
}
