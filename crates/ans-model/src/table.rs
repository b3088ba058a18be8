use std::collections::BTreeSet;

/// A single cell of a sample table.
///
/// `Missing` is an explicit sentinel: it is never the empty string and never
/// zero, so downstream means can exclude it rather than count it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Missing,
}

impl CellValue {
    /// Build a cell from a raw CSV field. Empty or whitespace-only fields
    /// become `Missing`; everything else is kept trimmed.
    pub fn from_field(raw: &str) -> Self {
        let trimmed = raw.trim().trim_matches('\u{feff}');
        if trimmed.is_empty() {
            CellValue::Missing
        } else {
            CellValue::Text(trimmed.to_string())
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) => Some(value),
            CellValue::Missing => None,
        }
    }

    /// Numeric view of the cell. `Missing` and non-numeric text are `None`.
    pub fn as_f64(&self) -> Option<f64> {
        self.as_text().and_then(|value| value.trim().parse().ok())
    }
}

/// An in-memory tabular dataset: named columns and positional rows.
///
/// Every row is exactly as wide as `columns`; constructors enforce this so
/// lookups by column index never misalign.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SampleTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl SampleTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Push a row, which must match the table width.
    ///
    /// # Panics
    ///
    /// Panics when the row width differs from the column count; a
    /// misaligned row would otherwise surface later as an index panic
    /// in a consumer.
    pub fn push_row(&mut self, row: Vec<CellValue>) {
        assert_eq!(
            row.len(),
            self.columns.len(),
            "row width {} does not match table width {}",
            row.len(),
            self.columns.len()
        );
        self.rows.push(row);
    }

    /// Cell at (row, column name); `Missing` when the column is absent.
    pub fn cell(&self, row: usize, column: &str) -> &CellValue {
        self.column_index(column)
            .and_then(|idx| self.rows.get(row).and_then(|r| r.get(idx)))
            .unwrap_or(&CellValue::Missing)
    }

    /// Sorted distinct non-missing values of a column. Used to enumerate
    /// filter domains (datasets, device types).
    pub fn distinct_values(&self, column: &str) -> Vec<String> {
        let Some(idx) = self.column_index(column) else {
            return Vec::new();
        };
        let mut values = BTreeSet::new();
        for row in &self.rows {
            if let Some(text) = row[idx].as_text() {
                values.insert(text.to_string());
            }
        }
        values.into_iter().collect()
    }
}
