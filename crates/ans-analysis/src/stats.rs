//! Cohort summary statistics.

use ans_model::{SampleTable, selectable_metrics};

/// Descriptive statistics for one metric column over a cohort.
///
/// Computed over present numeric values only; `std` is the sample standard
/// deviation (n − 1 denominator) and is `None` below two values.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

fn summarize_column(table: &SampleTable, column: &str) -> Option<ColumnSummary> {
    let idx = table.column_index(column)?;
    let values: Vec<f64> = table.rows.iter().filter_map(|row| row[idx].as_f64()).collect();
    let count = values.len();
    let mean = (count > 0).then(|| values.iter().sum::<f64>() / count as f64);
    let std = match (count, mean) {
        (2.., Some(mean)) => {
            let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            Some((ss / (count - 1) as f64).sqrt())
        }
        _ => None,
    };
    let min = values.iter().copied().reduce(f64::min);
    let max = values.iter().copied().reduce(f64::max);
    Some(ColumnSummary {
        column: column.to_string(),
        count,
        mean,
        std,
        min,
        max,
    })
}

/// Summaries for every selectable metric column of the cohort, sorted by
/// column name.
pub fn summarize_metrics(table: &SampleTable) -> Vec<ColumnSummary> {
    selectable_metrics(table)
        .iter()
        .filter_map(|column| summarize_column(table, column))
        .collect()
}
