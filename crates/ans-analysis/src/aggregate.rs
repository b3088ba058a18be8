//! Group-mean aggregation.

use std::collections::BTreeMap;

use ans_model::{Result, SampleTable, SurveyError, schema};

/// Mean of a metric for one group key.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct GroupMean {
    pub key: String,
    /// Arithmetic mean over present numeric values; `None` when the group
    /// has no present values. Never coerced to zero.
    pub mean: Option<f64>,
    /// Number of present values that entered the mean.
    pub count: usize,
}

/// Group rows by a key column and average a metric column per group.
///
/// Rows whose key is absent are skipped. Within a group, only present
/// numeric metric values contribute; a group of entirely absent values
/// yields `mean: None`. Output is sorted by key ascending for
/// reproducibility.
///
/// Fails with `UnknownColumn` when either column is not in the schema.
pub fn mean_by_key(table: &SampleTable, key_column: &str, metric: &str) -> Result<Vec<GroupMean>> {
    let key_idx = table
        .column_index(key_column)
        .ok_or_else(|| SurveyError::UnknownColumn(key_column.to_string()))?;
    let metric_idx = table
        .column_index(metric)
        .ok_or_else(|| SurveyError::UnknownColumn(metric.to_string()))?;

    let mut groups: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for row in &table.rows {
        let Some(key) = row[key_idx].as_text() else {
            continue;
        };
        let entry = groups.entry(key.to_string()).or_insert((0.0, 0));
        if let Some(value) = row[metric_idx].as_f64() {
            entry.0 += value;
            entry.1 += 1;
        }
    }

    Ok(groups
        .into_iter()
        .map(|(key, (sum, count))| GroupMean {
            key,
            mean: (count > 0).then(|| sum / count as f64),
            count,
        })
        .collect())
}

/// Mean of a metric per landmark, one row per distinct landmark.
pub fn mean_by_landmark(table: &SampleTable, metric: &str) -> Result<Vec<GroupMean>> {
    mean_by_key(table, schema::COL_LANDMARK, metric)
}
