//! Cohort comparison helpers.
//!
//! The survey's standing comparisons reshape paired Wi-Fi/cellular columns
//! into a single network dimension (Wi-Fi vs. cellular over the DAS), or
//! relabel datasets into experiment configurations (PassPoint on/off).

use std::collections::BTreeMap;

use ans_model::{MetricKind, Result, SampleTable, schema};

use crate::aggregate::{GroupMean, mean_by_key};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub enum Network {
    WiFi,
    Cellular,
}

impl Network {
    pub fn label(self) -> &'static str {
        match self {
            Network::WiFi => "Wi-Fi",
            Network::Cellular => "Cellular",
        }
    }
}

/// A metric measured on both networks, as a (Wi-Fi, cellular) column pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonMetric {
    Download,
    Upload,
    Latency,
}

impl ComparisonMetric {
    pub fn title(self) -> &'static str {
        match self {
            ComparisonMetric::Download => "Download Speed (Mbps)",
            ComparisonMetric::Upload => "Upload Speed (Mbps)",
            ComparisonMetric::Latency => "Latency (ms)",
        }
    }

    pub fn column(self, network: Network) -> &'static str {
        match (network, self) {
            (Network::WiFi, ComparisonMetric::Download) => MetricKind::WifiOoklaDl.column(),
            (Network::WiFi, ComparisonMetric::Upload) => MetricKind::WifiOoklaUl.column(),
            (Network::WiFi, ComparisonMetric::Latency) => MetricKind::WifiOoklaRtt.column(),
            (Network::Cellular, ComparisonMetric::Download) => MetricKind::CellularOoklaDl.column(),
            (Network::Cellular, ComparisonMetric::Upload) => MetricKind::CellularOoklaUl.column(),
            (Network::Cellular, ComparisonMetric::Latency) => MetricKind::CellularOoklaRtt.column(),
        }
    }
}

/// Overall mean per network for a paired metric.
///
/// Equivalent to melting the two columns into a long `Network` dimension
/// and averaging per network. Absent values are excluded, so a cohort with
/// no cellular samples reports `None` for cellular rather than zero.
pub fn network_means(
    table: &SampleTable,
    metric: ComparisonMetric,
) -> Result<BTreeMap<Network, Option<f64>>> {
    let mut means = BTreeMap::new();
    for network in [Network::WiFi, Network::Cellular] {
        let column = metric.column(network);
        let idx = table
            .column_index(column)
            .ok_or_else(|| ans_model::SurveyError::UnknownColumn(column.to_string()))?;
        let values: Vec<f64> = table.rows.iter().filter_map(|row| row[idx].as_f64()).collect();
        let mean = (!values.is_empty()).then(|| values.iter().sum::<f64>() / values.len() as f64);
        means.insert(network, mean);
    }
    Ok(means)
}

/// Per-landmark means for a paired metric, one list per network.
pub fn network_means_by_landmark(
    table: &SampleTable,
    metric: ComparisonMetric,
) -> Result<BTreeMap<Network, Vec<GroupMean>>> {
    let mut out = BTreeMap::new();
    for network in [Network::WiFi, Network::Cellular] {
        let means = mean_by_key(table, schema::COL_LANDMARK, metric.column(network))?;
        out.insert(network, means);
    }
    Ok(out)
}

/// Mean of a metric per relabelled dataset.
///
/// `labels` maps dataset values to configuration names (e.g. a PassPoint
/// on/off pair). Rows whose dataset has no label are left out of the
/// comparison entirely. The label map is supplied by the caller: this is
/// a library facility for analysis consumers, not a CLI surface.
pub fn config_means(
    table: &SampleTable,
    metric: &str,
    labels: &BTreeMap<String, String>,
) -> Result<Vec<GroupMean>> {
    let dataset_idx = table
        .column_index(schema::COL_DATASET)
        .ok_or_else(|| ans_model::SurveyError::UnknownColumn(schema::COL_DATASET.to_string()))?;

    // Relabel into a scratch key column, then reuse the group-mean path.
    let mut relabelled = SampleTable::new({
        let mut columns = table.columns.clone();
        columns.push("Config".to_string());
        columns
    });
    for row in &table.rows {
        let Some(config) = row[dataset_idx].as_text().and_then(|d| labels.get(d)) else {
            continue;
        };
        let mut cells = row.clone();
        cells.push(ans_model::CellValue::Text(config.clone()));
        relabelled.push_row(cells);
    }
    mean_by_key(&relabelled, "Config", metric)
}
