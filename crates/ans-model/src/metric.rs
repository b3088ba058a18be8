//! Typed catalog of the known survey metrics.
//!
//! Metric columns are addressed through this closed enumeration instead of
//! free-form strings, so a bad column name fails at selection time with
//! `UnknownColumn` rather than at chart time.

use crate::table::SampleTable;

/// Substrings that mark a column as a selectable metric.
const METRIC_MARKERS: [&str; 4] = ["Ookla", "RSSI", "RSRP", "RSRQ"];

/// The metric columns produced by the survey collection sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MetricKind {
    Rssi,
    Rsrp,
    Rsrq,
    WifiOoklaDl,
    WifiOoklaUl,
    WifiOoklaRtt,
    CellularOoklaDl,
    CellularOoklaUl,
    CellularOoklaRtt,
}

impl MetricKind {
    pub const ALL: [MetricKind; 9] = [
        MetricKind::Rssi,
        MetricKind::Rsrp,
        MetricKind::Rsrq,
        MetricKind::WifiOoklaDl,
        MetricKind::WifiOoklaUl,
        MetricKind::WifiOoklaRtt,
        MetricKind::CellularOoklaDl,
        MetricKind::CellularOoklaUl,
        MetricKind::CellularOoklaRtt,
    ];

    /// Column key in the combined samples table.
    pub fn column(self) -> &'static str {
        match self {
            MetricKind::Rssi => "RSSI",
            MetricKind::Rsrp => "RSRP",
            MetricKind::Rsrq => "RSRQ",
            MetricKind::WifiOoklaDl => "Wi-Fi Ookla DL",
            MetricKind::WifiOoklaUl => "Wi-Fi Ookla UL",
            MetricKind::WifiOoklaRtt => "Wi-Fi Ookla RTT",
            MetricKind::CellularOoklaDl => "Cellular Ookla DL",
            MetricKind::CellularOoklaUl => "Cellular Ookla UL",
            MetricKind::CellularOoklaRtt => "Cellular Ookla RTT",
        }
    }

    /// Analyst-facing description shown alongside the metric selector.
    pub fn description(self) -> &'static str {
        match self {
            MetricKind::Rssi => {
                "RSSI = Received Signal Strength Indicator. Strength/quality of \
                 the wireless signal, usually in dBm. Higher values are better."
            }
            MetricKind::Rsrp => {
                "RSRP = Reference Signal Received Power. Strength of the cellular \
                 reference signal, in dBm. Higher values are better."
            }
            MetricKind::Rsrq => {
                "RSRQ = Reference Signal Received Quality. Quality of a cellular \
                 signal, not just its strength. Higher values are better."
            }
            MetricKind::WifiOoklaDl | MetricKind::CellularOoklaDl => {
                "Ookla (Speedtest) DL = Download speed. Download throughput, \
                 typically in Mbps. Higher DL values are better."
            }
            MetricKind::WifiOoklaUl | MetricKind::CellularOoklaUl => {
                "Ookla (Speedtest) UL = Upload speed. Upload throughput, \
                 typically in Mbps. Higher UL values are better."
            }
            MetricKind::WifiOoklaRtt | MetricKind::CellularOoklaRtt => {
                "Ookla (Speedtest) RTT = Round-Trip Time. Latency from device to \
                 server and back, in milliseconds. Lower RTT is better \
                 (excellent ~5-20 ms, good 20-50 ms, poor 100+ ms)."
            }
        }
    }

    /// Description for an arbitrary column name, when one is known.
    pub fn describe_column(column: &str) -> Option<&'static str> {
        let name = column.to_lowercase();
        if name.contains("ookla dl") {
            Some(MetricKind::WifiOoklaDl.description())
        } else if name.contains("ookla ul") {
            Some(MetricKind::WifiOoklaUl.description())
        } else if name.contains("ookla rtt") {
            Some(MetricKind::WifiOoklaRtt.description())
        } else if name.contains("rssi") {
            Some(MetricKind::Rssi.description())
        } else if name.contains("rsrp") {
            Some(MetricKind::Rsrp.description())
        } else if name.contains("rsrq") {
            Some(MetricKind::Rsrq.description())
        } else {
            None
        }
    }
}

/// True when a column name marks a selectable metric.
pub fn is_metric_column(name: &str) -> bool {
    METRIC_MARKERS.iter().any(|marker| name.contains(marker))
}

/// Sorted metric columns present in a table's schema.
pub fn selectable_metrics(table: &SampleTable) -> Vec<String> {
    let mut metrics: Vec<String> = table
        .columns
        .iter()
        .filter(|name| is_metric_column(name))
        .cloned()
        .collect();
    metrics.sort();
    metrics
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_scan_matches_known_catalog() {
        for kind in MetricKind::ALL {
            assert!(is_metric_column(kind.column()), "{}", kind.column());
        }
        assert!(!is_metric_column("Gate / Landmark"));
        assert!(!is_metric_column("dataset"));
    }

    #[test]
    fn selectable_metrics_are_sorted() {
        let table = SampleTable::new(vec![
            "Wi-Fi Ookla DL".to_string(),
            "RSSI".to_string(),
            "dataset".to_string(),
            "Cellular Ookla RTT".to_string(),
        ]);
        assert_eq!(
            selectable_metrics(&table),
            vec!["Cellular Ookla RTT", "RSSI", "Wi-Fi Ookla DL"]
        );
    }

    #[test]
    fn describe_column_falls_back_by_substring() {
        assert!(
            MetricKind::describe_column("Cellular Ookla RTT")
                .unwrap()
                .contains("Round-Trip")
        );
        assert!(MetricKind::describe_column("Gate / Landmark").is_none());
    }
}
