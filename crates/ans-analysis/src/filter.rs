//! Cohort filtering.

use std::collections::BTreeSet;

use ans_model::{CellValue, SampleTable, schema};

/// Inclusion filter over dataset and device-type membership.
///
/// Both sets are literal inclusion lists: an empty set yields an empty
/// cohort, it does not mean "no filter". Rows with a missing dataset or
/// device type never match.
#[derive(Debug, Clone, Default)]
pub struct CohortFilter {
    pub datasets: BTreeSet<String>,
    pub device_types: BTreeSet<String>,
}

impl CohortFilter {
    /// A filter that admits every dataset and device type of the table.
    pub fn all(table: &SampleTable) -> Self {
        Self {
            datasets: table
                .distinct_values(schema::COL_DATASET)
                .into_iter()
                .collect(),
            device_types: table
                .distinct_values(schema::COL_DEVICE_TYPE)
                .into_iter()
                .collect(),
        }
    }

    /// Subset the table to rows matching both inclusion sets.
    pub fn apply(&self, table: &SampleTable) -> SampleTable {
        let dataset_idx = table.column_index(schema::COL_DATASET);
        let device_idx = table.column_index(schema::COL_DEVICE_TYPE);

        let member = |idx: Option<usize>, allowed: &BTreeSet<String>, row: &[CellValue]| {
            match idx {
                Some(idx) => row[idx]
                    .as_text()
                    .is_some_and(|value| allowed.contains(value)),
                // A table without the column has no values to match.
                None => false,
            }
        };

        let mut out = SampleTable::new(table.columns.clone());
        for row in &table.rows {
            if member(dataset_idx, &self.datasets, row)
                && member(device_idx, &self.device_types, row)
            {
                out.push_row(row.clone());
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ans_model::CellValue;

    fn table() -> SampleTable {
        let mut table = SampleTable::new(vec![
            "dataset".to_string(),
            "Device/OS".to_string(),
            "RSSI".to_string(),
        ]);
        for (dataset, device, rssi) in [
            ("B Concourse-Android", "android", "-60"),
            ("B Concourse-iOS-17", "ios", "-65"),
            ("D Concourse-Android", "android", "-70"),
            ("D Concourse-Android", "", "-72"),
        ] {
            table.push_row(vec![
                CellValue::from_field(dataset),
                CellValue::from_field(device),
                CellValue::from_field(rssi),
            ]);
        }
        table
    }

    fn filter(datasets: &[&str], devices: &[&str]) -> CohortFilter {
        CohortFilter {
            datasets: datasets.iter().map(|s| (*s).to_string()).collect(),
            device_types: devices.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    #[test]
    fn both_dimensions_must_match() {
        let cohort = filter(&["D Concourse-Android"], &["android"]).apply(&table());
        assert_eq!(cohort.row_count(), 1);
        assert_eq!(
            cohort.cell(0, "dataset"),
            &CellValue::Text("D Concourse-Android".to_string())
        );
    }

    #[test]
    fn empty_selection_yields_empty_result() {
        let cohort = filter(&[], &["android", "ios"]).apply(&table());
        assert_eq!(cohort.row_count(), 0);
    }

    #[test]
    fn missing_values_never_match() {
        // The fourth row has a missing device type.
        let cohort = filter(&["D Concourse-Android"], &["android", "ios"]).apply(&table());
        assert_eq!(cohort.row_count(), 1);
    }

    #[test]
    fn filtering_is_a_strict_narrowing() {
        let table = table();
        let wide = filter(
            &["B Concourse-Android", "D Concourse-Android"],
            &["android", "ios"],
        );
        let narrow = filter(&["D Concourse-Android"], &["android", "ios"]);

        // filter(filter(T, S1), S2) == filter(T, S1 ∩ S2) on the dataset axis.
        let chained = narrow.apply(&wide.apply(&table));
        let direct = narrow.apply(&table);
        assert_eq!(chained, direct);
    }

    #[test]
    fn all_admits_every_present_value() {
        let table = table();
        let cohort = CohortFilter::all(&table).apply(&table);
        // The missing-device row is still excluded: absent is not a value.
        assert_eq!(cohort.row_count(), 3);
    }
}
