pub mod error;
pub mod gates;
pub mod metric;
pub mod schema;
pub mod table;

pub use error::{Result, SurveyError};
pub use gates::{GateRecord, GateRegistry};
pub use metric::{MetricKind, is_metric_column, selectable_metrics};
pub use schema::{
    AIRPORT_CENTER, COL_DATASET, COL_DEVICE_TYPE, COL_LANDMARK, GATES_COL_CONCOURSE,
    GATES_COL_GATE, GATES_COL_LAT, GATES_COL_LEVEL, GATES_COL_LNG,
};
pub use table::{CellValue, SampleTable};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_serializes() {
        let mut table = SampleTable::new(vec!["dataset".to_string()]);
        table.push_row(vec![CellValue::Text("B Concourse-Android".to_string())]);
        table.push_row(vec![CellValue::Missing]);
        let json = serde_json::to_string(&table).expect("serialize table");
        let round: SampleTable = serde_json::from_str(&json).expect("deserialize table");
        assert_eq!(round, table);
    }
}
