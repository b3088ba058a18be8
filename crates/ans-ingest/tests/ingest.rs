//! Integration tests for raw parsing, unification and gate loading.

use std::path::PathBuf;

use tempfile::TempDir;

use ans_ingest::{
    list_csv_files, load_gate_registry, parse_raw_sample_file, read_combined, unify_tables,
    write_combined,
};
use ans_model::{CellValue, SurveyError};

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

const RAW_ANDROID: &str = "\
Info,Info,Wi-Fi,Wi-Fi
Gate / Landmark,Device/OS,Ookla DL,Ookla UL
A1,android,120.5,40.2
\"A2, Food Court\",android,95.0,33.1
";

const RAW_IOS: &str = "\
Info,Info,Cellular,Wi-Fi
Gate / Landmark,Device/OS,,RSSI
A1,ios,80.0,-61
B4,ios,,-70
";

#[test]
fn raw_parse_merges_headers_and_tags_dataset() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "D Concourse-Android.csv", RAW_ANDROID);

    let table = parse_raw_sample_file(&path).unwrap();
    assert_eq!(
        table.columns,
        vec![
            "Gate / Landmark",
            "Device/OS",
            "Ookla DL",
            "Ookla UL",
            "dataset"
        ]
    );
    assert_eq!(table.row_count(), 2);
    assert_eq!(
        table.cell(0, "dataset"),
        &CellValue::Text("D Concourse-Android".to_string())
    );
    assert_eq!(
        table.cell(1, "dataset"),
        &CellValue::Text("D Concourse-Android".to_string())
    );
    // Quoted comma-separated landmark survives as one field.
    assert_eq!(
        table.cell(1, "Gate / Landmark"),
        &CellValue::Text("A2, Food Court".to_string())
    );
}

#[test]
fn raw_parse_inherits_main_header_when_sub_is_blank() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "ios.csv", RAW_IOS);

    let table = parse_raw_sample_file(&path).unwrap();
    // Column 3 has an empty sub-header slot, so the main label is used.
    assert!(table.has_column("Cellular"));
    assert_eq!(table.cell(0, "Cellular"), &CellValue::Text("80.0".to_string()));
    // Empty metric field is the absent sentinel, not an empty string.
    assert!(table.cell(1, "Cellular").is_missing());
}

#[test]
fn raw_parse_accepts_blank_main_header_row() {
    let dir = TempDir::new().unwrap();
    // Every effective name comes from the sub-header row.
    let path = write_file(
        &dir,
        "blankmain.csv",
        ",,\nGate / Landmark,Device/OS,RSSI\nA1,ios,-60\n",
    );
    let table = parse_raw_sample_file(&path).unwrap();
    assert_eq!(
        table.columns,
        vec!["Gate / Landmark", "Device/OS", "RSSI", "dataset"]
    );
    assert_eq!(table.row_count(), 1);
}

#[test]
fn filename_provenance_wins_over_sheet_local_dataset_column() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "legacy-sheet.csv",
        "Info,Info\nGate / Landmark,dataset\nA1,legacy\n",
    );

    let table = parse_raw_sample_file(&path).unwrap();
    // No second dataset column; the sheet's own values are replaced.
    assert_eq!(table.columns, vec!["Gate / Landmark", "dataset"]);
    assert_eq!(
        table.cell(0, "dataset"),
        &CellValue::Text("legacy-sheet".to_string())
    );

    // The stem survives unification too.
    let combined = unify_tables(&[table]).unwrap();
    assert_eq!(combined.distinct_values("dataset"), vec!["legacy-sheet"]);
}

#[test]
fn raw_parse_fails_without_two_header_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "short.csv", "only-one-row\n");
    assert!(matches!(
        parse_raw_sample_file(&path),
        Err(SurveyError::MalformedInput { .. })
    ));
}

#[test]
fn raw_parse_fails_on_row_width_mismatch() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "ragged.csv",
        "Info,Wi-Fi\nGate / Landmark,Ookla DL\nA1,10,extra\n",
    );
    let err = parse_raw_sample_file(&path).unwrap_err();
    match err {
        SurveyError::MalformedInput { reason, .. } => {
            assert!(reason.contains("expected 2"), "{reason}");
        }
        other => panic!("expected MalformedInput, got {other}"),
    }
}

#[test]
fn unified_row_count_is_sum_of_inputs() {
    let dir = TempDir::new().unwrap();
    let android = parse_raw_sample_file(&write_file(&dir, "android.csv", RAW_ANDROID)).unwrap();
    let ios = parse_raw_sample_file(&write_file(&dir, "ios.csv", RAW_IOS)).unwrap();

    let expected = android.row_count() + ios.row_count();
    let combined = unify_tables(&[android, ios]).unwrap();
    assert_eq!(combined.row_count(), expected);

    // Union schema: every input column is present.
    for column in ["Ookla DL", "Ookla UL", "Cellular", "RSSI", "dataset"] {
        assert!(combined.has_column(column), "missing {column}");
    }
    // Rows from the android file lack RSSI, so they hold the sentinel.
    assert!(combined.cell(0, "RSSI").is_missing());
    // Landmark normalization collapsed the comma annotation.
    assert_eq!(
        combined.cell(1, "Gate / Landmark"),
        &CellValue::Text("A2/Food Court".to_string())
    );
}

#[test]
fn combined_csv_round_trips_the_sentinel() {
    let dir = TempDir::new().unwrap();
    let android = parse_raw_sample_file(&write_file(&dir, "android.csv", RAW_ANDROID)).unwrap();
    let ios = parse_raw_sample_file(&write_file(&dir, "ios.csv", RAW_IOS)).unwrap();
    let combined = unify_tables(&[android, ios]).unwrap();

    let out = dir.path().join("samples_combined.csv");
    write_combined(&combined, &out).unwrap();
    let round = read_combined(&out).unwrap();

    assert_eq!(round, combined);
}

#[test]
fn gate_registry_loads_and_validates() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "gates.csv",
        "gate,concourse,level,lat,lng\nA1,A,2,39.18,-76.67\nB4,B,,39.1801,-76.6702\n",
    );
    let registry = load_gate_registry(&path).unwrap();
    assert_eq!(registry.len(), 2);
    let a1 = registry.get("A1").unwrap();
    assert_eq!(a1.lat, 39.18);
    assert_eq!(a1.concourse.as_deref(), Some("A"));
    let b4 = registry.get("B4").unwrap();
    assert!(b4.level.is_none());
}

#[test]
fn gate_registry_requires_coordinates() {
    let dir = TempDir::new().unwrap();
    let missing_col = write_file(&dir, "nocol.csv", "gate,lat\nA1,39.18\n");
    assert!(matches!(
        load_gate_registry(&missing_col),
        Err(SurveyError::MalformedInput { .. })
    ));

    let bad_value = write_file(&dir, "badval.csv", "gate,lat,lng\nA1,north,-76.67\n");
    assert!(matches!(
        load_gate_registry(&bad_value),
        Err(SurveyError::MalformedInput { .. })
    ));
}

#[test]
fn discovery_feeds_the_batch_step_in_order() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "b-ios.csv", RAW_IOS);
    write_file(&dir, "a-android.csv", RAW_ANDROID);

    let files = list_csv_files(dir.path()).unwrap();
    let tables: Vec<_> = files
        .iter()
        .map(|path| parse_raw_sample_file(path).unwrap())
        .collect();
    let combined = unify_tables(&tables).unwrap();

    // First rows come from the lexicographically first file.
    assert_eq!(
        combined.cell(0, "dataset"),
        &CellValue::Text("a-android".to_string())
    );
}

mod properties {
    use ans_ingest::normalize_landmark;
    use proptest::prelude::*;

    proptest! {
        /// Normalizing an already-normalized label is a no-op.
        #[test]
        fn normalization_idempotent(raw in "[ A-Za-z0-9,/-]{0,40}") {
            let once = normalize_landmark(&raw);
            prop_assert_eq!(normalize_landmark(&once), once);
        }
    }
}
