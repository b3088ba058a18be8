//! Gate registry loader.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::warn;

use ans_model::{GateRecord, GateRegistry, Result, SurveyError, schema};

fn malformed(path: &Path, reason: impl Into<String>) -> SurveyError {
    SurveyError::MalformedInput {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

/// Load `gates.csv` into a registry keyed by trimmed gate name.
///
/// Requires `gate`, `lat` and `lng` columns; `concourse` and `level` are
/// optional. Unparseable coordinates are fatal: a registry with silently
/// dropped gates would skew the geo-join exclusion counts.
pub fn load_gate_registry(path: &Path) -> Result<GateRegistry> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|header| header.trim().trim_matches('\u{feff}').to_string())
        .collect();

    let column = |name: &str| headers.iter().position(|header| header == name);
    let gate_idx = column(schema::GATES_COL_GATE)
        .ok_or_else(|| malformed(path, "missing required column 'gate'"))?;
    let lat_idx = column(schema::GATES_COL_LAT)
        .ok_or_else(|| malformed(path, "missing required column 'lat'"))?;
    let lng_idx = column(schema::GATES_COL_LNG)
        .ok_or_else(|| malformed(path, "missing required column 'lng'"))?;
    let concourse_idx = column(schema::GATES_COL_CONCOURSE);
    let level_idx = column(schema::GATES_COL_LEVEL);

    let mut registry = GateRegistry::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let field = |idx: usize| record.get(idx).unwrap_or("").trim().to_string();

        let gate = field(gate_idx);
        if gate.is_empty() {
            warn!(path = %path.display(), row = row + 1, "skipping gate row with empty name");
            continue;
        }
        let parse_coord = |idx: usize, name: &str| -> Result<f64> {
            record
                .get(idx)
                .unwrap_or("")
                .trim()
                .parse()
                .map_err(|_| malformed(path, format!("row {}: invalid {name} value", row + 1)))
        };
        let lat = parse_coord(lat_idx, "lat")?;
        let lng = parse_coord(lng_idx, "lng")?;

        let optional = |idx: Option<usize>| {
            idx.map(field)
                .filter(|value| !value.is_empty())
        };
        let inserted = registry.insert(GateRecord {
            gate: gate.clone(),
            concourse: optional(concourse_idx),
            level: optional(level_idx),
            lat,
            lng,
        });
        if !inserted {
            warn!(path = %path.display(), gate = %gate, "duplicate gate name, keeping first");
        }
    }
    Ok(registry)
}
