//! Column names and fixed constants shared across the pipeline.

/// Provenance column added to every parsed sample file (file stem).
pub const COL_DATASET: &str = "dataset";
/// Device/operating-system column of the combined samples table.
pub const COL_DEVICE_TYPE: &str = "Device/OS";
/// Landmark column; the join key against the gate registry.
pub const COL_LANDMARK: &str = "Gate / Landmark";

pub const GATES_COL_GATE: &str = "gate";
pub const GATES_COL_CONCOURSE: &str = "concourse";
pub const GATES_COL_LEVEL: &str = "level";
pub const GATES_COL_LAT: &str = "lat";
pub const GATES_COL_LNG: &str = "lng";

/// Default map center: the airport reference point (lat, lng).
pub const AIRPORT_CENTER: (f64, f64) = (39.179459, -76.668473);
