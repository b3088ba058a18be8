//! Gate registry types.

use std::collections::BTreeMap;

/// A named physical location (gate or concourse area) with coordinates.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GateRecord {
    pub gate: String,
    pub concourse: Option<String>,
    pub level: Option<String>,
    pub lat: f64,
    pub lng: f64,
}

/// Gates keyed by trimmed gate name. Loaded once at startup; immutable.
#[derive(Debug, Clone, Default)]
pub struct GateRegistry {
    gates: BTreeMap<String, GateRecord>,
}

impl GateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a gate under its trimmed name. Returns false when the name is
    /// already registered (first occurrence wins).
    pub fn insert(&mut self, record: GateRecord) -> bool {
        let key = record.gate.trim().to_string();
        if self.gates.contains_key(&key) {
            return false;
        }
        self.gates.insert(key, record);
        true
    }

    /// Exact lookup by trimmed name. Case-sensitive, matching source data.
    pub fn get(&self, name: &str) -> Option<&GateRecord> {
        self.gates.get(name.trim())
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GateRecord> {
        self.gates.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate(name: &str, lat: f64, lng: f64) -> GateRecord {
        GateRecord {
            gate: name.to_string(),
            concourse: None,
            level: None,
            lat,
            lng,
        }
    }

    #[test]
    fn lookup_trims_but_keeps_case() {
        let mut registry = GateRegistry::new();
        assert!(registry.insert(gate(" A1 ", 39.18, -76.67)));
        assert!(registry.get("A1").is_some());
        assert!(registry.get("  A1").is_some());
        assert!(registry.get("a1").is_none());
    }

    #[test]
    fn first_occurrence_wins() {
        let mut registry = GateRegistry::new();
        assert!(registry.insert(gate("A1", 1.0, 2.0)));
        assert!(!registry.insert(gate("A1", 3.0, 4.0)));
        assert_eq!(registry.get("A1").unwrap().lat, 1.0);
        assert_eq!(registry.len(), 1);
    }
}
