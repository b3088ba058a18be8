//! Geo join and map visual encoding.

use tracing::info;

use ans_model::GateRegistry;

use crate::aggregate::GroupMean;

/// Radius floor and span for the metric-scaled markers.
const RADIUS_FLOOR: f64 = 2.0;
const RADIUS_SPAN: f64 = 15.0;
/// Fallbacks when the metric range is degenerate (all means equal).
const DEFAULT_RADIUS: f64 = 100.0;
const DEFAULT_COLOR: [u8; 4] = [255, 140, 0, 160];

/// An aggregated landmark mean extended with gate coordinates.
///
/// Unmatched landmarks are retained with absent coordinates; only the map
/// consumer drops them.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct GeoMean {
    pub landmark: String,
    pub mean: Option<f64>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// A renderable map point with its visual encoding.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MapPoint {
    pub landmark: String,
    pub mean: f64,
    pub lat: f64,
    pub lng: f64,
    pub radius: f64,
    /// RGBA fill color.
    pub color: [u8; 4],
}

/// The renderable point set plus legend range and exclusion count.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MapLayer {
    pub points: Vec<MapPoint>,
    /// Landmarks dropped for lacking coordinates or a metric mean.
    pub excluded: usize,
    /// Metric range over the rendered points, for the legend.
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
}

/// Left-join aggregated landmark means to the gate registry.
///
/// Matching is exact on the trimmed landmark vs. trimmed gate name; no case
/// folding. Every input row is preserved.
pub fn join_gates(means: &[GroupMean], gates: &GateRegistry) -> Vec<GeoMean> {
    means
        .iter()
        .map(|group| {
            let gate = gates.get(&group.key);
            GeoMean {
                landmark: group.key.clone(),
                mean: group.mean,
                lat: gate.map(|g| g.lat),
                lng: gate.map(|g| g.lng),
            }
        })
        .collect()
}

/// Build the renderable map layer from geo-joined rows.
///
/// Rows missing coordinates or a mean are excluded and counted (one per
/// landmark, not per sample). Radius and color interpolate linearly over
/// the metric range; a degenerate range falls back to fixed defaults for
/// every point, avoiding the division by zero.
pub fn build_map_layer(joined: &[GeoMean]) -> MapLayer {
    let renderable: Vec<(&GeoMean, f64, f64, f64)> = joined
        .iter()
        .filter_map(|row| match (row.mean, row.lat, row.lng) {
            (Some(mean), Some(lat), Some(lng)) => Some((row, mean, lat, lng)),
            _ => None,
        })
        .collect();
    let excluded = joined.len() - renderable.len();
    if excluded > 0 {
        info!(excluded, "landmarks without coordinates or metric data excluded from map");
    }

    let min_value = renderable.iter().map(|(_, mean, ..)| *mean).reduce(f64::min);
    let max_value = renderable.iter().map(|(_, mean, ..)| *mean).reduce(f64::max);

    let points = renderable
        .into_iter()
        .map(|(row, mean, lat, lng)| {
            let (radius, color) = match (min_value, max_value) {
                (Some(min), Some(max)) if max > min => {
                    let frac = (mean - min) / (max - min);
                    (
                        RADIUS_FLOOR + RADIUS_SPAN * frac,
                        [
                            255,
                            (200.0 - 60.0 * frac) as u8,
                            0,
                            (80.0 + 80.0 * frac) as u8,
                        ],
                    )
                }
                _ => (DEFAULT_RADIUS, DEFAULT_COLOR),
            };
            MapPoint {
                landmark: row.landmark.clone(),
                mean,
                lat,
                lng,
                radius,
                color,
            }
        })
        .collect();

    MapLayer {
        points,
        excluded,
        min_value,
        max_value,
    }
}
