pub mod aggregate;
pub mod compare;
pub mod filter;
pub mod geo;
pub mod stats;

pub use aggregate::{GroupMean, mean_by_key, mean_by_landmark};
pub use compare::{ComparisonMetric, Network, config_means, network_means, network_means_by_landmark};
pub use filter::CohortFilter;
pub use geo::{GeoMean, MapLayer, MapPoint, build_map_layer, join_gates};
pub use stats::{ColumnSummary, summarize_metrics};
