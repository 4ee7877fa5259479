use std::path::PathBuf;

use serde::Deserialize;

/// Top-level Pluvio configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct PluvioConfig {
    /// I/O settings.
    #[serde(default)]
    pub io: IoConfig,

    /// Gridded-dataset settings.
    #[serde(default)]
    pub grid: GridToml,

    /// Spatial matching settings.
    #[serde(default)]
    pub matching: MatchingToml,

    /// Combination settings.
    #[serde(default)]
    pub combine: CombineToml,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    /// Long-form Parquet file holding the gridded dataset.
    pub grid: Option<PathBuf>,
    /// Gauge metadata CSV (ID, EASTING, NORTHING, STATION_NAME).
    pub gauge_metadata: Option<PathBuf>,
    /// Gauge observation CSV (ID, time, rain_mm).
    pub gauge_data: Option<PathBuf>,
    /// Default output path for combined CSV tables.
    pub output: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridToml {
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default = "default_variable")]
    pub variable: String,
}

impl Default for GridToml {
    fn default() -> Self {
        Self {
            source: default_source(),
            variable: default_variable(),
        }
    }
}

fn default_source() -> String {
    "ceh".to_string()
}
fn default_variable() -> String {
    "rainfall_amount".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatchingToml {
    /// Bounding-box half-width for the nearby search and the per-axis
    /// tolerance for nearest-cell matching, in metres.
    #[serde(default = "default_nearby_threshold_m")]
    pub nearby_threshold_m: f64,
}

impl Default for MatchingToml {
    fn default() -> Self {
        Self {
            nearby_threshold_m: default_nearby_threshold_m(),
        }
    }
}

fn default_nearby_threshold_m() -> f64 {
    5000.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CombineToml {
    /// Join kind: inner, left, right or outer.
    #[serde(default = "default_join")]
    pub join: String,
    /// Neighborhood window radius in metres. When unset, `combine` emits
    /// only the closest-cell column.
    #[serde(default)]
    pub nearby_radius_m: Option<f64>,
}

impl Default for CombineToml {
    fn default() -> Self {
        Self {
            join: default_join(),
            nearby_radius_m: None,
        }
    }
}

fn default_join() -> String {
    "left".to_string()
}
