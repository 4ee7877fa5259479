//! CSV ingestion of gauge metadata and observation tables.
//!
//! Accepts the provider's raw header vocabulary (`ID`, `EASTING`,
//! `NORTHING`, `STATION_NAME`, `DATETIME`, `PRECIPITATION`) as well as the
//! canonical column names used throughout this workspace (`time`,
//! `rain_mm`); extra descriptive columns are ignored. The resulting
//! [`GaugeStore`] is schema-validated before the core ever sees it.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::info;

use pluvio_station::{GaugeMetadata, GaugeObservation, GaugeStore};

use crate::error::IoError;
use crate::validate;

/// Accepted timestamp layouts, tried in order. A bare date parses to
/// midnight.
const TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

#[derive(Debug, Deserialize)]
struct MetadataRow {
    #[serde(rename = "ID")]
    id: u32,
    #[serde(rename = "EASTING")]
    easting: f64,
    #[serde(rename = "NORTHING")]
    northing: f64,
    #[serde(rename = "STATION_NAME", default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ObservationRow {
    #[serde(rename = "ID")]
    id: u32,
    #[serde(rename = "time", alias = "DATETIME")]
    time: String,
    #[serde(rename = "rain_mm", alias = "PRECIPITATION")]
    rain_mm: f64,
}

/// Parses one timestamp cell.
fn parse_time(raw: &str) -> Result<NaiveDateTime, IoError> {
    for fmt in TIME_FORMATS {
        if let Ok(t) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(t);
        }
    }
    if let Ok(d) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(d.and_hms_opt(0, 0, 0).expect("midnight is always valid"));
    }
    Err(IoError::InvalidTime {
        reason: format!("unparseable timestamp '{raw}'"),
    })
}

/// Reads gauge metadata rows from any CSV source.
pub fn read_metadata_from(reader: impl Read) -> Result<Vec<GaugeMetadata>, IoError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for row in csv_reader.deserialize::<MetadataRow>() {
        let row = row?;
        records.push(GaugeMetadata {
            id: row.id,
            easting: row.easting,
            northing: row.northing,
            name: row.name,
        });
    }
    validate::validate_metadata(&records).finish()?;
    Ok(records)
}

/// Reads gauge observation rows from any CSV source.
pub fn read_observations_from(reader: impl Read) -> Result<Vec<GaugeObservation>, IoError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for row in csv_reader.deserialize::<ObservationRow>() {
        let row = row?;
        rows.push(GaugeObservation {
            id: row.id,
            time: parse_time(&row.time)?,
            rain_mm: row.rain_mm,
        });
    }
    validate::validate_observations(&rows).finish()?;
    Ok(rows)
}

/// Reads the metadata and observation CSV files and builds a validated
/// [`GaugeStore`].
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] for a missing file, [`IoError::Csv`]
/// or [`IoError::InvalidTime`] for malformed content,
/// [`IoError::Validation`] for contract violations, and
/// [`IoError::Station`] if the store rejects the tables (duplicate IDs).
pub fn read_gauge_store(
    metadata_path: &Path,
    observations_path: &Path,
) -> Result<GaugeStore, IoError> {
    let metadata = read_metadata_from(open(metadata_path)?)?;
    let observations = read_observations_from(open(observations_path)?)?;

    let store = GaugeStore::new(metadata, observations)?;
    info!(
        n_gauges = store.n_gauges(),
        n_observations = store.n_observations(),
        "gauge tables loaded"
    );
    Ok(store)
}

fn open(path: &Path) -> Result<std::fs::File, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    std::fs::File::open(path).map_err(|e| IoError::Csv {
        reason: e.to_string(),
    })
}
