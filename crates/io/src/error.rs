//! Error types for pluvio-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the pluvio-io crate.
///
/// Covers filesystem issues, CSV and Parquet format errors, timestamp
/// parsing, accumulated validation failures at the ingestion boundary, and
/// errors surfaced by the downstream store and grid constructors.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the CSV library.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Wraps an error originating from the Parquet or Arrow libraries.
    #[error("parquet error: {reason}")]
    Parquet {
        /// Description of the underlying Parquet failure.
        reason: String,
    },

    /// Returned when a timestamp cannot be parsed or is out of range.
    #[error("invalid time: {reason}")]
    InvalidTime {
        /// Description of the time parsing issue.
        reason: String,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Wraps an error from the pluvio-station crate.
    #[error("station error: {reason}")]
    Station {
        /// Description of the underlying station failure.
        reason: String,
    },

    /// Wraps an error from the pluvio-grid crate.
    #[error("grid error: {reason}")]
    Grid {
        /// Description of the underlying grid failure.
        reason: String,
    },
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}

impl From<parquet::errors::ParquetError> for IoError {
    fn from(e: parquet::errors::ParquetError) -> Self {
        IoError::Parquet {
            reason: e.to_string(),
        }
    }
}

impl From<arrow::error::ArrowError> for IoError {
    fn from(e: arrow::error::ArrowError) -> Self {
        IoError::Parquet {
            reason: e.to_string(),
        }
    }
}

impl From<pluvio_station::StationError> for IoError {
    fn from(e: pluvio_station::StationError) -> Self {
        IoError::Station {
            reason: e.to_string(),
        }
    }
}

impl From<pluvio_grid::GridError> for IoError {
    fn from(e: pluvio_grid::GridError) -> Self {
        IoError::Grid {
            reason: e.to_string(),
        }
    }
}
