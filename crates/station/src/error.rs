//! Error types for the pluvio-station crate.

/// Error type for all fallible operations in the pluvio-station crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StationError {
    /// Returned when the metadata table has two records for one gauge ID.
    #[error("duplicate metadata record for gauge id {id}")]
    DuplicateMetadata {
        /// The duplicated gauge ID.
        id: u32,
    },

    /// Returned when a gauge ID has no metadata record.
    #[error("gauge id {id} is not in the gauge metadata")]
    MetadataNotFound {
        /// The missing gauge ID.
        id: u32,
    },

    /// Returned when a gauge ID has no observation rows.
    #[error("gauge id {id} has no observations")]
    ObservationsNotFound {
        /// The gauge ID without observations.
        id: u32,
    },

    /// Returned when the nearest grid cell is farther than the tolerance in
    /// either spatial axis. The station is likely outside the grid's
    /// coverage, or the grid is too coarse for the requested tolerance.
    #[error(
        "closest grid cell is more than {threshold_m} m away in x ({dx_m} m) or y ({dy_m} m)"
    )]
    OutOfTolerance {
        /// Absolute easting offset between station and matched cell.
        dx_m: f64,
        /// Absolute northing offset between station and matched cell.
        dy_m: f64,
        /// The configured tolerance.
        threshold_m: f64,
    },

    /// Returned when a distance threshold is not finite and positive.
    #[error("distance threshold must be finite and positive, got {value}")]
    InvalidThreshold {
        /// The invalid threshold value.
        value: f64,
    },

    /// Wraps an error from the pluvio-grid crate.
    #[error("grid error: {reason}")]
    Grid {
        /// Description of the underlying grid failure.
        reason: String,
    },

    /// Wraps an error from the pluvio-series crate.
    #[error("series error: {reason}")]
    Series {
        /// Description of the underlying series failure.
        reason: String,
    },
}

impl From<pluvio_grid::GridError> for StationError {
    fn from(e: pluvio_grid::GridError) -> Self {
        StationError::Grid {
            reason: e.to_string(),
        }
    }
}

impl From<pluvio_series::SeriesError> for StationError {
    fn from(e: pluvio_series::SeriesError) -> Self {
        StationError::Series {
            reason: e.to_string(),
        }
    }
}
