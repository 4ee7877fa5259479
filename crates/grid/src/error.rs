//! Error types for the pluvio-grid crate.

/// Error type for all fallible operations in the pluvio-grid crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// Returned when a spatial axis has no coordinates.
    #[error("axis '{name}' has no coordinates")]
    EmptyAxis {
        /// Name of the empty axis.
        name: String,
    },

    /// Returned when axis coordinates are not strictly ascending.
    #[error("axis '{name}' is not strictly ascending at index {index}")]
    UnsortedAxis {
        /// Name of the offending axis.
        name: String,
        /// Index of the first coordinate that breaks the ordering.
        index: usize,
    },

    /// Returned when an axis coordinate is NaN or infinite.
    #[error("axis '{name}' has a non-finite coordinate at index {index}")]
    NonFiniteCoordinate {
        /// Name of the offending axis.
        name: String,
        /// Index of the non-finite coordinate.
        index: usize,
    },

    /// Returned when the value buffer does not match `time * x * y`.
    #[error("value buffer length {got} does not match time*x*y = {expected}")]
    ShapeMismatch {
        /// Expected number of values.
        expected: usize,
        /// Actual number of values.
        got: usize,
    },

    /// Returned when a requested spatial window contains no cells.
    #[error(
        "window x in [{x_min}, {x_max}], y in [{y_min}, {y_max}] contains no grid cells"
    )]
    EmptyWindow {
        /// Lower x bound of the requested window.
        x_min: f64,
        /// Upper x bound of the requested window.
        x_max: f64,
        /// Lower y bound of the requested window.
        y_min: f64,
        /// Upper y bound of the requested window.
        y_max: f64,
    },

    /// Wraps an error from the pluvio-series crate.
    #[error("series error: {reason}")]
    Series {
        /// Description of the underlying series failure.
        reason: String,
    },
}

impl From<pluvio_series::SeriesError> for GridError {
    fn from(e: pluvio_series::SeriesError) -> Self {
        GridError::Series {
            reason: e.to_string(),
        }
    }
}
