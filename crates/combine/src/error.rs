//! Error types for the pluvio-combine crate.

/// Error type for all fallible operations in the pluvio-combine crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CombineError {
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

    /// Wraps an error from the pluvio-timebase crate.
    #[error("timebase error: {reason}")]
    Timebase {
        /// Description of the underlying timebase failure.
        reason: String,
    },
}

impl From<pluvio_grid::GridError> for CombineError {
    fn from(e: pluvio_grid::GridError) -> Self {
        CombineError::Grid {
            reason: e.to_string(),
        }
    }
}

impl From<pluvio_series::SeriesError> for CombineError {
    fn from(e: pluvio_series::SeriesError) -> Self {
        CombineError::Series {
            reason: e.to_string(),
        }
    }
}

impl From<pluvio_timebase::TimebaseError> for CombineError {
    fn from(e: pluvio_timebase::TimebaseError) -> Self {
        CombineError::Timebase {
            reason: e.to_string(),
        }
    }
}
