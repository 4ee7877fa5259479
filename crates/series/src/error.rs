//! Error types for the pluvio-series crate.

/// Error type for all fallible operations in the pluvio-series crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// Returned when timestamp and value lengths disagree.
    #[error("times length {times} does not match values length {values}")]
    LengthMismatch {
        /// Number of timestamps.
        times: usize,
        /// Number of values.
        values: usize,
    },

    /// Returned when a series or column name is empty.
    #[error("series name must not be empty")]
    EmptyName,

    /// Returned when joining would produce two columns with the same name.
    #[error("column '{name}' already exists in the table")]
    DuplicateColumn {
        /// The clashing column name.
        name: String,
    },

    /// Returned when a join kind string is not recognised.
    #[error("unknown join kind '{name}' (expected inner, left, right, or outer)")]
    UnknownJoinKind {
        /// The unrecognised join kind.
        name: String,
    },
}
