//! Labeled time series and time-keyed relational joins.
//!
//! This crate provides the tabular primitives the rest of the workspace
//! builds on:
//!
//! - [`TimeSeries`] — a named `(timestamp, value)` sequence. In-grid missing
//!   data is encoded as NaN in the value slot.
//! - [`CombinedTable`] — a time-keyed table of named columns produced by
//!   joining series together. Join-missing cells are `None`, which keeps
//!   "absent under this join" distinct from "present but no data" (NaN).
//! - [`JoinKind`] — inner/left/right/outer relational join selection.
//!
//! # Architecture
//!
//! ```text
//! CombinedTable::from_series()
//!   └─ join_series()           (join.rs)
//!        ├─ build key index
//!        ├─ emit rows per join kind (duplicates fan out)
//!        └─ stable sort ascending by time
//! ```

pub mod error;
pub mod join;
pub mod series;
pub mod table;

pub use error::SeriesError;
pub use join::JoinKind;
pub use series::TimeSeries;
pub use table::{Column, CombinedTable};
