//! Time-aligned combination of gauge observations with grid series.
//!
//! Produces one table per station merging its raw observation series with
//! the matched nearest-cell series and, optionally, the NaN-skipping spatial
//! mean over a square neighborhood window. Both grid-derived series are
//! rebased to the [`GRID_BASE_HOUR`] day-boundary convention before joining
//! on time.
//!
//! ```text
//! combine_station_with_grid()
//!   ├─ closest-cell series → to_hour_base(9)   (pluvio-timebase)
//!   └─ join onto observations, sort ascending  (pluvio-series)
//!
//! combine_station_with_grid_and_neighborhood()
//!   ├─ combine_station_with_grid()
//!   ├─ nearby_window() → spatial_mean()        (pluvio-grid)
//!   └─ rebase + join as a third column
//! ```
//!
//! The neighborhood series is returned to the caller inside
//! [`NeighborhoodCombined`] instead of being cached on the [`Station`],
//! which stays immutable and shareable.

pub mod combine;
pub mod error;

pub use combine::{
    GRID_BASE_HOUR, NeighborhoodCombined, combine_station_with_grid,
    combine_station_with_grid_and_neighborhood,
};
pub use error::CombineError;

// Re-exported so binary callers can name the join kind without depending on
// pluvio-series directly.
pub use pluvio_series::JoinKind;

#[cfg(doc)]
use pluvio_station::Station;
