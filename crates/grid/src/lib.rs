//! Coordinate-labeled gridded precipitation datasets.
//!
//! A [`GriddedDataset`] is a dense `time × x × y` array whose spatial axes
//! carry real coordinate labels (projected CRS metres), enabling selection by
//! coordinate instead of raw index:
//!
//! - [`GriddedDataset::nearest_cell`] — coordinate-wise nearest-neighbor
//!   selection of a single cell for a point.
//! - [`GriddedDataset::window`] — inclusive rectangular sub-grid around a
//!   point (square neighborhood, no circular masking).
//! - [`GriddedDataset::spatial_mean`] — reduce a (windowed) grid to a time
//!   series, skipping NaN cells.
//!
//! Nearest selection deliberately clamps off-grid points to the edge cell;
//! distance-tolerance validation is the station layer's responsibility.

pub mod axis;
pub mod error;
pub mod grid;

pub use axis::GridAxis;
pub use error::GridError;
pub use grid::{GriddedDataset, NearestCell};
