//! Dense gridded dataset with coordinate-based selection.

use chrono::NaiveDateTime;
use tracing::debug;

use pluvio_series::TimeSeries;

use crate::axis::GridAxis;
use crate::error::GridError;

/// The grid cell matched to a point by coordinate-wise nearest selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestCell {
    /// Index into the x axis.
    pub x_index: usize,
    /// Index into the y axis.
    pub y_index: usize,
    /// Coordinate label of the matched x index.
    pub x_coord: f64,
    /// Coordinate label of the matched y index.
    pub y_coord: f64,
}

/// A dense `time × x × y` precipitation array with coordinate-labeled
/// spatial axes.
///
/// Values are stored time-major (`[t][x][y]`). NaN encodes missing data
/// within the grid; the spatial mean skips NaN cells rather than
/// propagating them.
#[derive(Debug, Clone, PartialEq)]
pub struct GriddedDataset {
    /// Short tag identifying the data source, used in derived column names
    /// (e.g. "ceh" yields a `rain_mm_closest_ceh` column downstream).
    source: String,
    /// Name of the physical variable held in the values buffer.
    variable: String,
    times: Vec<NaiveDateTime>,
    x: GridAxis,
    y: GridAxis,
    values: Vec<f64>,
}

impl GriddedDataset {
    /// Creates a new dataset after validating the buffer shape.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ShapeMismatch`] if `values.len()` is not
    /// `times.len() * x.len() * y.len()`.
    pub fn new(
        source: impl Into<String>,
        variable: impl Into<String>,
        times: Vec<NaiveDateTime>,
        x: GridAxis,
        y: GridAxis,
        values: Vec<f64>,
    ) -> Result<Self, GridError> {
        let expected = times.len() * x.len() * y.len();
        if values.len() != expected {
            return Err(GridError::ShapeMismatch {
                expected,
                got: values.len(),
            });
        }
        Ok(Self {
            source: source.into(),
            variable: variable.into(),
            times,
            x,
            y,
            values,
        })
    }

    /// Returns the data source tag.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the variable name.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Returns the time coordinates.
    pub fn times(&self) -> &[NaiveDateTime] {
        &self.times
    }

    /// Returns the x axis.
    pub fn x(&self) -> &GridAxis {
        &self.x
    }

    /// Returns the y axis.
    pub fn y(&self) -> &GridAxis {
        &self.y
    }

    /// Returns the number of time steps.
    pub fn n_times(&self) -> usize {
        self.times.len()
    }

    /// Returns the value at (time, x, y) indices.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds; indices are expected to come
    /// from this dataset's own axes.
    pub fn value_at(&self, t: usize, xi: usize, yi: usize) -> f64 {
        assert!(t < self.times.len() && xi < self.x.len() && yi < self.y.len());
        self.values[(t * self.x.len() + xi) * self.y.len() + yi]
    }

    /// Returns the grid cell nearest to `(easting, northing)` under
    /// coordinate-wise nearest selection.
    ///
    /// Points outside the coordinate envelope clamp to the edge cell; it is
    /// the caller's job to reject matches that exceed a distance tolerance.
    pub fn nearest_cell(&self, easting: f64, northing: f64) -> NearestCell {
        let x_index = self.x.nearest(easting);
        let y_index = self.y.nearest(northing);
        NearestCell {
            x_index,
            y_index,
            x_coord: self.x.coords()[x_index],
            y_coord: self.y.coords()[y_index],
        }
    }

    /// Extracts the time series of one cell, dropping the spatial
    /// dimensions. The series carries the dataset's variable name.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Series`] if the variable name is empty.
    pub fn cell_series(&self, xi: usize, yi: usize) -> Result<TimeSeries, GridError> {
        let values: Vec<f64> = (0..self.times.len())
            .map(|t| self.value_at(t, xi, yi))
            .collect();
        Ok(TimeSeries::new(
            self.variable.clone(),
            self.times.clone(),
            values,
        )?)
    }

    /// Returns the rectangular sub-grid whose axes span the given inclusive
    /// bounds. No distance-based masking is applied within the box.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyWindow`] when no cell falls inside the
    /// bounds in either axis.
    pub fn window(
        &self,
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    ) -> Result<GriddedDataset, GridError> {
        let xr = self.x.range(x_min, x_max);
        let yr = self.y.range(y_min, y_max);
        if xr.is_empty() || yr.is_empty() {
            return Err(GridError::EmptyWindow {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }
        debug!(
            n_x = xr.len(),
            n_y = yr.len(),
            "selected spatial window"
        );

        let x = GridAxis::new(self.x.name(), self.x.coords()[xr.clone()].to_vec())?;
        let y = GridAxis::new(self.y.name(), self.y.coords()[yr.clone()].to_vec())?;

        let mut values = Vec::with_capacity(self.times.len() * xr.len() * yr.len());
        for t in 0..self.times.len() {
            for xi in xr.clone() {
                for yi in yr.clone() {
                    values.push(self.value_at(t, xi, yi));
                }
            }
        }

        GriddedDataset::new(
            self.source.clone(),
            self.variable.clone(),
            self.times.clone(),
            x,
            y,
            values,
        )
    }

    /// Reduces the grid to one value per time step by averaging over both
    /// spatial axes.
    ///
    /// NaN cells are excluded from the mean rather than treated as zero or
    /// propagated; a time step where every cell is NaN yields NaN.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Series`] if the variable name is empty.
    pub fn spatial_mean(&self) -> Result<TimeSeries, GridError> {
        let cells_per_step = self.x.len() * self.y.len();
        let values: Vec<f64> = (0..self.times.len())
            .map(|t| {
                let start = t * cells_per_step;
                let step = &self.values[start..start + cells_per_step];
                let mut sum = 0.0;
                let mut n = 0usize;
                for &v in step {
                    if !v.is_nan() {
                        sum += v;
                        n += 1;
                    }
                }
                if n == 0 { f64::NAN } else { sum / n as f64 }
            })
            .collect();
        Ok(TimeSeries::new(
            self.variable.clone(),
            self.times.clone(),
            values,
        )?)
    }
}
