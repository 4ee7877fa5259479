//! Named `(timestamp, value)` sequences.

use chrono::NaiveDateTime;

use crate::error::SeriesError;

/// A named time series of `f64` values.
///
/// Lengths of the timestamp and value vectors are validated at construction.
/// Timestamps are not required to be unique or sorted; callers that need an
/// ascending series use [`sort_by_time`](Self::sort_by_time).
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    /// Column name this series carries into a joined table.
    name: String,
    /// Timestamp of each sample.
    times: Vec<NaiveDateTime>,
    /// Value of each sample. NaN encodes missing data.
    values: Vec<f64>,
}

impl TimeSeries {
    /// Creates a new `TimeSeries` after validating inputs.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::LengthMismatch`] if `times` and `values` have
    /// different lengths, or [`SeriesError::EmptyName`] if the name is empty.
    pub fn new(
        name: impl Into<String>,
        times: Vec<NaiveDateTime>,
        values: Vec<f64>,
    ) -> Result<Self, SeriesError> {
        let name = name.into();
        if name.is_empty() {
            return Err(SeriesError::EmptyName);
        }
        if times.len() != values.len() {
            return Err(SeriesError::LengthMismatch {
                times: times.len(),
                values: values.len(),
            });
        }
        Ok(Self { name, times, values })
    }

    /// Returns the series name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the timestamps.
    pub fn times(&self) -> &[NaiveDateTime] {
        &self.times
    }

    /// Returns the values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns `true` if the series contains no samples.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Returns a copy of this series under a different name.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::EmptyName`] if the new name is empty.
    pub fn renamed(&self, name: impl Into<String>) -> Result<Self, SeriesError> {
        Self::new(name, self.times.clone(), self.values.clone())
    }

    /// Returns a copy of this series with replaced timestamps.
    ///
    /// Used after a time-base rewrite, where the value sequence is unchanged
    /// but every timestamp has been rebased.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::LengthMismatch`] if the replacement does not
    /// have one timestamp per value.
    pub fn with_times(&self, times: Vec<NaiveDateTime>) -> Result<Self, SeriesError> {
        Self::new(self.name.clone(), times, self.values.clone())
    }

    /// Sorts samples ascending by timestamp (stable for equal timestamps).
    pub fn sort_by_time(&mut self) {
        let mut order: Vec<usize> = (0..self.times.len()).collect();
        order.sort_by_key(|&i| self.times[i]);
        self.times = order.iter().map(|&i| self.times[i]).collect();
        self.values = order.iter().map(|&i| self.values[i]).collect();
    }

    /// Returns `true` if timestamps are in ascending (non-decreasing) order.
    pub fn is_sorted_by_time(&self) -> bool {
        self.times.windows(2).all(|w| w[0] <= w[1])
    }
}
