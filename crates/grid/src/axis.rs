//! Coordinate-labeled spatial axes.

use crate::error::GridError;

/// A coordinate-labeled spatial axis with strictly ascending coordinates.
///
/// Coordinates are real-valued positions in projected CRS units (metres),
/// typically the centres of grid cells along one dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct GridAxis {
    name: String,
    coords: Vec<f64>,
}

impl GridAxis {
    /// Creates a new axis after validating the coordinate labels.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyAxis`] for an empty coordinate list,
    /// [`GridError::NonFiniteCoordinate`] for NaN or infinite labels, and
    /// [`GridError::UnsortedAxis`] if labels are not strictly ascending.
    pub fn new(name: impl Into<String>, coords: Vec<f64>) -> Result<Self, GridError> {
        let name = name.into();
        if coords.is_empty() {
            return Err(GridError::EmptyAxis { name });
        }
        for (i, &c) in coords.iter().enumerate() {
            if !c.is_finite() {
                return Err(GridError::NonFiniteCoordinate { name, index: i });
            }
        }
        if let Some(i) = coords.windows(2).position(|w| w[0] >= w[1]) {
            return Err(GridError::UnsortedAxis { name, index: i + 1 });
        }
        Ok(Self { name, coords })
    }

    /// Returns the axis name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the coordinate labels.
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Returns the number of coordinates.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Returns `true` if the axis has no coordinates (never true for a
    /// validated axis; present for API completeness).
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Returns the index of the coordinate nearest to `target`.
    ///
    /// A target exactly halfway between two labels resolves to the
    /// lower-coordinate index.
    pub fn nearest(&self, target: f64) -> usize {
        let i = self.coords.partition_point(|&c| c < target);
        if i == 0 {
            return 0;
        }
        if i == self.coords.len() {
            return self.coords.len() - 1;
        }
        let below = target - self.coords[i - 1];
        let above = self.coords[i] - target;
        if below <= above { i - 1 } else { i }
    }

    /// Returns the index range of coordinates within `[min, max]` inclusive.
    ///
    /// The range may be empty when no label falls inside the bounds.
    pub fn range(&self, min: f64, max: f64) -> std::ops::Range<usize> {
        let start = self.coords.partition_point(|&c| c < min);
        let end = self.coords.partition_point(|&c| c <= max);
        start..end.max(start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis() -> GridAxis {
        // 1 km resolution cell centres.
        GridAxis::new("x", vec![1000.0, 2000.0, 3000.0, 4000.0]).unwrap()
    }

    #[test]
    fn new_valid() {
        let a = axis();
        assert_eq!(a.name(), "x");
        assert_eq!(a.len(), 4);
        assert!(!a.is_empty());
        assert_eq!(a.coords()[0], 1000.0);
    }

    #[test]
    fn new_empty_rejected() {
        let err = GridAxis::new("x", vec![]).unwrap_err();
        assert_eq!(err, GridError::EmptyAxis { name: "x".to_string() });
    }

    #[test]
    fn new_unsorted_rejected() {
        let err = GridAxis::new("y", vec![1.0, 3.0, 2.0]).unwrap_err();
        assert_eq!(err, GridError::UnsortedAxis { name: "y".to_string(), index: 2 });
    }

    #[test]
    fn new_duplicate_rejected() {
        let err = GridAxis::new("y", vec![1.0, 1.0]).unwrap_err();
        assert_eq!(err, GridError::UnsortedAxis { name: "y".to_string(), index: 1 });
    }

    #[test]
    fn new_non_finite_rejected() {
        let err = GridAxis::new("x", vec![1.0, f64::NAN]).unwrap_err();
        assert_eq!(err, GridError::NonFiniteCoordinate { name: "x".to_string(), index: 1 });
    }

    #[test]
    fn nearest_exact_hit() {
        assert_eq!(axis().nearest(2000.0), 1);
    }

    #[test]
    fn nearest_between_labels() {
        assert_eq!(axis().nearest(2400.0), 1);
        assert_eq!(axis().nearest(2600.0), 2);
    }

    #[test]
    fn nearest_midpoint_ties_low() {
        assert_eq!(axis().nearest(2500.0), 1);
    }

    #[test]
    fn nearest_outside_clamps_to_edges() {
        assert_eq!(axis().nearest(-50_000.0), 0);
        assert_eq!(axis().nearest(50_000.0), 3);
    }

    #[test]
    fn range_inclusive_bounds() {
        assert_eq!(axis().range(2000.0, 3000.0), 1..3);
        assert_eq!(axis().range(1500.0, 3500.0), 1..3);
        assert_eq!(axis().range(0.0, 10_000.0), 0..4);
    }

    #[test]
    fn range_single_cell() {
        assert_eq!(axis().range(2000.0, 2000.0), 1..2);
    }

    #[test]
    fn range_empty_when_between_labels() {
        let r = axis().range(2100.0, 2900.0);
        assert!(r.is_empty());
    }

    #[test]
    fn range_empty_outside_axis() {
        assert!(axis().range(9000.0, 9500.0).is_empty());
        assert!(axis().range(-10.0, 0.0).is_empty());
    }
}
