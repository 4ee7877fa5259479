//! Validated station/grid association.

use tracing::{debug, info};

use pluvio_grid::{GridError, GriddedDataset, NearestCell};
use pluvio_series::TimeSeries;

use crate::error::StationError;
use crate::store::{GaugeMetadata, GaugeStore};

/// Column name of the gauge's own precipitation series.
pub const RAIN_COL: &str = "rain_mm";

/// One gauge station together with its spatial context: identity,
/// coordinates, its observation series, the gauges within a bounding-box
/// threshold, and its tolerance-validated nearest grid cell.
///
/// All derived fields are computed eagerly by [`Station::locate`]; a
/// `Station` is immutable afterwards and safe to share across readers.
/// Neighborhood windows are computed on demand and returned to the caller,
/// never cached on the station.
#[derive(Debug, Clone)]
pub struct Station {
    metadata: GaugeMetadata,
    /// Observation series, sorted ascending by time, named [`RAIN_COL`].
    observations: TimeSeries,
    /// IDs of gauges within the bounding-box threshold (includes this
    /// station's own ID).
    nearby_ids: Vec<u32>,
    /// The matched nearest grid cell.
    closest_cell: NearestCell,
    /// The matched cell's series, named `<RAIN_COL>_closest_<source>`.
    closest_series: TimeSeries,
}

impl Station {
    /// Builds a station from the shared gauge store and gridded dataset.
    ///
    /// Performs, in order: metadata lookup, observation lookup, nearby-gauge
    /// search, and nearest-cell matching with tolerance validation. The same
    /// `nearby_threshold_m` bounds both the gauge search box and the
    /// acceptable per-axis offset to the matched cell.
    ///
    /// # Errors
    ///
    /// - [`StationError::InvalidThreshold`] if the threshold is not finite
    ///   and positive.
    /// - [`StationError::MetadataNotFound`] if the ID has no metadata.
    /// - [`StationError::ObservationsNotFound`] if the ID has no rows.
    /// - [`StationError::OutOfTolerance`] if the nearest cell is more than
    ///   the threshold away in either axis — the point is likely outside the
    ///   grid's coverage, and proceeding would silently compare against a
    ///   far-away edge cell.
    pub fn locate(
        store: &GaugeStore,
        grid: &GriddedDataset,
        gauge_id: u32,
        nearby_threshold_m: f64,
    ) -> Result<Self, StationError> {
        if !nearby_threshold_m.is_finite() || nearby_threshold_m <= 0.0 {
            return Err(StationError::InvalidThreshold {
                value: nearby_threshold_m,
            });
        }

        let metadata = store.metadata(gauge_id)?.clone();

        let rows = store.observations_for(gauge_id);
        if rows.is_empty() {
            return Err(StationError::ObservationsNotFound { id: gauge_id });
        }
        let mut observations = TimeSeries::new(
            RAIN_COL,
            rows.iter().map(|o| o.time).collect(),
            rows.iter().map(|o| o.rain_mm).collect(),
        )?;
        observations.sort_by_time();

        let nearby_ids =
            store.ids_within_box(metadata.easting, metadata.northing, nearby_threshold_m);
        debug!(
            gauge_id,
            n_nearby = nearby_ids.len(),
            threshold_m = nearby_threshold_m,
            "nearby gauge search"
        );

        let closest_cell = grid.nearest_cell(metadata.easting, metadata.northing);
        let dx_m = (metadata.easting - closest_cell.x_coord).abs();
        let dy_m = (metadata.northing - closest_cell.y_coord).abs();
        if dx_m > nearby_threshold_m || dy_m > nearby_threshold_m {
            return Err(StationError::OutOfTolerance {
                dx_m,
                dy_m,
                threshold_m: nearby_threshold_m,
            });
        }

        let closest_series = grid
            .cell_series(closest_cell.x_index, closest_cell.y_index)?
            .renamed(format!("{RAIN_COL}_closest_{}", grid.source()))?;

        info!(
            gauge_id,
            easting = metadata.easting,
            northing = metadata.northing,
            cell_x = closest_cell.x_coord,
            cell_y = closest_cell.y_coord,
            n_obs = observations.len(),
            "station located"
        );

        Ok(Self {
            metadata,
            observations,
            nearby_ids,
            closest_cell,
            closest_series,
        })
    }

    /// Returns the gauge ID.
    pub fn id(&self) -> u32 {
        self.metadata.id
    }

    /// Returns the metadata record.
    pub fn metadata(&self) -> &GaugeMetadata {
        &self.metadata
    }

    /// Returns the observation series, sorted ascending by time.
    pub fn observations(&self) -> &TimeSeries {
        &self.observations
    }

    /// Returns the IDs of gauges within the construction threshold.
    pub fn nearby_ids(&self) -> &[u32] {
        &self.nearby_ids
    }

    /// Returns the matched nearest grid cell.
    pub fn closest_cell(&self) -> &NearestCell {
        &self.closest_cell
    }

    /// Returns the matched cell's time series.
    pub fn closest_series(&self) -> &TimeSeries {
        &self.closest_series
    }

    /// Returns the rectangular window of `grid` spanning
    /// `[coordinate − radius, coordinate + radius]` inclusive in both axes
    /// around this station.
    ///
    /// The window is square; callers wanting a circular mean must mask the
    /// cells themselves.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyWindow`] when no cell falls inside the box.
    pub fn nearby_window(
        &self,
        grid: &GriddedDataset,
        radius_m: f64,
    ) -> Result<GriddedDataset, GridError> {
        grid.window(
            self.metadata.easting - radius_m,
            self.metadata.easting + radius_m,
            self.metadata.northing - radius_m,
            self.metadata.northing + radius_m,
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use pluvio_grid::GridAxis;

    use super::*;
    use crate::store::GaugeObservation;

    fn dt(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 1, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    /// 3×3 grid at 1 km resolution, cell centres at 1000..=3000 in both
    /// axes, values equal to the time index everywhere.
    fn grid() -> GriddedDataset {
        let coords = vec![1000.0, 2000.0, 3000.0];
        let times = vec![dt(1, 0), dt(2, 0)];
        let values = vec![0.0; 9].into_iter().chain(vec![1.0; 9]).collect();
        GriddedDataset::new(
            "ceh",
            "rainfall_amount",
            times,
            GridAxis::new("x", coords.clone()).unwrap(),
            GridAxis::new("y", coords).unwrap(),
            values,
        )
        .unwrap()
    }

    fn store() -> GaugeStore {
        GaugeStore::new(
            vec![
                GaugeMetadata {
                    id: 1,
                    easting: 2000.0,
                    northing: 2000.0,
                    name: Some("on-cell".to_string()),
                },
                GaugeMetadata {
                    id: 2,
                    easting: 2300.0,
                    northing: 1900.0,
                    name: None,
                },
                GaugeMetadata {
                    id: 3,
                    easting: 90_000.0,
                    northing: 90_000.0,
                    name: None,
                },
            ],
            vec![
                GaugeObservation { id: 1, time: dt(2, 9), rain_mm: 1.5 },
                GaugeObservation { id: 1, time: dt(1, 9), rain_mm: 0.5 },
                GaugeObservation { id: 2, time: dt(1, 9), rain_mm: 2.0 },
                GaugeObservation { id: 3, time: dt(1, 9), rain_mm: 3.0 },
            ],
        )
        .unwrap()
    }

    #[test]
    fn locate_builds_sorted_observations() {
        let s = Station::locate(&store(), &grid(), 1, 5000.0).unwrap();
        assert_eq!(s.id(), 1);
        assert_eq!(s.observations().name(), RAIN_COL);
        assert!(s.observations().is_sorted_by_time());
        assert_eq!(s.observations().values(), &[0.5, 1.5]);
    }

    #[test]
    fn locate_unknown_id() {
        let err = Station::locate(&store(), &grid(), 99, 5000.0).unwrap_err();
        assert_eq!(err, StationError::MetadataNotFound { id: 99 });
    }

    #[test]
    fn locate_no_observations() {
        let store = GaugeStore::new(
            vec![GaugeMetadata {
                id: 5,
                easting: 2000.0,
                northing: 2000.0,
                name: None,
            }],
            vec![],
        )
        .unwrap();
        let err = Station::locate(&store, &grid(), 5, 5000.0).unwrap_err();
        assert_eq!(err, StationError::ObservationsNotFound { id: 5 });
    }

    #[test]
    fn locate_invalid_threshold() {
        let err = Station::locate(&store(), &grid(), 1, 0.0).unwrap_err();
        assert_eq!(err, StationError::InvalidThreshold { value: 0.0 });
        let err = Station::locate(&store(), &grid(), 1, f64::NAN).unwrap_err();
        assert!(matches!(err, StationError::InvalidThreshold { .. }));
    }

    #[test]
    fn exact_coordinate_match_has_zero_offset() {
        // Gauge 1 sits exactly on a cell centre: match must be exact for any
        // positive threshold, however small.
        let s = Station::locate(&store(), &grid(), 1, 1e-9).unwrap();
        assert_eq!(s.closest_cell().x_coord, 2000.0);
        assert_eq!(s.closest_cell().y_coord, 2000.0);
    }

    #[test]
    fn off_grid_station_is_out_of_tolerance() {
        // Gauge 3 is ~87 km outside the grid envelope.
        let err = Station::locate(&store(), &grid(), 3, 5000.0).unwrap_err();
        match err {
            StationError::OutOfTolerance { dx_m, dy_m, threshold_m } => {
                assert_eq!(dx_m, 87_000.0);
                assert_eq!(dy_m, 87_000.0);
                assert_eq!(threshold_m, 5000.0);
            }
            other => panic!("expected OutOfTolerance, got {other:?}"),
        }
    }

    #[test]
    fn closest_series_is_named_and_extracted() {
        let s = Station::locate(&store(), &grid(), 2, 5000.0).unwrap();
        assert_eq!(s.closest_series().name(), "rain_mm_closest_ceh");
        assert_eq!(s.closest_series().values(), &[0.0, 1.0]);
        // 2300 is nearest to the 2000 column, 1900 to the 2000 row.
        assert_eq!(s.closest_cell().x_coord, 2000.0);
        assert_eq!(s.closest_cell().y_coord, 2000.0);
    }

    #[test]
    fn nearby_ids_include_self_and_box_neighbours() {
        let s = Station::locate(&store(), &grid(), 1, 5000.0).unwrap();
        assert_eq!(s.nearby_ids(), &[1, 2]);
    }

    #[test]
    fn nearby_window_spans_radius() {
        let s = Station::locate(&store(), &grid(), 1, 5000.0).unwrap();
        let w = s.nearby_window(&grid(), 1000.0).unwrap();
        assert_eq!(w.x().len(), 3);
        assert_eq!(w.y().len(), 3);

        let w = s.nearby_window(&grid(), 500.0).unwrap();
        assert_eq!(w.x().len(), 1);
        assert_eq!(w.y().len(), 1);
    }

    #[test]
    fn nearby_window_empty_is_error() {
        let s = Station::locate(&store(), &grid(), 2, 5000.0).unwrap();
        // Gauge 2 at x=2300: a 100 m box touches no 1 km cell centre.
        let err = s.nearby_window(&grid(), 100.0).unwrap_err();
        assert!(matches!(err, GridError::EmptyWindow { .. }));
    }
}
