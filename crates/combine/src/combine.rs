//! Combination routines.

use tracing::info;

use pluvio_grid::GriddedDataset;
use pluvio_series::{CombinedTable, JoinKind, TimeSeries};
use pluvio_station::Station;
use pluvio_timebase::to_hour_base;

use crate::error::CombineError;

/// Hour-of-day every grid-derived series is rebased to before joining.
///
/// Both HadUK-Grid and CEH-GEAR daily accumulations run 09:00–09:00, but the
/// stored timestamps differ; rewriting to a fixed 9 am label makes them
/// joinable against gauge data carrying the same convention.
pub const GRID_BASE_HOUR: u32 = 9;

/// Result of a neighborhood combination: the joined table plus the rebased
/// neighborhood-mean series it was built from.
#[derive(Debug, Clone)]
pub struct NeighborhoodCombined {
    /// Observations joined with the closest-cell and neighborhood columns.
    pub table: CombinedTable,
    /// The neighborhood spatial-mean series, rebased to [`GRID_BASE_HOUR`].
    pub neighborhood: TimeSeries,
}

/// Rewrites a grid series' timestamps to the canonical base hour.
fn rebase(series: &TimeSeries) -> Result<TimeSeries, CombineError> {
    let times = to_hour_base(series.times(), GRID_BASE_HOUR)?;
    Ok(series.with_times(times)?)
}

/// Joins a station's observation series with its matched nearest-cell
/// series on time.
///
/// The cell series is rebased to [`GRID_BASE_HOUR`] first; the output is
/// sorted ascending by time and has columns
/// `[<rain>, <rain>_closest_<source>]` plus the time key.
///
/// # Errors
///
/// Returns [`CombineError::Series`] if the join would duplicate a column
/// name, or [`CombineError::Timebase`] if the rebase fails.
pub fn combine_station_with_grid(
    station: &Station,
    kind: JoinKind,
) -> Result<CombinedTable, CombineError> {
    let closest = rebase(station.closest_series())?;
    let table = CombinedTable::from_series(station.observations()).join_series(&closest, kind)?;
    info!(
        gauge_id = station.id(),
        join = ?kind,
        n_rows = table.num_rows(),
        "combined station with closest cell"
    );
    Ok(table)
}

/// Performs [`combine_station_with_grid`], then joins on the NaN-skipping
/// spatial mean of the station's neighborhood window as a further column
/// named `<rain>_nearby_<source>`.
///
/// # Errors
///
/// In addition to [`combine_station_with_grid`]'s errors, returns
/// [`CombineError::Grid`] when the window contains no cells.
pub fn combine_station_with_grid_and_neighborhood(
    station: &Station,
    grid: &GriddedDataset,
    nearby_radius_m: f64,
    kind: JoinKind,
) -> Result<NeighborhoodCombined, CombineError> {
    let table = combine_station_with_grid(station, kind)?;

    let window = station.nearby_window(grid, nearby_radius_m)?;
    let mean = window.spatial_mean()?.renamed(format!(
        "{}_nearby_{}",
        station.observations().name(),
        grid.source()
    ))?;
    let neighborhood = rebase(&mean)?;

    let table = table.join_series(&neighborhood, kind)?;
    info!(
        gauge_id = station.id(),
        radius_m = nearby_radius_m,
        n_rows = table.num_rows(),
        "combined station with neighborhood mean"
    );

    Ok(NeighborhoodCombined {
        table,
        neighborhood,
    })
}
