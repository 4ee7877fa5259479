//! Parquet reading for gridded precipitation datasets.
//!
//! The expected layout is the long ("tidy") form the extraction pipeline
//! writes: one row per (time, x, y) sample with columns `time`
//! (second-resolution timestamp), `x`, `y` (projected metres) and the data
//! variable itself. Rows are densified here into the time-major buffer that
//! [`GriddedDataset`] expects, with missing cells filled with NaN.

use std::path::Path;

use arrow::array::{Array, AsArray, RecordBatch};
use arrow::datatypes::{DataType, Float64Type, TimeUnit, TimestampSecondType};
use chrono::NaiveDateTime;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use tracing::{debug, info};

use pluvio_grid::{GridAxis, GriddedDataset};

use crate::error::IoError;

/// Fixed coordinate column names preceding the data variable.
const COORD_COLUMNS: [&str; 3] = ["time", "x", "y"];

/// Source and variable naming for a grid read.
///
/// `source` tags the provenance of the reanalysis product and flows into the
/// joined column names downstream; `variable` is both the name of the data
/// column in the Parquet file and the name given to extracted cell series.
#[derive(Debug, Clone)]
pub struct GridReaderConfig {
    /// Provenance label for the dataset.
    pub source: String,
    /// Name of the data variable column.
    pub variable: String,
}

impl Default for GridReaderConfig {
    fn default() -> Self {
        Self {
            source: "ceh".to_string(),
            variable: "rainfall_amount".to_string(),
        }
    }
}

/// Reads all record batches from a Parquet file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file does not exist, or
/// [`IoError::Parquet`] if the file cannot be opened or read.
pub(crate) fn read_batches(path: &Path) -> Result<Vec<RecordBatch>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = std::fs::File::open(path).map_err(|e| IoError::Parquet {
        reason: e.to_string(),
    })?;

    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let reader = builder.build()?;

    let batches: Vec<RecordBatch> =
        reader
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| IoError::Parquet {
                reason: e.to_string(),
            })?;

    Ok(batches)
}

/// Validates the schema of a record batch against the expected long-form grid
/// layout: `time`, `x`, `y`, then the data variable.
///
/// # Errors
///
/// Returns [`IoError::Validation`] listing every column name or type that
/// does not match.
pub(crate) fn validate_schema(batch: &RecordBatch, variable: &str) -> Result<(), IoError> {
    let num_cols = batch.num_columns();
    if num_cols != 4 {
        return Err(IoError::Validation {
            count: 1,
            details: format!("expected 4 columns (time, x, y, {variable}), got {num_cols}"),
        });
    }

    let schema = batch.schema();
    let mut mismatches: Vec<String> = Vec::new();

    let expected_names = [
        COORD_COLUMNS[0],
        COORD_COLUMNS[1],
        COORD_COLUMNS[2],
        variable,
    ];
    for (i, expected_name) in expected_names.iter().enumerate() {
        let actual_name = schema.field(i).name();
        if actual_name != *expected_name {
            mismatches.push(format!(
                "column {i}: expected '{expected_name}', got '{actual_name}'"
            ));
        }
    }

    let time_type = schema.field(0).data_type();
    if !matches!(time_type, DataType::Timestamp(TimeUnit::Second, None)) {
        mismatches.push(format!(
            "column 0: expected second-resolution timestamp, got {time_type}"
        ));
    }
    for i in 1..4 {
        let actual_type = schema.field(i).data_type();
        if *actual_type != DataType::Float64 {
            mismatches.push(format!("column {i}: expected Float64, got {actual_type}"));
        }
    }

    if !mismatches.is_empty() {
        return Err(IoError::Validation {
            count: mismatches.len(),
            details: mismatches.join("; "),
        });
    }

    Ok(())
}

/// Collects the sorted, deduplicated coordinate values of one axis column.
fn sorted_unique(values: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut coords: Vec<f64> = values.collect();
    coords.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    coords.dedup();
    coords
}

/// Index of `target` in a sorted coordinate list built by [`sorted_unique`].
fn coord_index(coords: &[f64], target: f64) -> Result<usize, IoError> {
    coords
        .binary_search_by(|c| c.partial_cmp(&target).unwrap_or(std::cmp::Ordering::Equal))
        .map_err(|_| IoError::Parquet {
            reason: format!("coordinate {target} vanished during axis construction"),
        })
}

/// Assembles record batches into a dense [`GriddedDataset`].
///
/// Axes are the sorted unique x, y and time values observed across all rows.
/// Cells never mentioned in the input stay NaN, as do null data values.
///
/// # Errors
///
/// Returns [`IoError::Validation`] for a schema mismatch or an empty input,
/// [`IoError::InvalidTime`] for an out-of-range timestamp, and
/// [`IoError::Grid`] if the axes fail the grid constructor's checks.
pub fn grid_from_batches(
    batches: &[RecordBatch],
    config: &GridReaderConfig,
) -> Result<GriddedDataset, IoError> {
    let total_rows: usize = batches.iter().map(RecordBatch::num_rows).sum();
    if batches.is_empty() || total_rows == 0 {
        return Err(IoError::Validation {
            count: 1,
            details: "grid input contains no rows".to_string(),
        });
    }
    validate_schema(&batches[0], &config.variable)?;

    // First pass: establish the axes.
    let mut time_secs: Vec<i64> = Vec::new();
    for batch in batches {
        let time_col = batch.column(0).as_primitive::<TimestampSecondType>();
        time_secs.extend(time_col.values().iter().copied());
    }
    time_secs.sort_unstable();
    time_secs.dedup();

    let times: Vec<NaiveDateTime> = time_secs
        .iter()
        .map(|&s| {
            chrono::DateTime::from_timestamp(s, 0)
                .map(|t| t.naive_utc())
                .ok_or_else(|| IoError::InvalidTime {
                    reason: format!("timestamp {s}s is outside the representable range"),
                })
        })
        .collect::<Result<_, _>>()?;

    let xs = sorted_unique(
        batches
            .iter()
            .flat_map(|b| b.column(1).as_primitive::<Float64Type>().values().iter())
            .copied(),
    );
    let ys = sorted_unique(
        batches
            .iter()
            .flat_map(|b| b.column(2).as_primitive::<Float64Type>().values().iter())
            .copied(),
    );

    let (nt, nx, ny) = (times.len(), xs.len(), ys.len());
    debug!(nt, nx, ny, rows = total_rows, "grid axes established");

    // Second pass: scatter rows into the dense time-major buffer.
    let mut values = vec![f64::NAN; nt * nx * ny];
    for batch in batches {
        let time_col = batch.column(0).as_primitive::<TimestampSecondType>();
        let x_col = batch.column(1).as_primitive::<Float64Type>();
        let y_col = batch.column(2).as_primitive::<Float64Type>();
        let value_col = batch.column(3).as_primitive::<Float64Type>();

        for row in 0..batch.num_rows() {
            let ti = time_secs
                .binary_search(&time_col.value(row))
                .map_err(|_| IoError::Parquet {
                    reason: "timestamp vanished during axis construction".to_string(),
                })?;
            let xi = coord_index(&xs, x_col.value(row))?;
            let yi = coord_index(&ys, y_col.value(row))?;

            let v = if value_col.is_null(row) {
                f64::NAN
            } else {
                value_col.value(row)
            };
            values[(ti * nx + xi) * ny + yi] = v;
        }
    }

    let grid = GriddedDataset::new(
        &config.source,
        &config.variable,
        times,
        GridAxis::new("x", xs)?,
        GridAxis::new("y", ys)?,
        values,
    )?;
    Ok(grid)
}

/// Reads a long-form Parquet file into a dense [`GriddedDataset`].
///
/// # Errors
///
/// See [`read_batches`] and [`grid_from_batches`].
pub fn read_grid(path: &Path, config: &GridReaderConfig) -> Result<GriddedDataset, IoError> {
    let batches = read_batches(path)?;
    let grid = grid_from_batches(&batches, config)?;
    info!(
        source = grid.source(),
        variable = grid.variable(),
        n_times = grid.times().len(),
        nx = grid.x().len(),
        ny = grid.y().len(),
        "gridded dataset loaded"
    );
    Ok(grid)
}
