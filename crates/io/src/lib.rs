//! # pluvio-io
//!
//! Read gauge tables from CSV and gridded reanalysis from Parquet, and write
//! combined tables back out as CSV. Bridges external file formats into the
//! workspace's in-memory store, grid and table types.

mod error;
mod gauge_csv;
mod grid_parquet;
mod table_csv;
mod validate;

pub use error::IoError;
pub use gauge_csv::{read_gauge_store, read_metadata_from, read_observations_from};
pub use grid_parquet::{GridReaderConfig, grid_from_batches, read_grid};
pub use table_csv::{write_table, write_table_to};
