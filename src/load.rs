//! Shared config and input loading for the subcommands.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use pluvio_grid::GriddedDataset;
use pluvio_io::{GridReaderConfig, read_gauge_store, read_grid};
use pluvio_station::GaugeStore;

use crate::config::PluvioConfig;

/// Read and parse the project TOML.
pub fn read_config(path: &Path) -> Result<PluvioConfig> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

/// Load the gauge store from the configured CSV paths.
pub fn load_store(config: &PluvioConfig) -> Result<GaugeStore> {
    let metadata = config
        .io
        .gauge_metadata
        .as_ref()
        .context("no gauge metadata path: set [io].gauge_metadata in config")?;
    let data = config
        .io
        .gauge_data
        .as_ref()
        .context("no gauge data path: set [io].gauge_data in config")?;

    info!(
        metadata = %metadata.display(),
        data = %data.display(),
        "reading gauge tables"
    );
    read_gauge_store(metadata, data)
        .with_context(|| format!("failed to read gauge tables: {}", data.display()))
}

/// Load the gridded dataset from the configured Parquet path.
pub fn load_grid(config: &PluvioConfig) -> Result<GriddedDataset> {
    let path = config
        .io
        .grid
        .as_ref()
        .context("no grid path: set [io].grid in config")?;

    let reader_cfg = GridReaderConfig {
        source: config.grid.source.clone(),
        variable: config.grid.variable.clone(),
    };

    info!(path = %path.display(), "reading gridded dataset");
    read_grid(path, &reader_cfg)
        .with_context(|| format!("failed to read grid Parquet: {}", path.display()))
}
