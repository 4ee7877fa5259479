//! Combine command: join one gauge's observations with the grid.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use pluvio_combine::{
    JoinKind, combine_station_with_grid, combine_station_with_grid_and_neighborhood,
};
use pluvio_io::write_table;
use pluvio_station::Station;

use crate::cli::CombineArgs;
use crate::load;

/// Run the combination pipeline for one gauge.
pub fn run(args: CombineArgs) -> Result<()> {
    let _cmd = info_span!("combine").entered();
    let config = load::read_config(&args.config)?;

    let store = load::load_store(&config)?;
    let grid = load::load_grid(&config)?;

    let station = Station::locate(&store, &grid, args.gauge, config.matching.nearby_threshold_m)
        .with_context(|| format!("failed to locate gauge {}", args.gauge))?;

    let join_name = args.join.as_deref().unwrap_or(&config.combine.join);
    let kind = JoinKind::from_str(join_name)
        .with_context(|| format!("invalid join kind '{join_name}'"))?;

    let radius_m = args.nearby_radius_m.or(config.combine.nearby_radius_m);
    let table = match radius_m {
        Some(radius_m) => {
            combine_station_with_grid_and_neighborhood(&station, &grid, radius_m, kind)
                .with_context(|| format!("failed to combine gauge {}", args.gauge))?
                .table
        }
        None => combine_station_with_grid(&station, kind)
            .with_context(|| format!("failed to combine gauge {}", args.gauge))?,
    };

    let output = args
        .output
        .or_else(|| config.io.output.clone())
        .unwrap_or_else(|| PathBuf::from(format!("gauge_{}_combined.csv", args.gauge)));

    write_table(&output, &table)
        .with_context(|| format!("failed to write output: {}", output.display()))?;
    info!(
        gauge_id = args.gauge,
        path = %output.display(),
        n_rows = table.num_rows(),
        "combined table written"
    );

    Ok(())
}
