//! Nearby command: list gauges within the bounding-box threshold.

use anyhow::{Context, Result};
use tracing::info_span;

use pluvio_station::Station;

use crate::cli::NearbyArgs;
use crate::load;

/// Run the nearby-gauge search for one gauge.
pub fn run(args: NearbyArgs) -> Result<()> {
    let _cmd = info_span!("nearby").entered();
    let config = load::read_config(&args.config)?;

    let store = load::load_store(&config)?;
    let grid = load::load_grid(&config)?;

    let threshold_m = args.threshold.unwrap_or(config.matching.nearby_threshold_m);
    let station = Station::locate(&store, &grid, args.gauge, threshold_m)
        .with_context(|| format!("failed to locate gauge {}", args.gauge))?;

    let origin = station.metadata();
    println!(
        "gauges within {threshold_m} m box of gauge {} ({}, {}):",
        origin.id, origin.easting, origin.northing
    );
    for &id in station.nearby_ids() {
        // Every nearby ID came out of the store, so the lookup cannot fail.
        let m = store.metadata(id)?;
        let name = m.name.as_deref().unwrap_or("-");
        println!(
            "  {id:>8}  {name:<24}  dx {:>7.0} m  dy {:>7.0} m",
            m.easting - origin.easting,
            m.northing - origin.northing
        );
    }

    Ok(())
}
