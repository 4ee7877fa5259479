use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Pluvio gauge-to-grid precipitation alignment.
#[derive(Parser)]
#[command(
    name = "pluvio",
    version,
    about = "Align rain-gauge observations with gridded precipitation data"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Join a gauge's observations with its matched grid cell (and
    /// optionally its neighborhood mean) and write the result as CSV.
    Combine(CombineArgs),
    /// List the gauges within the bounding-box threshold of a gauge.
    Nearby(NearbyArgs),
}

/// Arguments for the `combine` subcommand.
#[derive(clap::Args)]
pub struct CombineArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "pluvio.toml")]
    pub config: PathBuf,

    /// Gauge ID to combine.
    #[arg(short, long)]
    pub gauge: u32,

    /// Override output CSV path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override join kind from config (inner, left, right, outer).
    #[arg(short, long)]
    pub join: Option<String>,

    /// Override neighborhood window radius in metres from config.
    #[arg(long = "nearby-radius")]
    pub nearby_radius_m: Option<f64>,
}

/// Arguments for the `nearby` subcommand.
#[derive(clap::Args)]
pub struct NearbyArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "pluvio.toml")]
    pub config: PathBuf,

    /// Gauge ID to search around.
    #[arg(short, long)]
    pub gauge: u32,

    /// Override bounding-box threshold in metres from config.
    #[arg(short, long)]
    pub threshold: Option<f64>,
}
