mod cli;
mod combine_cmd;
mod config;
mod load;
mod logging;
mod nearby_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Combine(args) => combine_cmd::run(args),
        Command::Nearby(args) => nearby_cmd::run(args),
    }
}
