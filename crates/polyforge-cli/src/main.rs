mod cli;
mod commands;
mod config;
mod error;
mod logging;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use tracing::{debug, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("polyforge v{} starting up", env!("CARGO_PKG_VERSION"));
    debug!("parsed CLI arguments: {:?}", &cli);

    match cli.command {
        Commands::Build(args) => commands::build::run(&args),
    }
}
