use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "polyforge - builds bead-spring polymer initial conditions as LAMMPS-style data files.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Grow a polymer melt and write it as a LAMMPS data file.
    Build(BuildArgs),
}

/// Arguments for the `build` subcommand. Flags override recipe-file values.
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Path for the output data file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// TOML recipe file describing the melt.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of chains in the box.
    #[arg(long, value_name = "NUM")]
    pub chains: Option<usize>,

    /// Beads per chain (single-type chains; use the recipe file for block layouts).
    #[arg(long, value_name = "NUM")]
    pub beads_per_chain: Option<usize>,

    /// Target number density rho*.
    #[arg(long, value_name = "RHO")]
    pub density: Option<f64>,

    /// Distance between consecutive beads of a chain.
    #[arg(long, value_name = "LEN")]
    pub bond_length: Option<f64>,

    /// Park-Miller RNG seed; omit for a non-reproducible build.
    #[arg(long, value_name = "SEED", allow_hyphen_values = true)]
    pub seed: Option<i64>,

    /// Title line of the output data file.
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,
}
