//! Command-line interface implementation for strata.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for strata.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "strata: data-pipeline project scaffolding tool",
    long_about = None
)]
pub struct Args {
    /// Path to a JSON or YAML configuration file.
    /// When omitted, the project name and description are asked interactively
    /// and everything else comes from the built-in defaults.
    #[arg(
        long = "config_file",
        visible_alias = "config-file",
        value_name = "FILE"
    )]
    pub config_file: Option<PathBuf>,

    /// Directory where the project should be created
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
