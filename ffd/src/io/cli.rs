use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Nests the pieces and components of an instance onto stock sheets, per material.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Instance JSON: stock sheets plus the pieces and/or components to nest
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder the solution JSON and the cutting diagrams are written to, created if missing
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    /// Packer configuration JSON, defaults are used if omitted
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
