//! Command-line interface for gridtac.

use clap::Parser;
use std::path::PathBuf;

/// Gridtac - tic-tac-toe on an N×N board in your terminal
#[derive(Parser, Debug, Default)]
#[command(name = "gridtac")]
#[command(about = "Tic-tac-toe on an N×N board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board side length (overrides the config file)
    #[arg(short, long)]
    pub dimension: Option<usize>,

    /// Path to a TOML config file [default: gridtac.toml if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File that receives log output (overrides the config file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
