//! Command-line interface for gomoku.

use clap::Parser;
use gomoku::Mode;
use std::path::PathBuf;

/// Five in a row on the console, against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Five-in-a-row console game with a heuristic opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board side length (overrides the config file)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Play mode (overrides the config file)
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Resume a saved game instead of starting a new one
    #[arg(short, long)]
    pub load: Option<PathBuf>,

    /// Path to the TOML config file
    #[arg(short, long, default_value = "gomoku.toml")]
    pub config: PathBuf,
}
