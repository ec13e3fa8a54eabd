//! Command-line interface for noughts.

use crate::game_config::Seat;
use clap::{Parser, Subcommand};

/// Noughts and crosses against a greedy computer opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Noughts and crosses against a greedy computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the computer on the console
    Play {
        /// Side the human takes; overrides the config file
        #[arg(long, value_enum)]
        human: Option<Seat>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Watch the computer play both sides
    Watch,
}
