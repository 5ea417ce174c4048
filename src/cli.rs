//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts_core::Difficulty;
use std::path::PathBuf;

/// Noughts - tic-tac-toe against tiered computer opponents
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe with Easy, Medium, Hard and Expert opponents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (defaults apply if it is missing)
    #[arg(short, long, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Seed for reproducible computer moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Computer think time in milliseconds (overrides the config file)
        #[arg(long)]
        think_ms: Option<u64>,
    },

    /// Play computer-vs-computer games and print the results
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        games: u32,

        /// Difficulty playing X
        #[arg(long, default_value = "expert")]
        x: Difficulty,

        /// Difficulty playing O
        #[arg(long, default_value = "expert")]
        o: Difficulty,
    },
}
