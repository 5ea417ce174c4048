//! Noughts - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use noughts::{AppConfig, Simulation, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::from_file(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?
        .with_seed(cli.seed);

    match cli.command {
        Command::Play { think_ms } => {
            let config = match think_ms {
                Some(ms) => config.with_think_time_ms(ms),
                None => config,
            };
            run_tui(config).await
        }
        Command::Simulate { games, x, o } => {
            run_simulation(Simulation::new(x, o, games, *config.seed()))
        }
    }
}

/// Plays the batch and prints the tally, logging to stderr.
fn run_simulation(simulation: Simulation) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(?simulation, "Starting simulation");
    let tally = simulation.run()?;
    println!("{tally}");
    Ok(())
}
