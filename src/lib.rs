//! Noughts - tic-tac-toe with tiered computer opponents.
//!
//! The game rules and opponents live in [`noughts_core`]; this crate is the
//! application shell around them.
//!
//! # Architecture
//!
//! - **Config**: TOML settings for seats, difficulties, think time and logging
//! - **Simulate**: headless computer-vs-computer batches with a result tally
//! - **TUI**: the terminal front end driving a [`noughts_core::Controller`]
//!
//! # Example
//!
//! ```no_run
//! use noughts::{Simulation, Difficulty};
//!
//! # fn example() -> anyhow::Result<()> {
//! let tally = Simulation::new(Difficulty::Hard, Difficulty::Easy, 50, Some(7)).run()?;
//! println!("{tally}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod simulate;
mod tui;

pub use config::{AppConfig, ConfigError, MarkConfig};
pub use simulate::{Simulation, Tally};
pub use tui::run_tui;

pub use noughts_core::{Difficulty, Player, Seat, SessionSettings};
