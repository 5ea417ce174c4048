//! Noughts core - tic-tac-toe rules, tiered computer opponents and the
//! session state machine.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid, win detection and the `can_win` probe
//! - **Strategies**: Easy, Medium, Hard and Expert move selection
//! - **Response table**: hard-coded Expert replies keyed by exact boards
//! - **Controller**: turn order, results and the menu-to-game phase machine
//!
//! The crate owns no presentation. A front end feeds [`Input`] events to a
//! [`Controller`], calls [`Controller::tick`] every frame and draws what the
//! query methods report.
//!
//! # Example
//!
//! ```
//! use noughts_core::{Board, Difficulty, Player};
//! use rand::SeedableRng;
//!
//! let board: Board = "X  O     ".parse().unwrap();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//! assert_eq!(Difficulty::Expert.choose_move(&board, Player::X, &mut rng), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod controller;
mod difficulty;
mod line;
mod phase;
pub mod response_table;
mod settings;
pub mod strategy;
mod types;

pub use board::{Board, BoardKey, KeyError};
pub use controller::Controller;
pub use difficulty::Difficulty;
pub use line::{LINES, Line};
pub use phase::{Input, InputOutcome, Phase};
pub use settings::{DEFAULT_THINK_TIME, SessionSettings};
pub use types::{PerPlayer, Player, Seat, Square};
