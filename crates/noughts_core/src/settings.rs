//! Session settings: who controls each mark and how strong the computer is.

use crate::difficulty::Difficulty;
use crate::types::{PerPlayer, Player, Seat};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::instrument;

/// Default delay before a computer move lands.
pub const DEFAULT_THINK_TIME: Duration = Duration::from_secs(1);

/// User-configurable settings held for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Player or Computer, per mark.
    pub seats: PerPlayer<Seat>,
    /// Computer strength, per mark.
    pub difficulties: PerPlayer<Difficulty>,
    /// Delay between the computer's turn starting and its move.
    pub think_time: Duration,
}

impl SessionSettings {
    /// Creates settings with defaults: computer X, human O, both Easy.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Both marks played by people.
    pub fn two_players() -> Self {
        Self {
            seats: PerPlayer::new(Seat::Human, Seat::Human),
            ..Self::default()
        }
    }

    /// Both marks played by the computer at the given tiers.
    pub fn computer_vs_computer(x: Difficulty, o: Difficulty) -> Self {
        Self {
            seats: PerPlayer::new(Seat::Computer, Seat::Computer),
            difficulties: PerPlayer::new(x, o),
            ..Self::default()
        }
    }

    /// Returns a copy with a different think time.
    pub fn with_think_time(mut self, think_time: Duration) -> Self {
        self.think_time = think_time;
        self
    }

    /// Returns the seat of `player`.
    pub fn seat(&self, player: Player) -> Seat {
        self.seats[player]
    }

    /// Returns the difficulty of `player`.
    pub fn difficulty(&self, player: Player) -> Difficulty {
        self.difficulties[player]
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            seats: PerPlayer::new(Seat::Computer, Seat::Human),
            difficulties: PerPlayer::new(Difficulty::Easy, Difficulty::Easy),
            think_time: DEFAULT_THINK_TIME,
        }
    }
}
