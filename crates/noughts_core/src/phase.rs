//! Session phases and the input events that move between them.

use crate::difficulty::Difficulty;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Where the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Title screen.
    #[default]
    Menu,
    /// Choosing Player or Computer for each mark.
    PlayerSelect,
    /// Choosing the difficulty of a computer-seated mark.
    DifficultySelect(Player),
    /// A game is running.
    Playing,
    /// The game ended with a line for this mark.
    Won(Player),
    /// The board filled up without a line.
    Tie,
}

impl Phase {
    /// Checks if a finished game is on screen.
    pub fn is_game_over(self) -> bool {
        matches!(self, Phase::Won(_) | Phase::Tie)
    }

    /// Title shown for this phase.
    pub fn title(self) -> String {
        match self {
            Phase::Menu => "Tic-Tac-Toe".to_string(),
            Phase::PlayerSelect | Phase::DifficultySelect(_) => "Player Select".to_string(),
            Phase::Playing => "Tic-Tac-Toe".to_string(),
            Phase::Won(player) => format!("{player} Wins!"),
            Phase::Tie => "Tie".to_string(),
        }
    }
}

/// Discrete input events from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Input {
    /// "Play" on the title screen.
    SelectMenuAction,
    /// Flip a mark between Player and Computer.
    ToggleSeat(Player),
    /// Pick the difficulty for a mark on its difficulty screen.
    SetDifficulty(Player, Difficulty),
    /// "Continue" or "Play" on a selection screen.
    ConfirmSelection,
    /// A board square was chosen.
    CellTapped(usize),
    /// Start a new game with the same settings.
    PlayAgain,
    /// Back to the title screen.
    ReturnToMenu,
}

/// Whether the controller acted on an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum InputOutcome {
    /// The input changed the session.
    Applied,
    /// The input was not legal in the current phase and was dropped.
    Ignored,
}
