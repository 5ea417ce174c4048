//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use tracing::instrument;

/// Player mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the mark that moves on the given turn (X on odd turns).
    pub fn for_turn(turn: u32) -> Self {
        if turn % 2 == 1 { Player::X } else { Player::O }
    }

    /// Symbol used in board keys and displays.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Symbol used in board keys: a space for empty squares.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(player) => player.symbol(),
        }
    }
}

/// Who controls a mark during a session.
///
/// Defaults to [`Seat::Human`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Seat {
    /// Moves come from input events.
    #[default]
    #[serde(alias = "player")]
    #[strum(to_string = "human", serialize = "player")]
    Human,
    /// Moves come from the difficulty strategy.
    Computer,
}

impl Seat {
    /// Returns the display label for this seat.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::Human => "Player",
            Self::Computer => "Computer",
        }
    }

    /// Toggles between `Human` and `Computer`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Human => Self::Computer,
            Self::Computer => Self::Human,
        }
    }
}

/// A value held once per mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PerPlayer<T> {
    /// Value for X.
    pub x: T,
    /// Value for O.
    pub o: T,
}

impl<T> PerPlayer<T> {
    /// Creates a pair from the X and O values.
    pub fn new(x: T, o: T) -> Self {
        Self { x, o }
    }
}

impl<T> Index<Player> for PerPlayer<T> {
    type Output = T;

    fn index(&self, player: Player) -> &T {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }
}

impl<T> IndexMut<Player> for PerPlayer<T> {
    fn index_mut(&mut self, player: Player) -> &mut T {
        match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        }
    }
}
