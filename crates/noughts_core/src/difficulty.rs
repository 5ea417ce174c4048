//! Computer difficulty tiers.

use crate::board::Board;
use crate::strategy;
use crate::types::Player;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Strength of a computer-controlled mark.
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
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    /// Random empty square.
    #[default]
    Easy,
    /// Wins when it can, otherwise random.
    Medium,
    /// Wins, blocks, then prefers centre, corners, edges.
    Hard,
    /// Wins, blocks, then follows the response table.
    Expert,
}

impl Difficulty {
    /// Next stronger tier, wrapping around.
    pub fn next(self) -> Difficulty {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Expert,
            Difficulty::Expert => Difficulty::Easy,
        }
    }

    /// Next weaker tier, wrapping around.
    pub fn prev(self) -> Difficulty {
        match self {
            Difficulty::Easy => Difficulty::Expert,
            Difficulty::Medium => Difficulty::Easy,
            Difficulty::Hard => Difficulty::Medium,
            Difficulty::Expert => Difficulty::Hard,
        }
    }

    /// Chooses a move for `player` using this tier's policy.
    ///
    /// # Panics
    ///
    /// Panics if the board has no empty square.
    #[instrument(skip(board, rng), fields(key = %board.to_key()))]
    pub fn choose_move<R: Rng + ?Sized>(self, board: &Board, player: Player, rng: &mut R) -> usize {
        assert!(
            !board.is_full(),
            "a move was requested for {player} on a full board"
        );
        let index = match self {
            Difficulty::Easy => strategy::easy(board, rng),
            Difficulty::Medium => strategy::medium(board, player, rng),
            Difficulty::Hard => strategy::hard(board, player, rng),
            Difficulty::Expert => strategy::expert(board, player, rng),
        };
        debug!(index, "Computer chose square");
        index
    }
}
