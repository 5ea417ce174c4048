//! Move selection for each difficulty tier.
//!
//! Every policy is a pure function of the board, the mover and the injected
//! random source. Callers guarantee at least one empty square; see
//! [`Difficulty::choose_move`](crate::Difficulty::choose_move).

use crate::board::Board;
use crate::response_table;
use crate::types::Player;
use rand::Rng;
use tracing::{instrument, trace};

/// Centre, corners and edges, in order of preference.
const POSITIONAL_GROUPS: [&[usize]; 3] = [&[4], &[0, 2, 6, 8], &[1, 3, 5, 7]];

/// Uniformly random empty square.
#[instrument(level = "trace", skip_all)]
pub fn easy<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> usize {
    random_square(&board.empty_squares(), rng)
}

/// Completes a line when possible, otherwise plays like [`easy`].
#[instrument(level = "trace", skip(board, rng))]
pub fn medium<R: Rng + ?Sized>(board: &Board, player: Player, rng: &mut R) -> usize {
    winning_square(board, player).unwrap_or_else(|| easy(board, rng))
}

/// Wins, then blocks, then prefers the centre, a corner, an edge.
#[instrument(level = "trace", skip(board, rng))]
pub fn hard<R: Rng + ?Sized>(board: &Board, player: Player, rng: &mut R) -> usize {
    win_or_block(board, player).unwrap_or_else(|| positional_square(board, rng))
}

/// Random empty square from the first preferred group with one open.
///
/// With the centre and every corner filled a diagonal is always complete or
/// an edge is a win-in-one, so [`hard`] never gets as far as the edges.
fn positional_square<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> usize {
    let empty = board.empty_squares();
    for group in POSITIONAL_GROUPS {
        let open: Vec<usize> = group.iter().copied().filter(|i| empty.contains(i)).collect();
        if !open.is_empty() {
            trace!(?open, "Positional group");
            return random_square(&open, rng);
        }
    }
    // Unreachable while the board has an empty square.
    random_square(&empty, rng)
}

/// Wins, then blocks, then takes a forced last square, then consults the
/// response table.
#[instrument(level = "trace", skip(board, rng))]
pub fn expert<R: Rng + ?Sized>(board: &Board, player: Player, rng: &mut R) -> usize {
    if let Some(index) = win_or_block(board, player) {
        return index;
    }

    let empty = board.empty_squares();
    if let [only] = empty.as_slice() {
        return *only;
    }

    response_table::best_response(board, player, rng)
}

/// First square (lowest index) where `player` completes a line.
pub fn winning_square(board: &Board, player: Player) -> Option<usize> {
    (0..9).find(|&i| board.can_win(player, i).is_some())
}

/// Own win-in-one first, then the square that stops the opponent's.
fn win_or_block(board: &Board, player: Player) -> Option<usize> {
    winning_square(board, player).or_else(|| winning_square(board, player.opponent()))
}

/// Uniform choice from a non-empty slice.
pub(crate) fn random_square<R: Rng + ?Sized>(squares: &[usize], rng: &mut R) -> usize {
    squares[rng.random_range(0..squares.len())]
}
