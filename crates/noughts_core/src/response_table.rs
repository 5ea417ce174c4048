//! Hard-coded best responses for the Expert tier.
//!
//! Each table maps exact boards to the square the mover should take. The
//! entries assume the mover has already checked for a win and a block, and
//! that every earlier move on the board came from these same rules. Boards
//! missing from a table are ones where every continuation ties, or ones only a
//! human opponent can reach; those fall back to a random empty square.

use crate::board::{Board, BoardKey};
use crate::strategy::random_square;
use crate::types::Player;
use rand::Rng;
use tracing::{debug, instrument};

/// Boards sharing one response square.
#[derive(Debug, Clone, Copy)]
pub struct Response {
    /// Square to play.
    pub square: usize,
    /// Boards on which to play it.
    pub boards: &'static [BoardKey],
}

const fn key(text: &str) -> BoardKey {
    BoardKey::from_literal(text)
}

/// Responses when X is to move.
pub const X_RESPONSES: &[Response] = &[
    Response {
        square: 0,
        boards: &[key("         ")],
    },
    Response {
        square: 1,
        boards: &[key("X  O     "), key("X   O    "), key("X     O  ")],
    },
    Response {
        square: 2,
        boards: &[key("X      O "), key("X       O")],
    },
    Response {
        square: 3,
        boards: &[key("XO       "), key("X O      ")],
    },
    Response {
        square: 4,
        boards: &[key("X    O   "), key("XO X  O  "), key("XXOO     ")],
    },
    Response {
        square: 6,
        boards: &[key("XOX     O")],
    },
];

/// Responses when O is to move.
pub const O_RESPONSES: &[Response] = &[
    Response {
        square: 0,
        boards: &[
            key("    X    "),
            key(" X  OX   "),
            key(" X  O  X "),
            key("   XOX   "),
            key("   XO  X "),
        ],
    },
    Response {
        square: 1,
        boards: &[
            key("X   O   X"),
            key("  X O X  "),
            key("   XO   X"),
            key("    OXX  "),
            key("X  OOXX  "),
            key("  XXOO  X"),
            key("O  XXO  X"),
        ],
    },
    Response {
        square: 2,
        boards: &[key(" X XO    "), key("O   X   X"), key("    OX X ")],
    },
    Response {
        square: 3,
        boards: &[
            key(" X  O   X"),
            key("  X O  X "),
            key("XOX O  X "),
            key("OX  X  OX"),
            key(" X  OXXX "),
            key(" X  O XOX"),
        ],
    },
    Response {
        square: 4,
        boards: &[
            key("X        "),
            key(" X       "),
            key("  X      "),
            key("   X     "),
            key("     X   "),
            key("      X  "),
            key("       X "),
            key("        X"),
        ],
    },
    Response {
        square: 5,
        boards: &[key("X   O  X "), key(" X  O X  ")],
    },
    Response {
        square: 7,
        boards: &[key("X   OX   "), key("  XXO    ")],
    },
];

/// Returns the table for the mark to move.
pub fn responses_for(player: Player) -> &'static [Response] {
    match player {
        Player::X => X_RESPONSES,
        Player::O => O_RESPONSES,
    }
}

/// Looks up the listed response for `player` on `board`.
pub fn lookup(board: &Board, player: Player) -> Option<usize> {
    let key = board.to_key();
    responses_for(player)
        .iter()
        .find(|response| response.boards.contains(&key))
        .map(|response| response.square)
}

/// Listed response, or a random empty square for unlisted boards.
#[instrument(level = "debug", skip(board, rng), fields(key = %board.to_key()))]
pub fn best_response<R: Rng + ?Sized>(board: &Board, player: Player, rng: &mut R) -> usize {
    match lookup(board, player) {
        Some(square) => {
            debug!(square, "Response table hit");
            square
        }
        None => {
            debug!("Board not in response table, choosing randomly");
            random_square(&board.empty_squares(), rng)
        }
    }
}
