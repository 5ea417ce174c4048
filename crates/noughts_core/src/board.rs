//! The 3x3 board, win detection and hypothetical-move probing.

use crate::line::{LINES, Line};
use crate::types::{Player, Square};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Rebuilds the board described by `key`.
    pub fn from_key(key: BoardKey) -> Self {
        let mut board = Self::new();
        for (index, symbol) in key.0.iter().enumerate() {
            board.squares[index] = match symbol {
                b'X' => Square::Occupied(Player::X),
                b'O' => Square::Occupied(Player::O),
                _ => Square::Empty,
            };
        }
        board
    }

    /// Gets the square at `index` (0-8).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a board index.
    pub fn get(&self, index: usize) -> Square {
        self.squares[index]
    }

    /// Sets the square at `index` (0-8).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a board index.
    pub fn set(&mut self, index: usize, square: Square) {
        self.squares[index] = square;
    }

    /// Checks if a square is empty. Indices off the board are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.squares.get(index), Some(Square::Empty))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Returns the first line held entirely by `player`, if any.
    #[instrument(level = "trace", skip(self))]
    pub fn has_won(&self, player: Player) -> Option<Line> {
        let mark = Square::Occupied(player);
        LINES
            .into_iter()
            .find(|line| line.cells().iter().all(|&i| self.squares[i] == mark))
    }

    /// Returns the line `player` would complete by moving on `index`.
    ///
    /// Returns `None` when the square is occupied or the move does not win.
    /// The probe runs on a copy, so the board is never modified.
    #[instrument(level = "trace", skip(self))]
    pub fn can_win(&self, player: Player, index: usize) -> Option<Line> {
        if !self.is_empty(index) {
            return None;
        }
        let mut probe = *self;
        probe.squares[index] = Square::Occupied(player);
        probe.has_won(player)
    }

    /// Returns the indices of all empty squares in ascending order.
    pub fn empty_squares(&self) -> Vec<usize> {
        (0..9).filter(|&i| self.squares[i] == Square::Empty).collect()
    }

    /// Encodes the board as an exact 9-cell key.
    pub fn to_key(&self) -> BoardKey {
        let mut cells = [b' '; 9];
        for (cell, square) in cells.iter_mut().zip(self.squares.iter()) {
            *cell = square.symbol() as u8;
        }
        BoardKey(cells)
    }
}

impl fmt::Display for Board {
    /// Formats the board as a grid, numbering empty squares 1-9.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(player) => write!(f, "{}", player.symbol())?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = KeyError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_key(text.parse()?))
    }
}

/// Exact encoding of a board: one of `' '`, `'X'`, `'O'` per cell in index order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardKey([u8; 9]);

impl BoardKey {
    /// Builds a key from a literal.
    ///
    /// Intended for constant tables: in a `const` context a malformed literal
    /// fails compilation.
    ///
    /// # Panics
    ///
    /// Panics if `text` is not 9 cells of `' '`, `'X'` or `'O'`.
    pub const fn from_literal(text: &str) -> Self {
        let bytes = text.as_bytes();
        assert!(bytes.len() == 9, "board key must have exactly 9 cells");
        let mut cells = [b' '; 9];
        let mut i = 0;
        while i < 9 {
            let b = bytes[i];
            assert!(
                b == b' ' || b == b'X' || b == b'O',
                "board key cells must be ' ', 'X' or 'O'"
            );
            cells[i] = b;
            i += 1;
        }
        Self(cells)
    }

    /// Returns the key as text.
    pub fn as_str(&self) -> &str {
        // Only ASCII symbols are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for BoardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for BoardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoardKey({:?})", self.as_str())
    }
}

impl FromStr for BoardKey {
    type Err = KeyError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let bytes = text.as_bytes();
        if bytes.len() != 9 {
            return Err(KeyError::new(format!(
                "expected 9 cells, found {}",
                text.chars().count()
            )));
        }
        let mut cells = [b' '; 9];
        for (index, &b) in bytes.iter().enumerate() {
            match b {
                b' ' | b'X' | b'O' => cells[index] = b,
                _ => {
                    return Err(KeyError::new(format!(
                        "unknown symbol at cell {}: {:?}",
                        index,
                        text.get(index..).and_then(|s| s.chars().next()).unwrap_or('?')
                    )));
                }
            }
        }
        Ok(Self(cells))
    }
}

/// Board key parse error.
#[derive(Debug, Clone, Display, Error)]
#[display("Board key error: {} at {}:{}", message, file, line)]
pub struct KeyError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl KeyError {
    /// Creates a new key error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
