//! The eight winning lines of the board.

use serde::{Deserialize, Serialize};

/// Three board indices that win when held by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([usize; 3]);

impl Line {
    /// Returns the three indices of this line.
    pub fn cells(self) -> [usize; 3] {
        self.0
    }
}

/// All lines in reporting order: rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    Line([0, 1, 2]),
    Line([3, 4, 5]),
    Line([6, 7, 8]),
    // Columns
    Line([0, 3, 6]),
    Line([1, 4, 7]),
    Line([2, 5, 8]),
    // Diagonals
    Line([0, 4, 8]),
    Line([2, 4, 6]),
];
