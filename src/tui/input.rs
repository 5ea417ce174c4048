//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Moves the board cursor (a square index, 0-8) based on arrow keys.
///
/// The cursor stops at the edges of the grid.
pub fn move_cursor(cursor: usize, key: KeyCode) -> usize {
    let (row, col) = (cursor / 3, cursor % 3);
    match key {
        KeyCode::Right if col < 2 => cursor + 1,
        KeyCode::Left if col > 0 => cursor - 1,
        KeyCode::Down if row < 2 => cursor + 3,
        KeyCode::Up if row > 0 => cursor - 3,
        _ => cursor,
    }
}

/// Maps the digits 1-9 to squares, numbered as on a phone keypad.
pub fn digit_square(c: char) -> Option<usize> {
    match c.to_digit(10) {
        Some(digit @ 1..=9) => Some(digit as usize - 1),
        _ => None,
    }
}
