//! Win condition checking: five or more collinear stones of one color
//!
//! Overlines (six in a row) also win.

use crate::board::{Board, Pos, Stone, LINE_LENGTH};

/// Direction vectors for line checking (4 directions)
/// Each line is scanned both ways from the placed stone.
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Vertical (along y)
    (1, 0),  // Horizontal (along x)
    (1, 1),  // Diagonal
    (1, -1), // Anti-diagonal
];

/// Length of the run of `color` stones through `pos` along `(dx, dy)`.
///
/// `pos` itself counts as one stone of `color` whether or not it is set.
#[inline]
pub fn line_length_at_pos(board: &Board, pos: Pos, color: Stone, dx: i32, dy: i32) -> usize {
    let mut count = 1;
    for sign in [1, -1] {
        let mut next = pos.offset(dx * sign, dy * sign);
        while let Some(p) = next {
            if board.get(p) != Some(color) {
                break;
            }
            count += 1;
            next = p.offset(dx * sign, dy * sign);
        }
    }
    count
}

/// Fast five-in-a-row check at a specific position.
///
/// Only checks the 4 lines through `pos`. No allocation.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, color: Stone) -> bool {
    DIRECTIONS
        .iter()
        .any(|&(dx, dy)| line_length_at_pos(board, pos, color, dx, dy) >= LINE_LENGTH)
}

/// Check if there's 5+ in a row anywhere for the given color
pub fn has_five_in_row(board: &Board, color: Stone) -> bool {
    board
        .stones(color)
        .iter_ones()
        .any(|pos| has_five_at_pos(board, pos, color))
}
