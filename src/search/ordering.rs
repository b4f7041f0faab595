//! Static move ordering
//!
//! Every node tries the empty cells in the same order: the four cells
//! diagonal-adjacent to the center block first, then the rest of the inner
//! ring, the edge cells next to them, the center block, and the remaining
//! edge and corner cells last.

use crate::board::{Board, Pos, TOTAL_CELLS};

/// All 36 cells in search order
pub const MOVE_ORDER: [Pos; TOTAL_CELLS] = [
    Pos::new(1, 1),
    Pos::new(1, 4),
    Pos::new(4, 1),
    Pos::new(4, 4),
    Pos::new(1, 2),
    Pos::new(1, 3),
    Pos::new(2, 1),
    Pos::new(2, 4),
    Pos::new(3, 1),
    Pos::new(3, 4),
    Pos::new(4, 2),
    Pos::new(4, 3),
    Pos::new(0, 1),
    Pos::new(0, 4),
    Pos::new(1, 0),
    Pos::new(1, 5),
    Pos::new(4, 0),
    Pos::new(4, 5),
    Pos::new(5, 1),
    Pos::new(5, 4),
    Pos::new(2, 2),
    Pos::new(2, 3),
    Pos::new(3, 2),
    Pos::new(3, 3),
    Pos::new(0, 0),
    Pos::new(0, 2),
    Pos::new(0, 3),
    Pos::new(0, 5),
    Pos::new(2, 0),
    Pos::new(2, 5),
    Pos::new(3, 0),
    Pos::new(3, 5),
    Pos::new(5, 0),
    Pos::new(5, 2),
    Pos::new(5, 3),
    Pos::new(5, 5),
];

/// Empty cells of `board` in search order
pub fn ordered_moves(board: &Board) -> impl Iterator<Item = Pos> + '_ {
    MOVE_ORDER.iter().copied().filter(move |&pos| board.is_empty(pos))
}
