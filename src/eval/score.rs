//! Score constants for evaluation and search
//!
//! All scores are from the point of view of the side to move.

use crate::board::{Pos, BOARD_SIZE};

/// Score constants
pub struct Score;

impl Score {
    /// Side to move has won
    pub const WIN: i32 = 100_000;
    /// Side to move has lost
    pub const LOSE: i32 = -100_000;
    /// Drawn or perfectly balanced position
    pub const DRAW: i32 = 0;

    /// Bonus for having the move
    pub const TEMPO: i32 = 15;
    /// Positional unit; also the aspiration window width
    pub const POSITION: i32 = 10;
    /// Bonus per same-color neighbour of a stone
    pub const POSITION_CONNECTION: i32 = 3;

    /// Center-biased positional weights, symmetric in both axes
    pub const POSITION_WEIGHTS: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
        [5, 10, 5, 5, 10, 5],
        [10, 15, 12, 12, 15, 10],
        [5, 12, 7, 7, 12, 5],
        [5, 12, 7, 7, 12, 5],
        [10, 15, 12, 12, 15, 10],
        [5, 10, 5, 5, 10, 5],
    ];

    /// Positional weight of a cell
    #[inline]
    pub fn position(pos: Pos) -> i32 {
        Self::POSITION_WEIGHTS[pos.x as usize][pos.y as usize]
    }
}
