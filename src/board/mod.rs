//! Board representation for the 6x6 connect-five game

pub mod bitboard;
pub mod board;
pub mod position;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::eval::Score;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;
pub use position::{PlayError, PlayedMove, Position};

/// Board size (6x6)
pub const BOARD_SIZE: usize = 6;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 36

/// Number of collinear stones that wins the game
pub const LINE_LENGTH: usize = 5;

/// Stone colors. White moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    White,
    Black,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::White => Stone::Black,
            Stone::Black => Stone::White,
        }
    }
}

/// Result of the game as seen after the most recent move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    WhiteWin,
    BlackWin,
    Draw,
    Undecided,
}

impl Outcome {
    /// Outcome for a line completed by `stone`.
    #[inline]
    pub fn win(stone: Stone) -> Outcome {
        match stone {
            Stone::White => Outcome::WhiteWin,
            Stone::Black => Outcome::BlackWin,
        }
    }

    /// Score of a finished game from `stone`'s point of view.
    ///
    /// Returns `None` while the game is still undecided.
    #[inline]
    pub fn score_for(self, stone: Stone) -> Option<i32> {
        match (self, stone) {
            (Outcome::WhiteWin, Stone::White) | (Outcome::BlackWin, Stone::Black) => {
                Some(Score::WIN)
            }
            (Outcome::WhiteWin, Stone::Black) | (Outcome::BlackWin, Stone::White) => {
                Some(Score::LOSE)
            }
            (Outcome::Draw, _) => Some(Score::DRAW),
            (Outcome::Undecided, _) => None,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    #[inline]
    pub const fn new(x: u8, y: u8) -> Self {
        debug_assert!((x as usize) < BOARD_SIZE && (y as usize) < BOARD_SIZE);
        Self { x, y }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.x as usize * BOARD_SIZE + self.y as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            x: (idx / BOARD_SIZE) as u8,
            y: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(x: i32, y: i32) -> bool {
        x >= 0 && x < BOARD_SIZE as i32 && y >= 0 && y < BOARD_SIZE as i32
    }

    /// Neighbouring position `(x + dx, y + dy)` if it lies on the board.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Pos> {
        let x = self.x as i32 + dx;
        let y = self.y as i32 + dy;
        if Pos::is_valid(x, y) {
            Some(Pos::new(x as u8, y as u8))
        } else {
            None
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Error returned when a coordinate string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePosError {
    #[error("expected a coordinate of the form `x,y`, got `{0}`")]
    Format(String),
    #[error("invalid coordinate `{0}`")]
    Coordinate(String),
    #[error("coordinate ({x}, {y}) is outside the {size}x{size} board", size = BOARD_SIZE)]
    OutOfBounds { x: i64, y: i64 },
}

impl FromStr for Pos {
    type Err = ParsePosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| ParsePosError::Format(s.to_string()))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<i64>()
                .map_err(|_| ParsePosError::Coordinate(part.trim().to_string()))
        };
        let (x, y) = (parse(x)?, parse(y)?);

        if !(0..BOARD_SIZE as i64).contains(&x) || !(0..BOARD_SIZE as i64).contains(&y) {
            return Err(ParsePosError::OutOfBounds { x, y });
        }
        Ok(Pos::new(x as u8, y as u8))
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
