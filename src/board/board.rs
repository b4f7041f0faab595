//! Board structure: stone placement only, no game state

use std::fmt;

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE};

/// Game board holding one bitboard per color
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    /// White stones bitboard
    pub white: Bitboard,
    /// Black stones bitboard
    pub black: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            white: Bitboard::new(),
            black: Bitboard::new(),
        }
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Stone> {
        if self.white.get(pos) {
            Some(Stone::White)
        } else if self.black.get(pos) {
            Some(Stone::Black)
        } else {
            None
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.white.get(pos) && !self.black.get(pos)
    }

    /// Place a stone. The cell must be empty.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        debug_assert!(self.is_empty(pos), "cell {pos} is occupied");
        self.stones_mut(stone).set(pos);
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.white.clear(pos);
        self.black.clear(pos);
    }

    /// Get bitboard for a color
    #[inline]
    pub fn stones(&self, stone: Stone) -> &Bitboard {
        match stone {
            Stone::White => &self.white,
            Stone::Black => &self.black,
        }
    }

    #[inline]
    fn stones_mut(&mut self, stone: Stone) -> &mut Bitboard {
        match stone {
            Stone::White => &mut self.white,
            Stone::Black => &mut self.black,
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.white.count() + self.black.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.white.is_empty() && self.black.is_empty()
    }

    /// Cells holding a stone of either color
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.white.union(&self.black)
    }

    /// Check if every cell holds a stone
    #[inline]
    pub fn is_board_full(&self) -> bool {
        self.occupied().is_full()
    }
}

impl fmt::Display for Board {
    /// Rows are `y`, columns are `x`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for x in 0..BOARD_SIZE {
            write!(f, " {x}")?;
        }
        writeln!(f)?;

        for y in 0..BOARD_SIZE {
            write!(f, "{y}")?;
            for x in 0..BOARD_SIZE {
                let c = match self.get(Pos::new(x as u8, y as u8)) {
                    Some(Stone::White) => 'O',
                    Some(Stone::Black) => 'X',
                    None => '.',
                };
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
