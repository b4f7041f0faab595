//! Bitboard implementation for the 36-cell board

use super::{Pos, TOTAL_CELLS};

/// Mask of the 36 valid cell bits
const FULL_MASK: u64 = (1u64 << TOTAL_CELLS) - 1;

/// Bitboard representation of one color's stones.
/// A single u64 covers all 36 cells, bit index = `Pos::to_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard {
    bits: u64,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Set a bit at position
    #[inline]
    pub fn set(&mut self, pos: Pos) {
        self.bits |= 1u64 << pos.to_index();
    }

    /// Clear a bit at position
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.bits &= !(1u64 << pos.to_index());
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        self.bits & (1u64 << pos.to_index()) != 0
    }

    /// Count set bits
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// True when every cell is set
    #[inline]
    pub fn is_full(&self) -> bool {
        self.bits & FULL_MASK == FULL_MASK
    }

    /// Union of two bitboards
    #[inline]
    pub fn union(&self, other: &Bitboard) -> Bitboard {
        Bitboard {
            bits: self.bits | other.bits,
        }
    }

    /// Iterate over set positions, lowest index first
    pub fn iter_ones(&self) -> impl Iterator<Item = Pos> {
        let mut bits = self.bits;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let idx = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            Some(Pos::from_index(idx))
        })
    }
}
