//! Zobrist hashing for position identification
//!
//! Keys are updated in O(1) per placed or removed stone and index the
//! transposition table.
//!
//! A position's key is the side key of the color to move XORed with the
//! cell key of every stone on the board. Each move toggles both side keys,
//! so the key alternates between the two side keys as the turn passes.
//!
//! # Example
//!
//! ```
//! use penta::board::{Board, Pos, Stone};
//! use penta::search::ZobristKeys;
//!
//! let keys = ZobristKeys::seeded(0xC0FFEE);
//! let mut board = Board::new();
//!
//! // Compute initial hash
//! let hash1 = keys.hash(&board, Stone::White);
//!
//! // Place a stone and compute new hash
//! let pos = Pos::new(2, 3);
//! board.place_stone(pos, Stone::White);
//! let hash2 = keys.hash(&board, Stone::Black);
//!
//! // Incremental update is equivalent to full recomputation
//! assert_eq!(keys.update_move(hash1, pos, Stone::White), hash2);
//! ```

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::board::{Board, Pos, Stone, TOTAL_CELLS};

/// Zobrist keys for the 6x6 board.
///
/// Immutable once built. Positions share one set of keys through an `Arc`
/// so that equal positions hash equally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZobristKeys {
    /// Random values for white stones at each cell
    white: [u64; TOTAL_CELLS],
    /// Random values for black stones at each cell
    black: [u64; TOTAL_CELLS],
    /// Side key present while White is to move
    white_to_move: u64,
    /// Side key present while Black is to move
    black_to_move: u64,
}

impl ZobristKeys {
    /// Build keys deterministically from `seed`.
    ///
    /// Same seed = same keys = reproducible hashes and table behaviour.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

        let white_to_move = rng.random::<u64>();
        let black_to_move = rng.random::<u64>();

        let mut white = [0u64; TOTAL_CELLS];
        let mut black = [0u64; TOTAL_CELLS];
        for i in 0..TOTAL_CELLS {
            white[i] = rng.random::<u64>();
            black[i] = rng.random::<u64>();
        }

        Self {
            white,
            black,
            white_to_move,
            black_to_move,
        }
    }

    /// Build keys from a seed drawn from the thread-local generator.
    #[must_use]
    pub fn random() -> Self {
        Self::seeded(rand::random::<u64>())
    }

    /// Side-to-move key
    #[inline]
    pub fn side(&self, stone: Stone) -> u64 {
        match stone {
            Stone::White => self.white_to_move,
            Stone::Black => self.black_to_move,
        }
    }

    /// Key for a stone of `stone` at `pos`
    #[inline]
    pub fn cell(&self, pos: Pos, stone: Stone) -> u64 {
        match stone {
            Stone::White => self.white[pos.to_index()],
            Stone::Black => self.black[pos.to_index()],
        }
    }

    /// Incrementally update hash for `stone` placed at or removed from `pos`.
    ///
    /// XOR is its own inverse, so the same call serves play and undo.
    /// Both side keys are toggled, passing the turn.
    #[inline]
    #[must_use]
    pub fn update_move(&self, hash: u64, pos: Pos, stone: Stone) -> u64 {
        hash ^ self.white_to_move ^ self.black_to_move ^ self.cell(pos, stone)
    }

    /// Compute the full hash for a board position.
    ///
    /// This iterates over all stones on the board. During search the
    /// position keeps its key up to date with `update_move` instead.
    #[must_use]
    pub fn hash(&self, board: &Board, to_move: Stone) -> u64 {
        let mut h = self.side(to_move);

        for pos in board.white.iter_ones() {
            h ^= self.white[pos.to_index()];
        }
        for pos in board.black.iter_ones() {
            h ^= self.black[pos.to_index()];
        }

        h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zobrist_empty_board() {
        let keys = ZobristKeys::seeded(1);
        let board = Board::new();

        let hash_white = keys.hash(&board, Stone::White);
        let hash_black = keys.hash(&board, Stone::Black);

        // Different side to move = different hash
        assert_ne!(hash_white, hash_black);
        assert_eq!(hash_white, keys.white_to_move);
        assert_eq!(hash_black, keys.black_to_move);
    }

    #[test]
    fn test_zobrist_deterministic() {
        let a = ZobristKeys::seeded(1234);
        let b = ZobristKeys::seeded(1234);
        let c = ZobristKeys::seeded(4321);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_zobrist_random_differs() {
        // Two random draws colliding on every key is not a realistic outcome.
        assert_ne!(ZobristKeys::random(), ZobristKeys::random());
    }

    #[test]
    fn test_zobrist_keys_distinct() {
        let keys = ZobristKeys::seeded(77);
        let mut all: Vec<u64> = keys.white.iter().chain(keys.black.iter()).copied().collect();
        all.push(keys.white_to_move);
        all.push(keys.black_to_move);

        let len = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), len);
    }

    #[test]
    fn test_zobrist_incremental() {
        let keys = ZobristKeys::seeded(8);
        let mut board = Board::new();
        let pos = Pos::new(4, 1);

        let hash1 = keys.hash(&board, Stone::White);
        board.place_stone(pos, Stone::White);
        let hash2 = keys.hash(&board, Stone::Black);

        assert_eq!(keys.update_move(hash1, pos, Stone::White), hash2);
    }

    #[test]
    fn test_zobrist_undo() {
        let keys = ZobristKeys::seeded(9);
        let pos = Pos::new(0, 3);
        let hash = keys.hash(&Board::new(), Stone::White);

        let played = keys.update_move(hash, pos, Stone::White);
        assert_ne!(played, hash);
        assert_eq!(keys.update_move(played, pos, Stone::White), hash);
    }

    #[test]
    fn test_zobrist_same_position_different_path() {
        let keys = ZobristKeys::seeded(10);
        let start = keys.hash(&Board::new(), Stone::White);
        let (w1, b1, w2, b2) = (Pos::new(0, 0), Pos::new(5, 5), Pos::new(2, 3), Pos::new(3, 2));

        let path1 = [(w1, Stone::White), (b1, Stone::Black), (w2, Stone::White), (b2, Stone::Black)];
        let path2 = [(w2, Stone::White), (b2, Stone::Black), (w1, Stone::White), (b1, Stone::Black)];

        let h1 = path1.iter().fold(start, |h, &(p, s)| keys.update_move(h, p, s));
        let h2 = path2.iter().fold(start, |h, &(p, s)| keys.update_move(h, p, s));
        assert_eq!(h1, h2);

        let mut board = Board::new();
        for &(p, s) in &path1 {
            board.place_stone(p, s);
        }
        assert_eq!(h1, keys.hash(&board, Stone::White));
    }
}
