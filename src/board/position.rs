//! Mutable game position with incremental hash and outcome tracking
//!
//! A single [`Position`] is shared by a whole search traversal: the search
//! plays a move, recurses, and undoes the move on the way back. The Zobrist
//! key and the outcome are updated incrementally so both operations are O(1)
//! apart from the line check through the placed stone.
//!
//! # Example
//!
//! ```
//! use penta::board::{Outcome, Pos, Position, Stone};
//!
//! let mut position = Position::seeded(7);
//! let key = position.hash_key();
//!
//! position.play(Pos::new(2, 2));
//! assert_eq!(position.color_to_move(), Stone::Black);
//!
//! position.undo(Pos::new(2, 2));
//! assert_eq!(position.hash_key(), key);
//! assert_eq!(position.outcome(), Outcome::Undecided);
//! ```

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use thiserror::Error;

use super::{Board, Outcome, Pos, Stone, TOTAL_CELLS};
use crate::rules::{has_five_at_pos, has_five_in_row};
use crate::search::ZobristKeys;

/// Error returned by [`Position::try_play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("cell {0} is already occupied")]
    Occupied(Pos),
    #[error("the game is already over ({0:?})")]
    GameOver(Outcome),
}

/// Board plus side to move, outcome and incremental Zobrist key.
#[derive(Debug, Clone)]
pub struct Position {
    board: Board,
    stones: u8,
    to_move: Stone,
    outcome: Outcome,
    key: u64,
    keys: Arc<ZobristKeys>,
}

impl Position {
    /// Empty position hashed with the given keys. White moves first.
    pub fn new(keys: Arc<ZobristKeys>) -> Self {
        Self {
            board: Board::new(),
            stones: 0,
            to_move: Stone::White,
            outcome: Outcome::Undecided,
            key: keys.side(Stone::White),
            keys,
        }
    }

    /// Empty position with deterministic keys derived from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Arc::new(ZobristKeys::seeded(seed)))
    }

    #[inline]
    pub fn can_play(&self, pos: Pos) -> bool {
        self.board.is_empty(pos)
    }

    /// Place the mover's stone at `pos` and pass the turn.
    ///
    /// The cell must be empty; this is only checked in debug builds.
    pub fn play(&mut self, pos: Pos) {
        debug_assert!(self.can_play(pos), "play on occupied cell {pos}");
        let stone = self.to_move;

        self.board.place_stone(pos, stone);
        self.stones += 1;
        self.outcome = self.compute_outcome(pos, stone);
        self.key = self.keys.update_move(self.key, pos, stone);
        self.to_move = stone.opponent();
    }

    /// Take back the stone at `pos`.
    ///
    /// `pos` must be the most recent move still on the board.
    pub fn undo(&mut self, pos: Pos) {
        self.to_move = self.to_move.opponent();
        debug_assert_eq!(self.board.get(pos), Some(self.to_move), "undo of {pos}");

        self.board.remove_stone(pos);
        self.stones -= 1;
        self.outcome = Outcome::Undecided;
        self.key = self.keys.update_move(self.key, pos, self.to_move);
    }

    /// Play `pos` and return a guard that undoes it when dropped.
    ///
    /// The guard dereferences to the position, so it can be handed to
    /// anything expecting `&mut Position`. The move is taken back on every
    /// exit path, including a panic unwinding through the caller.
    pub fn play_scoped(&mut self, pos: Pos) -> PlayedMove<'_> {
        self.play(pos);
        PlayedMove {
            position: self,
            pos,
        }
    }

    /// Checked variant of [`play`](Self::play) for external callers.
    pub fn try_play(&mut self, pos: Pos) -> Result<(), PlayError> {
        if self.is_decided() {
            return Err(PlayError::GameOver(self.outcome));
        }
        if !self.can_play(pos) {
            return Err(PlayError::Occupied(pos));
        }
        self.play(pos);
        Ok(())
    }

    fn compute_outcome(&self, pos: Pos, stone: Stone) -> Outcome {
        debug_assert_eq!(self.board.is_board_full(), self.is_full());
        debug_assert!(
            !has_five_in_row(&self.board, stone.opponent()),
            "play after {:?} already completed a line",
            stone.opponent()
        );

        if has_five_at_pos(&self.board, pos, stone) {
            Outcome::win(stone)
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::Undecided
        }
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stones as usize == TOTAL_CELLS
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stones == 0
    }

    #[inline]
    pub fn is_decided(&self) -> bool {
        self.outcome != Outcome::Undecided
    }

    #[inline]
    pub fn color_to_move(&self) -> Stone {
        self.to_move
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    pub fn hash_key(&self) -> u64 {
        self.key
    }

    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.stones as u32
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Stone> {
        self.board.get(pos)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Keys this position is hashed with
    #[inline]
    pub fn keys(&self) -> &Arc<ZobristKeys> {
        &self.keys
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(Arc::new(ZobristKeys::random()))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        match self.outcome {
            Outcome::Undecided => writeln!(f, "{:?} to move", self.to_move),
            outcome => writeln!(f, "{outcome:?}"),
        }
    }
}

/// A move played through [`Position::play_scoped`], undone on drop.
#[derive(Debug)]
pub struct PlayedMove<'a> {
    position: &'a mut Position,
    pos: Pos,
}

impl PlayedMove<'_> {
    /// The cell that was played
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for PlayedMove<'_> {
    type Target = Position;

    fn deref(&self) -> &Position {
        self.position
    }
}

impl DerefMut for PlayedMove<'_> {
    fn deref_mut(&mut self) -> &mut Position {
        self.position
    }
}

impl Drop for PlayedMove<'_> {
    fn drop(&mut self) {
        self.position.undo(self.pos);
    }
}
