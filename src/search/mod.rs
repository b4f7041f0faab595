//! Search module for the connect-five engine
//!
//! Contains:
//! - Zobrist hashing for position identification
//! - Transposition table for caching search results
//! - Static move ordering
//! - Alpha-Beta search with iterative deepening and aspiration windows

pub mod alphabeta;
pub mod ordering;
pub mod tt;
pub mod zobrist;

pub use alphabeta::{SearchStats, Searcher, ASPIRATION_WINDOW, DEFAULT_DEPTH};
pub use ordering::{ordered_moves, MOVE_ORDER};
pub use tt::{EntryType, TTEntry, TTStats, TranspositionTable, DEFAULT_CAPACITY};
pub use zobrist::ZobristKeys;
