//! Connect-five position evaluator for a 6x6 board
//!
//! Two players, White and Black, alternately place stones on any empty cell
//! of a 6x6 grid. White moves first. The first player with five of their own
//! stones in a row (horizontal, vertical or diagonal) wins; a full board with
//! no line of five is a draw.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Bitboard representation and the hashed, playable [`Position`]
//! - [`rules`]: Line-of-five detection
//! - [`eval`]: Static evaluation and score constants
//! - [`search`]: Zobrist keys, transposition table, move ordering and the
//!   alpha-beta searcher with iterative deepening
//! - [`engine`]: Configuration and the [`Engine`] facade
//!
//! # Quick Start
//!
//! ```
//! use penta::{Engine, EngineConfig, Outcome, Pos};
//!
//! let mut engine = Engine::new(EngineConfig {
//!     default_depth: 2,
//!     seed: Some(42),
//!     ..EngineConfig::default()
//! });
//!
//! let mut position = engine.new_position();
//! position.play(Pos::new(2, 2));
//! position.play(Pos::new(3, 3));
//!
//! let analysis = engine.analyze(&mut position).unwrap();
//! println!("White to move scores {}", analysis.score);
//! assert_eq!(position.outcome(), Outcome::Undecided);
//! ```
//!
//! # Scores
//!
//! All scores are from the perspective of the side to move:
//! [`Score::WIN`] for a won position, [`Score::LOSE`] for a lost one and
//! [`Score::DRAW`] plus heuristic terms in between.

pub mod board;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Outcome, PlayError, Pos, Position, Stone, BOARD_SIZE};
pub use engine::{Analysis, Engine, EngineConfig, MoveResult};
pub use eval::Score;
pub use search::{Searcher, TranspositionTable, ZobristKeys, DEFAULT_DEPTH};
