//! Engine facade tying configuration, keys and search together
//!
//! The engine owns one set of Zobrist keys and one [`Searcher`]. Positions
//! created through [`Engine::new_position`] share those keys, so the
//! transposition table recognises them across calls.
//!
//! # Example
//!
//! ```
//! use penta::{Engine, EngineConfig, Pos};
//!
//! let config = EngineConfig {
//!     default_depth: 2,
//!     tt_capacity: 1 << 14,
//!     seed: Some(7),
//! };
//! let mut engine = Engine::new(config);
//!
//! let mut position = engine.new_position();
//! position.play(Pos::new(1, 1));
//!
//! let analysis = engine.analyze(&mut position).unwrap();
//! println!("score {} after {} nodes", analysis.score, analysis.nodes);
//!
//! let reply = engine.best_move(&mut position, 2).unwrap();
//! println!("Black plays {}", reply.best_move);
//! ```

use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};

use crate::board::{Pos, Position};
use crate::eval::Score;
use crate::search::{ordered_moves, Searcher, TTStats, ZobristKeys, DEFAULT_CAPACITY, DEFAULT_DEPTH};

/// Engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Depth used by [`Engine::analyze`]
    pub default_depth: i32,
    /// Number of transposition table slots
    pub tt_capacity: usize,
    /// Seed for the Zobrist keys; `None` draws one at random
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_depth: DEFAULT_DEPTH,
            tt_capacity: DEFAULT_CAPACITY,
            seed: None,
        }
    }
}

/// Result of evaluating a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Analysis {
    /// Score from the perspective of the side to move
    pub score: i32,
    /// Depth searched
    pub depth: i32,
    /// Nodes visited by this analysis
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

/// Best reply found for a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Cell to play
    pub best_move: Pos,
    /// Score after playing it, from the mover's perspective
    pub score: i32,
    /// Nodes visited
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

/// Evaluation engine.
pub struct Engine {
    config: EngineConfig,
    keys: Arc<ZobristKeys>,
    searcher: Searcher,
}

impl Engine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let keys = match config.seed {
            Some(seed) => ZobristKeys::seeded(seed),
            None => ZobristKeys::random(),
        };
        debug!(
            "engine: depth {} tt capacity {} seed {:?}",
            config.default_depth, config.tt_capacity, config.seed
        );

        Self {
            config,
            keys: Arc::new(keys),
            searcher: Searcher::new(config.tt_capacity),
        }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Empty position hashed with this engine's keys.
    #[must_use]
    pub fn new_position(&self) -> Position {
        Position::new(Arc::clone(&self.keys))
    }

    /// Evaluate `position` at the configured default depth.
    pub fn analyze(&mut self, position: &mut Position) -> Option<Analysis> {
        self.analyze_to_depth(position, self.config.default_depth)
    }

    /// Evaluate `position` with iterative deepening to `depth`.
    ///
    /// Returns `None` for a negative depth.
    pub fn analyze_to_depth(&mut self, position: &mut Position, depth: i32) -> Option<Analysis> {
        let start = Instant::now();
        let nodes_before = self.searcher.stats().nodes;

        let score = self.searcher.evaluate_to_depth(position, depth)?;

        let analysis = Analysis {
            score,
            depth,
            nodes: self.searcher.stats().nodes - nodes_before,
            time_ms: start.elapsed().as_millis() as u64,
        };
        info!(
            "analysis: score {} depth {} nodes {} time {}ms",
            analysis.score, analysis.depth, analysis.nodes, analysis.time_ms
        );
        Some(analysis)
    }

    /// Find the best cell for the side to move, looking `depth` plies ahead
    /// including the move itself.
    ///
    /// Candidates are tried in search order and each reply is searched with
    /// a window that only proves whether it beats the best so far; the first
    /// of equally scored moves wins. Returns `None` if the game is over.
    pub fn best_move(&mut self, position: &mut Position, depth: i32) -> Option<MoveResult> {
        if position.is_decided() {
            return None;
        }

        let start = Instant::now();
        let nodes_before = self.searcher.stats().nodes;
        let child_depth = (depth - 1).max(0);

        let candidates: Vec<Pos> = ordered_moves(position.board()).collect();
        let mut best: Option<(Pos, i32)> = None;

        for pos in candidates {
            let floor = best.map_or(Score::LOSE, |(_, score)| score);
            let score = {
                let mut child = position.play_scoped(pos);
                -self.searcher.evaluate(&mut child, child_depth, Score::LOSE, -floor)
            };
            debug!("candidate {pos}: {score}");

            if best.map_or(true, |(_, s)| score > s) {
                best = Some((pos, score));
            }
        }

        let (best_move, score) = best?;
        let result = MoveResult {
            best_move,
            score,
            nodes: self.searcher.stats().nodes - nodes_before,
            time_ms: start.elapsed().as_millis() as u64,
        };
        info!(
            "best move {} score {} nodes {} time {}ms",
            result.best_move, result.score, result.nodes, result.time_ms
        );
        Some(result)
    }

    /// Drop every cached search result.
    pub fn reset(&mut self) {
        self.searcher.clear();
    }

    #[must_use]
    pub fn tt_stats(&self) -> TTStats {
        self.searcher.tt_stats()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
