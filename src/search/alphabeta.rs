//! Alpha-Beta search with iterative deepening and transposition table
//!
//! This module implements the core search algorithm of the engine: a
//! fail-soft negamax with alpha-beta pruning over a single mutable
//! [`Position`], backed by a [`TranspositionTable`] and driven by iterative
//! deepening with aspiration windows.
//!
//! # Example
//!
//! ```
//! use penta::board::Position;
//! use penta::eval::Score;
//! use penta::search::Searcher;
//!
//! let mut searcher = Searcher::new(1 << 16);
//! let mut position = Position::seeded(1);
//!
//! // Horizon evaluation of the empty board is just the tempo bonus
//! assert_eq!(searcher.evaluate_to_depth(&mut position, 0), Some(Score::DRAW + Score::TEMPO));
//! assert_eq!(searcher.evaluate_to_depth(&mut position, -1), None);
//! ```

use log::{debug, trace};

use crate::board::Position;
use crate::eval::{evaluate as evaluate_statically, Score};

use super::ordering::MOVE_ORDER;
use super::tt::{TTStats, TranspositionTable, DEFAULT_CAPACITY};

/// Depth used when the caller does not pick one
pub const DEFAULT_DEPTH: i32 = 5;

/// Aspiration window width, and the step it widens by on failure
pub const ASPIRATION_WINDOW: i32 = Score::POSITION;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Calls to `evaluate`, including leaves
    pub nodes: u64,
    /// Total TT probes
    pub tt_probes: u64,
    /// TT probes that returned a usable score
    pub tt_hits: u64,
    /// Total beta cutoffs (fail-high)
    pub beta_cutoffs: u64,
    /// Aspiration windows that failed and were widened
    pub re_searches: u64,
}

impl SearchStats {
    /// TT score hit rate
    pub fn tt_hit_rate(&self) -> f64 {
        if self.tt_probes == 0 {
            0.0
        } else {
            self.tt_hits as f64 / self.tt_probes as f64 * 100.0
        }
    }
}

/// Negamax searcher owning its transposition table.
///
/// The table persists across calls, so consecutive searches of related
/// positions reuse each other's results. Call [`clear`](Self::clear) to
/// start from an empty table.
pub struct Searcher {
    tt: TranspositionTable,
    stats: SearchStats,
}

impl Searcher {
    /// Create a searcher with a table of `capacity` slots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::with_table(TranspositionTable::new(capacity))
    }

    /// Create a searcher around an existing table.
    #[must_use]
    pub fn with_table(tt: TranspositionTable) -> Self {
        Self {
            tt,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn tt_stats(&self) -> TTStats {
        self.tt.stats()
    }

    /// Counters accumulated since construction or the last `reset_stats`
    #[inline]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Empty the transposition table and reset the counters.
    pub fn clear(&mut self) {
        self.tt.clear();
        self.reset_stats();
    }

    /// [`evaluate_to_depth`](Self::evaluate_to_depth) at [`DEFAULT_DEPTH`].
    pub fn evaluate_default(&mut self, position: &mut Position) -> Option<i32> {
        self.evaluate_to_depth(position, DEFAULT_DEPTH)
    }

    /// Iterative deepening with aspiration windows.
    ///
    /// Searches depths `0..=max_depth`, each with a window of
    /// [`ASPIRATION_WINDOW`] centred on the previous depth's score. A result
    /// on or outside an edge moves that edge outwards by one window width and
    /// searches the same depth again. Returns the score of the last depth
    /// from the perspective of the side to move, or `None` if `max_depth` is
    /// negative.
    ///
    /// The position is restored before returning.
    pub fn evaluate_to_depth(&mut self, position: &mut Position, max_depth: i32) -> Option<i32> {
        if max_depth < 0 {
            return None;
        }

        let mut score = Score::DRAW;
        for depth in 0..=max_depth {
            let mut min_score = score - ASPIRATION_WINDOW / 2;
            let mut max_score = score + ASPIRATION_WINDOW / 2;

            score = loop {
                let s = self.evaluate(position, depth, min_score, max_score);
                if s <= min_score {
                    trace!("depth {depth}: fail-low {s} <= {min_score}");
                    min_score -= ASPIRATION_WINDOW;
                    self.stats.re_searches += 1;
                    continue;
                }
                if s >= max_score {
                    trace!("depth {depth}: fail-high {s} >= {max_score}");
                    max_score += ASPIRATION_WINDOW;
                    self.stats.re_searches += 1;
                    continue;
                }
                break s;
            };

            debug!(
                "depth {depth}: score {score} window [{min_score}, {max_score}] nodes {} tt hits {:.1}%",
                self.stats.nodes,
                self.stats.tt_hit_rate()
            );
        }

        Some(score)
    }

    /// Fail-soft negamax search of `position` to `depth` plies.
    ///
    /// The result is from the perspective of the side to move. A result
    /// `<= min_score` is an upper bound on the true score, a result
    /// `>= max_score` a lower bound; anything in between is exact.
    ///
    /// A `depth` of zero or less scores the position statically.
    ///
    /// Every move played during the search is undone before returning, even
    /// if the search unwinds.
    pub fn evaluate(
        &mut self,
        position: &mut Position,
        depth: i32,
        min_score: i32,
        max_score: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        if let Some(score) = position.outcome().score_for(position.color_to_move()) {
            return score;
        }

        let key = position.hash_key();
        self.stats.tt_probes += 1;
        if let Some(score) = self.tt.probe(key, min_score, max_score, depth) {
            self.stats.tt_hits += 1;
            return score;
        }

        if depth <= 0 {
            return evaluate_statically(position.board(), position.color_to_move());
        }

        if min_score >= max_score {
            return min_score;
        }

        let mut best = min_score;
        for pos in MOVE_ORDER {
            if !position.can_play(pos) {
                continue;
            }

            let score = {
                let mut child = position.play_scoped(pos);
                -self.evaluate(&mut child, depth - 1, -max_score, -best)
            };

            if score > best {
                best = score;
            }
            if best >= max_score {
                self.stats.beta_cutoffs += 1;
                self.tt.store(key, best, min_score, max_score, depth);
                return best;
            }
        }

        self.tt.store(key, best, min_score, max_score, depth);
        best
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
