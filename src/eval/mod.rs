//! Evaluation module for connect-five positions
//!
//! This module provides the static scoring used at the search horizon:
//! - Positional weights (center and near-edge cells favoured)
//! - Connection bonuses for adjacent same-color stones
//! - Tempo bonus for the side to move

pub mod heuristic;
pub mod score;

pub use heuristic::evaluate;
pub use score::Score;
