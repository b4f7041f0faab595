//! Static evaluation of horizon positions
//!
//! Every stone is worth its positional weight plus a connection bonus for
//! each same-color neighbour in the 8 surrounding cells. Stones of the side
//! to move count positively, the opponent's negatively, and the side to
//! move gets a tempo bonus on top.
//!
//! Each adjacent same-color pair is counted once from each end, so a pair
//! is worth `2 * POSITION_CONNECTION` in total.

use crate::board::{Board, Pos, Stone};

use super::score::Score;

/// The 8 neighbour directions
const NEIGHBOURS: [(i32, i32); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Evaluate the board from the perspective of `to_move`.
///
/// Only meaningful on a position without a completed line; decided
/// positions are scored from their outcome by the search.
#[must_use]
pub fn evaluate(board: &Board, to_move: Stone) -> i32 {
    let mine = evaluate_stones(board, to_move);
    let theirs = evaluate_stones(board, to_move.opponent());

    Score::DRAW + Score::TEMPO + mine - theirs
}

/// Sum of stone values for one color
fn evaluate_stones(board: &Board, color: Stone) -> i32 {
    board
        .stones(color)
        .iter_ones()
        .map(|pos| evaluate_stone(board, pos, color))
        .sum()
}

/// Positional weight plus connection bonuses of the stone at `pos`
#[inline]
fn evaluate_stone(board: &Board, pos: Pos, color: Stone) -> i32 {
    let connections = NEIGHBOURS
        .iter()
        .filter_map(|&(dx, dy)| pos.offset(dx, dy))
        .filter(|&n| board.get(n) == Some(color))
        .count() as i32;

    Score::position(pos) + connections * Score::POSITION_CONNECTION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_is_tempo() {
        let board = Board::new();
        assert_eq!(evaluate(&board, Stone::White), Score::DRAW + Score::TEMPO);
        assert_eq!(evaluate(&board, Stone::Black), Score::DRAW + Score::TEMPO);
    }

    #[test]
    fn test_single_stone() {
        let mut board = Board::new();
        board.place_stone(Pos::new(1, 1), Stone::White);

        assert_eq!(evaluate(&board, Stone::White), Score::TEMPO + 15);
        assert_eq!(evaluate(&board, Stone::Black), Score::TEMPO - 15);
    }

    #[test]
    fn test_connection_counted_from_both_ends() {
        let mut board = Board::new();
        board.place_stone(Pos::new(2, 2), Stone::White);
        board.place_stone(Pos::new(3, 3), Stone::White);

        let expected = Score::TEMPO + 7 + 7 + 2 * Score::POSITION_CONNECTION;
        assert_eq!(evaluate(&board, Stone::White), expected);
    }

    #[test]
    fn test_opponent_neighbour_no_bonus() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Stone::White);
        board.place_stone(Pos::new(0, 1), Stone::Black);

        // White: 5, Black: 10, no connections
        assert_eq!(evaluate(&board, Stone::White), Score::TEMPO + 5 - 10);
        assert_eq!(evaluate(&board, Stone::Black), Score::TEMPO + 10 - 5);
    }

    #[test]
    fn test_cluster() {
        let mut board = Board::new();
        // L-shape of black stones at the edge
        board.place_stone(Pos::new(0, 0), Stone::Black);
        board.place_stone(Pos::new(1, 0), Stone::Black);
        board.place_stone(Pos::new(0, 1), Stone::Black);

        // Weights 5 + 10 + 10; every stone touches both others.
        let black = 25 + 6 * Score::POSITION_CONNECTION;
        assert_eq!(evaluate(&board, Stone::Black), Score::TEMPO + black);
        assert_eq!(evaluate(&board, Stone::White), Score::TEMPO - black);
    }
}
