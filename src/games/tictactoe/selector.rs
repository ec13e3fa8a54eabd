//! One-ply greedy move selection.
//!
//! Every empty cell is tried on a copy of the board and scored for both
//! sides. The candidate leaving the opponent the lowest victory score wins;
//! the mover's own score breaks ties, then row-major order. There is no
//! lookahead beyond the single placement, so forks go unseen.

use super::action::Move;
use super::scoring::{Score, victory_score};
use super::types::{Board, Side};
use tracing::{debug, instrument};

/// A scored hypothetical placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Row of the placement.
    pub row: usize,
    /// Column of the placement.
    pub col: usize,
    /// Mover's victory score after the placement.
    pub my_score: Score,
    /// Opponent's victory score after the placement.
    pub peer_score: Score,
}

impl Candidate {
    /// Checks whether this candidate ranks strictly ahead of `other`.
    ///
    /// A lower opponent score comes first; with equal opponent scores a
    /// higher own score comes first. Full ties do not outrank.
    pub fn outranks(&self, other: &Candidate) -> bool {
        self.peer_score < other.peer_score
            || (self.peer_score == other.peer_score && self.my_score > other.my_score)
    }

    /// The placement as a move.
    pub fn to_move(self) -> Move {
        Move::new(self.row, self.col)
    }
}

/// Scores a placement of `side` on every empty cell, in row-major order.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, side: Side) -> Vec<Candidate> {
    board
        .empty_cells()
        .map(|(row, col)| {
            let mut trial = board.clone();
            trial.set(row, col, side);
            let candidate = Candidate {
                row,
                col,
                my_score: victory_score(&trial, side),
                peer_score: victory_score(&trial, -side),
            };
            debug!(?candidate, "Scored placement");
            candidate
        })
        .collect()
}

/// Picks the top-ranked candidate; among full ties, the earliest in the list.
pub fn select_best(candidates: &[Candidate]) -> Option<Candidate> {
    candidates.iter().copied().reduce(|best, candidate| {
        if candidate.outranks(&best) {
            candidate
        } else {
            best
        }
    })
}

/// Chooses a move for `side`, or `None` if the board is full.
#[instrument(skip(board))]
pub fn choose_move(board: &Board, side: Side) -> Option<Candidate> {
    let best = select_best(&evaluate(board, side));
    debug!(?best, "Selected placement");
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(row: usize, col: usize, my_score: Score, peer_score: Score) -> Candidate {
        Candidate {
            row,
            col,
            my_score,
            peer_score,
        }
    }

    #[test]
    fn test_lower_peer_score_wins() {
        let list = [candidate(0, 0, 81, 9), candidate(0, 1, 1, 2)];
        assert_eq!(select_best(&list), Some(list[1]));
    }

    #[test]
    fn test_higher_own_score_breaks_peer_tie() {
        let list = [candidate(0, 0, 3, 4), candidate(1, 1, 5, 4), candidate(2, 2, 4, 4)];
        assert_eq!(select_best(&list), Some(list[1]));
    }

    #[test]
    fn test_full_tie_keeps_first() {
        let list = [candidate(0, 1, 2, 0), candidate(1, 0, 2, 0), candidate(1, 2, 2, 0)];
        assert_eq!(select_best(&list), Some(list[0]));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(select_best(&[]), None);
    }

    #[test]
    fn test_opening_takes_center() {
        let best = choose_move(&Board::new(), Side::Cross).unwrap();
        assert_eq!((best.row, best.col), (1, 1));
        assert_eq!(best.my_score, 4);
    }

    #[test]
    fn test_evaluate_skips_taken_cells() {
        let board: Board = "X_O/_X_/O__".parse().unwrap();
        let cells: Vec<_> = evaluate(&board, Side::Nought)
            .into_iter()
            .map(|c| (c.row, c.col))
            .collect();
        assert_eq!(cells, vec![(0, 1), (1, 0), (1, 2), (2, 1), (2, 2)]);
    }

    #[test]
    fn test_evaluate_leaves_board_untouched() {
        let board: Board = "X__/_O_/___".parse().unwrap();
        let before = board.clone();
        let _ = evaluate(&board, Side::Cross);
        assert_eq!(board, before);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert_eq!(choose_move(&board, Side::Cross), None);
    }
}
