//! Victory scoring: how close a side is to completing a line.
//!
//! Each line contributes a weight for the number of cells the side holds in
//! it, or nothing once an opposing cell blocks it. Weights grow by a factor
//! of [`CELL_COUNT`] per extra cell, so a single longer run always outscores
//! every combination of shorter ones.

use super::lines::{LINES, Line};
use super::types::{BOARD_SIZE, Board, CELL_COUNT, Cell, Side};

/// Victory score of a side on a board.
pub type Score = u32;

const fn build_weights() -> [Score; BOARD_SIZE + 1] {
    let mut weights = [0; BOARD_SIZE + 1];
    let mut k = 1;
    while k <= BOARD_SIZE {
        weights[k] = if k == 1 {
            1
        } else {
            weights[k - 1] * CELL_COUNT as Score
        };
        k += 1;
    }
    weights
}

/// Weight per run count: 0, 1, 9, 81.
pub const WEIGHTS: [Score; BOARD_SIZE + 1] = build_weights();

/// Weight of a line holding `run` of a side's cells.
pub fn weight(run: usize) -> Score {
    WEIGHTS[run]
}

/// Cells held by `side` along `line`, or 0 if the opponent holds any of it.
///
/// Empty cells are passed over without ending the run.
pub fn run_count(board: &Board, line: &Line, side: Side) -> usize {
    let mut run = 0;
    for cell in line.cells(board) {
        match cell {
            Cell::Taken(s) if s == side => run += 1,
            Cell::Taken(_) => return 0,
            Cell::Empty => {}
        }
    }
    run
}

/// Sum of line weights for `side` across every row, column and diagonal.
pub fn victory_score(board: &Board, side: Side) -> Score {
    LINES
        .iter()
        .map(|line| weight(run_count(board, line, side)))
        .sum()
}
