//! Draw detection.

use super::super::types::{Board, Side};
use super::win::has_won;
use tracing::instrument;

/// Checks if the board is full with no completed line for either side.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && !has_won(board, Side::Cross) && !has_won(board, Side::Nought)
}
