//! Moves and the errors raised when one cannot be played.

use super::types::BOARD_SIZE;

/// A placement at `(row, col)`, both 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{} {}", row, col)]
pub struct Move {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Checks both coordinates lie on the board.
    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

/// Error that can occur when applying a move to a game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinates are off the board.
    #[display("Cell {} is off the board", _0)]
    OutOfBounds(Move),

    /// The cell is already taken.
    #[display("Cell {} is already occupied", _0)]
    Occupied(Move),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
