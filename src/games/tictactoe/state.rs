//! Game state machine.
//!
//! A [`GameState`] is a plain value: [`GameState::advance`] consumes it and
//! returns the state after one move, so the turn loop carries no hidden
//! mutable state and each transition can be exercised on its own.

use super::action::{Move, MoveError};
use super::rules::{has_won, is_draw};
use super::types::{Board, CELL_COUNT, Side};
use tracing::{info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Side),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Checks if the game has ended.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    active_side: Side,
    step_count: usize,
    status: GameStatus,
    history: Vec<Move>,
}

impl GameState {
    /// Creates a new game: empty board, cross to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active_side: Side::Cross,
            step_count: 0,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Resumes from an arbitrary position with `active_side` to move.
    ///
    /// The step count is taken from the number of taken cells and the status
    /// from the board itself. The history starts empty.
    #[instrument(skip(board))]
    pub fn from_board(board: Board, active_side: Side) -> Self {
        let status = if has_won(&board, Side::Cross) {
            GameStatus::Won(Side::Cross)
        } else if has_won(&board, Side::Nought) {
            GameStatus::Won(Side::Nought)
        } else if is_draw(&board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        };
        Self {
            step_count: board.occupied(),
            board,
            active_side,
            status,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn active_side(&self) -> Side {
        self.active_side
    }

    /// Number of moves played without ending the game.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Moves played since this state was created.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Checks that `mv` may be played now.
    pub fn validate(&self, mv: Move) -> Result<(), MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if !mv.in_bounds() {
            return Err(MoveError::OutOfBounds(mv));
        }
        if !self.board.is_empty(mv.row, mv.col) {
            return Err(MoveError::Occupied(mv));
        }
        Ok(())
    }

    /// Plays `mv` for the active side and returns the next state.
    ///
    /// If the mover completes a line the game is won and the active side
    /// stays the winner. Otherwise the turn passes, the step count rises,
    /// and once every cell has been played the game is drawn.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] if the game is over, the move is off the
    /// board, or the cell is taken.
    #[instrument(skip(self), fields(side = %self.active_side, step = self.step_count))]
    pub fn advance(mut self, mv: Move) -> Result<Self, MoveError> {
        self.validate(mv)?;

        let side = self.active_side;
        self.board.set(mv.row, mv.col, side);
        self.history.push(mv);

        if has_won(&self.board, side) {
            info!(%side, "Side completed a line");
            self.status = GameStatus::Won(side);
            return Ok(self);
        }

        self.active_side = -side;
        self.step_count += 1;
        if self.step_count >= CELL_COUNT {
            info!("Board full without a line");
            self.status = GameStatus::Draw;
        }
        Ok(self)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
