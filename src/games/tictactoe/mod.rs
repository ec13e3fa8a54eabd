//! Noughts-and-crosses on a fixed 3x3 board.

mod action;
mod lines;
pub mod rules;
mod scoring;
mod selector;
mod state;
mod types;

pub use action::{Move, MoveError};
pub use lines::{LINE_COUNT, LINES, Line, LineKind};
pub use scoring::{Score, WEIGHTS, run_count, victory_score, weight};
pub use selector::{Candidate, choose_move, evaluate, select_best};
pub use state::{GameState, GameStatus};
pub use types::{BOARD_SIZE, Board, BoardParseError, CELL_COUNT, Cell, Side};
