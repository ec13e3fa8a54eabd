//! Noughts and crosses on a 3x3 board against a one-ply greedy opponent.
//!
//! # Architecture
//!
//! - **Games**: board, line scoring, move selection and the game state machine
//! - **Players**: human console input and the heuristic computer player
//! - **Orchestrator**: the turn loop and console rendering
//! - **Config**: TOML settings and the command line
//!
//! # Example
//!
//! ```
//! use noughts::{Board, Side, choose_move};
//!
//! let board: Board = "XX_/_O_/___".parse().unwrap();
//! let best = choose_move(&board, Side::Nought).unwrap();
//! assert_eq!((best.row, best.col), (0, 2));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod game_config;
mod games;
mod orchestrator;
mod players;

/// Command-line definitions shared with the binary.
pub mod cli;

// Crate-level exports - Configuration
pub use game_config::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig, Seat};

// Crate-level exports - Game types
pub use games::tictactoe::{
    BOARD_SIZE, Board, BoardParseError, CELL_COUNT, Candidate, Cell, GameState, GameStatus,
    LINE_COUNT, LINES, Line, LineKind, Move, MoveError, Score, Side, WEIGHTS, choose_move,
    evaluate, run_count, select_best, victory_score, weight,
};

// Crate-level exports - Rules
pub use games::tictactoe::rules::{has_won, is_draw, winning_line};

// Crate-level exports - Players
pub use players::{HeuristicPlayer, HumanPlayer, InputError, Player};

// Crate-level exports - Orchestration
pub use orchestrator::Orchestrator;
