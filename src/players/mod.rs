//! Player trait and implementations.

mod heuristic;
mod human;

pub use heuristic::HeuristicPlayer;
pub use human::{HumanPlayer, InputError};

use crate::games::tictactoe::{GameState, Move};
use anyhow::Result;

/// Anything that can pick a move for the side to play.
pub trait Player {
    /// Gets a move for `state.active_side()`.
    ///
    /// The returned move must be legal in `state`.
    fn choose_move(&mut self, state: &GameState) -> Result<Move>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Whether a person typed the move, so it is already on screen.
    fn is_interactive(&self) -> bool {
        false
    }
}
