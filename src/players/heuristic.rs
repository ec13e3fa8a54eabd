//! Computer player backed by the greedy move selector.

use super::Player;
use crate::games::tictactoe::{GameState, Move, choose_move};
use anyhow::Result;
use tracing::debug;

/// Computer player that takes the best one-ply placement.
pub struct HeuristicPlayer {
    name: String,
}

impl HeuristicPlayer {
    /// Creates a new computer player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for HeuristicPlayer {
    fn choose_move(&mut self, state: &GameState) -> Result<Move> {
        let side = state.active_side();
        let best = choose_move(state.board(), side)
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;
        debug!(ai = %self.name, %side, row = best.row, col = best.col, "AI chose cell");
        Ok(best.to_move())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Side};

    #[test]
    fn test_plays_for_active_side() {
        let board: Board = "XX_/_O_/___".parse().unwrap();
        let state = GameState::from_board(board, Side::Nought);
        let mut ai = HeuristicPlayer::new("computer");
        assert_eq!(ai.choose_move(&state).unwrap(), Move::new(0, 2));
    }

    #[test]
    fn test_full_board_is_an_error() {
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        let state = GameState::from_board(board, Side::Cross);
        assert!(HeuristicPlayer::new("computer").choose_move(&state).is_err());
    }
}
