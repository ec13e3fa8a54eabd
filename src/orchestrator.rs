//! Turn loop between two players.

use crate::games::tictactoe::{GameState, GameStatus, Side};
use crate::players::Player;
use anyhow::Result;
use std::io::Write;
use tracing::{debug, info, instrument};

/// Runs a game between two seats, printing to `out`.
pub struct Orchestrator<W> {
    cross: Box<dyn Player>,
    nought: Box<dyn Player>,
    out: W,
    echo_ai_moves: bool,
}

impl<W: Write> Orchestrator<W> {
    /// Creates a new orchestrator.
    pub fn new(cross: Box<dyn Player>, nought: Box<dyn Player>, out: W) -> Self {
        Self {
            cross,
            nought,
            out,
            echo_ai_moves: true,
        }
    }

    /// Sets whether computer moves are echoed as `row col`.
    pub fn echo_ai_moves(mut self, echo: bool) -> Self {
        self.echo_ai_moves = echo;
        self
    }

    /// Consumes the orchestrator, returning its output stream.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Prints the board, asks the active side for a move and applies it.
    #[instrument(skip(self, state), fields(side = %state.active_side(), step = state.step_count()))]
    pub fn play_turn(&mut self, state: GameState) -> Result<GameState> {
        let side = state.active_side();
        write!(self.out, "{}", state.board())?;
        write!(self.out, "\n{} turn: ", side)?;
        self.out.flush()?;

        let player = match side {
            Side::Cross => &mut self.cross,
            Side::Nought => &mut self.nought,
        };
        debug!(player = %player.name(), "Waiting for move");
        let mv = player.choose_move(&state)?;
        if !player.is_interactive() && self.echo_ai_moves {
            writeln!(self.out, "{}", mv)?;
        }

        info!(player = %player.name(), %mv, "Move made");
        Ok(state.advance(mv)?)
    }

    /// Plays a fresh game to the end and returns the final state.
    pub fn run(&mut self) -> Result<GameState> {
        self.run_from(GameState::new())
    }

    /// Plays on from `state` until the game ends.
    #[instrument(skip_all)]
    pub fn run_from(&mut self, mut state: GameState) -> Result<GameState> {
        info!(
            cross = %self.cross.name(),
            nought = %self.nought.name(),
            "Starting game"
        );

        while !state.status().is_over() {
            state = self.play_turn(state)?;
        }

        write!(self.out, "{}", state.board())?;
        if let GameStatus::Won(side) = state.status() {
            writeln!(self.out, "\n{} win!", side)?;
        } else {
            writeln!(self.out, "game end, no one win.")?;
        }
        self.out.flush()?;

        info!(status = ?state.status(), moves = state.history().len(), "Game over");
        Ok(state)
    }
}
