//! Human player reading coordinates from a text stream.

use super::Player;
use crate::games::tictactoe::{GameState, Move};
use anyhow::Result;
use derive_more::{Display, Error};
use std::collections::VecDeque;
use std::io::{BufRead, Stdin, StdinLock, Stdout, Write};
use tracing::{instrument, warn};

/// Failure to obtain input from the human.
#[derive(Debug, Display, Error)]
pub enum InputError {
    /// The input stream ended before a move was read.
    #[display("Input closed before a move was entered")]
    Closed,

    /// Reading or prompting failed.
    #[display("Console I/O failed: {}", _0)]
    Io(std::io::Error),
}

impl From<std::io::Error> for InputError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Human player entering `row col` pairs, 0-indexed.
///
/// The two integers may be separated by any whitespace, including newlines.
/// Text that is not a number, or a cell that is off the board or taken,
/// gets a message on `output` and another attempt.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl HumanPlayer<StdinLock<'static>, Stdout> {
    /// Creates a human player on the process console.
    pub fn console(name: impl Into<String>) -> Self {
        let stdin: Stdin = std::io::stdin();
        Self::new(name, stdin.lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a human player over arbitrary streams.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Consumes the player, returning its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn next_token(&mut self) -> Result<String, InputError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(InputError::Closed);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    fn next_coordinate(&mut self) -> Result<Option<usize>, InputError> {
        let token = self.next_token()?;
        Ok(token.parse().ok())
    }

    fn retry(&mut self, reason: &str) -> Result<(), InputError> {
        warn!(player = %self.name, reason, "Rejected input");
        self.pending.clear();
        write!(self.output, "{}, re-enter: ", reason)?;
        self.output.flush()?;
        Ok(())
    }

    /// Reads until a legal move for `state` is entered.
    #[instrument(skip(self, state), fields(player = %self.name))]
    pub fn read_move(&mut self, state: &GameState) -> Result<Move, InputError> {
        loop {
            let row = self.next_coordinate()?;
            let Some(row) = row else {
                self.retry("expected two numbers")?;
                continue;
            };
            let Some(col) = self.next_coordinate()? else {
                self.retry("expected two numbers")?;
                continue;
            };

            let mv = Move::new(row, col);
            match state.validate(mv) {
                Ok(()) => return Ok(mv),
                Err(e) => self.retry(&e.to_string())?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn choose_move(&mut self, state: &GameState) -> Result<Move> {
        Ok(self.read_move(state)?)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
