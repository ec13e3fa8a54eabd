//! Core domain types for noughts-and-crosses.

use derive_more::Display;
use std::str::FromStr;
use tracing::instrument;

/// Edge length of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board, and the number of plies in a full game.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// One of the two players.
///
/// The sides mirror each other: [`Side::value`] of one is the negation of the
/// other, and `-side` yields the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Side {
    /// Crosses, moves first.
    #[strum(serialize = "X")]
    Cross,
    /// Noughts, moves second.
    #[strum(serialize = "O")]
    Nought,
}

impl Side {
    /// Returns the opponent side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Cross => Side::Nought,
            Side::Nought => Side::Cross,
        }
    }

    /// Signed cell value: cross is -1, nought is +1.
    pub fn value(self) -> i8 {
        match self {
            Side::Cross => -1,
            Side::Nought => 1,
        }
    }
}

impl std::ops::Neg for Side {
    type Output = Side;

    fn neg(self) -> Self::Output {
        self.opponent()
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell taken by a side.
    Taken(Side),
}

impl Cell {
    /// Signed cell value: 0 for empty, otherwise the side's value.
    pub fn value(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Taken(side) => side.value(),
        }
    }

    /// Symbol used when rendering the board.
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => "_",
            Cell::Taken(Side::Cross) => "X",
            Cell::Taken(Side::Nought) => "O",
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        Cell::Taken(side)
    }
}

/// 3x3 board, indexed by `(row, col)` from the top-left corner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is out of range.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Writes `side` into `(row, col)`.
    ///
    /// The caller guarantees the coordinates are in range and the cell is
    /// empty; nothing is checked here. Validated play goes through
    /// [`GameState::advance`](super::GameState::advance).
    pub fn set(&mut self, row: usize, col: usize, side: Side) {
        self.cells[row][col] = Cell::Taken(side);
    }

    /// Checks whether `(row, col)` is empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Cell::Empty
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..CELL_COUNT)
            .map(|i| (i / BOARD_SIZE, i % BOARD_SIZE))
            .filter(|&(row, col)| self.is_empty(row, col))
    }

    /// Number of taken cells.
    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell != Cell::Empty)
            .count()
    }

    /// Checks if every cell is taken.
    pub fn is_full(&self) -> bool {
        self.occupied() == CELL_COUNT
    }

    /// Rows of the board, top to bottom.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{:>3}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// A character that is not a cell symbol.
    #[display("Unknown cell symbol {:?}", _0)]
    UnknownSymbol(char),

    /// The text did not describe exactly nine cells.
    #[display("Expected {} cells, found {}", CELL_COUNT, _0)]
    WrongCellCount(usize),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cell symbols in row-major order.
    ///
    /// `X` and `O` (either case) are taken cells, `_` and `.` are empty.
    /// Whitespace and `/` may separate rows.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .map(|c| match c {
                'X' | 'x' => Ok(Cell::Taken(Side::Cross)),
                'O' | 'o' => Ok(Cell::Taken(Side::Nought)),
                '_' | '.' => Ok(Cell::Empty),
                other => Err(BoardParseError::UnknownSymbol(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if cells.len() != CELL_COUNT {
            return Err(BoardParseError::WrongCellCount(cells.len()));
        }

        let mut board = Board::new();
        for (i, cell) in cells.into_iter().enumerate() {
            board.cells[i / BOARD_SIZE][i % BOARD_SIZE] = cell;
        }
        Ok(board)
    }
}
