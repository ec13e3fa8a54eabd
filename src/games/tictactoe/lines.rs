//! The rows, columns and diagonals of the board.
//!
//! Every line is a precomputed sequence of `(row, col)` pairs. Scoring and
//! win detection walk [`LINES`] in its fixed order: row 0, column 0, row 1,
//! column 1, row 2, column 2, main diagonal, anti-diagonal.

use super::types::{BOARD_SIZE, Board, Cell};
use derive_more::Display;

/// Number of lines on the board.
pub const LINE_COUNT: usize = 2 * BOARD_SIZE + 2;

/// Which line a [`Line`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum LineKind {
    /// A row, by index.
    #[display("row {}", _0)]
    Row(usize),
    /// A column, by index.
    #[display("column {}", _0)]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("diagonal")]
    Diagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

/// A line of cells, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    kind: LineKind,
    cells: [(usize, usize); BOARD_SIZE],
}

impl Line {
    const fn row(row: usize) -> Self {
        let mut cells = [(0, 0); BOARD_SIZE];
        let mut i = 0;
        while i < BOARD_SIZE {
            cells[i] = (row, i);
            i += 1;
        }
        Self {
            kind: LineKind::Row(row),
            cells,
        }
    }

    const fn column(col: usize) -> Self {
        let mut cells = [(0, 0); BOARD_SIZE];
        let mut i = 0;
        while i < BOARD_SIZE {
            cells[i] = (i, col);
            i += 1;
        }
        Self {
            kind: LineKind::Column(col),
            cells,
        }
    }

    const fn diagonal() -> Self {
        let mut cells = [(0, 0); BOARD_SIZE];
        let mut i = 0;
        while i < BOARD_SIZE {
            cells[i] = (i, i);
            i += 1;
        }
        Self {
            kind: LineKind::Diagonal,
            cells,
        }
    }

    const fn anti_diagonal() -> Self {
        let mut cells = [(0, 0); BOARD_SIZE];
        let mut i = 0;
        while i < BOARD_SIZE {
            cells[i] = (i, BOARD_SIZE - 1 - i);
            i += 1;
        }
        Self {
            kind: LineKind::AntiDiagonal,
            cells,
        }
    }

    /// Which line this is.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Coordinates in scan order.
    pub fn coords(&self) -> &[(usize, usize); BOARD_SIZE] {
        &self.cells
    }

    /// Cells of `board` along this line, in scan order.
    pub fn cells<'a>(&'a self, board: &'a Board) -> impl Iterator<Item = Cell> + 'a {
        self.cells.iter().map(|&(row, col)| board.get(row, col))
    }
}

const fn build_lines() -> [Line; LINE_COUNT] {
    let mut lines = [Line::diagonal(); LINE_COUNT];
    let mut i = 0;
    while i < BOARD_SIZE {
        lines[2 * i] = Line::row(i);
        lines[2 * i + 1] = Line::column(i);
        i += 1;
    }
    lines[2 * BOARD_SIZE] = Line::diagonal();
    lines[2 * BOARD_SIZE + 1] = Line::anti_diagonal();
    lines
}

/// All lines, in scan order.
pub static LINES: [Line; LINE_COUNT] = build_lines();
