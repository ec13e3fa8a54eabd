//! Win detection.

use super::super::lines::{LINES, Line};
use super::super::types::{Board, Cell, Side};
use tracing::instrument;

/// Returns the first line, in scan order, entirely held by `side`.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, side: Side) -> Option<&'static Line> {
    LINES
        .iter()
        .find(|line| line.cells(board).all(|cell| cell == Cell::Taken(side)))
}

/// Checks whether `side` holds every cell of some row, column or diagonal.
pub fn has_won(board: &Board, side: Side) -> bool {
    winning_line(board, side).is_some()
}

#[cfg(test)]
mod tests {
    use super::super::super::lines::LineKind;
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        for side in Side::iter() {
            assert!(!has_won(&board, side));
        }
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(0, 0, Side::Cross);
        board.set(0, 1, Side::Cross);
        board.set(0, 2, Side::Cross);
        assert!(has_won(&board, Side::Cross));
        assert!(!has_won(&board, Side::Nought));
        assert_eq!(
            winning_line(&board, Side::Cross).map(Line::kind),
            Some(LineKind::Row(0))
        );
    }

    #[test]
    fn test_winner_column() {
        let board: Board = "_O_/XO_/XOX".parse().unwrap();
        assert_eq!(
            winning_line(&board, Side::Nought).map(Line::kind),
            Some(LineKind::Column(1))
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "XXO/_O_/O_X".parse().unwrap();
        assert_eq!(
            winning_line(&board, Side::Nought).map(Line::kind),
            Some(LineKind::AntiDiagonal)
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX_/_O_/__O".parse().unwrap();
        assert!(!has_won(&board, Side::Cross));
        assert!(!has_won(&board, Side::Nought));
    }

    #[test]
    fn test_matches_brute_force_over_all_boards() {
        // 3^9 boards; compare against a direct check of every line.
        for code in 0..3usize.pow(9) {
            let mut board = Board::new();
            let mut rest = code;
            for i in 0..9 {
                match rest % 3 {
                    1 => board.set(i / 3, i % 3, Side::Cross),
                    2 => board.set(i / 3, i % 3, Side::Nought),
                    _ => {}
                }
                rest /= 3;
            }
            for side in Side::iter() {
                let target = Cell::Taken(side);
                let rows = (0..3).any(|r| (0..3).all(|c| board.get(r, c) == target));
                let cols = (0..3).any(|c| (0..3).all(|r| board.get(r, c) == target));
                let diag = (0..3).all(|i| board.get(i, i) == target);
                let anti = (0..3).all(|i| board.get(i, 2 - i) == target);
                assert_eq!(has_won(&board, side), rows || cols || diag || anti);
            }
        }
    }
}
