//! Win detection for rows, columns, and both diagonals.

use super::super::{Board, Cell, GridPosition, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A line of `size` cells that wins when one player owns all of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Line {
    /// Row with the given index.
    #[display("row {}", _0)]
    Row(usize),
    /// Column with the given index.
    #[display("column {}", _0)]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("left diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[display("right diagonal")]
    AntiDiagonal,
}

/// Positions making up `line` on a board of `size`.
///
/// The anti-diagonal runs from `(0, size - 1)` down to `(size - 1, 0)`.
pub fn line_positions(line: Line, size: usize) -> Vec<GridPosition> {
    match line {
        Line::Row(row) => (0..size).map(|c| GridPosition::new(row, c)).collect(),
        Line::Column(column) => (0..size).map(|r| GridPosition::new(r, column)).collect(),
        Line::MainDiagonal => (0..size).map(|i| GridPosition::new(i, i)).collect(),
        Line::AntiDiagonal => (0..size).map(|i| GridPosition::new(i, size - 1 - i)).collect(),
    }
}

/// Whether `player` owns every cell of `line`.
pub fn line_complete(board: &Board, line: Line, player: Player) -> bool {
    line_positions(line, board.size())
        .into_iter()
        .all(|pos| board.get(pos) == Some(Cell::Occupied(player)))
}

/// Returns the first line through `pos` that `player` has completed.
///
/// Lines are checked in the order row, column, main diagonal, anti-diagonal.
/// Diagonals are only considered when `pos` lies on them.
#[instrument(skip(board), fields(size = board.size()))]
pub fn completed_line(board: &Board, pos: GridPosition, player: Player) -> Option<Line> {
    let size = board.size();
    let mut candidates = vec![Line::Row(pos.row), Line::Column(pos.column)];
    if pos.on_main_diagonal() {
        candidates.push(Line::MainDiagonal);
    }
    if pos.on_anti_diagonal(size) {
        candidates.push(Line::AntiDiagonal);
    }

    candidates
        .into_iter()
        .find(|line| line_complete(board, *line, player))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(board: &mut Board, line: Line, player: Player) {
        for pos in line_positions(line, board.size()) {
            board.claim(pos, player);
        }
    }

    #[test]
    fn test_no_line_on_empty_board() {
        let board = Board::new(3);
        assert_eq!(completed_line(&board, GridPosition::new(1, 1), Player::One), None);
    }

    #[test]
    fn test_row_complete() {
        let mut board = Board::new(4);
        fill(&mut board, Line::Row(2), Player::Two);
        assert_eq!(
            completed_line(&board, GridPosition::new(2, 3), Player::Two),
            Some(Line::Row(2))
        );
        assert_eq!(completed_line(&board, GridPosition::new(2, 3), Player::One), None);
    }

    #[test]
    fn test_column_complete() {
        let mut board = Board::new(3);
        fill(&mut board, Line::Column(0), Player::One);
        assert_eq!(
            completed_line(&board, GridPosition::new(1, 0), Player::One),
            Some(Line::Column(0))
        );
    }

    #[test]
    fn test_anti_diagonal_complete() {
        let mut board = Board::new(5);
        fill(&mut board, Line::AntiDiagonal, Player::One);
        assert_eq!(
            completed_line(&board, GridPosition::new(4, 0), Player::One),
            Some(Line::AntiDiagonal)
        );
    }

    #[test]
    fn test_diagonal_ignored_off_diagonal() {
        let mut board = Board::new(3);
        fill(&mut board, Line::MainDiagonal, Player::One);
        // (0, 1) is not on the main diagonal, so only its row and column count.
        assert_eq!(completed_line(&board, GridPosition::new(0, 1), Player::One), None);
        assert_eq!(
            completed_line(&board, GridPosition::new(2, 2), Player::One),
            Some(Line::MainDiagonal)
        );
    }

    #[test]
    fn test_incomplete_line() {
        let mut board = Board::new(3);
        board.claim(GridPosition::new(0, 0), Player::One);
        board.claim(GridPosition::new(0, 1), Player::One);
        assert!(!line_complete(&board, Line::Row(0), Player::One));
    }
}
