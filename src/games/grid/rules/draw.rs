//! Draw detection and turn floors.

use super::super::Board;
use tracing::instrument;

/// Fewest turns that can contain a completed line on a `size` board.
///
/// The first player needs `size` cells and the second player has moved
/// `size - 1` times by then.
pub fn min_turns_to_win(size: usize) -> usize {
    2 * size - 1
}

/// Whether `turn` is the final turn of a `size` board.
pub fn is_last_turn(turn: usize, size: usize) -> bool {
    turn >= size * size
}

/// Checks if every cell is occupied.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.occupied_count() == board.cells().len()
}
