//! Core domain types for the N×N grid game.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Smallest side length a board may have.
pub const MIN_BOARD_SIZE: usize = 3;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum Player {
    /// Player one (moves on odd turns, marks with X).
    #[display("Player 1")]
    One,
    /// Player two (moves on even turns, marks with O).
    #[display("Player 2")]
    Two,
}

impl Player {
    /// Returns the player whose turn it is at `turn` (1-based).
    ///
    /// Turn 1 belongs to player one, turn 2 to player two, alternating.
    pub fn for_turn(turn: usize) -> Self {
        match ((turn + 1) % 2) + 1 {
            1 => Player::One,
            _ => Player::Two,
        }
    }

    /// Returns the player number (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Parses a player number (1 or 2).
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Mark drawn for this player's cells.
    pub fn mark(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Unoccupied cell.
    #[default]
    Empty,
    /// Cell claimed by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the owner of the cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// Row/column address of a cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new,
    derive_more::Display,
)]
#[display("({}, {})", row, column)]
pub struct GridPosition {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub column: usize,
}

impl GridPosition {
    /// Whether the position lies on the main diagonal (row == column).
    pub fn on_main_diagonal(self) -> bool {
        self.row == self.column
    }

    /// Whether the position lies on the anti-diagonal of a board of `size`.
    pub fn on_anti_diagonal(self, size: usize) -> bool {
        self.row + self.column + 1 == size
    }
}

/// Square N×N board, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board with `size` rows and columns.
    ///
    /// Callers validate the size; see [`crate::RulesEngine::new`].
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `pos` addresses a cell of this board.
    pub fn contains(&self, pos: GridPosition) -> bool {
        pos.row < self.size && pos.column < self.size
    }

    /// Gets the cell at `pos`, or `None` when out of bounds.
    pub fn get(&self, pos: GridPosition) -> Option<Cell> {
        if !self.contains(pos) {
            return None;
        }
        self.cells.get(pos.row * self.size + pos.column).copied()
    }

    /// Gets the cell at `(row, column)`.
    pub fn cell(&self, row: usize, column: usize) -> Option<Cell> {
        self.get(GridPosition::new(row, column))
    }

    /// Checks if the cell at `pos` is on the board and unoccupied.
    pub fn is_empty(&self, pos: GridPosition) -> bool {
        matches!(self.get(pos), Some(Cell::Empty))
    }

    /// Claims the cell at `pos` for `player`.
    ///
    /// Bounds and occupancy are checked by the engine before this is called.
    pub(crate) fn claim(&mut self, pos: GridPosition, player: Player) {
        if !self.contains(pos) {
            return;
        }
        let idx = pos.row * self.size + pos.column;
        if let Some(cell) = self.cells.get_mut(idx) {
            *cell = Cell::Occupied(player);
        }
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Iterates over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = GridPosition> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |column| GridPosition::new(row, column)))
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..self.size {
            let line: Vec<String> = (0..self.size)
                .map(|column| match self.cell(row, column) {
                    Some(Cell::Occupied(player)) => player.mark().to_string(),
                    _ => ".".to_string(),
                })
                .collect();
            result.push_str(&line.join(" "));
            if row + 1 < self.size {
                result.push('\n');
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(MIN_BOARD_SIZE)
    }
}
