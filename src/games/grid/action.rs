//! Moves, outcomes, and move errors.
//!
//! A [`MoveRecord`] is the audit entry left behind by every accepted move.
//! [`GameResult`] is what the engine reports back after each move.

use super::{GridPosition, Player};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// An accepted move, kept in the engine's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct MoveRecord {
    /// Turn on which the move was played (1-based).
    turn: usize,
    /// The player that moved.
    player: Player,
    /// The cell that was claimed.
    position: GridPosition,
    /// Wall-clock time the move was recorded.
    timestamp: DateTime<Local>,
}

impl MoveRecord {
    /// Creates a record stamped with the current local time.
    #[instrument]
    pub fn new(turn: usize, player: Player, position: GridPosition) -> Self {
        Self {
            turn,
            player,
            position,
            timestamp: Local::now(),
        }
    }
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "For turn {}, player {} chose the grid located at {}. The move took place at {}",
            self.turn,
            self.player.number(),
            self.position,
            self.timestamp.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

/// Outcome reported after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameResult {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended with a completed line.
    Win(Player),
    /// Board filled with no completed line.
    Draw,
}

impl GameResult {
    /// Whether no further moves are accepted.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::Win(player) => Some(player),
            _ => None,
        }
    }

    /// End-of-game message shown to players, `None` while in progress.
    pub fn message(self) -> Option<String> {
        match self {
            GameResult::InProgress => None,
            GameResult::Win(player) => Some(format!("Player {} has won!", player.number())),
            GameResult::Draw => Some("The game is a draw!".to_string()),
        }
    }
}

/// Errors reported by the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Setup values are inconsistent (board size, harness flags, indices).
    #[display("Invalid configuration: {}", _0)]
    InvalidConfiguration(String),

    /// The addressed cell is outside the board.
    #[display("Position ({}, {}) is outside the {}x{} board", row, column, size, size)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
        /// Board side length.
        size: usize,
    },

    /// The addressed cell already has an owner.
    #[display("Cell ({}, {}) is already occupied", row, column)]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },

    /// A win or draw has already been reported.
    #[display("Game is already over")]
    GameAlreadyOver,
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_messages() {
        assert_eq!(GameResult::InProgress.message(), None);
        assert_eq!(
            GameResult::Win(Player::One).message().as_deref(),
            Some("Player 1 has won!")
        );
        assert_eq!(
            GameResult::Win(Player::Two).message().as_deref(),
            Some("Player 2 has won!")
        );
        assert_eq!(GameResult::Draw.message().as_deref(), Some("The game is a draw!"));
    }

    #[test]
    fn test_record_display() {
        let record = MoveRecord::new(3, Player::One, GridPosition::new(1, 2));
        let text = record.to_string();
        assert!(text.starts_with("For turn 3, player 1 chose the grid located at (1, 2)."));
    }

    #[test]
    fn test_error_display() {
        let err = GameError::OutOfBounds { row: 4, column: 0, size: 3 };
        assert_eq!(err.to_string(), "Position (4, 0) is outside the 3x3 board");
    }
}
