//! N×N grid game (tic-tac-toe generalized to any board size ≥ 3).

mod action;
mod engine;
mod events;
pub mod invariants;
pub mod rules;
mod types;

pub use action::{GameError, GameResult, MoveRecord};
pub use engine::{RulesEngine, validate_board_size};
pub use events::{GameObserver, Notification, RecordingObserver, SoundCue};
pub use rules::Line;
pub use types::{Board, Cell, GridPosition, MIN_BOARD_SIZE, Player};
