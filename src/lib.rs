//! Strictly Grid - N×N grid game rules with a scripted outcome harness
//!
//! Tic-tac-toe generalized to any square board of side 3 or more.
//!
//! # Architecture
//!
//! - **Games**: the [`RulesEngine`] owns the [`Board`] and turn state, applies
//!   moves, and detects wins and draws
//! - **Harness**: [`Harness`] plays both sides to force a chosen row, column,
//!   diagonal, or draw and checks the result
//! - **Console**: [`ConsoleView`], a text [`GameObserver`] for the binary
//!
//! # Example
//!
//! ```
//! use strictly_grid::{GameResult, Player, RulesEngine};
//!
//! let mut engine = RulesEngine::new(3)?;
//! for (row, column) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
//!     engine.apply_move(row, column)?;
//! }
//! assert_eq!(engine.apply_move(0, 2)?, GameResult::Win(Player::One));
//! # Ok::<(), strictly_grid::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod games;
mod harness;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Console presentation
pub use console::ConsoleView;

// Crate-level exports - Game types
pub use games::grid::{
    Board, Cell, GameError, GameObserver, GameResult, GridPosition, Line, MIN_BOARD_SIZE,
    MoveRecord, Notification, Player, RecordingObserver, RulesEngine, SoundCue,
    validate_board_size,
};

// Crate-level exports - Rules and invariants
pub use games::grid::invariants::{
    AlternatingTurnInvariant, GridInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant,
};
pub use games::grid::rules;

// Crate-level exports - Harness
pub use harness::{
    Harness, HarnessError, HarnessPlan, HarnessSettings, MoveSynthesizer, OutcomeTarget, Verdict,
};
