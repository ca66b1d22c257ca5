//! Scripted outcome harness.
//!
//! Plays both sides of a game to force a chosen row, column, diagonal, or
//! draw outcome, then checks the engine reported exactly that.
//!
//! # Example
//!
//! ```
//! use strictly_grid::{Harness, HarnessSettings, RulesEngine};
//!
//! let settings = HarnessSettings::without_target().with_left_diagonal_win(true);
//! let harness = Harness::from_settings(&settings).unwrap();
//! let mut engine = RulesEngine::new(3).unwrap();
//! harness.prepare(&mut engine).unwrap();
//! assert!(harness.play_out(&mut engine).unwrap().is_pass());
//! ```

mod runner;
mod settings;
mod synthesizer;
mod target;

pub use runner::Harness;
pub use settings::{HarnessPlan, HarnessSettings};
pub use synthesizer::MoveSynthesizer;
pub use target::{OutcomeTarget, Verdict};

use crate::games::grid::GameError;

/// Errors raised while driving a harness run.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum HarnessError {
    /// The engine rejected a synthesized move or the setup.
    #[display("{}", _0)]
    #[from]
    Game(GameError),

    /// No empty cell matched the selection rule.
    #[display("No eligible cell to play on turn {}", turn)]
    NoEligibleCell {
        /// Turn being synthesized.
        turn: usize,
    },

    /// The stop signal fired before the game ended.
    #[display("Harness stopped before the game ended")]
    Stopped,
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HarnessError::Game(e) => Some(e),
            _ => None,
        }
    }
}
