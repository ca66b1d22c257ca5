//! First-class invariants for the grid game.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. The engine checks them in debug builds; tests check them directly.

use super::RulesEngine;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        collect(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        collect(violations)
    }
}

pub mod alternating_turn;
pub mod history_consistent;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// All grid game invariants as a composable set.
pub type GridInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
);

/// Checks [`GridInvariants`] against an engine.
pub fn check_engine(engine: &RulesEngine) -> Result<(), Vec<InvariantViolation>> {
    GridInvariants::check_all(engine)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let engine = RulesEngine::new(3).unwrap();
        assert!(GridInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut engine = RulesEngine::new(4).unwrap();
        for (r, c) in [(0, 0), (3, 3), (1, 2), (2, 0)] {
            engine.apply_move(r, c).unwrap();
        }
        assert!(check_engine(&engine).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let engine = RulesEngine::new(3).unwrap();
        type TwoInvariants = (MonotonicBoardInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_violation_reported() {
        let mut engine = RulesEngine::new(3).unwrap();
        engine.apply_move(0, 0).unwrap();
        // Claim a cell behind the engine's back.
        engine.board.claim(super::super::GridPosition::new(2, 2), super::super::Player::Two);
        let violations = check_engine(&engine).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, MonotonicBoardInvariant::description());
    }
}
