//! Monotonic board invariant: every occupied cell came from a recorded move.

use super::super::RulesEngine;
use super::Invariant;

/// Invariant: the number of occupied cells equals the number of recorded moves.
///
/// Cells only ever go from empty to owned, one per accepted move.
pub struct MonotonicBoardInvariant;

impl Invariant<RulesEngine> for MonotonicBoardInvariant {
    fn holds(engine: &RulesEngine) -> bool {
        engine.board().occupied_count() == engine.moves_played()
    }

    fn description() -> &'static str {
        "Occupied cell count matches recorded moves"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_through_rejected_move() {
        let mut engine = RulesEngine::new(3).unwrap();
        engine.apply_move(1, 1).unwrap();
        assert!(engine.apply_move(1, 1).is_err());
        assert!(MonotonicBoardInvariant::holds(&engine));
        assert_eq!(engine.moves_played(), 1);
    }
}
