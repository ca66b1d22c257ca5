//! History consistency invariant: each record matches the board.

use super::super::{Cell, RulesEngine};
use super::Invariant;

/// Invariant: every recorded cell is owned by the player that recorded it.
pub struct HistoryConsistentInvariant;

impl Invariant<RulesEngine> for HistoryConsistentInvariant {
    fn holds(engine: &RulesEngine) -> bool {
        engine
            .history()
            .all(|record| engine.board().get(*record.position()) == Some(Cell::Occupied(*record.player())))
    }

    fn description() -> &'static str {
        "Every recorded move owns its cell"
    }
}
