//! Alternating turn invariant: players alternate 1, 2, 1, 2, ...

use super::super::{Player, RulesEngine};
use super::Invariant;

/// Invariant: the record for turn `t` was made by the player derived for `t`.
///
/// Turns are contiguous from 1 and the first move belongs to player one.
pub struct AlternatingTurnInvariant;

impl Invariant<RulesEngine> for AlternatingTurnInvariant {
    fn holds(engine: &RulesEngine) -> bool {
        engine.history().enumerate().all(|(i, record)| {
            *record.turn() == i + 1 && *record.player() == Player::for_turn(i + 1)
        })
    }

    fn description() -> &'static str {
        "Players alternate turns starting with player 1"
    }
}
