//! Drives a game ply by ply until it ends.

use super::settings::{HarnessPlan, HarnessSettings};
use super::synthesizer::MoveSynthesizer;
use super::target::Verdict;
use super::HarnessError;
use crate::games::grid::{GameError, GameResult, RulesEngine};
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

/// Plays both sides of a game according to a [`HarnessPlan`].
#[derive(Debug)]
pub struct Harness {
    plan: HarnessPlan,
    synthesizer: MoveSynthesizer,
    stop: Option<watch::Receiver<bool>>,
}

impl Harness {
    /// Creates a harness for a validated plan.
    #[instrument]
    pub fn new(plan: HarnessPlan) -> Self {
        Self {
            plan,
            synthesizer: MoveSynthesizer::new(plan.target, plan.player_to_win),
            stop: None,
        }
    }

    /// Validates `settings` and creates a harness for them.
    pub fn from_settings(settings: &HarnessSettings) -> Result<Self, GameError> {
        Ok(Self::new(settings.validate()?))
    }

    /// Stops [`Harness::run`] between plies once `stop` reads `true`.
    pub fn with_stop_signal(mut self, stop: watch::Receiver<bool>) -> Self {
        self.stop = Some(stop);
        self
    }

    /// The plan being executed.
    pub fn plan(&self) -> &HarnessPlan {
        &self.plan
    }

    /// The move picker.
    pub fn synthesizer(&self) -> &MoveSynthesizer {
        &self.synthesizer
    }

    /// Resizes the engine to the plan's board and starts a fresh game.
    #[instrument(skip(self, engine), fields(board_size = self.plan.board_size))]
    pub fn prepare(&self, engine: &mut RulesEngine) -> Result<(), GameError> {
        engine.set_board_size(self.plan.board_size)?;
        engine.reset();
        Ok(())
    }

    /// Applies exactly one synthesized move.
    #[instrument(skip(self, engine), fields(turn = engine.turn_count()))]
    pub fn step(&self, engine: &mut RulesEngine) -> Result<GameResult, HarnessError> {
        let pos = self.synthesizer.pick(engine)?;
        let result = engine.apply(pos)?;
        debug!(%pos, ?result, "Ply applied");
        Ok(result)
    }

    /// Plays the game to the end without pausing between plies.
    #[instrument(skip(self, engine), fields(outcome = %self.plan.target))]
    pub fn play_out(&self, engine: &mut RulesEngine) -> Result<Verdict, HarnessError> {
        while !engine.is_game_over() {
            self.step(engine)?;
        }
        Ok(self.conclude(engine))
    }

    /// Plays the game to the end, sleeping the plan's move interval between plies.
    ///
    /// # Errors
    ///
    /// [`HarnessError::Stopped`] if the stop signal fires first, otherwise any
    /// error from [`Harness::step`].
    #[instrument(skip(self, engine), fields(outcome = %self.plan.target, interval = ?self.plan.move_interval))]
    pub async fn run(&self, engine: &mut RulesEngine) -> Result<Verdict, HarnessError> {
        info!("Starting harness run");
        loop {
            if self.stop_requested() {
                warn!(turn = engine.turn_count(), "Harness stopped");
                return Err(HarnessError::Stopped);
            }

            self.step(engine)?;
            if engine.is_game_over() {
                break;
            }

            tokio::time::sleep(self.plan.move_interval).await;
        }
        Ok(self.conclude(engine))
    }

    fn stop_requested(&self) -> bool {
        self.stop.as_ref().is_some_and(|rx| *rx.borrow())
    }

    fn conclude(&self, engine: &RulesEngine) -> Verdict {
        let verdict = self
            .plan
            .target
            .verify(self.plan.player_to_win, engine.result());
        verdict.report();
        verdict
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::OutcomeTarget;
    use crate::games::grid::Player;
    use std::time::Duration;

    fn plan(target: OutcomeTarget, winner: Player, size: usize) -> HarnessPlan {
        HarnessPlan::new(target, winner, size, Duration::from_millis(1))
    }

    #[test]
    fn test_prepare_resizes_engine() {
        let harness = Harness::new(plan(OutcomeTarget::Draw, Player::One, 5));
        let mut engine = RulesEngine::new(3).unwrap();
        engine.apply_move(0, 0).unwrap();
        harness.prepare(&mut engine).unwrap();
        assert_eq!(engine.size(), 5);
        assert_eq!(engine.moves_played(), 0);
    }

    #[test]
    fn test_step_applies_one_move() {
        let harness = Harness::new(plan(OutcomeTarget::Column(2), Player::One, 3));
        let mut engine = RulesEngine::new(3).unwrap();
        assert_eq!(harness.step(&mut engine), Ok(GameResult::InProgress));
        assert_eq!(engine.moves_played(), 1);
        assert_eq!(engine.board().cell(0, 2).and_then(|c| c.owner()), Some(Player::One));
    }

    #[test]
    fn test_step_after_game_over_fails() {
        let harness = Harness::new(plan(OutcomeTarget::Row(0), Player::One, 3));
        let mut engine = RulesEngine::new(3).unwrap();
        assert!(harness.play_out(&mut engine).unwrap().is_pass());
        assert!(harness.step(&mut engine).is_err());
    }

    #[tokio::test]
    async fn test_run_stops_on_signal() {
        let (tx, rx) = watch::channel(false);
        let harness = Harness::new(plan(OutcomeTarget::Draw, Player::One, 3)).with_stop_signal(rx);
        let mut engine = RulesEngine::new(3).unwrap();
        tx.send(true).unwrap();
        assert_eq!(harness.run(&mut engine).await, Err(HarnessError::Stopped));
        assert_eq!(engine.moves_played(), 0);
    }
}
