//! Deterministic move selection for forcing a target outcome.
//!
//! The designated winner always plays the first empty cell of the target
//! line. The opponent plays off that line, in the same row or column as the
//! winner's next cell, so it never builds a line of its own before the
//! winner completes theirs.

use super::HarnessError;
use super::target::OutcomeTarget;
use crate::games::grid::{Board, GridPosition, Player, RulesEngine, rules};
use tracing::{debug, instrument};

/// Picks the next cell for both synthetic players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct MoveSynthesizer {
    target: OutcomeTarget,
    player_to_win: Player,
}

impl MoveSynthesizer {
    /// The outcome being forced.
    pub fn target(&self) -> OutcomeTarget {
        self.target
    }

    /// The player expected to complete the target line.
    pub fn player_to_win(&self) -> Player {
        self.player_to_win
    }

    /// Chooses the cell for the player whose turn it is.
    ///
    /// # Errors
    ///
    /// [`HarnessError::NoEligibleCell`] when the scan finds nothing to play,
    /// which means the target does not fit the board.
    #[instrument(skip(engine), fields(turn = engine.turn_count(), player = %engine.current_player()))]
    pub fn pick(&self, engine: &RulesEngine) -> Result<GridPosition, HarnessError> {
        let board = engine.board();
        let size = board.size();
        let turn = engine.turn_count();
        let current = engine.current_player();

        let picked = match self.target {
            OutcomeTarget::Draw => draw_move(board, turn, current),
            OutcomeTarget::Row(row) => {
                self.line_move(engine, OutcomeTarget::Row(row), |cell, k| {
                    (k != row).then(|| GridPosition::new(k, cell.column))
                })
            }
            OutcomeTarget::Column(column) => {
                self.line_move(engine, OutcomeTarget::Column(column), |cell, k| {
                    (k != column).then(|| GridPosition::new(cell.row, k))
                })
            }
            target @ (OutcomeTarget::LeftDiagonal | OutcomeTarget::RightDiagonal) => {
                self.line_move(engine, target, |cell, k| {
                    (k != cell.column).then(|| GridPosition::new(cell.row, k))
                })
            }
        };

        match picked {
            Some(pos) => {
                debug!(%pos, size, "Synthesized move");
                Ok(pos)
            }
            None => Err(HarnessError::NoEligibleCell { turn }),
        }
    }

    /// Move for a line target.
    ///
    /// `detour(cell, k)` maps the winner's next cell and a scan index to the
    /// opponent's candidate, or `None` when `k` would land on the target line.
    fn line_move<F>(&self, engine: &RulesEngine, target: OutcomeTarget, detour: F) -> Option<GridPosition>
    where
        F: Fn(GridPosition, usize) -> Option<GridPosition>,
    {
        let board = engine.board();
        let size = board.size();
        let line = target.line()?;
        let cell = rules::line_positions(line, size)
            .into_iter()
            .find(|pos| board.is_empty(*pos))?;

        if engine.current_player() == self.player_to_win {
            return Some(cell);
        }

        // Start at turn mod size, skip the target line, and keep cycling past
        // occupied cells.
        let start = engine.turn_count() % size;
        (0..size)
            .map(|offset| (start + offset) % size)
            .filter_map(|k| detour(cell, k))
            .find(|pos| board.is_empty(*pos))
    }
}

/// First empty cell of a row-major sweep whose starting row shifts every turn.
///
/// Even boards also shift by the current player number; without it the sweep
/// lines up same-owner cells into a column.
fn draw_move(board: &Board, turn: usize, current: Player) -> Option<GridPosition> {
    let size = board.size();
    let offset = if size % 2 == 0 {
        turn + usize::from(current.number())
    } else {
        turn
    };

    (0..size)
        .flat_map(|i| (0..size).map(move |column| GridPosition::new((i + offset) % size, column)))
        .find(|pos| board.is_empty(*pos))
}
