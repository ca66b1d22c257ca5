//! Target outcomes and the pass/fail verdict.

use crate::games::grid::{GameResult, Line, Player};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

/// The single outcome a harness run tries to force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum OutcomeTarget {
    /// Win on the row with this index.
    #[display("row {} win", _0)]
    Row(usize),
    /// Win on the column with this index.
    #[display("column {} win", _0)]
    Column(usize),
    /// Win on the top-left to bottom-right diagonal.
    #[display("left diagonal win")]
    LeftDiagonal,
    /// Win on the top-right to bottom-left diagonal.
    #[display("right diagonal win")]
    RightDiagonal,
    /// Fill the board without a completed line.
    #[display("draw")]
    Draw,
}

impl OutcomeTarget {
    /// The board line this target completes, `None` for a draw.
    pub fn line(self) -> Option<Line> {
        match self {
            OutcomeTarget::Row(row) => Some(Line::Row(row)),
            OutcomeTarget::Column(column) => Some(Line::Column(column)),
            OutcomeTarget::LeftDiagonal => Some(Line::MainDiagonal),
            OutcomeTarget::RightDiagonal => Some(Line::AntiDiagonal),
            OutcomeTarget::Draw => None,
        }
    }

    /// Result a successful run ends with.
    pub fn expected_result(self, player_to_win: Player) -> GameResult {
        match self {
            OutcomeTarget::Draw => GameResult::Draw,
            _ => GameResult::Win(player_to_win),
        }
    }

    /// Compares a finished game against this target.
    #[instrument]
    pub fn verify(self, player_to_win: Player, actual: GameResult) -> Verdict {
        let expected = self.expected_result(player_to_win);
        if actual == expected {
            Verdict::Passed(actual)
        } else {
            Verdict::Failed { expected, actual }
        }
    }
}

/// Outcome of a harness run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The game ended as targeted.
    Passed(GameResult),
    /// The game ended some other way.
    Failed {
        /// Result the target called for.
        expected: GameResult,
        /// Result the engine reported.
        actual: GameResult,
    },
}

impl Verdict {
    /// Whether the run passed.
    pub fn is_pass(self) -> bool {
        matches!(self, Verdict::Passed(_))
    }

    /// Logs the verdict: passes at `info`, failures at `error`.
    pub fn report(self) {
        match self {
            Verdict::Passed(GameResult::Draw) => info!("Test passed! The game is a draw as expected!"),
            Verdict::Passed(GameResult::Win(player)) => {
                info!("Test passed! {} has won as expected!", player)
            }
            Verdict::Passed(GameResult::InProgress) => info!("Test passed!"),
            Verdict::Failed { expected, actual } => {
                error!(?expected, ?actual, "Test failed!")
            }
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Passed(result) => write!(f, "PASS ({:?})", result),
            Verdict::Failed { expected, actual } => {
                write!(f, "FAIL (expected {:?}, got {:?})", expected, actual)
            }
        }
    }
}
