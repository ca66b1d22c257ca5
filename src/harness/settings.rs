//! Harness settings: flag-style configuration and its validated plan.

use super::target::OutcomeTarget;
use crate::config::{ConfigError, load_toml};
use crate::games::grid::{GameError, Player};
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Largest board size the harness is routinely used with.
const COMMON_MAX_BOARD_SIZE: usize = 4;

/// Raw harness settings, one boolean per target outcome.
///
/// Exactly one of `draw`, `row_win`, `column_win`, `left_diagonal_win`, and
/// `right_diagonal_win` must be set. Call [`HarnessSettings::validate`] to
/// turn the flags into a [`HarnessPlan`].
#[derive(Debug, Clone, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct HarnessSettings {
    /// Player expected to win (1 or 2). Ignored for draws.
    player_to_win: u8,
    /// Drive the game to a draw.
    draw: bool,
    /// Drive a win on row `row_index`.
    row_win: bool,
    /// Target row, 0-based.
    row_index: usize,
    /// Drive a win on column `column_index`.
    column_win: bool,
    /// Target column, 0-based.
    column_index: usize,
    /// Drive a win on the top-left to bottom-right diagonal.
    left_diagonal_win: bool,
    /// Drive a win on the top-right to bottom-left diagonal.
    right_diagonal_win: bool,
    /// Rows and columns of the board.
    board_size: usize,
    /// Seconds to wait between plies.
    move_interval_secs: f64,
}

impl Default for HarnessSettings {
    fn default() -> Self {
        Self {
            player_to_win: 1,
            draw: true,
            row_win: false,
            row_index: 0,
            column_win: false,
            column_index: 0,
            left_diagonal_win: false,
            right_diagonal_win: false,
            board_size: 3,
            move_interval_secs: 0.25,
        }
    }
}

/// A validated harness run: one target, one winner, one board size.
#[derive(Debug, Clone, Copy, PartialEq, derive_new::new)]
pub struct HarnessPlan {
    /// Outcome to force.
    pub target: OutcomeTarget,
    /// Player expected to win line targets.
    pub player_to_win: Player,
    /// Rows and columns of the board.
    pub board_size: usize,
    /// Pause between plies.
    pub move_interval: Duration,
}

impl HarnessSettings {
    /// Settings with every target flag cleared.
    ///
    /// Pair with one of the `with_*` setters to pick a target.
    #[instrument]
    pub fn without_target() -> Self {
        Self {
            draw: false,
            ..Self::default()
        }
    }

    /// Loads settings from a TOML file. Missing keys keep their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let settings: Self = load_toml(path)?;
        info!(board_size = settings.board_size, "Harness settings loaded");
        Ok(settings)
    }

    /// Targets currently selected by the flags.
    pub fn selected_targets(&self) -> Vec<OutcomeTarget> {
        let flags = [
            (self.row_win, OutcomeTarget::Row(self.row_index)),
            (self.column_win, OutcomeTarget::Column(self.column_index)),
            (self.left_diagonal_win, OutcomeTarget::LeftDiagonal),
            (self.right_diagonal_win, OutcomeTarget::RightDiagonal),
            (self.draw, OutcomeTarget::Draw),
        ];
        flags
            .into_iter()
            .filter_map(|(set, target)| set.then_some(target))
            .collect()
    }

    /// Checks the settings and builds a [`HarnessPlan`].
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidConfiguration`] when no target or several targets
    /// are selected, the board size is 2 or less, the move interval is not
    /// positive, the winner is not 1 or 2, or a row/column index is outside
    /// the board.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<HarnessPlan, GameError> {
        let targets = self.selected_targets();
        let target = match targets.as_slice() {
            [] => return Err(invalid("You must select a test!")),
            [target] => *target,
            _ => {
                return Err(invalid(
                    "You can only test one type of win or draw! Please ensure only one test is selected.",
                ));
            }
        };

        if self.board_size <= 2 {
            return Err(invalid("The board size must be greater than 2!"));
        }

        if self.board_size > COMMON_MAX_BOARD_SIZE {
            warn!(
                board_size = self.board_size,
                "Board size is larger than the usual 3x3 and 4x4 games; the game is still fully playable"
            );
        }

        if !self.move_interval_secs.is_finite() || self.move_interval_secs <= 0.0 {
            return Err(invalid("Move interval must be greater than 0!"));
        }

        let player_to_win = Player::from_number(self.player_to_win)
            .ok_or_else(|| invalid(&format!("Player to win must be 1 or 2, got {}", self.player_to_win)))?;

        match target {
            OutcomeTarget::Column(column) if column >= self.board_size => {
                return Err(invalid(&format!(
                    "Column win number must be between 0 (inclusive) and {} (exclusive)!",
                    self.board_size
                )));
            }
            OutcomeTarget::Row(row) if row >= self.board_size => {
                return Err(invalid(&format!(
                    "Row win number must be between 0 (inclusive) and {} (exclusive)!",
                    self.board_size
                )));
            }
            _ => {}
        }

        Ok(HarnessPlan::new(
            target,
            player_to_win,
            self.board_size,
            Duration::from_secs_f64(self.move_interval_secs),
        ))
    }
}

fn invalid(message: &str) -> GameError {
    GameError::InvalidConfiguration(message.to_string())
}
