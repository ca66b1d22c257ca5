//! The rules engine: the single authority for applying moves.

use super::action::{GameError, GameResult, MoveRecord};
use super::events::{GameObserver, SoundCue};
use super::invariants::{GridInvariants, InvariantSet};
use super::rules::{self, Line};
use super::types::{Board, GridPosition, MIN_BOARD_SIZE, Player};
use std::collections::BTreeMap;
use tracing::{debug, error, info, instrument, warn};

/// Owns the board and turn state for one game at a time.
///
/// All mutation goes through [`RulesEngine::apply_move`] and
/// [`RulesEngine::reset`]. Whose turn it is is derived from the turn count.
pub struct RulesEngine {
    configured_size: usize,
    pub(crate) board: Board,
    turn_count: usize,
    history: BTreeMap<usize, MoveRecord>,
    result: GameResult,
    winning_line: Option<Line>,
    observers: Vec<Box<dyn GameObserver>>,
}

impl std::fmt::Debug for RulesEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RulesEngine")
            .field("size", &self.board.size())
            .field("turn_count", &self.turn_count)
            .field("result", &self.result)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Checks that `size` is a playable board size.
pub fn validate_board_size(size: usize) -> Result<(), GameError> {
    if size < MIN_BOARD_SIZE {
        return Err(GameError::InvalidConfiguration(format!(
            "Board size must be at least {}, got {}",
            MIN_BOARD_SIZE, size
        )));
    }
    Ok(())
}

impl RulesEngine {
    /// Creates an engine with a fresh `size × size` board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfiguration`] when `size < 3`.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GameError> {
        validate_board_size(size)?;
        info!(size, "Creating rules engine");
        Ok(Self {
            configured_size: size,
            board: Board::new(size),
            turn_count: 1,
            history: BTreeMap::new(),
            result: GameResult::InProgress,
            winning_line: None,
            observers: Vec::new(),
        })
    }

    /// Registers an observer for turn, game-over, and sound notifications.
    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    /// Allocates a fresh board of `size` and resets the turn state.
    ///
    /// The size also becomes the one used by later [`RulesEngine::reset`] calls.
    #[instrument(skip(self))]
    pub fn create_board(&mut self, size: usize) -> Result<(), GameError> {
        validate_board_size(size)?;
        self.configured_size = size;
        self.board = Board::new(size);
        self.turn_count = 1;
        self.history.clear();
        self.result = GameResult::InProgress;
        self.winning_line = None;
        debug!(size, "Board created");
        Ok(())
    }

    /// Sets the size used by the next [`RulesEngine::reset`].
    #[instrument(skip(self))]
    pub fn set_board_size(&mut self, size: usize) -> Result<(), GameError> {
        validate_board_size(size)?;
        self.configured_size = size;
        Ok(())
    }

    /// Clears the board, turn count, and history, rebuilding at the configured size.
    #[instrument(skip(self), fields(size = self.configured_size))]
    pub fn reset(&mut self) {
        self.board = Board::new(self.configured_size);
        self.turn_count = 1;
        self.history.clear();
        self.result = GameResult::InProgress;
        self.winning_line = None;
        info!("Game reset");
        for observer in &mut self.observers {
            observer.on_turn_advanced();
        }
    }

    /// Returns the player who moves next (1 on odd turns, 2 on even turns).
    pub fn current_player(&self) -> Player {
        Player::for_turn(self.turn_count)
    }

    /// Claims `(row, column)` for the current player and evaluates the outcome.
    ///
    /// A rejected move leaves the board and turn state untouched.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameAlreadyOver`] after a win or draw was reported.
    /// - [`GameError::OutOfBounds`] when either index is outside the board.
    /// - [`GameError::CellOccupied`] when the cell already has an owner.
    #[instrument(skip(self), fields(turn = self.turn_count, player = %self.current_player()))]
    pub fn apply_move(&mut self, row: usize, column: usize) -> Result<GameResult, GameError> {
        if let Err(e) = self.check_move(row, column) {
            warn!(error = %e, "Move rejected");
            self.emit_sound(SoundCue::Error);
            return Err(e);
        }

        let pos = GridPosition::new(row, column);
        let player = self.current_player();
        self.board.claim(pos, player);
        self.history
            .insert(self.turn_count, MoveRecord::new(self.turn_count, player, pos));
        self.emit_sound(SoundCue::Choose);
        debug!(%pos, "Cell claimed");

        if cfg!(debug_assertions) {
            if let Err(violations) = GridInvariants::check_all(&*self) {
                for violation in violations {
                    error!(invariant = %violation.description, "Invariant violated after move");
                }
            }
        }

        self.result = self.evaluate(pos, player);

        match self.result {
            GameResult::InProgress => {
                self.turn_count += 1;
                for observer in &mut self.observers {
                    observer.on_turn_advanced();
                }
            }
            result => {
                // A terminal result always carries a message.
                let message = result.message().unwrap_or_default();
                info!(%message, line = ?self.winning_line, "Game over");
                self.emit_sound(SoundCue::GameOver);
                for observer in &mut self.observers {
                    observer.on_game_over(&message);
                }
            }
        }

        Ok(self.result)
    }

    /// Same as [`RulesEngine::apply_move`] with a [`GridPosition`].
    pub fn apply(&mut self, pos: GridPosition) -> Result<GameResult, GameError> {
        self.apply_move(pos.row, pos.column)
    }

    fn check_move(&self, row: usize, column: usize) -> Result<(), GameError> {
        if self.result.is_terminal() {
            return Err(GameError::GameAlreadyOver);
        }
        let size = self.board.size();
        if row >= size || column >= size {
            return Err(GameError::OutOfBounds { row, column, size });
        }
        if !self.board.is_empty(GridPosition::new(row, column)) {
            return Err(GameError::CellOccupied { row, column });
        }
        Ok(())
    }

    /// Outcome of the move just played at `pos` by `player`.
    fn evaluate(&mut self, pos: GridPosition, player: Player) -> GameResult {
        let size = self.board.size();
        if self.turn_count < rules::min_turns_to_win(size) {
            return GameResult::InProgress;
        }

        if let Some(line) = rules::completed_line(&self.board, pos, player) {
            self.winning_line = Some(line);
            return GameResult::Win(player);
        }

        if rules::draw::is_last_turn(self.turn_count, size) {
            return GameResult::Draw;
        }

        GameResult::InProgress
    }

    fn emit_sound(&mut self, cue: SoundCue) {
        for observer in &mut self.observers {
            observer.play_sound_effect(cue, true);
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side length of the current board.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Size the next reset will use.
    pub fn configured_size(&self) -> usize {
        self.configured_size
    }

    /// Current turn number (starts at 1, frozen once the game ends).
    pub fn turn_count(&self) -> usize {
        self.turn_count
    }

    /// Latest result.
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Whether a win or draw has been reported.
    pub fn is_game_over(&self) -> bool {
        self.result.is_terminal()
    }

    /// The winner, if the game was won.
    pub fn winner(&self) -> Option<Player> {
        self.result.winner()
    }

    /// The line that decided the game, if it was won.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Move history in turn order.
    pub fn history(&self) -> impl Iterator<Item = &MoveRecord> {
        self.history.values()
    }

    /// The record for `turn`, if that move has been played.
    pub fn move_at(&self, turn: usize) -> Option<&MoveRecord> {
        self.history.get(&turn)
    }

    /// Number of accepted moves.
    pub fn moves_played(&self) -> usize {
        self.history.len()
    }

    /// Serializes the move history as a JSON array.
    pub fn history_json(&self) -> Result<String, serde_json::Error> {
        let records: Vec<&MoveRecord> = self.history.values().collect();
        serde_json::to_string_pretty(&records)
    }

    /// Logs every move of the current game.
    #[instrument(skip(self))]
    pub fn print_move_history(&self) {
        for record in self.history.values() {
            info!("{}", record);
        }
    }
}
