//! Text presentation of a running game.

use crate::games::grid::{GameObserver, SoundCue};
use std::io::Write;
use tracing::debug;

/// Prints game-over messages and turn prompts to a writer.
///
/// The board itself is printed by the caller after each move, since
/// observers get no access to engine state.
pub struct ConsoleView<W: Write + Send> {
    out: W,
    turns: usize,
}

impl<W: Write + Send> std::fmt::Debug for ConsoleView<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleView").field("turns", &self.turns).finish()
    }
}

impl ConsoleView<std::io::Stdout> {
    /// View writing to standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> ConsoleView<W> {
    /// View writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out, turns: 0 }
    }

    /// Turn notifications received so far.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Consumes the view and returns its writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> GameObserver for ConsoleView<W> {
    fn on_turn_advanced(&mut self) {
        self.turns += 1;
    }

    fn on_game_over(&mut self, message: &str) {
        if let Err(e) = writeln!(self.out, "\n*** {} ***", message) {
            debug!(error = %e, "Failed to write game-over message");
        }
    }

    fn play_sound_effect(&mut self, cue: SoundCue, one_shot: bool) {
        // No audio backend in the console.
        debug!(%cue, one_shot, "Sound cue");
    }
}
