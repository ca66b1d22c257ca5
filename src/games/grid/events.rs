//! Notifications emitted by the rules engine.
//!
//! Presentation and audio layers subscribe through [`GameObserver`]. The
//! engine never waits on an observer and never reads anything back from one.

use std::sync::{Arc, Mutex};
use tracing::instrument;

/// Sound cues the engine may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum SoundCue {
    /// A cell was claimed.
    Choose,
    /// A move was rejected.
    Error,
    /// The game reached a win or draw.
    GameOver,
}

/// Receiver of engine notifications.
///
/// Every method defaults to doing nothing, so observers only implement what
/// they consume.
pub trait GameObserver: Send {
    /// A non-terminal move completed (or the board was reset).
    ///
    /// Observers query [`crate::RulesEngine::current_player`] themselves.
    fn on_turn_advanced(&mut self) {}

    /// The game ended; `message` is the formatted win or draw text.
    fn on_game_over(&mut self, _message: &str) {}

    /// Fire-and-forget request to play a sound effect.
    fn play_sound_effect(&mut self, _cue: SoundCue, _one_shot: bool) {}
}

/// A notification captured by [`RecordingObserver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// See [`GameObserver::on_turn_advanced`].
    TurnAdvanced,
    /// See [`GameObserver::on_game_over`].
    GameOver(String),
    /// See [`GameObserver::play_sound_effect`].
    Sound {
        /// Requested cue.
        cue: SoundCue,
        /// Whether the cue plays once.
        one_shot: bool,
    },
}

/// Observer that stores every notification it receives.
///
/// Clones share the same log, so a test can hand one clone to the engine and
/// inspect another.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    log: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingObserver {
    /// Creates an observer with an empty log.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything recorded so far.
    pub fn notifications(&self) -> Vec<Notification> {
        match self.log.lock() {
            Ok(log) => log.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Most recent game-over message, if any.
    pub fn last_game_over(&self) -> Option<String> {
        self.notifications().into_iter().rev().find_map(|n| match n {
            Notification::GameOver(message) => Some(message),
            _ => None,
        })
    }

    /// Number of turn-advanced notifications.
    pub fn turns_advanced(&self) -> usize {
        self.notifications()
            .iter()
            .filter(|n| **n == Notification::TurnAdvanced)
            .count()
    }

    /// Clears the log.
    pub fn clear(&self) {
        if let Ok(mut log) = self.log.lock() {
            log.clear();
        }
    }

    fn push(&self, notification: Notification) {
        match self.log.lock() {
            Ok(mut log) => log.push(notification),
            Err(poisoned) => poisoned.into_inner().push(notification),
        }
    }
}

impl GameObserver for RecordingObserver {
    fn on_turn_advanced(&mut self) {
        self.push(Notification::TurnAdvanced);
    }

    fn on_game_over(&mut self, message: &str) {
        self.push(Notification::GameOver(message.to_string()));
    }

    fn play_sound_effect(&mut self, cue: SoundCue, one_shot: bool) {
        self.push(Notification::Sound { cue, one_shot });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_log() {
        let recorder = RecordingObserver::new();
        let mut handle = recorder.clone();
        handle.on_turn_advanced();
        handle.on_game_over("The game is a draw!");
        assert_eq!(recorder.turns_advanced(), 1);
        assert_eq!(recorder.last_game_over().as_deref(), Some("The game is a draw!"));
    }

    #[test]
    fn test_clear() {
        let mut recorder = RecordingObserver::new();
        recorder.play_sound_effect(SoundCue::Choose, true);
        recorder.clear();
        assert!(recorder.notifications().is_empty());
    }
}
