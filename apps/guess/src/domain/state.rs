use serde::Serialize;

use crate::domain::rules::remaining_lives;

/// Round progression.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Guesses are accepted.
    InProgress,
    /// Secret found or attempts exhausted; only a reset leaves this phase.
    Over,
}

/// What the presentation layer shows next to the status line.
///
/// Always derived from the session's attempt counter, never stored.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct DisplayState {
    pub attempts: u8,
    pub remaining_lives: u8,
    pub over: bool,
}

impl DisplayState {
    pub fn derive(attempts: u8, phase: Phase) -> Self {
        Self {
            attempts,
            remaining_lives: remaining_lives(attempts),
            over: phase == Phase::Over,
        }
    }

    pub fn attempts_label(&self) -> String {
        format!("Attempts: {}", self.attempts)
    }

    /// One `symbol` per remaining life.
    pub fn lives_indicator(&self, symbol: &str) -> String {
        symbol.repeat(usize::from(self.remaining_lives))
    }
}
