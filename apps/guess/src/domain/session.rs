//! The game session controller: owns one round of play and turns raw input
//! into feedback.

use tracing::{debug, info};

use crate::domain::feedback::FeedbackEvent;
use crate::domain::parsing::{Guess, ParseGuessError};
use crate::domain::rules::{hint_applies, in_range, secret_range, MAX, MAX_ATTEMPTS, MIN};
use crate::domain::secret::SecretSource;
use crate::domain::state::{DisplayState, Phase};

/// One round of the guessing game plus the source its secrets come from.
///
/// All mutation goes through [`GameSession::submit_guess`] and
/// [`GameSession::reset`]. Every call runs to completion; the session is a
/// plain owned value and needs no synchronisation.
#[derive(Debug, Clone)]
pub struct GameSession<S> {
    secrets: S,
    secret: i64,
    attempts: u8,
    phase: Phase,
    status: FeedbackEvent,
    round_no: u32,
}

impl<S: SecretSource> GameSession<S> {
    pub fn new(mut secrets: S) -> Self {
        let secret = draw_secret(&mut secrets);
        info!(round_no = 1, "round started");
        Self {
            secrets,
            secret,
            attempts: 0,
            phase: Phase::InProgress,
            status: FeedbackEvent::greeting(),
            round_no: 1,
        }
    }

    /// Handle one "guess submitted" trigger.
    ///
    /// Returns `None` when the round is already over: the guess is ignored and
    /// nothing changes. Invalid input yields feedback without touching the
    /// attempt counter.
    pub fn submit_guess(&mut self, raw_input: &str) -> Option<FeedbackEvent> {
        if self.phase == Phase::Over {
            debug!(round_no = self.round_no, "guess ignored after game over");
            return None;
        }

        let guess = match raw_input.parse::<Guess>() {
            Ok(guess) => guess,
            Err(ParseGuessError::Empty) => {
                return Some(self.set_status(FeedbackEvent::empty_input()))
            }
            Err(err) => {
                debug!(error = %err, "rejected guess");
                return Some(self.set_status(FeedbackEvent::not_a_number()));
            }
        };

        if !in_range(guess.value()) {
            debug!(guess = guess.value(), min = MIN, max = MAX, "guess out of range");
            return Some(self.set_status(FeedbackEvent::out_of_range()));
        }

        self.attempts += 1;
        debug!(
            round_no = self.round_no,
            attempts = self.attempts,
            guess = guess.value(),
            "guess accepted"
        );

        if guess.matches(self.secret) {
            self.phase = Phase::Over;
            info!(round_no = self.round_no, attempts = self.attempts, "round won");
            return Some(self.set_status(FeedbackEvent::won(self.attempts)));
        }

        let mut status = if guess.value() < self.secret as f64 {
            FeedbackEvent::too_low()
        } else {
            FeedbackEvent::too_high()
        };

        // Only the last status is ever shown
        if hint_applies(self.attempts, guess.value(), self.secret) {
            status = supersede(status, FeedbackEvent::close_hint());
        }

        if self.attempts >= MAX_ATTEMPTS {
            self.phase = Phase::Over;
            info!(round_no = self.round_no, secret = self.secret, "round lost");
            status = supersede(status, FeedbackEvent::out_of_tries(self.secret));
        }

        Some(self.set_status(status))
    }

    /// Handle a "reset requested" trigger: new secret, zero attempts, back in
    /// progress. Nothing from the previous round survives.
    pub fn reset(&mut self) -> FeedbackEvent {
        self.secret = draw_secret(&mut self.secrets);
        self.attempts = 0;
        self.phase = Phase::InProgress;
        self.round_no = self.round_no.wrapping_add(1);
        info!(round_no = self.round_no, "round started");
        self.set_status(FeedbackEvent::new_round())
    }

    fn set_status(&mut self, event: FeedbackEvent) -> FeedbackEvent {
        self.status = event.clone();
        event
    }
}

impl<S> GameSession<S> {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }

    pub fn attempts(&self) -> u8 {
        self.attempts
    }

    /// 1-based; bumped by every reset.
    pub fn round_no(&self) -> u32 {
        self.round_no
    }

    /// The secret of the current round. Presentation code should only show it
    /// once the round is over.
    pub fn secret(&self) -> i64 {
        self.secret
    }

    /// The status most recently produced (greeting before the first guess).
    pub fn status(&self) -> &FeedbackEvent {
        &self.status
    }

    pub fn display(&self) -> DisplayState {
        DisplayState::derive(self.attempts, self.phase)
    }
}

fn draw_secret<S: SecretSource>(secrets: &mut S) -> i64 {
    secrets.draw(secret_range()).clamp(MIN, MAX)
}

fn supersede(previous: FeedbackEvent, next: FeedbackEvent) -> FeedbackEvent {
    debug!(superseded = %previous.message, "status overwritten");
    next
}
