//! Status messages shown to the player and their severity classification.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

use crate::domain::rules::{MAX, MIN};

/// Presentation classification of a status message.
///
/// This only drives styling; it carries no control-flow meaning.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Ok,
    Warning,
    Error,
}

impl FeedbackKind {
    /// Short tag used by plain-text renderers.
    pub const fn tag(self) -> &'static str {
        match self {
            FeedbackKind::Ok => "ok",
            FeedbackKind::Warning => "warn",
            FeedbackKind::Error => "err",
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct FeedbackEvent {
    pub kind: FeedbackKind,
    pub message: String,
}

impl FeedbackEvent {
    pub fn new(kind: FeedbackKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(FeedbackKind::Ok, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(FeedbackKind::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(FeedbackKind::Error, message)
    }

    pub fn greeting() -> Self {
        Self::ok("Make your first guess!")
    }

    pub fn new_round() -> Self {
        Self::ok("New round. Make a guess!")
    }

    pub fn empty_input() -> Self {
        Self::warning("Please enter a value.")
    }

    pub fn not_a_number() -> Self {
        Self::error("That is not a number.")
    }

    pub fn out_of_range() -> Self {
        Self::warning(format!("Enter a number between {MIN} and {MAX}."))
    }

    pub fn won(attempts: u8) -> Self {
        Self::ok(format!(
            "You got it in {attempts} {}!",
            pluralize("try", attempts)
        ))
    }

    pub fn too_low() -> Self {
        Self::warning("Too low. Try a larger number.")
    }

    pub fn too_high() -> Self {
        Self::warning("Too high. Try a smaller number.")
    }

    pub fn close_hint() -> Self {
        Self::warning("Hint: within 10")
    }

    pub fn out_of_tries(secret: i64) -> Self {
        Self::error(format!("Out of tries. The number was {secret}."))
    }
}

impl Display for FeedbackEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "[{}] {}", self.kind.tag(), self.message)
    }
}

/// `try` → `tries` for anything but exactly one.
pub fn pluralize(word: &str, count: u8) -> String {
    match count {
        1 => word.to_string(),
        _ => match word.strip_suffix('y') {
            Some(stem) => format!("{stem}ies"),
            None => format!("{word}s"),
        },
    }
}

/// The fixed range description shown once when play starts.
pub fn range_description() -> String {
    format!("I picked a number between {MIN} and {MAX}.")
}
