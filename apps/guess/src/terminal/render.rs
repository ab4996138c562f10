//! Turns controller output into terminal lines.

use std::io::Write;

use serde::Serialize;

use crate::config::OutputMode;
use crate::domain::{range_description, DisplayState, FeedbackEvent, MAX, MAX_ATTEMPTS, MIN};
use crate::error::AppError;

pub const GAME_OVER_REMINDER: &str = "The round is over. Type /reset to play again.";

/// Wire shape of the JSON output mode.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Frame<'a> {
    Intro {
        range: &'a str,
        min: i64,
        max: i64,
        max_attempts: u8,
    },
    Feedback {
        #[serde(flatten)]
        event: &'a FeedbackEvent,
        display: &'a DisplayState,
    },
    Ignored {
        message: &'a str,
    },
}

#[derive(Debug, Clone)]
pub struct Renderer {
    mode: OutputMode,
    lives_symbol: String,
}

impl Renderer {
    pub fn new(mode: OutputMode, lives_symbol: impl Into<String>) -> Self {
        Self {
            mode,
            lives_symbol: lives_symbol.into(),
        }
    }

    /// The range description, shown once before the first status.
    pub fn intro<W: Write>(&self, out: &mut W) -> Result<(), AppError> {
        let range = range_description();
        match self.mode {
            OutputMode::Text => writeln!(out, "{range}")?,
            OutputMode::Json => self.frame(
                out,
                &Frame::Intro {
                    range: &range,
                    min: MIN,
                    max: MAX,
                    max_attempts: MAX_ATTEMPTS,
                },
            )?,
        }
        Ok(())
    }

    pub fn feedback<W: Write>(
        &self,
        out: &mut W,
        event: &FeedbackEvent,
        display: &DisplayState,
    ) -> Result<(), AppError> {
        match self.mode {
            OutputMode::Text => {
                writeln!(out, "{event}")?;
                writeln!(out, "{}", display.attempts_label())?;
                writeln!(out, "{}", display.lives_indicator(&self.lives_symbol))?;
            }
            OutputMode::Json => self.frame(out, &Frame::Feedback { event, display })?,
        }
        Ok(())
    }

    /// Shown when input arrives after the round ended; the controller itself
    /// stays silent in that case.
    pub fn ignored<W: Write>(&self, out: &mut W) -> Result<(), AppError> {
        match self.mode {
            OutputMode::Text => writeln!(out, "{GAME_OVER_REMINDER}")?,
            OutputMode::Json => self.frame(
                out,
                &Frame::Ignored {
                    message: GAME_OVER_REMINDER,
                },
            )?,
        }
        Ok(())
    }

    fn frame<W: Write>(&self, out: &mut W, frame: &Frame<'_>) -> Result<(), AppError> {
        serde_json::to_writer(&mut *out, frame)?;
        writeln!(out)?;
        Ok(())
    }
}
