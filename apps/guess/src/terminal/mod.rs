//! Line-oriented presentation adapter.
//!
//! Each input line is a "guess submitted" trigger (the Enter key). Two slash
//! commands cover the remaining triggers: `/reset` starts a new round and
//! `/quit` ends the program, as does end of input.

pub mod render;

use std::borrow::Cow;
use std::io::{BufRead, Write};

use tracing::debug;

use crate::config::FrontendConfig;
use crate::domain::{GameSession, SecretSource};
use crate::error::AppError;

pub use render::Renderer;

pub const RESET_COMMAND: &str = "/reset";
pub const QUIT_COMMAND: &str = "/quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Guess(&'a str),
    Reset,
    Quit,
}

impl<'a> Command<'a> {
    /// Anything that is not a slash command goes to the controller verbatim;
    /// the controller decides whether it is a usable guess.
    pub fn parse(line: &'a str) -> Self {
        match line.trim() {
            RESET_COMMAND => Command::Reset,
            QUIT_COMMAND => Command::Quit,
            _ => Command::Guess(line),
        }
    }
}

/// Drives one session from `input` until `/quit` or end of input.
pub struct Terminal<S> {
    session: GameSession<S>,
    renderer: Renderer,
}

impl<S: SecretSource> Terminal<S> {
    pub fn new(session: GameSession<S>, config: &FrontendConfig) -> Self {
        Self {
            session,
            renderer: Renderer::new(config.output, config.lives_symbol.clone()),
        }
    }

    pub fn session(&self) -> &GameSession<S> {
        &self.session
    }

    /// Bytes that are not UTF-8 are replaced rather than rejected, so any
    /// typed line reaches the controller and gets feedback.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut out: W,
    ) -> Result<(), AppError> {
        self.renderer.intro(&mut out)?;
        self.show_status(&mut out)?;

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(strip_line_ending(&buf));
            if matches!(line, Cow::Owned(_)) {
                debug!("input line was not valid UTF-8");
            }
            match Command::parse(&line) {
                Command::Quit => {
                    debug!("quit requested");
                    break;
                }
                Command::Reset => {
                    self.session.reset();
                    self.show_status(&mut out)?;
                }
                Command::Guess(raw) => {
                    if self.session.submit_guess(raw).is_some() {
                        self.show_status(&mut out)?;
                    } else {
                        self.renderer.ignored(&mut out)?;
                    }
                }
            }
            out.flush()?;
        }

        out.flush()?;
        Ok(())
    }

    fn show_status<W: Write>(&self, out: &mut W) -> Result<(), AppError> {
        self.renderer
            .feedback(out, self.session.status(), &self.session.display())
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
