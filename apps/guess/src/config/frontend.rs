//! Terminal front-end settings read from the environment.
//!
//! Game rules (range, attempt limit) are compile-time constants in
//! `domain::rules` and are deliberately absent here.

use std::env;
use std::str::FromStr;

use crate::error::AppError;

pub const DEFAULT_LIVES_SYMBOL: &str = "❤️";

/// How events are written to the terminal.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum OutputMode {
    /// Human-readable status lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for OutputMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputMode::Text),
            "json" => Ok(OutputMode::Json),
            other => Err(AppError::config(format!(
                "GUESS_OUTPUT must be 'text' or 'json', got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Base seed for reproducible secrets; `None` uses system entropy.
    pub seed: Option<u64>,
    pub output: OutputMode,
    pub lives_symbol: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            seed: None,
            output: OutputMode::Text,
            lives_symbol: DEFAULT_LIVES_SYMBOL.to_string(),
        }
    }
}

impl FrontendConfig {
    /// Build from `GUESS_SEED`, `GUESS_OUTPUT` and `GUESS_LIVES_SYMBOL`.
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            seed: seed()?,
            output: output()?,
            lives_symbol: lives_symbol(),
        })
    }
}

/// Get optional base seed (unset or blank means unseeded)
fn seed() -> Result<Option<u64>, AppError> {
    match optional_var("GUESS_SEED") {
        None => Ok(None),
        Some(raw) => raw.parse::<u64>().map(Some).map_err(|_| {
            AppError::config(format!(
                "GUESS_SEED must be an unsigned 64-bit integer, got '{raw}'"
            ))
        }),
    }
}

/// Get output mode (defaults to text)
fn output() -> Result<OutputMode, AppError> {
    optional_var("GUESS_OUTPUT").map_or(Ok(OutputMode::Text), |raw| raw.parse())
}

/// Get lives symbol (defaults to a heart)
fn lives_symbol() -> String {
    optional_var("GUESS_LIVES_SYMBOL").unwrap_or_else(|| DEFAULT_LIVES_SYMBOL.to_string())
}

/// Trimmed value of an environment variable, treating blank as unset
fn optional_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
