//! Guess parsing from raw player input (e.g., " 42", "4.5", "0x2A").

use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseGuessError {
    #[error("input is empty")]
    Empty,
    #[error("not a number: {0:?}")]
    NotANumber(String),
    #[error("number is not finite: {0:?}")]
    NotFinite(String),
}

/// A numeric guess as typed by the player.
///
/// Non-integral values are kept as-is: they are legal guesses inside the
/// range but can never match an integer secret.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Guess(pub f64);

impl Guess {
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn matches(self, secret: i64) -> bool {
        self.0 == secret as f64
    }
}

impl FromStr for Guess {
    type Err = ParseGuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseGuessError::Empty);
        }

        let value = match radix_prefix(trimmed) {
            Some((radix, digits)) => parse_radix(digits, radix)
                .ok_or_else(|| ParseGuessError::NotANumber(trimmed.to_string()))?,
            None => parse_decimal(trimmed)
                .ok_or_else(|| ParseGuessError::NotANumber(trimmed.to_string()))?,
        };

        if !value.is_finite() {
            return Err(ParseGuessError::NotFinite(trimmed.to_string()));
        }
        Ok(Guess(value))
    }
}

fn radix_prefix(s: &str) -> Option<(u32, &str)> {
    let (prefix, rest) = s.split_at_checked(2)?;
    match prefix {
        "0x" | "0X" => Some((16, rest)),
        "0o" | "0O" => Some((8, rest)),
        "0b" | "0B" => Some((2, rest)),
        _ => None,
    }
}

/// Unsigned digits only; a sign after the prefix is not a number.
fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

/// Plain decimal notation with optional sign, fraction and exponent.
///
/// `f64::from_str` also understands the spelled-out `inf`/`NaN` family; those
/// are rejected here so only digit-bearing literals get through.
fn parse_decimal(s: &str) -> Option<f64> {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    s.parse::<f64>().ok()
}
