//! Randomness capability used to pick secrets.
//!
//! The session never touches an ambient RNG: it draws through a
//! [`SecretSource`] supplied at construction. Production code uses
//! [`RngSecrets`] or [`SeededSecrets`]; tests inject [`ScriptedSecrets`].

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::debug;

use crate::domain::seed_derivation::derive_round_seed;

pub trait SecretSource {
    /// Draw a value uniformly from `range` (inclusive on both ends).
    fn draw(&mut self, range: RangeInclusive<i64>) -> i64;
}

impl<S: SecretSource + ?Sized> SecretSource for Box<S> {
    fn draw(&mut self, range: RangeInclusive<i64>) -> i64 {
        (**self).draw(range)
    }
}

/// Draws from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSecrets<R> {
    rng: R,
}

impl<R: Rng> RngSecrets<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSecrets<StdRng> {
    /// Uses system entropy; secrets are not reproducible.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> SecretSource for RngSecrets<R> {
    fn draw(&mut self, range: RangeInclusive<i64>) -> i64 {
        self.rng.random_range(range)
    }
}

/// Reproducible source: every round gets its own ChaCha8 stream derived from
/// a base seed and the round number.
#[derive(Debug, Clone)]
pub struct SeededSecrets {
    base_seed: u64,
    round_no: u32,
}

impl SeededSecrets {
    pub fn new(base_seed: u64) -> Self {
        Self {
            base_seed,
            round_no: 0,
        }
    }

    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Number of secrets drawn so far.
    pub fn rounds_drawn(&self) -> u32 {
        self.round_no
    }
}

impl SecretSource for SeededSecrets {
    fn draw(&mut self, range: RangeInclusive<i64>) -> i64 {
        self.round_no = self.round_no.wrapping_add(1);
        let seed = derive_round_seed(self.base_seed, self.round_no);
        debug!(round_no = self.round_no, seed, "deriving round seed");
        ChaCha8Rng::seed_from_u64(seed).random_range(range)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("a secret script needs at least one value")]
pub struct EmptyScriptError;

/// Yields a fixed sequence of secrets, cycling when exhausted.
///
/// Values outside the requested range are clamped into it.
#[derive(Debug, Clone)]
pub struct ScriptedSecrets {
    values: Vec<i64>,
    next: usize,
}

impl ScriptedSecrets {
    pub fn new(values: impl IntoIterator<Item = i64>) -> Result<Self, EmptyScriptError> {
        let values: Vec<i64> = values.into_iter().collect();
        if values.is_empty() {
            return Err(EmptyScriptError);
        }
        Ok(Self { values, next: 0 })
    }

    pub fn constant(value: i64) -> Self {
        Self {
            values: vec![value],
            next: 0,
        }
    }
}

impl SecretSource for ScriptedSecrets {
    fn draw(&mut self, range: RangeInclusive<i64>) -> i64 {
        let value = self.values[self.next % self.values.len()];
        self.next = self.next.wrapping_add(1);
        value.clamp(*range.start(), *range.end())
    }
}
