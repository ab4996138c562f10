use std::ops::RangeInclusive;

pub const MIN: i64 = 1;
pub const MAX: i64 = 100;
pub const MAX_ATTEMPTS: u8 = 10;

/// Attempt count from which a close guess earns the proximity hint.
pub const HINT_FROM_ATTEMPT: u8 = 5;
/// Maximum distance from the secret that still counts as "close".
pub const HINT_DISTANCE: f64 = 10.0;

pub fn secret_range() -> RangeInclusive<i64> {
    MIN..=MAX
}

/// Whether a parsed guess is an acceptable value (inclusive on both ends).
pub fn in_range(value: f64) -> bool {
    value >= MIN as f64 && value <= MAX as f64
}

pub fn remaining_lives(attempts: u8) -> u8 {
    MAX_ATTEMPTS.saturating_sub(attempts)
}

pub fn hint_applies(attempts: u8, guess: f64, secret: i64) -> bool {
    attempts >= HINT_FROM_ATTEMPT && (guess - secret as f64).abs() <= HINT_DISTANCE
}
