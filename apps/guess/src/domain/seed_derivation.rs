//! RNG seed derivation for reproducible rounds.
//!
//! A seeded session derives one seed per round from a single base seed, so
//! replaying the same base seed replays the same sequence of secrets.

/// Derive the seed used to draw the secret of a given round.
///
/// # Arguments
///
/// * `base_seed` - Seed configured for the whole play session
/// * `round_no` - 1-based round number (incremented on every reset)
pub fn derive_round_seed(base_seed: u64, round_no: u32) -> u64 {
    // Spread rounds apart so neighbouring rounds never share low bits
    base_seed
        .wrapping_add(u64::from(round_no).wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .wrapping_add(1)
}
