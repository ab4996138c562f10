//! Domain layer: pure game logic, no terminal or environment access.

pub mod feedback;
pub mod parsing;
pub mod rules;
pub mod secret;
pub mod seed_derivation;
pub mod session;
pub mod state;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_session;

// Re-exports for ergonomics
pub use feedback::{range_description, FeedbackEvent, FeedbackKind};
pub use parsing::{Guess, ParseGuessError};
pub use rules::{MAX, MAX_ATTEMPTS, MIN};
pub use secret::{EmptyScriptError, RngSecrets, ScriptedSecrets, SecretSource, SeededSecrets};
pub use seed_derivation::derive_round_seed;
pub use session::GameSession;
pub use state::{DisplayState, Phase};
