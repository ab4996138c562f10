#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod terminal;

// Re-exports for public API
pub use config::{FrontendConfig, OutputMode};
pub use domain::{FeedbackEvent, FeedbackKind, GameSession, Phase, SecretSource};
pub use error::AppError;
pub use terminal::Terminal;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    guess_test_support::logging::init();
}
