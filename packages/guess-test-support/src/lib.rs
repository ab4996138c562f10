//! Test support utilities for the guess workspace.
//!
//! Integration test binaries cannot reach a crate's `#[cfg(test)]` modules,
//! so helpers needed by both kinds of test live here.

pub mod logging;
