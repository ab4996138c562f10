//! Log capture for the `guess` test binaries.
//!
//! The library's unit tests install this from a `ctor` in `lib.rs`; each
//! integration binary does the same from `tests/support`. Controller and
//! terminal events then show up beside a failing test's output instead of
//! being dropped.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Level used when neither `TEST_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Install the test subscriber once per binary; later calls do nothing.
///
/// `TEST_LOG=guess=debug cargo test` surfaces superseded statuses and
/// per-round seed derivation without touching `RUST_LOG`.
pub fn init() {
    INSTALLED.get_or_init(|| {
        let directive = filter_directive(
            std::env::var("TEST_LOG").ok(),
            std::env::var("RUST_LOG").ok(),
        );

        // Output goes through libtest's capture; timestamps would make
        // transcripts differ run to run.
        fmt()
            .with_env_filter(EnvFilter::new(&directive))
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
        tracing::debug!(%directive, "test subscriber installed");
    });
}

/// `TEST_LOG` beats `RUST_LOG`; a blank value counts as unset.
fn filter_directive(test_log: Option<String>, rust_log: Option<String>) -> String {
    [test_log, rust_log]
        .into_iter()
        .flatten()
        .find(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_owned())
}
