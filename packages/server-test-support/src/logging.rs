//! Unified test logging initialization
//!
//! One init function shared by every test binary in the workspace, wired
//! through a `#[ctor::ctor]` hook in each consumer so no test has to call
//! it explicitly.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging for tests.
///
/// Idempotent and race-safe; calling it from several ctor hooks in the same
/// process is fine. The filter is resolved in this order:
///
/// 1. `TEST_LOG` environment variable (preferred)
/// 2. `RUST_LOG` environment variable (fallback)
/// 3. `"warn"` (default, quiet)
pub fn init() {
    INITIALIZED.get_or_init(|| {
        fmt()
            .with_env_filter(test_filter())
            .with_test_writer() // cargo/nextest output capture
            .without_time() // stable output across runs
            .try_init()
            .ok(); // another subscriber may already be installed
    });
}

fn test_filter() -> EnvFilter {
    std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}
