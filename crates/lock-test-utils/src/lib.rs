//! Shared test utilities for the modlock workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`fixtures`] — canned identities, keys, and records
//! - [`workspace`] — [`TestWorkspace`](workspace::TestWorkspace) tempdir
//!   builder with lockfile snapshot helpers

pub mod fixtures;
pub mod workspace;

pub use fixtures::{ext_id, key, platform_key, record};
pub use workspace::TestWorkspace;

/// Initialise tracing for a test binary, honouring `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
