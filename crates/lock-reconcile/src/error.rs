//! Error types for lock-reconcile

use std::path::PathBuf;

/// Result type for lock-reconcile operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in lock-reconcile operations
///
/// These surface only from configuration loading at command start.
/// Reconciliation itself never returns an error: load and write failures
/// degrade to warnings inside [`Reconciler::finalize`](crate::Reconciler::finalize).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file exists but could not be read.
    #[error("failed to read config at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for the expected schema.
    #[error("failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Unknown lockfile mode string.
    #[error("invalid lockfile mode: {mode}")]
    InvalidMode { mode: String },
}
