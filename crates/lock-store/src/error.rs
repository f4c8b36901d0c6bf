//! Error types for lock-store

use std::path::PathBuf;

/// Result type for lock-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in lock-store operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O failure reading or writing the document.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Existing document is not valid JSON for the current schema.
    #[error("failed to parse lock state at {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Document could not be serialized.
    #[error("failed to serialize lock state: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Advisory lock could not be acquired for the write.
    #[error("lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
