//! Atomic load/store of the lock-state document.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use lock_model::LockState;

use crate::error::{Error, Result};

/// Canonical filename of the lock-state document, relative to the
/// workspace root.
pub const LOCKFILE_NAME: &str = "module.lock.json";

/// Read/write access to the persisted lock-state document.
///
/// The document is always replaced wholesale: `store` serializes the full
/// state and swaps it in with a temp-then-rename, so readers never observe
/// a partial write. An advisory lock on the target hardens the individual
/// write; serialization of whole commands against each other is the
/// caller's responsibility.
#[derive(Debug, Clone)]
pub struct LockStore {
    path: PathBuf,
}

impl LockStore {
    /// Store rooted at a workspace directory, using [`LOCKFILE_NAME`].
    pub fn new(workspace_root: impl AsRef<Path>) -> Self {
        Self {
            path: workspace_root.as_ref().join(LOCKFILE_NAME),
        }
    }

    /// Store over an explicit document path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the persisted document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted document.
    ///
    /// A missing file yields the empty default state, as does a document
    /// written at a different schema version (its section layout cannot be
    /// trusted; the next successful store rewrites it at the current
    /// version). Unreadable or malformed content is an error.
    pub fn load(&self) -> Result<LockState> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(LockState::default()),
            Err(e) => return Err(Error::io(&self.path, e)),
        };
        file.lock_shared()
            .map_err(|_| Error::LockFailed {
                path: self.path.clone(),
            })?;

        // Read through the locked handle to avoid a TOCTOU race with writers.
        let mut content = String::new();
        (&file)
            .read_to_string(&mut content)
            .map_err(|e| Error::io(&self.path, e))?;

        let state: LockState = serde_json::from_str(&content).map_err(|e| Error::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        if !state.is_current_version() {
            tracing::debug!(
                path = %self.path.display(),
                version = state.lockfile_version,
                "Lock state has stale schema version, treating as absent"
            );
            return Ok(LockState::default());
        }
        Ok(state)
    }

    /// Persist the document atomically.
    ///
    /// Serialization is deterministic for identical input (all sections are
    /// ordered collections), so repeated stores of equal state produce
    /// byte-identical files.
    pub fn store(&self, state: &LockState) -> Result<()> {
        let mut content = serde_json::to_string_pretty(state)?;
        content.push('\n');

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }

        // Hold an exclusive advisory lock on the target for the duration of
        // the temp write and rename. A target that does not exist yet has no
        // readers to exclude, and creating it here would leave an empty
        // document behind if the write below fails.
        let _lock_file = match OpenOptions::new().write(true).open(&self.path) {
            Ok(file) => {
                file.lock_exclusive().map_err(|_| Error::LockFailed {
                    path: self.path.clone(),
                })?;
                Some(file)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => return Err(Error::io(&self.path, e)),
        };

        // Temp file in the same directory so the rename stays on one filesystem.
        let temp_name = format!(
            ".{}.{}.tmp",
            self.path
                .file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_default(),
            std::process::id()
        );
        let temp_path = self.path.with_file_name(&temp_name);

        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| Error::io(&temp_path, e))?;
        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| Error::io(&temp_path, e))?;
        temp_file
            .sync_all()
            .map_err(|e| Error::io(&temp_path, e))?;
        drop(temp_file);

        fs::rename(&temp_path, &self.path).map_err(|e| Error::io(&self.path, e))?;

        // Lock, when one was taken, is released on drop.
        Ok(())
    }
}
