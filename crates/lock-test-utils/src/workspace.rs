//! Temp workspace fixture with lockfile helpers.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use lock_model::LockState;
use lock_store::{LOCKFILE_NAME, LockStore};
use tempfile::TempDir;

/// A temporary workspace directory with a (possibly absent) lock document.
///
/// Keeps the tempdir alive for the fixture's lifetime and exposes snapshot
/// helpers so tests can assert the document was or was not touched.
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    /// Empty workspace, no lock document.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp workspace"),
        }
    }

    /// Workspace seeded with a persisted lock state.
    pub fn with_lock_state(state: &LockState) -> Self {
        let ws = Self::new();
        ws.store().store(state).expect("failed to seed lock state");
        ws
    }

    /// Workspace whose lock document holds arbitrary raw bytes.
    pub fn with_raw_lockfile(content: &str) -> Self {
        let ws = Self::new();
        fs::write(ws.lockfile_path(), content).expect("failed to seed raw lockfile");
        ws
    }

    /// Workspace root path.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the lock document.
    pub fn lockfile_path(&self) -> PathBuf {
        self.dir.path().join(LOCKFILE_NAME)
    }

    /// A store over this workspace's lock document.
    pub fn store(&self) -> LockStore {
        LockStore::new(self.dir.path())
    }

    /// Whether the lock document exists.
    pub fn lockfile_exists(&self) -> bool {
        self.lockfile_path().exists()
    }

    /// Raw bytes of the lock document.
    pub fn lockfile_bytes(&self) -> Vec<u8> {
        fs::read(self.lockfile_path()).expect("lock document missing")
    }

    /// Make the next lock-document write fail by occupying the store's
    /// deterministic temp path with a directory.
    pub fn block_lockfile_writes(&self) {
        let temp = self.lockfile_path().with_file_name(format!(
            ".{}.{}.tmp",
            LOCKFILE_NAME,
            std::process::id()
        ));
        fs::create_dir(temp).expect("failed to block lockfile writes");
    }

    /// Content plus modification-time snapshot, for untouched-file asserts.
    pub fn lockfile_snapshot(&self) -> (Vec<u8>, SystemTime) {
        let bytes = self.lockfile_bytes();
        let mtime = fs::metadata(self.lockfile_path())
            .and_then(|m| m.modified())
            .expect("lock document missing");
        (bytes, mtime)
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
