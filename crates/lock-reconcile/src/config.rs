//! Configuration loading for the reconciler.
//!
//! Mode selection lives in `.modlock/config.toml` at the workspace root:
//!
//! ```toml
//! [lockfile]
//! mode = "update"
//! ```
//!
//! A missing file means defaults; a malformed file is an error surfaced to
//! the command driver at startup, before any reconciler exists.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::mode::LockfileMode;

/// Directory holding modlock configuration, relative to the workspace root.
pub const CONFIG_DIR: &str = ".modlock";

/// Configuration filename inside [`CONFIG_DIR`].
pub const CONFIG_FILENAME: &str = "config.toml";

/// Workspace configuration consumed by the reconciler.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReconcileConfig {
    /// Lockfile behavior.
    #[serde(default)]
    pub lockfile: LockfileSection,
}

/// The `[lockfile]` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LockfileSection {
    /// Operation mode, defaults to `update`.
    #[serde(default)]
    pub mode: LockfileMode,
}

impl ReconcileConfig {
    /// Path of the configuration file under a workspace root.
    pub fn path_in(workspace_root: impl AsRef<Path>) -> PathBuf {
        workspace_root.as_ref().join(CONFIG_DIR).join(CONFIG_FILENAME)
    }

    /// Load configuration from a workspace root, falling back to defaults
    /// when no file exists.
    pub fn load(workspace_root: impl AsRef<Path>) -> Result<Self> {
        let path = Self::path_in(workspace_root);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(Error::ConfigRead { path, source: e }),
        };
        toml::from_str(&content).map_err(|e| Error::ConfigParse {
            path,
            message: e.to_string(),
        })
    }

    /// The configured lockfile mode.
    pub fn mode(&self) -> LockfileMode {
        self.lockfile.mode
    }
}
