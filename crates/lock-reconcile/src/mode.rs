//! Lockfile operation mode.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// How the lock state participates in a command.
///
/// Only [`LockfileMode::Update`] activates the reconciler. The other modes
/// are handled entirely by collaborators outside this crate: `off` skips the
/// lock state altogether, and `error-if-stale` makes the resolver fail when
/// the persisted state no longer matches, without ever writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LockfileMode {
    /// Ignore the lock state entirely.
    Off,

    /// Read the lock state and rewrite it after resolution.
    #[default]
    Update,

    /// Fail the command when the lock state is out of date; never write.
    ErrorIfStale,
}

impl LockfileMode {
    /// Whether this mode activates event accumulation and the write path.
    pub fn updates_lockfile(&self) -> bool {
        matches!(self, LockfileMode::Update)
    }
}

impl FromStr for LockfileMode {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" => Ok(LockfileMode::Off),
            "update" => Ok(LockfileMode::Update),
            "error-if-stale" | "error" => Ok(LockfileMode::ErrorIfStale),
            _ => Err(Error::InvalidMode {
                mode: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for LockfileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockfileMode::Off => write!(f, "off"),
            LockfileMode::Update => write!(f, "update"),
            LockfileMode::ErrorIfStale => write!(f, "error-if-stale"),
        }
    }
}
