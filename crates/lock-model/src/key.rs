//! Composite lock-state key: identity plus platform-sensitivity tags.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::ExtensionId;

/// Key addressing one cached resolution result.
///
/// `os` and `arch` record the platform the extension was resolved on, but
/// only when its output actually depends on that axis. The empty string is
/// a sentinel meaning "does not depend on this axis", not a platform value,
/// so a platform-independent extension owns exactly one key while a
/// platform-sensitive one owns a key per observed OS/arch pairing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ExtensionKey {
    /// Identity of the extension this result belongs to.
    pub id: ExtensionId,
    /// Operating system tag, or `""` when the output is OS-independent.
    #[serde(default)]
    pub os: String,
    /// Architecture tag, or `""` when the output is arch-independent.
    #[serde(default)]
    pub arch: String,
}

impl ExtensionKey {
    /// Create a key from its three components.
    pub fn new(id: ExtensionId, os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            id,
            os: os.into(),
            arch: arch.into(),
        }
    }

    /// Key for an extension whose output is platform-independent.
    pub fn platform_independent(id: ExtensionId) -> Self {
        Self::new(id, "", "")
    }

    /// Whether the cached output depends on the operating system.
    pub fn depends_on_os(&self) -> bool {
        !self.os.is_empty()
    }

    /// Whether the cached output depends on the architecture.
    pub fn depends_on_arch(&self) -> bool {
        !self.arch.is_empty()
    }
}

impl fmt::Display for ExtensionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)?;
        if self.depends_on_os() {
            write!(f, " os:{}", self.os)?;
        }
        if self.depends_on_arch() {
            write!(f, " arch:{}", self.arch)?;
        }
        Ok(())
    }
}
