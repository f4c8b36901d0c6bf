//! The persisted lock-state document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::extension::LockedExtension;
use crate::key::ExtensionKey;

/// Current schema version of the persisted document.
///
/// A document carrying any other version is treated as absent on load: its
/// section layout cannot be trusted, and the next reconcile rewrites it.
pub const LOCKFILE_VERSION: u32 = 1;

/// The persisted lock-state document.
///
/// Holds the module-extension section: one record per [`ExtensionKey`].
/// The document is replaced wholesale on every write, never patched in
/// place, so key uniqueness holds by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LockState {
    /// Schema version, see [`LOCKFILE_VERSION`].
    pub lockfile_version: u32,
    /// Module-extension section, one entry per key.
    ///
    /// Serialized as an array of `{key, extension}` objects in key order —
    /// composite keys cannot be JSON object keys, and the fixed order keeps
    /// source-control diffs minimal.
    #[serde(default, with = "entry_list")]
    pub extensions: BTreeMap<ExtensionKey, LockedExtension>,
}

impl Default for LockState {
    fn default() -> Self {
        Self {
            lockfile_version: LOCKFILE_VERSION,
            extensions: BTreeMap::new(),
        }
    }
}

impl LockState {
    /// Create an empty document at the current schema version.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this document's schema version is the one this build writes.
    pub fn is_current_version(&self) -> bool {
        self.lockfile_version == LOCKFILE_VERSION
    }
}

/// Serde adapter storing the extension map as a key-ordered entry array.
mod entry_list {
    use super::*;
    use serde::de::Deserializer;
    use serde::ser::{SerializeSeq, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Entry {
        key: ExtensionKey,
        extension: LockedExtension,
    }

    pub fn serialize<S>(
        map: &BTreeMap<ExtensionKey, LockedExtension>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(map.len()))?;
        for (key, extension) in map {
            seq.serialize_element(&Entry {
                key: key.clone(),
                extension: extension.clone(),
            })?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D>(
        deserializer: D,
    ) -> Result<BTreeMap<ExtensionKey, LockedExtension>, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Duplicate keys in a hand-edited file collapse to the last entry.
        let entries = Vec::<Entry>::deserialize(deserializer)?;
        Ok(entries
            .into_iter()
            .map(|e| (e.key, e.extension))
            .collect())
    }
}
