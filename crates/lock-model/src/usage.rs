//! Whole-graph usage information.

use std::collections::BTreeMap;

use crate::id::ExtensionId;

/// Which extension identities the current module graph still invokes.
///
/// Produced once per command by full graph resolution. An identity missing
/// from the table reads as unused: the table is authoritative for the whole
/// graph, so absence means no usage survived pruning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageTable {
    entries: BTreeMap<ExtensionId, bool>,
}

impl UsageTable {
    /// Create an empty table (every identity reads as unused).
    pub fn new() -> Self {
        Self::default()
    }

    /// Record whether an identity has at least one active usage.
    pub fn mark(&mut self, id: ExtensionId, used: bool) {
        self.entries.insert(id, used);
    }

    /// Record an identity as actively used.
    pub fn mark_used(&mut self, id: ExtensionId) {
        self.mark(id, true);
    }

    /// Whether the graph still invokes this identity.
    pub fn is_used(&self, id: &ExtensionId) -> bool {
        self.entries.get(id).copied().unwrap_or(false)
    }

    /// Number of identities with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(ExtensionId, bool)> for UsageTable {
    fn from_iter<I: IntoIterator<Item = (ExtensionId, bool)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
