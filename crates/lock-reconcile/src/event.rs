//! Resolution events consumed by the reconciler.
//!
//! Both kinds are produced outside this crate — the module graph resolver
//! and the individual extension evaluations — and delivered by explicit
//! calls from the command driver. They carry everything the merge needs;
//! the reconciler never reaches back into the resolver.

use lock_model::{ExtensionKey, LockState, LockedExtension, UsageTable};

/// Result of a full module-graph resolution. At most one per command.
///
/// The embedded lock state is authoritative: graph-level pruning already
/// happened during resolution, so when this event is present the persisted
/// document is not even read.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphResolutionEvent {
    /// Authoritative baseline produced by graph resolution.
    pub lock_state: LockState,
    /// Which extension identities the resolved graph still uses.
    pub usage: UsageTable,
}

impl GraphResolutionEvent {
    pub fn new(lock_state: LockState, usage: UsageTable) -> Self {
        Self { lock_state, usage }
    }
}

/// Result of one extension (re-)evaluation. Zero or more per command.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtensionResolutionEvent {
    /// Key the fresh record is cached under.
    pub key: ExtensionKey,
    /// The fresh record.
    pub extension: LockedExtension,
}

impl ExtensionResolutionEvent {
    pub fn new(key: ExtensionKey, extension: LockedExtension) -> Self {
        Self { key, extension }
    }
}
