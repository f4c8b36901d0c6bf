//! The pure merge: `(baseline, usage table, events) -> new lock state`.

use std::collections::BTreeMap;

use lock_model::{ExtensionId, ExtensionKey, LOCKFILE_VERSION, LockState, UsageTable};

use crate::event::ExtensionResolutionEvent;

/// Merge freshly resolved extension results into a baseline lock state.
///
/// Baseline entries survive per [`should_keep`]; every event's pair is then
/// inserted unconditionally, overwriting any surviving entry with the same
/// key. That insertion is the single last-write-wins point: when two events
/// carry the same key, the later one in `events` prevails.
///
/// The result is uniquely determined by the inputs — baseline iteration
/// order cannot matter (keys are unique) and event order only matters
/// through the last-write-wins rule on equal keys.
pub fn merge_lock_state(
    baseline: LockState,
    usage: Option<&UsageTable>,
    events: &[ExtensionResolutionEvent],
) -> LockState {
    // Per identity, the key of its most recent fresh event.
    let fresh_keys: BTreeMap<&ExtensionId, &ExtensionKey> =
        events.iter().map(|e| (&e.key.id, &e.key)).collect();

    let mut merged: BTreeMap<ExtensionKey, _> = BTreeMap::new();
    for (old_key, record) in baseline.extensions {
        if should_keep(&old_key, fresh_keys.get(&old_key.id).copied(), usage) {
            merged.insert(old_key, record);
        }
    }
    for event in events {
        merged.insert(event.key.clone(), event.extension.clone());
    }

    LockState {
        lockfile_version: LOCKFILE_VERSION,
        extensions: merged,
    }
}

/// Decide whether a baseline entry survives this reconciliation.
///
/// `fresh_key` is the key this command freshly resolved for the same
/// identity, if any; `usage` is the whole-graph usage table, if a full
/// graph resolution happened this command.
///
/// 1. A fresh key whose OS- or arch-sensitivity differs from the old key's
///    means the applicability rule for that identity changed; records keyed
///    under the old rule are meaningless and are dropped.
/// 2. Otherwise, with whole-graph information available, the entry survives
///    iff its identity still has an active usage.
/// 3. Without whole-graph information, usage cannot be judged and the entry
///    survives unconditionally.
pub fn should_keep(
    old_key: &ExtensionKey,
    fresh_key: Option<&ExtensionKey>,
    usage: Option<&UsageTable>,
) -> bool {
    if let Some(fresh) = fresh_key {
        let os_rule_changed = old_key.depends_on_os() != fresh.depends_on_os();
        let arch_rule_changed = old_key.depends_on_arch() != fresh.depends_on_arch();
        if os_rule_changed || arch_rule_changed {
            return false;
        }
    }
    match usage {
        Some(table) => table.is_used(&old_key.id),
        None => true,
    }
}
