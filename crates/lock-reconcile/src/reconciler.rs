//! Command-scoped accumulation and the merge-and-persist decision.

use std::sync::Mutex;

use lock_store::LockStore;

use crate::event::{ExtensionResolutionEvent, GraphResolutionEvent};
use crate::merge::merge_lock_state;
use crate::mode::LockfileMode;

/// What [`Reconciler::finalize`] did.
///
/// Every variant is a legitimate end state: load and write failures degrade
/// to warnings because the lock state is a reproducibility cache, not a
/// build output. Nothing here may fail the owning command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// No resolution happened this command; the document was not touched.
    Skipped,
    /// The merged document was written.
    Persisted,
    /// The existing document could not be loaded; nothing was written.
    Aborted,
    /// The merge succeeded but the write failed; prior state is intact.
    WriteFailed,
}

/// Accumulates resolution events for one command and reconciles them with
/// the persisted lock state at command end.
///
/// One instance per command: construct with [`Reconciler::for_command`] when
/// the command starts, record events as resolution progresses, and consume
/// the instance with [`Reconciler::finalize`] once every evaluation has
/// completed. An instance built under any mode other than
/// [`LockfileMode::Update`] is inert — it records nothing and performs no
/// I/O for the entire command, which is what keeps stale-state pruning from
/// running when updates are off.
///
/// Recording goes through `&self` so parallel extension evaluations within
/// the command can report without coordination; the handlers only append
/// and never touch the store.
#[derive(Debug)]
pub struct Reconciler {
    store: LockStore,
    active: bool,
    graph_event: Mutex<Option<GraphResolutionEvent>>,
    extension_events: Mutex<Vec<ExtensionResolutionEvent>>,
}

impl Reconciler {
    /// Create the reconciler for one command.
    pub fn for_command(mode: LockfileMode, store: LockStore) -> Self {
        Self {
            store,
            active: mode.updates_lockfile(),
            graph_event: Mutex::new(None),
            extension_events: Mutex::new(Vec::new()),
        }
    }

    /// Whether this instance accumulates events and may write at the end.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Record the whole-graph resolution result.
    ///
    /// At most one is expected per command; redundant delivery is tolerated
    /// and the last event wins.
    pub fn record_graph_resolution(&self, event: GraphResolutionEvent) {
        if !self.active {
            return;
        }
        *lock_ignoring_poison(&self.graph_event) = Some(event);
    }

    /// Record one extension's fresh resolution result.
    ///
    /// Append-only; arrival order carries no meaning beyond key-based
    /// last-write-wins in the merge.
    pub fn record_extension_resolution(&self, event: ExtensionResolutionEvent) {
        if !self.active {
            return;
        }
        lock_ignoring_poison(&self.extension_events).push(event);
    }

    /// Merge accumulated events against the persisted state and write the
    /// result. Runs once, at command end, after every evaluation completed.
    pub fn finalize(self) -> ReconcileOutcome {
        let graph_event = into_inner_ignoring_poison(self.graph_event);
        let events = into_inner_ignoring_poison(self.extension_events);

        if graph_event.is_none() && events.is_empty() {
            // Nothing resolved: an untouched lock state is never rewritten.
            return ReconcileOutcome::Skipped;
        }

        let (baseline, usage) = match graph_event {
            Some(event) => (event.lock_state, Some(event.usage)),
            None => match self.store.load() {
                Ok(state) => (state, None),
                Err(e) => {
                    tracing::warn!(
                        path = %self.store.path().display(),
                        error = %e,
                        "Failed to load existing lock state, skipping reconciliation. \
                         Try deleting the file and rerunning."
                    );
                    return ReconcileOutcome::Aborted;
                }
            },
        };

        let merged = merge_lock_state(baseline, usage.as_ref(), &events);

        match self.store.store(&merged) {
            Ok(()) => {
                tracing::debug!(
                    path = %self.store.path().display(),
                    entries = merged.extensions.len(),
                    "Lock state updated"
                );
                ReconcileOutcome::Persisted
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.store.path().display(),
                    error = %e,
                    "Failed to write lock state"
                );
                ReconcileOutcome::WriteFailed
            }
        }
    }
}

// Recording is infallible by contract and nothing in this crate escalates,
// so a poisoned mutex (a panicked evaluator thread) still yields its data.
fn lock_ignoring_poison<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

fn into_inner_ignoring_poison<T>(mutex: Mutex<T>) -> T {
    mutex.into_inner().unwrap_or_else(|e| e.into_inner())
}
