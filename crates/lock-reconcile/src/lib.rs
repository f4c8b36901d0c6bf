//! Incremental lock-state reconciliation core for modlock
//!
//! After a command resolves part or all of the module graph, this crate
//! decides which persisted extension results remain valid, which are
//! superseded, and which must be dropped, then persists the merged result
//! through [`lock_store::LockStore`].
//!
//! The moving parts:
//!
//! - [`LockfileMode`] — whether lock-state updates are active at all
//! - [`ReconcileConfig`] — mode selection from `.modlock/config.toml`
//! - [`GraphResolutionEvent`] / [`ExtensionResolutionEvent`] — what the
//!   resolver reports during a command
//! - [`Reconciler`] — command-scoped accumulator, one [`Reconciler::finalize`]
//!   at command end
//! - [`merge_lock_state`] — the pure merge, a function of
//!   `(baseline, usage table, events)` only
//!
//! Nothing in this crate escalates to a command-fatal error: the lock state
//! is a reproducibility cache, so every failure path leaves the last
//! known-good document untouched and emits a warning.

pub mod config;
pub mod error;
pub mod event;
pub mod merge;
pub mod mode;
pub mod reconciler;

pub use config::ReconcileConfig;
pub use error::{Error, Result};
pub use event::{ExtensionResolutionEvent, GraphResolutionEvent};
pub use merge::merge_lock_state;
pub use mode::LockfileMode;
pub use reconciler::{ReconcileOutcome, Reconciler};
