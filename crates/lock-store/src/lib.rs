//! Persisted lock-state document I/O for modlock
//!
//! [`LockStore`] owns the fixed workspace-relative location of the lock
//! document and provides the two operations the reconciler needs: a load
//! that treats a missing (or schema-stale) file as an empty default, and an
//! atomic whole-document write.

pub mod error;
mod store;

pub use error::{Error, Result};
pub use store::{LOCKFILE_NAME, LockStore};
