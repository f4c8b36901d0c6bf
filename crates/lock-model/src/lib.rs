//! Lock-state data model for modlock
//!
//! Value types shared by the store and reconciler layers:
//!
//! - [`ExtensionId`] — identity of one module extension
//! - [`ExtensionKey`] — identity plus OS/arch sensitivity tags, the
//!   addressable unit of cached state
//! - [`LockedExtension`] — one resolved record for one key
//! - [`UsageTable`] — which identities the current module graph still uses
//! - [`LockState`] — the persisted document
//!
//! All collections are `BTreeMap`s so serialization is deterministic for
//! identical input.

pub mod error;
pub mod extension;
pub mod id;
pub mod key;
pub mod state;
pub mod usage;

pub use error::{Error, Result};
pub use extension::LockedExtension;
pub use id::ExtensionId;
pub use key::ExtensionKey;
pub use state::{LOCKFILE_VERSION, LockState};
pub use usage::UsageTable;
