//! Resolved extension record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One resolved outcome for one [`ExtensionKey`](crate::ExtensionKey).
///
/// The reconciler treats this as an opaque payload: it is stored, replaced,
/// or dropped whole, never inspected field-by-field. The fields mirror what
/// the evaluator produces — content digests plus the artifacts the extension
/// generated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockedExtension {
    /// Digest of the extension implementation and everything it loads.
    pub transitive_digest: String,
    /// Digest of the usages that fed this resolution.
    #[serde(default)]
    pub usages_digest: String,
    /// Repository definitions the extension generated, keyed by repo name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub generated_repos: BTreeMap<String, serde_json::Value>,
    /// Environment variables the extension observed during resolution.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
}

impl LockedExtension {
    /// Create a record from its digests.
    pub fn new(transitive_digest: impl Into<String>, usages_digest: impl Into<String>) -> Self {
        Self {
            transitive_digest: transitive_digest.into(),
            usages_digest: usages_digest.into(),
            generated_repos: BTreeMap::new(),
            env: BTreeMap::new(),
        }
    }

    /// Attach a generated repository definition.
    pub fn with_repo(mut self, name: impl Into<String>, spec: serde_json::Value) -> Self {
        self.generated_repos.insert(name.into(), spec);
        self
    }

    /// Attach an observed environment variable.
    pub fn with_env(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(name.into(), value.into());
        self
    }
}
