//! Canned identities, keys, and records.

use lock_model::{ExtensionId, ExtensionKey, LockedExtension};

/// Identity under the shared fixture module file.
pub fn ext_id(name: &str) -> ExtensionId {
    ExtensionId::new("//third_party:extensions.mod", name)
}

/// Platform-independent key for a fixture identity.
pub fn key(name: &str) -> ExtensionKey {
    ExtensionKey::platform_independent(ext_id(name))
}

/// Platform-sensitive key for a fixture identity.
pub fn platform_key(name: &str, os: &str, arch: &str) -> ExtensionKey {
    ExtensionKey::new(ext_id(name), os, arch)
}

/// Record with a recognisable digest and one generated repo.
pub fn record(digest: &str) -> LockedExtension {
    LockedExtension::new(digest, format!("usages-of-{digest}")).with_repo(
        format!("repo_{digest}"),
        serde_json::json!({ "url": format!("https://example.com/{digest}.tar.gz") }),
    )
}
