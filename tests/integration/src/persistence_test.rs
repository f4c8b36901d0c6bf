//! Persistence behavior of the lock document across store boundaries.

use lock_model::{LOCKFILE_VERSION, LockState};
use lock_reconcile::{ExtensionResolutionEvent, LockfileMode, ReconcileOutcome, Reconciler};
use lock_test_utils::{TestWorkspace, init_tracing, key, platform_key, record};
use pretty_assertions::assert_eq;

#[test]
fn first_reconcile_creates_the_document() {
    init_tracing();
    let ws = TestWorkspace::new();
    assert!(!ws.lockfile_exists());

    let reconciler = Reconciler::for_command(LockfileMode::Update, ws.store());
    reconciler.record_extension_resolution(ExtensionResolutionEvent::new(
        key("alpha"),
        record("a1"),
    ));
    assert_eq!(reconciler.finalize(), ReconcileOutcome::Persisted);

    assert!(ws.lockfile_exists());
    let state = ws.store().load().unwrap();
    assert_eq!(state.lockfile_version, LOCKFILE_VERSION);
    assert_eq!(state.extensions.len(), 1);
}

#[test]
fn written_document_is_valid_pretty_json_with_entry_array() {
    init_tracing();
    let ws = TestWorkspace::new();

    let reconciler = Reconciler::for_command(LockfileMode::Update, ws.store());
    reconciler.record_extension_resolution(ExtensionResolutionEvent::new(
        platform_key("alpha", "linux", "x86_64"),
        record("a1"),
    ));
    assert_eq!(reconciler.finalize(), ReconcileOutcome::Persisted);

    let raw = String::from_utf8(ws.lockfile_bytes()).unwrap();
    assert!(raw.ends_with('\n'));

    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["lockfile_version"], LOCKFILE_VERSION);
    let entries = value["extensions"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["key"]["os"], "linux");
    assert_eq!(entries[0]["key"]["arch"], "x86_64");
}

#[test]
fn stale_schema_version_reads_as_empty_baseline() {
    init_tracing();
    let ws = TestWorkspace::with_raw_lockfile(
        r#"{"lockfile_version": 99, "extensions": [{"key": {"id": {"module_file": "//m:f.mod", "name": "x"}, "os": "", "arch": ""}, "extension": {"transitive_digest": "d"}}]}"#,
    );

    // The stale document contributes nothing to the merge.
    let reconciler = Reconciler::for_command(LockfileMode::Update, ws.store());
    reconciler.record_extension_resolution(ExtensionResolutionEvent::new(
        key("alpha"),
        record("a1"),
    ));
    assert_eq!(reconciler.finalize(), ReconcileOutcome::Persisted);

    let state = ws.store().load().unwrap();
    assert_eq!(state.lockfile_version, LOCKFILE_VERSION);
    assert_eq!(state.extensions.len(), 1);
    assert!(state.extensions.contains_key(&key("alpha")));
}

#[test]
fn entry_order_in_file_is_key_sorted_not_event_order() {
    init_tracing();
    let ws = TestWorkspace::new();

    let reconciler = Reconciler::for_command(LockfileMode::Update, ws.store());
    // Recorded in reverse alphabetical order.
    for name in ["gamma", "beta", "alpha"] {
        reconciler.record_extension_resolution(ExtensionResolutionEvent::new(
            key(name),
            record(name),
        ));
    }
    assert_eq!(reconciler.finalize(), ReconcileOutcome::Persisted);

    let value: serde_json::Value =
        serde_json::from_slice(&ws.lockfile_bytes()).unwrap();
    let names: Vec<&str> = value["extensions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["key"]["id"]["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["alpha", "beta", "gamma"]);
}

#[test]
fn load_round_trips_generated_repos_and_env() {
    init_tracing();
    let ws = TestWorkspace::new();
    let store = ws.store();

    let mut state = LockState::new();
    state.extensions.insert(
        key("alpha"),
        record("a1").with_env("CC", "clang"),
    );
    store.store(&state).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, state);
    let ext = &loaded.extensions[&key("alpha")];
    assert_eq!(ext.env["CC"], "clang");
    assert!(ext.generated_repos.contains_key("repo_a1"));
}
