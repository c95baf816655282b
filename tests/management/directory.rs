//! Directory Backend Tests
//!
//! Removal through a manager whose trace data lives on disk.

use crate::common::*;
use iotrace::{DirectoryBackend, ManagerConfig, TraceManager, TracePath, TraceState};
use std::fs;
use std::path::{Path, PathBuf};

fn disk_manager(root: &Path) -> TraceManager {
    init_logging();
    TraceManager::builder()
        .node_prefix(NODE)
        .trace_root(root)
        .open()
        .unwrap()
}

fn trace_dir(root: &Path, path: &str) -> PathBuf {
    DirectoryBackend::new(root)
        .trace_dir(&TracePath::from(path))
        .unwrap()
}

fn write_trace(root: &Path, path: &str) {
    let dir = trace_dir(root, path);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("events.bin"), b"captured").unwrap();
}

fn has_data(root: &Path, path: &str) -> bool {
    trace_dir(root, path).join("events.bin").exists()
}

#[test]
fn test_remove_deletes_trace_directories() {
    let dir = tempfile::tempdir().unwrap();
    let manager = disk_manager(dir.path());
    write_trace(dir.path(), "n1/a");
    write_trace(dir.path(), "n1/b");
    record(&manager, "n1/a", true);
    record(&manager, "n1/b", false);

    let removed = manager.remove_traces("n1/", false).unwrap();
    assert_eq!(paths(&removed), vec!["n1/a"]);
    assert!(!trace_dir(dir.path(), "n1/a").exists());
    assert!(has_data(dir.path(), "n1/b"));
}

#[test]
fn test_removing_parent_path_keeps_recording_child() {
    let dir = tempfile::tempdir().unwrap();
    let manager = disk_manager(dir.path());
    write_trace(dir.path(), "n1/a");
    write_trace(dir.path(), "n1/a/b");
    record(&manager, "n1/a", true);
    record(&manager, "n1/a/b", false);

    let removed = manager.remove_traces("n1/a", false).unwrap();
    assert_eq!(paths(&removed), vec!["n1/a"]);

    let child = manager.get_trace_summary("n1/a/b").unwrap();
    assert_eq!(child.state, TraceState::Recording);
    assert!(has_data(dir.path(), "n1/a/b"), "recording trace lost its data");
}

#[test]
fn test_removing_unnormalized_path_keeps_lookalike() {
    let dir = tempfile::tempdir().unwrap();
    let manager = disk_manager(dir.path());
    write_trace(dir.path(), "n1/x");
    write_trace(dir.path(), "n1//x");
    record(&manager, "n1/x", false);
    record(&manager, "n1//x", true);

    let removed = manager.remove_traces("n1//", false).unwrap();
    assert_eq!(paths(&removed), vec!["n1//x"]);
    assert!(has_data(dir.path(), "n1/x"), "recording trace lost its data");
    assert!(!has_data(dir.path(), "n1//x"));
}

#[test]
fn test_missing_data_counts_as_removed() {
    let dir = tempfile::tempdir().unwrap();
    let manager = disk_manager(dir.path());
    record(&manager, "n1/never-written", true);

    let removed = manager.remove_traces("n1/", false).unwrap();
    assert_eq!(paths(&removed), vec!["n1/never-written"]);
}

#[test]
fn test_dotted_path_stays_inside_root() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("traces");
    let manager = disk_manager(&root);
    write_trace(&root, "n1/ok");
    fs::write(dir.path().join("outside"), b"keep").unwrap();
    record(&manager, "n1/ok", true);
    record(&manager, "n1/../../outside", true);

    let batch = manager.remove_traces_detailed("n1/", false).unwrap();
    assert_eq!(paths(&batch.removed), vec!["n1/../../outside", "n1/ok"]);
    assert!(batch.failures.is_empty());
    assert!(dir.path().join("outside").exists());
    assert!(root.is_dir());
}

#[test]
fn test_manager_from_toml_config() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("data");
    let toml = format!(
        "node_prefix = \"n1/\"\ntrace_root = {:?}\n",
        root.display().to_string()
    );

    let config = ManagerConfig::from_toml_str(&toml).unwrap();
    let manager = TraceManager::from_config(config).unwrap();
    assert_eq!(manager.node_prefix(), NODE);
    assert_eq!(manager.trace_root(), Some(root.as_path()));
    assert!(root.is_dir());

    write_trace(&root, "n1/a");
    record(&manager, "n1/a", true);
    manager.remove_traces("n1/a", false).unwrap();
    assert!(!trace_dir(&root, "n1/a").exists());

    manager.close().unwrap();
    assert!(root.is_dir(), "closing leaves the trace root alone");
}
