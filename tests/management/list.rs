//! ListTraces Tests
//!
//! Tests for listing:
//! - Prefix filtering
//! - Ownership mismatch yields an empty list, not an error
//! - Removed traces never reappear

use crate::common::*;
use iotrace::{Command, Output, TraceState};

#[test]
fn test_list_returns_owned_traces() {
    let manager = create_manager();
    record(&manager, "n1/a", true);
    record(&manager, "n1/b", false);

    let traces = manager.list_traces("n1/").unwrap();
    assert_eq!(paths(&traces), vec!["n1/a", "n1/b"]);
    assert_eq!(traces[0].state, TraceState::Completed);
    assert_eq!(traces[1].state, TraceState::Recording);
    assert_eq!(traces[0].label, "label of n1/a");
}

#[test]
fn test_list_other_node_is_empty_not_error() {
    let manager = create_manager();
    record(&manager, "n1/a", true);
    record(&manager, "n2/a", true);

    let traces = manager.list_traces("n2/").unwrap();
    assert!(traces.is_empty(), "n2/ belongs to another node");
}

#[test]
fn test_list_prefix_shorter_than_node_prefix_is_empty() {
    let manager = create_manager();
    record(&manager, "n1/a", true);

    // "n" does not begin with "n1/", so the request is not for this node
    assert!(manager.list_traces("n").unwrap().is_empty());
    assert!(manager.list_traces("").unwrap().is_empty());
}

#[test]
fn test_list_narrower_prefix() {
    let manager = create_manager();
    record(&manager, "n1/2024-01-01", true);
    record(&manager, "n1/2024-01-02", true);
    record(&manager, "n1/2025-01-01", true);

    let traces = manager.list_traces("n1/2024").unwrap();
    assert_eq!(paths(&traces), vec!["n1/2024-01-01", "n1/2024-01-02"]);
}

#[test]
fn test_list_only_matching_paths() {
    let manager = create_manager();
    // Registered directly on the repository, outside the node prefix
    record(&manager, "n10/x", true);
    record(&manager, "n1/a", true);

    assert_eq!(paths(&manager.list_traces("n1/").unwrap()), vec!["n1/a"]);
}

#[test]
fn test_list_after_removal() {
    let manager = create_manager();
    record(&manager, "n1/a", true);
    record(&manager, "n1/b", true);

    manager.remove_traces("n1/a", false).unwrap();
    assert_eq!(paths(&manager.list_traces("n1/").unwrap()), vec!["n1/b"]);
}

#[test]
fn test_list_via_command() {
    let manager = create_manager();
    record(&manager, "n1/a", false);

    let output = manager
        .execute(Command::ListTraces {
            prefix: "n1/".into(),
        })
        .unwrap();

    match output {
        Output::TraceList(traces) => assert_eq!(paths(&traces), vec!["n1/a"]),
        _ => panic!("Expected TraceList output"),
    }
}
