//! GetTraceSummary Tests

use crate::common::*;
use iotrace::{Command, Error, Output, TraceState, TraceSummary};

#[test]
fn test_summary_of_known_trace() {
    let manager = create_manager();
    record(&manager, "n1/a", false);

    let summary = manager.get_trace_summary("n1/a").unwrap();
    assert_eq!(
        summary,
        TraceSummary::new("n1/a", TraceState::Recording, "label of n1/a")
    );
}

#[test]
fn test_summary_tracks_completion() {
    let manager = create_manager();
    record(&manager, "n1/a", false);
    manager.repository().complete("n1/a").unwrap();

    assert_eq!(
        manager.get_trace_summary("n1/a").unwrap().state,
        TraceState::Completed
    );
}

#[test]
fn test_summary_unknown_path_not_found() {
    let manager = create_manager();
    record(&manager, "n1/a", true);

    match manager.get_trace_summary("n1/b") {
        Err(Error::NotFound(path)) => assert_eq!(path, "n1/b"),
        other => panic!("Expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_summary_is_exact_path_not_prefix() {
    let manager = create_manager();
    record(&manager, "n1/abc", true);

    assert!(manager.get_trace_summary("n1/ab").unwrap_err().is_not_found());
}

#[test]
fn test_summary_via_command() {
    let manager = create_manager();
    record(&manager, "n1/a", true);

    let output = manager
        .execute(Command::GetTraceSummary { path: "n1/a".into() })
        .unwrap();
    match output {
        Output::TraceSummary(summary) => assert_eq!(summary.path.as_str(), "n1/a"),
        _ => panic!("Expected TraceSummary output"),
    }
}
