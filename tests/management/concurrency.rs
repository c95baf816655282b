//! Concurrency Tests
//!
//! Many management requests against one repository:
//! - Each trace is removed at most once
//! - Listings never show a trace after its removal was reported
//! - Summary requests see either the live trace or NotFound

use crate::common::*;
use iotrace::{Error, TraceManager};
use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

const THREADS: usize = 8;
const TRACES: usize = 64;

fn populated_manager() -> Arc<TraceManager> {
    let manager = create_manager();
    for i in 0..TRACES {
        record(&manager, &format!("n1/{i:03}"), true);
    }
    Arc::new(manager)
}

#[test]
fn test_concurrent_removals_never_double_remove() {
    let manager = populated_manager();
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let manager = Arc::clone(&manager);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                match manager.remove_traces("n1/", false) {
                    Ok(removed) => paths(&removed),
                    Err(Error::NoTracesRemoved) => Vec::new(),
                    Err(e) => panic!("unexpected error: {e}"),
                }
            })
        })
        .collect();

    let mut seen = HashSet::new();
    let mut total = 0;
    for handle in handles {
        for path in handle.join().unwrap() {
            assert!(seen.insert(path.clone()), "{path} reported removed twice");
            total += 1;
        }
    }

    assert_eq!(total, TRACES);
    assert!(manager.list_traces("n1/").unwrap().is_empty());
    assert!(manager.repository().is_empty());
}

#[test]
fn test_overlapping_prefixes_share_work() {
    let manager = populated_manager();
    let barrier = Arc::new(Barrier::new(3));
    let prefixes = ["n1/", "n1/0", "n1/01"];

    let handles: Vec<_> = prefixes
        .iter()
        .map(|prefix| {
            let manager = Arc::clone(&manager);
            let barrier = Arc::clone(&barrier);
            let prefix = prefix.to_string();
            thread::spawn(move || {
                barrier.wait();
                manager
                    .remove_traces_detailed(&prefix, true)
                    .unwrap()
                    .removed
                    .len()
            })
        })
        .collect();

    let total: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert_eq!(total, TRACES);
}

#[test]
fn test_listing_during_removal_never_shows_removed() {
    let manager = populated_manager();
    let barrier = Arc::new(Barrier::new(2));

    let remover = {
        let manager = Arc::clone(&manager);
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for i in 0..TRACES {
                let prefix = format!("n1/{i:03}");
                let removed = manager.remove_traces(&prefix, false).unwrap();
                assert_eq!(paths(&removed), vec![prefix]);
            }
        })
    };

    barrier.wait();
    let mut previous = TRACES;
    loop {
        let listed = manager.list_traces("n1/").unwrap().len();
        assert!(listed <= previous, "listing grew from {previous} to {listed}");
        previous = listed;
        if listed == 0 {
            break;
        }
    }
    remover.join().unwrap();
}

#[test]
fn test_summary_during_removal() {
    let manager = populated_manager();
    let barrier = Arc::new(Barrier::new(2));

    let reader = {
        let manager = Arc::clone(&manager);
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for _ in 0..10 {
                for i in 0..TRACES {
                    match manager.get_trace_summary(&format!("n1/{i:03}")) {
                        Ok(summary) => assert!(summary.state.is_completed()),
                        Err(e) => assert!(e.is_not_found(), "unexpected error: {e}"),
                    }
                }
            }
        })
    };

    barrier.wait();
    manager.remove_traces("n1/", false).unwrap();
    reader.join().unwrap();
}

#[test]
fn test_recording_continues_during_removal() {
    let manager = populated_manager();
    let barrier = Arc::new(Barrier::new(2));

    let recorder = {
        let manager = Arc::clone(&manager);
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for i in 0..TRACES {
                record(&manager, &format!("n1/live-{i:03}"), false);
            }
        })
    };

    barrier.wait();
    // Recording sessions are never candidates without force
    let removed = manager.remove_traces("n1/", false).unwrap();
    recorder.join().unwrap();

    assert_eq!(removed.len(), TRACES);
    assert!(removed.iter().all(|s| s.state.is_completed()));
    assert_eq!(manager.list_traces("n1/live-").unwrap().len(), TRACES);
}
