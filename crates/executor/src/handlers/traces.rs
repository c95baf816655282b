//! Trace management handlers.

use iotrace_storage::RemovalOutcome;
use tracing::{debug, error, info, warn};

use crate::batch::{RemovalBatch, RemovalFailure};
use crate::{Executor, Output, Result};

// =============================================================================
// Individual Handlers
// =============================================================================

/// Handle ListTraces command.
///
/// A prefix addressed to another node yields an empty list, not an error.
pub fn list_traces(ex: &Executor, prefix: &str) -> Result<Output> {
    if !ex.owns(prefix) {
        debug!(prefix, node = ex.node_prefix(), "list request for another node");
        return Ok(Output::TraceList(Vec::new()));
    }

    Ok(Output::TraceList(ex.repository().list_by_prefix(prefix)))
}

/// Handle RemoveTraces command.
///
/// Fails with `NoTracesRemoved` when nothing was removed, including when the
/// prefix addresses another node.
pub fn remove_traces(ex: &Executor, prefix: &str, force: bool) -> Result<Output> {
    remove_batch(ex, prefix, force)
        .into_result()
        .map(Output::TraceList)
}

/// Handle GetTraceSummary command.
pub fn get_trace_summary(ex: &Executor, path: &str) -> Result<Output> {
    let summary = ex.repository().summary(path)?;
    Ok(Output::TraceSummary(summary))
}

// =============================================================================
// Removal batch
// =============================================================================

/// Remove every eligible trace under `prefix`, one at a time.
///
/// Without `force` only Completed traces are candidates. A failure removing
/// one trace is logged and recorded; the remaining candidates are still
/// attempted.
pub fn remove_batch(ex: &Executor, prefix: &str, force: bool) -> RemovalBatch {
    let mut batch = RemovalBatch::default();

    if !ex.owns(prefix) {
        debug!(prefix, node = ex.node_prefix(), "remove request for another node");
        return batch;
    }

    for (path, result) in ex.repository().remove_by_prefix(prefix, force) {
        match result {
            Ok(RemovalOutcome::Removed(summary)) => batch.removed.push(summary),
            Ok(RemovalOutcome::Ineligible(_)) => batch.skipped.push(path),
            Err(e) if e.is_not_found() => {
                warn!(path = %path, "trace removed by a concurrent request");
                batch.skipped.push(path);
            }
            Err(e) => {
                error!(path = %path, error = %e, "failed to remove trace");
                batch.failures.push(RemovalFailure {
                    path,
                    reason: e.to_string(),
                });
            }
        }
    }

    info!(
        prefix,
        force,
        removed = batch.removed.len(),
        failed = batch.failures.len(),
        skipped = batch.skipped.len(),
        "remove traces finished"
    );
    batch
}
