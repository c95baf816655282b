//! Per-item outcome of a removal batch.

use crate::error::{Error, Result};
use iotrace_core::{TracePath, TraceSummary};

/// A session whose removal I/O failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalFailure {
    /// Session path
    pub path: TracePath,
    /// Why removal failed
    pub reason: String,
}

/// Outcome of removing every candidate selected by one RemoveTraces request.
///
/// Each candidate is attempted independently. The batch is a failure only
/// when nothing was removed; partial success is success.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalBatch {
    /// Summaries of sessions removed, in removal order
    pub removed: Vec<TraceSummary>,
    /// Sessions whose removal failed
    pub failures: Vec<RemovalFailure>,
    /// Candidates left alone: still recording without force, or removed by a
    /// concurrent request first
    pub skipped: Vec<TracePath>,
}

impl RemovalBatch {
    /// Check if at least one session was removed.
    pub fn is_success(&self) -> bool {
        !self.removed.is_empty()
    }

    /// Number of candidates considered.
    pub fn attempted(&self) -> usize {
        self.removed.len() + self.failures.len() + self.skipped.len()
    }

    /// Reduce to the aggregate result.
    ///
    /// # Errors
    ///
    /// - `NoTracesRemoved`: `removed` is empty
    pub fn into_result(self) -> Result<Vec<TraceSummary>> {
        if self.removed.is_empty() {
            Err(Error::NoTracesRemoved)
        } else {
            Ok(self.removed)
        }
    }
}
