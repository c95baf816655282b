//! High-level typed wrapper for the Executor.
//!
//! The [`TraceManagement`] struct wraps the [`Executor`] and
//! [`Command`]/[`Output`] enums with typed method calls.
//!
//! # Example
//!
//! ```ignore
//! use iotrace_executor::TraceManagement;
//!
//! let mgmt = TraceManagement::new(repository, "node1/");
//!
//! let traces = mgmt.list_traces("node1/")?;
//! let removed = mgmt.remove_traces("node1/", false)?;
//! ```

use std::sync::Arc;

use iotrace_core::TraceSummary;
use iotrace_storage::TraceRepository;

use crate::batch::RemovalBatch;
use crate::handlers;
use crate::{Command, Error, Executor, Output, Result};

/// Typed management API for one node.
///
/// Each method:
///
/// 1. Creates the appropriate [`Command`]
/// 2. Executes it via the [`Executor`]
/// 3. Extracts and returns the typed result
pub struct TraceManagement {
    executor: Executor,
}

impl TraceManagement {
    /// Create a management API over `repository` for the node `node_prefix`.
    pub fn new(repository: Arc<TraceRepository>, node_prefix: impl Into<String>) -> Self {
        Self {
            executor: Executor::new(repository, node_prefix),
        }
    }

    /// Get the underlying executor.
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// List traces under `prefix`.
    ///
    /// Returns an empty list when `prefix` addresses another node.
    pub fn list_traces(&self, prefix: &str) -> Result<Vec<TraceSummary>> {
        match self.executor.execute(Command::ListTraces {
            prefix: prefix.to_string(),
        })? {
            Output::TraceList(traces) => Ok(traces),
            _ => Err(Error::Internal {
                reason: "Unexpected output for ListTraces".into(),
            }),
        }
    }

    /// Remove traces under `prefix`.
    ///
    /// Returns the summaries of the traces actually removed.
    ///
    /// # Errors
    ///
    /// - `NoTracesRemoved`: nothing was removed (no candidates, every removal
    ///   failed, or `prefix` addresses another node)
    pub fn remove_traces(&self, prefix: &str, force: bool) -> Result<Vec<TraceSummary>> {
        match self.executor.execute(Command::RemoveTraces {
            prefix: prefix.to_string(),
            force,
        })? {
            Output::TraceList(traces) => Ok(traces),
            _ => Err(Error::Internal {
                reason: "Unexpected output for RemoveTraces".into(),
            }),
        }
    }

    /// Remove traces under `prefix`, reporting every candidate's outcome.
    pub fn remove_traces_detailed(&self, prefix: &str, force: bool) -> RemovalBatch {
        handlers::traces::remove_batch(&self.executor, prefix, force)
    }

    /// Get the summary of the trace at `path`.
    ///
    /// # Errors
    ///
    /// - `NotFound`: no trace at `path`
    pub fn get_trace_summary(&self, path: &str) -> Result<TraceSummary> {
        match self.executor.execute(Command::GetTraceSummary {
            path: path.to_string(),
        })? {
            Output::TraceSummary(summary) => Ok(summary),
            _ => Err(Error::Internal {
                reason: "Unexpected output for GetTraceSummary".into(),
            }),
        }
    }
}
