//! Command dispatch.

use std::sync::Arc;

use iotrace_storage::TraceRepository;
use tracing::debug;

use crate::handlers;
use crate::{Command, Output, Result};

/// Executes management commands for one node.
///
/// The executor holds an explicit repository handle; it owns no global state.
/// Commands may be executed concurrently from any number of threads.
#[derive(Debug, Clone)]
pub struct Executor {
    repository: Arc<TraceRepository>,
    node_prefix: String,
}

impl Executor {
    /// Create an executor serving traces under `node_prefix`.
    pub fn new(repository: Arc<TraceRepository>, node_prefix: impl Into<String>) -> Self {
        Self {
            repository,
            node_prefix: node_prefix.into(),
        }
    }

    /// Get the node prefix.
    pub fn node_prefix(&self) -> &str {
        &self.node_prefix
    }

    /// Get the repository handle.
    pub fn repository(&self) -> &Arc<TraceRepository> {
        &self.repository
    }

    /// Check whether a request prefix addresses this node.
    ///
    /// The request prefix must begin with the node prefix.
    pub fn owns(&self, prefix: &str) -> bool {
        prefix.starts_with(&self.node_prefix)
    }

    /// Execute a command.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        debug!(command = cmd.name(), "executing");
        match cmd {
            Command::ListTraces { prefix } => handlers::traces::list_traces(self, &prefix),
            Command::RemoveTraces { prefix, force } => {
                handlers::traces::remove_traces(self, &prefix, force)
            }
            Command::GetTraceSummary { path } => handlers::traces::get_trace_summary(self, &path),
        }
    }
}
