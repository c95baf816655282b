//! Main entry point for iotrace.
//!
//! This module provides the `TraceManager` struct, which owns the trace
//! repository of one node and serves management requests against it.

use crate::config::ManagerConfig;
use crate::error::{Error, Result};
use iotrace_core::TraceSummary;
use iotrace_executor::{Command, Output, RemovalBatch, TraceManagement};
use iotrace_storage::{DirectoryBackend, MemoryBackend, TraceBackend, TraceRepository};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

/// Trace session manager for one node.
///
/// Create a manager using [`TraceManager::builder`], [`TraceManager::in_memory`]
/// or [`TraceManager::from_config`].
///
/// # Example
///
/// ```ignore
/// use iotrace::prelude::*;
///
/// let manager = TraceManager::builder()
///     .node_prefix("node1/")
///     .trace_root("/var/lib/iotrace/traces")
///     .open()?;
///
/// // Capture side
/// manager.repository().begin_recording("node1/nightly", "nightly run")?;
/// manager.repository().complete("node1/nightly")?;
///
/// // Management side
/// let removed = manager.remove_traces("node1/", false)?;
///
/// manager.close()?;
/// ```
pub struct TraceManager {
    repository: Arc<TraceRepository>,
    management: TraceManagement,
    trace_root: Option<PathBuf>,
    closed: AtomicBool,
}

impl TraceManager {
    /// Create a manager that keeps no trace data on disk.
    pub fn in_memory(node_prefix: impl Into<String>) -> Self {
        Self::from_parts(
            Arc::new(MemoryBackend::new()),
            node_prefix.into(),
            None,
        )
    }

    /// Create a builder for manager configuration.
    pub fn builder() -> TraceManagerBuilder {
        TraceManagerBuilder::new()
    }

    /// Create a manager from a loaded configuration.
    pub fn from_config(config: ManagerConfig) -> Result<Self> {
        TraceManagerBuilder::from_config(config).open()
    }

    /// Get the repository handle.
    ///
    /// Trace capture registers and completes sessions through this handle.
    pub fn repository(&self) -> &Arc<TraceRepository> {
        &self.repository
    }

    /// Get the prefix of the traces this node owns.
    pub fn node_prefix(&self) -> &str {
        self.management.executor().node_prefix()
    }

    /// Get the trace data directory, if disk-backed.
    pub fn trace_root(&self) -> Option<&Path> {
        self.trace_root.as_deref()
    }

    // =========================================================================
    // Management operations
    // =========================================================================

    /// Execute a management command.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        self.ensure_open()?;
        self.management.executor().execute(cmd).map_err(Error::from)
    }

    /// List traces under `prefix`.
    ///
    /// A prefix addressed to another node yields an empty list.
    pub fn list_traces(&self, prefix: &str) -> Result<Vec<TraceSummary>> {
        self.ensure_open()?;
        self.management.list_traces(prefix).map_err(Error::from)
    }

    /// Remove traces under `prefix`.
    ///
    /// Without `force` only completed traces are removed. Returns the
    /// summaries of the traces removed.
    ///
    /// # Errors
    ///
    /// - `NoTracesRemoved`: nothing was removed
    pub fn remove_traces(&self, prefix: &str, force: bool) -> Result<Vec<TraceSummary>> {
        self.ensure_open()?;
        self.management
            .remove_traces(prefix, force)
            .map_err(Error::from)
    }

    /// Remove traces under `prefix`, reporting every candidate's outcome.
    pub fn remove_traces_detailed(&self, prefix: &str, force: bool) -> Result<RemovalBatch> {
        self.ensure_open()?;
        Ok(self.management.remove_traces_detailed(prefix, force))
    }

    /// Get the summary of the trace at `path`.
    pub fn get_trace_summary(&self, path: &str) -> Result<TraceSummary> {
        self.ensure_open()?;
        self.management.get_trace_summary(path).map_err(Error::from)
    }

    // =========================================================================
    // Teardown
    // =========================================================================

    /// Close the manager.
    ///
    /// Later management calls fail with [`Error::Closed`]. Closing twice is a
    /// no-op. Trace data on disk is left untouched.
    pub fn close(&self) -> Result<()> {
        if !self.closed.swap(true, Ordering::AcqRel) {
            info!(
                node = self.node_prefix(),
                traces = self.repository.len(),
                "trace manager closed"
            );
        }
        Ok(())
    }

    /// Check if the manager was closed.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    fn ensure_open(&self) -> Result<()> {
        if self.is_closed() {
            return Err(Error::Closed);
        }
        Ok(())
    }

    fn from_parts(
        backend: Arc<dyn TraceBackend>,
        node_prefix: String,
        trace_root: Option<PathBuf>,
    ) -> Self {
        let repository = Arc::new(TraceRepository::new(backend));
        info!(node = %node_prefix, "trace manager opened");
        Self {
            management: TraceManagement::new(Arc::clone(&repository), node_prefix),
            repository,
            trace_root,
            closed: AtomicBool::new(false),
        }
    }
}

impl std::fmt::Debug for TraceManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraceManager")
            .field("node_prefix", &self.node_prefix())
            .field("trace_root", &self.trace_root)
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// Builder for manager configuration.
///
/// # Example
///
/// ```ignore
/// // Production: trace data in a directory
/// let manager = TraceManager::builder()
///     .node_prefix("node1/")
///     .trace_root("/var/lib/iotrace/traces")
///     .open()?;
///
/// // Testing: nothing on disk
/// let manager = TraceManager::builder()
///     .node_prefix("node1/")
///     .in_memory()
///     .open()?;
/// ```
pub struct TraceManagerBuilder {
    node_prefix: String,
    trace_root: Option<PathBuf>,
    backend: Option<Arc<dyn TraceBackend>>,
}

impl TraceManagerBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults: empty node prefix (owns every trace), in-memory backend.
    pub fn new() -> Self {
        Self {
            node_prefix: String::new(),
            trace_root: None,
            backend: None,
        }
    }

    /// Create a builder from a loaded configuration.
    pub fn from_config(config: ManagerConfig) -> Self {
        let builder = Self::new().node_prefix(config.node_prefix);
        match config.trace_root {
            Some(root) => builder.trace_root(root),
            None => builder,
        }
    }

    /// Set the prefix of the traces this node owns.
    pub fn node_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.node_prefix = prefix.into();
        self
    }

    /// Store trace data in directories under `root`.
    pub fn trace_root(mut self, root: impl AsRef<Path>) -> Self {
        self.trace_root = Some(root.as_ref().to_path_buf());
        self.backend = None;
        self
    }

    /// Keep no trace data on disk.
    pub fn in_memory(mut self) -> Self {
        self.trace_root = None;
        self.backend = None;
        self
    }

    /// Use a custom trace data backend.
    pub fn backend(mut self, backend: Arc<dyn TraceBackend>) -> Self {
        self.trace_root = None;
        self.backend = Some(backend);
        self
    }

    /// Open the manager.
    ///
    /// Creates the trace root directory if it does not exist.
    pub fn open(self) -> Result<TraceManager> {
        let backend: Arc<dyn TraceBackend> = match (&self.backend, &self.trace_root) {
            (Some(backend), _) => Arc::clone(backend),
            (None, Some(root)) => {
                std::fs::create_dir_all(root)?;
                Arc::new(DirectoryBackend::new(root))
            }
            (None, None) => Arc::new(MemoryBackend::new()),
        };
        Ok(TraceManager::from_parts(
            backend,
            self.node_prefix,
            self.trace_root,
        ))
    }
}

impl Default for TraceManagerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
