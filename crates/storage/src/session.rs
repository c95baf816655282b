//! Trace session lifecycle
//!
//! ## States
//!
//! - Recording → Completed (one-way, set when capture ends)
//!
//! Removal is not a state: it is a terminal destructive operation, guarded by
//! a per-session lock so at most one removal of a path proceeds at a time.

use crate::backend::TraceBackend;
use iotrace_core::{Error, Result, TracePath, TraceState, TraceSummary};
use parking_lot::{Mutex, RwLock};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a single removal attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// Trace data was deleted; summary taken just before deletion
    Removed(TraceSummary),
    /// Not removed: still recording and the removal was not forced
    Ineligible(TraceSummary),
}

impl RemovalOutcome {
    /// Check if the session was removed
    pub fn is_removed(&self) -> bool {
        matches!(self, RemovalOutcome::Removed(_))
    }

    /// Get the summary regardless of outcome
    pub fn summary(&self) -> &TraceSummary {
        match self {
            RemovalOutcome::Removed(s) | RemovalOutcome::Ineligible(s) => s,
        }
    }
}

/// A named trace recording
///
/// Owned by the repository; other components only borrow it for the duration
/// of one operation.
pub(crate) struct TraceSession {
    path: TracePath,
    label: String,
    state: RwLock<TraceState>,
    /// Serializes removal of this path
    removal_lock: Mutex<()>,
    /// Set under `removal_lock` once the backend data is gone
    removed: AtomicBool,
    backend: Arc<dyn TraceBackend>,
}

impl TraceSession {
    /// Create a session in the Recording state
    pub fn new(
        path: impl Into<TracePath>,
        label: impl Into<String>,
        backend: Arc<dyn TraceBackend>,
    ) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
            state: RwLock::new(TraceState::Recording),
            removal_lock: Mutex::new(()),
            removed: AtomicBool::new(false),
            backend,
        }
    }

    /// Get the session path
    pub fn path(&self) -> &TracePath {
        &self.path
    }

    /// Get the label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the current state
    pub fn state(&self) -> TraceState {
        *self.state.read()
    }

    /// Check if capture has ended
    pub fn is_completed(&self) -> bool {
        self.state().is_completed()
    }

    /// Check if the session has been removed
    pub fn is_removed(&self) -> bool {
        self.removed.load(Ordering::Acquire)
    }

    /// Take a `{path, state, label}` snapshot
    pub fn summary(&self) -> TraceSummary {
        TraceSummary::new(self.path.clone(), self.state(), self.label.clone())
    }

    /// Mark capture as finished
    ///
    /// Idempotent. Fails with `NotFound` if the session was removed.
    pub fn mark_completed(&self) -> Result<()> {
        if self.is_removed() {
            return Err(Error::not_found(&self.path));
        }
        let mut state = self.state.write();
        if !state.can_transition_to(TraceState::Completed) {
            return Err(Error::InvalidTransition {
                path: self.path.clone(),
                from: *state,
                to: TraceState::Completed,
            });
        }
        *state = TraceState::Completed;
        Ok(())
    }

    /// Remove the session's trace data
    ///
    /// Without `force`, a session that is still recording is left alone and
    /// reported as [`RemovalOutcome::Ineligible`]. With `force`, removal is
    /// attempted regardless of state.
    ///
    /// Blocks while another removal of this session is in flight; if that
    /// removal succeeded this returns `NotFound`.
    ///
    /// # Errors
    ///
    /// - `NotFound`: the session was already removed
    /// - `RemovalFailure`: the backend could not delete the data
    pub fn remove(&self, force: bool) -> Result<RemovalOutcome> {
        let _guard = self.removal_lock.lock();
        if self.is_removed() {
            return Err(Error::not_found(&self.path));
        }

        let summary = self.summary();
        if !force && !summary.state.is_completed() {
            return Ok(RemovalOutcome::Ineligible(summary));
        }

        self.backend.remove_trace(&self.path).map_err(|e| match e {
            Error::RemovalFailure { .. } => e,
            other => Error::removal_failure(&self.path, other.to_string()),
        })?;

        self.removed.store(true, Ordering::Release);
        Ok(RemovalOutcome::Removed(summary))
    }
}

impl std::fmt::Debug for TraceSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraceSession")
            .field("path", &self.path)
            .field("label", &self.label)
            .field("state", &self.state())
            .field("removed", &self.is_removed())
            .finish()
    }
}
