//! Trace repository
//!
//! Holds every known trace session, keyed by path. Sessions never leave the
//! repository; callers see [`TraceSummary`] snapshots only.
//!
//! # Design
//!
//! - DashMap: sharded by path hash, reads only take a shard read lock
//! - Per-session removal lock: removing one path never blocks another
//! - Shard locks are never held across backend I/O
//!
//! # Removal Linearizability
//!
//! A session is flagged removed (under its removal lock) before it leaves the
//! map, and listings skip flagged sessions. Once `remove` returns, no later
//! listing or lookup can observe the path.

use crate::backend::{MemoryBackend, TraceBackend};
use crate::session::{RemovalOutcome, TraceSession};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use iotrace_core::{Error, Result, TracePath, TraceSummary};
use std::sync::Arc;
use tracing::{debug, info};

/// Repository of trace sessions
///
/// # Thread Safety
///
/// All operations are thread-safe:
/// - `list_by_prefix()` / `summary()`: concurrent with each other
/// - `remove()` / `remove_by_prefix()`: exclusive per path, concurrent across paths
///
/// # Example
///
/// ```ignore
/// use iotrace_storage::TraceRepository;
///
/// let repo = TraceRepository::in_memory();
/// repo.begin_recording("n1/a", "nightly")?;
/// repo.complete("n1/a")?;
/// assert_eq!(repo.list_by_prefix("n1/").len(), 1);
/// ```
pub struct TraceRepository {
    sessions: DashMap<TracePath, Arc<TraceSession>>,
    backend: Arc<dyn TraceBackend>,
}

impl TraceRepository {
    /// Create a repository whose sessions store data in `backend`
    pub fn new(backend: Arc<dyn TraceBackend>) -> Self {
        Self {
            sessions: DashMap::new(),
            backend,
        }
    }

    /// Create a repository with no stored trace data
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }

    /// Get number of live sessions
    pub fn len(&self) -> usize {
        self.sessions.iter().filter(|e| !e.value().is_removed()).count()
    }

    /// Check if there are no live sessions
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if a live session exists at `path`
    pub fn contains(&self, path: &str) -> bool {
        self.lookup(path).is_ok()
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Register a new session in the Recording state
    ///
    /// A path whose previous session was removed can be reused.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists`: a live session is registered under `path`
    pub fn begin_recording(
        &self,
        path: impl Into<TracePath>,
        label: impl Into<String>,
    ) -> Result<TraceSummary> {
        let path = path.into();
        let session = Arc::new(TraceSession::new(
            path.clone(),
            label,
            Arc::clone(&self.backend),
        ));

        match self.sessions.entry(path.clone()) {
            Entry::Occupied(mut occupied) => {
                if !occupied.get().is_removed() {
                    return Err(Error::AlreadyExists { path });
                }
                occupied.insert(Arc::clone(&session));
            }
            Entry::Vacant(vacant) => {
                vacant.insert(Arc::clone(&session));
            }
        }

        info!(path = %path, label = session.label(), "trace recording started");
        Ok(session.summary())
    }

    /// Mark the session at `path` as Completed
    ///
    /// # Errors
    ///
    /// - `NotFound`: no live session at `path`
    pub fn complete(&self, path: &str) -> Result<TraceSummary> {
        let session = self.lookup(path)?;
        session.mark_completed()?;
        info!(path = %session.path(), "trace recording completed");
        Ok(session.summary())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Get the summary of a live session
    ///
    /// # Errors
    ///
    /// - `NotFound`: no live session at `path`
    pub fn summary(&self, path: &str) -> Result<TraceSummary> {
        self.lookup(path).map(|s| s.summary())
    }

    /// List live sessions whose path begins with `prefix`
    ///
    /// Sorted by path. No side effects.
    pub fn list_by_prefix(&self, prefix: &str) -> Vec<TraceSummary> {
        let summaries: Vec<_> = self
            .sessions_by_prefix(prefix)
            .iter()
            .map(|s| s.summary())
            .collect();
        debug!(prefix, count = summaries.len(), "trace listing");
        summaries
    }

    pub(crate) fn lookup(&self, path: &str) -> Result<Arc<TraceSession>> {
        let session = self
            .sessions
            .get(path)
            .map(|entry| Arc::clone(entry.value()))
            .filter(|s| !s.is_removed());
        debug!(path, found = session.is_some(), "trace lookup");
        session.ok_or_else(|| Error::not_found(path))
    }

    fn sessions_by_prefix(&self, prefix: &str) -> Vec<Arc<TraceSession>> {
        let mut results: Vec<_> = self
            .sessions
            .iter()
            .filter(|entry| entry.key().starts_with(prefix))
            .map(|entry| Arc::clone(entry.value()))
            .filter(|s| !s.is_removed())
            .collect();

        results.sort_by(|a, b| a.path().cmp(b.path()));
        results
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Remove the session at `path`
    ///
    /// Without `force`, a session that is still recording is left alone and
    /// reported as [`RemovalOutcome::Ineligible`]. On success the session
    /// leaves the repository.
    ///
    /// # Errors
    ///
    /// - `NotFound`: no live session at `path`, or a concurrent removal won
    /// - `RemovalFailure`: the backend could not delete the data
    pub fn remove(&self, path: &str, force: bool) -> Result<RemovalOutcome> {
        let session = self.lookup(path)?;
        self.remove_session(&session, force)
    }

    /// Remove every candidate under `prefix`, one at a time in path order
    ///
    /// Without `force` only Completed sessions are candidates. Each candidate
    /// gets its own result; a failure does not stop the rest. A candidate
    /// removed by a concurrent request in the meantime reports `NotFound`.
    pub fn remove_by_prefix(
        &self,
        prefix: &str,
        force: bool,
    ) -> Vec<(TracePath, Result<RemovalOutcome>)> {
        self.sessions_by_prefix(prefix)
            .into_iter()
            .filter(|s| force || s.is_completed())
            .map(|s| (s.path().clone(), self.remove_session(&s, force)))
            .collect()
    }

    /// Remove a session previously obtained from this repository
    pub(crate) fn remove_session(
        &self,
        session: &Arc<TraceSession>,
        force: bool,
    ) -> Result<RemovalOutcome> {
        let outcome = session.remove(force)?;
        if outcome.is_removed() {
            // Only drop the entry if it still holds this session; the path
            // may already have been re-registered.
            self.sessions
                .remove_if(session.path(), |_, current| Arc::ptr_eq(current, session));
            info!(path = %session.path(), force, "trace removed");
        }
        Ok(outcome)
    }
}

impl Default for TraceRepository {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl std::fmt::Debug for TraceRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraceRepository")
            .field("sessions", &self.sessions.len())
            .finish()
    }
}
