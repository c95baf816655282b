//! Trace session identity and metadata
//!
//! - [`TracePath`]: hierarchical key naming a trace, e.g. `"node1/2024-01-01_10:00"`
//! - [`TraceState`]: lifecycle state (Recording, Completed)
//! - [`TraceSummary`]: the `{path, state, label}` record presented to clients

use serde::{Deserialize, Serialize};

/// Hierarchical path uniquely naming a trace session
///
/// The leading segment names the node that owns the trace. Paths are compared
/// as plain strings; prefix matching is literal, not segment-aware.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TracePath(String);

impl TracePath {
    /// Create a trace path
    pub fn new(path: impl Into<String>) -> Self {
        TracePath(path.into())
    }

    /// Get the path as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether this path begins with `prefix`
    ///
    /// The empty prefix matches every path.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }

    /// Iterate over the non-empty `/`-separated segments
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }
}

impl std::fmt::Display for TracePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TracePath {
    fn from(s: &str) -> Self {
        TracePath(s.to_string())
    }
}

impl From<String> for TracePath {
    fn from(s: String) -> Self {
        TracePath(s)
    }
}

impl From<&TracePath> for TracePath {
    fn from(p: &TracePath) -> Self {
        p.clone()
    }
}

// Lets `&str` look up `TracePath`-keyed maps; hashes agree with `String`
impl std::borrow::Borrow<str> for TracePath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TracePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Lifecycle state of a trace session
///
/// Transitions are one-way: Recording → Completed. Removal is not a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TraceState {
    /// Capture is still in progress
    #[default]
    Recording,
    /// Capture has ended
    Completed,
}

impl TraceState {
    /// Check if capture has ended
    pub fn is_completed(&self) -> bool {
        matches!(self, TraceState::Completed)
    }

    /// Check if `self` may move to `next`
    ///
    /// Staying in the same state is allowed; Completed never goes back.
    pub fn can_transition_to(&self, next: TraceState) -> bool {
        !matches!((self, next), (TraceState::Completed, TraceState::Recording))
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TraceState::Recording => "Recording",
            TraceState::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for TraceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Summary of a trace session as presented to management clients
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraceSummary {
    /// Session path
    pub path: TracePath,
    /// Lifecycle state at the time the summary was taken
    pub state: TraceState,
    /// Free-form label
    pub label: String,
}

impl TraceSummary {
    /// Create a summary
    pub fn new(path: impl Into<TracePath>, state: TraceState, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            state,
            label: label.into(),
        }
    }
}
