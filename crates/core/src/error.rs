//! Core error type
//!
//! ## Error Codes (Canonical)
//!
//! These codes are frozen and must not change:
//!
//! | Code | Description |
//! |------|-------------|
//! | NotFound | No session is registered under the path |
//! | AlreadyExists | A session is already registered under the path |
//! | InvalidTransition | Lifecycle transition not allowed |
//! | RemovalFailure | Removal I/O failed for one session |
//! | Io | Underlying I/O error |
//! | Internal | Bug or invariant violation |

use crate::types::{TracePath, TraceState};
use thiserror::Error;

/// Errors raised by the trace repository and its sessions
#[derive(Debug, Error)]
pub enum Error {
    /// No session is registered under this path
    #[error("trace not found: {path}")]
    NotFound {
        /// The path that was looked up
        path: TracePath,
    },

    /// A session is already registered under this path
    #[error("trace already exists: {path}")]
    AlreadyExists {
        /// The conflicting path
        path: TracePath,
    },

    /// Lifecycle transition not allowed
    #[error("invalid transition for {path}: {from} -> {to}")]
    InvalidTransition {
        /// Session path
        path: TracePath,
        /// Current state
        from: TraceState,
        /// Requested state
        to: TraceState,
    },

    /// Removing the stored trace failed
    #[error("cannot remove trace {path}: {reason}")]
    RemovalFailure {
        /// Session path
        path: TracePath,
        /// Backend-provided reason
        reason: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error (bug or invariant violation)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Check if this is a per-session removal failure
    pub fn is_removal_failure(&self) -> bool {
        matches!(self, Error::RemovalFailure { .. })
    }

    /// Get the canonical error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::NotFound { .. } => "NotFound",
            Error::AlreadyExists { .. } => "AlreadyExists",
            Error::InvalidTransition { .. } => "InvalidTransition",
            Error::RemovalFailure { .. } => "RemovalFailure",
            Error::Io(_) => "Io",
            Error::Internal(_) => "Internal",
        }
    }

    /// Build a not-found error for a path
    pub fn not_found(path: impl Into<TracePath>) -> Self {
        Error::NotFound { path: path.into() }
    }

    /// Build a removal failure for a path
    pub fn removal_failure(path: impl Into<TracePath>, reason: impl Into<String>) -> Self {
        Error::RemovalFailure {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
