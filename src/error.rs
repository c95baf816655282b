//! Unified error types for iotrace.
//!
//! This module provides a single error type that wraps the errors of the
//! storage and management layers and presents a consistent interface.

use thiserror::Error;

/// All iotrace errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Trace path unknown
    #[error("not found: {0}")]
    NotFound(String),

    /// A live trace already uses this path
    #[error("already exists: {0}")]
    AlreadyExists(String),

    /// A removal request removed nothing
    #[error("No traces removed.")]
    NoTracesRemoved,

    /// Removing one trace's data failed
    #[error("removal failed for {path}: {reason}")]
    RemovalFailure {
        /// Trace path
        path: String,
        /// Backend-provided reason
        reason: String,
    },

    /// Invalid lifecycle transition
    #[error("invalid transition: {0}")]
    InvalidTransition(String),

    /// Configuration could not be read or parsed
    #[error("configuration error: {0}")]
    Config(String),

    /// The manager was closed
    #[error("manager is closed")]
    Closed,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error (bug or invariant violation)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for iotrace operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if this is the aggregate removal failure.
    pub fn is_no_traces_removed(&self) -> bool {
        matches!(self, Error::NoTracesRemoved)
    }
}

// Convert from storage errors
impl From<iotrace_core::Error> for Error {
    fn from(e: iotrace_core::Error) -> Self {
        use iotrace_core::Error as CoreError;
        match e {
            CoreError::NotFound { path } => Error::NotFound(path.to_string()),
            CoreError::AlreadyExists { path } => Error::AlreadyExists(path.to_string()),
            e @ CoreError::InvalidTransition { .. } => Error::InvalidTransition(e.to_string()),
            CoreError::RemovalFailure { path, reason } => Error::RemovalFailure {
                path: path.to_string(),
                reason,
            },
            CoreError::Io(io_err) => Error::Io(io_err),
            CoreError::Internal(msg) => Error::Internal(msg),
        }
    }
}

// Convert from management errors
impl From<iotrace_executor::Error> for Error {
    fn from(e: iotrace_executor::Error) -> Self {
        use iotrace_executor::Error as ExecError;
        match e {
            ExecError::NotFound { path } => Error::NotFound(path),
            ExecError::NoTracesRemoved => Error::NoTracesRemoved,
            ExecError::Internal { reason } => Error::Internal(reason),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}
