//! Error types for the management layer.

use thiserror::Error;

/// Failure message of a removal batch that removed nothing.
pub const NO_TRACES_REMOVED: &str = "No traces removed.";

/// Management errors.
///
/// Per-session removal failures never appear here; they are logged and
/// collected in [`RemovalBatch`](crate::RemovalBatch). Only the aggregate
/// outcome reaches the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Trace path unknown.
    #[error("trace not found: {path}")]
    NotFound {
        /// The path that was looked up
        path: String,
    },

    /// A removal batch removed nothing.
    #[error("No traces removed.")]
    NoTracesRemoved,

    /// Internal error.
    #[error("internal error: {reason}")]
    Internal {
        /// Description
        reason: String,
    },
}

/// Result type for management operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get the canonical error code.
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::NotFound { .. } => "NotFound",
            Error::NoTracesRemoved => "NoTracesRemoved",
            Error::Internal { .. } => "Internal",
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

impl From<iotrace_core::Error> for Error {
    fn from(e: iotrace_core::Error) -> Self {
        match e {
            iotrace_core::Error::NotFound { path } => Error::NotFound {
                path: path.to_string(),
            },
            other => Error::Internal {
                reason: other.to_string(),
            },
        }
    }
}
