//! Management commands.

use serde::{Deserialize, Serialize};

/// A management request.
///
/// Every command runs to completion synchronously; the [`Output`](crate::Output)
/// is only produced once all of its effects are visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// List traces whose path begins with `prefix`.
    ListTraces {
        /// Path prefix, must begin with the node prefix
        prefix: String,
    },
    /// Remove traces whose path begins with `prefix`.
    RemoveTraces {
        /// Path prefix, must begin with the node prefix
        prefix: String,
        /// Also remove traces that are still recording
        #[serde(default)]
        force: bool,
    },
    /// Get the summary of one trace.
    GetTraceSummary {
        /// Full trace path
        path: String,
    },
}

impl Command {
    /// Get the command name, as used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::ListTraces { .. } => "ListTraces",
            Command::RemoveTraces { .. } => "RemoveTraces",
            Command::GetTraceSummary { .. } => "GetTraceSummary",
        }
    }
}
