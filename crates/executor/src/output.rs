//! Command outputs.

use iotrace_core::TraceSummary;
use serde::{Deserialize, Serialize};

/// Response to a [`Command`](crate::Command).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "output", content = "value", rename_all = "snake_case")]
pub enum Output {
    /// Trace summaries (ListTraces, RemoveTraces).
    TraceList(Vec<TraceSummary>),
    /// A single trace summary (GetTraceSummary).
    TraceSummary(TraceSummary),
}
