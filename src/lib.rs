//! # iotrace
//!
//! Management layer of a storage I/O tracing framework.
//!
//! iotrace tracks named trace recordings ("sessions") of one node and serves
//! list, remove and summary requests from remote management clients. It also
//! defines [`FileId`], the key that correlates a filesystem object across the
//! events of a trace.
//!
//! ## Quick Start
//!
//! ```ignore
//! use iotrace::prelude::*;
//!
//! let manager = TraceManager::in_memory("node1/");
//!
//! manager.repository().begin_recording("node1/a", "first")?;
//! manager.repository().complete("node1/a")?;
//!
//! let traces = manager.list_traces("node1/")?;
//! let removed = manager.remove_traces("node1/", false)?;
//! ```
//!
//! ## Removal Policy
//!
//! - Without `force`, only Completed traces are removed
//! - Each trace is removed independently; one failure does not stop the rest
//! - The request fails with "No traces removed." only when nothing was removed

#![warn(missing_docs)]

mod config;
mod error;
mod manager;

pub mod prelude;

// Re-export main entry points
pub use config::ManagerConfig;
pub use error::{Error, Result};
pub use manager::{TraceManager, TraceManagerBuilder};

// Re-export layer types
pub use iotrace_core::event;
pub use iotrace_core::{CreationDate, FileId, TracePath, TraceState, TraceSummary};
pub use iotrace_executor::{Command, Output, RemovalBatch, RemovalFailure, NO_TRACES_REMOVED};
pub use iotrace_storage::{
    DirectoryBackend, MemoryBackend, RemovalOutcome, TraceBackend, TraceRepository,
};
