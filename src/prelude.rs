//! Convenient imports for iotrace.
//!
//! ```ignore
//! use iotrace::prelude::*;
//!
//! let manager = TraceManager::in_memory("node1/");
//! ```

// Main entry point
pub use crate::manager::{TraceManager, TraceManagerBuilder};
pub use crate::config::ManagerConfig;

// Error handling
pub use crate::error::{Error, Result};

// Core types
pub use crate::{CreationDate, FileId, TracePath, TraceState, TraceSummary};

// Repository
pub use crate::{TraceBackend, TraceRepository};
