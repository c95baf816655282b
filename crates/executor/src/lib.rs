//! Trace management layer for iotrace
//!
//! Translates management requests into repository operations:
//!
//! - [`Command`]: ListTraces, RemoveTraces, GetTraceSummary
//! - [`Executor`]: dispatches a command against the repository, scoped to
//!   the node prefix the executor was built with
//! - [`Output`]: the typed response
//! - [`TraceManagement`]: typed wrapper returning plain values
//!
//! ## Ownership
//!
//! Each executor serves one node. A request prefix that does not begin with
//! the node prefix addresses another node: listing returns nothing, removal
//! reports [`Error::NoTracesRemoved`].

#![warn(missing_docs)]
#![warn(clippy::all)]

mod batch;
mod command;
mod error;
mod executor;
pub mod handlers;
mod management;
mod output;

pub use batch::{RemovalBatch, RemovalFailure};
pub use command::Command;
pub use error::{Error, Result, NO_TRACES_REMOVED};
pub use executor::Executor;
pub use management::TraceManagement;
pub use output::Output;

pub use iotrace_core::{TracePath, TraceState, TraceSummary};
