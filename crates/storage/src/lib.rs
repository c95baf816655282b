//! Storage layer for iotrace
//!
//! This crate owns every known trace session:
//! - TraceRepository: DashMap-sharded path → session map with per-path removal locks
//! - RemovalOutcome: result of removing one session
//! - TraceBackend: the storage the recorded trace data lives in

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod repository;
mod session;

pub use backend::{DirectoryBackend, MemoryBackend, TraceBackend};
pub use repository::TraceRepository;
pub use session::RemovalOutcome;
