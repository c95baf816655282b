//! Core types for iotrace
//!
//! This crate defines the value types shared by every layer:
//! - [`TracePath`], [`TraceState`], [`TraceSummary`]: trace session identity and metadata
//! - [`FileId`], [`CreationDate`]: filesystem object correlation keys
//! - [`event`]: captured event shapes a [`FileId`] can be built from
//! - [`Error`]: the core error type

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod event;
pub mod file_id;
pub mod types;

pub use error::{Error, Result};
pub use file_id::{CreationDate, FileId};
pub use types::{TracePath, TraceState, TraceSummary};
