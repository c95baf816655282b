//! Trace data backends
//!
//! A backend deletes the recorded data of a trace. Removal I/O can fail
//! independently of the session's lifecycle state; failures surface as
//! [`Error::RemovalFailure`].

use iotrace_core::{Error, Result, TracePath};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Storage holding the recorded data of trace sessions
pub trait TraceBackend: Send + Sync {
    /// Delete the stored data for `path`
    ///
    /// Data that is already gone counts as removed.
    fn remove_trace(&self, path: &TracePath) -> Result<()>;
}

/// Backend with no stored data; removal always succeeds
#[derive(Debug, Default, Clone, Copy)]
pub struct MemoryBackend;

impl MemoryBackend {
    /// Create a memory backend
    pub fn new() -> Self {
        Self
    }
}

impl TraceBackend for MemoryBackend {
    fn remove_trace(&self, _path: &TracePath) -> Result<()> {
        Ok(())
    }
}

/// Backend storing each trace in a directory under a common root
///
/// Every trace gets one directory directly below the root, named by the
/// percent-encoded trace path: `n1/2024-01-01` lives at
/// `<root>/n1%2F2024-01-01`. Distinct paths never share or nest directories,
/// so removing one trace cannot touch another's data.
#[derive(Debug, Clone)]
pub struct DirectoryBackend {
    root: PathBuf,
}

impl DirectoryBackend {
    /// Create a directory backend rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve the on-disk location of a trace
    ///
    /// The result is always a direct child of `root`.
    pub fn trace_dir(&self, path: &TracePath) -> Result<PathBuf> {
        let name = urlencoding::encode(path.as_str());
        // '.' survives encoding, so these would name the root or its parent
        if matches!(name.as_ref(), "" | "." | "..") {
            return Err(Error::removal_failure(
                path,
                "path does not name a trace directory",
            ));
        }
        Ok(self.root.join(name.as_ref()))
    }
}

impl TraceBackend for DirectoryBackend {
    fn remove_trace(&self, path: &TracePath) -> Result<()> {
        let dir = self.trace_dir(path)?;
        let result = match fs::symlink_metadata(&dir) {
            Ok(meta) if meta.is_dir() => fs::remove_dir_all(&dir),
            Ok(_) => fs::remove_file(&dir),
            Err(e) => Err(e),
        };
        match result {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path, dir = %dir.display(), "trace data already gone");
                Ok(())
            }
            Err(e) => Err(Error::removal_failure(path, e.to_string())),
        }
    }
}
