//! Manager configuration.
//!
//! ```toml
//! node_prefix = "node1/"
//! trace_root = "/var/lib/iotrace/traces"
//! ```
//!
//! Both keys are optional. Without `trace_root` the manager keeps no trace
//! data on disk.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for a [`TraceManager`](crate::TraceManager).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ManagerConfig {
    /// Prefix of the traces this node owns. Empty owns every trace.
    pub node_prefix: String,
    /// Directory holding recorded trace data.
    pub trace_root: Option<PathBuf>,
}

impl ManagerConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }
}
