//! Captured event shapes carrying file identity
//!
//! Trace capture emits several event kinds that reference a filesystem object.
//! They all reduce to the same three fields, so each converts into a
//! [`FileId`] without any behavior of its own.

use crate::file_id::{CreationDate, FileId};
use serde::{Deserialize, Serialize};

/// File identity as recorded in a raw trace event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileIdRecord {
    /// Partition the file lives on
    pub partition_id: u64,
    /// Filesystem-local identifier
    pub id: u64,
    /// Creation timestamp
    pub creation_date: CreationDate,
}

/// A file was given a name (create, rename, link)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNameEvent {
    /// The named file
    pub file_id: FileIdRecord,
    /// Identity of the parent directory
    pub parent_id: FileIdRecord,
    /// New name within the parent
    pub file_name: String,
}

/// Metadata for an I/O against a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetaEvent {
    /// Target file
    pub file_id: FileIdRecord,
    /// Logical offset of the I/O within the file
    pub file_offset: u64,
    /// File size at the time of the I/O
    pub file_size: u64,
}

/// Kind of a filesystem-level file event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileEventKind {
    /// File created
    Create,
    /// File deleted
    Delete,
    /// File moved to a new name
    MoveTo,
    /// File moved away from its old name
    MoveFrom,
}

/// A filesystem-level file event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEvent {
    /// Target file
    pub file_id: FileIdRecord,
    /// Parent directory
    pub parent_id: FileIdRecord,
    /// What happened
    pub kind: FileEventKind,
}

/// Device section of a parsed event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// Device id
    pub id: u64,
    /// Partition id on that device
    pub partition: u64,
}

/// File section of a parsed event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    /// Filesystem-local identifier
    pub id: u64,
    /// Creation timestamp
    pub creation_date: CreationDate,
    /// Resolved path, when known
    pub path: Option<String>,
}

/// Event produced by post-processing a raw trace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedEvent {
    /// Sequence number within the trace
    pub sid: u64,
    /// Device the I/O targeted
    pub device: DeviceInfo,
    /// File the I/O targeted
    pub file: FileInfo,
}

impl From<&FileIdRecord> for FileId {
    fn from(r: &FileIdRecord) -> Self {
        FileId::new(r.partition_id, r.id, r.creation_date)
    }
}

impl From<FileIdRecord> for FileId {
    fn from(r: FileIdRecord) -> Self {
        FileId::from(&r)
    }
}

impl From<&FileNameEvent> for FileId {
    fn from(e: &FileNameEvent) -> Self {
        FileId::from(&e.file_id)
    }
}

impl From<&FileMetaEvent> for FileId {
    fn from(e: &FileMetaEvent) -> Self {
        FileId::from(&e.file_id)
    }
}

impl From<&FileEvent> for FileId {
    fn from(e: &FileEvent) -> Self {
        FileId::from(&e.file_id)
    }
}

impl From<&ParsedEvent> for FileId {
    fn from(e: &ParsedEvent) -> Self {
        FileId::new(e.device.partition, e.file.id, e.file.creation_date)
    }
}
