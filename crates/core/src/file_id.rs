//! Filesystem object identity
//!
//! A [`FileId`] correlates the filesystem object referenced by different
//! events of one trace. The filesystem-local `id` alone is not enough: it may
//! be reused after the file is deleted, so the creation timestamp is part of
//! the key and is compared at nanosecond resolution.
//!
//! ## Ordering
//!
//! `partition_id` → `id` → `creation_date`, where `creation_date` is compared
//! as a single nanosecond count. Two decompositions of the same instant
//! (`1s + 0ns` and `0s + 1_000_000_000ns`) are the same creation date.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

const NANOS_PER_SEC: i128 = 1_000_000_000;

/// File creation timestamp as captured (seconds + nanoseconds)
///
/// Equality, ordering and hashing all use [`CreationDate::as_nanos`], so the
/// nanosecond field is not required to be normalized.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CreationDate {
    /// Seconds since the epoch
    pub seconds: i64,
    /// Nanoseconds, added to `seconds`
    pub nanos: i64,
}

impl CreationDate {
    /// Create a creation date
    pub const fn new(seconds: i64, nanos: i64) -> Self {
        Self { seconds, nanos }
    }

    /// Total nanoseconds since the epoch
    #[inline]
    pub fn as_nanos(&self) -> i128 {
        self.seconds as i128 * NANOS_PER_SEC + self.nanos as i128
    }

    /// Same instant with `nanos` in `[0, 1_000_000_000)`
    ///
    /// Saturates at the `i64` range of seconds.
    pub fn normalized(&self) -> Self {
        let total = self.as_nanos();
        let seconds = total.div_euclid(NANOS_PER_SEC);
        let nanos = total.rem_euclid(NANOS_PER_SEC) as i64;
        match i64::try_from(seconds) {
            Ok(seconds) => Self { seconds, nanos },
            Err(_) if seconds < 0 => Self::new(i64::MIN, 0),
            Err(_) => Self::new(i64::MAX, NANOS_PER_SEC as i64 - 1),
        }
    }

    /// Convert to a UTC datetime, if representable
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let n = self.normalized();
        DateTime::from_timestamp(n.seconds, n.nanos as u32)
    }
}

impl From<DateTime<Utc>> for CreationDate {
    fn from(dt: DateTime<Utc>) -> Self {
        Self {
            seconds: dt.timestamp(),
            nanos: dt.timestamp_subsec_nanos() as i64,
        }
    }
}

impl PartialEq for CreationDate {
    fn eq(&self, other: &Self) -> bool {
        self.as_nanos() == other.as_nanos()
    }
}

impl Eq for CreationDate {}

impl Hash for CreationDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_nanos().hash(state);
    }
}

impl Ord for CreationDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_nanos().cmp(&other.as_nanos())
    }
}

impl PartialOrd for CreationDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for CreationDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.normalized();
        write!(f, "{}.{:09}", n.seconds, n.nanos)
    }
}

/// Identity of a filesystem object across the events of one trace
///
/// Immutable value type. Usable as a `BTreeMap` or `HashMap` key.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FileId {
    /// Partition (block device) the file lives on
    pub partition_id: u64,
    /// Filesystem-local identifier, may be reused after deletion
    pub id: u64,
    /// Creation timestamp, disambiguates reuse of `id`
    pub creation_date: CreationDate,
}

impl FileId {
    /// Create a file id
    pub const fn new(partition_id: u64, id: u64, creation_date: CreationDate) -> Self {
        Self {
            partition_id,
            id,
            creation_date,
        }
    }
}

impl PartialEq for FileId {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.partition_id == other.partition_id
            && self.creation_date == other.creation_date
    }
}

impl Eq for FileId {}

impl Hash for FileId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.partition_id.hash(state);
        self.id.hash(state);
        self.creation_date.hash(state);
    }
}

// Orders by: partition_id → id → creation_date
impl Ord for FileId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partition_id
            .cmp(&other.partition_id)
            .then(self.id.cmp(&other.id))
            .then(self.creation_date.cmp(&other.creation_date))
    }
}

impl PartialOrd for FileId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}@{}", self.partition_id, self.id, self.creation_date)
    }
}
