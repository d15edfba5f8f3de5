//! Typed error enum for the storage layer.
//!
//! Callers match on specific failure modes instead of downcasting opaque
//! boxes. Corruption of an existing catalog file is surfaced as its own
//! variant because it must be fatal at load time: silently treating a
//! corrupt file as empty would overwrite user data on the next save.

use std::path::PathBuf;

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem read/write/rename failure on the backing file.
    #[error("catalog io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Backing file exists but does not parse as a record array.
    #[error("catalog file {path} is corrupt: {source}")]
    CorruptData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// In-memory catalog could not be serialized for persistence.
    #[error("catalog serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl StorageError {
    /// Whether this error means the backing file is corrupt (fatal; do not
    /// retry, do not overwrite).
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::CorruptData { .. })
    }
}
