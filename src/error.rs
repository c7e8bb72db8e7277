//! Error types shared across the crate.
//!
//! Construction failures (unreadable session directory, corrupt metadata)
//! are fatal and surfaced to the caller. Persistence failures during a
//! mutation are surfaced too, so the caller can retry or alert the user.

use std::path::PathBuf;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The session directory is missing or cannot be read.
    #[error("cannot read session directory {path}: {source}")]
    SessionDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The metadata file exists but cannot be parsed into records.
    /// This is deliberately fatal: falling back to auto-discovery would
    /// silently discard whatever data produced the corruption.
    #[error("corrupt metadata file {path}: {source}")]
    MetadataCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing a file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A reorder permutation referenced an index outside the collection.
    #[error("index {index} out of range for {len} records")]
    IndexOutOfRange { index: usize, len: usize },
}
