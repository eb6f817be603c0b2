//! Storage error taxonomy.
//!
//! "Block not found" is not an error anywhere in this crate; lookups return
//! `Ok(None)`. Errors mean the engine, the filesystem or the configuration
//! failed, and retrying is the caller's decision; nothing here retries.

use ax_ledger_codec::CodecError;
use thiserror::Error;

/// Failures from the storage layer.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The key-value engine rejected an operation.
    #[error("storage engine: {0}")]
    Engine(String),

    /// Filesystem-level failure (flat files, directory lock).
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Canonical encoding of a value failed on the write path.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Iteration succeeded but the table holds nothing.
    #[error("disk is empty")]
    DiskEmpty,

    /// The data directory was initialized under the other backend.
    #[error("data dir was initialized as {on_disk} but configured as {configured}")]
    ModeMismatch {
        configured: &'static str,
        on_disk: &'static str,
    },

    /// Another process holds the data directory.
    #[error("data dir is locked by another process: {0}")]
    LockHeld(String),

    /// An internal bookkeeping record would not round-trip.
    #[error("record serialization: {0}")]
    Record(String),

    /// The configuration cannot describe a working store.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<bincode::Error> for StorageError {
    fn from(err: bincode::Error) -> Self {
        StorageError::Record(err.to_string())
    }
}
