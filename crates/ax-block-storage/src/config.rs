//! Storage configuration.

use std::path::PathBuf;

use crate::error::StorageError;

/// Which backend holds DS and Tx block bytes.
///
/// Chosen once when the store is opened and recorded in the metadata table;
/// reopening a data directory under the other mode fails at open. There is
/// no runtime switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    /// Everything lives in the key-value engine.
    SortedMap,
    /// DS and Tx blocks live in compressed append-only files; the engine
    /// holds their positions. The layout historical deployments use.
    FlatFile,
}

impl StorageMode {
    pub(crate) const fn marker(self) -> u8 {
        match self {
            StorageMode::SortedMap => 0,
            StorageMode::FlatFile => 1,
        }
    }

    pub(crate) fn from_marker(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(StorageMode::SortedMap),
            1 => Some(StorageMode::FlatFile),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StorageMode::SortedMap => "sorted-map",
            StorageMode::FlatFile => "flat-file",
        }
    }
}

/// Configuration for one [`BlockStorage`](crate::BlockStorage) handle.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Data directory; created if missing.
    pub data_dir: PathBuf,
    pub mode: StorageMode,
    /// Size ceiling for one flat block file before rotation (default: 128 MiB).
    pub file_size_limit: u64,
    /// Per-kind flat-file read cache capacity, in blocks (default: 20).
    pub cache_capacity: usize,
    /// fsync block writes before acknowledging them (default: true).
    pub sync_writes: bool,
    /// zstd level for flat-file records (default: 3).
    pub compression_level: i32,
    /// Engine block cache size in bytes (default: 256 MiB).
    pub block_cache_size: usize,
    /// Engine write buffer size in bytes (default: 64 MiB).
    pub write_buffer_size: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data/ledger"),
            mode: StorageMode::SortedMap,
            file_size_limit: 128 * 1024 * 1024, // 128 MiB
            cache_capacity: 20,
            sync_writes: true,
            compression_level: 3,
            block_cache_size: 256 * 1024 * 1024, // 256 MiB
            write_buffer_size: 64 * 1024 * 1024, // 64 MiB
        }
    }
}

impl StorageConfig {
    /// Config for tests: small buffers, no fsync.
    pub fn for_testing(data_dir: impl Into<PathBuf>, mode: StorageMode) -> Self {
        Self {
            data_dir: data_dir.into(),
            mode,
            file_size_limit: 4 * 1024 * 1024, // 4 MiB
            cache_capacity: 20,
            sync_writes: false,
            compression_level: 1,
            block_cache_size: 8 * 1024 * 1024,  // 8 MiB
            write_buffer_size: 4 * 1024 * 1024, // 4 MiB
        }
    }

    pub(crate) fn validate(&self) -> Result<(), StorageError> {
        if self.cache_capacity == 0 {
            return Err(StorageError::Config(
                "cache_capacity must be at least 1".to_string(),
            ));
        }
        if self.file_size_limit == 0 {
            return Err(StorageError::Config(
                "file_size_limit must be nonzero".to_string(),
            ));
        }
        Ok(())
    }
}
