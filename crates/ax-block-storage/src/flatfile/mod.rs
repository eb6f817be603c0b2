//! # Flat-File Backend
//!
//! Append-only storage for the two chain-ordered block kinds. Block bytes
//! are zstd-compressed into numbered files under `blocks/ds` and
//! `blocks/tx`; the sorted-map tables keep only small location records.

mod cache;
mod store;

pub use cache::BlockByteCache;
pub use store::FlatFileStore;

use crate::kv::Table;
use crate::meta::MetaKey;

/// Which chain-ordered block kind a flat-file store serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockFileKind {
    Ds,
    Tx,
}

impl BlockFileKind {
    /// Subdirectory of the data dir holding this kind's files.
    pub fn subdir(self) -> &'static str {
        match self {
            BlockFileKind::Ds => "blocks/ds",
            BlockFileKind::Tx => "blocks/tx",
        }
    }

    /// Table holding this kind's location records.
    pub fn table(self) -> Table {
        match self {
            BlockFileKind::Ds => Table::DsBlocks,
            BlockFileKind::Tx => Table::TxBlocks,
        }
    }

    /// Metadata key of this kind's append cursor.
    pub fn tip_key(self) -> MetaKey {
        match self {
            BlockFileKind::Ds => MetaKey::DsBlockFileTip,
            BlockFileKind::Tx => MetaKey::TxBlockFileTip,
        }
    }
}
