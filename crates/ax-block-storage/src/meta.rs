//! Well-known metadata singletons and flat-file bookkeeping records.

use serde::{Deserialize, Serialize};

/// Keys of the metadata table. Each is a single byte; values are opaque to
/// the facade except the storage-mode marker and the file tips.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaKey {
    /// Latest committed state trie root.
    StateRoot = 0,
    /// Highest DS block number with full history retained.
    LatestActiveDsBlockNum = 1,
    /// Earliest epoch whose state can be served to syncing peers.
    EarliestHistoryStateEpoch = 2,
    /// Which backend this data directory was initialized under.
    StorageMode = 3,
    /// Append cursor of the DS block files.
    DsBlockFileTip = 4,
    /// Append cursor of the Tx block files.
    TxBlockFileTip = 5,
}

impl MetaKey {
    pub fn key_bytes(self) -> [u8; 1] {
        [self as u8]
    }
}

/// Append cursor of one flat-file kind: the file currently being filled and
/// the offset of its next free byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FileTip {
    pub file_number: u32,
    pub file_offset: u32,
}

/// Where one block's compressed record lives, stored in the block table in
/// place of the block bytes when the flat-file backend is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockFileInfo {
    pub file_number: u32,
    pub file_offset: u32,
    pub compressed_size: u32,
    pub decompressed_size: u32,
    /// crc32 over the compressed record, verified before decompression.
    pub checksum: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_keys_are_distinct_single_bytes() {
        let keys = [
            MetaKey::StateRoot,
            MetaKey::LatestActiveDsBlockNum,
            MetaKey::EarliestHistoryStateEpoch,
            MetaKey::StorageMode,
            MetaKey::DsBlockFileTip,
            MetaKey::TxBlockFileTip,
        ];
        let mut seen: Vec<u8> = keys.iter().map(|k| k.key_bytes()[0]).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), keys.len());
    }

    #[test]
    fn test_file_info_round_trips_through_bincode() {
        let info = BlockFileInfo {
            file_number: 3,
            file_offset: 4096,
            compressed_size: 512,
            decompressed_size: 2048,
            checksum: 0xDEAD_BEEF,
        };
        let bytes = bincode::serialize(&info).unwrap();
        let back: BlockFileInfo = bincode::deserialize(&bytes).unwrap();
        assert_eq!(back, info);
    }
}
