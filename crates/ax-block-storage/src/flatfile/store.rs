//! Append-only block files with compression, checksums and rotation.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::PathBuf;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::config::StorageConfig;
use crate::error::StorageError;
use crate::flatfile::{BlockByteCache, BlockFileKind};
use crate::kv::{BatchOp, KvStore, Table};
use crate::meta::{BlockFileInfo, FileTip, MetaKey};

/// Append-only store for one block kind.
///
/// Records are zstd-compressed and written at the tip of the current file;
/// once a file would grow past the configured ceiling the writer rotates to
/// the next file number. The location record and the new tip are committed
/// to the sorted map in one atomic batch, after the file bytes are durable,
/// so readers never see an index entry pointing at unwritten space. A crash
/// between the file write and the batch leaves orphan tail bytes that the
/// next append simply overwrites.
pub struct FlatFileStore {
    kind_dir: PathBuf,
    table: Table,
    tip_key: MetaKey,
    file_size_limit: u64,
    compression_level: i32,
    sync_writes: bool,
    cache: BlockByteCache,
    write_lock: Mutex<()>,
}

impl FlatFileStore {
    pub fn open(kind: BlockFileKind, config: &StorageConfig) -> Result<Self, StorageError> {
        let kind_dir = config.data_dir.join(kind.subdir());
        std::fs::create_dir_all(&kind_dir)?;
        Ok(Self {
            kind_dir,
            table: kind.table(),
            tip_key: kind.tip_key(),
            file_size_limit: config.file_size_limit,
            compression_level: config.compression_level,
            sync_writes: config.sync_writes,
            cache: BlockByteCache::new(config.cache_capacity),
            write_lock: Mutex::new(()),
        })
    }

    pub fn cache(&self) -> &BlockByteCache {
        &self.cache
    }

    fn file_path(&self, file_number: u32) -> PathBuf {
        self.kind_dir.join(format!("blk{file_number:09}.bin"))
    }

    fn load_tip(&self, kv: &KvStore) -> Result<FileTip, StorageError> {
        match kv.get(Table::Metadata, &self.tip_key.key_bytes())? {
            Some(bytes) => Ok(bincode::deserialize(&bytes)?),
            None => Ok(FileTip::default()),
        }
    }

    /// Compress and append one block, then commit its location record and
    /// the advanced tip atomically.
    pub fn put_block(
        &self,
        kv: &KvStore,
        block_num: u64,
        encoded: &[u8],
    ) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock();

        let compressed = zstd::encode_all(encoded, self.compression_level)?;
        let compressed_size = u32::try_from(compressed.len()).map_err(|_| {
            StorageError::Record(format!("record of {} bytes too large", compressed.len()))
        })?;
        let decompressed_size = u32::try_from(encoded.len()).map_err(|_| {
            StorageError::Record(format!("block of {} bytes too large", encoded.len()))
        })?;
        let checksum = crc32fast::hash(&compressed);

        let mut tip = self.load_tip(kv)?;
        // An oversized record still lands at offset zero of a fresh file;
        // rotation only triggers once the current file has content.
        if tip.file_offset != 0
            && u64::from(tip.file_offset) + u64::from(compressed_size) > self.file_size_limit
        {
            tip.file_number += 1;
            tip.file_offset = 0;
            info!("Rotated to block file {}", tip.file_number);
        }

        let path = self.file_path(tip.file_number);
        let mut file = OpenOptions::new().create(true).write(true).open(&path)?;
        file.seek(SeekFrom::Start(u64::from(tip.file_offset)))?;
        file.write_all(&compressed)?;
        if self.sync_writes {
            file.sync_data()?;
        }

        let info = BlockFileInfo {
            file_number: tip.file_number,
            file_offset: tip.file_offset,
            compressed_size,
            decompressed_size,
            checksum,
        };
        let new_tip = FileTip {
            file_number: tip.file_number,
            file_offset: tip.file_offset + compressed_size,
        };
        kv.write_batch(vec![
            BatchOp::put(self.table, block_num.to_be_bytes().to_vec(), bincode::serialize(&info)?),
            BatchOp::put(
                Table::Metadata,
                self.tip_key.key_bytes().to_vec(),
                bincode::serialize(&new_tip)?,
            ),
        ])?;

        self.cache.insert(block_num, encoded.to_vec());
        debug!(
            "Block {} appended to file {} at offset {}",
            block_num, info.file_number, info.file_offset
        );
        Ok(())
    }

    /// Fetch one block's bytes, cache first. A missing index entry is
    /// `Ok(None)`; so is any unreadable or corrupt record, after a warning.
    pub fn get_block(&self, kv: &KvStore, block_num: u64) -> Result<Option<Vec<u8>>, StorageError> {
        if let Some(bytes) = self.cache.lookup(block_num) {
            return Ok(Some(bytes));
        }
        let Some(info_bytes) = kv.get(self.table, &block_num.to_be_bytes())? else {
            return Ok(None);
        };
        Ok(self.resolve_record(block_num, &info_bytes))
    }

    /// Decode a location record and read the block it points at, consulting
    /// the cache first. Any failure past the index lookup is logged and
    /// reported as absent.
    pub fn resolve_record(&self, block_num: u64, info_bytes: &[u8]) -> Option<Vec<u8>> {
        if let Some(bytes) = self.cache.lookup(block_num) {
            return Some(bytes);
        }
        let info: BlockFileInfo = match bincode::deserialize(info_bytes) {
            Ok(info) => info,
            Err(e) => {
                warn!("Unreadable file record for block {}: {}", block_num, e);
                return None;
            }
        };
        match self.read_record(&info) {
            Ok(bytes) => {
                self.cache.insert(block_num, bytes.clone());
                Some(bytes)
            }
            Err(e) => {
                warn!(
                    "Block {} unreadable from file {}: {}",
                    block_num, info.file_number, e
                );
                None
            }
        }
    }

    fn read_record(&self, info: &BlockFileInfo) -> Result<Vec<u8>, StorageError> {
        let mut file = File::open(self.file_path(info.file_number))?;
        file.seek(SeekFrom::Start(u64::from(info.file_offset)))?;
        let mut compressed = vec![0u8; info.compressed_size as usize];
        file.read_exact(&mut compressed)?;

        if crc32fast::hash(&compressed) != info.checksum {
            return Err(StorageError::Record(format!(
                "checksum mismatch in file {} at offset {}",
                info.file_number, info.file_offset
            )));
        }
        let decompressed = zstd::decode_all(compressed.as_slice())?;
        if decompressed.len() != info.decompressed_size as usize {
            return Err(StorageError::Record(format!(
                "decompressed to {} bytes, record says {}",
                decompressed.len(),
                info.decompressed_size
            )));
        }
        Ok(decompressed)
    }
}
