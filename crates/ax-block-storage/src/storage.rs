//! # Block Storage Facade
//!
//! One handle per data directory. The facade owns the key-value engine, the
//! optional flat-file stores and an exclusive directory lock, and speaks in
//! domain types: callers hand it blocks, it handles encoding, placement and
//! the backend split.

use std::collections::BTreeMap;
use std::fs::File;

use fs2::FileExt;
use tracing::{debug, info, warn};

use ax_ledger_codec::{
    decode_ds_block, decode_micro_block, decode_tx_block, decode_vc_block, encode_ds_block,
    encode_micro_block, encode_tx_block, encode_vc_block,
};
use shared_types::{BlockHash, DsBlock, MicroBlock, PubKey, TxBlock, TxnHash, VcBlock, PUB_KEY_SIZE};

use crate::config::{StorageConfig, StorageMode};
use crate::error::StorageError;
use crate::flatfile::{BlockFileKind, FlatFileStore};
use crate::kv::{KvStore, Table};
use crate::meta::MetaKey;

/// Where chain-ordered block bytes live. Fixed at open time.
enum Backend {
    SortedMap,
    FlatFile {
        ds_files: FlatFileStore,
        tx_files: FlatFileStore,
    },
}

/// The durable ledger store.
///
/// All methods take `&self`; the handle is `Send + Sync` and meant to be
/// shared behind an `Arc` by every subsystem that touches the chain.
pub struct BlockStorage {
    pub(crate) kv: KvStore,
    backend: Backend,
    _dir_lock: File,
}

impl BlockStorage {
    /// Open (or create) the store under `config.data_dir`.
    ///
    /// Takes an exclusive lock on the directory, then checks the on-disk
    /// mode marker: a directory initialized under one backend refuses to
    /// open under the other.
    pub fn open(config: &StorageConfig) -> Result<Self, StorageError> {
        config.validate()?;
        std::fs::create_dir_all(&config.data_dir)?;

        let lock_path = config.data_dir.join("ledger.lock");
        let dir_lock = File::create(&lock_path)?;
        dir_lock
            .try_lock_exclusive()
            .map_err(|e| StorageError::LockHeld(format!("{}: {e}", lock_path.display())))?;

        let kv = KvStore::open(config)?;

        match kv.get(Table::Metadata, &MetaKey::StorageMode.key_bytes())? {
            Some(marker) => {
                let on_disk = marker
                    .first()
                    .copied()
                    .and_then(StorageMode::from_marker)
                    .ok_or_else(|| {
                        StorageError::Record("unrecognized storage mode marker".to_string())
                    })?;
                if on_disk != config.mode {
                    return Err(StorageError::ModeMismatch {
                        configured: config.mode.as_str(),
                        on_disk: on_disk.as_str(),
                    });
                }
            }
            None => {
                kv.put(
                    Table::Metadata,
                    &MetaKey::StorageMode.key_bytes(),
                    &[config.mode.marker()],
                )?;
            }
        }

        let backend = match config.mode {
            StorageMode::SortedMap => Backend::SortedMap,
            StorageMode::FlatFile => Backend::FlatFile {
                ds_files: FlatFileStore::open(BlockFileKind::Ds, config)?,
                tx_files: FlatFileStore::open(BlockFileKind::Tx, config)?,
            },
        };

        info!(
            "Block storage opened at {} in {} mode",
            config.data_dir.display(),
            config.mode.as_str()
        );
        Ok(Self {
            kv,
            backend,
            _dir_lock: dir_lock,
        })
    }

    fn chain_files(&self, kind: BlockFileKind) -> Option<&FlatFileStore> {
        match (&self.backend, kind) {
            (Backend::FlatFile { ds_files, .. }, BlockFileKind::Ds) => Some(ds_files),
            (Backend::FlatFile { tx_files, .. }, BlockFileKind::Tx) => Some(tx_files),
            (Backend::SortedMap, _) => None,
        }
    }

    fn put_chain_block(
        &self,
        kind: BlockFileKind,
        block_num: u64,
        encoded: &[u8],
    ) -> Result<(), StorageError> {
        match self.chain_files(kind) {
            None => self
                .kv
                .put(kind.table(), &block_num.to_be_bytes(), encoded),
            Some(files) => files.put_block(&self.kv, block_num, encoded),
        }
    }

    fn get_chain_block_bytes(
        &self,
        kind: BlockFileKind,
        block_num: u64,
    ) -> Result<Option<Vec<u8>>, StorageError> {
        match self.chain_files(kind) {
            None => self.kv.get(kind.table(), &block_num.to_be_bytes()),
            Some(files) => files.get_block(&self.kv, block_num),
        }
    }

    /// Turn one index entry into block bytes. In sorted-map mode the entry
    /// is the block; in flat-file mode it locates the block.
    fn resolve_chain_value(
        &self,
        kind: BlockFileKind,
        block_num: u64,
        index_value: Vec<u8>,
    ) -> Option<Vec<u8>> {
        match self.chain_files(kind) {
            None => Some(index_value),
            Some(files) => files.resolve_record(block_num, &index_value),
        }
    }

    // ===== DS BLOCKS =====

    pub fn put_ds_block(&self, block_num: u64, block: &DsBlock) -> Result<(), StorageError> {
        let encoded = encode_ds_block(block)?;
        self.put_chain_block(BlockFileKind::Ds, block_num, &encoded)?;
        info!("DS block {} stored", block_num);
        Ok(())
    }

    pub fn get_ds_block(&self, block_num: u64) -> Result<Option<DsBlock>, StorageError> {
        let Some(bytes) = self.get_chain_block_bytes(BlockFileKind::Ds, block_num)? else {
            return Ok(None);
        };
        match decode_ds_block(&bytes) {
            Ok(block) => Ok(Some(block)),
            Err(e) => {
                warn!("DS block {} failed to decode: {}", block_num, e);
                Ok(None)
            }
        }
    }

    /// Every stored DS block in ascending block-number order.
    ///
    /// Unreadable entries are skipped with a warning. An empty result after
    /// a successful scan is [`StorageError::DiskEmpty`]: a node that asks
    /// for the whole chain and finds nothing must resynchronize, not treat
    /// the void as a valid chain.
    pub fn get_all_ds_blocks(&self) -> Result<Vec<DsBlock>, StorageError> {
        // Folded through an ordered map so the result is numeric-ascending
        // whatever order the engine hands entries back in.
        let mut blocks = BTreeMap::new();
        for (key, value) in self.kv.iterate(Table::DsBlocks)? {
            let Some(block_num) = parse_block_num_key(&key, "DS") else {
                continue;
            };
            let Some(bytes) = self.resolve_chain_value(BlockFileKind::Ds, block_num, value) else {
                continue;
            };
            match decode_ds_block(&bytes) {
                Ok(block) => {
                    blocks.insert(block_num, block);
                }
                Err(e) => warn!("Skipping undecodable DS block {}: {}", block_num, e),
            }
        }
        if blocks.is_empty() {
            return Err(StorageError::DiskEmpty);
        }
        Ok(blocks.into_values().collect())
    }

    pub fn get_latest_ds_block(&self) -> Result<Option<DsBlock>, StorageError> {
        let Some((key, value)) = self.kv.last_entry(Table::DsBlocks)? else {
            return Ok(None);
        };
        let Some(block_num) = parse_block_num_key(&key, "DS") else {
            return Ok(None);
        };
        let Some(bytes) = self.resolve_chain_value(BlockFileKind::Ds, block_num, value) else {
            return Ok(None);
        };
        match decode_ds_block(&bytes) {
            Ok(block) => Ok(Some(block)),
            Err(e) => {
                warn!("Latest DS block {} failed to decode: {}", block_num, e);
                Ok(None)
            }
        }
    }

    // ===== TX BLOCKS =====

    pub fn put_tx_block(&self, block_num: u64, block: &TxBlock) -> Result<(), StorageError> {
        let encoded = encode_tx_block(block)?;
        self.put_chain_block(BlockFileKind::Tx, block_num, &encoded)?;
        info!("Tx block {} stored", block_num);
        Ok(())
    }

    pub fn get_tx_block(&self, block_num: u64) -> Result<Option<TxBlock>, StorageError> {
        let Some(bytes) = self.get_chain_block_bytes(BlockFileKind::Tx, block_num)? else {
            return Ok(None);
        };
        match decode_tx_block(&bytes) {
            Ok(block) => Ok(Some(block)),
            Err(e) => {
                warn!("Tx block {} failed to decode: {}", block_num, e);
                Ok(None)
            }
        }
    }

    /// Every stored Tx block in ascending block-number order; same skip and
    /// empty-disk semantics as [`BlockStorage::get_all_ds_blocks`].
    pub fn get_all_tx_blocks(&self) -> Result<Vec<TxBlock>, StorageError> {
        let mut blocks = BTreeMap::new();
        for (key, value) in self.kv.iterate(Table::TxBlocks)? {
            let Some(block_num) = parse_block_num_key(&key, "Tx") else {
                continue;
            };
            let Some(bytes) = self.resolve_chain_value(BlockFileKind::Tx, block_num, value) else {
                continue;
            };
            match decode_tx_block(&bytes) {
                Ok(block) => {
                    blocks.insert(block_num, block);
                }
                Err(e) => warn!("Skipping undecodable Tx block {}: {}", block_num, e),
            }
        }
        if blocks.is_empty() {
            return Err(StorageError::DiskEmpty);
        }
        Ok(blocks.into_values().collect())
    }

    pub fn get_latest_tx_block(&self) -> Result<Option<TxBlock>, StorageError> {
        let Some((key, value)) = self.kv.last_entry(Table::TxBlocks)? else {
            return Ok(None);
        };
        let Some(block_num) = parse_block_num_key(&key, "Tx") else {
            return Ok(None);
        };
        let Some(bytes) = self.resolve_chain_value(BlockFileKind::Tx, block_num, value) else {
            return Ok(None);
        };
        match decode_tx_block(&bytes) {
            Ok(block) => Ok(Some(block)),
            Err(e) => {
                warn!("Latest Tx block {} failed to decode: {}", block_num, e);
                Ok(None)
            }
        }
    }

    // ===== MICRO BLOCKS =====

    /// Micro blocks are keyed by their own hash; both backends keep them in
    /// the engine.
    pub fn put_micro_block(&self, block: &MicroBlock) -> Result<(), StorageError> {
        let encoded = encode_micro_block(block)?;
        let hash = block.block_hash();
        self.kv.put(Table::MicroBlocks, &hash, &encoded)?;
        debug!("Micro block {} stored", hex::encode(hash));
        Ok(())
    }

    pub fn get_micro_block(&self, hash: &BlockHash) -> Result<Option<MicroBlock>, StorageError> {
        let Some(bytes) = self.kv.get(Table::MicroBlocks, hash)? else {
            return Ok(None);
        };
        match decode_micro_block(&bytes) {
            Ok(block) => Ok(Some(block)),
            Err(e) => {
                warn!("Micro block {} failed to decode: {}", hex::encode(hash), e);
                Ok(None)
            }
        }
    }

    // ===== VC BLOCKS =====

    pub fn put_vc_block(&self, block: &VcBlock) -> Result<(), StorageError> {
        let encoded = encode_vc_block(block)?;
        let hash = block.block_hash();
        self.kv.put(Table::VcBlocks, &hash, &encoded)?;
        debug!("VC block {} stored", hex::encode(hash));
        Ok(())
    }

    pub fn get_vc_block(&self, hash: &BlockHash) -> Result<Option<VcBlock>, StorageError> {
        let Some(bytes) = self.kv.get(Table::VcBlocks, hash)? else {
            return Ok(None);
        };
        match decode_vc_block(&bytes) {
            Ok(block) => Ok(Some(block)),
            Err(e) => {
                warn!("VC block {} failed to decode: {}", hex::encode(hash), e);
                Ok(None)
            }
        }
    }

    // ===== TX BODIES =====

    pub fn put_tx_body(&self, hash: &TxnHash, body: &[u8]) -> Result<(), StorageError> {
        self.kv.put(Table::TxBodies, hash, body)
    }

    pub fn get_tx_body(&self, hash: &TxnHash) -> Result<Option<Vec<u8>>, StorageError> {
        self.kv.get(Table::TxBodies, hash)
    }

    // ===== METADATA =====

    pub fn put_metadata(&self, key: MetaKey, value: &[u8]) -> Result<(), StorageError> {
        self.kv.put(Table::Metadata, &key.key_bytes(), value)
    }

    pub fn get_metadata(&self, key: MetaKey) -> Result<Option<Vec<u8>>, StorageError> {
        self.kv.get(Table::Metadata, &key.key_bytes())
    }

    // ===== EXT SEED WHITELIST =====

    pub fn put_ext_seed_pub_key(&self, key: &PubKey) -> Result<(), StorageError> {
        self.kv.put(Table::ExtSeedPubKeys, key.as_bytes(), &[])
    }

    pub fn delete_ext_seed_pub_key(&self, key: &PubKey) -> Result<(), StorageError> {
        self.kv.delete(Table::ExtSeedPubKeys, key.as_bytes())
    }

    /// Every whitelisted seed key, in key order. Entries of the wrong width
    /// are skipped with a warning.
    pub fn get_all_ext_seed_pub_keys(&self) -> Result<Vec<PubKey>, StorageError> {
        let mut keys = Vec::new();
        for (key, _) in self.kv.iterate(Table::ExtSeedPubKeys)? {
            match <[u8; PUB_KEY_SIZE]>::try_from(key.as_slice()) {
                Ok(bytes) => keys.push(PubKey(bytes)),
                Err(_) => warn!("Skipping seed key entry with {}-byte key", key.len()),
            }
        }
        Ok(keys)
    }

    // ===== MAINTENANCE =====

    /// Drop every entry of one table. In flat-file mode the matching read
    /// cache is cleared too; file bytes become unreachable orphans and are
    /// overwritten by later appends.
    pub fn reset(&self, table: Table) -> Result<(), StorageError> {
        self.kv.reset(table)?;
        match (&self.backend, table) {
            (Backend::FlatFile { ds_files, .. }, Table::DsBlocks) => ds_files.cache().clear(),
            (Backend::FlatFile { tx_files, .. }, Table::TxBlocks) => tx_files.cache().clear(),
            _ => {}
        }
        info!("Table {} reset", table.name());
        Ok(())
    }
}

fn parse_block_num_key(key: &[u8], kind: &str) -> Option<u64> {
    match <[u8; 8]>::try_from(key) {
        Ok(bytes) => Some(u64::from_be_bytes(bytes)),
        Err(_) => {
            warn!("Skipping {} entry with {}-byte key", kind, key.len());
            None
        }
    }
}
