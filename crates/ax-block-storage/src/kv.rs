//! # Sorted-Map Engine
//!
//! RocksDB wrapper shared by both storage modes. Every table lives in its
//! own column family so a reset of one block kind never touches the others.
//!
//! ## Tuning
//!
//! - Snappy compression on every column family
//! - Bloom filters (10 bits/key) for point lookups
//! - Shared LRU block cache sized from [`StorageConfig`]

use parking_lot::RwLock;
use rocksdb::{
    BlockBasedOptions, Cache, ColumnFamily, ColumnFamilyDescriptor, DBCompressionType,
    IteratorMode, Options, WriteBatch, WriteOptions, DB,
};

use crate::config::StorageConfig;
use crate::error::StorageError;

// ===== TABLES =====

/// Logical tables of the ledger store. Each maps to one column family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    DsBlocks,
    TxBlocks,
    MicroBlocks,
    VcBlocks,
    TxBodies,
    Metadata,
    DiagnosticShards,
    DiagnosticCoinbase,
    ExtSeedPubKeys,
}

impl Table {
    pub const ALL: [Table; 9] = [
        Table::DsBlocks,
        Table::TxBlocks,
        Table::MicroBlocks,
        Table::VcBlocks,
        Table::TxBodies,
        Table::Metadata,
        Table::DiagnosticShards,
        Table::DiagnosticCoinbase,
        Table::ExtSeedPubKeys,
    ];

    /// Column family name inside RocksDB.
    pub fn name(self) -> &'static str {
        match self {
            Table::DsBlocks => "ds_blocks",
            Table::TxBlocks => "tx_blocks",
            Table::MicroBlocks => "micro_blocks",
            Table::VcBlocks => "vc_blocks",
            Table::TxBodies => "tx_bodies",
            Table::Metadata => "metadata",
            Table::DiagnosticShards => "diag_shards",
            Table::DiagnosticCoinbase => "diag_coinbase",
            Table::ExtSeedPubKeys => "ext_seed_pub_keys",
        }
    }
}

// ===== BATCH OPERATIONS =====

/// One mutation inside an atomic batch.
#[derive(Debug, Clone)]
pub enum BatchOp {
    Put {
        table: Table,
        key: Vec<u8>,
        value: Vec<u8>,
    },
    Delete {
        table: Table,
        key: Vec<u8>,
    },
}

impl BatchOp {
    pub fn put(table: Table, key: Vec<u8>, value: Vec<u8>) -> Self {
        BatchOp::Put { table, key, value }
    }

    pub fn delete(table: Table, key: Vec<u8>) -> Self {
        BatchOp::Delete { table, key }
    }
}

// ===== STORE =====

/// Column-family backed key-value store.
///
/// The write lock is only taken for schema changes (dropping a column
/// family); ordinary reads and writes share the read side.
pub struct KvStore {
    db: RwLock<DB>,
    sync_writes: bool,
}

impl KvStore {
    /// Open (or create) the database under `<data_dir>/db` with one column
    /// family per [`Table`].
    pub fn open(config: &StorageConfig) -> Result<Self, StorageError> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);
        opts.set_write_buffer_size(config.write_buffer_size);
        opts.set_compression_type(DBCompressionType::Snappy);

        let mut block_opts = BlockBasedOptions::default();
        block_opts.set_bloom_filter(10.0, false);
        let cache = Cache::new_lru_cache(config.block_cache_size);
        block_opts.set_block_cache(&cache);
        opts.set_block_based_table_factory(&block_opts);

        let descriptors: Vec<ColumnFamilyDescriptor> = Table::ALL
            .iter()
            .map(|table| ColumnFamilyDescriptor::new(table.name(), Self::cf_options()))
            .collect();

        let db = DB::open_cf_descriptors(&opts, config.data_dir.join("db"), descriptors)
            .map_err(|e| StorageError::Engine(format!("open failed: {e}")))?;

        Ok(Self {
            db: RwLock::new(db),
            sync_writes: config.sync_writes,
        })
    }

    fn cf_options() -> Options {
        let mut cf_opts = Options::default();
        cf_opts.set_compression_type(DBCompressionType::Snappy);
        cf_opts
    }

    fn write_options(&self) -> WriteOptions {
        let mut wo = WriteOptions::default();
        wo.set_sync(self.sync_writes);
        wo
    }

    fn cf<'a>(db: &'a DB, table: Table) -> Result<&'a ColumnFamily, StorageError> {
        db.cf_handle(table.name())
            .ok_or_else(|| StorageError::Engine(format!("missing column family {}", table.name())))
    }

    pub fn put(&self, table: Table, key: &[u8], value: &[u8]) -> Result<(), StorageError> {
        let db = self.db.read();
        let cf = Self::cf(&db, table)?;
        db.put_cf_opt(cf, key, value, &self.write_options())
            .map_err(|e| StorageError::Engine(format!("put into {} failed: {e}", table.name())))
    }

    pub fn get(&self, table: Table, key: &[u8]) -> Result<Option<Vec<u8>>, StorageError> {
        let db = self.db.read();
        let cf = Self::cf(&db, table)?;
        db.get_cf(cf, key)
            .map_err(|e| StorageError::Engine(format!("get from {} failed: {e}", table.name())))
    }

    pub fn delete(&self, table: Table, key: &[u8]) -> Result<(), StorageError> {
        let db = self.db.read();
        let cf = Self::cf(&db, table)?;
        db.delete_cf(cf, key)
            .map_err(|e| StorageError::Engine(format!("delete from {} failed: {e}", table.name())))
    }

    /// Apply all operations atomically. Either every mutation lands or none.
    pub fn write_batch(&self, ops: Vec<BatchOp>) -> Result<(), StorageError> {
        let db = self.db.read();
        let mut batch = WriteBatch::default();
        for op in ops {
            match op {
                BatchOp::Put { table, key, value } => {
                    let cf = Self::cf(&db, table)?;
                    batch.put_cf(cf, key, value);
                }
                BatchOp::Delete { table, key } => {
                    let cf = Self::cf(&db, table)?;
                    batch.delete_cf(cf, key);
                }
            }
        }
        db.write_opt(batch, &self.write_options())
            .map_err(|e| StorageError::Engine(format!("batch write failed: {e}")))
    }

    /// Collect every entry of a table in ascending key order, from a
    /// consistent snapshot.
    pub fn iterate(&self, table: Table) -> Result<Vec<(Vec<u8>, Vec<u8>)>, StorageError> {
        let db = self.db.read();
        let cf = Self::cf(&db, table)?;
        let snapshot = db.snapshot();
        let mut entries = Vec::new();
        for item in snapshot.iterator_cf(cf, IteratorMode::Start) {
            let (key, value) = item.map_err(|e| {
                StorageError::Engine(format!("iterate over {} failed: {e}", table.name()))
            })?;
            entries.push((key.to_vec(), value.to_vec()));
        }
        Ok(entries)
    }

    /// The entry with the highest key, if the table is non-empty.
    pub fn last_entry(&self, table: Table) -> Result<Option<(Vec<u8>, Vec<u8>)>, StorageError> {
        let db = self.db.read();
        let cf = Self::cf(&db, table)?;
        match db.iterator_cf(cf, IteratorMode::End).next() {
            Some(Ok((key, value))) => Ok(Some((key.to_vec(), value.to_vec()))),
            Some(Err(e)) => Err(StorageError::Engine(format!(
                "tail scan of {} failed: {e}",
                table.name()
            ))),
            None => Ok(None),
        }
    }

    /// Drop and recreate a table, discarding all of its entries.
    pub fn reset(&self, table: Table) -> Result<(), StorageError> {
        let mut db = self.db.write();
        db.drop_cf(table.name())
            .map_err(|e| StorageError::Engine(format!("drop of {} failed: {e}", table.name())))?;
        db.create_cf(table.name(), &Self::cf_options())
            .map_err(|e| StorageError::Engine(format!("recreate of {} failed: {e}", table.name())))
    }
}
