//! Diagnostic history: topology and coinbase snapshots per DS epoch, kept
//! in a bounded window so the tables cannot grow without limit.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use ax_ledger_codec::{
    decode_diagnostic_coinbase, decode_diagnostic_shards, encode_diagnostic_coinbase,
    encode_diagnostic_shards,
};
use shared_types::{DiagnosticCoinbase, DiagnosticShardData};

use crate::error::StorageError;
use crate::kv::Table;
use crate::storage::BlockStorage;

/// Diagnostic entries retained per kind. Writing entry N+1 prunes the
/// oldest DS epoch beyond this window.
pub const MAX_DIAGNOSTIC_ENTRIES: usize = 125;

impl BlockStorage {
    pub fn put_diagnostic_shards(
        &self,
        ds_epoch: u64,
        data: &DiagnosticShardData,
    ) -> Result<(), StorageError> {
        let encoded = encode_diagnostic_shards(data)?;
        self.kv
            .put(Table::DiagnosticShards, &ds_epoch.to_be_bytes(), &encoded)?;
        self.prune_diagnostics(Table::DiagnosticShards)?;
        debug!("Shard topology for DS epoch {} stored", ds_epoch);
        Ok(())
    }

    pub fn get_diagnostic_shards(
        &self,
        ds_epoch: u64,
    ) -> Result<Option<DiagnosticShardData>, StorageError> {
        let Some(bytes) = self
            .kv
            .get(Table::DiagnosticShards, &ds_epoch.to_be_bytes())?
        else {
            return Ok(None);
        };
        match decode_diagnostic_shards(&bytes) {
            Ok(data) => Ok(Some(data)),
            Err(e) => {
                warn!("Shard topology for DS epoch {} undecodable: {}", ds_epoch, e);
                Ok(None)
            }
        }
    }

    /// Every retained topology snapshot, keyed by DS epoch. Undecodable
    /// entries are skipped with a warning.
    pub fn get_all_diagnostic_shards(
        &self,
    ) -> Result<BTreeMap<u64, DiagnosticShardData>, StorageError> {
        let mut out = BTreeMap::new();
        for (key, value) in self.kv.iterate(Table::DiagnosticShards)? {
            let Ok(key_bytes) = <[u8; 8]>::try_from(key.as_slice()) else {
                warn!("Skipping topology entry with {}-byte key", key.len());
                continue;
            };
            let ds_epoch = u64::from_be_bytes(key_bytes);
            match decode_diagnostic_shards(&value) {
                Ok(data) => {
                    out.insert(ds_epoch, data);
                }
                Err(e) => warn!("Skipping topology for DS epoch {}: {}", ds_epoch, e),
            }
        }
        Ok(out)
    }

    pub fn diagnostic_shards_count(&self) -> Result<usize, StorageError> {
        Ok(self.kv.iterate(Table::DiagnosticShards)?.len())
    }

    pub fn put_diagnostic_coinbase(
        &self,
        ds_epoch: u64,
        data: &DiagnosticCoinbase,
    ) -> Result<(), StorageError> {
        let encoded = encode_diagnostic_coinbase(data)?;
        self.kv
            .put(Table::DiagnosticCoinbase, &ds_epoch.to_be_bytes(), &encoded)?;
        self.prune_diagnostics(Table::DiagnosticCoinbase)?;
        debug!("Coinbase breakdown for DS epoch {} stored", ds_epoch);
        Ok(())
    }

    pub fn get_diagnostic_coinbase(
        &self,
        ds_epoch: u64,
    ) -> Result<Option<DiagnosticCoinbase>, StorageError> {
        let Some(bytes) = self
            .kv
            .get(Table::DiagnosticCoinbase, &ds_epoch.to_be_bytes())?
        else {
            return Ok(None);
        };
        match decode_diagnostic_coinbase(&bytes) {
            Ok(data) => Ok(Some(data)),
            Err(e) => {
                warn!(
                    "Coinbase breakdown for DS epoch {} undecodable: {}",
                    ds_epoch, e
                );
                Ok(None)
            }
        }
    }

    pub fn get_all_diagnostic_coinbase(
        &self,
    ) -> Result<BTreeMap<u64, DiagnosticCoinbase>, StorageError> {
        let mut out = BTreeMap::new();
        for (key, value) in self.kv.iterate(Table::DiagnosticCoinbase)? {
            let Ok(key_bytes) = <[u8; 8]>::try_from(key.as_slice()) else {
                warn!("Skipping coinbase entry with {}-byte key", key.len());
                continue;
            };
            let ds_epoch = u64::from_be_bytes(key_bytes);
            match decode_diagnostic_coinbase(&value) {
                Ok(data) => {
                    out.insert(ds_epoch, data);
                }
                Err(e) => warn!("Skipping coinbase for DS epoch {}: {}", ds_epoch, e),
            }
        }
        Ok(out)
    }

    pub fn diagnostic_coinbase_count(&self) -> Result<usize, StorageError> {
        Ok(self.kv.iterate(Table::DiagnosticCoinbase)?.len())
    }

    /// Delete the oldest entries until the table is back inside the window.
    /// Keys are big-endian DS epochs, so the scan's first entries are the
    /// oldest.
    fn prune_diagnostics(&self, table: Table) -> Result<(), StorageError> {
        let entries = self.kv.iterate(table)?;
        if entries.len() <= MAX_DIAGNOSTIC_ENTRIES {
            return Ok(());
        }
        let excess = entries.len() - MAX_DIAGNOSTIC_ENTRIES;
        for (key, _) in entries.into_iter().take(excess) {
            self.kv.delete(table, &key)?;
        }
        debug!("Pruned {} old entries from {}", excess, table.name());
        Ok(())
    }
}
