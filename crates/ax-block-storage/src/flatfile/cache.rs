//! Hot-block cache over decoded (uncompressed) block bytes.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};

use lru::LruCache;
use parking_lot::RwLock;

/// Fixed-capacity LRU of recently touched block bytes, keyed by block
/// number. Both reads and writes feed it, so a block read back right after
/// a put never touches the disk.
pub struct BlockByteCache {
    entries: RwLock<LruCache<u64, Vec<u8>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl BlockByteCache {
    /// A zero `capacity` is clamped to one entry; config validation
    /// rejects it before any cache is built.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: RwLock::new(LruCache::new(capacity)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Look up a block and mark it most recently used on a hit.
    pub fn lookup(&self, block_num: u64) -> Option<Vec<u8>> {
        let found = self.entries.read().peek(&block_num).cloned();
        match found {
            Some(bytes) => {
                self.entries.write().promote(&block_num);
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(bytes)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Insert (or refresh) a block, evicting the least recently used entry
    /// once the capacity is reached.
    pub fn insert(&self, block_num: u64, bytes: Vec<u8>) {
        self.entries.write().put(block_num, bytes);
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}
