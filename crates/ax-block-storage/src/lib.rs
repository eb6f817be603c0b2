//! # Block Storage Crate
//!
//! The durable home of the chain. One [`BlockStorage`] handle per data
//! directory owns every persisted table: the four block kinds, transaction
//! bodies, chain metadata, diagnostic history and the external seed key
//! whitelist.
//!
//! ## Backends
//!
//! Block bytes for the DS and Tx chains live in one of two backends, chosen
//! once at open and recorded on disk:
//!
//! - **sorted-map** (default): everything in the key-value engine, numeric
//!   keys big-endian so lexicographic order is numeric order,
//! - **flat-file** (legacy): compressed append-only files plus an engine-side
//!   position index, fronted by a small per-kind read cache.
//!
//! Micro blocks, VC blocks, bodies, metadata and diagnostics are engine-only
//! in both modes.
//!
//! ## Read-path discipline
//!
//! Engine failures are errors; a missing block is `Ok(None)`; an unreadable
//! block (bad checksum, failed decompression, undecodable bytes) is logged
//! and reported as `Ok(None)`. Resynchronization from peers is the recovery
//! path for unreadable data, never a process abort.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod flatfile;
pub mod kv;
pub mod meta;
pub mod storage;

pub use config::{StorageConfig, StorageMode};
pub use diagnostics::MAX_DIAGNOSTIC_ENTRIES;
pub use error::StorageError;
pub use kv::{BatchOp, KvStore, Table};
pub use meta::{BlockFileInfo, FileTip, MetaKey};
pub use storage::BlockStorage;
