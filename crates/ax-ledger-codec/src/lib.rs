//! # Ledger Codec Crate
//!
//! Canonical serialization for everything the ledger persists or gossips:
//! the four block kinds, bare headers, and diagnostic snapshots.
//!
//! ## Guarantees
//!
//! - **Determinism**: identical logical content encodes to byte-identical
//!   output on every node. Maps are emitted in ascending key order; amounts
//!   and peers cross the wire as fixed-width big-endian blobs.
//! - **Forward tolerance**: unknown trailing fields written by newer software
//!   are skipped, so an old node can still read a new block.
//! - **Fail-closed geometry**: fixed-size fields, declared counts and
//!   participation bitmaps are checked strictly; a decode either yields a
//!   fully populated block or an error, never a partial one.
//! - **Permissive presence**: absent optional sub-messages decode to
//!   defaults, matching how historical chain data was written.
//!
//! ## Layout
//!
//! - [`bytecodec`]: fixed-width big-endian integer primitives
//! - [`wire`]: the tagged wire schema (field tags are frozen)
//! - [`convert`]: per-kind encode/decode entry points
//! - [`hashing`]: canonical header hashes
//! - [`compose`]: block construction (hash computed exactly once)

pub mod bytecodec;
pub mod compose;
pub mod convert;
pub mod error;
pub mod hashing;
pub mod wire;

pub use compose::{compose_ds_block, compose_micro_block, compose_tx_block, compose_vc_block};
pub use convert::{
    decode_diagnostic_coinbase, decode_diagnostic_shards, decode_ds_block, decode_ds_block_header,
    decode_micro_block, decode_micro_block_header, decode_tx_block, decode_tx_block_header,
    decode_vc_block, decode_vc_block_header, encode_diagnostic_coinbase, encode_diagnostic_shards,
    encode_ds_block, encode_ds_block_header, encode_ds_block_header_concrete, encode_micro_block,
    encode_micro_block_header, encode_tx_block, encode_tx_block_header, encode_vc_block,
    encode_vc_block_header,
};
pub use error::CodecError;
pub use hashing::{
    ds_block_header_hash, micro_block_header_hash, tx_block_header_hash, vc_block_header_hash,
};
