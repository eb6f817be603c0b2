//! # Canonical Header Hashes
//!
//! A block's hash is the SHA-256 of its header's canonical bytes, computed
//! exactly once at construction. The DS header hashes its concrete subset
//! only, so the hash survives evolution of the header's mutable tail; the
//! other kinds hash the full header.

use sha2::{Digest, Sha256};
use shared_types::{DsBlockHeader, Hash, MicroBlockHeader, TxBlockHeader, VcBlockHeader};

use crate::convert::{
    encode_ds_block_header_concrete, encode_micro_block_header, encode_tx_block_header,
    encode_vc_block_header,
};

pub fn ds_block_header_hash(header: &DsBlockHeader) -> Hash {
    sha256(&encode_ds_block_header_concrete(header))
}

pub fn micro_block_header_hash(header: &MicroBlockHeader) -> Hash {
    sha256(&encode_micro_block_header(header))
}

pub fn tx_block_header_hash(header: &TxBlockHeader) -> Hash {
    sha256(&encode_tx_block_header(header))
}

pub fn vc_block_header_hash(header: &VcBlockHeader) -> Hash {
    sha256(&encode_vc_block_header(header))
}

fn sha256(bytes: &[u8]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hasher.finalize().into()
}
