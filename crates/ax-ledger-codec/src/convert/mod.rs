//! # Wire Conversions
//!
//! Encode/decode entry points for every persisted kind, plus the shared
//! sub-codecs (header base, block base, co-signatures, peers, amounts).
//!
//! Decode discipline, applied uniformly:
//! - an absent optional sub-message falls back to its default (historical
//!   data was written this way),
//! - a present fixed-size field must have exactly its declared width,
//! - every element of a repeated field is checked strictly.

mod diagnostics;
mod ds;
mod micro;
mod tx;
mod vc;

pub use diagnostics::{
    decode_diagnostic_coinbase, decode_diagnostic_shards, encode_diagnostic_coinbase,
    encode_diagnostic_shards,
};
pub use ds::{
    decode_ds_block, decode_ds_block_header, encode_ds_block, encode_ds_block_header,
    encode_ds_block_header_concrete,
};
pub use micro::{
    decode_micro_block, decode_micro_block_header, encode_micro_block, encode_micro_block_header,
};
pub use tx::{decode_tx_block, decode_tx_block_header, encode_tx_block, encode_tx_block_header};
pub use vc::{decode_vc_block, decode_vc_block_header, encode_vc_block, encode_vc_block_header};

use std::net::{IpAddr, Ipv6Addr};

use shared_types::{
    BlockBase, BlockHeaderBase, CoSignatures, Committee, Peer, PubKey, SoftwareInfo, VersionInfo,
    PEER_WIRE_SIZE, PUB_KEY_SIZE, SIGNATURE_SIZE,
};

use crate::bytecodec::{copy_with_size_check, get_number, set_number};
use crate::error::CodecError;
use crate::wire;

// ===== FIXED-SIZE FIELDS =====

/// A fixed-size field from a singular bytes slot: empty means "not written"
/// and yields the default; anything else must match exactly.
pub(crate) fn array_from_wire<const N: usize>(bytes: &[u8]) -> Result<[u8; N], CodecError> {
    if bytes.is_empty() {
        return Ok([0u8; N]);
    }
    array_from_wire_strict(bytes)
}

/// A fixed-size field from a repeated slot: elements are always written in
/// full, so empty is as malformed as any other wrong width.
pub(crate) fn array_from_wire_strict<const N: usize>(bytes: &[u8]) -> Result<[u8; N], CodecError> {
    let mut out = [0u8; N];
    copy_with_size_check(bytes, &mut out)?;
    Ok(out)
}

pub(crate) fn pubkey_from_wire(bytes: &[u8]) -> Result<PubKey, CodecError> {
    array_from_wire::<PUB_KEY_SIZE>(bytes).map(PubKey::new)
}

pub(crate) fn pubkey_from_wire_strict(bytes: &[u8]) -> Result<PubKey, CodecError> {
    array_from_wire_strict::<PUB_KEY_SIZE>(bytes).map(PubKey::new)
}

// ===== AMOUNTS =====

/// Amounts always travel as 16 big-endian bytes, zero included, so the
/// encoding of a block never depends on the magnitude of its values.
pub(crate) fn u128_to_wire(value: u128) -> Vec<u8> {
    let mut out = Vec::with_capacity(16);
    set_number(&mut out, 0, value, 16);
    out
}

pub(crate) fn u128_from_wire(bytes: &[u8]) -> Result<u128, CodecError> {
    if bytes.is_empty() {
        return Ok(0);
    }
    if bytes.len() != 16 {
        return Err(CodecError::SizeMismatch {
            expected: 16,
            actual: bytes.len(),
        });
    }
    get_number(bytes, 0, 16)
}

// ===== PEERS =====

pub(crate) fn peer_to_wire(peer: &Peer) -> Vec<u8> {
    let ip = match peer.ip {
        IpAddr::V4(v4) => v4.to_ipv6_mapped(),
        IpAddr::V6(v6) => v6,
    };
    let mut out = Vec::with_capacity(PEER_WIRE_SIZE);
    set_number(&mut out, 0, u128::from_be_bytes(ip.octets()), 16);
    set_number(&mut out, 16, peer.listen_port, 4);
    out
}

pub(crate) fn peer_from_wire(bytes: &[u8]) -> Result<Peer, CodecError> {
    if bytes.is_empty() {
        return Ok(Peer::default());
    }
    if bytes.len() != PEER_WIRE_SIZE {
        return Err(CodecError::SizeMismatch {
            expected: PEER_WIRE_SIZE,
            actual: bytes.len(),
        });
    }
    let ip_num: u128 = get_number(bytes, 0, 16)?;
    let listen_port: u32 = get_number(bytes, 16, 4)?;
    let v6 = Ipv6Addr::from(ip_num.to_be_bytes());
    let ip = match v6.to_ipv4_mapped() {
        Some(v4) => IpAddr::V4(v4),
        None => IpAddr::V6(v6),
    };
    Ok(Peer::new(ip, listen_port))
}

// ===== NODE ENTRIES =====

pub(crate) fn node_entry_to_wire(key: &PubKey, peer: &Peer) -> wire::ProtoNodeEntry {
    wire::ProtoNodeEntry {
        pub_key: key.as_bytes().to_vec(),
        peer: peer_to_wire(peer),
    }
}

pub(crate) fn node_entry_from_wire(
    entry: &wire::ProtoNodeEntry,
) -> Result<(PubKey, Peer), CodecError> {
    Ok((
        pubkey_from_wire(&entry.pub_key)?,
        peer_from_wire(&entry.peer)?,
    ))
}

pub(crate) fn committee_to_wire(committee: &Committee) -> Vec<wire::ProtoNodeEntry> {
    committee
        .iter()
        .map(|(key, peer)| node_entry_to_wire(key, peer))
        .collect()
}

pub(crate) fn committee_from_wire(
    entries: &[wire::ProtoNodeEntry],
) -> Result<Committee, CodecError> {
    entries.iter().map(node_entry_from_wire).collect()
}

// ===== HEADER BASE =====

pub(crate) fn header_base_to_wire(base: &BlockHeaderBase) -> wire::ProtoBlockHeaderBase {
    wire::ProtoBlockHeaderBase {
        version: base.version,
        committee_hash: base.committee_hash.to_vec(),
        prev_hash: base.prev_hash.to_vec(),
    }
}

pub(crate) fn header_base_from_wire(
    p: wire::ProtoBlockHeaderBase,
) -> Result<BlockHeaderBase, CodecError> {
    Ok(BlockHeaderBase {
        version: p.version,
        committee_hash: array_from_wire(&p.committee_hash)?,
        prev_hash: array_from_wire(&p.prev_hash)?,
    })
}

// ===== CO-SIGNATURES AND BLOCK BASE =====

pub(crate) fn cosigs_to_wire(cosigs: &CoSignatures) -> wire::ProtoCoSignatures {
    wire::ProtoCoSignatures {
        sig1: cosigs.sig1.to_vec(),
        bitmap1: cosigs.bitmap1.clone(),
        sig2: cosigs.sig2.to_vec(),
        bitmap2: cosigs.bitmap2.clone(),
    }
}

pub(crate) fn cosigs_from_wire(p: wire::ProtoCoSignatures) -> Result<CoSignatures, CodecError> {
    // Bitmaps keep exactly the length the wire carried.
    Ok(CoSignatures {
        sig1: array_from_wire::<SIGNATURE_SIZE>(&p.sig1)?,
        bitmap1: p.bitmap1,
        sig2: array_from_wire::<SIGNATURE_SIZE>(&p.sig2)?,
        bitmap2: p.bitmap2,
    })
}

pub(crate) fn block_base_to_wire(base: &BlockBase) -> wire::ProtoBlockBase {
    wire::ProtoBlockBase {
        block_hash: base.block_hash.to_vec(),
        cosigs: base.co_signatures().map(cosigs_to_wire),
        timestamp: base.timestamp_micros,
    }
}

pub(crate) fn block_base_from_wire(p: wire::ProtoBlockBase) -> Result<BlockBase, CodecError> {
    let cosigs = p.cosigs.map(cosigs_from_wire).transpose()?;
    Ok(BlockBase::from_parts(
        array_from_wire(&p.block_hash)?,
        p.timestamp,
        cosigs,
    ))
}

// ===== SOFTWARE INFO =====

pub(crate) fn swinfo_to_wire(info: &SoftwareInfo) -> wire::ProtoSoftwareInfo {
    wire::ProtoSoftwareInfo {
        node: Some(version_to_wire(&info.node)),
        vm: Some(version_to_wire(&info.vm)),
    }
}

pub(crate) fn swinfo_from_wire(p: wire::ProtoSoftwareInfo) -> SoftwareInfo {
    SoftwareInfo {
        node: version_from_wire(p.node.unwrap_or_default()),
        vm: version_from_wire(p.vm.unwrap_or_default()),
    }
}

fn version_to_wire(v: &VersionInfo) -> wire::ProtoVersionInfo {
    wire::ProtoVersionInfo {
        major: v.major,
        minor: v.minor,
        fix: v.fix,
        upgrade_ds_epoch: v.upgrade_ds_epoch,
        commit: v.commit,
    }
}

fn version_from_wire(p: wire::ProtoVersionInfo) -> VersionInfo {
    VersionInfo {
        major: p.major,
        minor: p.minor,
        fix: p.fix,
        upgrade_ds_epoch: p.upgrade_ds_epoch,
        commit: p.commit,
    }
}
