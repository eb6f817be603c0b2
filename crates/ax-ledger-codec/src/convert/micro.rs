//! Micro block conversions.

use prost::Message;
use shared_types::{ChainError, MicroBlock, MicroBlockHashSet, MicroBlockHeader, TxnHash};

use crate::convert::{
    array_from_wire, array_from_wire_strict, block_base_from_wire, block_base_to_wire,
    header_base_from_wire, header_base_to_wire, pubkey_from_wire, u128_from_wire, u128_to_wire,
};
use crate::error::CodecError;
use crate::wire;

/// Encode a micro block. Fails if the header's declared transaction count
/// disagrees with the body, so a malformed block can never reach the wire.
pub fn encode_micro_block(block: &MicroBlock) -> Result<Vec<u8>, CodecError> {
    if block.header.num_txs as usize != block.tran_hashes.len() {
        return Err(ChainError::TxnCountMismatch {
            declared: block.header.num_txs,
            actual: block.tran_hashes.len(),
        }
        .into());
    }
    Ok(micro_block_to_wire(block).encode_to_vec())
}

pub fn decode_micro_block(bytes: &[u8]) -> Result<MicroBlock, CodecError> {
    micro_block_from_wire(wire::ProtoMicroBlock::decode(bytes)?)
}

pub fn encode_micro_block_header(header: &MicroBlockHeader) -> Vec<u8> {
    micro_header_to_wire(header).encode_to_vec()
}

pub fn decode_micro_block_header(bytes: &[u8]) -> Result<MicroBlockHeader, CodecError> {
    micro_header_from_wire(wire::ProtoMicroBlockHeader::decode(bytes)?)
}

fn micro_block_to_wire(block: &MicroBlock) -> wire::ProtoMicroBlock {
    wire::ProtoMicroBlock {
        header: Some(micro_header_to_wire(&block.header)),
        tran_hashes: block.tran_hashes.iter().map(|h| h.to_vec()).collect(),
        base: Some(block_base_to_wire(&block.base)),
    }
}

fn micro_block_from_wire(p: wire::ProtoMicroBlock) -> Result<MicroBlock, CodecError> {
    let header = micro_header_from_wire(p.header.unwrap_or_default())?;
    let mut tran_hashes: Vec<TxnHash> = Vec::with_capacity(p.tran_hashes.len());
    for hash in &p.tran_hashes {
        tran_hashes.push(array_from_wire_strict(hash)?);
    }
    let base = block_base_from_wire(p.base.unwrap_or_default())?;
    // The declared-count invariant is enforced by the constructor.
    Ok(MicroBlock::new(header, tran_hashes, base)?)
}

fn micro_header_to_wire(h: &MicroBlockHeader) -> wire::ProtoMicroBlockHeader {
    wire::ProtoMicroBlockHeader {
        base: Some(header_base_to_wire(&h.base)),
        shard_id: h.shard_id,
        gas_limit: h.gas_limit,
        gas_used: h.gas_used,
        rewards: u128_to_wire(h.rewards),
        epoch_num: h.epoch_num,
        hashset: Some(wire::ProtoMicroBlockHashSet {
            tx_root_hash: h.hashset.tx_root_hash.to_vec(),
            state_delta_hash: h.hashset.state_delta_hash.to_vec(),
            tran_receipt_hash: h.hashset.tran_receipt_hash.to_vec(),
        }),
        num_txs: h.num_txs,
        miner_pub_key: h.miner_pub_key.as_bytes().to_vec(),
        ds_block_num: h.ds_block_num,
    }
}

fn micro_header_from_wire(p: wire::ProtoMicroBlockHeader) -> Result<MicroBlockHeader, CodecError> {
    let hashset = p.hashset.unwrap_or_default();
    Ok(MicroBlockHeader {
        base: header_base_from_wire(p.base.unwrap_or_default())?,
        shard_id: p.shard_id,
        gas_limit: p.gas_limit,
        gas_used: p.gas_used,
        rewards: u128_from_wire(&p.rewards)?,
        epoch_num: p.epoch_num,
        hashset: MicroBlockHashSet {
            tx_root_hash: array_from_wire(&hashset.tx_root_hash)?,
            state_delta_hash: array_from_wire(&hashset.state_delta_hash)?,
            tran_receipt_hash: array_from_wire(&hashset.tran_receipt_hash)?,
        },
        num_txs: p.num_txs,
        miner_pub_key: pubkey_from_wire(&p.miner_pub_key)?,
        ds_block_num: p.ds_block_num,
    })
}
