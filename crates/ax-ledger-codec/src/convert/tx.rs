//! Tx block conversions.

use prost::Message;
use shared_types::{MicroBlockInfo, TxBlock, TxBlockHashSet, TxBlockHeader};

use crate::convert::{
    array_from_wire, block_base_from_wire, block_base_to_wire, header_base_from_wire,
    header_base_to_wire, pubkey_from_wire, u128_from_wire, u128_to_wire,
};
use crate::error::CodecError;
use crate::wire;

pub fn encode_tx_block(block: &TxBlock) -> Result<Vec<u8>, CodecError> {
    Ok(tx_block_to_wire(block).encode_to_vec())
}

pub fn decode_tx_block(bytes: &[u8]) -> Result<TxBlock, CodecError> {
    tx_block_from_wire(wire::ProtoTxBlock::decode(bytes)?)
}

pub fn encode_tx_block_header(header: &TxBlockHeader) -> Vec<u8> {
    tx_header_to_wire(header).encode_to_vec()
}

pub fn decode_tx_block_header(bytes: &[u8]) -> Result<TxBlockHeader, CodecError> {
    tx_header_from_wire(wire::ProtoTxBlockHeader::decode(bytes)?)
}

fn tx_block_to_wire(block: &TxBlock) -> wire::ProtoTxBlock {
    wire::ProtoTxBlock {
        header: Some(tx_header_to_wire(&block.header)),
        mb_infos: block
            .mb_infos
            .iter()
            .map(|info| wire::ProtoMicroBlockInfo {
                mb_hash: info.mb_hash.to_vec(),
                txn_root_hash: info.txn_root_hash.to_vec(),
                shard_id: info.shard_id,
            })
            .collect(),
        base: Some(block_base_to_wire(&block.base)),
    }
}

fn tx_block_from_wire(p: wire::ProtoTxBlock) -> Result<TxBlock, CodecError> {
    let mut mb_infos = Vec::with_capacity(p.mb_infos.len());
    for info in &p.mb_infos {
        mb_infos.push(MicroBlockInfo {
            mb_hash: array_from_wire(&info.mb_hash)?,
            txn_root_hash: array_from_wire(&info.txn_root_hash)?,
            shard_id: info.shard_id,
        });
    }
    Ok(TxBlock::new(
        tx_header_from_wire(p.header.unwrap_or_default())?,
        mb_infos,
        block_base_from_wire(p.base.unwrap_or_default())?,
    ))
}

fn tx_header_to_wire(h: &TxBlockHeader) -> wire::ProtoTxBlockHeader {
    wire::ProtoTxBlockHeader {
        base: Some(header_base_to_wire(&h.base)),
        gas_limit: h.gas_limit,
        gas_used: h.gas_used,
        rewards: u128_to_wire(h.rewards),
        block_num: h.block_num,
        hashset: Some(wire::ProtoTxBlockHashSet {
            state_root_hash: h.hashset.state_root_hash.to_vec(),
            state_delta_hash: h.hashset.state_delta_hash.to_vec(),
            mb_info_hash: h.hashset.mb_info_hash.to_vec(),
        }),
        num_txs: h.num_txs,
        miner_pub_key: h.miner_pub_key.as_bytes().to_vec(),
        ds_block_num: h.ds_block_num,
    }
}

fn tx_header_from_wire(p: wire::ProtoTxBlockHeader) -> Result<TxBlockHeader, CodecError> {
    let hashset = p.hashset.unwrap_or_default();
    Ok(TxBlockHeader {
        base: header_base_from_wire(p.base.unwrap_or_default())?,
        gas_limit: p.gas_limit,
        gas_used: p.gas_used,
        rewards: u128_from_wire(&p.rewards)?,
        block_num: p.block_num,
        hashset: TxBlockHashSet {
            state_root_hash: array_from_wire(&hashset.state_root_hash)?,
            state_delta_hash: array_from_wire(&hashset.state_delta_hash)?,
            mb_info_hash: array_from_wire(&hashset.mb_info_hash)?,
        },
        num_txs: p.num_txs,
        miner_pub_key: pubkey_from_wire(&p.miner_pub_key)?,
        ds_block_num: p.ds_block_num,
    })
}
