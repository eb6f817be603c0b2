//! DS block conversions.

use std::collections::BTreeMap;

use prost::Message;
use shared_types::{DsBlock, DsBlockHashSet, DsBlockHeader, GovernanceVotes};

use crate::convert::{
    array_from_wire, block_base_from_wire, block_base_to_wire, header_base_from_wire,
    header_base_to_wire, node_entry_from_wire, node_entry_to_wire, pubkey_from_wire,
    pubkey_from_wire_strict, swinfo_from_wire, swinfo_to_wire, u128_from_wire, u128_to_wire,
};
use crate::error::CodecError;
use crate::wire;

pub fn encode_ds_block(block: &DsBlock) -> Result<Vec<u8>, CodecError> {
    Ok(ds_block_to_wire(block).encode_to_vec())
}

pub fn decode_ds_block(bytes: &[u8]) -> Result<DsBlock, CodecError> {
    ds_block_from_wire(wire::ProtoDsBlock::decode(bytes)?)
}

pub fn encode_ds_block_header(header: &DsBlockHeader) -> Vec<u8> {
    ds_header_to_wire(header).encode_to_vec()
}

pub fn decode_ds_block_header(bytes: &[u8]) -> Result<DsBlockHeader, CodecError> {
    ds_header_from_wire(wire::ProtoDsBlockHeader::decode(bytes)?)
}

/// Encode only the concrete header vars: base, leader key, block and epoch
/// numbers, software info and hash set. The canonical DS block hash is
/// computed over these bytes, keeping it stable while the remaining fields
/// (difficulties, gas price, winners, removals, governance) evolve.
pub fn encode_ds_block_header_concrete(header: &DsBlockHeader) -> Vec<u8> {
    let wire = wire::ProtoDsBlockHeader {
        base: Some(header_base_to_wire(&header.base)),
        leader_pub_key: header.leader_pub_key.as_bytes().to_vec(),
        block_num: header.block_num,
        epoch_num: header.epoch_num,
        sw_info: Some(swinfo_to_wire(&header.sw_info)),
        hashset: Some(ds_hashset_to_wire(&header.hashset)),
        ..Default::default()
    };
    wire.encode_to_vec()
}

fn ds_block_to_wire(block: &DsBlock) -> wire::ProtoDsBlock {
    wire::ProtoDsBlock {
        header: Some(ds_header_to_wire(&block.header)),
        base: Some(block_base_to_wire(&block.base)),
    }
}

fn ds_block_from_wire(p: wire::ProtoDsBlock) -> Result<DsBlock, CodecError> {
    Ok(DsBlock::new(
        ds_header_from_wire(p.header.unwrap_or_default())?,
        block_base_from_wire(p.base.unwrap_or_default())?,
    ))
}

fn ds_header_to_wire(h: &DsBlockHeader) -> wire::ProtoDsBlockHeader {
    wire::ProtoDsBlockHeader {
        base: Some(header_base_to_wire(&h.base)),
        ds_difficulty: u32::from(h.ds_difficulty),
        difficulty: u32::from(h.difficulty),
        leader_pub_key: h.leader_pub_key.as_bytes().to_vec(),
        block_num: h.block_num,
        epoch_num: h.epoch_num,
        gas_price: u128_to_wire(h.gas_price),
        sw_info: Some(swinfo_to_wire(&h.sw_info)),
        pow_winners: h
            .pow_winners
            .iter()
            .map(|(key, peer)| node_entry_to_wire(key, peer))
            .collect(),
        hashset: Some(ds_hashset_to_wire(&h.hashset)),
        governance: h
            .governance
            .iter()
            .map(|(id, votes)| wire::ProtoGovProposal {
                proposal_id: *id,
                committee_votes: votes_to_wire(&votes.committee_votes),
                shard_votes: votes_to_wire(&votes.shard_votes),
            })
            .collect(),
        removed_pub_keys: h
            .removed_pub_keys
            .iter()
            .map(|key| key.as_bytes().to_vec())
            .collect(),
    }
}

fn ds_header_from_wire(p: wire::ProtoDsBlockHeader) -> Result<DsBlockHeader, CodecError> {
    let mut pow_winners = BTreeMap::new();
    for entry in &p.pow_winners {
        let (key, peer) = node_entry_from_wire(entry)?;
        pow_winners.insert(key, peer);
    }

    let mut governance = BTreeMap::new();
    for proposal in &p.governance {
        governance.insert(
            proposal.proposal_id,
            GovernanceVotes {
                committee_votes: votes_from_wire(&proposal.committee_votes),
                shard_votes: votes_from_wire(&proposal.shard_votes),
            },
        );
    }

    let mut removed_pub_keys = Vec::with_capacity(p.removed_pub_keys.len());
    for key in &p.removed_pub_keys {
        removed_pub_keys.push(pubkey_from_wire_strict(key)?);
    }

    Ok(DsBlockHeader {
        base: header_base_from_wire(p.base.unwrap_or_default())?,
        ds_difficulty: u8::try_from(p.ds_difficulty)
            .map_err(|_| CodecError::FieldRange {
                field: "ds_difficulty",
            })?,
        difficulty: u8::try_from(p.difficulty).map_err(|_| CodecError::FieldRange {
            field: "difficulty",
        })?,
        leader_pub_key: pubkey_from_wire(&p.leader_pub_key)?,
        block_num: p.block_num,
        epoch_num: p.epoch_num,
        gas_price: u128_from_wire(&p.gas_price)?,
        sw_info: swinfo_from_wire(p.sw_info.unwrap_or_default()),
        pow_winners,
        removed_pub_keys,
        hashset: ds_hashset_from_wire(p.hashset.unwrap_or_default())?,
        governance,
    })
}

fn ds_hashset_to_wire(h: &DsBlockHashSet) -> wire::ProtoDsBlockHashSet {
    wire::ProtoDsBlockHashSet {
        sharding_hash: h.sharding_hash.to_vec(),
        reserved: h.reserved.to_vec(),
    }
}

fn ds_hashset_from_wire(p: wire::ProtoDsBlockHashSet) -> Result<DsBlockHashSet, CodecError> {
    Ok(DsBlockHashSet {
        sharding_hash: array_from_wire(&p.sharding_hash)?,
        reserved: array_from_wire(&p.reserved)?,
    })
}

fn votes_to_wire(votes: &BTreeMap<u32, u32>) -> Vec<wire::ProtoGovVote> {
    votes
        .iter()
        .map(|(value, count)| wire::ProtoGovVote {
            value: *value,
            count: *count,
        })
        .collect()
}

fn votes_from_wire(votes: &[wire::ProtoGovVote]) -> BTreeMap<u32, u32> {
    votes.iter().map(|v| (v.value, v.count)).collect()
}
