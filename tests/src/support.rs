//! Realistic fixtures shared by integration tests and benchmarks.
//!
//! Builders produce blocks the way a live network would: DS blocks carry
//! PoW winners and governance tallies, micro blocks carry transaction hash
//! lists, and finalized variants have both co-signature rounds attached.

use std::collections::BTreeMap;
use std::net::{IpAddr, Ipv4Addr};

use ax_ledger_codec::{
    compose_ds_block, compose_micro_block, compose_tx_block, compose_vc_block,
};
use shared_types::{
    CoSignatures, DsBlock, DsBlockHashSet, DsBlockHeader, GovernanceVotes, MicroBlock,
    MicroBlockHashSet, MicroBlockHeader, MicroBlockInfo, Peer, PubKey, SoftwareInfo, TxBlock,
    TxBlockHashSet, TxBlockHeader, TxnHash, VcBlock, VcBlockHeader, VersionInfo,
};

pub const COMMITTEE_SIZE: usize = 10;

pub fn node_key(seed: u8) -> PubKey {
    let mut bytes = [0u8; 33];
    bytes[0] = 0x02;
    bytes[1] = seed;
    PubKey(bytes)
}

pub fn node_peer(seed: u8) -> Peer {
    Peer::new(
        IpAddr::V4(Ipv4Addr::new(10, 0, 0, seed)),
        33_000 + seed as u32,
    )
}

/// Co-signatures with every committee member participating in round one
/// and all but the first in round two.
pub fn co_signatures() -> CoSignatures {
    let mut bitmap2 = vec![true; COMMITTEE_SIZE];
    bitmap2[0] = false;
    CoSignatures::new(
        [0x5A; 64],
        vec![true; COMMITTEE_SIZE],
        [0xA5; 64],
        bitmap2,
    )
}

pub fn software_info() -> SoftwareInfo {
    SoftwareInfo {
        node: VersionInfo::new(9, 2, 1, 120, 0x00AB_CDEF),
        vm: VersionInfo::new(3, 0, 0, 120, 0x0012_3456),
    }
}

/// A DS block with two PoW winners, one expelled member and a governance
/// tally, finalized.
pub fn ds_block(block_num: u64) -> DsBlock {
    let mut pow_winners = BTreeMap::new();
    pow_winners.insert(node_key(0x11), node_peer(0x11));
    pow_winners.insert(node_key(0x12), node_peer(0x12));

    let mut governance = BTreeMap::new();
    governance.insert(
        14,
        GovernanceVotes {
            committee_votes: BTreeMap::from([(1, 7), (2, 3)]),
            shard_votes: BTreeMap::from([(1, 120)]),
        },
    );

    let header = DsBlockHeader {
        ds_difficulty: 32,
        difficulty: 24,
        leader_pub_key: node_key(0x01),
        block_num,
        epoch_num: block_num * 100,
        gas_price: 2_000_000_000,
        sw_info: software_info(),
        pow_winners,
        removed_pub_keys: vec![node_key(0x0F)],
        hashset: DsBlockHashSet {
            sharding_hash: [0xD5; 32],
            ..Default::default()
        },
        governance,
        ..Default::default()
    };

    let mut block = compose_ds_block(header, 1_690_000_000_000_000 + block_num);
    block
        .finalize(co_signatures())
        .expect("fresh block accepts signatures");
    block
}

/// A tx block folding two micro block infos, finalized.
pub fn tx_block(block_num: u64) -> TxBlock {
    let header = TxBlockHeader {
        gas_limit: 90_000,
        gas_used: 72_411,
        rewards: 275_000_000_000,
        block_num,
        hashset: TxBlockHashSet {
            state_root_hash: [0x51; 32],
            state_delta_hash: [0x5D; 32],
            mb_info_hash: [0x3B; 32],
        },
        num_txs: 420,
        miner_pub_key: node_key(0x01),
        ds_block_num: block_num / 100,
        ..Default::default()
    };
    let mb_infos = vec![
        MicroBlockInfo {
            mb_hash: [0xB0; 32],
            txn_root_hash: [0x70; 32],
            shard_id: 0,
        },
        MicroBlockInfo {
            mb_hash: [0xB1; 32],
            txn_root_hash: [0x71; 32],
            shard_id: 1,
        },
    ];

    let mut block = compose_tx_block(header, mb_infos, 1_690_000_000_100_000 + block_num);
    block
        .finalize(co_signatures())
        .expect("fresh block accepts signatures");
    block
}

pub fn txn_hashes(count: u32) -> Vec<TxnHash> {
    (0..count)
        .map(|i| {
            let mut hash = [0u8; 32];
            hash[..4].copy_from_slice(&i.to_be_bytes());
            hash[31] = 0x7C;
            hash
        })
        .collect()
}

/// A micro block from shard 1 carrying `count` transaction hashes.
pub fn micro_block(epoch_num: u64, count: u32) -> MicroBlock {
    let header = MicroBlockHeader {
        shard_id: 1,
        gas_limit: 30_000,
        gas_used: 18_020,
        rewards: 90_000_000,
        epoch_num,
        hashset: MicroBlockHashSet {
            tx_root_hash: [0x7A; 32],
            state_delta_hash: [0x5D; 32],
            tran_receipt_hash: [0x8C; 32],
        },
        num_txs: count,
        miner_pub_key: node_key(0x21),
        ds_block_num: epoch_num / 100,
        ..Default::default()
    };
    compose_micro_block(header, txn_hashes(count), 1_690_000_000_200_000)
        .expect("fixture counts agree")
}

/// A VC block recording the second leader change of an epoch.
pub fn vc_block(epoch_num: u64) -> VcBlock {
    let header = VcBlockHeader {
        vc_ds_epoch_no: epoch_num / 100,
        vc_epoch_no: epoch_num,
        vc_state: 2,
        candidate_leader_addr: node_peer(0x31),
        candidate_leader_pub_key: node_key(0x31),
        vc_counter: 2,
        faulty_leaders: vec![(node_key(0x01), node_peer(0x01))],
        ..Default::default()
    };
    compose_vc_block(header, 1_690_000_000_300_000)
}
