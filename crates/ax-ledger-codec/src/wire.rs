//! # Wire Schema
//!
//! The tagged message layout of everything this crate encodes. Tags are
//! frozen: renumbering or retyping a field is a chain split. New fields may
//! only be appended with fresh tags; old decoders skip what they do not know.
//!
//! Conventions:
//! - amounts (`u128`) travel as 16-byte big-endian `bytes`,
//! - peers travel as 20-byte blobs (16-byte v6-mapped IP + 4-byte port),
//! - maps travel as `repeated` entries emitted in ascending key order.

/// Shared prefix of every header.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoBlockHeaderBase {
    #[prost(uint32, tag = "1")]
    pub version: u32,
    #[prost(bytes = "vec", tag = "2")]
    pub committee_hash: Vec<u8>,
    #[prost(bytes = "vec", tag = "3")]
    pub prev_hash: Vec<u8>,
}

/// Two-round aggregate signature with participation bitmaps.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoCoSignatures {
    #[prost(bytes = "vec", tag = "1")]
    pub sig1: Vec<u8>,
    #[prost(bool, repeated, tag = "2")]
    pub bitmap1: Vec<bool>,
    #[prost(bytes = "vec", tag = "3")]
    pub sig2: Vec<u8>,
    #[prost(bool, repeated, tag = "4")]
    pub bitmap2: Vec<bool>,
}

/// Shared tail of every block: hash, signatures, timestamp.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoBlockBase {
    #[prost(bytes = "vec", tag = "1")]
    pub block_hash: Vec<u8>,
    #[prost(message, optional, tag = "2")]
    pub cosigs: Option<ProtoCoSignatures>,
    #[prost(uint64, tag = "3")]
    pub timestamp: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoVersionInfo {
    #[prost(uint32, tag = "1")]
    pub major: u32,
    #[prost(uint32, tag = "2")]
    pub minor: u32,
    #[prost(uint32, tag = "3")]
    pub fix: u32,
    #[prost(uint64, tag = "4")]
    pub upgrade_ds_epoch: u64,
    #[prost(uint32, tag = "5")]
    pub commit: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoSoftwareInfo {
    #[prost(message, optional, tag = "1")]
    pub node: Option<ProtoVersionInfo>,
    #[prost(message, optional, tag = "2")]
    pub vm: Option<ProtoVersionInfo>,
}

/// One (public key, peer) pair. Used for PoW winners, faulty leaders and
/// committee rosters alike.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoNodeEntry {
    #[prost(bytes = "vec", tag = "1")]
    pub pub_key: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub peer: Vec<u8>,
}

// ===== DS BLOCK =====

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoDsBlockHashSet {
    #[prost(bytes = "vec", tag = "1")]
    pub sharding_hash: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub reserved: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoGovVote {
    #[prost(uint32, tag = "1")]
    pub value: u32,
    #[prost(uint32, tag = "2")]
    pub count: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoGovProposal {
    #[prost(uint32, tag = "1")]
    pub proposal_id: u32,
    #[prost(message, repeated, tag = "2")]
    pub committee_votes: Vec<ProtoGovVote>,
    #[prost(message, repeated, tag = "3")]
    pub shard_votes: Vec<ProtoGovVote>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoDsBlockHeader {
    #[prost(message, optional, tag = "1")]
    pub base: Option<ProtoBlockHeaderBase>,
    #[prost(uint32, tag = "2")]
    pub ds_difficulty: u32,
    #[prost(uint32, tag = "3")]
    pub difficulty: u32,
    #[prost(bytes = "vec", tag = "4")]
    pub leader_pub_key: Vec<u8>,
    #[prost(uint64, tag = "5")]
    pub block_num: u64,
    #[prost(uint64, tag = "6")]
    pub epoch_num: u64,
    #[prost(bytes = "vec", tag = "7")]
    pub gas_price: Vec<u8>,
    #[prost(message, optional, tag = "8")]
    pub sw_info: Option<ProtoSoftwareInfo>,
    #[prost(message, repeated, tag = "9")]
    pub pow_winners: Vec<ProtoNodeEntry>,
    #[prost(message, optional, tag = "10")]
    pub hashset: Option<ProtoDsBlockHashSet>,
    #[prost(message, repeated, tag = "11")]
    pub governance: Vec<ProtoGovProposal>,
    #[prost(bytes = "vec", repeated, tag = "12")]
    pub removed_pub_keys: Vec<Vec<u8>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoDsBlock {
    #[prost(message, optional, tag = "1")]
    pub header: Option<ProtoDsBlockHeader>,
    #[prost(message, optional, tag = "2")]
    pub base: Option<ProtoBlockBase>,
}

// ===== MICRO BLOCK =====

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoMicroBlockHashSet {
    #[prost(bytes = "vec", tag = "1")]
    pub tx_root_hash: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub state_delta_hash: Vec<u8>,
    #[prost(bytes = "vec", tag = "3")]
    pub tran_receipt_hash: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoMicroBlockHeader {
    #[prost(message, optional, tag = "1")]
    pub base: Option<ProtoBlockHeaderBase>,
    #[prost(uint32, tag = "2")]
    pub shard_id: u32,
    #[prost(uint64, tag = "3")]
    pub gas_limit: u64,
    #[prost(uint64, tag = "4")]
    pub gas_used: u64,
    #[prost(bytes = "vec", tag = "5")]
    pub rewards: Vec<u8>,
    #[prost(uint64, tag = "6")]
    pub epoch_num: u64,
    #[prost(message, optional, tag = "7")]
    pub hashset: Option<ProtoMicroBlockHashSet>,
    #[prost(uint32, tag = "8")]
    pub num_txs: u32,
    #[prost(bytes = "vec", tag = "9")]
    pub miner_pub_key: Vec<u8>,
    #[prost(uint64, tag = "10")]
    pub ds_block_num: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoMicroBlock {
    #[prost(message, optional, tag = "1")]
    pub header: Option<ProtoMicroBlockHeader>,
    #[prost(bytes = "vec", repeated, tag = "2")]
    pub tran_hashes: Vec<Vec<u8>>,
    #[prost(message, optional, tag = "3")]
    pub base: Option<ProtoBlockBase>,
}

// ===== TX BLOCK =====

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoTxBlockHashSet {
    #[prost(bytes = "vec", tag = "1")]
    pub state_root_hash: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub state_delta_hash: Vec<u8>,
    #[prost(bytes = "vec", tag = "3")]
    pub mb_info_hash: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoTxBlockHeader {
    #[prost(message, optional, tag = "1")]
    pub base: Option<ProtoBlockHeaderBase>,
    #[prost(uint64, tag = "2")]
    pub gas_limit: u64,
    #[prost(uint64, tag = "3")]
    pub gas_used: u64,
    #[prost(bytes = "vec", tag = "4")]
    pub rewards: Vec<u8>,
    #[prost(uint64, tag = "5")]
    pub block_num: u64,
    #[prost(message, optional, tag = "6")]
    pub hashset: Option<ProtoTxBlockHashSet>,
    #[prost(uint32, tag = "7")]
    pub num_txs: u32,
    #[prost(bytes = "vec", tag = "8")]
    pub miner_pub_key: Vec<u8>,
    #[prost(uint64, tag = "9")]
    pub ds_block_num: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoMicroBlockInfo {
    #[prost(bytes = "vec", tag = "1")]
    pub mb_hash: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub txn_root_hash: Vec<u8>,
    #[prost(uint32, tag = "3")]
    pub shard_id: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoTxBlock {
    #[prost(message, optional, tag = "1")]
    pub header: Option<ProtoTxBlockHeader>,
    #[prost(message, repeated, tag = "2")]
    pub mb_infos: Vec<ProtoMicroBlockInfo>,
    #[prost(message, optional, tag = "3")]
    pub base: Option<ProtoBlockBase>,
}

// ===== VIEW CHANGE BLOCK =====

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoVcBlockHeader {
    #[prost(message, optional, tag = "1")]
    pub base: Option<ProtoBlockHeaderBase>,
    #[prost(uint64, tag = "2")]
    pub vc_ds_epoch_no: u64,
    #[prost(uint64, tag = "3")]
    pub vc_epoch_no: u64,
    #[prost(uint32, tag = "4")]
    pub vc_state: u32,
    #[prost(bytes = "vec", tag = "5")]
    pub candidate_leader_addr: Vec<u8>,
    #[prost(bytes = "vec", tag = "6")]
    pub candidate_leader_pub_key: Vec<u8>,
    #[prost(uint32, tag = "7")]
    pub vc_counter: u32,
    #[prost(message, repeated, tag = "8")]
    pub faulty_leaders: Vec<ProtoNodeEntry>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoVcBlock {
    #[prost(message, optional, tag = "1")]
    pub header: Option<ProtoVcBlockHeader>,
    #[prost(message, optional, tag = "2")]
    pub base: Option<ProtoBlockBase>,
}

// ===== DIAGNOSTICS =====

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoShard {
    #[prost(message, repeated, tag = "1")]
    pub nodes: Vec<ProtoNodeEntry>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoDiagnosticShards {
    #[prost(message, repeated, tag = "1")]
    pub shards: Vec<ProtoShard>,
    #[prost(message, repeated, tag = "2")]
    pub ds_committee: Vec<ProtoNodeEntry>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoDiagnosticCoinbase {
    #[prost(uint32, tag = "1")]
    pub node_count: u32,
    #[prost(uint32, tag = "2")]
    pub sig_count: u32,
    #[prost(uint32, tag = "3")]
    pub lookup_count: u32,
    #[prost(bytes = "vec", tag = "4")]
    pub total_reward: Vec<u8>,
    #[prost(bytes = "vec", tag = "5")]
    pub base_reward: Vec<u8>,
    #[prost(bytes = "vec", tag = "6")]
    pub base_reward_each: Vec<u8>,
    #[prost(bytes = "vec", tag = "7")]
    pub lookup_reward: Vec<u8>,
    #[prost(bytes = "vec", tag = "8")]
    pub lookup_reward_each: Vec<u8>,
    #[prost(bytes = "vec", tag = "9")]
    pub node_reward: Vec<u8>,
    #[prost(bytes = "vec", tag = "10")]
    pub reward_each: Vec<u8>,
    #[prost(bytes = "vec", tag = "11")]
    pub lucky_draw_winner_key: Vec<u8>,
    #[prost(bytes = "vec", tag = "12")]
    pub lucky_draw_winner_addr: Vec<u8>,
}
