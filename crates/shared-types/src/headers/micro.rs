//! Micro block header, produced per shard per tx epoch.

use serde::{Deserialize, Serialize};

use crate::headers::BlockHeaderBase;
use crate::primitives::{PubKey, StateHash, TxnHash};

/// Auxiliary hashes of a micro block header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MicroBlockHashSet {
    /// Root of the transaction trie for this micro block.
    pub tx_root_hash: TxnHash,
    /// Hash of the state delta the block's transactions produced.
    pub state_delta_hash: StateHash,
    /// Root of the transaction receipts.
    pub tran_receipt_hash: TxnHash,
}

/// Header of a micro block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MicroBlockHeader {
    pub base: BlockHeaderBase,
    /// Shard that produced the block.
    pub shard_id: u32,
    pub gas_limit: u64,
    pub gas_used: u64,
    pub rewards: u128,
    pub epoch_num: u64,
    pub hashset: MicroBlockHashSet,
    /// Declared transaction count; must equal the body's hash list length.
    pub num_txs: u32,
    pub miner_pub_key: PubKey,
    /// DS block the producing committee was seated under.
    pub ds_block_num: u64,
}
