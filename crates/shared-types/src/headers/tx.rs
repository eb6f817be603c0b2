//! Transaction (final) block header, one per tx epoch.

use serde::{Deserialize, Serialize};

use crate::headers::BlockHeaderBase;
use crate::primitives::{Hash, PubKey, StateHash};

/// Auxiliary hashes of a tx block header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TxBlockHashSet {
    /// State trie root after applying the epoch.
    pub state_root_hash: StateHash,
    /// Hash of the combined state delta.
    pub state_delta_hash: StateHash,
    /// Hash over the included micro block information.
    pub mb_info_hash: Hash,
}

/// Header of a tx block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TxBlockHeader {
    pub base: BlockHeaderBase,
    pub gas_limit: u64,
    pub gas_used: u64,
    pub rewards: u128,
    /// Tx block number, the chain's main height.
    pub block_num: u64,
    pub hashset: TxBlockHashSet,
    /// Total transactions across all folded micro blocks.
    pub num_txs: u32,
    pub miner_pub_key: PubKey,
    /// DS block the producing committee was seated under.
    pub ds_block_num: u64,
}
