//! # Diagnostic Snapshots
//!
//! Operator-facing records written once per DS epoch: the network topology
//! (shard composition plus DS committee) and the coinbase reward breakdown.
//! History is bounded; the storage layer prunes the oldest entries.

use serde::{Deserialize, Serialize};

use crate::primitives::{Address, Peer, PubKey};

/// Members of one committee, in consensus order.
pub type Committee = Vec<(PubKey, Peer)>;

/// Network topology at the start of a DS epoch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiagnosticShardData {
    /// Every shard's membership, indexed by shard id.
    pub shards: Vec<Committee>,
    pub ds_committee: Committee,
}

impl DiagnosticShardData {
    pub fn node_count(&self) -> usize {
        self.shards.iter().map(Vec::len).sum::<usize>() + self.ds_committee.len()
    }
}

/// Coinbase reward breakdown for one DS epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiagnosticCoinbase {
    /// Nodes eligible for a reward share.
    pub node_count: u32,
    /// Co-signatures counted toward rewards.
    pub sig_count: u32,
    /// Lookup nodes rewarded this epoch.
    pub lookup_count: u32,
    pub total_reward: u128,
    pub base_reward: u128,
    pub base_reward_each: u128,
    pub lookup_reward: u128,
    pub lookup_reward_each: u128,
    pub node_reward: u128,
    pub reward_each: u128,
    /// Winner of the per-epoch lucky draw.
    pub lucky_draw_winner_key: PubKey,
    pub lucky_draw_winner_addr: Address,
}
