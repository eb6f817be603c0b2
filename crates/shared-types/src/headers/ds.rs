//! DS (directory service) block header.
//!
//! The richest header of the four: besides difficulty and gas parameters it
//! carries the PoW winners joining the committee, the keys leaving it, and
//! the tallied governance votes for the epoch.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};

use crate::headers::BlockHeaderBase;
use crate::primitives::{Hash, Peer, PubKey, RESERVED_FIELD_SIZE};
use crate::swinfo::SoftwareInfo;

/// Auxiliary hashes of a DS block header.
#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DsBlockHashSet {
    /// Hash of the sharding structure announced for the epoch.
    pub sharding_hash: Hash,
    /// Opaque reserved area, round-tripped untouched.
    #[serde_as(as = "Bytes")]
    pub reserved: [u8; RESERVED_FIELD_SIZE],
}

impl Default for DsBlockHashSet {
    fn default() -> Self {
        Self {
            sharding_hash: [0u8; 32],
            reserved: [0u8; RESERVED_FIELD_SIZE],
        }
    }
}

/// Vote tallies for one governance proposal, split by voting population.
///
/// Keys are vote values, values are how many members cast that vote.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GovernanceVotes {
    pub committee_votes: BTreeMap<u32, u32>,
    pub shard_votes: BTreeMap<u32, u32>,
}

/// Header of a DS block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DsBlockHeader {
    pub base: BlockHeaderBase,
    /// PoW difficulty for DS committee candidacy.
    pub ds_difficulty: u8,
    /// PoW difficulty for shard membership.
    pub difficulty: u8,
    pub leader_pub_key: PubKey,
    /// DS block number (one per DS epoch).
    pub block_num: u64,
    /// Tx epoch at which this DS block was produced.
    pub epoch_num: u64,
    pub gas_price: u128,
    pub sw_info: SoftwareInfo,
    /// PoW winners joining the committee, keyed by public key.
    pub pow_winners: BTreeMap<PubKey, Peer>,
    /// Members expelled from the committee this epoch.
    pub removed_pub_keys: Vec<PubKey>,
    pub hashset: DsBlockHashSet,
    /// Governance vote tallies keyed by proposal id.
    pub governance: BTreeMap<u32, GovernanceVotes>,
}
