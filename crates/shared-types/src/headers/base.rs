//! Fields common to every block header.

use serde::{Deserialize, Serialize};

use crate::primitives::Hash;

/// The shared prefix of all four header kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlockHeaderBase {
    /// Header schema version.
    pub version: u32,
    /// Hash of the committee that produced the block.
    pub committee_hash: Hash,
    /// Hash of the preceding block of the same kind.
    pub prev_hash: Hash,
}

impl BlockHeaderBase {
    pub fn new(version: u32, committee_hash: Hash, prev_hash: Hash) -> Self {
        Self {
            version,
            committee_hash,
            prev_hash,
        }
    }
}
