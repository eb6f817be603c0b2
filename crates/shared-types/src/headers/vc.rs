//! View change block header, recorded when consensus replaces its leader.

use serde::{Deserialize, Serialize};

use crate::headers::BlockHeaderBase;
use crate::primitives::{Peer, PubKey};

/// Header of a view change block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VcBlockHeader {
    pub base: BlockHeaderBase,
    /// DS epoch in which the view change happened.
    pub vc_ds_epoch_no: u64,
    /// Tx epoch in which the view change happened.
    pub vc_epoch_no: u64,
    /// Consensus state that triggered the change.
    pub vc_state: u8,
    /// Network location of the proposed replacement leader.
    pub candidate_leader_addr: Peer,
    pub candidate_leader_pub_key: PubKey,
    /// How many change attempts this epoch, counting this one.
    pub vc_counter: u32,
    /// Leaders voted out, oldest first.
    pub faulty_leaders: Vec<(PubKey, Peer)>,
}
