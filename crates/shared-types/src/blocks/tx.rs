//! Tx block: header plus one info record per folded micro block.

use serde::{Deserialize, Serialize};

use crate::blocks::BlockBase;
use crate::cosig::CoSignatures;
use crate::errors::ChainError;
use crate::headers::TxBlockHeader;
use crate::primitives::{BlockHash, TxnHash};

/// What a tx block records about one folded micro block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MicroBlockInfo {
    pub mb_hash: BlockHash,
    pub txn_root_hash: TxnHash,
    pub shard_id: u32,
}

/// A tx block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TxBlock {
    pub header: TxBlockHeader,
    pub mb_infos: Vec<MicroBlockInfo>,
    pub base: BlockBase,
}

impl TxBlock {
    pub fn new(header: TxBlockHeader, mb_infos: Vec<MicroBlockInfo>, base: BlockBase) -> Self {
        Self {
            header,
            mb_infos,
            base,
        }
    }

    pub fn block_hash(&self) -> BlockHash {
        self.base.block_hash
    }

    pub fn block_num(&self) -> u64 {
        self.header.block_num
    }

    pub fn finalize(&mut self, cosigs: CoSignatures) -> Result<(), ChainError> {
        self.base.finalize(cosigs)
    }
}
