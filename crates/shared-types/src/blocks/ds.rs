//! DS block: header plus base, no body.

use serde::{Deserialize, Serialize};

use crate::blocks::BlockBase;
use crate::cosig::CoSignatures;
use crate::errors::ChainError;
use crate::headers::DsBlockHeader;
use crate::primitives::BlockHash;

/// A DS block. Carries no body; the header is the payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DsBlock {
    pub header: DsBlockHeader,
    pub base: BlockBase,
}

impl DsBlock {
    pub fn new(header: DsBlockHeader, base: BlockBase) -> Self {
        Self { header, base }
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
