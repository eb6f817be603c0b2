//! View change block: header plus base, no body.

use serde::{Deserialize, Serialize};

use crate::blocks::BlockBase;
use crate::cosig::CoSignatures;
use crate::errors::ChainError;
use crate::headers::VcBlockHeader;
use crate::primitives::BlockHash;

/// A view change block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VcBlock {
    pub header: VcBlockHeader,
    pub base: BlockBase,
}

impl VcBlock {
    pub fn new(header: VcBlockHeader, base: BlockBase) -> Self {
        Self { header, base }
    }

    pub fn block_hash(&self) -> BlockHash {
        self.base.block_hash
    }

    pub fn finalize(&mut self, cosigs: CoSignatures) -> Result<(), ChainError> {
        self.base.finalize(cosigs)
    }
}
