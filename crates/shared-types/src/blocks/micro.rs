//! Micro block: header plus the hashes of its transactions.

use serde::{Deserialize, Serialize};

use crate::blocks::BlockBase;
use crate::cosig::CoSignatures;
use crate::errors::ChainError;
use crate::headers::MicroBlockHeader;
use crate::primitives::{BlockHash, TxnHash};

/// A micro block.
///
/// Invariant: `header.num_txs` equals `tran_hashes.len()`. [`new`](Self::new)
/// rejects violations, and the codec re-checks on both encode and decode, so
/// a count mismatch can never round-trip silently.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MicroBlock {
    pub header: MicroBlockHeader,
    pub tran_hashes: Vec<TxnHash>,
    pub base: BlockBase,
}

impl MicroBlock {
    pub fn new(
        header: MicroBlockHeader,
        tran_hashes: Vec<TxnHash>,
        base: BlockBase,
    ) -> Result<Self, ChainError> {
        if header.num_txs as usize != tran_hashes.len() {
            return Err(ChainError::TxnCountMismatch {
                declared: header.num_txs,
                actual: tran_hashes.len(),
            });
        }
        Ok(Self {
            header,
            tran_hashes,
            base,
        })
    }

    pub fn block_hash(&self) -> BlockHash {
        self.base.block_hash
    }

    pub fn finalize(&mut self, cosigs: CoSignatures) -> Result<(), ChainError> {
        self.base.finalize(cosigs)
    }
}
