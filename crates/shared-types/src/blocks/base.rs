//! Fields common to every block.

use serde::{Deserialize, Serialize};

use crate::cosig::CoSignatures;
use crate::errors::ChainError;
use crate::primitives::BlockHash;

/// Hash, timestamp and (after finalization) co-signatures of a block.
///
/// `block_hash` is computed once from the header's canonical bytes when the
/// block is constructed; it is carried, never recomputed, afterwards.
/// Co-signatures are attached exactly once via [`finalize`](Self::finalize);
/// a block that already carries them cannot be re-signed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlockBase {
    pub block_hash: BlockHash,
    pub timestamp_micros: u64,
    cosigs: Option<CoSignatures>,
}

impl BlockBase {
    /// A freshly proposed, unsigned base.
    pub fn new(block_hash: BlockHash, timestamp_micros: u64) -> Self {
        Self {
            block_hash,
            timestamp_micros,
            cosigs: None,
        }
    }

    /// A base reconstructed from the wire, signatures included when present.
    pub fn from_parts(
        block_hash: BlockHash,
        timestamp_micros: u64,
        cosigs: Option<CoSignatures>,
    ) -> Self {
        Self {
            block_hash,
            timestamp_micros,
            cosigs,
        }
    }

    pub fn co_signatures(&self) -> Option<&CoSignatures> {
        self.cosigs.as_ref()
    }

    pub fn is_finalized(&self) -> bool {
        self.cosigs.is_some()
    }

    /// Attach co-signatures. Fails if the block is already finalized.
    pub fn finalize(&mut self, cosigs: CoSignatures) -> Result<(), ChainError> {
        if self.cosigs.is_some() {
            return Err(ChainError::AlreadyFinalized);
        }
        self.cosigs = Some(cosigs);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finalize_is_one_shot() {
        let mut base = BlockBase::new([7u8; 32], 1_000_000);
        assert!(!base.is_finalized());

        base.finalize(CoSignatures::empty(4)).unwrap();
        assert!(base.is_finalized());
        assert_eq!(base.co_signatures().unwrap().bitmap1.len(), 4);

        let err = base.finalize(CoSignatures::empty(4)).unwrap_err();
        assert!(matches!(err, ChainError::AlreadyFinalized));
    }
}
