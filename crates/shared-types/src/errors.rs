//! # Error Types
//!
//! Structural errors the block types themselves can detect. Codec and
//! storage failures have their own error enums in their crates.

use thiserror::Error;

/// Violations of block-level invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// A finalized block was asked to accept co-signatures again.
    #[error("block is already finalized; co-signatures cannot be replaced")]
    AlreadyFinalized,

    /// A micro block's declared transaction count disagrees with its body.
    #[error("declared {declared} transactions but body carries {actual}")]
    TxnCountMismatch { declared: u32, actual: usize },
}
