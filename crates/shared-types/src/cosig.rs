//! # Co-Signatures
//!
//! The two-round aggregate signature attached to every finalized block:
//! round one signs the block content, round two signs round one's outcome.
//! Each bitmap records which committee members contributed to the aggregate.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};

use crate::primitives::{Signature, SIGNATURE_SIZE};

/// Aggregate co-signatures plus participation bitmaps for both rounds.
///
/// Bitmaps are exact-length: the codec neither pads nor truncates them, so
/// `bitmap1.len()` is always the committee size the signers saw.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoSignatures {
    #[serde_as(as = "Bytes")]
    pub sig1: Signature,
    pub bitmap1: Vec<bool>,
    #[serde_as(as = "Bytes")]
    pub sig2: Signature,
    pub bitmap2: Vec<bool>,
}

impl CoSignatures {
    pub fn new(sig1: Signature, bitmap1: Vec<bool>, sig2: Signature, bitmap2: Vec<bool>) -> Self {
        Self {
            sig1,
            bitmap1,
            sig2,
            bitmap2,
        }
    }

    /// Placeholder co-signatures sized for a committee of `committee_size`.
    pub fn empty(committee_size: usize) -> Self {
        Self {
            sig1: [0u8; SIGNATURE_SIZE],
            bitmap1: vec![false; committee_size],
            sig2: [0u8; SIGNATURE_SIZE],
            bitmap2: vec![false; committee_size],
        }
    }
}

impl Default for CoSignatures {
    fn default() -> Self {
        Self::empty(0)
    }
}
