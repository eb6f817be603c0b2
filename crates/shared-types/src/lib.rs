//! # Shared Types Crate
//!
//! Chain primitives and the block data model for the Axiom-Chain ledger.
//! Everything the canonical codec serializes and the storage layer persists
//! is defined here.
//!
//! ## Clusters
//!
//! - **Primitives**: `Hash`, `PubKey`, `Signature`, `Address`, `Peer`
//! - **Headers**: `DsBlockHeader`, `TxBlockHeader`, `MicroBlockHeader`, `VcBlockHeader`
//! - **Blocks**: `DsBlock`, `TxBlock`, `MicroBlock`, `VcBlock` over a shared `BlockBase`
//! - **Diagnostics**: per-DS-epoch committee and coinbase snapshots
//!
//! ## Design Principles
//!
//! - **Immutable value objects**: a block is constructed once (mined or
//!   decoded) and never mutated in place; the only post-construction step is
//!   the one-shot [`BlockBase::finalize`] that attaches co-signatures.
//! - **Deterministic iteration**: every map that crosses the wire is a
//!   `BTreeMap`, so identical logical content always walks in the same order.

pub mod blocks;
pub mod cosig;
pub mod diagnostics;
pub mod errors;
pub mod headers;
pub mod primitives;
pub mod swinfo;

pub use blocks::*;
pub use cosig::CoSignatures;
pub use diagnostics::*;
pub use errors::ChainError;
pub use headers::*;
pub use primitives::*;
pub use swinfo::{SoftwareInfo, VersionInfo};
