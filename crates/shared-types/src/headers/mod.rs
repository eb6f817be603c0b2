//! # Block Headers
//!
//! Header types for the four block kinds the ledger persists. Every header
//! embeds [`BlockHeaderBase`]; the canonical hash of a header is computed by
//! the codec crate at block construction and lives in the block's base.

mod base;
mod ds;
mod micro;
mod tx;
mod vc;

pub use base::BlockHeaderBase;
pub use ds::{DsBlockHashSet, DsBlockHeader, GovernanceVotes};
pub use micro::{MicroBlockHashSet, MicroBlockHeader};
pub use tx::{TxBlockHashSet, TxBlockHeader};
pub use vc::VcBlockHeader;
