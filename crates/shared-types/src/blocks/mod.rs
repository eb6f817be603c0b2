//! # Blocks
//!
//! The four persisted block kinds. Each pairs its header with a
//! [`BlockBase`] holding the canonical block hash, the proposal timestamp
//! and, once consensus concludes, the co-signatures.

mod base;
mod ds;
mod micro;
mod tx;
mod vc;

pub use base::BlockBase;
pub use ds::DsBlock;
pub use micro::MicroBlock;
pub use tx::{MicroBlockInfo, TxBlock};
pub use vc::VcBlock;
