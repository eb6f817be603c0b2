//! # Block Composition
//!
//! Constructors used at proposal time: compute the canonical header hash,
//! stamp the timestamp, and return an unsigned block awaiting
//! [`finalize`](shared_types::BlockBase::finalize).

use shared_types::{
    BlockBase, DsBlock, DsBlockHeader, MicroBlock, MicroBlockHeader, MicroBlockInfo, TxBlock,
    TxBlockHeader, TxnHash, VcBlock, VcBlockHeader,
};

use crate::error::CodecError;
use crate::hashing::{
    ds_block_header_hash, micro_block_header_hash, tx_block_header_hash, vc_block_header_hash,
};

pub fn compose_ds_block(header: DsBlockHeader, timestamp_micros: u64) -> DsBlock {
    let hash = ds_block_header_hash(&header);
    DsBlock::new(header, BlockBase::new(hash, timestamp_micros))
}

/// Fails when the header's declared transaction count disagrees with the
/// hash list; the mismatch is caught before the block ever exists.
pub fn compose_micro_block(
    header: MicroBlockHeader,
    tran_hashes: Vec<TxnHash>,
    timestamp_micros: u64,
) -> Result<MicroBlock, CodecError> {
    let hash = micro_block_header_hash(&header);
    Ok(MicroBlock::new(
        header,
        tran_hashes,
        BlockBase::new(hash, timestamp_micros),
    )?)
}

pub fn compose_tx_block(
    header: TxBlockHeader,
    mb_infos: Vec<MicroBlockInfo>,
    timestamp_micros: u64,
) -> TxBlock {
    let hash = tx_block_header_hash(&header);
    TxBlock::new(header, mb_infos, BlockBase::new(hash, timestamp_micros))
}

pub fn compose_vc_block(header: VcBlockHeader, timestamp_micros: u64) -> VcBlock {
    let hash = vc_block_header_hash(&header);
    VcBlock::new(header, BlockBase::new(hash, timestamp_micros))
}
