//! View change block conversions.

use prost::Message;
use shared_types::{VcBlock, VcBlockHeader};

use crate::convert::{
    block_base_from_wire, block_base_to_wire, committee_from_wire, committee_to_wire,
    header_base_from_wire, header_base_to_wire, peer_from_wire, peer_to_wire, pubkey_from_wire,
};
use crate::error::CodecError;
use crate::wire;

pub fn encode_vc_block(block: &VcBlock) -> Result<Vec<u8>, CodecError> {
    Ok(vc_block_to_wire(block).encode_to_vec())
}

pub fn decode_vc_block(bytes: &[u8]) -> Result<VcBlock, CodecError> {
    vc_block_from_wire(wire::ProtoVcBlock::decode(bytes)?)
}

pub fn encode_vc_block_header(header: &VcBlockHeader) -> Vec<u8> {
    vc_header_to_wire(header).encode_to_vec()
}

pub fn decode_vc_block_header(bytes: &[u8]) -> Result<VcBlockHeader, CodecError> {
    vc_header_from_wire(wire::ProtoVcBlockHeader::decode(bytes)?)
}

fn vc_block_to_wire(block: &VcBlock) -> wire::ProtoVcBlock {
    wire::ProtoVcBlock {
        header: Some(vc_header_to_wire(&block.header)),
        base: Some(block_base_to_wire(&block.base)),
    }
}

fn vc_block_from_wire(p: wire::ProtoVcBlock) -> Result<VcBlock, CodecError> {
    Ok(VcBlock::new(
        vc_header_from_wire(p.header.unwrap_or_default())?,
        block_base_from_wire(p.base.unwrap_or_default())?,
    ))
}

fn vc_header_to_wire(h: &VcBlockHeader) -> wire::ProtoVcBlockHeader {
    wire::ProtoVcBlockHeader {
        base: Some(header_base_to_wire(&h.base)),
        vc_ds_epoch_no: h.vc_ds_epoch_no,
        vc_epoch_no: h.vc_epoch_no,
        vc_state: u32::from(h.vc_state),
        candidate_leader_addr: peer_to_wire(&h.candidate_leader_addr),
        candidate_leader_pub_key: h.candidate_leader_pub_key.as_bytes().to_vec(),
        vc_counter: h.vc_counter,
        faulty_leaders: committee_to_wire(&h.faulty_leaders),
    }
}

fn vc_header_from_wire(p: wire::ProtoVcBlockHeader) -> Result<VcBlockHeader, CodecError> {
    Ok(VcBlockHeader {
        base: header_base_from_wire(p.base.unwrap_or_default())?,
        vc_ds_epoch_no: p.vc_ds_epoch_no,
        vc_epoch_no: p.vc_epoch_no,
        vc_state: u8::try_from(p.vc_state)
            .map_err(|_| CodecError::FieldRange { field: "vc_state" })?,
        candidate_leader_addr: peer_from_wire(&p.candidate_leader_addr)?,
        candidate_leader_pub_key: pubkey_from_wire(&p.candidate_leader_pub_key)?,
        vc_counter: p.vc_counter,
        faulty_leaders: committee_from_wire(&p.faulty_leaders)?,
    })
}
