//! Diagnostic snapshot conversions.

use prost::Message;
use shared_types::{DiagnosticCoinbase, DiagnosticShardData};

use crate::convert::{
    array_from_wire, committee_from_wire, committee_to_wire, pubkey_from_wire, u128_from_wire,
    u128_to_wire,
};
use crate::error::CodecError;
use crate::wire;

pub fn encode_diagnostic_shards(data: &DiagnosticShardData) -> Result<Vec<u8>, CodecError> {
    let wire = wire::ProtoDiagnosticShards {
        shards: data
            .shards
            .iter()
            .map(|shard| wire::ProtoShard {
                nodes: committee_to_wire(shard),
            })
            .collect(),
        ds_committee: committee_to_wire(&data.ds_committee),
    };
    Ok(wire.encode_to_vec())
}

pub fn decode_diagnostic_shards(bytes: &[u8]) -> Result<DiagnosticShardData, CodecError> {
    let p = wire::ProtoDiagnosticShards::decode(bytes)?;
    let mut shards = Vec::with_capacity(p.shards.len());
    for shard in &p.shards {
        shards.push(committee_from_wire(&shard.nodes)?);
    }
    Ok(DiagnosticShardData {
        shards,
        ds_committee: committee_from_wire(&p.ds_committee)?,
    })
}

pub fn encode_diagnostic_coinbase(data: &DiagnosticCoinbase) -> Result<Vec<u8>, CodecError> {
    let wire = wire::ProtoDiagnosticCoinbase {
        node_count: data.node_count,
        sig_count: data.sig_count,
        lookup_count: data.lookup_count,
        total_reward: u128_to_wire(data.total_reward),
        base_reward: u128_to_wire(data.base_reward),
        base_reward_each: u128_to_wire(data.base_reward_each),
        lookup_reward: u128_to_wire(data.lookup_reward),
        lookup_reward_each: u128_to_wire(data.lookup_reward_each),
        node_reward: u128_to_wire(data.node_reward),
        reward_each: u128_to_wire(data.reward_each),
        lucky_draw_winner_key: data.lucky_draw_winner_key.as_bytes().to_vec(),
        lucky_draw_winner_addr: data.lucky_draw_winner_addr.to_vec(),
    };
    Ok(wire.encode_to_vec())
}

pub fn decode_diagnostic_coinbase(bytes: &[u8]) -> Result<DiagnosticCoinbase, CodecError> {
    let p = wire::ProtoDiagnosticCoinbase::decode(bytes)?;
    Ok(DiagnosticCoinbase {
        node_count: p.node_count,
        sig_count: p.sig_count,
        lookup_count: p.lookup_count,
        total_reward: u128_from_wire(&p.total_reward)?,
        base_reward: u128_from_wire(&p.base_reward)?,
        base_reward_each: u128_from_wire(&p.base_reward_each)?,
        lookup_reward: u128_from_wire(&p.lookup_reward)?,
        lookup_reward_each: u128_from_wire(&p.lookup_reward_each)?,
        node_reward: u128_from_wire(&p.node_reward)?,
        reward_each: u128_from_wire(&p.reward_each)?,
        lucky_draw_winner_key: pubkey_from_wire(&p.lucky_draw_winner_key)?,
        lucky_draw_winner_addr: array_from_wire(&p.lucky_draw_winner_addr)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{Peer, PubKey};
    use std::net::{IpAddr, Ipv4Addr};

    fn node(seed: u8, port: u32) -> (PubKey, Peer) {
        (
            PubKey::new([seed; 33]),
            Peer::new(IpAddr::V4(Ipv4Addr::new(10, 0, seed, 1)), port),
        )
    }

    #[test]
    fn test_shard_snapshot_round_trip() {
        let data = DiagnosticShardData {
            shards: vec![
                vec![node(1, 100), node(2, 101)],
                vec![node(3, 102)],
                Vec::new(),
            ],
            ds_committee: vec![node(9, 200)],
        };
        let decoded = decode_diagnostic_shards(&encode_diagnostic_shards(&data).unwrap()).unwrap();
        assert_eq!(decoded, data);
        assert_eq!(decoded.node_count(), 4);
    }

    #[test]
    fn test_empty_topology_round_trip() {
        let data = DiagnosticShardData::default();
        let decoded = decode_diagnostic_shards(&encode_diagnostic_shards(&data).unwrap()).unwrap();
        assert!(decoded.shards.is_empty());
        assert!(decoded.ds_committee.is_empty());
    }

    #[test]
    fn test_coinbase_round_trip() {
        let data = DiagnosticCoinbase {
            node_count: 2400,
            sig_count: 1601,
            lookup_count: 5,
            total_reward: 275_000_000_000_000,
            base_reward: 68_750_000_000_000,
            base_reward_each: 28_645_833_333,
            lookup_reward: 13_750_000_000_000,
            lookup_reward_each: 2_750_000_000_000,
            node_reward: 192_500_000_000_000,
            reward_each: 120_237_351_655,
            lucky_draw_winner_key: PubKey::new([0x0C; 33]),
            lucky_draw_winner_addr: [0x0D; 20],
        };
        let decoded =
            decode_diagnostic_coinbase(&encode_diagnostic_coinbase(&data).unwrap()).unwrap();
        assert_eq!(decoded, data);
    }
}
