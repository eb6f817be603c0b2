//! # Chain Primitives
//!
//! Fixed-size byte primitives used throughout the ledger. Keys and
//! signatures are opaque blobs at this layer; nothing here verifies
//! cryptography, it only carries it.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};

// =============================================================================
// SIZES
// =============================================================================

/// Size of a compressed public key in bytes.
pub const PUB_KEY_SIZE: usize = 33;

/// Size of an aggregate signature blob in bytes.
pub const SIGNATURE_SIZE: usize = 64;

/// Size of an account address in bytes.
pub const ADDRESS_SIZE: usize = 20;

/// Size of the opaque reserved area in the DS header hash set.
pub const RESERVED_FIELD_SIZE: usize = 128;

/// Canonical wire width of a [`Peer`]: 16-byte v6-mapped IP + 4-byte port.
pub const PEER_WIRE_SIZE: usize = 20;

// =============================================================================
// HASHES, KEYS, SIGNATURES
// =============================================================================

/// A 32-byte SHA-256 digest.
pub type Hash = [u8; 32];

/// Hash identifying a block.
pub type BlockHash = Hash;

/// Hash identifying a transaction or a transaction-trie root.
pub type TxnHash = Hash;

/// Hash of a state trie root or state delta.
pub type StateHash = Hash;

/// A 64-byte aggregate signature blob.
pub type Signature = [u8; SIGNATURE_SIZE];

/// A 20-byte account address.
pub type Address = [u8; ADDRESS_SIZE];

/// A 33-byte compressed public key.
///
/// Ordering is byte-lexicographic so maps keyed by public key iterate
/// deterministically, which the canonical codec relies on.
#[serde_as]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PubKey(#[serde_as(as = "Bytes")] pub [u8; PUB_KEY_SIZE]);

impl PubKey {
    pub const fn new(bytes: [u8; PUB_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Default for PubKey {
    fn default() -> Self {
        Self([0u8; PUB_KEY_SIZE])
    }
}

impl AsRef<[u8]> for PubKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for PubKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PubKey(")?;
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        write!(f, ")")
    }
}

// =============================================================================
// NETWORK IDENTITY
// =============================================================================

/// A peer's network location.
///
/// The canonical wire form is a [`PEER_WIRE_SIZE`]-byte blob: the IP as a
/// 16-byte v6-mapped big-endian integer followed by a 4-byte port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peer {
    pub ip: IpAddr,
    pub listen_port: u32,
}

impl Peer {
    pub fn new(ip: IpAddr, listen_port: u32) -> Self {
        Self { ip, listen_port }
    }
}

impl Default for Peer {
    fn default() -> Self {
        Self {
            ip: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            listen_port: 0,
        }
    }
}

impl fmt::Display for Peer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.ip, self.listen_port)
    }
}

// =============================================================================
// TIME
// =============================================================================

/// Microseconds since the Unix epoch, the chain's block timestamp unit.
pub fn timestamp_now_micros() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_micros() as u64)
        .unwrap_or(0)
}
