//! # Software Version Info
//!
//! Version descriptors carried inside DS block headers so the network can
//! coordinate rolling upgrades. Opaque to the ledger beyond round-tripping.

use serde::{Deserialize, Serialize};

/// Version of one component (node or VM).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VersionInfo {
    pub major: u32,
    pub minor: u32,
    pub fix: u32,
    /// DS epoch at which this version becomes mandatory.
    pub upgrade_ds_epoch: u64,
    /// Short commit identifier of the build.
    pub commit: u32,
}

impl VersionInfo {
    pub fn new(major: u32, minor: u32, fix: u32, upgrade_ds_epoch: u64, commit: u32) -> Self {
        Self {
            major,
            minor,
            fix,
            upgrade_ds_epoch,
            commit,
        }
    }
}

/// Versions of the node software and the VM, as announced in a DS block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SoftwareInfo {
    pub node: VersionInfo,
    pub vm: VersionInfo,
}
