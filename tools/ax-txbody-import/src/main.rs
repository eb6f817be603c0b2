//! Import archived transaction bodies into a ledger data directory.
//!
//! Archives are flat files of `[32-byte tx hash][u32 BE length][body]`
//! records. Each body is re-hashed on the way in; a record whose hash does
//! not match its body is skipped with a warning instead of poisoning the
//! store. A truncated file keeps its intact prefix.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use sha2::{Digest, Sha256};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ax_block_storage::{BlockStorage, StorageConfig, StorageMode, Table};
use shared_types::TxnHash;

const EXIT_OK: i32 = 0;
const EXIT_USAGE: i32 = -1;
const EXIT_STORE: i32 = -2;
const EXIT_WARNINGS: i32 = -3;

const HASH_WIDTH: usize = 32;
const LEN_WIDTH: usize = 4;

#[derive(Parser, Debug)]
#[command(name = "ax-txbody-import")]
#[command(about = "Import archived transaction bodies into a ledger data directory")]
struct Args {
    /// Ledger data directory.
    #[arg(short, long, default_value = "./data/ledger")]
    data_dir: PathBuf,

    /// Backend the directory was initialized under.
    #[arg(long, value_enum, default_value = "sorted-map")]
    mode: ModeArg,

    /// Drop the transaction-body table before importing.
    #[arg(long)]
    wipe: bool,

    /// Archive files to import, in order.
    #[arg(required = true)]
    archives: Vec<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    SortedMap,
    FlatFile,
}

impl From<ModeArg> for StorageMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::SortedMap => StorageMode::SortedMap,
            ModeArg::FlatFile => StorageMode::FlatFile,
        }
    }
}

/// One archive record: the stored hash and the body it claims to hash to.
#[derive(Debug, PartialEq, Eq)]
struct ArchiveRecord {
    hash: TxnHash,
    body: Vec<u8>,
}

/// Result of scanning one archive file.
#[derive(Debug)]
struct ArchiveScan {
    records: Vec<ArchiveRecord>,
    /// Set when the file ends mid-record; `records` is the intact prefix.
    truncation: Option<String>,
}

/// Split an archive into records without validating hashes.
fn scan_archive(bytes: &[u8]) -> ArchiveScan {
    let mut records = Vec::new();
    let mut offset = 0usize;
    while offset < bytes.len() {
        let header_end = offset + HASH_WIDTH + LEN_WIDTH;
        if header_end > bytes.len() {
            return ArchiveScan {
                records,
                truncation: Some(format!("truncated record header at offset {offset}")),
            };
        }
        let mut hash: TxnHash = [0u8; HASH_WIDTH];
        hash.copy_from_slice(&bytes[offset..offset + HASH_WIDTH]);
        let mut len_bytes = [0u8; LEN_WIDTH];
        len_bytes.copy_from_slice(&bytes[offset + HASH_WIDTH..header_end]);
        let body_len = u32::from_be_bytes(len_bytes) as usize;

        let body_end = header_end + body_len;
        if body_end > bytes.len() {
            return ArchiveScan {
                records,
                truncation: Some(format!(
                    "truncated {body_len}-byte body at offset {header_end}"
                )),
            };
        }
        records.push(ArchiveRecord {
            hash,
            body: bytes[header_end..body_end].to_vec(),
        });
        offset = body_end;
    }
    ArchiveScan {
        records,
        truncation: None,
    }
}

fn body_hash(body: &[u8]) -> TxnHash {
    let digest = Sha256::digest(body);
    let mut hash = [0u8; HASH_WIDTH];
    hash.copy_from_slice(&digest);
    hash
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_OK,
                _ => EXIT_USAGE,
            };
            let _ = e.print();
            process::exit(code);
        }
    };

    process::exit(run(args));
}

fn run(args: Args) -> i32 {
    let config = StorageConfig {
        data_dir: args.data_dir,
        mode: args.mode.into(),
        ..StorageConfig::default()
    };
    let store = match BlockStorage::open(&config) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Cannot open store: {e}");
            return EXIT_STORE;
        }
    };

    if args.wipe {
        if let Err(e) = store.reset(Table::TxBodies) {
            eprintln!("Cannot wipe transaction bodies: {e}");
            return EXIT_STORE;
        }
    }

    let mut imported = 0u64;
    let mut skipped = 0u64;
    for path in &args.archives {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("Cannot read {}: {}", path.display(), e);
                return EXIT_STORE;
            }
        };

        let scan = scan_archive(&bytes);
        if let Some(reason) = &scan.truncation {
            warn!("Archive {} is damaged: {}", path.display(), reason);
            skipped += 1;
        }
        for record in scan.records {
            if body_hash(&record.body) != record.hash {
                warn!(
                    "Hash mismatch for {} in {}, skipping",
                    hex::encode(record.hash),
                    path.display()
                );
                skipped += 1;
                continue;
            }
            if let Err(e) = store.put_tx_body(&record.hash, &record.body) {
                eprintln!("Write failed: {e}");
                return EXIT_STORE;
            }
            imported += 1;
        }
    }

    info!("Imported {} transaction bodies, {} skipped", imported, skipped);
    if skipped > 0 {
        EXIT_WARNINGS
    } else {
        EXIT_OK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_bytes(hash: TxnHash, body: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&hash);
        out.extend_from_slice(&(body.len() as u32).to_be_bytes());
        out.extend_from_slice(body);
        out
    }

    #[test]
    fn test_scan_splits_records() {
        let mut archive = record_bytes([1u8; 32], b"first body");
        archive.extend(record_bytes([2u8; 32], b""));
        archive.extend(record_bytes([3u8; 32], b"third"));

        let scan = scan_archive(&archive);
        assert!(scan.truncation.is_none());
        assert_eq!(scan.records.len(), 3);
        assert_eq!(scan.records[0].body, b"first body");
        assert_eq!(scan.records[1].body, b"");
        assert_eq!(scan.records[2].hash, [3u8; 32]);
    }

    #[test]
    fn test_scan_empty_archive() {
        let scan = scan_archive(&[]);
        assert!(scan.records.is_empty());
        assert!(scan.truncation.is_none());
    }

    #[test]
    fn test_scan_keeps_prefix_before_truncated_header() {
        let mut archive = record_bytes([1u8; 32], b"whole");
        archive.extend_from_slice(&[0u8; 10]); // partial hash

        let scan = scan_archive(&archive);
        assert_eq!(scan.records.len(), 1);
        assert!(scan.truncation.is_some());
    }

    #[test]
    fn test_scan_rejects_body_past_end() {
        let mut archive = Vec::new();
        archive.extend_from_slice(&[7u8; 32]);
        archive.extend_from_slice(&100u32.to_be_bytes());
        archive.extend_from_slice(b"only ten b"); // claims 100, has 10

        let scan = scan_archive(&archive);
        assert!(scan.records.is_empty());
        assert!(scan.truncation.is_some());
    }

    #[test]
    fn test_body_hash_matches_sha256() {
        let body = b"payload";
        let expected: [u8; 32] = Sha256::digest(body).into();
        assert_eq!(body_hash(body), expected);
    }
}
