//! # Ledger Benchmarks
//!
//! Throughput checks for the two hot paths:
//!
//! | Area | Operation | Expectation |
//! |------|-----------|-------------|
//! | codec | DS block encode/decode | microseconds, allocation-bound |
//! | codec | header hash | one SHA-256 over the concrete fields |
//! | storage | put, both backends | engine/fsync-bound |
//! | storage | get of a hot block | flat-file cache beats the engine |

use std::cell::Cell;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tempfile::TempDir;

use ax_block_storage::{BlockStorage, StorageConfig, StorageMode};
use ax_ledger_codec::{decode_ds_block, ds_block_header_hash, encode_ds_block, encode_tx_block};
use ax_tests::support;

const MODES: [(&str, StorageMode); 2] = [
    ("sorted_map", StorageMode::SortedMap),
    ("flat_file", StorageMode::FlatFile),
];

fn open_store(dir: &TempDir, mode: StorageMode) -> BlockStorage {
    let config = StorageConfig::for_testing(dir.path().to_path_buf(), mode);
    BlockStorage::open(&config).unwrap()
}

// ============================================================================
// Wire codec
// ============================================================================

fn bench_codec(c: &mut Criterion) {
    let ds = support::ds_block(42);
    let tx = support::tx_block(4200);
    let encoded = encode_ds_block(&ds).unwrap();

    let mut group = c.benchmark_group("ledger-codec");
    group.throughput(Throughput::Bytes(encoded.len() as u64));
    group.bench_function("ds_block_encode", |b| {
        b.iter(|| black_box(encode_ds_block(black_box(&ds)).unwrap()))
    });
    group.bench_function("ds_block_decode", |b| {
        b.iter(|| black_box(decode_ds_block(black_box(&encoded)).unwrap()))
    });
    group.bench_function("tx_block_encode", |b| {
        b.iter(|| black_box(encode_tx_block(black_box(&tx)).unwrap()))
    });
    group.bench_function("ds_header_hash", |b| {
        b.iter(|| black_box(ds_block_header_hash(black_box(&ds.header))))
    });
    group.finish();
}

// ============================================================================
// Storage facade
// ============================================================================

fn bench_storage_put(c: &mut Criterion) {
    let mut group = c.benchmark_group("ledger-storage-put");
    for (label, mode) in MODES {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir, mode);
        let block = support::ds_block(1);

        let next = Cell::new(0u64);
        group.bench_function(BenchmarkId::new("ds_block", label), |b| {
            b.iter(|| {
                let num = next.get();
                next.set(num + 1);
                store.put_ds_block(num, &block).unwrap();
            })
        });
    }
    group.finish();
}

fn bench_storage_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("ledger-storage-get");
    for (label, mode) in MODES {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir, mode);
        for num in 0u64..100 {
            store.put_ds_block(num, &support::ds_block(num)).unwrap();
        }

        group.bench_function(BenchmarkId::new("ds_block_hot", label), |b| {
            b.iter(|| black_box(store.get_ds_block(black_box(99)).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_codec, bench_storage_put, bench_storage_get);
criterion_main!(benches);
