//! # Bounded Diagnostic History
//!
//! Per-DS-epoch topology and coinbase snapshots through the facade:
//! round-tripping realistic committees and holding the retention window.

#[cfg(test)]
mod tests {
    use ax_block_storage::{
        BlockStorage, StorageConfig, StorageMode, MAX_DIAGNOSTIC_ENTRIES,
    };
    use shared_types::{Committee, DiagnosticCoinbase, DiagnosticShardData};
    use tempfile::TempDir;

    use crate::support;

    fn open_store(dir: &TempDir) -> BlockStorage {
        let config =
            StorageConfig::for_testing(dir.path().to_path_buf(), StorageMode::SortedMap);
        BlockStorage::open(&config).unwrap()
    }

    fn topology(shards: usize, nodes_per_shard: usize) -> DiagnosticShardData {
        let committee = |offset: u8| -> Committee {
            (0..nodes_per_shard)
                .map(|i| {
                    let seed = offset + i as u8;
                    (support::node_key(seed), support::node_peer(seed))
                })
                .collect()
        };
        DiagnosticShardData {
            shards: (0..shards).map(|s| committee(0x40 + s as u8 * 0x10)).collect(),
            ds_committee: committee(0x10),
        }
    }

    #[test]
    fn test_topology_snapshot_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        let data = topology(3, 4);
        assert_eq!(data.node_count(), 16);

        store.put_diagnostic_shards(40, &data).unwrap();
        assert_eq!(store.get_diagnostic_shards(40).unwrap(), Some(data));
        assert_eq!(store.get_diagnostic_shards(41).unwrap(), None);
    }

    #[test]
    fn test_coinbase_snapshot_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        let data = DiagnosticCoinbase {
            node_count: 1_800,
            sig_count: 1_300,
            lookup_count: 5,
            total_reward: 263_698_630_136_986_000,
            base_reward: 63_698_630_136_986_000,
            base_reward_each: 35_388_127_853,
            lookup_reward: 10_000_000_000_000_000,
            lookup_reward_each: 2_000_000_000_000_000,
            node_reward: 190_000_000_000_000_000,
            reward_each: 146_153_846_153_846,
            lucky_draw_winner_key: support::node_key(0x77),
            lucky_draw_winner_addr: [0xAD; 20],
        };

        store.put_diagnostic_coinbase(40, &data).unwrap();
        assert_eq!(store.get_diagnostic_coinbase(40).unwrap(), Some(data));
    }

    #[test]
    fn test_history_window_holds_most_recent_epochs() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        let data = topology(1, 2);

        let last_epoch = MAX_DIAGNOSTIC_ENTRIES as u64 + 9;
        for epoch in 0..=last_epoch {
            store.put_diagnostic_shards(epoch, &data).unwrap();
        }

        assert_eq!(
            store.diagnostic_shards_count().unwrap(),
            MAX_DIAGNOSTIC_ENTRIES
        );
        let all = store.get_all_diagnostic_shards().unwrap();
        let oldest_kept = last_epoch - MAX_DIAGNOSTIC_ENTRIES as u64 + 1;
        assert_eq!(all.keys().next(), Some(&oldest_kept));
        assert_eq!(all.keys().next_back(), Some(&last_epoch));
        assert_eq!(store.get_diagnostic_shards(0).unwrap(), None);
    }

    #[test]
    fn test_windows_are_independent_per_kind() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        for epoch in 0..(MAX_DIAGNOSTIC_ENTRIES as u64 + 3) {
            store.put_diagnostic_shards(epoch, &topology(1, 1)).unwrap();
        }
        store
            .put_diagnostic_coinbase(7, &DiagnosticCoinbase::default())
            .unwrap();

        assert_eq!(
            store.diagnostic_shards_count().unwrap(),
            MAX_DIAGNOSTIC_ENTRIES
        );
        assert_eq!(store.diagnostic_coinbase_count().unwrap(), 1);
        assert!(store.get_diagnostic_coinbase(7).unwrap().is_some());
    }
}
