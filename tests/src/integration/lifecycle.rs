//! # Epoch Lifecycle Flows
//!
//! Writes a realistic DS epoch through the facade and reads it back, under
//! both backends: DS block, micro blocks from the shards, the folding tx
//! block, a view change, transaction bodies and chain metadata.

#[cfg(test)]
mod tests {
    use ax_block_storage::{BlockStorage, MetaKey, StorageConfig, StorageMode};
    use tempfile::TempDir;

    use crate::support;

    const BOTH_MODES: [StorageMode; 2] = [StorageMode::SortedMap, StorageMode::FlatFile];

    fn open_store(dir: &TempDir, mode: StorageMode) -> BlockStorage {
        let config = StorageConfig::for_testing(dir.path().to_path_buf(), mode);
        BlockStorage::open(&config).unwrap()
    }

    // =========================================================================
    // FULL EPOCH FLOW
    // =========================================================================

    #[test]
    fn test_full_epoch_flow_round_trips_every_kind() {
        for mode in BOTH_MODES {
            let dir = TempDir::new().unwrap();
            let store = open_store(&dir, mode);

            let ds = support::ds_block(12);
            let micro = support::micro_block(1200, 3);
            let tx = support::tx_block(1200);
            let vc = support::vc_block(1200);

            store.put_ds_block(12, &ds).unwrap();
            store.put_micro_block(&micro).unwrap();
            store.put_tx_block(1200, &tx).unwrap();
            store.put_vc_block(&vc).unwrap();
            for hash in support::txn_hashes(3) {
                store.put_tx_body(&hash, b"signed transfer payload").unwrap();
            }
            store
                .put_metadata(MetaKey::LatestActiveDsBlockNum, &12u64.to_be_bytes())
                .unwrap();

            assert_eq!(store.get_ds_block(12).unwrap(), Some(ds), "{mode:?}");
            assert_eq!(
                store.get_micro_block(&micro.block_hash()).unwrap(),
                Some(micro),
                "{mode:?}"
            );
            assert_eq!(store.get_tx_block(1200).unwrap(), Some(tx), "{mode:?}");
            assert_eq!(
                store.get_vc_block(&vc.block_hash()).unwrap(),
                Some(vc),
                "{mode:?}"
            );
            assert_eq!(
                store.get_tx_body(&support::txn_hashes(1)[0]).unwrap(),
                Some(b"signed transfer payload".to_vec()),
                "{mode:?}"
            );
            assert_eq!(
                store.get_metadata(MetaKey::LatestActiveDsBlockNum).unwrap(),
                Some(12u64.to_be_bytes().to_vec()),
                "{mode:?}"
            );
        }
    }

    #[test]
    fn test_finalized_block_keeps_cosignatures_through_storage() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir, StorageMode::SortedMap);

        let ds = support::ds_block(3);
        assert!(ds.base.is_finalized());
        store.put_ds_block(3, &ds).unwrap();

        let back = store.get_ds_block(3).unwrap().unwrap();
        assert!(back.base.is_finalized());
        assert_eq!(back.base.co_signatures(), ds.base.co_signatures());
        assert_eq!(
            back.base.co_signatures().unwrap().bitmap1.len(),
            support::COMMITTEE_SIZE
        );
    }

    #[test]
    fn test_unsigned_block_stays_unsigned() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir, StorageMode::SortedMap);

        let vc = support::vc_block(900);
        assert!(!vc.base.is_finalized());
        store.put_vc_block(&vc).unwrap();

        let back = store.get_vc_block(&vc.block_hash()).unwrap().unwrap();
        assert!(!back.base.is_finalized());
        assert_eq!(back.base.co_signatures(), None);
    }

    // =========================================================================
    // ORDERING AND IDEMPOTENCE
    // =========================================================================

    #[test]
    fn test_get_all_orders_blocks_numerically() {
        for mode in BOTH_MODES {
            let dir = TempDir::new().unwrap();
            let store = open_store(&dir, mode);

            for num in [7u64, 2, 9, 0] {
                store.put_ds_block(num, &support::ds_block(num)).unwrap();
            }

            let nums: Vec<u64> = store
                .get_all_ds_blocks()
                .unwrap()
                .iter()
                .map(|b| b.block_num())
                .collect();
            assert_eq!(nums, vec![0, 2, 7, 9], "{mode:?}");
        }
    }

    #[test]
    fn test_double_put_is_idempotent() {
        for mode in BOTH_MODES {
            let dir = TempDir::new().unwrap();
            let store = open_store(&dir, mode);
            let block = support::tx_block(5);

            store.put_tx_block(5, &block).unwrap();
            store.put_tx_block(5, &block).unwrap();

            assert_eq!(store.get_tx_block(5).unwrap(), Some(block.clone()), "{mode:?}");
            let all = store.get_all_tx_blocks().unwrap();
            assert_eq!(all, vec![block], "{mode:?}");
        }
    }

    #[test]
    fn test_latest_accessors_track_highest_number() {
        for mode in BOTH_MODES {
            let dir = TempDir::new().unwrap();
            let store = open_store(&dir, mode);

            for num in [4u64, 19, 8] {
                store.put_ds_block(num, &support::ds_block(num)).unwrap();
                store.put_tx_block(num, &support::tx_block(num)).unwrap();
            }

            assert_eq!(
                store.get_latest_ds_block().unwrap().unwrap().block_num(),
                19,
                "{mode:?}"
            );
            assert_eq!(
                store.get_latest_tx_block().unwrap().unwrap().block_num(),
                19,
                "{mode:?}"
            );
        }
    }

    // =========================================================================
    // REOPEN
    // =========================================================================

    #[test]
    fn test_reopen_preserves_chain() {
        for mode in BOTH_MODES {
            let dir = TempDir::new().unwrap();
            {
                let store = open_store(&dir, mode);
                for num in 0u64..5 {
                    store.put_ds_block(num, &support::ds_block(num)).unwrap();
                }
            }

            let store = open_store(&dir, mode);
            let all = store.get_all_ds_blocks().unwrap();
            assert_eq!(all.len(), 5, "{mode:?}");
            for (num, block) in all.iter().enumerate() {
                assert_eq!(block.block_num(), num as u64, "{mode:?}");
            }
        }
    }

    // =========================================================================
    // WHITELIST
    // =========================================================================

    #[test]
    fn test_ext_seed_whitelist_flow() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir, StorageMode::SortedMap);

        for seed in [0x30u8, 0x10, 0x20] {
            store.put_ext_seed_pub_key(&support::node_key(seed)).unwrap();
        }
        store
            .delete_ext_seed_pub_key(&support::node_key(0x20))
            .unwrap();

        let keys = store.get_all_ext_seed_pub_keys().unwrap();
        assert_eq!(
            keys,
            vec![support::node_key(0x10), support::node_key(0x30)]
        );
    }
}
