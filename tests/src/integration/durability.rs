//! # Durability and Failure Modes
//!
//! Flat-file rotation, the hot-block cache window, corrupted records, the
//! on-disk mode marker and the directory lock, all exercised through the
//! public facade the way an operator incident would hit them.

#[cfg(test)]
mod tests {
    use ax_block_storage::{BlockStorage, StorageConfig, StorageError, StorageMode};
    use tempfile::TempDir;

    use crate::support;

    fn flat_config(dir: &TempDir, file_size_limit: u64) -> StorageConfig {
        let mut config =
            StorageConfig::for_testing(dir.path().to_path_buf(), StorageMode::FlatFile);
        config.file_size_limit = file_size_limit;
        config
    }

    fn ds_file_count(dir: &TempDir) -> usize {
        std::fs::read_dir(dir.path().join("blocks/ds"))
            .map(|entries| entries.count())
            .unwrap_or(0)
    }

    // =========================================================================
    // ROTATION
    // =========================================================================

    #[test]
    fn test_rotation_spreads_chain_across_files() {
        let dir = TempDir::new().unwrap();
        let store = BlockStorage::open(&flat_config(&dir, 1024)).unwrap();

        for num in 0u64..12 {
            store.put_ds_block(num, &support::ds_block(num)).unwrap();
        }

        assert!(
            ds_file_count(&dir) > 1,
            "12 blocks against a 1 KiB ceiling must rotate"
        );
        assert_eq!(store.get_all_ds_blocks().unwrap().len(), 12);
        for num in 0u64..12 {
            assert!(store.get_ds_block(num).unwrap().is_some());
        }
    }

    #[test]
    fn test_oversized_block_still_lands_in_fresh_file() {
        // Ceiling smaller than any record: every block gets its own file
        // instead of being rejected.
        let dir = TempDir::new().unwrap();
        let store = BlockStorage::open(&flat_config(&dir, 16)).unwrap();

        for num in 0u64..3 {
            store.put_ds_block(num, &support::ds_block(num)).unwrap();
        }

        assert_eq!(ds_file_count(&dir), 3);
        for num in 0u64..3 {
            assert!(store.get_ds_block(num).unwrap().is_some());
        }
    }

    // =========================================================================
    // HOT-BLOCK CACHE
    // =========================================================================

    #[test]
    fn test_cache_serves_recent_blocks_after_file_loss() {
        let dir = TempDir::new().unwrap();
        let store = BlockStorage::open(&flat_config(&dir, 4 * 1024 * 1024)).unwrap();

        store.put_ds_block(0, &support::ds_block(0)).unwrap();
        std::fs::remove_file(dir.path().join("blocks/ds/blk000000000.bin")).unwrap();

        // The put left block 0 in the cache, so the lost file is invisible.
        assert!(store.get_ds_block(0).unwrap().is_some());

        // Twenty further puts push block 0 out of the window; now the loss
        // surfaces as an absent block.
        for num in 1u64..=20 {
            store.put_ds_block(num, &support::ds_block(num)).unwrap();
        }
        assert_eq!(store.get_ds_block(0).unwrap(), None);
        assert!(store.get_ds_block(20).unwrap().is_some());
    }

    // =========================================================================
    // CORRUPTION
    // =========================================================================

    #[test]
    fn test_corrupt_record_is_skipped_after_reopen() {
        let dir = TempDir::new().unwrap();
        {
            // One block per file, so corruption can target block 1 alone.
            let store = BlockStorage::open(&flat_config(&dir, 16)).unwrap();
            for num in 0u64..3 {
                store.put_tx_block(num, &support::tx_block(num)).unwrap();
            }
        }

        let victim = dir.path().join("blocks/tx/blk000000001.bin");
        let mut bytes = std::fs::read(&victim).unwrap();
        for byte in bytes.iter_mut().take(8) {
            *byte ^= 0xFF;
        }
        std::fs::write(&victim, bytes).unwrap();

        // Fresh handle, fresh cache: reads must hit the damaged file.
        let store = BlockStorage::open(&flat_config(&dir, 16)).unwrap();
        assert_eq!(store.get_tx_block(1).unwrap(), None);

        let survivors: Vec<u64> = store
            .get_all_tx_blocks()
            .unwrap()
            .iter()
            .map(|b| b.block_num())
            .collect();
        assert_eq!(survivors, vec![0, 2]);
    }

    #[test]
    fn test_everything_unreadable_is_disk_empty() {
        let dir = TempDir::new().unwrap();
        {
            let store = BlockStorage::open(&flat_config(&dir, 16)).unwrap();
            for num in 0u64..3 {
                store.put_tx_block(num, &support::tx_block(num)).unwrap();
            }
        }

        for entry in std::fs::read_dir(dir.path().join("blocks/tx")).unwrap() {
            std::fs::remove_file(entry.unwrap().path()).unwrap();
        }

        let store = BlockStorage::open(&flat_config(&dir, 16)).unwrap();
        assert!(matches!(
            store.get_all_tx_blocks(),
            Err(StorageError::DiskEmpty)
        ));
    }

    // =========================================================================
    // MODE MARKER AND LOCK
    // =========================================================================

    #[test]
    fn test_mode_marker_rejects_both_directions() {
        for (first, second) in [
            (StorageMode::SortedMap, StorageMode::FlatFile),
            (StorageMode::FlatFile, StorageMode::SortedMap),
        ] {
            let dir = TempDir::new().unwrap();
            drop(
                BlockStorage::open(&StorageConfig::for_testing(
                    dir.path().to_path_buf(),
                    first,
                ))
                .unwrap(),
            );

            let reopen = BlockStorage::open(&StorageConfig::for_testing(
                dir.path().to_path_buf(),
                second,
            ));
            assert!(
                matches!(reopen, Err(StorageError::ModeMismatch { .. })),
                "{first:?} directory must refuse {second:?}"
            );
        }
    }

    #[test]
    fn test_directory_lock_released_on_drop() {
        let dir = TempDir::new().unwrap();
        let config = StorageConfig::for_testing(dir.path().to_path_buf(), StorageMode::SortedMap);

        let first = BlockStorage::open(&config).unwrap();
        assert!(matches!(
            BlockStorage::open(&config),
            Err(StorageError::LockHeld(_))
        ));

        drop(first);
        assert!(BlockStorage::open(&config).is_ok());
    }

    #[test]
    fn test_sorted_map_mode_creates_no_block_files() {
        let dir = TempDir::new().unwrap();
        let store = BlockStorage::open(&StorageConfig::for_testing(
            dir.path().to_path_buf(),
            StorageMode::SortedMap,
        ))
        .unwrap();

        store.put_ds_block(1, &support::ds_block(1)).unwrap();
        store.put_tx_block(1, &support::tx_block(1)).unwrap();

        assert!(!dir.path().join("blocks").exists());
    }
}
