//! # Ledger Flows
//!
//! The chain ledger over its file store, as the node runs it:
//!
//! 1. **Purchase → Block**: a purchase becomes a sealed, linked block
//! 2. **Restart**: a reopened store serves the same chain and keeps extending it
//! 3. **Contention**: concurrent appends get distinct, gap-free indices
//! 4. **Tamper**: edits to the file are caught by the integrity check

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use shared_types::{ReservationKey, Transaction};
    use sl_01_chain_ledger::{
        fingerprint, Block, ChainStore, FileChainStore, IntegrityViolation, LedgerApi,
        LedgerConfig, LedgerService,
    };
    use tempfile::TempDir;

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    fn purchase(seat: u32) -> Transaction {
        Transaction::purchase("U1", "F1", seat, 10.0, 1_700_000_000_000)
    }

    fn open_ledger(dir: &TempDir, config: LedgerConfig) -> LedgerService<FileChainStore> {
        let store = Arc::new(FileChainStore::open_in_dir(dir.path()).unwrap());
        LedgerService::new(store, config).unwrap()
    }

    fn read_blocks(dir: &TempDir) -> Vec<Block> {
        FileChainStore::open_in_dir(dir.path())
            .unwrap()
            .all_ascending()
            .unwrap()
    }

    fn write_blocks(dir: &TempDir, blocks: &[Block]) {
        let mut text = String::new();
        for block in blocks {
            text.push_str(&serde_json::to_string(block).unwrap());
            text.push('\n');
        }
        std::fs::write(dir.path().join("blocks.jsonl"), text).unwrap();
    }

    // =========================================================================
    // PURCHASE → BLOCK
    // =========================================================================

    #[tokio::test]
    async fn test_purchase_flow_genesis_then_successor() {
        let dir = TempDir::new().unwrap();
        let ledger = open_ledger(&dir, LedgerConfig::default());

        let genesis = ledger.append_transaction(purchase(5)).await.unwrap();
        assert_eq!(genesis.index, 0);
        assert_eq!(genesis.previous_hash, "0");
        assert!(genesis.hash.starts_with("00"));

        let second = ledger.append_transaction(purchase(6)).await.unwrap();
        assert_eq!(second.index, 1);
        assert_eq!(second.previous_hash, genesis.hash);
        assert!(second.hash.starts_with("00"));

        assert!(ledger.verify_chain_integrity().await);

        let found = ledger
            .find_transaction(&ReservationKey::new("F1", "U1", 6))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.block_index, 1);
    }

    // =========================================================================
    // RESTART
    // =========================================================================

    #[tokio::test]
    async fn test_restart_continues_chain() {
        let dir = TempDir::new().unwrap();
        let config = LedgerConfig::default().with_difficulty(1);

        let tip = {
            let ledger = open_ledger(&dir, config.clone());
            ledger.append_transaction(purchase(1)).await.unwrap();
            ledger.append_transaction(purchase(2)).await.unwrap()
        };

        let ledger = open_ledger(&dir, config);
        let summary = ledger.chain_summary().await.unwrap();
        assert_eq!(summary.block_count, 2);
        assert_eq!(summary.tip_hash.as_deref(), Some(tip.hash.as_str()));

        let next = ledger.append_transaction(purchase(3)).await.unwrap();
        assert_eq!(next.index, 2);
        assert_eq!(next.previous_hash, tip.hash);
        assert!(ledger.verify_chain_integrity().await);
    }

    // =========================================================================
    // CONTENTION
    // =========================================================================

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends_over_file_store() {
        let dir = TempDir::new().unwrap();
        let config = LedgerConfig::default()
            .with_difficulty(1)
            .with_max_append_retries(16);
        let ledger = Arc::new(open_ledger(&dir, config));

        let handles: Vec<_> = (0..16u32)
            .map(|seat| {
                let ledger = Arc::clone(&ledger);
                tokio::spawn(async move { ledger.append_transaction(purchase(seat)).await })
            })
            .collect();

        let mut indices = Vec::new();
        for handle in handles {
            indices.push(handle.await.unwrap().unwrap().index);
        }
        indices.sort_unstable();
        assert_eq!(indices, (0..16).collect::<Vec<u64>>());

        // No two persisted blocks share a parent
        let blocks = read_blocks(&dir);
        let mut parents: Vec<_> = blocks.iter().map(|b| b.previous_hash.clone()).collect();
        parents.sort();
        parents.dedup();
        assert_eq!(parents.len(), blocks.len());
        assert!(ledger.verify_chain_integrity().await);
    }

    // =========================================================================
    // TAMPER
    // =========================================================================

    #[tokio::test]
    async fn test_edited_transaction_detected_after_reload() {
        let dir = TempDir::new().unwrap();
        let config = LedgerConfig::default().with_difficulty(1);
        {
            let ledger = open_ledger(&dir, config.clone());
            for seat in 0..3 {
                ledger.append_transaction(purchase(seat)).await.unwrap();
            }
        }

        let mut blocks = read_blocks(&dir);
        blocks[1].transactions[0].user_id = "U2".to_string();
        write_blocks(&dir, &blocks);

        let ledger = open_ledger(&dir, config);
        assert!(!ledger.verify_chain_integrity().await);
        let report = ledger.integrity_report().await.unwrap();
        assert!(matches!(
            report.violations.as_slice(),
            [IntegrityViolation::HashMismatch { index: 1, .. }]
        ));
    }

    #[tokio::test]
    async fn test_resealed_block_breaks_successor_link() {
        let dir = TempDir::new().unwrap();
        let config = LedgerConfig::default().with_difficulty(1);
        {
            let ledger = open_ledger(&dir, config.clone());
            for seat in 0..3 {
                ledger.append_transaction(purchase(seat)).await.unwrap();
            }
        }

        // Edit block 1 and recompute its hash so its own seal holds
        let mut blocks = read_blocks(&dir);
        blocks[1].transactions[0].price = 0.0;
        blocks[1].hash = fingerprint(&blocks[1]);
        write_blocks(&dir, &blocks);

        let ledger = open_ledger(&dir, config);
        let report = ledger.integrity_report().await.unwrap();
        assert!(matches!(
            report.violations.as_slice(),
            [IntegrityViolation::BrokenLink { index: 2, .. }]
        ));
    }
}
