//! `LedgerApi` implementation

use super::LedgerService;
use crate::domain::{
    build_candidate, check_chain, find_in_blocks, mine, Block, ChainSummary, IntegrityReport,
    TransactionMatch,
};
use crate::error::{LedgerError, Result, StoreError};
use crate::ports::inbound::LedgerApi;
use crate::ports::outbound::ChainStore;
use async_trait::async_trait;
use shared_types::{ReservationKey, Transaction};

impl<S: ChainStore + 'static> LedgerService<S> {
    /// Build a candidate on `latest` and mine it on the blocking pool.
    async fn seal_on(&self, latest: Option<&Block>, transaction: Transaction) -> Result<Block> {
        let candidate = build_candidate(latest, transaction, self.clock.now_millis());
        let difficulty = self.config.difficulty;

        tokio::task::spawn_blocking(move || mine(candidate, difficulty))
            .await
            .map_err(|e| LedgerError::MiningTaskFailed(e.to_string()))?
    }

    /// Append under the writer lock. `Ok(false)` when the store reports a
    /// conflict.
    fn persist(&self, sealed: &Block, attempt: u32) -> Result<bool> {
        match self.store.append(sealed) {
            Ok(()) => {
                tracing::info!(
                    "[sl-01] Block #{} appended: {} (nonce {})",
                    sealed.index,
                    sealed.hash,
                    sealed.nonce
                );
                Ok(true)
            }
            Err(StoreError::Conflict {
                expected_index,
                actual_index,
            }) => {
                tracing::warn!(
                    attempt,
                    expected_index,
                    actual_index,
                    "[sl-01] Store rejected block, rebuilding"
                );
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl<S: ChainStore + 'static> LedgerApi for LedgerService<S> {
    #[tracing::instrument(skip(self, transaction), fields(film = %transaction.film_id, seat = transaction.seat_number))]
    async fn append_transaction(&self, transaction: Transaction) -> Result<Block> {
        transaction.validate()?;

        let attempts = self.config.max_append_retries;
        for attempt in 1..attempts {
            let latest = self.store.latest()?;
            let sealed = self.seal_on(latest.as_ref(), transaction.clone()).await?;

            let _writer = self.writer.lock().await;

            // The tip may have moved while we were mining
            let tip = self.store.latest()?;
            let tip_hash = tip.as_ref().map(|b| b.hash.as_str());
            if tip_hash != latest.as_ref().map(|b| b.hash.as_str()) {
                tracing::warn!(
                    attempt,
                    "[sl-01] Tip moved during mining of block #{}, rebuilding",
                    sealed.index
                );
                continue;
            }

            if self.persist(&sealed, attempt)? {
                return Ok(sealed);
            }
        }

        // Last attempt mines under the writer lock so no other append can
        // overtake it
        let _writer = self.writer.lock().await;
        let latest = self.store.latest()?;
        let sealed = self.seal_on(latest.as_ref(), transaction).await?;
        if self.persist(&sealed, attempts)? {
            return Ok(sealed);
        }

        tracing::warn!(attempts, "[sl-01] Append gave up under contention");
        Err(LedgerError::PersistenceConflict { attempts })
    }

    async fn verify_chain_integrity(&self) -> bool {
        match self.integrity_report().await {
            Ok(report) => {
                for violation in &report.violations {
                    tracing::warn!("[sl-01] Integrity violation: {}", violation);
                }
                report.is_valid()
            }
            Err(e) => {
                tracing::warn!("[sl-01] Integrity check could not read chain: {}", e);
                false
            }
        }
    }

    async fn integrity_report(&self) -> Result<IntegrityReport> {
        let blocks = self.store.all_ascending()?;
        Ok(check_chain(&blocks))
    }

    async fn find_transaction(&self, key: &ReservationKey) -> Result<Option<TransactionMatch>> {
        let window = self.config.scan_window;

        let recent = self.store.recent(window)?;
        if let Some(found) = find_in_blocks(&recent, key) {
            tracing::debug!(block = found.block_index, "[sl-01] {} found in recent window", key);
            return Ok(Some(found));
        }

        if self.store.len()? <= window as u64 {
            return Ok(None);
        }

        // Fall through to the older part of the chain, newest first
        let all = self.store.all_ascending()?;
        let found = find_in_blocks(all.iter().rev().skip(window), key);
        if let Some(found) = &found {
            tracing::debug!(block = found.block_index, "[sl-01] {} found beyond window", key);
        }
        Ok(found)
    }

    async fn latest_block(&self) -> Result<Option<Block>> {
        Ok(self.store.latest()?)
    }

    async fn block_at(&self, index: u64) -> Result<Option<Block>> {
        Ok(self.store.get(index)?)
    }

    async fn all_blocks(&self) -> Result<Vec<Block>> {
        Ok(self.store.all_ascending()?)
    }

    async fn chain_summary(&self) -> Result<ChainSummary> {
        let latest = self.store.latest()?;
        Ok(ChainSummary::from_tip(latest.as_ref()))
    }
}
