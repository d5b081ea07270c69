use crate::domain::Reservation;
use crate::error::Result;
use crate::ports::outbound::ReservationRepository;
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::ReservationKey;
use std::collections::HashMap;

/// In-memory reservation store for tests and standalone nodes.
#[derive(Default)]
pub struct InMemoryReservationRepository {
    records: RwLock<HashMap<ReservationKey, Reservation>>,
}

impl InMemoryReservationRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a record.
    pub fn insert(&self, reservation: Reservation) {
        self.records.write().insert(reservation.key(), reservation);
    }

    /// Current state of a record.
    pub fn get(&self, key: &ReservationKey) -> Option<Reservation> {
        self.records.read().get(key).cloned()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the repository holds no record.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl ReservationRepository for InMemoryReservationRepository {
    async fn find_reservation(&self, key: &ReservationKey) -> Result<Option<Reservation>> {
        Ok(self.get(key))
    }

    async fn mark_verified(&self, key: &ReservationKey, block_index: Option<u64>) -> Result<()> {
        if let Some(record) = self.records.write().get_mut(key) {
            record.verified = true;
            if block_index.is_some() {
                record.block_index = block_index;
            }
        }
        Ok(())
    }
}
