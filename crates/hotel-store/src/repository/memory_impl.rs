//! In-memory record store backed by a JSON snapshot.

use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::repository::traits::RecordStore;
use hotel_domain::{Customer, Payment, PaymentFilter, Reservation, ReservationFilter, Room, RoomType};

// =============================================================================
// SNAPSHOT
// =============================================================================

/// Point-in-time copy of every table the analytics read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub reservations: Vec<Reservation>,
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub room_types: Vec<RoomType>,
    #[serde(default)]
    pub customers: Vec<Customer>,
}

impl Snapshot {
    /// Parse a snapshot from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a snapshot file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let snapshot = Self::from_json(&raw)?;
        info!(
            path = %path.as_ref().display(),
            reservations = snapshot.reservations.len(),
            payments = snapshot.payments.len(),
            rooms = snapshot.rooms.len(),
            room_types = snapshot.room_types.len(),
            customers = snapshot.customers.len(),
            "Snapshot loaded"
        );
        Ok(snapshot)
    }
}

// =============================================================================
// IN-MEMORY STORE
// =============================================================================

/// Record store serving rows from an immutable [`Snapshot`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    snapshot: Snapshot,
}

impl InMemoryRecordStore {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// Create a store from a snapshot file on disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(Snapshot::load(path)?))
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

impl From<Snapshot> for InMemoryRecordStore {
    fn from(snapshot: Snapshot) -> Self {
        Self::new(snapshot)
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    #[instrument(skip(self))]
    async fn reservations(&self, filter: &ReservationFilter) -> Result<Vec<Reservation>> {
        let rows: Vec<Reservation> = self
            .snapshot
            .reservations
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect();
        debug!(count = rows.len(), "Fetched reservations");
        Ok(rows)
    }

    #[instrument(skip(self))]
    async fn payments(&self, filter: &PaymentFilter) -> Result<Vec<Payment>> {
        let rows: Vec<Payment> = self
            .snapshot
            .payments
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        debug!(count = rows.len(), "Fetched payments");
        Ok(rows)
    }

    async fn rooms(&self) -> Result<Vec<Room>> {
        Ok(self.snapshot.rooms.clone())
    }

    async fn room_types(&self) -> Result<Vec<RoomType>> {
        Ok(self.snapshot.room_types.clone())
    }

    async fn customers(&self) -> Result<Vec<Customer>> {
        Ok(self.snapshot.customers.clone())
    }
}
