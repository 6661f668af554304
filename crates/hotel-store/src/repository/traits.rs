//! # Repository Traits
//!
//! Abstract read interface over the reservation system's tables.
//! Implementations can be swapped for different backends (snapshot file,
//! database, mock, etc.)

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use hotel_domain::{Customer, Payment, PaymentFilter, Reservation, ReservationFilter, Room, RoomType};

// =============================================================================
// RECORD STORE
// =============================================================================

/// Read-only access to the transactional records analytics run over.
///
/// Filters are typed values; a backend may push them down to its own query
/// layer but must return exactly the rows the filter matches.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch reservations matching the filter
    async fn reservations(&self, filter: &ReservationFilter) -> Result<Vec<Reservation>>;

    /// Fetch payments matching the filter
    async fn payments(&self, filter: &PaymentFilter) -> Result<Vec<Payment>>;

    /// Fetch every room
    async fn rooms(&self) -> Result<Vec<Room>>;

    /// Fetch every room type
    async fn room_types(&self) -> Result<Vec<RoomType>>;

    /// Fetch every customer
    async fn customers(&self) -> Result<Vec<Customer>>;
}

/// Record store handle shared between analyzers
pub type SharedRecordStore = Arc<dyn RecordStore>;
