//! # Hotel Record Store
//!
//! Read side of the hotel reservation system, as seen by the analytics
//! engine.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Analytics Engine                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  typed filters
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   RecordStore trait                          │
//! │  (reservations, payments, rooms, room_types, customers)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │        InMemoryRecordStore (JSON snapshot file)              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hotel_store::{InMemoryRecordStore, RecordStore};
//! use hotel_domain::ReservationFilter;
//!
//! let store = InMemoryRecordStore::from_path("data/snapshot.json")?;
//! let eligible = store.reservations(&ReservationFilter::eligible()).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod repository;

// Re-export commonly used types
pub use error::{Result, StoreError};
pub use repository::{InMemoryRecordStore, RecordStore, SharedRecordStore, Snapshot};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
