//! # Repository Module
//!
//! The record store contract and its backends.

pub mod memory_impl;
pub mod traits;

pub use memory_impl::{InMemoryRecordStore, Snapshot};
pub use traits::{RecordStore, SharedRecordStore};
