//! Record builders and store doubles for unit tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use hotel_domain::{
    Customer, Payment, PaymentFilter, PaymentStatus, Reservation, ReservationFilter,
    ReservationStatus, Room, RoomType,
};
use hotel_store::{InMemoryRecordStore, RecordStore, SharedRecordStore, Snapshot, StoreError};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(10, 30, 0).unwrap()
}

/// One-night stay in room 1 for customer 1, checking in on the creation day.
pub fn reservation(
    id: i64,
    status: ReservationStatus,
    total_amount: Decimal,
    created_at: NaiveDateTime,
) -> Reservation {
    let check_in = created_at.date();
    Reservation {
        reservation_id: id,
        customer_id: 1,
        room_id: 1,
        check_in_date: check_in,
        check_out_date: check_in.succ_opt().unwrap(),
        number_of_guests: Some(2),
        status,
        total_amount,
        created_at,
    }
}

/// Reservation occupying `room_id` from `check_in` for `nights` nights.
pub fn stay(
    id: i64,
    room_id: i64,
    status: ReservationStatus,
    check_in: NaiveDate,
    nights: u64,
) -> Reservation {
    Reservation {
        reservation_id: id,
        customer_id: 1,
        room_id,
        check_in_date: check_in,
        check_out_date: check_in + chrono::Days::new(nights),
        number_of_guests: None,
        status,
        total_amount: Decimal::from(100),
        created_at: check_in.and_hms_opt(8, 0, 0).unwrap(),
    }
}

pub fn payment(
    id: i64,
    reservation_id: i64,
    amount: Decimal,
    status: PaymentStatus,
    paid_at: NaiveDateTime,
) -> Payment {
    Payment {
        payment_id: id,
        reservation_id,
        amount,
        payment_date: paid_at,
        payment_status: status,
        payment_method: None,
    }
}

pub fn room(room_id: i64, room_type_id: i64) -> Room {
    Room {
        room_id,
        room_type_id,
        room_number: None,
    }
}

pub fn room_type(room_type_id: i64, type_name: &str) -> RoomType {
    RoomType {
        room_type_id,
        type_name: type_name.to_string(),
        base_price: None,
    }
}

pub fn customer(customer_id: i64) -> Customer {
    Customer {
        customer_id,
        first_name: None,
        last_name: None,
    }
}

pub fn shared(snapshot: Snapshot) -> SharedRecordStore {
    Arc::new(InMemoryRecordStore::new(snapshot))
}

/// Store whose every fetch fails, as an unreachable database would.
struct FailingStore;

#[async_trait]
impl RecordStore for FailingStore {
    async fn reservations(&self, _: &ReservationFilter) -> hotel_store::Result<Vec<Reservation>> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn payments(&self, _: &PaymentFilter) -> hotel_store::Result<Vec<Payment>> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn rooms(&self) -> hotel_store::Result<Vec<Room>> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn room_types(&self) -> hotel_store::Result<Vec<RoomType>> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn customers(&self) -> hotel_store::Result<Vec<Customer>> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
}

pub fn failing_store() -> SharedRecordStore {
    Arc::new(FailingStore)
}
