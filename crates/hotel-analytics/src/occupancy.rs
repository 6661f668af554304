//! Occupancy analytics: daily occupancy rate and per-room-type stays.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{AnalyticsError, Result};
use crate::numeric::{average, percentage};
use hotel_domain::{DateRange, Reservation, ReservationFilter, Room, RoomType};
use hotel_store::SharedRecordStore;

/// Occupancy for one check-in day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyMetric {
    pub date: NaiveDate,
    pub occupied_room_count: u64,
    pub total_room_count: u64,
    pub occupancy_rate_percent: Decimal,
}

/// Eligible bookings and average stay for one room type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomTypeOccupancy {
    pub type_name: String,
    pub total_bookings: u64,
    pub avg_stay_duration_days: Decimal,
}

/// Daily occupancy for eligible check-ins inside `range`, ascending by date.
///
/// A room checking in twice on the same day is counted once. Days without an
/// eligible check-in are absent. Room IDs missing from `rooms` are not counted.
pub fn occupancy_rate(reservations: &[Reservation], rooms: &[Room], range: DateRange) -> Vec<DailyMetric> {
    let known_rooms: BTreeSet<i64> = rooms.iter().map(|r| r.room_id).collect();
    let total_room_count = known_rooms.len() as u64;

    let mut occupied: BTreeMap<NaiveDate, BTreeSet<i64>> = BTreeMap::new();
    for reservation in reservations {
        if !reservation.status.is_eligible() || !range.contains(reservation.check_in_date) {
            continue;
        }
        let day = occupied.entry(reservation.check_in_date).or_default();
        if known_rooms.contains(&reservation.room_id) {
            day.insert(reservation.room_id);
        }
    }

    occupied
        .into_iter()
        .map(|(date, room_ids)| {
            let occupied_room_count = room_ids.len() as u64;
            DailyMetric {
                date,
                occupied_room_count,
                total_room_count,
                occupancy_rate_percent: percentage(occupied_room_count, total_room_count),
            }
        })
        .collect()
}

/// Eligible bookings per room type name with their mean stay length in nights.
///
/// Reservations whose room or room type cannot be resolved are dropped. Types
/// without eligible bookings are absent.
pub fn room_type_occupancy(
    reservations: &[Reservation],
    rooms: &[Room],
    room_types: &[RoomType],
) -> Vec<RoomTypeOccupancy> {
    let room_to_type: HashMap<i64, i64> = rooms.iter().map(|r| (r.room_id, r.room_type_id)).collect();
    let type_names: HashMap<i64, &str> = room_types
        .iter()
        .map(|t| (t.room_type_id, t.type_name.as_str()))
        .collect();

    #[derive(Default)]
    struct Acc {
        reservation_ids: BTreeSet<i64>,
        stays: u64,
        nights: i64,
    }

    let mut groups: BTreeMap<&str, Acc> = BTreeMap::new();
    for reservation in reservations.iter().filter(|r| r.status.is_eligible()) {
        let Some(type_name) = room_to_type
            .get(&reservation.room_id)
            .and_then(|type_id| type_names.get(type_id).copied())
        else {
            continue;
        };
        let acc = groups.entry(type_name).or_default();
        acc.reservation_ids.insert(reservation.reservation_id);
        acc.stays += 1;
        acc.nights += reservation.stay_nights();
    }

    groups
        .into_iter()
        .map(|(type_name, acc)| RoomTypeOccupancy {
            type_name: type_name.to_string(),
            total_bookings: acc.reservation_ids.len() as u64,
            avg_stay_duration_days: average(Decimal::from(acc.nights), acc.stays).unwrap_or_default(),
        })
        .collect()
}

/// Occupancy analyzer over an injected record store.
#[derive(Clone)]
pub struct OccupancyAnalyzer {
    store: SharedRecordStore,
}

impl OccupancyAnalyzer {
    pub fn new(store: SharedRecordStore) -> Self {
        Self { store }
    }

    /// Daily occupancy rate for check-ins between `start` and `end` inclusive.
    ///
    /// # Errors
    ///
    /// `InvalidRange` when `start > end`, `DataUnavailable` when a fetch fails.
    #[instrument(skip(self))]
    pub async fn occupancy_rate(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<DailyMetric>> {
        let range = DateRange::new(start, end).map_err(|_| AnalyticsError::InvalidRange { start, end })?;

        let filter = ReservationFilter::eligible().with_check_in(range);
        let reservations = self.store.reservations(&filter).await?;
        let rooms = self.store.rooms().await?;

        let rows = occupancy_rate(&reservations, &rooms, range);
        debug!(
            reservations = reservations.len(),
            rooms = rooms.len(),
            days = rows.len(),
            "Occupancy rate computed"
        );
        Ok(rows)
    }

    /// Eligible bookings and average stay per room type.
    #[instrument(skip(self))]
    pub async fn room_type_occupancy(&self) -> Result<Vec<RoomTypeOccupancy>> {
        let reservations = self.store.reservations(&ReservationFilter::eligible()).await?;
        let rooms = self.store.rooms().await?;
        let room_types = self.store.room_types().await?;

        let rows = room_type_occupancy(&reservations, &rooms, &room_types);
        debug!(reservations = reservations.len(), types = rows.len(), "Room type occupancy computed");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{date, failing_store, room, room_type, shared, stay};
    use fake::Fake;
    use hotel_domain::ReservationStatus::{Cancelled, Completed, Confirmed, Pending};
    use hotel_store::Snapshot;
    use rust_decimal_macros::dec;

    fn ten_rooms() -> Vec<Room> {
        (1..=10).map(|id| room(id, 1)).collect()
    }

    fn january() -> DateRange {
        DateRange::new(date(2024, 1, 1), date(2024, 1, 31)).unwrap()
    }

    #[test]
    fn test_same_room_counted_once_per_day() {
        let rows = occupancy_rate(
            &[
                stay(1, 1, Confirmed, date(2024, 1, 1), 1),
                stay(2, 1, Completed, date(2024, 1, 1), 2),
                stay(3, 2, Confirmed, date(2024, 1, 1), 1),
            ],
            &ten_rooms(),
            january(),
        );

        assert_eq!(
            rows,
            vec![DailyMetric {
                date: date(2024, 1, 1),
                occupied_room_count: 2,
                total_room_count: 10,
                occupancy_rate_percent: dec!(20.00),
            }]
        );
    }

    #[test]
    fn test_occupancy_is_sparse_and_sorted() {
        let rows = occupancy_rate(
            &[
                stay(1, 3, Confirmed, date(2024, 1, 20), 1),
                stay(2, 1, Confirmed, date(2024, 1, 5), 1),
                stay(3, 2, Cancelled, date(2024, 1, 10), 1),
                stay(4, 4, Pending, date(2024, 1, 11), 1),
                stay(5, 5, Confirmed, date(2024, 2, 1), 1),
            ],
            &ten_rooms(),
            january(),
        );

        let dates: Vec<NaiveDate> = rows.iter().map(|r| r.date).collect();
        assert_eq!(dates, [date(2024, 1, 5), date(2024, 1, 20)]);
    }

    #[test]
    fn test_occupancy_range_bounds_inclusive() {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 1)).unwrap();
        let rows = occupancy_rate(&[stay(1, 1, Confirmed, date(2024, 1, 1), 3)], &ten_rooms(), range);
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_occupancy_without_rooms_reports_zero_rate() {
        let rows = occupancy_rate(&[stay(1, 1, Confirmed, date(2024, 1, 3), 1)], &[], january());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].total_room_count, 0);
        assert_eq!(rows[0].occupied_room_count, 0);
        assert_eq!(rows[0].occupancy_rate_percent, Decimal::ZERO);
    }

    #[test]
    fn test_occupancy_rate_stays_within_bounds() {
        let rooms: Vec<Room> = (1..=5).map(|id| room(id, 1)).collect();
        let reservations: Vec<Reservation> = (0..300)
            .map(|id| {
                let room_id = (1..=8).fake::<i64>();
                let day = (1..=31).fake::<u32>();
                stay(id, room_id, Confirmed, date(2024, 1, day), 1)
            })
            .collect();

        let range = january();
        let rows = occupancy_rate(&reservations, &rooms, range);
        assert!(rows.windows(2).all(|w| w[0].date < w[1].date));
        for row in &rows {
            assert!(range.contains(row.date));
            assert!(row.occupancy_rate_percent >= Decimal::ZERO);
            assert!(row.occupancy_rate_percent <= dec!(100));
        }
    }

    #[test]
    fn test_room_type_occupancy() {
        let rooms = [room(1, 1), room(2, 1), room(3, 2), room(4, 99)];
        let types = [room_type(1, "Deluxe"), room_type(2, "Suite"), room_type(3, "Penthouse")];
        let rows = room_type_occupancy(
            &[
                stay(1, 1, Confirmed, date(2024, 1, 1), 2),
                stay(2, 2, Completed, date(2024, 1, 4), 3),
                stay(3, 2, Completed, date(2024, 1, 9), 2),
                stay(4, 3, Confirmed, date(2024, 1, 1), 5),
                stay(5, 3, Cancelled, date(2024, 1, 1), 9),
                stay(6, 4, Confirmed, date(2024, 1, 1), 1),
            ],
            &rooms,
            &types,
        );

        assert_eq!(
            rows,
            vec![
                RoomTypeOccupancy {
                    type_name: "Deluxe".into(),
                    total_bookings: 3,
                    avg_stay_duration_days: dec!(2.33),
                },
                RoomTypeOccupancy {
                    type_name: "Suite".into(),
                    total_bookings: 1,
                    avg_stay_duration_days: dec!(5.00),
                },
            ]
        );
    }

    #[test]
    fn test_room_type_occupancy_counts_distinct_reservations() {
        let duplicate = stay(7, 1, Confirmed, date(2024, 1, 1), 4);
        let rows = room_type_occupancy(
            &[duplicate.clone(), duplicate],
            &[room(1, 1)],
            &[room_type(1, "Standard")],
        );
        assert_eq!(rows[0].total_bookings, 1);
        assert_eq!(rows[0].avg_stay_duration_days, dec!(4.00));
    }

    #[tokio::test]
    async fn test_analyzer_rejects_reversed_range() {
        let analyzer = OccupancyAnalyzer::new(shared(Snapshot::default()));
        let err = analyzer
            .occupancy_rate(date(2024, 2, 1), date(2024, 1, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidRange { .. }));
    }

    #[tokio::test]
    async fn test_analyzer_empty_range_is_ok() {
        let analyzer = OccupancyAnalyzer::new(shared(Snapshot {
            rooms: ten_rooms(),
            ..Snapshot::default()
        }));
        let rows = analyzer
            .occupancy_rate(date(2024, 1, 1), date(2024, 1, 31))
            .await
            .unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_analyzer_reads_through_store() {
        let analyzer = OccupancyAnalyzer::new(shared(Snapshot {
            reservations: vec![
                stay(1, 1, Confirmed, date(2024, 1, 1), 2),
                stay(2, 1, Confirmed, date(2024, 1, 1), 2),
                stay(3, 2, Confirmed, date(2024, 1, 1), 4),
            ],
            rooms: ten_rooms(),
            room_types: vec![room_type(1, "Standard")],
            ..Snapshot::default()
        }));

        let daily = analyzer
            .occupancy_rate(date(2024, 1, 1), date(2024, 1, 1))
            .await
            .unwrap();
        assert_eq!(daily[0].occupied_room_count, 2);
        assert_eq!(daily[0].occupancy_rate_percent, dec!(20.00));

        let by_type = analyzer.room_type_occupancy().await.unwrap();
        assert_eq!(by_type[0].total_bookings, 3);
        assert_eq!(by_type[0].avg_stay_duration_days, dec!(2.67));
    }

    #[tokio::test]
    async fn test_store_failure_is_data_unavailable() {
        let analyzer = OccupancyAnalyzer::new(failing_store());
        let err = analyzer.room_type_occupancy().await.unwrap_err();
        assert!(matches!(err, AnalyticsError::DataUnavailable(_)));
    }
}
