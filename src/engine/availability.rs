use chrono::NaiveDate;
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db;

/// Occupancy of one room class over a window.
///
/// `occupied` is the raw overlapping-booking count; `free` is clamped at
/// zero, so an overbooked seed shows up as `occupied > total_rooms` rather
/// than as a negative free count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomAvailability {
    pub room_type: String,
    pub total_rooms: i64,
    pub occupied: i64,
    pub free: i64,
}

impl RoomAvailability {
    fn new(room_type: String, total_rooms: i64, occupied: i64) -> Self {
        Self {
            room_type,
            total_rooms,
            occupied,
            free: (total_rooms - occupied).max(0),
        }
    }
}

/// Equal bounds mean "the night of that date": widen the window end by one
/// day so the half-open overlap test can match at all.
fn effective_window(start: NaiveDate, end: NaiveDate) -> (NaiveDate, NaiveDate) {
    if start == end {
        match end.succ_opt() {
            Some(next) => (start, next),
            None => (start, end),
        }
    } else {
        (start, end)
    }
}

/// Availability per room class over `[start, end)`.
///
/// With a `room_type` the result is a single entry; an unknown type yields a
/// zero-total, zero-occupancy entry rather than an error. Without one, every
/// known room class is reported in seed order.
pub async fn availability(
    pool: &SqlitePool,
    start: NaiveDate,
    end: NaiveDate,
    room_type: Option<&str>,
) -> Result<Vec<RoomAvailability>, sqlx::Error> {
    let (start, end) = effective_window(start, end);

    let rooms = match room_type {
        Some(name) => match db::room_class_by_name(pool, name).await? {
            Some(room) => vec![room],
            None => {
                return Ok(vec![RoomAvailability::new(name.to_string(), 0, 0)]);
            }
        },
        None => db::room_classes(pool).await?,
    };

    let mut result = Vec::with_capacity(rooms.len());
    for room in rooms {
        let occupied =
            db::confirmed_overlapping_count(pool, &room.room_type, start, end).await?;
        result.push(RoomAvailability::new(
            room.room_type,
            room.total_rooms,
            occupied,
        ));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    async fn empty_store() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        db::init(&pool).await.unwrap();
        sqlx::query("DELETE FROM bookings")
            .execute(&pool)
            .await
            .unwrap();
        pool
    }

    async fn insert_booking(
        pool: &SqlitePool,
        room_type: &str,
        check_in: &str,
        check_out: &str,
        status: &str,
    ) {
        sqlx::query(
            r#"
            INSERT INTO bookings (
                guest_name, room_type, check_in, check_out,
                guests_count, price, status, booking_date
            ) VALUES (?, ?, ?, ?, 2, 100.0, ?, '2025-10-01')
            "#,
        )
        .bind("Mario Rossi")
        .bind(room_type)
        .bind(check_in)
        .bind(check_out)
        .bind(status)
        .execute(pool)
        .await
        .unwrap();
    }

    #[test]
    fn free_clamps_at_zero_but_occupied_stays_raw() {
        let a = RoomAvailability::new("Suite".to_string(), 1, 3);
        assert_eq!(a.occupied, 3);
        assert_eq!(a.free, 0);
    }

    #[test]
    fn equal_bounds_widen_to_one_night() {
        let (s, e) = effective_window(d(2025, 12, 25), d(2025, 12, 25));
        assert_eq!((s, e), (d(2025, 12, 25), d(2025, 12, 26)));
        let (s, e) = effective_window(d(2025, 12, 20), d(2025, 12, 22));
        assert_eq!((s, e), (d(2025, 12, 20), d(2025, 12, 22)));
    }

    #[actix_web::test]
    async fn counts_one_overlapping_confirmed_booking() {
        let pool = empty_store().await;
        insert_booking(&pool, "Standard", "2025-12-20", "2025-12-24", "confirmed").await;

        let result = availability(&pool, d(2025, 12, 20), d(2025, 12, 22), Some("Standard"))
            .await
            .unwrap();
        assert_eq!(
            result,
            vec![RoomAvailability {
                room_type: "Standard".to_string(),
                total_rooms: 6,
                occupied: 1,
                free: 5,
            }]
        );
    }

    #[actix_web::test]
    async fn boundary_touching_stays_do_not_occupy() {
        let pool = empty_store().await;
        // Checks out exactly when the window opens, checks in when it closes.
        insert_booking(&pool, "Standard", "2025-12-15", "2025-12-20", "confirmed").await;
        insert_booking(&pool, "Standard", "2025-12-22", "2025-12-24", "confirmed").await;

        let result = availability(&pool, d(2025, 12, 20), d(2025, 12, 22), Some("Standard"))
            .await
            .unwrap();
        assert_eq!(result[0].occupied, 0);
        assert_eq!(result[0].free, 6);
    }

    #[actix_web::test]
    async fn cancelled_and_pending_do_not_occupy() {
        let pool = empty_store().await;
        insert_booking(&pool, "Deluxe", "2025-12-20", "2025-12-24", "cancelled").await;
        insert_booking(&pool, "Deluxe", "2025-12-20", "2025-12-24", "pending").await;

        let result = availability(&pool, d(2025, 12, 20), d(2025, 12, 22), Some("Deluxe"))
            .await
            .unwrap();
        assert_eq!(result[0].occupied, 0);
        assert_eq!(result[0].free, 4);
    }

    #[actix_web::test]
    async fn unknown_room_type_yields_zero_entry() {
        let pool = empty_store().await;
        let result = availability(&pool, d(2025, 12, 20), d(2025, 12, 22), Some("Penthouse"))
            .await
            .unwrap();
        assert_eq!(
            result,
            vec![RoomAvailability {
                room_type: "Penthouse".to_string(),
                total_rooms: 0,
                occupied: 0,
                free: 0,
            }]
        );
    }

    #[actix_web::test]
    async fn all_room_classes_reported_without_a_type_filter() {
        let pool = empty_store().await;
        let result = availability(&pool, d(2025, 12, 20), d(2025, 12, 22), None)
            .await
            .unwrap();
        let names: Vec<&str> = result.iter().map(|r| r.room_type.as_str()).collect();
        assert_eq!(
            names,
            vec!["Standard", "Deluxe", "Executive", "Junior Suite", "Suite"]
        );
    }
}
