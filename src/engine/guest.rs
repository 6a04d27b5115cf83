use sqlx::SqlitePool;

use crate::db;
use crate::models::Booking;

/// Collapse internal whitespace and trim, so "  Mario   Rossi " matches the
/// stored "Mario Rossi". Case folding is left to the store (`COLLATE
/// NOCASE`).
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn total_nights(bookings: &[Booking]) -> i64 {
    bookings.iter().map(|b| b.stay_nights()).sum()
}

/// Confirmed nights for a guest, or `None` when no confirmed booking matches
/// the name. "No bookings" is a result, not an error.
pub async fn nights_for_guest(
    pool: &SqlitePool,
    guest_name: &str,
) -> Result<Option<i64>, sqlx::Error> {
    let bookings = db::confirmed_bookings_for_guest(pool, &normalize_name(guest_name)).await?;
    if bookings.is_empty() {
        return Ok(None);
    }
    Ok(Some(total_nights(&bookings)))
}

/// Room types of a guest's confirmed bookings, one entry per booking, in
/// booking-creation order. Empty when nothing matches.
pub async fn room_types_for_guest(
    pool: &SqlitePool,
    guest_name: &str,
) -> Result<Vec<String>, sqlx::Error> {
    let bookings = db::confirmed_bookings_for_guest(pool, &normalize_name(guest_name)).await?;
    Ok(bookings.into_iter().map(|b| b.room_type).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookingStatus;
    use chrono::NaiveDate;
    use sqlx::sqlite::SqlitePoolOptions;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn normalizes_whitespace() {
        assert_eq!(normalize_name("  Mario   Rossi "), "Mario Rossi");
        assert_eq!(normalize_name("Lucia Bianchi"), "Lucia Bianchi");
    }

    #[test]
    fn nights_sum_clamps_degenerate_stays() {
        let booking = |check_in, check_out| Booking {
            id: 1,
            guest_name: "Mario Rossi".to_string(),
            room_type: "Standard".to_string(),
            check_in,
            check_out,
            guests_count: 2,
            price: 100.0,
            status: BookingStatus::Confirmed,
            booking_date: d(2025, 10, 1),
        };
        let rows = vec![
            booking(d(2025, 11, 20), d(2025, 11, 23)),
            booking(d(2025, 12, 1), d(2025, 12, 1)),
            booking(d(2025, 12, 5), d(2025, 12, 3)),
        ];
        assert_eq!(total_nights(&rows), 3);
    }

    async fn seeded_store() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::db::init(&pool).await.unwrap();
        pool
    }

    #[actix_web::test]
    async fn nights_for_seeded_guest() {
        let pool = seeded_store().await;
        // Mario Rossi: one confirmed booking, 2025-11-20 to 2025-11-23.
        assert_eq!(nights_for_guest(&pool, "Mario Rossi").await.unwrap(), Some(3));
        // Matching is case-insensitive with normalized whitespace.
        assert_eq!(
            nights_for_guest(&pool, "  mario   rossi ").await.unwrap(),
            Some(3)
        );
    }

    #[actix_web::test]
    async fn unknown_guest_is_not_found_not_zero() {
        let pool = seeded_store().await;
        assert_eq!(nights_for_guest(&pool, "Nessuno Qui").await.unwrap(), None);
        assert!(room_types_for_guest(&pool, "Nessuno Qui")
            .await
            .unwrap()
            .is_empty());
    }

    #[actix_web::test]
    async fn pending_guest_has_no_confirmed_bookings() {
        let pool = seeded_store().await;
        // Giovanni Verdi's only booking is pending.
        assert_eq!(nights_for_guest(&pool, "Giovanni Verdi").await.unwrap(), None);
    }

    #[actix_web::test]
    async fn room_types_in_booking_creation_order() {
        let pool = seeded_store().await;
        assert_eq!(
            room_types_for_guest(&pool, "Lucia Bianchi").await.unwrap(),
            vec!["Deluxe".to_string()]
        );
    }
}
