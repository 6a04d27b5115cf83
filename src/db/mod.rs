use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::env;

use crate::models::{Booking, BookingStatus, RoomClass};

pub async fn get_db_pool() -> SqlitePool {
    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:bookings.db?mode=rwc".to_string());

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to create pool")
}

/// Fixed room inventory: (room_type, total_rooms, capacity).
const SEED_ROOMS: &[(&str, i64, i64)] = &[
    ("Standard", 6, 2),
    ("Deluxe", 4, 2),
    ("Executive", 4, 2),
    ("Junior Suite", 2, 4),
    ("Suite", 1, 2),
];

/// Fixed booking set: (guest, room_type, check_in, check_out, guests, price,
/// status, booking_date).
const SEED_BOOKINGS: &[(&str, &str, &str, &str, i64, f64, BookingStatus, &str)] = &[
    ("Mario Rossi", "Standard", "2025-11-20", "2025-11-23", 2, 210.0, BookingStatus::Confirmed, "2025-10-29"),
    ("Lucia Bianchi", "Deluxe", "2025-11-25", "2025-11-28", 2, 400.0, BookingStatus::Confirmed, "2025-10-27"),
    ("Giovanni Verdi", "Suite", "2025-12-01", "2025-12-05", 2, 900.0, BookingStatus::Pending, "2025-10-30"),
    ("Elena Neri", "Executive", "2025-11-22", "2025-11-24", 2, 250.0, BookingStatus::Confirmed, "2025-10-25"),
    ("Roberto Gialli", "Junior Suite", "2025-11-29", "2025-12-03", 4, 600.0, BookingStatus::Confirmed, "2025-10-24"),
    ("Chiara Blu", "Standard", "2025-12-12", "2025-12-13", 2, 90.0, BookingStatus::Cancelled, "2025-10-22"),
    ("Luca Viola", "Deluxe", "2025-12-14", "2025-12-17", 2, 380.0, BookingStatus::Confirmed, "2025-10-20"),
    ("Alessia Rossa", "Executive", "2025-12-18", "2025-12-21", 2, 300.0, BookingStatus::Confirmed, "2025-10-18"),
    ("Giulia Azzurra", "Junior Suite", "2025-12-10", "2025-12-15", 4, 700.0, BookingStatus::Pending, "2025-11-01"),
    ("Andrea Neri", "Suite", "2025-12-20", "2025-12-22", 2, 950.0, BookingStatus::Confirmed, "2025-10-30"),
    ("Marco Galli", "Standard", "2025-12-15", "2025-12-17", 2, 200.0, BookingStatus::Confirmed, "2025-11-02"),
    ("Paola Bruni", "Deluxe", "2025-12-23", "2025-12-26", 2, 420.0, BookingStatus::Confirmed, "2025-11-05"),
    ("Stefano Fabbri", "Executive", "2025-12-25", "2025-12-28", 2, 270.0, BookingStatus::Confirmed, "2025-11-02"),
    ("Pietro Riva", "Standard", "2025-12-20", "2025-12-24", 2, 300.0, BookingStatus::Confirmed, "2025-11-10"),
    ("Giada Rossi", "Deluxe", "2025-12-22", "2025-12-26", 2, 480.0, BookingStatus::Confirmed, "2025-11-12"),
    ("Valentina Grassi", "Executive", "2025-12-28", "2026-01-02", 2, 550.0, BookingStatus::Confirmed, "2025-11-15"),
];

/// Create the schema and seed it with the fixed dataset.
///
/// Idempotent: tables are created `IF NOT EXISTS` and seed rows are inserted
/// only when the table is empty, so calling this at every startup is safe.
pub async fn init(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS rooms (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            room_type TEXT NOT NULL UNIQUE,
            total_rooms INTEGER NOT NULL,
            capacity INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            guest_name TEXT NOT NULL,
            room_type TEXT NOT NULL,
            check_in DATE NOT NULL,
            check_out DATE NOT NULL,
            guests_count INTEGER NOT NULL,
            price REAL NOT NULL,
            status TEXT NOT NULL,
            booking_date DATE NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    let rooms: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rooms")
        .fetch_one(pool)
        .await?;
    if rooms == 0 {
        for &(room_type, total_rooms, capacity) in SEED_ROOMS {
            sqlx::query("INSERT INTO rooms (room_type, total_rooms, capacity) VALUES (?, ?, ?)")
                .bind(room_type)
                .bind(total_rooms)
                .bind(capacity)
                .execute(pool)
                .await?;
        }
        log::info!("Seeded {} room classes", SEED_ROOMS.len());
    }

    let bookings: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bookings")
        .fetch_one(pool)
        .await?;
    if bookings == 0 {
        for &(guest, room_type, check_in, check_out, guests, price, status, booked) in
            SEED_BOOKINGS
        {
            sqlx::query(
                r#"
                INSERT INTO bookings (
                    guest_name, room_type, check_in, check_out,
                    guests_count, price, status, booking_date
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(guest)
            .bind(room_type)
            .bind(check_in)
            .bind(check_out)
            .bind(guests)
            .bind(price)
            .bind(status)
            .bind(booked)
            .execute(pool)
            .await?;
        }
        log::info!("Seeded {} bookings", SEED_BOOKINGS.len());
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Record Store query surface. Every filter binds its parameters; user input
// never reaches the SQL text itself.
// ---------------------------------------------------------------------------

pub async fn room_classes(pool: &SqlitePool) -> Result<Vec<RoomClass>, sqlx::Error> {
    sqlx::query_as::<_, RoomClass>("SELECT * FROM rooms ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn room_class_by_name(
    pool: &SqlitePool,
    room_type: &str,
) -> Result<Option<RoomClass>, sqlx::Error> {
    sqlx::query_as::<_, RoomClass>("SELECT * FROM rooms WHERE room_type = ? COLLATE NOCASE")
        .bind(room_type)
        .fetch_optional(pool)
        .await
}

pub async fn all_bookings(pool: &SqlitePool) -> Result<Vec<Booking>, sqlx::Error> {
    sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn confirmed_bookings(pool: &SqlitePool) -> Result<Vec<Booking>, sqlx::Error> {
    sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE status = ? ORDER BY id")
        .bind(BookingStatus::Confirmed)
        .fetch_all(pool)
        .await
}

/// Count confirmed bookings of one room type whose stay strictly overlaps
/// the half-open window: `check_in < window_end AND check_out > window_start`.
pub async fn confirmed_overlapping_count(
    pool: &SqlitePool,
    room_type: &str,
    window_start: chrono::NaiveDate,
    window_end: chrono::NaiveDate,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT COUNT(*) FROM bookings
        WHERE room_type = ?
        AND status = ?
        AND check_in < ?
        AND check_out > ?
        "#,
    )
    .bind(room_type)
    .bind(BookingStatus::Confirmed)
    .bind(window_end)
    .bind(window_start)
    .fetch_one(pool)
    .await
}

/// Confirmed bookings for one guest, in booking-creation order. The name is
/// matched case-insensitively; callers normalize whitespace first.
pub async fn confirmed_bookings_for_guest(
    pool: &SqlitePool,
    guest_name: &str,
) -> Result<Vec<Booking>, sqlx::Error> {
    sqlx::query_as::<_, Booking>(
        r#"
        SELECT * FROM bookings
        WHERE guest_name = ? COLLATE NOCASE
        AND status = ?
        ORDER BY booking_date, id
        "#,
    )
    .bind(guest_name)
    .bind(BookingStatus::Confirmed)
    .fetch_all(pool)
    .await
}
