use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Booking lifecycle status. Stored as lowercase TEXT.
///
/// Only `Confirmed` bookings count towards occupancy, revenue and guest
/// aggregates; `Cancelled` and `Pending` rows are kept for the record but
/// excluded from every computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
    Pending,
}

#[derive(Debug, Serialize, Deserialize, Clone, FromRow)]
pub struct Booking {
    pub id: i64,
    pub guest_name: String,
    pub room_type: String,
    pub check_in: chrono::NaiveDate,
    pub check_out: chrono::NaiveDate,
    pub guests_count: i64,
    /// Flat price for the whole stay, not per night.
    pub price: f64,
    pub status: BookingStatus,
    pub booking_date: chrono::NaiveDate,
}

impl Booking {
    /// Length of the stay in nights. A same-day or inverted interval is a
    /// degenerate stay and counts as zero nights.
    pub fn stay_nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days().max(0)
    }
}
