use chrono::NaiveDate;

use crate::models::{Booking, BookingStatus};

/// Nights of a stay falling inside the half-open window
/// `[window_start, window_end)`. Never negative.
fn overlap_nights(booking: &Booking, window_start: NaiveDate, window_end: NaiveDate) -> i64 {
    let start = booking.check_in.max(window_start);
    let end = booking.check_out.min(window_end);
    (end - start).num_days().max(0)
}

/// Share of a booking's flat stay price earned inside the window, assuming a
/// uniform nightly rate. A stay fully inside the window yields the full
/// price; a disjoint or degenerate stay yields exactly zero.
pub fn contribution(booking: &Booking, window_start: NaiveDate, window_end: NaiveDate) -> f64 {
    if booking.status != BookingStatus::Confirmed {
        return 0.0;
    }
    let stay = booking.stay_nights();
    if stay == 0 {
        return 0.0;
    }
    let overlap = overlap_nights(booking, window_start, window_end);
    booking.price * overlap as f64 / stay as f64
}

/// Confirmed revenue apportioned to `[window_start, window_end)`, summed
/// over all bookings. Unrounded; display rounding happens at the reply
/// boundary only.
pub fn window_revenue(bookings: &[Booking], window_start: NaiveDate, window_end: NaiveDate) -> f64 {
    bookings
        .iter()
        .map(|b| contribution(b, window_start, window_end))
        .sum()
}
