pub mod availability;
pub mod dates;
pub mod guest;
pub mod intent;
pub mod revenue;

use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;
use thiserror::Error;

use crate::db;
use dates::{DateResolver, ItalianDateResolver};
use intent::{Intent, UnrecognizedReason};

/// Failures the engine cannot turn into a normal reply. Parse failures and
/// empty results are replies, not errors; only the store can fail here.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("store unavailable: {0}")]
    Store(#[from] sqlx::Error),
}

const CLARIFICATION_REPLY: &str = "Sorry, I did not understand the question. \
You can ask about confirmed revenue for a period, room availability, or a \
guest's nights and room types.";

const BAD_DATES_REPLY: &str = "I could not parse the dates in the question. \
Try ISO dates like 2025-12-01, or a month and year like \"dicembre 2025\".";

/// Answer a free-text question against the booking store.
pub async fn answer(pool: &SqlitePool, question: &str) -> Result<String, EngineError> {
    answer_with(pool, question, &ItalianDateResolver, Utc::now().date_naive()).await
}

/// Same as [`answer`] with an injected resolver and reference date, so tests
/// can pin "today".
pub async fn answer_with(
    pool: &SqlitePool,
    question: &str,
    resolver: &dyn DateResolver,
    today: NaiveDate,
) -> Result<String, EngineError> {
    let intent = intent::route(question, resolver, today);
    log::debug!("routed {question:?} to {intent:?}");

    match intent {
        Intent::Revenue { start, end } => {
            let bookings = db::confirmed_bookings(pool).await?;
            let amount = revenue::window_revenue(&bookings, start, end);
            Ok(format!(
                "confirmed revenue from {start} to {end}: {amount:.2} €"
            ))
        }
        Intent::Availability {
            start,
            end,
            room_type,
        } => {
            let rows = availability::availability(pool, start, end, room_type.as_deref()).await?;
            let lines: Vec<String> = rows
                .iter()
                .map(|r| format!("{} available: {}", r.room_type, r.free))
                .collect();
            Ok(lines.join("\n"))
        }
        Intent::GuestNights { guest } => match guest::nights_for_guest(pool, &guest).await? {
            Some(nights) => Ok(format!("{guest} booked {nights} confirmed nights")),
            None => Ok(no_bookings_reply(&guest)),
        },
        Intent::GuestRoomTypes { guest } => {
            let types = guest::room_types_for_guest(pool, &guest).await?;
            if types.is_empty() {
                Ok(no_bookings_reply(&guest))
            } else {
                Ok(format!("{guest} booked room types: {}", types.join(", ")))
            }
        }
        Intent::Unrecognized { reason } => Ok(match reason {
            UnrecognizedReason::NoMatch => CLARIFICATION_REPLY.to_string(),
            UnrecognizedReason::UnparsableDates => BAD_DATES_REPLY.to_string(),
        }),
    }
}

fn no_bookings_reply(guest: &str) -> String {
    format!("no confirmed bookings found for {guest}")
}
