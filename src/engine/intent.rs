use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

use super::dates::{month_number, month_window, DateResolver, MONTH_NAMES};

/// Known room classes, in seed order. Matching is a fixed vocabulary scan:
/// "Junior Suite" must come before "Suite" so the longer name wins, and a
/// new room class means extending this list.
pub const ROOM_TYPE_VOCABULARY: &[&str] =
    &["Standard", "Deluxe", "Executive", "Junior Suite", "Suite"];

const REVENUE_KEYWORDS: &[&str] = &["ricav", "incass", "fatturato", "revenue"];
const AVAILABILITY_KEYWORDS: &[&str] =
    &["disponibil", "liber", "occupazione", "available", "camere", "rooms"];
const NIGHTS_KEYWORDS: &[&str] = &["notti", "notte", "night"];
const GUEST_ROOM_TYPE_PHRASES: &[&str] =
    &["tipo di camera", "che camera", "quale camera", "room type"];

/// A classified question with its extracted parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Revenue {
        start: NaiveDate,
        end: NaiveDate,
    },
    Availability {
        start: NaiveDate,
        end: NaiveDate,
        room_type: Option<String>,
    },
    GuestNights {
        guest: String,
    },
    GuestRoomTypes {
        guest: String,
    },
    Unrecognized {
        reason: UnrecognizedReason,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnrecognizedReason {
    /// No keyword matched any known question shape.
    NoMatch,
    /// The question shape was recognized but its dates were not.
    UnparsableDates,
}

static DATE_FRAGMENT: LazyLock<Regex> = LazyLock::new(|| {
    let months = MONTH_NAMES.join("|");
    Regex::new(&format!(
        r"(?i)\b(?:\d{{4}}-\d{{2}}-\d{{2}}|\d{{1,2}}\s+(?:{months})\s+\d{{4}})\b"
    ))
    .unwrap()
});

static MONTH_NAME: LazyLock<Regex> = LazyLock::new(|| {
    let months = MONTH_NAMES.join("|");
    Regex::new(&format!(r"(?i)\b({months})\b")).unwrap()
});

static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(\d{4})\b").unwrap());

// Two consecutive title-case tokens. A heuristic, not a lookup: it can
// false-match on capitalized non-name words.
static NAME_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-ZÀ-Þ][a-zà-ÿ]+)\s+([A-ZÀ-Þ][a-zà-ÿ]+)\b").unwrap()
});

/// Classify a question into an [`Intent`], first match wins.
///
/// The priority order is part of the contract because one question can carry
/// keywords of several shapes (e.g. a revenue question that also mentions
/// rooms): revenue, then availability, then guest nights, then room types
/// for a guest.
pub fn route(text: &str, resolver: &dyn DateResolver, today: NaiveDate) -> Intent {
    let lower = text.to_lowercase();

    if contains_any(&lower, REVENUE_KEYWORDS) {
        return route_revenue(text, &lower, resolver);
    }

    if contains_any(&lower, AVAILABILITY_KEYWORDS) {
        return match window_from_fragments(text, resolver, today) {
            Some((start, end)) => Intent::Availability {
                start,
                end,
                room_type: extract_room_type(&lower),
            },
            None => Intent::Unrecognized {
                reason: UnrecognizedReason::UnparsableDates,
            },
        };
    }

    if contains_any(&lower, NIGHTS_KEYWORDS) {
        if let Some(guest) = extract_guest_name(text) {
            return Intent::GuestNights { guest };
        }
    }

    if GUEST_ROOM_TYPE_PHRASES.iter().any(|p| lower.contains(p)) {
        if let Some(guest) = extract_guest_name(text) {
            return Intent::GuestRoomTypes { guest };
        }
    }

    Intent::Unrecognized {
        reason: UnrecognizedReason::NoMatch,
    }
}

fn route_revenue(text: &str, lower: &str, resolver: &dyn DateResolver) -> Intent {
    let fragments = date_fragments(text);
    if fragments.len() >= 2 {
        let a = resolver.resolve(fragments[0]);
        let b = resolver.resolve(fragments[1]);
        if let (Some(a), Some(b)) = (a, b) {
            // Contract requires start <= end.
            return Intent::Revenue {
                start: a.min(b),
                end: a.max(b),
            };
        }
        return Intent::Unrecognized {
            reason: UnrecognizedReason::UnparsableDates,
        };
    }

    // A bare "dicembre 2025" defaults to the whole calendar month.
    if let Some((start, end)) = month_year_window(lower) {
        return Intent::Revenue { start, end };
    }

    Intent::Unrecognized {
        reason: UnrecognizedReason::UnparsableDates,
    }
}

fn contains_any(lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| lower.contains(k))
}

fn date_fragments(text: &str) -> Vec<&str> {
    DATE_FRAGMENT.find_iter(text).map(|m| m.as_str()).collect()
}

/// Availability window from zero, one or two date fragments. Zero fragments
/// default to a same-day window on `today`; a fragment that fails to
/// resolve yields `None`, so the caller asks for clarification instead of
/// guessing a window.
fn window_from_fragments(
    text: &str,
    resolver: &dyn DateResolver,
    today: NaiveDate,
) -> Option<(NaiveDate, NaiveDate)> {
    let fragments = date_fragments(text);
    if fragments.is_empty() {
        return Some((today, today));
    }
    let mut dates = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        dates.push(resolver.resolve(fragment)?);
    }
    match dates.as_slice() {
        [d] => Some((*d, *d)),
        [a, b, ..] => Some((*a.min(b), *a.max(b))),
        [] => None,
    }
}

fn month_year_window(lower: &str) -> Option<(NaiveDate, NaiveDate)> {
    let month = MONTH_NAME
        .captures(lower)
        .and_then(|c| month_number(&c[1]))?;
    let year: i32 = YEAR.captures(lower)?[1].parse().ok()?;
    month_window(year, month)
}

/// First room-class name found in the question, scanning the fixed
/// vocabulary in order, case-insensitive.
fn extract_room_type(lower: &str) -> Option<String> {
    ROOM_TYPE_VOCABULARY
        .iter()
        .find(|name| lower.contains(&name.to_lowercase()))
        .map(|name| name.to_string())
}

/// First name-like fragment: two consecutive title-case tokens, whitespace
/// normalized.
fn extract_guest_name(text: &str) -> Option<String> {
    NAME_PAIR
        .captures(text)
        .map(|c| format!("{} {}", &c[1], &c[2]))
}
