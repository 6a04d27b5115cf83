use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// Italian month names, calendar order.
pub const MONTH_NAMES: &[&str] = &[
    "gennaio",
    "febbraio",
    "marzo",
    "aprile",
    "maggio",
    "giugno",
    "luglio",
    "agosto",
    "settembre",
    "ottobre",
    "novembre",
    "dicembre",
];

static DAY_MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(\d{1,2})\s+([a-zà-ù]+)\s+(\d{4})\s*$").unwrap()
});

/// Turns a free-text date fragment into a calendar date.
///
/// Treated as an external collaborator by the router: the engine only relies
/// on this contract, not on any particular grammar.
pub trait DateResolver {
    fn resolve(&self, text: &str) -> Option<NaiveDate>;
}

/// Resolver for the two forms the hotel's guests actually write: ISO
/// (`2025-12-25`) and spelled-out Italian (`25 dicembre 2025`).
pub struct ItalianDateResolver;

impl DateResolver for ItalianDateResolver {
    fn resolve(&self, text: &str) -> Option<NaiveDate> {
        let text = text.trim();
        if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            return Some(date);
        }
        let caps = DAY_MONTH_YEAR.captures(text)?;
        let day: u32 = caps[1].parse().ok()?;
        let month = month_number(&caps[2])?;
        let year: i32 = caps[3].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

/// 1-based month number for an Italian month name, case-insensitive.
pub fn month_number(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|m| *m == lower)
        .map(|i| i as u32 + 1)
}

/// First and last day of a calendar month, the default window for a
/// "revenue for <month> <year>" question.
pub fn month_window(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, next_first.pred_opt()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn resolves_iso_dates() {
        assert_eq!(ItalianDateResolver.resolve("2025-12-25"), Some(d(2025, 12, 25)));
        assert_eq!(ItalianDateResolver.resolve(" 2025-01-02 "), Some(d(2025, 1, 2)));
    }

    #[test]
    fn resolves_italian_dates() {
        assert_eq!(ItalianDateResolver.resolve("25 dicembre 2025"), Some(d(2025, 12, 25)));
        assert_eq!(ItalianDateResolver.resolve("1 Gennaio 2026"), Some(d(2026, 1, 1)));
    }

    #[test]
    fn rejects_garbage_and_impossible_dates() {
        assert_eq!(ItalianDateResolver.resolve("domani"), None);
        assert_eq!(ItalianDateResolver.resolve("32 dicembre 2025"), None);
        assert_eq!(ItalianDateResolver.resolve("10 fritto 2025"), None);
    }

    #[test]
    fn month_window_covers_whole_month() {
        assert_eq!(month_window(2025, 12), Some((d(2025, 12, 1), d(2025, 12, 31))));
        assert_eq!(month_window(2025, 2), Some((d(2025, 2, 1), d(2025, 2, 28))));
        assert_eq!(month_window(2024, 2), Some((d(2024, 2, 1), d(2024, 2, 29))));
    }
}
