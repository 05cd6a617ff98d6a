//! Festival lookup over the static table.
//!
//! Table dates read `"<month> <day>, <year>"` with a Devanagari month name.
//! English month names and ISO `YYYY-MM-DD` are accepted as fallbacks.
//! Entries whose date cannot be read never match any query.

use std::collections::BTreeMap;

use darshak_time::{NaiveDate, civil_date_rolling, iso_date, parse_iso_date, year_and_month0};
use tracing::debug;

use crate::festival_data::FESTIVALS;
use crate::festival_types::FestivalEntry;

/// Devanagari month names as written in the table, January first.
pub const DEVANAGARI_MONTHS: [&str; 12] = [
    "जनवरी",
    "फरवरी",
    "मार्च",
    "अप्रैल",
    "मई",
    "जून",
    "जुलाई",
    "अगस्त",
    "सितंबर",
    "अक्टूबर",
    "नवंबर",
    "दिसंबर",
];

const ENGLISH_MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// 0-based month of a Devanagari or English month token.
///
/// English names match case-insensitively, in full or as a three-letter
/// abbreviation.
pub fn month_from_token(token: &str) -> Option<u32> {
    if let Some(i) = DEVANAGARI_MONTHS.iter().position(|m| *m == token) {
        return Some(i as u32);
    }
    let lower = token.trim_end_matches('.').to_lowercase();
    if lower.len() < 3 {
        return None;
    }
    ENGLISH_MONTHS
        .iter()
        .position(|m| *m == lower || (lower.len() == 3 && m.starts_with(&lower)))
        .map(|i| i as u32)
}

/// Parse a table date string into a civil date.
///
/// A day past the end of its month rolls forward, so `"फरवरी 30, 2024"` reads
/// as 2024-03-01.
pub fn parse_festival_date(s: &str) -> Option<NaiveDate> {
    let cleaned = s.replace(',', "");
    let parts: Vec<&str> = cleaned.split_whitespace().collect();
    if let [month, day, year] = parts.as_slice() {
        let parsed = (
            month_from_token(month),
            day.parse::<u32>(),
            year.parse::<i32>(),
        );
        if let (Some(month0), Ok(day), Ok(year)) = parsed {
            return civil_date_rolling(year, month0, day).ok();
        }
    }
    parse_iso_date(s).ok()
}

/// Entries of `table` in `year`, optionally restricted to a 0-based month.
///
/// Table order is preserved.
pub fn festivals_in(
    table: &[FestivalEntry],
    year: i32,
    month0: Option<u32>,
) -> Vec<FestivalEntry> {
    table
        .iter()
        .filter(|f| match parse_festival_date(f.date) {
            Some(date) => {
                let (y, m0) = year_and_month0(date);
                y == year && month0.is_none_or(|m| m == m0)
            }
            None => {
                debug!(name = f.name, date = f.date, "skipping festival with unreadable date");
                false
            }
        })
        .copied()
        .collect()
}

/// Festivals in `year`, optionally restricted to a 0-based month.
pub fn festivals_for(year: i32, month0: Option<u32>) -> Vec<FestivalEntry> {
    let found = festivals_in(FESTIVALS, year, month0);
    debug!(year, ?month0, count = found.len(), "festival lookup");
    found
}

/// Festivals of one 0-based month.
pub fn festivals_for_month(year: i32, month0: u32) -> Vec<FestivalEntry> {
    festivals_for(year, Some(month0))
}

/// Festivals of one year.
pub fn festivals_for_year(year: i32) -> Vec<FestivalEntry> {
    festivals_for(year, None)
}

/// Case-insensitive substring search on festival names.
///
/// A blank term returns the whole table.
pub fn search_festivals(term: &str) -> Vec<FestivalEntry> {
    let needle = term.trim().to_lowercase();
    FESTIVALS
        .iter()
        .filter(|f| needle.is_empty() || f.name.to_lowercase().contains(&needle))
        .copied()
        .collect()
}

/// Group festival names by ISO date, skipping unreadable dates.
pub fn festivals_by_date(entries: &[FestivalEntry]) -> BTreeMap<String, Vec<&'static str>> {
    let mut by_date: BTreeMap<String, Vec<&'static str>> = BTreeMap::new();
    for f in entries {
        if let Some(date) = parse_festival_date(f.date) {
            by_date.entry(iso_date(date)).or_default().push(f.name);
        }
    }
    by_date
}
