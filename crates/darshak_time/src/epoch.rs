//! Whole-day offsets from the calendar's reference epoch.
//!
//! Every cyclic attribute in the engine is indexed by the signed number of
//! days between a date and [`REFERENCE_EPOCH`]. The arithmetic is exact
//! integer day counting over the proleptic Gregorian calendar; no floating
//! point is involved until the offset reaches the attribute calculators.

use chrono::{NaiveDate, TimeDelta};

use crate::error::TimeError;

/// Day zero: 2024-04-09, Chaitra Shukla Pratipada (Vikram Samvat 2081 new year).
pub const REFERENCE_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2024, 4, 9) {
    Some(d) => d,
    None => panic!("reference epoch must be a valid date"),
};

/// Signed whole days from [`REFERENCE_EPOCH`] to `date`.
///
/// Dates before the epoch give negative offsets.
pub fn day_offset(date: NaiveDate) -> i64 {
    date.signed_duration_since(REFERENCE_EPOCH).num_days()
}

/// Inverse of [`day_offset`].
pub fn date_from_offset(offset: i64) -> Result<NaiveDate, TimeError> {
    TimeDelta::try_days(offset)
        .and_then(|delta| REFERENCE_EPOCH.checked_add_signed(delta))
        .ok_or(TimeError::OffsetOutOfRange(offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn epoch_is_zero() {
        assert_eq!(day_offset(REFERENCE_EPOCH), 0);
    }

    #[test]
    fn next_day_is_one() {
        assert_eq!(day_offset(ymd(2024, 4, 10)), 1);
    }

    #[test]
    fn before_epoch_is_negative() {
        assert_eq!(day_offset(ymd(2024, 4, 8)), -1);
        assert_eq!(day_offset(ymd(2024, 1, 1)), -99);
    }

    #[test]
    fn spans_leap_day() {
        // 2024-02-28 .. 2024-03-01 crosses Feb 29
        assert_eq!(day_offset(ymd(2024, 3, 1)) - day_offset(ymd(2024, 2, 28)), 2);
        assert_eq!(day_offset(ymd(2023, 3, 1)) - day_offset(ymd(2023, 2, 28)), 1);
    }

    #[test]
    fn one_gregorian_year_later() {
        // 2024-04-09 -> 2025-04-09 does not contain a Feb 29
        assert_eq!(day_offset(ymd(2025, 4, 9)), 365);
    }

    #[test]
    fn roundtrip() {
        for offset in [-100_000, -1, 0, 1, 365, 36_524] {
            let date = date_from_offset(offset).unwrap();
            assert_eq!(day_offset(date), offset);
        }
    }

    #[test]
    fn offset_out_of_range() {
        assert_eq!(
            date_from_offset(i64::MAX),
            Err(TimeError::OffsetOutOfRange(i64::MAX))
        );
    }
}
