//! Gregorian month enumeration, day-of-year and weekday helpers.
//!
//! Months are 0-based (`0` = January) throughout the engine, matching the
//! form the record builder consumes. Conversion from human 1-based input
//! belongs to the caller.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::TimeError;

/// Number of months in a Gregorian year.
pub const MONTHS_PER_YEAR: u32 = 12;

fn check_month(month0: u32) -> Result<(), TimeError> {
    if month0 < MONTHS_PER_YEAR {
        Ok(())
    } else {
        Err(TimeError::InvalidMonth(month0))
    }
}

/// Build a date from a year, 0-based month and 1-based day.
pub fn civil_date(year: i32, month0: u32, day: u32) -> Result<NaiveDate, TimeError> {
    check_month(month0)?;
    NaiveDate::from_ymd_opt(year, month0 + 1, day).ok_or(TimeError::InvalidDate {
        year,
        month: month0 + 1,
        day,
    })
}

/// Build a date, rolling days past the end of the month into later months.
///
/// Day `0` is the last day of the previous month, so `(2024, 1, 30)` is
/// 2024-03-01 and `(2024, 2, 0)` is 2024-02-29.
pub fn civil_date_rolling(year: i32, month0: u32, day: u32) -> Result<NaiveDate, TimeError> {
    let first = civil_date(year, month0, 1)?;
    let rolled = match day {
        0 => first.checked_sub_days(Days::new(1)),
        _ => first.checked_add_days(Days::new(u64::from(day - 1))),
    };
    rolled.ok_or(TimeError::InvalidDate {
        year,
        month: month0 + 1,
        day,
    })
}

/// Whether `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Number of days in the given 0-based month.
pub fn days_in_month(year: i32, month0: u32) -> Result<u32, TimeError> {
    Ok(month_dates(year, month0)?.len() as u32)
}

/// Every date of the given 0-based month, ascending, one per day.
pub fn month_dates(year: i32, month0: u32) -> Result<Vec<NaiveDate>, TimeError> {
    let first = civil_date(year, month0, 1)?;
    Ok(first
        .iter_days()
        .take_while(|d| d.month0() == month0)
        .collect())
}

/// 0-based day of the year (January 1 = 0).
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal0()
}

/// Weekday number with Sunday = 0 .. Saturday = 6.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Gregorian year and 0-based month of a date.
pub fn year_and_month0(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month0())
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate, TimeError> {
    s.trim()
        .parse::<NaiveDate>()
        .map_err(|e| TimeError::DateParse(format!("{s:?}: {e}")))
}

/// Format a date as the `YYYY-MM-DD` key used to join records.
pub fn iso_date(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn civil_date_zero_based_month() {
        let d = civil_date(2024, 10, 1).unwrap();
        assert_eq!(iso_date(d), "2024-11-01");
    }

    #[test]
    fn civil_date_rejects_month_twelve() {
        assert_eq!(civil_date(2024, 12, 1), Err(TimeError::InvalidMonth(12)));
    }

    #[test]
    fn civil_date_rejects_feb_30() {
        assert_eq!(
            civil_date(2024, 1, 30),
            Err(TimeError::InvalidDate {
                year: 2024,
                month: 2,
                day: 30
            })
        );
    }

    #[test]
    fn rolling_day_past_month_end() {
        assert_eq!(iso_date(civil_date_rolling(2024, 1, 30).unwrap()), "2024-03-01");
        assert_eq!(iso_date(civil_date_rolling(2023, 1, 30).unwrap()), "2023-03-02");
        assert_eq!(iso_date(civil_date_rolling(2024, 11, 32).unwrap()), "2025-01-01");
    }

    #[test]
    fn rolling_day_zero_is_previous_month_end() {
        assert_eq!(iso_date(civil_date_rolling(2024, 2, 0).unwrap()), "2024-02-29");
        assert_eq!(iso_date(civil_date_rolling(2024, 0, 0).unwrap()), "2023-12-31");
    }

    #[test]
    fn rolling_in_range_matches_civil_date() {
        for day in 1..=31 {
            assert_eq!(civil_date_rolling(2024, 6, day), civil_date(2024, 6, day));
        }
        assert_eq!(civil_date_rolling(2024, 12, 1), Err(TimeError::InvalidMonth(12)));
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2025));
    }

    #[test]
    fn february_lengths() {
        assert_eq!(days_in_month(2024, 1).unwrap(), 29);
        assert_eq!(days_in_month(2025, 1).unwrap(), 28);
        assert_eq!(days_in_month(2100, 1).unwrap(), 28);
    }

    #[test]
    fn month_lengths_sum_to_year() {
        let total: u32 = (0..12).map(|m| days_in_month(2023, m).unwrap()).sum();
        assert_eq!(total, 365);
        let total: u32 = (0..12).map(|m| days_in_month(2024, m).unwrap()).sum();
        assert_eq!(total, 366);
    }

    #[test]
    fn month_dates_ascending_without_gaps() {
        let dates = month_dates(2024, 1).unwrap();
        assert_eq!(dates.len(), 29);
        assert_eq!(iso_date(dates[0]), "2024-02-01");
        assert_eq!(iso_date(dates[28]), "2024-02-29");
        for pair in dates.windows(2) {
            assert_eq!(pair[1].signed_duration_since(pair[0]).num_days(), 1);
        }
    }

    #[test]
    fn day_of_year_zero_based() {
        assert_eq!(day_of_year(civil_date(2024, 0, 1).unwrap()), 0);
        assert_eq!(day_of_year(civil_date(2024, 11, 31).unwrap()), 365);
        assert_eq!(day_of_year(civil_date(2023, 11, 31).unwrap()), 364);
    }

    #[test]
    fn weekday_sunday_is_zero() {
        // 2024-11-03 was a Sunday, 2024-11-01 a Friday
        assert_eq!(weekday_index(civil_date(2024, 10, 3).unwrap()), 0);
        assert_eq!(weekday_index(civil_date(2024, 10, 1).unwrap()), 5);
    }

    #[test]
    fn year_and_zero_based_month() {
        assert_eq!(year_and_month0(civil_date(2024, 10, 1).unwrap()), (2024, 10));
        assert_eq!(year_and_month0(civil_date(2045, 0, 14).unwrap()), (2045, 0));
    }

    #[test]
    fn parse_iso() {
        let d = parse_iso_date(" 2025-10-21 ").unwrap();
        assert_eq!(iso_date(d), "2025-10-21");
        assert!(matches!(
            parse_iso_date("21/10/2025"),
            Err(TimeError::DateParse(_))
        ));
    }
}
