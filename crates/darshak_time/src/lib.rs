//! Civil-date handling for the darshak calendar engine.
//!
//! This crate provides:
//! - The reference epoch and exact whole-day offsets from it
//! - Gregorian month enumeration with 0-based month indices
//! - Day-of-year and Sunday-based weekday numbers
//! - ISO `YYYY-MM-DD` parsing and formatting

pub mod calendar;
pub mod epoch;
pub mod error;

pub use calendar::{
    MONTHS_PER_YEAR, civil_date, civil_date_rolling, day_of_year, days_in_month, is_leap_year,
    iso_date, month_dates, parse_iso_date, weekday_index, year_and_month0,
};
pub use chrono::NaiveDate;
pub use epoch::{REFERENCE_EPOCH, date_from_offset, day_offset};
pub use error::TimeError;
