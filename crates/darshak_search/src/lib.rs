//! Month panchang records and festival lookup.
//!
//! This crate provides:
//! - Per-day [`DayRecord`]s rendered in Devanagari or Latin
//! - Whole-month record building with 0-based month input
//! - Festival filtering by year and month, name search and a by-date index
//!
//! All functions are pure over static tables and safe to call from any
//! thread.

pub mod error;
pub mod festival;
pub(crate) mod festival_data;
pub mod festival_types;
pub mod panchang;
pub mod panchang_types;

pub use error::SearchError;
pub use festival::{
    DEVANAGARI_MONTHS, festivals_by_date, festivals_for, festivals_for_month,
    festivals_for_year, festivals_in, month_from_token, parse_festival_date, search_festivals,
};
pub use festival_types::{FestivalCategory, FestivalEntry};
pub use panchang::{
    CalendarConfig, build_month, build_month_using, build_month_with, chaughadiya_for_date,
    panchang_for_date, panchang_with, samvat_label,
};
pub use panchang_types::{DayRecord, LunarHalf, MuhuratWindow, NamedInterval};

/// Every entry of the curated festival table.
pub fn all_festivals() -> &'static [FestivalEntry] {
    festival_data::FESTIVALS
}
