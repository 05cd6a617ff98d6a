//! Error types for civil-date handling.

/// Errors from building or parsing Gregorian dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Month index outside 0..=11.
    #[error("month index {0} out of range (expected 0-11)")]
    InvalidMonth(u32),
    /// Day does not exist in the given month.
    #[error("{year:04}-{month:02}-{day:02} is not a valid calendar date")]
    InvalidDate {
        /// Gregorian year.
        year: i32,
        /// 1-based month.
        month: u32,
        /// Day of month.
        day: u32,
    },
    /// Text could not be read as a `YYYY-MM-DD` date.
    #[error("cannot parse date: {0}")]
    DateParse(String),
    /// Day offset falls outside the representable date range.
    #[error("day offset {0} is outside the supported date range")]
    OffsetOutOfRange(i64),
}
