//! Types for per-day panchang records.
//!
//! JSON field names follow the downstream contract (`samvat`, `tithiNumber`,
//! `rahuKaal`, ...), not the Rust field names.

use darshak_panchang::Paksha;
use serde::Serialize;

/// Lunar half of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LunarHalf {
    /// Shukla paksha.
    Waxing,
    /// Krishna paksha.
    Waning,
}

impl From<Paksha> for LunarHalf {
    fn from(p: Paksha) -> Self {
        if p.is_waxing() {
            Self::Waxing
        } else {
            Self::Waning
        }
    }
}

/// A named table entry with its pre-formatted end label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedInterval {
    pub name: String,
    /// `"until hh:MM AM"`.
    #[serde(rename = "endTime")]
    pub end_time_label: String,
}

/// A muhurat window with formatted start and end times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MuhuratWindow {
    pub name: String,
    pub start: String,
    pub end: String,
}

/// Complete panchang of one civil day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayRecord {
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    /// Vikram Samvat year.
    #[serde(skip)]
    pub era_year: i32,
    /// Rendered era label, e.g. `"विक्रम संवत 2081"`.
    pub samvat: String,
    #[serde(rename = "masa")]
    pub lunar_month: String,
    /// `"<paksha>, <tithi>"`.
    #[serde(rename = "tithi")]
    pub lunar_day: String,
    /// 1-based tithi number within its paksha (1-15).
    #[serde(rename = "tithiNumber")]
    pub lunar_day_number: u8,
    #[serde(skip)]
    pub lunar_half: LunarHalf,
    pub paksha: String,
    /// Weekday name.
    pub vaar: String,
    #[serde(rename = "rashi")]
    pub zodiac: String,
    #[serde(rename = "nakshatra")]
    pub lunar_mansion: NamedInterval,
    pub yoga: NamedInterval,
    /// Both karanas of the tithi, comma-joined.
    pub karana: NamedInterval,
    pub sunrise: String,
    pub sunset: String,
    #[serde(rename = "rahuKaal")]
    pub rahu_kaal: MuhuratWindow,
    #[serde(rename = "gulikaKaal")]
    pub gulika_kaal: MuhuratWindow,
    pub yamagandam: MuhuratWindow,
    #[serde(rename = "abhijitMuhurat")]
    pub abhijit_muhurat: MuhuratWindow,
}
