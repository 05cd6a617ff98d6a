//! Panchang attribute tables and the deterministic day model.
//!
//! This crate provides:
//! - Name tables for tithi, nakshatra, yoga, karana, masa, vaar and rashi,
//!   each in Devanagari and Latin
//! - The calibrated linear progression behind [`AttributeProgression`]
//! - Masa and Vikram Samvat era year from cumulative tithis
//! - A sinusoidal sunrise/sunset model
//! - Rahu Kaal, Yamagandam, Gulika Kaal, Abhijit and Chaughadiya windows
//! - 24-hour and 12-hour clock formatting
//!
//! Everything here is pure and table-driven; no ephemeris is consulted.

pub mod chaughadiya;
pub mod clock;
pub mod error;
pub mod karana;
pub mod masa;
pub mod month_era;
pub mod muhurat;
pub mod nakshatra;
pub mod progression;
pub mod rashi;
pub mod script;
pub mod sun;
pub mod tithi;
pub mod vaar;
pub mod yoga;

pub use chaughadiya::{
    ALL_CHAUGHADIYA_NAMES, CHAUGHADIYA_PORTIONS, Chaughadiya, ChaughadiyaName, ChaughadiyaSlot,
    Quality, chaughadiya_for, day_start_index, night_start_index,
};
pub use clock::{ClockStyle, format_clock_12, format_clock_24, format_until};
pub use error::PanchangError;
pub use karana::{ALL_KARANAS, KARANA_COUNT, Karana, join_karanas, karanas_for_tithi};
pub use masa::{ALL_MASAS, MASA_COUNT, Masa};
pub use month_era::{BASE_ERA_YEAR, MonthEra, month_era_for, month_era_with};
pub use muhurat::{
    ALL_MUHURAT_KINDS, KAAL_WINDOW_HOURS, MuhuratKind, Muhurats, TimeWindow, abhijit_window,
    muhurats_for, offset_hours,
};
pub use nakshatra::{ALL_NAKSHATRAS, NAKSHATRA_COUNT, Nakshatra};
pub use progression::{
    AttributeProgression, Attributes, CALIBRATED, CyclePosition, LinearCycle, LinearProgression,
    NAKSHATRA_DURATION_DAYS, TITHI_DURATION_DAYS, YOGA_DURATION_DAYS, attributes_for,
    attributes_with,
};
pub use rashi::{ALL_RASHIS, RASHI_COUNT, Rashi, rashi_from_nakshatra_position};
pub use script::{Named, Script};
pub use sun::{SunTimes, sun_times_for, sun_times_for_day_of_year};
pub use tithi::{ALL_TITHIS, Paksha, TITHI_COUNT, TITHIS_PER_PAKSHA, Tithi};
pub use vaar::{ALL_VAARS, Vaar};
pub use yoga::{ALL_YOGAS, YOGA_COUNT, Yoga};
