//! Sinusoidal sunrise/sunset model for a single fixed location (New Delhi).
//!
//! `s = sin((day_of_year - 80) * 2π / 365.25)`, sunrise `6 - s`, sunset
//! `18 + s`, in local decimal hours. Daylight peaks near the June solstice
//! and the two times are always symmetric about noon.

use std::f64::consts::TAU;

use darshak_time::{NaiveDate, day_of_year};
use serde::{Deserialize, Serialize};

/// Mean tropical year length used by the seasonal term.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// 0-based day of year at which the seasonal term crosses zero.
pub const EQUINOX_DAY_OF_YEAR: f64 = 80.0;

/// Sunrise and sunset as decimal hours of local clock time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunTimes {
    pub sunrise_hour: f64,
    pub sunset_hour: f64,
}

impl SunTimes {
    /// Hours of daylight.
    pub fn day_length(&self) -> f64 {
        self.sunset_hour - self.sunrise_hour
    }

    /// Hours from sunset to the following sunrise, assuming the next day's
    /// sunrise matches this one.
    pub fn night_length(&self) -> f64 {
        24.0 - self.day_length()
    }
}

/// Sun times for a 0-based day of year.
pub fn sun_times_for_day_of_year(day_of_year: u32) -> SunTimes {
    let s = ((f64::from(day_of_year) - EQUINOX_DAY_OF_YEAR) * TAU / DAYS_PER_YEAR).sin();
    SunTimes {
        sunrise_hour: 6.0 - s,
        sunset_hour: 18.0 + s,
    }
}

/// Sun times for a calendar date.
pub fn sun_times_for(date: NaiveDate) -> SunTimes {
    sun_times_for_day_of_year(day_of_year(date))
}
