//! Clock-time formatting over decimal hours.
//!
//! Minutes round to nearest and the result wraps modulo 24 hours, so `25.5`
//! formats as `01:30` and `-0.5` as `23:30`.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PanchangError;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Minutes past midnight after rounding and wrapping.
fn minutes_of_day(hours: f64) -> i64 {
    ((hours * 60.0).round() as i64).rem_euclid(MINUTES_PER_DAY)
}

/// `HH:MM` on a 24-hour clock.
pub fn format_clock_24(hours: f64) -> String {
    let m = minutes_of_day(hours);
    format!("{:02}:{:02}", m / 60, m % 60)
}

/// `hh:MM AM|PM` on a 12-hour clock. Midnight is `12:00 AM`, noon `12:00 PM`.
pub fn format_clock_12(hours: f64) -> String {
    let m = minutes_of_day(hours);
    let h24 = m / 60;
    let period = if h24 < 12 { "AM" } else { "PM" };
    let h12 = match h24 % 12 {
        0 => 12,
        h => h,
    };
    format!("{:02}:{:02} {}", h12, m % 60, period)
}

/// `until hh:MM AM` end-time label.
pub fn format_until(hours: f64) -> String {
    format!("until {}", format_clock_12(hours))
}

/// Clock convention for rendered times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ClockStyle {
    #[default]
    #[serde(rename = "24h")]
    H24,
    #[serde(rename = "12h")]
    H12,
}

impl ClockStyle {
    /// Format decimal hours in this style.
    pub fn format(self, hours: f64) -> String {
        match self {
            Self::H24 => format_clock_24(hours),
            Self::H12 => format_clock_12(hours),
        }
    }
}

impl Display for ClockStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::H24 => f.write_str("24h"),
            Self::H12 => f.write_str("12h"),
        }
    }
}

impl FromStr for ClockStyle {
    type Err = PanchangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "24h" | "24" | "h24" => Ok(Self::H24),
            "12h" | "12" | "h12" | "ampm" => Ok(Self::H12),
            _ => Err(PanchangError::UnknownClockStyle(s.to_string())),
        }
    }
}
