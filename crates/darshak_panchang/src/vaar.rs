//! Vaar (weekday) enumeration, Sunday first.

use serde::{Deserialize, Serialize};

use crate::script::Named;

/// Weekday, numbered Sunday = 0 .. Saturday = 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vaar {
    Ravivaar,
    Somvaar,
    Mangalvaar,
    Budhvaar,
    Guruvaar,
    Shukravaar,
    Shanivaar,
}

/// All 7 vaars in order (0 = Ravivaar / Sunday).
pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivaar,
    Vaar::Somvaar,
    Vaar::Mangalvaar,
    Vaar::Budhvaar,
    Vaar::Guruvaar,
    Vaar::Shukravaar,
    Vaar::Shanivaar,
];

impl Vaar {
    /// 0-based index with Sunday = 0.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Vaar from a Sunday-based weekday number, taken modulo 7.
    pub const fn from_index(index: u8) -> Self {
        ALL_VAARS[(index % 7) as usize]
    }

    /// Vaar of a calendar date.
    pub fn of(date: darshak_time::NaiveDate) -> Self {
        Self::from_index(darshak_time::weekday_index(date))
    }

    /// English weekday name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Sunday",
            Self::Somvaar => "Monday",
            Self::Mangalvaar => "Tuesday",
            Self::Budhvaar => "Wednesday",
            Self::Guruvaar => "Thursday",
            Self::Shukravaar => "Friday",
            Self::Shanivaar => "Saturday",
        }
    }
}

impl Named for Vaar {
    fn name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Ravivaar",
            Self::Somvaar => "Somvaar",
            Self::Mangalvaar => "Mangalvaar",
            Self::Budhvaar => "Budhvaar",
            Self::Guruvaar => "Guruvaar",
            Self::Shukravaar => "Shukravaar",
            Self::Shanivaar => "Shanivaar",
        }
    }

    fn devanagari(self) -> &'static str {
        match self {
            Self::Ravivaar => "रविवार",
            Self::Somvaar => "सोमवार",
            Self::Mangalvaar => "मंगलवार",
            Self::Budhvaar => "बुधवार",
            Self::Guruvaar => "गुरुवार",
            Self::Shukravaar => "शुक्रवार",
            Self::Shanivaar => "शनिवार",
        }
    }
}
