//! Chaughadiya: eight equal portions of day and of night.
//!
//! Seven names repeat through the portions. The day run starts at
//! `(3 * weekday) mod 7` and steps forward by one; the night run starts at
//! `(5 + 3 * weekday) mod 7` and steps back by two. Night spans sunset to
//! the following sunrise, taken as this day's sunrise plus 24 hours.

use serde::{Deserialize, Serialize};

use crate::script::Named;
use crate::sun::SunTimes;
use crate::vaar::Vaar;

/// Portions per day or per night.
pub const CHAUGHADIYA_PORTIONS: usize = 8;

/// Number of distinct chaughadiya names.
pub const CHAUGHADIYA_COUNT: u8 = 7;

/// Chaughadiya names in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChaughadiyaName {
    Udveg,
    Char,
    Labh,
    Amrit,
    Kaal,
    Shubh,
    Rog,
}

/// All 7 names in cycle order (0 = Udveg).
pub const ALL_CHAUGHADIYA_NAMES: [ChaughadiyaName; 7] = [
    ChaughadiyaName::Udveg,
    ChaughadiyaName::Char,
    ChaughadiyaName::Labh,
    ChaughadiyaName::Amrit,
    ChaughadiyaName::Kaal,
    ChaughadiyaName::Shubh,
    ChaughadiyaName::Rog,
];

/// Whether a portion suits new undertakings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    Auspicious,
    Neutral,
    Inauspicious,
}

impl Named for Quality {
    fn name(self) -> &'static str {
        match self {
            Self::Auspicious => "Auspicious",
            Self::Neutral => "Neutral",
            Self::Inauspicious => "Inauspicious",
        }
    }

    fn devanagari(self) -> &'static str {
        match self {
            Self::Auspicious => "शुभ",
            Self::Neutral => "मध्यम",
            Self::Inauspicious => "अशुभ",
        }
    }
}

impl ChaughadiyaName {
    /// 0-based cycle index.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Name at a cycle index, taken modulo 7.
    pub const fn from_index(index: u8) -> Self {
        ALL_CHAUGHADIYA_NAMES[(index % CHAUGHADIYA_COUNT) as usize]
    }

    pub const fn quality(self) -> Quality {
        match self {
            Self::Amrit | Self::Shubh | Self::Labh => Quality::Auspicious,
            Self::Char => Quality::Neutral,
            Self::Udveg | Self::Kaal | Self::Rog => Quality::Inauspicious,
        }
    }
}

impl Named for ChaughadiyaName {
    fn name(self) -> &'static str {
        match self {
            Self::Udveg => "Udveg",
            Self::Char => "Char",
            Self::Labh => "Labh",
            Self::Amrit => "Amrit",
            Self::Kaal => "Kaal",
            Self::Shubh => "Shubh",
            Self::Rog => "Rog",
        }
    }

    fn devanagari(self) -> &'static str {
        match self {
            Self::Udveg => "उद्वेग",
            Self::Char => "चर",
            Self::Labh => "लाभ",
            Self::Amrit => "अमृत",
            Self::Kaal => "काल",
            Self::Shubh => "शुभ",
            Self::Rog => "रोग",
        }
    }
}

/// One portion of day or night.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChaughadiyaSlot {
    pub name: ChaughadiyaName,
    /// Start in decimal hours; night slots may exceed 24.
    pub start_hour: f64,
    pub end_hour: f64,
}

impl ChaughadiyaSlot {
    pub const fn quality(&self) -> Quality {
        self.name.quality()
    }
}

/// Day and night chaughadiya of one civil day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Chaughadiya {
    pub day: [ChaughadiyaSlot; CHAUGHADIYA_PORTIONS],
    pub night: [ChaughadiyaSlot; CHAUGHADIYA_PORTIONS],
}

/// Cycle index of the first day portion.
pub const fn day_start_index(vaar: Vaar) -> u8 {
    (3 * vaar.index()) % CHAUGHADIYA_COUNT
}

/// Cycle index of the first night portion.
pub const fn night_start_index(vaar: Vaar) -> u8 {
    (5 + 3 * vaar.index()) % CHAUGHADIYA_COUNT
}

// Stepping back by two is stepping forward by five, mod 7.
const DAY_STEP: u8 = 1;
const NIGHT_STEP: u8 = 5;

fn portions(
    start_index: u8,
    step: u8,
    from_hour: f64,
    to_hour: f64,
) -> [ChaughadiyaSlot; CHAUGHADIYA_PORTIONS] {
    let portion = (to_hour - from_hour) / CHAUGHADIYA_PORTIONS as f64;
    std::array::from_fn(|i| {
        let start_hour = from_hour + i as f64 * portion;
        ChaughadiyaSlot {
            name: ChaughadiyaName::from_index(start_index + step * i as u8),
            start_hour,
            end_hour: start_hour + portion,
        }
    })
}

/// Compute day and night chaughadiya for a weekday and its sun times.
pub fn chaughadiya_for(vaar: Vaar, sun: &SunTimes) -> Chaughadiya {
    let next_sunrise = sun.sunrise_hour + 24.0;
    Chaughadiya {
        day: portions(
            day_start_index(vaar),
            DAY_STEP,
            sun.sunrise_hour,
            sun.sunset_hour,
        ),
        night: portions(
            night_start_index(vaar),
            NIGHT_STEP,
            sun.sunset_hour,
            next_sunrise,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::format_clock_24;
    use crate::vaar::ALL_VAARS;
    use ChaughadiyaName::*;

    const EQUINOX: SunTimes = SunTimes {
        sunrise_hour: 6.0,
        sunset_hour: 18.0,
    };

    fn names(slots: &[ChaughadiyaSlot]) -> Vec<ChaughadiyaName> {
        slots.iter().map(|s| s.name).collect()
    }

    #[test]
    fn sunday_day_sequence() {
        let c = chaughadiya_for(Vaar::Ravivaar, &EQUINOX);
        assert_eq!(
            names(&c.day),
            [Udveg, Char, Labh, Amrit, Kaal, Shubh, Rog, Udveg]
        );
    }

    #[test]
    fn sunday_night_sequence() {
        let c = chaughadiya_for(Vaar::Ravivaar, &EQUINOX);
        assert_eq!(
            names(&c.night),
            [Shubh, Amrit, Char, Rog, Kaal, Labh, Udveg, Shubh]
        );
    }

    #[test]
    fn monday_starts_with_amrit() {
        let c = chaughadiya_for(Vaar::Somvaar, &EQUINOX);
        assert_eq!(c.day[0].name, Amrit);
        assert_eq!(c.night[0].name, Char);
    }

    #[test]
    fn day_and_night_bounds() {
        for vaar in ALL_VAARS {
            let c = chaughadiya_for(vaar, &EQUINOX);
            assert_eq!(c.day[0].start_hour, 6.0);
            assert_eq!(c.day[7].end_hour, 18.0);
            assert_eq!(c.night[0].start_hour, 18.0);
            assert_eq!(c.night[7].end_hour, 30.0);
            // first and last day portions share a name
            assert_eq!(c.day[0].name, c.day[7].name);
            assert_eq!(c.night[0].name, c.night[7].name);
        }
    }

    #[test]
    fn portions_are_contiguous() {
        let c = chaughadiya_for(Vaar::Budhvaar, &EQUINOX);
        for w in c.day.windows(2).chain(c.night.windows(2)) {
            assert_eq!(w[0].end_hour, w[1].start_hour);
        }
    }

    #[test]
    fn night_crosses_midnight() {
        let c = chaughadiya_for(Vaar::Ravivaar, &EQUINOX);
        // fourth night portion runs 22:30-24:00, fifth 00:00-01:30
        assert_eq!(format_clock_24(c.night[4].start_hour), "00:00");
        assert_eq!(format_clock_24(c.night[4].end_hour), "01:30");
    }

    #[test]
    fn quality_table() {
        assert_eq!(Amrit.quality(), Quality::Auspicious);
        assert_eq!(Char.quality(), Quality::Neutral);
        assert_eq!(Rog.quality(), Quality::Inauspicious);
        assert_eq!(Quality::Neutral.devanagari(), "मध्यम");
    }
}
