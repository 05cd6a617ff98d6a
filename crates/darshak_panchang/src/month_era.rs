//! Masa and Vikram Samvat era year from cumulative tithi progression.
//!
//! A lunar month is 30 tithis and a lunar year 12 such months, so both
//! derive from the fractional tithi count since the epoch. Month boundaries
//! do not line up with Gregorian months.

use serde::{Deserialize, Serialize};

use crate::masa::{MASA_COUNT, Masa};
use crate::progression::{AttributeProgression, CALIBRATED};
use crate::tithi::TITHI_COUNT;

/// Masa index at the epoch (Chaitra).
pub const BASE_MASA_INDEX: u8 = Masa::Chaitra.index();

/// Vikram Samvat year at the epoch.
pub const BASE_ERA_YEAR: i32 = 2081;

/// Tithis per lunar year.
pub const TITHIS_PER_YEAR: f64 = TITHI_COUNT as f64 * MASA_COUNT as f64;

/// Lunar month and era year of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthEra {
    pub masa: Masa,
    /// Vikram Samvat year.
    pub era_year: i32,
}

/// Month and era at a day offset under the calibrated model.
pub fn month_era_for(day_offset: i64) -> MonthEra {
    month_era_with(&CALIBRATED, day_offset)
}

/// Month and era at a day offset under any progression model.
pub fn month_era_with<P: AttributeProgression + ?Sized>(
    progression: &P,
    day_offset: i64,
) -> MonthEra {
    let lunar_days = progression.lunar_days_elapsed(day_offset);
    let months = lunar_days / f64::from(TITHI_COUNT);
    let masa_index = (f64::from(BASE_MASA_INDEX) + months)
        .floor()
        .rem_euclid(f64::from(MASA_COUNT)) as u8;
    let era_year = BASE_ERA_YEAR + (lunar_days / TITHIS_PER_YEAR).floor() as i32;

    MonthEra {
        masa: Masa::from_index(masa_index),
        era_year,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_chaitra_2081() {
        let me = month_era_for(0);
        assert_eq!(me.masa, Masa::Chaitra);
        assert_eq!(me.era_year, 2081);
    }

    #[test]
    fn month_turns_after_thirty_tithis() {
        // 29 / 0.98 = 29.59 tithis, 30 / 0.98 = 30.61
        assert_eq!(month_era_for(29).masa, Masa::Chaitra);
        assert_eq!(month_era_for(30).masa, Masa::Vaishakha);
    }

    #[test]
    fn year_turns_after_360_tithis() {
        // 352 / 0.98 = 359.18, 353 / 0.98 = 360.20
        let before = month_era_for(352);
        assert_eq!(before.masa, Masa::Phalguna);
        assert_eq!(before.era_year, 2081);
        let after = month_era_for(353);
        assert_eq!(after.masa, Masa::Chaitra);
        assert_eq!(after.era_year, 2082);
    }

    #[test]
    fn day_before_epoch_is_previous_year() {
        let me = month_era_for(-1);
        assert_eq!(me.masa, Masa::Phalguna);
        assert_eq!(me.era_year, 2080);
    }

    #[test]
    fn five_lunar_years_in_1764_days() {
        // 5 * 360 * 0.98 = 1764
        for d in (-3000..3000).step_by(7) {
            let a = month_era_for(d);
            let b = month_era_for(d + 1764);
            assert_eq!(b.era_year - a.era_year, 5, "offset {d}");
        }
    }
}
