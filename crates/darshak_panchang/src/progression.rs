//! Cyclic attribute progression: day offset → tithi, nakshatra, yoga, karana.
//!
//! Each attribute advances through its name table at a constant rate of one
//! entry per `duration_days`, starting from a base index at the reference
//! epoch. Negative offsets use floor semantics so the cycles run backwards
//! without discontinuity.

use crate::karana::{Karana, karanas_for_tithi};
use crate::nakshatra::{NAKSHATRA_COUNT, Nakshatra};
use crate::rashi::{Rashi, rashi_from_nakshatra_position};
use crate::tithi::{Paksha, TITHI_COUNT, Tithi};
use crate::yoga::{YOGA_COUNT, Yoga};

/// Position inside one cycle: current table index plus elapsed fraction of
/// that entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CyclePosition {
    /// 0-based index into the name table.
    pub index: u8,
    /// Elapsed fraction of the current entry, in `[0, 1)`.
    pub fraction: f64,
}

impl CyclePosition {
    /// Hours of the current entry already elapsed, `fraction * 24`.
    ///
    /// Rendered as the entry's "until" label.
    pub fn end_hours(&self) -> f64 {
        self.fraction * 24.0
    }
}

/// One constant-rate cycle over a name table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearCycle {
    /// Table index at day offset 0.
    pub base_index: u8,
    /// Days per table entry.
    pub duration_days: f64,
    /// Table length.
    pub len: u8,
}

impl LinearCycle {
    /// Fractional number of entries elapsed since the epoch.
    pub fn elapsed(&self, day_offset: i64) -> f64 {
        day_offset as f64 / self.duration_days
    }

    /// Position at a whole-day offset from the epoch.
    pub fn position(&self, day_offset: i64) -> CyclePosition {
        let elapsed = self.elapsed(day_offset);
        let len = f64::from(self.len);
        let index = (f64::from(self.base_index) + elapsed)
            .floor()
            .rem_euclid(len) as u8;
        let mut fraction = elapsed.rem_euclid(1.0);
        if fraction >= 1.0 {
            // rem_euclid rounds up for tiny negative inputs
            fraction = 0.0;
        }
        CyclePosition {
            index: index % self.len,
            fraction,
        }
    }
}

/// Source of cyclic panchang positions for a day offset.
///
/// The record builder only talks to this trait, so a model driven by real
/// lunar and solar longitudes can replace the linear one.
pub trait AttributeProgression {
    /// Tithi position.
    fn tithi(&self, day_offset: i64) -> CyclePosition;

    /// Nakshatra position.
    fn nakshatra(&self, day_offset: i64) -> CyclePosition;

    /// Yoga position.
    fn yoga(&self, day_offset: i64) -> CyclePosition;

    /// Fractional tithis elapsed since the epoch; drives masa and era year.
    fn lunar_days_elapsed(&self, day_offset: i64) -> f64;
}

/// Linear model with one [`LinearCycle`] per attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearProgression {
    pub tithi: LinearCycle,
    pub nakshatra: LinearCycle,
    pub yoga: LinearCycle,
}

/// Days per tithi in the calibrated model.
pub const TITHI_DURATION_DAYS: f64 = 0.98;
/// Days per nakshatra in the calibrated model.
pub const NAKSHATRA_DURATION_DAYS: f64 = 1.02;
/// Days per yoga in the calibrated model.
pub const YOGA_DURATION_DAYS: f64 = 0.95;

/// The model calibrated at 2024-04-09: Shukla Pratipada, Revati, Vaidhriti.
pub const CALIBRATED: LinearProgression = LinearProgression {
    tithi: LinearCycle {
        base_index: Tithi::ShuklaPratipada.index(),
        duration_days: TITHI_DURATION_DAYS,
        len: TITHI_COUNT,
    },
    nakshatra: LinearCycle {
        base_index: Nakshatra::Revati.index(),
        duration_days: NAKSHATRA_DURATION_DAYS,
        len: NAKSHATRA_COUNT,
    },
    yoga: LinearCycle {
        base_index: Yoga::Vaidhriti.index(),
        duration_days: YOGA_DURATION_DAYS,
        len: YOGA_COUNT,
    },
};

impl Default for LinearProgression {
    fn default() -> Self {
        CALIBRATED
    }
}

impl AttributeProgression for LinearProgression {
    fn tithi(&self, day_offset: i64) -> CyclePosition {
        self.tithi.position(day_offset)
    }

    fn nakshatra(&self, day_offset: i64) -> CyclePosition {
        self.nakshatra.position(day_offset)
    }

    fn yoga(&self, day_offset: i64) -> CyclePosition {
        self.yoga.position(day_offset)
    }

    fn lunar_days_elapsed(&self, day_offset: i64) -> f64 {
        self.tithi.elapsed(day_offset)
    }
}

/// All cyclic attributes of one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attributes {
    pub tithi: Tithi,
    pub paksha: Paksha,
    /// Tithi position; karanas share its fraction.
    pub tithi_position: CyclePosition,
    pub nakshatra: Nakshatra,
    pub nakshatra_position: CyclePosition,
    pub yoga: Yoga,
    pub yoga_position: CyclePosition,
    /// First and second karana of the tithi.
    pub karanas: [Karana; 2],
    /// Moon sign implied by the nakshatra position.
    pub rashi: Rashi,
}

/// Attributes at a day offset under the calibrated linear model.
pub fn attributes_for(day_offset: i64) -> Attributes {
    attributes_with(&CALIBRATED, day_offset)
}

/// Attributes at a day offset under any progression model.
pub fn attributes_with<P: AttributeProgression + ?Sized>(
    progression: &P,
    day_offset: i64,
) -> Attributes {
    let tithi_position = progression.tithi(day_offset);
    let nakshatra_position = progression.nakshatra(day_offset);
    let yoga_position = progression.yoga(day_offset);
    let tithi = Tithi::from_index(tithi_position.index);

    Attributes {
        tithi,
        paksha: tithi.paksha(),
        tithi_position,
        nakshatra: Nakshatra::from_index(nakshatra_position.index),
        nakshatra_position,
        yoga: Yoga::from_index(yoga_position.index),
        yoga_position,
        karanas: karanas_for_tithi(tithi.index()),
        rashi: rashi_from_nakshatra_position(
            f64::from(nakshatra_position.index) + nakshatra_position.fraction,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_yields_base_indices() {
        let a = attributes_for(0);
        assert_eq!(a.tithi, Tithi::ShuklaPratipada);
        assert_eq!(a.paksha, Paksha::Shukla);
        assert_eq!(a.nakshatra, Nakshatra::Revati);
        assert_eq!(a.yoga, Yoga::Vaidhriti);
        assert_eq!(a.karanas, [Karana::Bava, Karana::Balava]);
        assert_eq!(a.tithi_position.fraction, 0.0);
        assert_eq!(a.rashi, Rashi::Meena);
    }

    #[test]
    fn one_day_after_epoch() {
        let a = attributes_for(1);
        assert_eq!(a.tithi, Tithi::ShuklaDwitiya);
        // 1 / 1.02 < 1, still Revati
        assert_eq!(a.nakshatra, Nakshatra::Revati);
        // 26 + 1 / 0.95 wraps past the end of the table
        assert_eq!(a.yoga, Yoga::Vishkumbha);
    }

    #[test]
    fn one_day_before_epoch() {
        let a = attributes_for(-1);
        // floor(-1 / 0.98) = -2
        assert_eq!(a.tithi.index(), 28);
        assert_eq!(a.paksha, Paksha::Krishna);
        assert_eq!(a.nakshatra, Nakshatra::UttaraBhadrapada);
        assert_eq!(a.yoga, Yoga::Brahma);
    }

    #[test]
    fn indices_stay_in_range() {
        for d in -4000..4000 {
            let a = attributes_for(d);
            assert!(a.tithi_position.index < TITHI_COUNT, "offset {d}");
            assert!(a.nakshatra_position.index < NAKSHATRA_COUNT, "offset {d}");
            assert!(a.yoga_position.index < YOGA_COUNT, "offset {d}");
            for p in [a.tithi_position, a.nakshatra_position, a.yoga_position] {
                assert!((0.0..1.0).contains(&p.fraction), "offset {d}: {p:?}");
            }
        }
    }

    #[test]
    fn fraction_gives_end_hours() {
        // 1 / 0.98 = 1.0204..., fraction 0.0204 -> ~0.49 h
        let p = CALIBRATED.tithi.position(1);
        assert!((p.end_hours() - 0.4898).abs() < 1e-3);
    }

    #[test]
    fn waxing_iff_first_fifteen() {
        for d in 0..60 {
            let a = attributes_for(d);
            assert_eq!(a.paksha.is_waxing(), a.tithi.index() < 15);
        }
    }

    #[test]
    fn custom_progression_through_trait() {
        struct Fixed;
        impl AttributeProgression for Fixed {
            fn tithi(&self, _: i64) -> CyclePosition {
                CyclePosition { index: 14, fraction: 0.5 }
            }
            fn nakshatra(&self, _: i64) -> CyclePosition {
                CyclePosition { index: 0, fraction: 0.0 }
            }
            fn yoga(&self, _: i64) -> CyclePosition {
                CyclePosition { index: 3, fraction: 0.25 }
            }
            fn lunar_days_elapsed(&self, _: i64) -> f64 {
                0.0
            }
        }
        let a = attributes_with(&Fixed, 12345);
        assert_eq!(a.tithi, Tithi::Purnima);
        assert_eq!(a.nakshatra, Nakshatra::Ashwini);
        assert_eq!(a.rashi, Rashi::Mesha);
        assert_eq!(a.yoga, Yoga::Saubhagya);
        // 2 * 14 = 28, 28 mod 11 = 6
        assert_eq!(a.karanas, [Karana::Vishti, Karana::Shakuni]);
    }

    #[test]
    fn default_is_calibrated() {
        assert_eq!(LinearProgression::default(), CALIBRATED);
    }
}
