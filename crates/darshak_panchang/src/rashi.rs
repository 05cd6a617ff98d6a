//! Rashi (zodiac sign) table and the Moon sign implied by the nakshatra cycle.
//!
//! Twelve rashis share the same circle as 27 nakshatras, so each rashi
//! covers 2¼ nakshatras (nine padas).

use serde::{Deserialize, Serialize};

use crate::nakshatra::NAKSHATRA_COUNT;
use crate::script::Named;

/// Number of rashis.
pub const RASHI_COUNT: u8 = 12;

/// The 12 rashis from Mesha to Meena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rashi at a 0-based index, taken modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_RASHIS[(index % RASHI_COUNT) as usize]
    }
}

impl Named for Rashi {
    fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    fn devanagari(self) -> &'static str {
        match self {
            Self::Mesha => "मेष",
            Self::Vrishabha => "वृषभ",
            Self::Mithuna => "मिथुन",
            Self::Karka => "कर्क",
            Self::Simha => "सिंह",
            Self::Kanya => "कन्या",
            Self::Tula => "तुला",
            Self::Vrischika => "वृश्चिक",
            Self::Dhanu => "धनु",
            Self::Makara => "मकर",
            Self::Kumbha => "कुम्भ",
            Self::Meena => "मीन",
        }
    }
}

/// Rashi containing a fractional position on the nakshatra cycle.
///
/// `nakshatra_position` is `index + fraction` in `[0, 27)`; values outside
/// the range wrap.
pub fn rashi_from_nakshatra_position(nakshatra_position: f64) -> Rashi {
    let pos = nakshatra_position.rem_euclid(NAKSHATRA_COUNT as f64);
    let idx = (pos * RASHI_COUNT as f64 / NAKSHATRA_COUNT as f64).floor() as u8;
    Rashi::from_index(idx)
}
