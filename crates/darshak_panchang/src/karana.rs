//! Karana (half-tithi) table.
//!
//! Each tithi spans two karanas. This engine walks the 11 karana names as a
//! single cycle: tithi `t` maps to slots `2t mod 11` and `(2t + 1) mod 11`.

use serde::{Deserialize, Serialize};

use crate::script::{Named, Script};

/// Number of karana names.
pub const KARANA_COUNT: u8 = 11;

/// The 11 karanas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Gara,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

/// All 11 karanas in order (0 = Bava).
pub const ALL_KARANAS: [Karana; 11] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Gara,
    Karana::Vanija,
    Karana::Vishti,
    Karana::Shakuni,
    Karana::Chatushpada,
    Karana::Naga,
    Karana::Kimstughna,
];

impl Karana {
    /// 0-based index (Bava=0 .. Kimstughna=10).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Karana at a 0-based index, taken modulo 11.
    pub const fn from_index(index: u8) -> Self {
        ALL_KARANAS[(index % KARANA_COUNT) as usize]
    }
}

impl Named for Karana {
    fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Gara => "Gara",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    fn devanagari(self) -> &'static str {
        match self {
            Self::Bava => "बव",
            Self::Balava => "बालव",
            Self::Kaulava => "कौलव",
            Self::Taitila => "तैतिल",
            Self::Gara => "गर",
            Self::Vanija => "वणिज",
            Self::Vishti => "विष्टि",
            Self::Shakuni => "शकुनि",
            Self::Chatushpada => "चतुष्पाद",
            Self::Naga => "नाग",
            Self::Kimstughna => "किंस्तुघ्न",
        }
    }
}

/// Both karanas of a 0-based tithi index, first half then second half.
pub const fn karanas_for_tithi(tithi_index: u8) -> [Karana; 2] {
    let base = (tithi_index as u16 * 2) % KARANA_COUNT as u16;
    [
        Karana::from_index(base as u8),
        Karana::from_index(base as u8 + 1),
    ]
}

/// Comma-joined names of a karana pair, e.g. `"Bava, Balava"`.
pub fn join_karanas(pair: [Karana; 2], script: Script) -> String {
    format!("{}, {}", pair[0].label(script), pair[1].label(script))
}
