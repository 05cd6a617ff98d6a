//! Masa (lunar month) table, Chaitra-first order.

use serde::{Deserialize, Serialize};

use crate::script::Named;

/// Number of lunar months in the cycle.
pub const MASA_COUNT: u8 = 12;

/// The 12 lunar months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Masa {
    Chaitra,
    Vaishakha,
    Jyeshtha,
    Ashadha,
    Shravana,
    Bhadrapada,
    Ashvina,
    Kartika,
    Margashirsha,
    Pausha,
    Magha,
    Phalguna,
}

/// All 12 masas in order (0 = Chaitra).
pub const ALL_MASAS: [Masa; 12] = [
    Masa::Chaitra,
    Masa::Vaishakha,
    Masa::Jyeshtha,
    Masa::Ashadha,
    Masa::Shravana,
    Masa::Bhadrapada,
    Masa::Ashvina,
    Masa::Kartika,
    Masa::Margashirsha,
    Masa::Pausha,
    Masa::Magha,
    Masa::Phalguna,
];

impl Masa {
    /// 0-based index (Chaitra=0 .. Phalguna=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Masa at a 0-based index, taken modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_MASAS[(index % MASA_COUNT) as usize]
    }
}

impl Named for Masa {
    fn name(self) -> &'static str {
        match self {
            Self::Chaitra => "Chaitra",
            Self::Vaishakha => "Vaishakha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Ashadha => "Ashadha",
            Self::Shravana => "Shravana",
            Self::Bhadrapada => "Bhadrapada",
            Self::Ashvina => "Ashvina",
            Self::Kartika => "Kartika",
            Self::Margashirsha => "Margashirsha",
            Self::Pausha => "Pausha",
            Self::Magha => "Magha",
            Self::Phalguna => "Phalguna",
        }
    }

    fn devanagari(self) -> &'static str {
        match self {
            Self::Chaitra => "चैत्र",
            Self::Vaishakha => "वैशाख",
            Self::Jyeshtha => "ज्येष्ठ",
            Self::Ashadha => "आषाढ़",
            Self::Shravana => "श्रावण",
            Self::Bhadrapada => "भाद्रपद",
            Self::Ashvina => "आश्विन",
            Self::Kartika => "कार्तिक",
            Self::Margashirsha => "मार्गशीर्ष",
            Self::Pausha => "पौष",
            Self::Magha => "माघ",
            Self::Phalguna => "फाल्गुन",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, m) in ALL_MASAS.iter().enumerate() {
            assert_eq!(m.index() as usize, i);
        }
    }

    #[test]
    fn wraps_to_chaitra() {
        assert_eq!(Masa::from_index(12), Masa::Chaitra);
        assert_eq!(Masa::from_index(11), Masa::Phalguna);
    }
}
