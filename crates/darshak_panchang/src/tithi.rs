//! Tithi (lunar day) and Paksha (lunar half) tables.
//!
//! A lunar month holds 30 tithis: 15 in Shukla paksha (waxing, ending at
//! Purnima) followed by 15 in Krishna paksha (waning, ending at Amavasya).

use serde::{Deserialize, Serialize};

use crate::script::Named;

/// Number of tithis in a lunar month.
pub const TITHI_COUNT: u8 = 30;

/// Tithis per paksha.
pub const TITHIS_PER_PAKSHA: u8 = 15;

/// Lunar half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Paksha {
    /// Waxing half (tithi indices 0-14).
    Shukla,
    /// Waning half (tithi indices 15-29).
    Krishna,
}

impl Paksha {
    /// Paksha of a 0-based tithi index.
    pub const fn from_tithi_index(index: u8) -> Self {
        if index % TITHI_COUNT < TITHIS_PER_PAKSHA {
            Self::Shukla
        } else {
            Self::Krishna
        }
    }

    /// Whether this is the waxing half.
    pub const fn is_waxing(self) -> bool {
        matches!(self, Self::Shukla)
    }
}

impl Named for Paksha {
    fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla Paksha",
            Self::Krishna => "Krishna Paksha",
        }
    }

    fn devanagari(self) -> &'static str {
        match self {
            Self::Shukla => "शुक्ल पक्ष",
            Self::Krishna => "कृष्ण पक्ष",
        }
    }
}

/// The 30 tithis of a lunar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tithi {
    ShuklaPratipada,
    ShuklaDwitiya,
    ShuklaTritiya,
    ShuklaChaturthi,
    ShuklaPanchami,
    ShuklaShashthi,
    ShuklaSaptami,
    ShuklaAshtami,
    ShuklaNavami,
    ShuklaDashami,
    ShuklaEkadashi,
    ShuklaDwadashi,
    ShuklaTrayodashi,
    ShuklaChaturdashi,
    Purnima,
    KrishnaPratipada,
    KrishnaDwitiya,
    KrishnaTritiya,
    KrishnaChaturthi,
    KrishnaPanchami,
    KrishnaShashthi,
    KrishnaSaptami,
    KrishnaAshtami,
    KrishnaNavami,
    KrishnaDashami,
    KrishnaEkadashi,
    KrishnaDwadashi,
    KrishnaTrayodashi,
    KrishnaChaturdashi,
    Amavasya,
}

/// All 30 tithis in order (index 0 = Shukla Pratipada).
pub const ALL_TITHIS: [Tithi; 30] = [
    Tithi::ShuklaPratipada,
    Tithi::ShuklaDwitiya,
    Tithi::ShuklaTritiya,
    Tithi::ShuklaChaturthi,
    Tithi::ShuklaPanchami,
    Tithi::ShuklaShashthi,
    Tithi::ShuklaSaptami,
    Tithi::ShuklaAshtami,
    Tithi::ShuklaNavami,
    Tithi::ShuklaDashami,
    Tithi::ShuklaEkadashi,
    Tithi::ShuklaDwadashi,
    Tithi::ShuklaTrayodashi,
    Tithi::ShuklaChaturdashi,
    Tithi::Purnima,
    Tithi::KrishnaPratipada,
    Tithi::KrishnaDwitiya,
    Tithi::KrishnaTritiya,
    Tithi::KrishnaChaturthi,
    Tithi::KrishnaPanchami,
    Tithi::KrishnaShashthi,
    Tithi::KrishnaSaptami,
    Tithi::KrishnaAshtami,
    Tithi::KrishnaNavami,
    Tithi::KrishnaDashami,
    Tithi::KrishnaEkadashi,
    Tithi::KrishnaDwadashi,
    Tithi::KrishnaTrayodashi,
    Tithi::KrishnaChaturdashi,
    Tithi::Amavasya,
];

const TITHI_NAMES: [&str; 30] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Purnima",
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Amavasya",
];

const TITHI_NAMES_DEVANAGARI: [&str; 30] = [
    "प्रतिपदा",
    "द्वितीया",
    "तृतीया",
    "चतुर्थी",
    "पंचमी",
    "षष्ठी",
    "सप्तमी",
    "अष्टमी",
    "नवमी",
    "दशमी",
    "एकादशी",
    "द्वादशी",
    "त्रयोदशी",
    "चतुर्दशी",
    "पूर्णिमा",
    "प्रतिपदा",
    "द्वितीया",
    "तृतीया",
    "चतुर्थी",
    "पंचमी",
    "षष्ठी",
    "सप्तमी",
    "अष्टमी",
    "नवमी",
    "दशमी",
    "एकादशी",
    "द्वादशी",
    "त्रयोदशी",
    "चतुर्दशी",
    "अमावस्या",
];

impl Tithi {
    /// 0-based index (Shukla Pratipada=0 .. Amavasya=29).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Tithi at a 0-based index, taken modulo 30.
    pub const fn from_index(index: u8) -> Self {
        ALL_TITHIS[(index % TITHI_COUNT) as usize]
    }

    /// Paksha this tithi belongs to.
    pub const fn paksha(self) -> Paksha {
        Paksha::from_tithi_index(self.index())
    }

    /// 1-based position within its paksha (1-15).
    pub const fn number_in_paksha(self) -> u8 {
        self.index() % TITHIS_PER_PAKSHA + 1
    }
}

impl Named for Tithi {
    fn name(self) -> &'static str {
        TITHI_NAMES[self.index() as usize]
    }

    fn devanagari(self) -> &'static str {
        TITHI_NAMES_DEVANAGARI[self.index() as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, t) in ALL_TITHIS.iter().enumerate() {
            assert_eq!(t.index() as usize, i);
            assert_eq!(Tithi::from_index(i as u8), *t);
        }
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(Tithi::from_index(30), Tithi::ShuklaPratipada);
        assert_eq!(Tithi::from_index(59), Tithi::Amavasya);
    }

    #[test]
    fn paksha_boundary() {
        assert_eq!(Tithi::Purnima.paksha(), Paksha::Shukla);
        assert_eq!(Tithi::KrishnaPratipada.paksha(), Paksha::Krishna);
        assert!(Paksha::from_tithi_index(14).is_waxing());
        assert!(!Paksha::from_tithi_index(15).is_waxing());
    }

    #[test]
    fn number_in_paksha() {
        assert_eq!(Tithi::ShuklaPratipada.number_in_paksha(), 1);
        assert_eq!(Tithi::Purnima.number_in_paksha(), 15);
        assert_eq!(Tithi::KrishnaPratipada.number_in_paksha(), 1);
        assert_eq!(Tithi::Amavasya.number_in_paksha(), 15);
    }

    #[test]
    fn end_of_paksha_names() {
        assert_eq!(Tithi::Purnima.devanagari(), "पूर्णिमा");
        assert_eq!(Tithi::Amavasya.devanagari(), "अमावस्या");
        assert_eq!(Tithi::KrishnaPanchami.name(), "Panchami");
    }

    #[test]
    fn paksha_names() {
        assert_eq!(Paksha::Shukla.devanagari(), "शुक्ल पक्ष");
        assert_eq!(Paksha::Krishna.name(), "Krishna Paksha");
    }
}
