//! Nakshatra (lunar mansion) table, 27-fold scheme.

use serde::{Deserialize, Serialize};

use crate::script::Named;

/// Number of nakshatras.
pub const NAKSHATRA_COUNT: u8 = 27;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Nakshatra at a 0-based index, taken modulo 27.
    pub const fn from_index(index: u8) -> Self {
        ALL_NAKSHATRAS[(index % NAKSHATRA_COUNT) as usize]
    }
}

impl Named for Nakshatra {
    fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    fn devanagari(self) -> &'static str {
        match self {
            Self::Ashwini => "अश्विनी",
            Self::Bharani => "भरणी",
            Self::Krittika => "कृत्तिका",
            Self::Rohini => "रोहिणी",
            Self::Mrigashira => "मृगशिरा",
            Self::Ardra => "आर्द्रा",
            Self::Punarvasu => "पुनर्वसु",
            Self::Pushya => "पुष्य",
            Self::Ashlesha => "आश्लेषा",
            Self::Magha => "मघा",
            Self::PurvaPhalguni => "पूर्वा फाल्गुनी",
            Self::UttaraPhalguni => "उत्तरा फाल्गुनी",
            Self::Hasta => "हस्त",
            Self::Chitra => "चित्रा",
            Self::Swati => "स्वाति",
            Self::Vishakha => "विशाखा",
            Self::Anuradha => "अनुराधा",
            Self::Jyeshtha => "ज्येष्ठा",
            Self::Mula => "मूल",
            Self::PurvaAshadha => "पूर्वाषाढ़ा",
            Self::UttaraAshadha => "उत्तराषाढ़ा",
            Self::Shravana => "श्रवण",
            Self::Dhanishtha => "धनिष्ठा",
            Self::Shatabhisha => "शतभिषा",
            Self::PurvaBhadrapada => "पूर्व भाद्रपद",
            Self::UttaraBhadrapada => "उत्तर भाद्रपद",
            Self::Revati => "रेवती",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
        }
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(Nakshatra::from_index(27), Nakshatra::Ashwini);
        assert_eq!(Nakshatra::from_index(26), Nakshatra::Revati);
    }

    #[test]
    fn names_nonempty_and_distinct() {
        for (i, a) in ALL_NAKSHATRAS.iter().enumerate() {
            assert!(!a.name().is_empty());
            for b in &ALL_NAKSHATRAS[i + 1..] {
                assert_ne!(a.devanagari(), b.devanagari());
            }
        }
    }
}
