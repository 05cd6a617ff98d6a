//! Name scripts for the fixed panchang tables.
//!
//! Every table carries a Devanagari name (what the calendar displays) and a
//! Latin transliteration (what logs and tooling use).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PanchangError;

/// Script used when rendering table names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    #[default]
    Devanagari,
    Latin,
}

impl Display for Script {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Devanagari => f.write_str("devanagari"),
            Self::Latin => f.write_str("latin"),
        }
    }
}

impl FromStr for Script {
    type Err = PanchangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "devanagari" | "hi" | "hindi" => Ok(Self::Devanagari),
            "latin" | "en" | "english" => Ok(Self::Latin),
            _ => Err(PanchangError::UnknownScript(s.to_string())),
        }
    }
}

/// An entry of a fixed, ordered name table.
pub trait Named: Copy {
    /// Latin transliteration.
    fn name(self) -> &'static str;

    /// Devanagari name.
    fn devanagari(self) -> &'static str;

    /// Name in the requested script.
    fn label(self, script: Script) -> &'static str {
        match script {
            Script::Devanagari => self.devanagari(),
            Script::Latin => self.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_aliases() {
        assert_eq!("Devanagari".parse::<Script>().unwrap(), Script::Devanagari);
        assert_eq!("hi".parse::<Script>().unwrap(), Script::Devanagari);
        assert_eq!("LATIN".parse::<Script>().unwrap(), Script::Latin);
        assert_eq!("en".parse::<Script>().unwrap(), Script::Latin);
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            "tamil".parse::<Script>(),
            Err(PanchangError::UnknownScript("tamil".into()))
        );
    }

    #[test]
    fn display_roundtrips_through_parse() {
        for s in [Script::Devanagari, Script::Latin] {
            assert_eq!(s.to_string().parse::<Script>().unwrap(), s);
        }
    }

    #[test]
    fn default_is_devanagari() {
        assert_eq!(Script::default(), Script::Devanagari);
    }
}
