//! Rahu Kaal, Yamagandam, Gulika Kaal and Abhijit Muhurat windows.
//!
//! The first three are 1.5-hour windows starting a weekday-dependent number
//! of hours after sunrise. Abhijit is the eighth of the daylight span
//! centred on local noon.

use serde::{Deserialize, Serialize};

use crate::clock::ClockStyle;
use crate::script::Named;
use crate::sun::SunTimes;
use crate::vaar::Vaar;

/// Length of Rahu Kaal, Yamagandam and Gulika Kaal in hours.
pub const KAAL_WINDOW_HOURS: f64 = 1.5;

/// Number of equal portions the daylight span is divided into for Abhijit.
pub const ABHIJIT_PORTIONS: f64 = 8.0;

/// The four daily muhurat windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MuhuratKind {
    RahuKaal,
    Yamagandam,
    GulikaKaal,
    Abhijit,
}

/// All four kinds in display order.
pub const ALL_MUHURAT_KINDS: [MuhuratKind; 4] = [
    MuhuratKind::RahuKaal,
    MuhuratKind::Yamagandam,
    MuhuratKind::GulikaKaal,
    MuhuratKind::Abhijit,
];

impl MuhuratKind {
    /// Whether the window is traditionally avoided.
    pub const fn is_inauspicious(self) -> bool {
        !matches!(self, Self::Abhijit)
    }
}

impl Named for MuhuratKind {
    fn name(self) -> &'static str {
        match self {
            Self::RahuKaal => "Rahu Kaal",
            Self::Yamagandam => "Yamagandam",
            Self::GulikaKaal => "Gulika Kaal",
            Self::Abhijit => "Abhijit Muhurat",
        }
    }

    fn devanagari(self) -> &'static str {
        match self {
            Self::RahuKaal => "राहु काल",
            Self::Yamagandam => "यमगण्डम",
            Self::GulikaKaal => "गुलिक काल",
            Self::Abhijit => "अभिजीत मुहूर्त",
        }
    }
}

/// Hours after sunrise at which a fixed-length window starts.
///
/// `None` for Abhijit, which depends on the daylight span instead.
pub const fn offset_hours(kind: MuhuratKind, vaar: Vaar) -> Option<f64> {
    let hours = match kind {
        MuhuratKind::RahuKaal => match vaar {
            Vaar::Ravivaar => 10.5,
            Vaar::Somvaar => 1.5,
            Vaar::Mangalvaar => 9.0,
            Vaar::Budhvaar => 6.0,
            Vaar::Guruvaar => 7.5,
            Vaar::Shukravaar => 4.5,
            Vaar::Shanivaar => 3.0,
        },
        MuhuratKind::Yamagandam => match vaar {
            Vaar::Ravivaar => 6.0,
            Vaar::Somvaar => 4.5,
            Vaar::Mangalvaar => 3.0,
            Vaar::Budhvaar => 1.5,
            Vaar::Guruvaar => 0.0,
            Vaar::Shukravaar => 9.0,
            Vaar::Shanivaar => 7.5,
        },
        MuhuratKind::GulikaKaal => match vaar {
            Vaar::Ravivaar => 9.0,
            Vaar::Somvaar => 7.5,
            Vaar::Mangalvaar => 6.0,
            Vaar::Budhvaar => 4.5,
            Vaar::Guruvaar => 3.0,
            Vaar::Shukravaar => 1.5,
            Vaar::Shanivaar => 0.0,
        },
        MuhuratKind::Abhijit => return None,
    };
    Some(hours)
}

/// A time window in decimal hours of the same civil day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start_hour: f64,
    pub end_hour: f64,
}

impl TimeWindow {
    /// Window length in hours.
    pub fn duration(&self) -> f64 {
        self.end_hour - self.start_hour
    }

    /// Whether `hour` falls inside `[start, end)`.
    pub fn contains(&self, hour: f64) -> bool {
        (self.start_hour..self.end_hour).contains(&hour)
    }

    /// Start and end formatted in `style`.
    pub fn format(&self, style: ClockStyle) -> (String, String) {
        (style.format(self.start_hour), style.format(self.end_hour))
    }
}

/// All four windows of one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Muhurats {
    pub rahu_kaal: TimeWindow,
    pub yamagandam: TimeWindow,
    pub gulika_kaal: TimeWindow,
    pub abhijit: TimeWindow,
}

impl Muhurats {
    /// Window of a given kind.
    pub fn get(&self, kind: MuhuratKind) -> TimeWindow {
        match kind {
            MuhuratKind::RahuKaal => self.rahu_kaal,
            MuhuratKind::Yamagandam => self.yamagandam,
            MuhuratKind::GulikaKaal => self.gulika_kaal,
            MuhuratKind::Abhijit => self.abhijit,
        }
    }

    /// `(kind, window)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (MuhuratKind, TimeWindow)> + '_ {
        ALL_MUHURAT_KINDS.into_iter().map(|k| (k, self.get(k)))
    }
}

fn kaal_window(kind: MuhuratKind, vaar: Vaar, sunrise: f64) -> TimeWindow {
    let start_hour = sunrise + offset_hours(kind, vaar).unwrap_or(0.0);
    TimeWindow {
        start_hour,
        end_hour: start_hour + KAAL_WINDOW_HOURS,
    }
}

/// Abhijit: one eighth of the daylight span, centred on its midpoint.
pub fn abhijit_window(sun: &SunTimes) -> TimeWindow {
    let span = sun.day_length();
    let slice = span / ABHIJIT_PORTIONS;
    let start_hour = sun.sunrise_hour + span / 2.0 - slice / 2.0;
    TimeWindow {
        start_hour,
        end_hour: start_hour + slice,
    }
}

/// Compute the four muhurat windows for a weekday and its sun times.
pub fn muhurats_for(vaar: Vaar, sun: &SunTimes) -> Muhurats {
    let sunrise = sun.sunrise_hour;
    Muhurats {
        rahu_kaal: kaal_window(MuhuratKind::RahuKaal, vaar, sunrise),
        yamagandam: kaal_window(MuhuratKind::Yamagandam, vaar, sunrise),
        gulika_kaal: kaal_window(MuhuratKind::GulikaKaal, vaar, sunrise),
        abhijit: abhijit_window(sun),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::format_clock_24;
    use crate::sun::sun_times_for_day_of_year;
    use crate::vaar::ALL_VAARS;

    const EQUINOX: SunTimes = SunTimes {
        sunrise_hour: 6.0,
        sunset_hour: 18.0,
    };

    #[test]
    fn abhijit_at_equinox() {
        let w = abhijit_window(&EQUINOX);
        assert_eq!(format_clock_24(w.start_hour), "11:15");
        assert_eq!(format_clock_24(w.end_hour), "12:45");
    }

    #[test]
    fn sunday_rahu_kaal() {
        let m = muhurats_for(Vaar::Ravivaar, &EQUINOX);
        assert_eq!(m.rahu_kaal.start_hour, 16.5);
        assert_eq!(m.rahu_kaal.end_hour, 18.0);
    }

    #[test]
    fn thursday_yamagandam_starts_at_sunrise() {
        let m = muhurats_for(Vaar::Guruvaar, &EQUINOX);
        assert_eq!(m.yamagandam.start_hour, 6.0);
        assert_eq!(m.yamagandam.duration(), KAAL_WINDOW_HOURS);
    }

    #[test]
    fn saturday_gulika_starts_at_sunrise() {
        let m = muhurats_for(Vaar::Shanivaar, &EQUINOX);
        assert_eq!(m.gulika_kaal.start_hour, 6.0);
        assert!(m.gulika_kaal.contains(7.0));
        assert!(!m.gulika_kaal.contains(7.5));
    }

    #[test]
    fn start_before_end_every_weekday_and_season() {
        for doy in (0..366).step_by(15) {
            let sun = sun_times_for_day_of_year(doy);
            for vaar in ALL_VAARS {
                for (kind, w) in muhurats_for(vaar, &sun).iter() {
                    assert!(w.start_hour < w.end_hour, "{kind:?} {vaar:?} doy {doy}");
                    assert!(w.end_hour < 24.0, "{kind:?} {vaar:?} doy {doy}");
                }
            }
        }
    }

    #[test]
    fn abhijit_has_no_fixed_offset() {
        assert_eq!(offset_hours(MuhuratKind::Abhijit, Vaar::Somvaar), None);
        assert_eq!(offset_hours(MuhuratKind::RahuKaal, Vaar::Somvaar), Some(1.5));
    }

    #[test]
    fn formatted_window() {
        let m = muhurats_for(Vaar::Somvaar, &EQUINOX);
        let (s, e) = m.rahu_kaal.format(ClockStyle::H12);
        assert_eq!(s, "07:30 AM");
        assert_eq!(e, "09:00 AM");
    }

    #[test]
    fn names() {
        assert_eq!(MuhuratKind::RahuKaal.devanagari(), "राहु काल");
        assert!(!MuhuratKind::Abhijit.is_inauspicious());
    }
}
