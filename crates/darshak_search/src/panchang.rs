//! Day and month panchang record building.
//!
//! A record joins the cyclic attributes, masa and era, sun times and muhurat
//! windows of one civil day and renders every field as display text in the
//! configured script and clock style. End labels always use the 12-hour
//! `"until hh:MM AM"` form.

use darshak_panchang::{
    AttributeProgression, CALIBRATED, Chaughadiya, ClockStyle, Muhurats, MuhuratKind, Named,
    Script, TimeWindow, Vaar, attributes_with, chaughadiya_for, format_until, join_karanas,
    month_era_with, muhurats_for, sun_times_for,
};
use darshak_time::{NaiveDate, day_offset, iso_date, month_dates};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::SearchError;
use crate::panchang_types::{DayRecord, LunarHalf, MuhuratWindow, NamedInterval};

/// Display options for rendered records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Script for every table name.
    pub script: Script,
    /// Clock style for sunrise, sunset and muhurat windows.
    pub clock: ClockStyle,
}

/// Era label, e.g. `"विक्रम संवत 2081"` or `"Vikram Samvat 2081"`.
pub fn samvat_label(era_year: i32, script: Script) -> String {
    match script {
        Script::Devanagari => format!("विक्रम संवत {era_year}"),
        Script::Latin => format!("Vikram Samvat {era_year}"),
    }
}

fn window(kind: MuhuratKind, w: TimeWindow, config: &CalendarConfig) -> MuhuratWindow {
    let (start, end) = w.format(config.clock);
    MuhuratWindow {
        name: kind.label(config.script).to_string(),
        start,
        end,
    }
}

fn muhurat_windows(m: &Muhurats, config: &CalendarConfig) -> [MuhuratWindow; 4] {
    [
        window(MuhuratKind::RahuKaal, m.rahu_kaal, config),
        window(MuhuratKind::GulikaKaal, m.gulika_kaal, config),
        window(MuhuratKind::Yamagandam, m.yamagandam, config),
        window(MuhuratKind::Abhijit, m.abhijit, config),
    ]
}

/// Panchang of one date under the calibrated model.
pub fn panchang_for_date(date: NaiveDate, config: &CalendarConfig) -> DayRecord {
    panchang_with(&CALIBRATED, date, config)
}

/// Panchang of one date under any progression model.
pub fn panchang_with<P: AttributeProgression + ?Sized>(
    progression: &P,
    date: NaiveDate,
    config: &CalendarConfig,
) -> DayRecord {
    let script = config.script;
    let d = day_offset(date);
    let attrs = attributes_with(progression, d);
    let month_era = month_era_with(progression, d);
    let sun = sun_times_for(date);
    let vaar = Vaar::of(date);
    let [rahu_kaal, gulika_kaal, yamagandam, abhijit_muhurat] =
        muhurat_windows(&muhurats_for(vaar, &sun), config);

    trace!(
        %date,
        offset = d,
        tithi = attrs.tithi.name(),
        nakshatra = attrs.nakshatra.name(),
        "day record"
    );

    DayRecord {
        date: iso_date(date),
        era_year: month_era.era_year,
        samvat: samvat_label(month_era.era_year, script),
        lunar_month: month_era.masa.label(script).to_string(),
        lunar_day: format!(
            "{}, {}",
            attrs.paksha.label(script),
            attrs.tithi.label(script)
        ),
        lunar_day_number: attrs.tithi.number_in_paksha(),
        lunar_half: LunarHalf::from(attrs.paksha),
        paksha: attrs.paksha.label(script).to_string(),
        vaar: vaar.label(script).to_string(),
        zodiac: attrs.rashi.label(script).to_string(),
        lunar_mansion: NamedInterval {
            name: attrs.nakshatra.label(script).to_string(),
            end_time_label: format_until(attrs.nakshatra_position.end_hours()),
        },
        yoga: NamedInterval {
            name: attrs.yoga.label(script).to_string(),
            end_time_label: format_until(attrs.yoga_position.end_hours()),
        },
        karana: NamedInterval {
            name: join_karanas(attrs.karanas, script),
            end_time_label: format_until(attrs.tithi_position.end_hours()),
        },
        sunrise: config.clock.format(sun.sunrise_hour),
        sunset: config.clock.format(sun.sunset_hour),
        rahu_kaal,
        gulika_kaal,
        yamagandam,
        abhijit_muhurat,
    }
}

/// Records for every day of a 0-based month with default display options.
pub fn build_month(year: i32, month0: u32) -> Result<Vec<DayRecord>, SearchError> {
    build_month_with(year, month0, &CalendarConfig::default())
}

/// Records for every day of a 0-based month, ascending.
///
/// Returns [`SearchError::Time`] when `month0 > 11`.
pub fn build_month_with(
    year: i32,
    month0: u32,
    config: &CalendarConfig,
) -> Result<Vec<DayRecord>, SearchError> {
    build_month_using(&CALIBRATED, year, month0, config)
}

/// Records for every day of a 0-based month under any progression model.
pub fn build_month_using<P: AttributeProgression + ?Sized>(
    progression: &P,
    year: i32,
    month0: u32,
    config: &CalendarConfig,
) -> Result<Vec<DayRecord>, SearchError> {
    let dates = month_dates(year, month0)?;
    debug!(
        year,
        month0,
        days = dates.len(),
        script = %config.script,
        "building month"
    );
    Ok(dates
        .into_iter()
        .map(|date| panchang_with(progression, date, config))
        .collect())
}

/// Day and night chaughadiya of a date.
pub fn chaughadiya_for_date(date: NaiveDate) -> Chaughadiya {
    chaughadiya_for(Vaar::of(date), &sun_times_for(date))
}
