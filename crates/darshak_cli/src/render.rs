//! Text and JSON rendering of command results.

use std::collections::BTreeMap;
use std::io::Write;

use anyhow::Result;
use darshak_panchang::{Chaughadiya, ChaughadiyaSlot, Named};
use darshak_search::{CalendarConfig, DayRecord, FestivalEntry, MuhuratWindow};
use serde::Serialize;

use crate::config::OutputFormat;

fn json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn window_line(out: &mut impl Write, w: &MuhuratWindow) -> Result<()> {
    writeln!(out, "  {:<16} {} - {}", w.name, w.start, w.end)?;
    Ok(())
}

/// Full panchang of one day.
pub fn day(out: &mut impl Write, r: &DayRecord, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return json(out, r);
    }
    writeln!(out, "{} ({})", r.date, r.vaar)?;
    writeln!(out, "  {:<16} {}", "Samvat", r.samvat)?;
    writeln!(out, "  {:<16} {}", "Masa", r.lunar_month)?;
    writeln!(out, "  {:<16} {} [{}]", "Tithi", r.lunar_day, r.lunar_day_number)?;
    writeln!(
        out,
        "  {:<16} {} ({})",
        "Nakshatra", r.lunar_mansion.name, r.lunar_mansion.end_time_label
    )?;
    writeln!(out, "  {:<16} {} ({})", "Yoga", r.yoga.name, r.yoga.end_time_label)?;
    writeln!(
        out,
        "  {:<16} {} ({})",
        "Karana", r.karana.name, r.karana.end_time_label
    )?;
    writeln!(out, "  {:<16} {}", "Rashi", r.zodiac)?;
    writeln!(out, "  {:<16} {}", "Sunrise", r.sunrise)?;
    writeln!(out, "  {:<16} {}", "Sunset", r.sunset)?;
    for w in [
        &r.rahu_kaal,
        &r.yamagandam,
        &r.gulika_kaal,
        &r.abhijit_muhurat,
    ] {
        window_line(out, w)?;
    }
    Ok(())
}

/// One line per day, with festivals of that date appended.
pub fn month(
    out: &mut impl Write,
    records: &[DayRecord],
    festivals: &BTreeMap<String, Vec<&'static str>>,
    format: OutputFormat,
) -> Result<()> {
    if format == OutputFormat::Json {
        return json(out, records);
    }
    for r in records {
        write!(
            out,
            "{}  {}  {}  {}",
            r.date, r.vaar, r.lunar_day, r.lunar_mansion.name
        )?;
        if let Some(names) = festivals.get(&r.date) {
            write!(out, "  * {}", names.join(", "))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Festival list in table order.
pub fn festivals(
    out: &mut impl Write,
    entries: &[FestivalEntry],
    format: OutputFormat,
) -> Result<()> {
    if format == OutputFormat::Json {
        return json(out, entries);
    }
    if entries.is_empty() {
        writeln!(out, "no festivals found")?;
    }
    for f in entries {
        let marker = if f.is_major() { "*" } else { " " };
        writeln!(out, "{marker} {:<20} {}", f.date, f.name)?;
    }
    Ok(())
}

#[derive(Serialize)]
struct SlotView {
    name: &'static str,
    quality: &'static str,
    start: String,
    end: String,
}

#[derive(Serialize)]
struct ChaughadiyaView<'a> {
    date: &'a str,
    day: Vec<SlotView>,
    night: Vec<SlotView>,
}

fn slot_views(slots: &[ChaughadiyaSlot], config: &CalendarConfig) -> Vec<SlotView> {
    slots
        .iter()
        .map(|s| SlotView {
            name: s.name.label(config.script),
            quality: s.quality().label(config.script),
            start: config.clock.format(s.start_hour),
            end: config.clock.format(s.end_hour),
        })
        .collect()
}

/// Day and night chaughadiya tables.
pub fn chaughadiya(
    out: &mut impl Write,
    date: &str,
    c: &Chaughadiya,
    config: &CalendarConfig,
    format: OutputFormat,
) -> Result<()> {
    let view = ChaughadiyaView {
        date,
        day: slot_views(&c.day, config),
        night: slot_views(&c.night, config),
    };
    if format == OutputFormat::Json {
        return json(out, &view);
    }
    writeln!(out, "{date}")?;
    for (title, slots) in [("Day", &view.day), ("Night", &view.night)] {
        writeln!(out, "  {title}")?;
        for s in slots {
            writeln!(out, "    {} - {}  {:<8} {}", s.start, s.end, s.name, s.quality)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use darshak_panchang::{ClockStyle, Script};
    use darshak_search::{
        chaughadiya_for_date, festivals_by_date, festivals_for_month, panchang_for_date,
    };
    use darshak_time::civil_date;

    fn text(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn day_text_lists_every_field() {
        let r = panchang_for_date(civil_date(2024, 2, 21).unwrap(), &CalendarConfig::default());
        let s = text(|out| day(out, &r, OutputFormat::Text));
        assert!(s.starts_with("2024-03-21 ("));
        assert!(s.contains("Samvat"));
        assert!(s.contains("अभिजीत मुहूर्त"));
        assert!(s.contains("11:15 - 12:45"));
    }

    #[test]
    fn day_json_is_contract_object() {
        let r = panchang_for_date(civil_date(2024, 10, 1).unwrap(), &CalendarConfig::default());
        let s = text(|out| day(out, &r, OutputFormat::Json));
        let v: serde_json::Value = serde_json::from_str(&s).unwrap();
        assert_eq!(v["date"], "2024-11-01");
        assert!(v["abhijitMuhurat"]["start"].is_string());
    }

    #[test]
    fn month_text_marks_festivals() {
        let config = CalendarConfig::default();
        let records: Vec<_> = civil_date(2024, 10, 1)
            .unwrap()
            .iter_days()
            .take(30)
            .map(|d| panchang_for_date(d, &config))
            .collect();
        let index = festivals_by_date(&festivals_for_month(2024, 10));
        let s = text(|out| month(out, &records, &index, OutputFormat::Text));
        assert_eq!(s.lines().count(), 30);
        let first = s.lines().next().unwrap();
        assert!(first.starts_with("2024-11-01"));
        assert!(first.ends_with("* दिवाली"));
    }

    #[test]
    fn empty_festival_list() {
        let s = text(|out| festivals(out, &[], OutputFormat::Text));
        assert_eq!(s, "no festivals found\n");
        let s = text(|out| festivals(out, &[], OutputFormat::Json));
        assert_eq!(s.trim(), "[]");
    }

    #[test]
    fn chaughadiya_latin_12h() {
        let config = CalendarConfig {
            script: Script::Latin,
            clock: ClockStyle::H12,
        };
        let c = chaughadiya_for_date(civil_date(2024, 10, 3).unwrap());
        let s = text(|out| chaughadiya(out, "2024-11-03", &c, &config, OutputFormat::Json));
        let v: serde_json::Value = serde_json::from_str(&s).unwrap();
        assert_eq!(v["day"].as_array().unwrap().len(), 8);
        // 2024-11-03 is a Sunday
        assert_eq!(v["day"][0]["name"], "Udveg");
        assert_eq!(v["day"][0]["quality"], "Inauspicious");
        assert_eq!(v["night"][0]["name"], "Shubh");
        assert!(v["day"][0]["start"].as_str().unwrap().ends_with("AM"));
    }
}
