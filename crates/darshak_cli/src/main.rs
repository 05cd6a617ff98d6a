mod cli;
mod config;
mod logging;
mod render;

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use darshak_search::{
    build_month_with, chaughadiya_for_date, festivals_by_date, festivals_for, festivals_for_month,
    panchang_for_date, search_festivals,
};
use darshak_time::{NaiveDate, iso_date, parse_iso_date};
use tracing::info;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

/// Date argument, or today's local date when absent.
fn date_arg(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(s) => parse_iso_date(s).with_context(|| format!("invalid --date {s:?}")),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

fn run(cli: Cli) -> Result<()> {
    let file = config::load(cli.config.as_deref())?;
    let settings = config::resolve(&file, &cli);
    let calendar = settings.calendar;
    let format = settings.format;
    let mut out = io::stdout().lock();

    match cli.command {
        Command::Month(args) => {
            // CLI months are 1-based, the engine's are 0-based
            let month0 = args.month - 1;
            info!(year = args.year, month = args.month, "month panchang");
            let records = build_month_with(args.year, month0, &calendar)
                .with_context(|| format!("cannot build {}-{:02}", args.year, args.month))?;
            let index = festivals_by_date(&festivals_for_month(args.year, month0));
            render::month(&mut out, &records, &index, format)?;
        }
        Command::Day(args) => {
            let date = date_arg(args.date.as_deref())?;
            info!(%date, "day panchang");
            render::day(&mut out, &panchang_for_date(date, &calendar), format)?;
        }
        Command::Festivals(args) => {
            let found = festivals_for(args.year, args.month.map(|m| m - 1));
            render::festivals(&mut out, &found, format)?;
        }
        Command::Search(args) => {
            render::festivals(&mut out, &search_festivals(&args.term), format)?;
        }
        Command::Chaughadiya(args) => {
            let date = date_arg(args.date.as_deref())?;
            let c = chaughadiya_for_date(date);
            render::chaughadiya(&mut out, &iso_date(date), &c, &calendar, format)?;
        }
    }
    out.flush()?;
    Ok(())
}
