use std::path::PathBuf;

use clap::{Parser, Subcommand};
use darshak_panchang::{ClockStyle, Script};

/// Darshak panchang calendar.
#[derive(Parser)]
#[command(
    name = "darshak",
    version,
    about = "Hindu lunisolar calendar: panchang, muhurat and festivals"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file [default: darshak.toml if present].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Name script: devanagari or latin. Overrides the config file.
    #[arg(long, global = true)]
    pub script: Option<Script>,

    /// Clock style for times: 24h or 12h. Overrides the config file.
    #[arg(long, global = true)]
    pub clock: Option<ClockStyle>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Panchang for every day of a month.
    Month(MonthArgs),
    /// Panchang for a single day.
    Day(DayArgs),
    /// Festivals of a year, or of one month.
    Festivals(FestivalArgs),
    /// Search festival names.
    Search(SearchArgs),
    /// Day and night chaughadiya of a date.
    Chaughadiya(DayArgs),
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Gregorian year.
    #[arg(short, long)]
    pub year: i32,

    /// Month, 1-12.
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: u32,
}

/// Arguments for `day` and `chaughadiya`.
#[derive(clap::Args)]
pub struct DayArgs {
    /// Date as YYYY-MM-DD [default: today].
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Arguments for the `festivals` subcommand.
#[derive(clap::Args)]
pub struct FestivalArgs {
    /// Gregorian year.
    #[arg(short, long)]
    pub year: i32,

    /// Restrict to one month, 1-12.
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
pub struct SearchArgs {
    /// Case-insensitive part of a festival name; empty lists all.
    #[arg(default_value = "")]
    pub term: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_args() {
        let cli = Cli::try_parse_from(["darshak", "month", "--year", "2024", "--month", "11"])
            .unwrap();
        match cli.command {
            Command::Month(a) => {
                assert_eq!(a.year, 2024);
                assert_eq!(a.month, 11);
            }
            _ => panic!("expected month"),
        }
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn month_thirteen_rejected() {
        assert!(Cli::try_parse_from(["darshak", "month", "-y", "2024", "-m", "13"]).is_err());
        assert!(Cli::try_parse_from(["darshak", "month", "-y", "2024", "-m", "0"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "darshak", "day", "--date", "2024-11-01", "--json", "--script", "latin", "--clock",
            "12h", "-vv",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.script, Some(Script::Latin));
        assert_eq!(cli.clock, Some(ClockStyle::H12));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn bad_script_rejected() {
        assert!(Cli::try_parse_from(["darshak", "search", "--script", "tamil"]).is_err());
    }

    #[test]
    fn search_term_defaults_empty() {
        let cli = Cli::try_parse_from(["darshak", "search"]).unwrap();
        match cli.command {
            Command::Search(a) => assert_eq!(a.term, ""),
            _ => panic!("expected search"),
        }
    }
}
