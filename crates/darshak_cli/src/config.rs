use std::path::Path;

use anyhow::{Context, Result};
use darshak_panchang::{ClockStyle, Script};
use darshak_search::CalendarConfig;
use serde::Deserialize;
use tracing::{debug, info};

use crate::cli::Cli;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "darshak.toml";

/// Top-level darshak configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DarshakConfig {
    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    #[serde(default)]
    pub script: Script,
    #[serde(default)]
    pub clock: ClockStyle,
    #[serde(default)]
    pub format: OutputFormat,
}

/// Output format for every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Effective settings after applying CLI overrides to the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub calendar: CalendarConfig,
    pub format: OutputFormat,
}

/// Parse a TOML config string.
pub fn parse(toml_str: &str) -> Result<DarshakConfig> {
    toml::from_str(toml_str).context("failed to parse TOML config")
}

/// Load the config file.
///
/// An explicit path must exist. Without one, `darshak.toml` in the working
/// directory is read if present and defaults are used otherwise.
pub fn load(explicit: Option<&Path>) -> Result<DarshakConfig> {
    let path = match explicit {
        Some(p) => p,
        None => {
            let default = Path::new(DEFAULT_CONFIG);
            if !default.exists() {
                debug!("no {DEFAULT_CONFIG} found, using defaults");
                return Ok(DarshakConfig::default());
            }
            default
        }
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config = parse(&toml_str)
        .with_context(|| format!("invalid config file: {}", path.display()))?;
    info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Merge file settings with command-line overrides.
pub fn resolve(file: &DarshakConfig, cli: &Cli) -> Settings {
    let format = if cli.json {
        OutputFormat::Json
    } else {
        file.display.format
    };
    Settings {
        calendar: CalendarConfig {
            script: cli.script.unwrap_or(file.display.script),
            clock: cli.clock.unwrap_or(file.display.clock),
        },
        format,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn empty_file_is_defaults() {
        let c = parse("").unwrap();
        assert_eq!(c.display.script, Script::Devanagari);
        assert_eq!(c.display.clock, ClockStyle::H24);
        assert_eq!(c.display.format, OutputFormat::Text);
    }

    #[test]
    fn display_section() {
        let c = parse(
            r#"
            [display]
            script = "latin"
            clock = "12h"
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(c.display.script, Script::Latin);
        assert_eq!(c.display.clock, ClockStyle::H12);
        assert_eq!(c.display.format, OutputFormat::Json);
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(parse("[display]\ncolour = \"red\"\n").is_err());
        assert!(parse("[location]\nlat = 28.6\n").is_err());
        assert!(parse("[display]\nclock = \"36h\"\n").is_err());
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let err = load(Some(Path::new("/nonexistent/darshak.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }

    #[test]
    fn cli_overrides_file() {
        let file = parse("[display]\nscript = \"latin\"\nclock = \"12h\"\n").unwrap();
        let cli = Cli::try_parse_from(["darshak", "search", "--clock", "24h", "--json"]).unwrap();
        let s = resolve(&file, &cli);
        assert_eq!(s.calendar.script, Script::Latin);
        assert_eq!(s.calendar.clock, ClockStyle::H24);
        assert_eq!(s.format, OutputFormat::Json);
    }
}
