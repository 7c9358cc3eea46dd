//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use rinkside_core::{OutputFormat, TimeFormat};

use crate::config::ClientConfig;

/// rinkside - Upcoming public skate sessions at your rink
#[derive(Debug, Parser)]
#[command(name = "rinkside")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "RINKSIDE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub log_json: bool,

    // --- Output format flags ---
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Show dates as "February 18th, 2026"
    #[arg(long)]
    pub long_dates: bool,

    /// Clock format for start and end times
    #[arg(long, value_enum)]
    pub time_format: Option<ClockFormat>,

    // --- Feed overrides ---
    /// Calendar to list
    #[arg(long)]
    pub calendar_id: Option<String>,

    /// IANA timezone for displayed dates and times
    #[arg(long)]
    pub timezone: Option<String>,

    /// Number of days ahead to list
    #[arg(long)]
    pub days: Option<u32>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Returns the output format based on CLI flags and config.
    pub fn output_format(&self, config: &ClientConfig) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            config.display.format
        }
    }

    /// Writes command-line overrides into `config`.
    pub fn apply_overrides(&self, config: &mut ClientConfig) {
        if let Some(ref id) = self.calendar_id {
            config.calendar.calendar_id = Some(id.clone());
        }
        if let Some(ref tz) = self.timezone {
            config.calendar.timezone = tz.clone();
        }
        if let Some(days) = self.days {
            config.calendar.lookahead_days = days;
        }
        if let Some(format) = self.time_format {
            config.display.time_format = format.into();
        }
        if self.long_dates {
            config.display.long_dates = true;
        }
    }
}

/// Clock format accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClockFormat {
    /// 1:00 PM
    #[value(name = "12h")]
    H12,
    /// 13:00
    #[value(name = "24h")]
    H24,
}

impl From<ClockFormat> for TimeFormat {
    fn from(format: ClockFormat) -> Self {
        match format {
            ClockFormat::H12 => TimeFormat::H12,
            ClockFormat::H24 => TimeFormat::H24,
        }
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the upcoming schedule (default)
    Schedule,

    /// Print a date as "February 18th, 2026"
    FormatDate {
        /// Date as M/D/YYYY or YYYY-MM-DD
        date: String,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Validate configuration
    Validate,

    /// Show configuration file path
    Path,
}
