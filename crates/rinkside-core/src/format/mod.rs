//! Display formatting for schedule entries.
//!
//! Every string shown in the schedule table is produced here, in one fixed
//! display timezone:
//! - **Weekday**: full English weekday name (`Wednesday`)
//! - **Date**: numeric US date without padding (`2/18/2026`)
//! - **Clock**: `1:00 PM` (12-hour) or `13:00` (24-hour)
//!
//! The long ordinal rendering (`February 18th, 2026`) lives in [`long_date`].
//!
//! # Example
//!
//! ```rust
//! use rinkside_core::format::{ScheduleFormatter, TimeFormat};
//! use rinkside_core::EventTime;
//!
//! let formatter = ScheduleFormatter::new(chrono_tz::America::New_York);
//! let start = EventTime::parse_date("2026-02-18").unwrap();
//! assert_eq!(formatter.day_of_week(&start), "Wednesday");
//! assert_eq!(formatter.date(&start), "2/18/2026");
//! ```

pub mod long_date;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::entry::ScheduleEntry;
use crate::time::{DEFAULT_DISPLAY_TIMEZONE, EventTime};

pub use long_date::{format_long_date, ordinal_suffix};

/// Label shown in the start column for all-day entries.
pub const ALL_DAY_LABEL: &str = "All Day";

/// The output format for schedule display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable terminal table.
    #[default]
    Table,
    /// Machine-readable JSON list.
    Json,
}

/// Time format preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    /// 12-hour format with AM/PM (e.g., "2:30 PM").
    #[default]
    #[serde(rename = "12h")]
    H12,
    /// 24-hour format (e.g., "14:30").
    #[serde(rename = "24h")]
    H24,
}

impl TimeFormat {
    fn pattern(self) -> &'static str {
        match self {
            Self::H12 => "%-I:%M %p",
            Self::H24 => "%H:%M",
        }
    }
}

/// Renders event times as display strings in a fixed timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleFormatter {
    timezone: Tz,
    time_format: TimeFormat,
}

impl Default for ScheduleFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_DISPLAY_TIMEZONE)
    }
}

impl ScheduleFormatter {
    /// Creates a formatter for `timezone` with 12-hour clock times.
    pub fn new(timezone: Tz) -> Self {
        Self {
            timezone,
            time_format: TimeFormat::H12,
        }
    }

    /// Sets the clock format.
    #[must_use]
    pub fn with_time_format(mut self, time_format: TimeFormat) -> Self {
        self.time_format = time_format;
        self
    }

    /// Returns the display timezone.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Full weekday name, e.g. `Wednesday`.
    pub fn day_of_week(&self, time: &EventTime) -> String {
        time.in_timezone(&self.timezone).format("%A").to_string()
    }

    /// Numeric date, e.g. `2/18/2026`.
    pub fn date(&self, time: &EventTime) -> String {
        time.in_timezone(&self.timezone)
            .format("%-m/%-d/%Y")
            .to_string()
    }

    /// Clock time, e.g. `1:00 PM`.
    pub fn clock(&self, time: &EventTime) -> String {
        time.in_timezone(&self.timezone)
            .format(self.time_format.pattern())
            .to_string()
    }

    /// Builds a display entry from a resolved start and end.
    ///
    /// All-day entries get [`ALL_DAY_LABEL`] as start and an empty end.
    pub fn entry(
        &self,
        start: &EventTime,
        end: &EventTime,
        all_day: bool,
        summary: Option<&str>,
    ) -> ScheduleEntry {
        let (start_time, end_time) = if all_day {
            (ALL_DAY_LABEL.to_string(), String::new())
        } else {
            (self.clock(start), self.clock(end))
        };

        ScheduleEntry {
            day_of_week: self.day_of_week(start),
            date: self.date(start),
            start_time,
            end_time,
            summary: summary.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn at(h: u32, m: u32) -> EventTime {
        EventTime::from_utc(Utc.with_ymd_and_hms(2026, 2, 18, h, m, 0).unwrap())
    }

    #[test]
    fn formats_in_display_zone() {
        let formatter = ScheduleFormatter::default();
        let start = at(18, 0);
        assert_eq!(formatter.day_of_week(&start), "Wednesday");
        assert_eq!(formatter.date(&start), "2/18/2026");
        assert_eq!(formatter.clock(&start), "1:00 PM");
        assert_eq!(formatter.clock(&at(19, 30)), "2:30 PM");
    }

    #[test]
    fn late_utc_evening_is_previous_local_day() {
        let formatter = ScheduleFormatter::default();
        let start = EventTime::from_utc(Utc.with_ymd_and_hms(2026, 2, 19, 1, 0, 0).unwrap());
        assert_eq!(formatter.day_of_week(&start), "Wednesday");
        assert_eq!(formatter.date(&start), "2/18/2026");
        assert_eq!(formatter.clock(&start), "8:00 PM");
    }

    #[test]
    fn twenty_four_hour_clock() {
        let formatter = ScheduleFormatter::new(Tz::UTC).with_time_format(TimeFormat::H24);
        assert_eq!(formatter.clock(&at(9, 5)), "09:05");
        assert_eq!(formatter.clock(&at(18, 0)), "18:00");
    }

    #[test]
    fn midnight_and_noon_in_12h() {
        let formatter = ScheduleFormatter::new(Tz::UTC);
        assert_eq!(formatter.clock(&at(0, 0)), "12:00 AM");
        assert_eq!(formatter.clock(&at(12, 15)), "12:15 PM");
    }

    #[test]
    fn all_day_entry() {
        let formatter = ScheduleFormatter::default();
        let start = EventTime::from_date(NaiveDate::from_ymd_opt(2026, 2, 18).unwrap());
        let end = EventTime::from_date(NaiveDate::from_ymd_opt(2026, 2, 19).unwrap());
        let entry = formatter.entry(&start, &end, true, Some("Public Skate"));
        assert_eq!(entry.day_of_week, "Wednesday");
        assert_eq!(entry.date, "2/18/2026");
        assert_eq!(entry.start_time, ALL_DAY_LABEL);
        assert_eq!(entry.end_time, "");
        assert_eq!(entry.summary.as_deref(), Some("Public Skate"));
    }

    #[test]
    fn timed_entry() {
        let formatter = ScheduleFormatter::default();
        let entry = formatter.entry(&at(18, 0), &at(19, 30), false, None);
        assert_eq!(entry.start_time, "1:00 PM");
        assert_eq!(entry.end_time, "2:30 PM");
        assert!(entry.summary.is_none());
    }

    #[test]
    fn time_format_serde_names() {
        assert_eq!(serde_json::to_string(&TimeFormat::H12).unwrap(), r#""12h""#);
        let parsed: TimeFormat = serde_json::from_str(r#""24h""#).unwrap();
        assert_eq!(parsed, TimeFormat::H24);
    }
}
