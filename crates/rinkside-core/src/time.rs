//! Time types for schedule entries.
//!
//! This module provides [`EventTime`] for representing a resolved event
//! start or end (either a specific instant or an all-day date), and
//! [`TimeWindow`] for the lookahead range sent to the calendar service.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// The timezone every schedule string is rendered in unless configured otherwise.
pub const DEFAULT_DISPLAY_TIMEZONE: Tz = chrono_tz::America::New_York;

/// Time of day used to anchor date-only values before converting them for
/// display.
///
/// Midnight would land on the previous day for every zone west of UTC.
const ALL_DAY_ANCHOR: NaiveTime = match NaiveTime::from_hms_opt(12, 0, 0) {
    Some(time) => time,
    None => panic!("invalid all-day anchor"),
};

/// Represents a resolved event start or end.
///
/// Calendar services send either a full timestamp or a bare date:
/// - **DateTime**: A specific point in time, stored as UTC
/// - **AllDay**: A date without a time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTime {
    /// A specific datetime, stored in UTC.
    DateTime(DateTime<Utc>),
    /// A date-only value (all-day events).
    AllDay(NaiveDate),
}

impl EventTime {
    /// Creates a new `EventTime::DateTime` from a UTC datetime.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self::DateTime(dt)
    }

    /// Creates a new `EventTime::AllDay` from a date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::AllDay(date)
    }

    /// Parses a timestamp as sent in a `dateTime` field.
    ///
    /// RFC 3339 values keep their own offset. Values without an offset are
    /// read as wall-clock time in `tz`. Returns `None` for anything else.
    pub fn parse_date_time(value: &str, tz: &Tz) -> Option<Self> {
        let value = value.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
            return Some(Self::DateTime(dt.with_timezone(&Utc)));
        }

        let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
            .ok()?;
        Some(Self::DateTime(localize(tz, naive).with_timezone(&Utc)))
    }

    /// Parses a `YYYY-MM-DD` value as sent in a `date` field.
    pub fn parse_date(value: &str) -> Option<Self> {
        NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .ok()
            .map(Self::AllDay)
    }

    /// Returns `true` if this is an all-day event time.
    pub fn is_all_day(&self) -> bool {
        matches!(self, Self::AllDay(_))
    }

    /// Returns the instant to render in `tz`.
    ///
    /// All-day dates are anchored at midday in `tz`, so the calendar date
    /// never shifts regardless of the zone's offset from UTC.
    pub fn in_timezone(&self, tz: &Tz) -> DateTime<Tz> {
        match self {
            Self::DateTime(dt) => dt.with_timezone(tz),
            Self::AllDay(date) => midday_in(*date, tz),
        }
    }
}

/// Returns 12:00:00 on `date` in `tz`.
fn midday_in(date: NaiveDate, tz: &Tz) -> DateTime<Tz> {
    localize(tz, date.and_time(ALL_DAY_ANCHOR))
}

/// Resolves a wall-clock time in `tz`.
///
/// On a DST overlap the earlier reading wins. Inside a DST gap the value is
/// moved forward by the length of the gap, the way clocks are set forward.
fn localize(tz: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => match tz.from_local_datetime(&(naive + Duration::hours(1))) {
            LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt,
            // Gaps longer than an hour, such as a skipped calendar day.
            LocalResult::None => tz.from_utc_datetime(&naive),
        },
    }
}

/// A time window for querying calendar events.
///
/// Represents a half-open interval `[start, end)` in UTC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    /// Start of the window (inclusive).
    pub start: DateTime<Utc>,
    /// End of the window (exclusive).
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Creates a time window starting at `now` extending by `lookahead`.
    ///
    /// Negative durations collapse to an empty window at `now`. Returns
    /// `None` when the end falls outside the representable date range.
    pub fn from_now(now: DateTime<Utc>, lookahead: Duration) -> Option<Self> {
        let end = now.checked_add_signed(lookahead.max(Duration::zero()))?;
        Some(Self { start: now, end })
    }
}
