//! Raw event type from the calendar service.
//!
//! [`RawEvent`] mirrors one entry of the events listing as it arrives on the
//! wire, restricted to the fields the schedule needs. Times stay as strings
//! here; parsing them is part of normalization so that a bad value only
//! affects its own event.

use serde::{Deserialize, Serialize};

use rinkside_core::EventTime;

/// The lifecycle status of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    /// The event is confirmed.
    Confirmed,
    /// The event is tentatively confirmed.
    Tentative,
    /// The event (or this occurrence) was cancelled.
    Cancelled,
    /// A status this crate does not know about.
    #[serde(other)]
    Unknown,
}

/// The start or end of a raw event.
///
/// The service sets `dateTime` for timed events and `date` for all-day
/// events. Either may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEventTime {
    /// Full timestamp, normally RFC 3339.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    /// Date-only value, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// IANA timezone the event was created in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl RawEventTime {
    /// Creates a timed value.
    pub fn from_datetime(value: impl Into<String>) -> Self {
        Self {
            date_time: Some(value.into()),
            ..Self::default()
        }
    }

    /// Creates a date-only value.
    pub fn from_date(value: impl Into<String>) -> Self {
        Self {
            date: Some(value.into()),
            ..Self::default()
        }
    }

    /// Returns true if only a date is present.
    pub fn is_date_only(&self) -> bool {
        non_blank(&self.date).is_some() && non_blank(&self.date_time).is_none()
    }

    /// Returns the raw value to resolve, preferring the timestamp.
    pub fn preferred(&self) -> Option<&str> {
        non_blank(&self.date_time).or_else(|| non_blank(&self.date))
    }

    /// Parses the preferred value.
    ///
    /// Timestamps without an offset are read in `tz`.
    pub fn resolve(&self, tz: &chrono_tz::Tz) -> Option<EventTime> {
        if let Some(dt) = non_blank(&self.date_time) {
            return EventTime::parse_date_time(dt, tz);
        }
        non_blank(&self.date).and_then(EventTime::parse_date)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// A raw calendar event from the events listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    /// The event status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EventStatus>,

    /// The event title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// When the event starts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<RawEventTime>,

    /// When the event ends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<RawEventTime>,
}

impl RawEvent {
    /// Creates a confirmed event with the given start and end.
    pub fn new(start: RawEventTime, end: RawEventTime) -> Self {
        Self {
            status: Some(EventStatus::Confirmed),
            summary: None,
            start: Some(start),
            end: Some(end),
        }
    }

    /// Builder method to set the summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Builder method to set the status.
    pub fn with_status(mut self, status: EventStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns true if the event was cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.status == Some(EventStatus::Cancelled)
    }

    /// Returns true if the start is a date without a time of day.
    pub fn is_all_day(&self) -> bool {
        self.start.as_ref().is_some_and(RawEventTime::is_date_only)
    }
}
