//! RawEvent to ScheduleEntry conversion pipeline.
//!
//! This module turns the raw listing into display rows:
//! 1. Drops cancelled events
//! 2. Drops events whose title is not on the keyword allow-list
//! 3. Resolves start and end, dropping events missing either
//! 4. Renders weekday, date and clock strings in the display timezone
//!
//! The pipeline is a pure function of its input. Upstream order is kept.

use rinkside_core::{KeywordFilter, ScheduleEntry, ScheduleFormatter};
use tracing::debug;

use crate::raw_event::RawEvent;

/// Converts raw events into schedule rows.
#[derive(Debug, Clone)]
pub struct Normalizer {
    filter: KeywordFilter,
    formatter: ScheduleFormatter,
}

impl Normalizer {
    /// Creates a normalizer with the given allow-list and formatter.
    pub fn new(filter: KeywordFilter, formatter: ScheduleFormatter) -> Self {
        Self { filter, formatter }
    }

    /// Returns true if `raw` passes the status and title filters.
    pub fn is_relevant(&self, raw: &RawEvent) -> bool {
        !raw.is_cancelled() && self.filter.matches(raw.summary.as_deref())
    }

    /// Converts a single event, ignoring the filters.
    ///
    /// Returns `None` when the start or end cannot be resolved.
    pub fn normalize_event(&self, raw: &RawEvent) -> Option<ScheduleEntry> {
        let tz = self.formatter.timezone();
        let start = raw.start.as_ref()?.resolve(&tz)?;
        let end = raw.end.as_ref()?.resolve(&tz)?;

        Some(
            self.formatter
                .entry(&start, &end, raw.is_all_day(), raw.summary.as_deref()),
        )
    }

    /// Filters and converts a listing.
    pub fn normalize_events(&self, raw_events: &[RawEvent]) -> Vec<ScheduleEntry> {
        let mut incomplete = 0usize;
        let entries: Vec<ScheduleEntry> = raw_events
            .iter()
            .filter(|e| self.is_relevant(e))
            .filter_map(|e| {
                let entry = self.normalize_event(e);
                if entry.is_none() {
                    incomplete += 1;
                }
                entry
            })
            .collect();

        debug!(
            received = raw_events.len(),
            kept = entries.len(),
            incomplete,
            "normalized schedule"
        );
        entries
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(KeywordFilter::default(), ScheduleFormatter::default())
    }
}

/// Filters and converts a listing with the default allow-list and timezone.
pub fn normalize_events(raw_events: &[RawEvent]) -> Vec<ScheduleEntry> {
    Normalizer::default().normalize_events(raw_events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw_event::{EventStatus, RawEventTime};
    use rinkside_core::ALL_DAY_LABEL;

    fn timed(summary: &str, start: &str, end: &str) -> RawEvent {
        RawEvent::new(
            RawEventTime::from_datetime(start),
            RawEventTime::from_datetime(end),
        )
        .with_summary(summary)
    }

    fn all_day(summary: &str, start: &str, end: &str) -> RawEvent {
        RawEvent::new(RawEventTime::from_date(start), RawEventTime::from_date(end))
            .with_summary(summary)
    }

    fn public_skate() -> RawEvent {
        timed(
            "Public Skate",
            "2026-02-18T18:00:00Z",
            "2026-02-18T19:30:00Z",
        )
    }

    mod filtering {
        use super::*;

        #[test]
        fn cancelled_events_are_dropped() {
            let events = vec![
                public_skate().with_status(EventStatus::Cancelled),
                public_skate().with_status(EventStatus::Tentative),
            ];
            let entries = normalize_events(&events);
            assert_eq!(entries.len(), 1);
        }

        #[test]
        fn non_matching_titles_are_dropped() {
            let mut untitled = public_skate();
            untitled.summary = None;
            let events = vec![
                timed("Hockey League", "2026-02-18T20:00:00Z", "2026-02-18T21:00:00Z"),
                untitled,
                public_skate(),
            ];
            let entries = normalize_events(&events);
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].summary.as_deref(), Some("Public Skate"));
        }

        #[test]
        fn custom_keywords() {
            let normalizer = Normalizer::new(
                KeywordFilter::new(["stick and puck"]),
                ScheduleFormatter::default(),
            );
            let events = vec![
                public_skate(),
                timed("Stick and Puck", "2026-02-18T20:00:00Z", "2026-02-18T21:00:00Z"),
            ];
            let entries = normalizer.normalize_events(&events);
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].start_time, "3:00 PM");
        }
    }

    mod incomplete {
        use super::*;

        #[test]
        fn missing_start_or_end_is_dropped_without_affecting_others() {
            let mut no_start = public_skate();
            no_start.start = None;
            let mut empty_end = public_skate();
            empty_end.end = Some(RawEventTime::default());
            let mut bad_start = public_skate();
            bad_start.start = Some(RawEventTime::from_datetime("not a time"));

            let events = vec![no_start, public_skate(), empty_end, bad_start];
            let entries = normalize_events(&events);
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].start_time, "1:00 PM");
        }
    }

    mod conversion {
        use super::*;

        #[test]
        fn timed_public_skate() {
            let entries = normalize_events(&[public_skate()]);
            assert_eq!(entries.len(), 1);
            let entry = &entries[0];
            assert_eq!(entry.day_of_week, "Wednesday");
            assert_eq!(entry.date, "2/18/2026");
            assert_eq!(entry.start_time, "1:00 PM");
            assert_eq!(entry.end_time, "2:30 PM");
        }

        #[test]
        fn all_day_round_trip() {
            let entries = normalize_events(&[all_day("Public Skate", "2026-02-18", "2026-02-19")]);
            let entry = &entries[0];
            assert_eq!(entry.day_of_week, "Wednesday");
            assert_eq!(entry.date, "2/18/2026");
            assert_eq!(entry.start_time, ALL_DAY_LABEL);
            assert_eq!(entry.end_time, "");
        }

        #[test]
        fn date_only_never_shifts_day() {
            let event = all_day("Public Skate", "2026-02-18", "2026-02-19");
            for tz in [
                chrono_tz::America::New_York,
                chrono_tz::America::Los_Angeles,
                chrono_tz::Pacific::Honolulu,
                chrono_tz::Asia::Tokyo,
                chrono_tz::Pacific::Kiritimati,
            ] {
                let normalizer =
                    Normalizer::new(KeywordFilter::default(), ScheduleFormatter::new(tz));
                let entry = normalizer.normalize_event(&event).unwrap();
                assert_eq!(entry.date, "2/18/2026", "{tz}");
                assert_eq!(entry.day_of_week, "Wednesday", "{tz}");
            }
        }

        #[test]
        fn date_only_start_with_timed_end_is_all_day() {
            let event = RawEvent::new(
                RawEventTime::from_date("2026-02-18"),
                RawEventTime::from_datetime("2026-02-18T23:00:00Z"),
            )
            .with_summary("Public Skate");
            let entry = Normalizer::default().normalize_event(&event).unwrap();
            assert_eq!(entry.start_time, ALL_DAY_LABEL);
            assert_eq!(entry.end_time, "");
        }

        #[test]
        fn timed_start_with_date_end_uses_midday_end() {
            let event = RawEvent::new(
                RawEventTime::from_datetime("2026-02-18T15:00:00Z"),
                RawEventTime::from_date("2026-02-18"),
            )
            .with_summary("Public Skate");
            let entry = Normalizer::default().normalize_event(&event).unwrap();
            assert_eq!(entry.start_time, "10:00 AM");
            assert_eq!(entry.end_time, "12:00 PM");
        }

        #[test]
        fn upstream_order_is_kept() {
            let events = vec![
                timed("Public Skate B", "2026-02-20T18:00:00Z", "2026-02-20T19:00:00Z"),
                timed("Public Skate A", "2026-02-18T18:00:00Z", "2026-02-18T19:00:00Z"),
            ];
            let entries = normalize_events(&events);
            let titles: Vec<_> = entries.iter().filter_map(|e| e.summary.as_deref()).collect();
            assert_eq!(titles, ["Public Skate B", "Public Skate A"]);
        }

        #[test]
        fn normalization_is_idempotent() {
            let events = vec![
                public_skate(),
                all_day("Public Skating", "2026-02-21", "2026-02-22"),
                public_skate().with_status(EventStatus::Cancelled),
            ];
            let normalizer = Normalizer::default();
            let first = normalizer.normalize_events(&events);
            let second = normalizer.normalize_events(&events);
            assert_eq!(first, second);
            assert_eq!(first.len(), 2);
        }
    }
}
