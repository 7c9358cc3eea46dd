//! Schedule feed: calendar providers and the public-skate adapter.
//!
//! This crate turns a remote calendar into display-ready schedule rows:
//!
//! - [`CalendarProvider`] - The trait a calendar backend implements
//! - [`RawEvent`] - Events as listed by the calendar service
//! - [`Normalizer`] - Filters raw events and renders them for display
//! - [`CalendarFeedAdapter`] - Fetch and normalize in one call, empty on error
//! - [`ProviderError`] - Error types for provider operations
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────┐
//! │ Google Calendar API │
//! └──────────┬──────────┘
//!            │  events.list
//!            ▼
//! ┌─────────────────────┐
//! │   GoogleProvider    │  CalendarProvider
//! └──────────┬──────────┘
//!            │  Vec<RawEvent>
//!            ▼
//! ┌─────────────────────┐
//! │     Normalizer      │  status + keyword filter, display timezone
//! └──────────┬──────────┘
//!            │  Vec<ScheduleEntry>
//!            ▼
//! ┌─────────────────────┐
//! │ CalendarFeedAdapter │
//! └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use rinkside_providers::{CalendarFeedAdapter, FeedConfig};
//!
//! # async fn run() -> Result<(), rinkside_providers::ProviderError> {
//! let adapter = CalendarFeedAdapter::new(
//!     FeedConfig::new()
//!         .with_api_key("AIza...")
//!         .with_calendar_id("abc@group.calendar.google.com"),
//! )?;
//! for entry in adapter.fetch_schedule().await {
//!     println!("{} {} {}", entry.day_of_week, entry.date, entry.start_time);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod error;
#[cfg(feature = "google")]
pub mod google;
pub mod normalize;
pub mod provider;
pub mod raw_event;

#[cfg(test)]
mod test_support;

// Re-export main types at crate root
pub use adapter::{CalendarFeedAdapter, DEFAULT_LOOKAHEAD_DAYS, DEFAULT_MAX_RESULTS, FeedConfig};
pub use error::{HttpStatus, ProviderError, ProviderErrorCode, ProviderResult};
pub use normalize::{Normalizer, normalize_events};
pub use provider::{BoxFuture, CalendarProvider, FetchOptions, FetchResult, SCHEDULE_FIELDS};
pub use raw_event::{EventStatus, RawEvent, RawEventTime};
