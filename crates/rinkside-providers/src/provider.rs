//! CalendarProvider trait definition.
//!
//! This module defines the [`CalendarProvider`] trait, the seam between the
//! schedule adapter and whatever serves the raw event listing. The Google
//! Calendar implementation lives in [`crate::google`]; tests plug in their
//! own providers.

use std::future::Future;
use std::pin::Pin;

use chrono_tz::Tz;
use rinkside_core::TimeWindow;

use crate::error::ProviderResult;
use crate::raw_event::RawEvent;

/// Field mask limiting the listing to what the schedule needs.
pub const SCHEDULE_FIELDS: &str = "items(status,summary,start(dateTime,date),end(dateTime,date))";

/// Result from fetching events.
#[derive(Debug, Default)]
pub struct FetchResult {
    /// The fetched events, in the order the service returned them.
    pub events: Vec<RawEvent>,
    /// Number of listing entries that could not be read as events.
    pub skipped: usize,
}

impl FetchResult {
    /// Creates a new fetch result with events.
    pub fn with_events(events: Vec<RawEvent>) -> Self {
        Self { events, skipped: 0 }
    }
}

/// Options for fetching events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchOptions {
    /// Only events starting inside this window.
    pub time_window: Option<TimeWindow>,
    /// Maximum number of events to return.
    pub max_results: Option<usize>,
    /// Whether to expand recurring events into instances.
    pub expand_recurring: bool,
    /// Timezone the service should use in its response.
    pub timezone: Option<Tz>,
    /// Partial-response field mask.
    pub fields: Option<String>,
}

impl FetchOptions {
    /// Creates new fetch options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set time window.
    pub fn with_time_window(mut self, window: TimeWindow) -> Self {
        self.time_window = Some(window);
        self
    }

    /// Builder method to set max results.
    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = Some(max);
        self
    }

    /// Builder method to enable recurring event expansion.
    pub fn with_expand_recurring(mut self, expand: bool) -> Self {
        self.expand_recurring = expand;
        self
    }

    /// Builder method to set the response timezone.
    pub fn with_timezone(mut self, tz: Tz) -> Self {
        self.timezone = Some(tz);
        self
    }

    /// Builder method to set the field mask.
    pub fn with_fields(mut self, fields: impl Into<String>) -> Self {
        self.fields = Some(fields.into());
        self
    }
}

/// A boxed future for async trait methods.
///
/// Boxing keeps the trait object-safe so the adapter can hold a
/// `dyn CalendarProvider`.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The core abstraction for calendar providers.
///
/// A provider performs exactly one listing request per call. It does not
/// retry, cache, or filter; cancelled events are passed through so the
/// adapter can apply its own rules.
pub trait CalendarProvider: Send + Sync {
    /// Returns the name/type of this provider (e.g., "google").
    fn name(&self) -> &str;

    /// Lists events of `calendar_id`, ordered by start time.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` on network errors, non-success responses and
    /// unreadable bodies.
    fn fetch_events<'a>(
        &'a self,
        calendar_id: &'a str,
        options: FetchOptions,
    ) -> BoxFuture<'a, ProviderResult<FetchResult>>;
}
