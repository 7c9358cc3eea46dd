//! Google Calendar provider implementation.
//!
//! This module implements the [`CalendarProvider`] trait for public Google
//! calendars read with an API key.

use tracing::debug;

use crate::error::ProviderResult;
use crate::provider::{BoxFuture, CalendarProvider, FetchOptions, FetchResult};

use super::client::GoogleCalendarClient;
use super::config::GoogleConfig;

/// Google Calendar provider.
///
/// Fetches events with the Calendar API v3 events listing. It holds no state
/// besides the HTTP client, so concurrent calls do not interfere.
#[derive(Debug)]
pub struct GoogleProvider {
    client: GoogleCalendarClient,
}

impl GoogleProvider {
    /// The provider name used in errors and logs.
    pub const NAME: &'static str = "google";

    /// Creates a new Google provider with the given configuration.
    ///
    /// No request is made until [`CalendarProvider::fetch_events`] is called.
    pub fn new(config: GoogleConfig) -> ProviderResult<Self> {
        debug!(api_base = %config.api_base, "creating Google Calendar provider");
        let client = GoogleCalendarClient::new(config).map_err(|e| e.with_provider(Self::NAME))?;
        Ok(Self { client })
    }
}

impl CalendarProvider for GoogleProvider {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn fetch_events<'a>(
        &'a self,
        calendar_id: &'a str,
        options: FetchOptions,
    ) -> BoxFuture<'a, ProviderResult<FetchResult>> {
        Box::pin(async move { self.client.list_events(calendar_id, &options).await })
    }
}
