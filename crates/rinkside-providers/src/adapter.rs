//! The schedule feed adapter.
//!
//! [`CalendarFeedAdapter`] ties a [`CalendarProvider`] to the normalization
//! pipeline. [`CalendarFeedAdapter::fetch_schedule`] never fails: every
//! configuration, transport and response problem is logged and turned into
//! an empty schedule. [`CalendarFeedAdapter::try_fetch_schedule`] keeps the
//! error for callers that want to tell the cases apart.

use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::{Duration, Utc};
use chrono_tz::Tz;
use rinkside_core::{
    DEFAULT_DISPLAY_TIMEZONE, KeywordFilter, ScheduleEntry, ScheduleFormatter, TimeFormat,
    TimeWindow,
};
use tracing::{debug, error};

use crate::error::{ProviderError, ProviderResult};
use crate::normalize::Normalizer;
use crate::provider::{CalendarProvider, FetchOptions, SCHEDULE_FIELDS};

/// Default number of days ahead to list.
pub const DEFAULT_LOOKAHEAD_DAYS: i64 = 30;

/// Default cap on listed events.
pub const DEFAULT_MAX_RESULTS: usize = 100;

/// Settings for the schedule feed.
#[derive(Clone)]
pub struct FeedConfig {
    /// API key for the calendar service. Required for any fetch.
    pub api_key: Option<String>,
    /// Calendar to list. Required.
    pub calendar_id: Option<String>,
    /// Timezone all display strings are computed in.
    pub display_timezone: Tz,
    /// Clock format for start and end times.
    pub time_format: TimeFormat,
    /// How far ahead of now to list.
    pub lookahead: Duration,
    /// Maximum number of events to request.
    pub max_results: usize,
    /// Title allow-list.
    pub keywords: KeywordFilter,
    /// Base URL of the calendar API.
    #[cfg(feature = "google")]
    pub api_base: String,
    /// Request timeout; `None` keeps the transport default.
    pub timeout: Option<StdDuration>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            calendar_id: None,
            display_timezone: DEFAULT_DISPLAY_TIMEZONE,
            time_format: TimeFormat::default(),
            lookahead: Duration::days(DEFAULT_LOOKAHEAD_DAYS),
            max_results: DEFAULT_MAX_RESULTS,
            keywords: KeywordFilter::default(),
            #[cfg(feature = "google")]
            api_base: crate::google::CALENDAR_API_BASE.to_string(),
            timeout: None,
        }
    }
}

impl FeedConfig {
    /// Creates a config with defaults and no credentials.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Builder method to set the calendar id.
    pub fn with_calendar_id(mut self, calendar_id: impl Into<String>) -> Self {
        self.calendar_id = Some(calendar_id.into());
        self
    }

    /// Builder method to set the display timezone.
    pub fn with_display_timezone(mut self, tz: Tz) -> Self {
        self.display_timezone = tz;
        self
    }

    /// Builder method to set the clock format.
    pub fn with_time_format(mut self, time_format: TimeFormat) -> Self {
        self.time_format = time_format;
        self
    }

    /// Builder method to set the lookahead.
    pub fn with_lookahead(mut self, lookahead: Duration) -> Self {
        self.lookahead = lookahead;
        self
    }

    /// Builder method to set the result cap.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Builder method to set the title allow-list.
    pub fn with_keywords(mut self, keywords: KeywordFilter) -> Self {
        self.keywords = keywords;
        self
    }

    /// Builder method to set the API base URL.
    #[cfg(feature = "google")]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Builder method to set the request timeout.
    pub fn with_timeout(mut self, timeout: StdDuration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the trimmed API key, or `None` if unset or blank.
    pub fn api_key(&self) -> Option<&str> {
        non_blank(self.api_key.as_deref())
    }

    /// Returns the trimmed calendar id, or `None` if unset or blank.
    pub fn calendar_id(&self) -> Option<&str> {
        non_blank(self.calendar_id.as_deref())
    }

    /// Checks that a fetch can be attempted.
    pub fn validate(&self) -> ProviderResult<()> {
        if self.api_key().is_none() {
            return Err(ProviderError::configuration("missing calendar API key"));
        }
        if self.calendar_id().is_none() {
            return Err(ProviderError::configuration("missing calendar id"));
        }
        Ok(())
    }

    fn fetch_options(&self) -> ProviderResult<FetchOptions> {
        let window = TimeWindow::from_now(Utc::now(), self.lookahead).ok_or_else(|| {
            ProviderError::configuration(format!(
                "lookahead of {} days is out of range",
                self.lookahead.num_days()
            ))
        })?;
        Ok(FetchOptions::new()
            .with_time_window(window)
            .with_max_results(self.max_results)
            .with_expand_recurring(true)
            .with_timezone(self.display_timezone)
            .with_fields(SCHEDULE_FIELDS))
    }
}

impl std::fmt::Debug for FeedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("FeedConfig");
        s.field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("calendar_id", &self.calendar_id)
            .field("display_timezone", &self.display_timezone)
            .field("time_format", &self.time_format)
            .field("lookahead", &self.lookahead)
            .field("max_results", &self.max_results)
            .field("keywords", &self.keywords);
        #[cfg(feature = "google")]
        s.field("api_base", &self.api_base);
        s.field("timeout", &self.timeout).finish()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Fetches the upcoming public-skate schedule.
#[derive(Clone)]
pub struct CalendarFeedAdapter {
    config: FeedConfig,
    provider: Option<Arc<dyn CalendarProvider>>,
    normalizer: Normalizer,
}

impl std::fmt::Debug for CalendarFeedAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarFeedAdapter")
            .field("config", &self.config)
            .field("provider", &self.provider.as_ref().map(|p| p.name()))
            .finish()
    }
}

impl CalendarFeedAdapter {
    /// Creates an adapter backed by the Google Calendar API.
    ///
    /// Without an API key no provider is built and every fetch comes back
    /// empty without touching the network.
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be built or the API base is invalid.
    #[cfg(feature = "google")]
    pub fn new(config: FeedConfig) -> ProviderResult<Self> {
        use crate::google::{ApiKey, GoogleConfig, GoogleProvider};

        let provider = match config.api_key() {
            Some(key) => {
                let mut google =
                    GoogleConfig::new(ApiKey::new(key)).with_api_base(config.api_base.clone());
                if let Some(timeout) = config.timeout {
                    google = google.with_timeout(timeout);
                }
                let provider: Arc<dyn CalendarProvider> = Arc::new(GoogleProvider::new(google)?);
                Some(provider)
            }
            None => None,
        };

        Ok(Self::build(config, provider))
    }

    /// Creates an adapter around an existing provider.
    pub fn with_provider(config: FeedConfig, provider: Arc<dyn CalendarProvider>) -> Self {
        Self::build(config, Some(provider))
    }

    fn build(config: FeedConfig, provider: Option<Arc<dyn CalendarProvider>>) -> Self {
        let normalizer = Normalizer::new(
            config.keywords.clone(),
            ScheduleFormatter::new(config.display_timezone).with_time_format(config.time_format),
        );
        Self {
            config,
            provider,
            normalizer,
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Fetches and normalizes the schedule, keeping any error.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the API key or calendar id is
    /// missing or the lookahead runs past the last representable date, in
    /// which case no request is made. Otherwise returns whatever the provider
    /// reported.
    pub async fn try_fetch_schedule(&self) -> ProviderResult<Vec<ScheduleEntry>> {
        self.config.validate()?;
        let calendar_id = self
            .config
            .calendar_id()
            .ok_or_else(|| ProviderError::configuration("missing calendar id"))?;
        let provider = self
            .provider
            .as_ref()
            .ok_or_else(|| ProviderError::configuration("no calendar provider configured"))?;

        let options = self.config.fetch_options()?;
        let result = provider.fetch_events(calendar_id, options).await?;
        if result.skipped > 0 {
            debug!(skipped = result.skipped, "skipped unreadable listing entries");
        }

        Ok(self.normalizer.normalize_events(&result.events))
    }

    /// Fetches and normalizes the schedule.
    ///
    /// Errors are logged and reported as an empty schedule.
    pub async fn fetch_schedule(&self) -> Vec<ScheduleEntry> {
        match self.try_fetch_schedule().await {
            Ok(entries) => entries,
            Err(err) => {
                let status = err.http_status().map(|s| s.code);
                let status_text = err.http_status().map(|s| s.text.as_str());
                error!(
                    code = %err.code(),
                    status,
                    status_text,
                    message = err.message(),
                    calendar_id = self.config.calendar_id(),
                    "failed to fetch calendar events"
                );
                Vec::new()
            }
        }
    }
}
