//! Google Calendar feed configuration.

use std::time::Duration;

/// Base URL for Google Calendar API v3.
pub const CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";

/// API key for read access to public calendars.
///
/// `Debug` never prints the key itself.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a key, trimming surrounding whitespace.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into().trim().to_string())
    }

    /// Returns the key for use in a request.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Validates that the key looks usable.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.0.is_empty() {
            return Err("API key is empty");
        }
        if self.0.chars().any(char::is_whitespace) {
            return Err("API key must not contain whitespace");
        }
        Ok(())
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Configuration for the Google Calendar provider.
#[derive(Debug, Clone)]
pub struct GoogleConfig {
    /// API key sent as the `key` query parameter.
    pub api_key: ApiKey,

    /// Base URL of the Calendar API.
    ///
    /// Defaults to [`CALENDAR_API_BASE`].
    pub api_base: String,

    /// Request timeout.
    ///
    /// `None` leaves the HTTP client's default in place.
    pub timeout: Option<Duration>,

    /// User agent string for API requests.
    pub user_agent: String,
}

impl GoogleConfig {
    /// Creates a new Google configuration with the given API key.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            api_base: CALENDAR_API_BASE.to_string(),
            timeout: None,
            user_agent: format!("rinkside/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Sets the API base URL.
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the events listing URL for `calendar_id`.
    pub fn events_url(&self, calendar_id: &str) -> String {
        format!(
            "{}/calendars/{}/events",
            self.api_base,
            urlencoding::encode(calendar_id)
        )
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        self.api_key
            .validate()
            .map_err(|e| format!("invalid API key: {}", e))?;

        if !self.api_base.starts_with("http://") && !self.api_base.starts_with("https://") {
            return Err(format!("API base must be an http(s) URL: {}", self.api_base));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_is_trimmed_and_redacted() {
        let key = ApiKey::new("  AIza-test-key \n");
        assert_eq!(key.expose(), "AIza-test-key");
        assert_eq!(format!("{:?}", key), "ApiKey(***)");
    }

    #[test]
    fn api_key_validation() {
        assert!(ApiKey::new("AIza-test-key").validate().is_ok());
        assert!(ApiKey::new("   ").validate().is_err());
        assert!(ApiKey::new("two words").validate().is_err());
    }

    #[test]
    fn config_creation() {
        let config = GoogleConfig::new(ApiKey::new("key"));
        assert_eq!(config.api_base, CALENDAR_API_BASE);
        assert!(config.timeout.is_none());
        assert!(config.user_agent.starts_with("rinkside/"));
    }

    #[test]
    fn events_url_escapes_calendar_id() {
        let config = GoogleConfig::new(ApiKey::new("key"));
        assert_eq!(
            config.events_url("abc123@group.calendar.google.com"),
            "https://www.googleapis.com/calendar/v3/calendars/abc123%40group.calendar.google.com/events"
        );
    }

    #[test]
    fn api_base_trailing_slash_is_dropped() {
        let config = GoogleConfig::new(ApiKey::new("key")).with_api_base("http://127.0.0.1:9000/");
        assert_eq!(
            config.events_url("primary"),
            "http://127.0.0.1:9000/calendars/primary/events"
        );
    }

    #[test]
    fn config_validation() {
        let config = GoogleConfig::new(ApiKey::new("key"));
        assert!(config.validate().is_ok());

        let no_key = GoogleConfig::new(ApiKey::new(""));
        assert!(no_key.validate().unwrap_err().contains("API key"));

        let bad_base = GoogleConfig::new(ApiKey::new("key")).with_api_base("ftp://example.com");
        assert!(bad_base.validate().is_err());
    }

    #[test]
    fn config_builder_methods() {
        let config = GoogleConfig::new(ApiKey::new("key"))
            .with_timeout(Duration::from_secs(10))
            .with_api_base("http://127.0.0.1:8080/");
        assert_eq!(config.timeout, Some(Duration::from_secs(10)));
        assert_eq!(config.api_base, "http://127.0.0.1:8080");
        assert!(config.user_agent.starts_with("rinkside/"));
    }
}
