//! Client configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/rinkside/config.toml` by default. Two environment variables
//! override the file: `RINKSIDE_CALENDAR_API_KEY` and `RINKSIDE_CALENDAR_ID`.
//!
//! The `api_key` value supports secret references:
//! - `pass::path/in/store`: resolved via `pass show`
//! - `env::VAR_NAME`: resolved from the environment
//! - plain text: used as-is

use std::path::{Path, PathBuf};
use std::time::Duration as StdDuration;

use chrono::Duration;
use chrono_tz::Tz;
use rinkside_core::{DEFAULT_KEYWORDS, KeywordFilter, OutputFormat, TimeFormat};
use rinkside_providers::{DEFAULT_LOOKAHEAD_DAYS, DEFAULT_MAX_RESULTS, FeedConfig};
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// Public calendar listed when no calendar id is configured.
pub const FALLBACK_CALENDAR_ID: &str =
    "8cdb8282e8d925234951e11b5002f474b68c876106fe54d8f8ec04c273566bab@group.calendar.google.com";

/// Environment variable overriding `calendar.api_key`.
pub const ENV_API_KEY: &str = "RINKSIDE_CALENDAR_API_KEY";

/// Environment variable overriding `calendar.calendar_id`.
pub const ENV_CALENDAR_ID: &str = "RINKSIDE_CALENDAR_ID";

/// The listing endpoint caps `maxResults` at this value.
const MAX_RESULTS_LIMIT: usize = 2500;

/// Ten years ahead is already far past anything a rink publishes.
const MAX_LOOKAHEAD_DAYS: u32 = 3660;

/// Configuration for the rinkside client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Calendar feed settings.
    pub calendar: CalendarSettings,

    /// Display settings.
    pub display: DisplaySettings,
}

/// Calendar feed settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarSettings {
    /// API key (supports `pass::` and `env::` prefixes).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Calendar to list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_id: Option<String>,

    /// IANA timezone for every displayed date and time.
    pub timezone: String,

    /// Days ahead of now to list.
    pub lookahead_days: u32,

    /// Maximum number of events to request.
    pub max_results: usize,

    /// Titles containing any of these (case-insensitive) are shown.
    pub keywords: Vec<String>,

    /// Request timeout in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            calendar_id: None,
            timezone: rinkside_core::DEFAULT_DISPLAY_TIMEZONE.name().to_string(),
            lookahead_days: DEFAULT_LOOKAHEAD_DAYS as u32,
            max_results: DEFAULT_MAX_RESULTS,
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            timeout_secs: None,
        }
    }
}

/// Display settings for output formatting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Output format when neither `--json` nor a subcommand says otherwise.
    pub format: OutputFormat,

    /// Clock format for start and end times.
    pub time_format: TimeFormat,

    /// Render dates as `February 18th, 2026`.
    pub long_dates: bool,
}

impl ClientConfig {
    /// Loads configuration from the default path.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> ClientResult<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> ClientResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ClientError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rinkside")
    }

    /// Applies environment overrides.
    ///
    /// `lookup` is `std::env::var` in the binary; tests pass a closure.
    #[must_use]
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(ENV_API_KEY).filter(|v| !v.trim().is_empty()) {
            self.calendar.api_key = Some(key);
        }
        if let Some(id) = lookup(ENV_CALENDAR_ID).filter(|v| !v.trim().is_empty()) {
            self.calendar.calendar_id = Some(id);
        }
        self
    }

    /// Applies overrides from the process environment.
    #[must_use]
    pub fn with_process_env(self) -> Self {
        self.with_env_overrides(|name| std::env::var(name).ok())
    }
}

impl CalendarSettings {
    /// Returns the configured calendar id, or the public-skate calendar.
    pub fn calendar_id(&self) -> &str {
        self.calendar_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .unwrap_or(FALLBACK_CALENDAR_ID)
    }

    /// Parses the display timezone.
    pub fn timezone(&self) -> ClientResult<Tz> {
        self.timezone.trim().parse::<Tz>().map_err(|e| {
            ClientError::Config(format!("unknown timezone `{}`: {}", self.timezone, e))
        })
    }

    /// Expands the API key reference.
    ///
    /// Returns `None` when no key is configured.
    pub fn resolve_api_key(&self) -> ClientResult<Option<String>> {
        match self.api_key.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => {
                let key = crate::secret::resolve(raw)?;
                Ok(Some(key).filter(|k| !k.trim().is_empty()))
            }
        }
    }

    /// Checks values that would make every fetch fail.
    pub fn validate(&self) -> ClientResult<()> {
        self.timezone()?;
        if self.lookahead_days == 0 || self.lookahead_days > MAX_LOOKAHEAD_DAYS {
            return Err(ClientError::Config(format!(
                "calendar.lookahead_days must be between 1 and {}",
                MAX_LOOKAHEAD_DAYS
            )));
        }
        if self.max_results == 0 || self.max_results > MAX_RESULTS_LIMIT {
            return Err(ClientError::Config(format!(
                "calendar.max_results must be between 1 and {}",
                MAX_RESULTS_LIMIT
            )));
        }
        if self.timeout_secs == Some(0) {
            return Err(ClientError::Config(
                "calendar.timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Builds the feed configuration, resolving the API key.
    pub fn to_feed_config(&self, time_format: TimeFormat) -> ClientResult<FeedConfig> {
        self.validate()?;

        let mut config = FeedConfig::new()
            .with_calendar_id(self.calendar_id())
            .with_display_timezone(self.timezone()?)
            .with_time_format(time_format)
            .with_lookahead(Duration::days(i64::from(self.lookahead_days)))
            .with_max_results(self.max_results)
            .with_keywords(KeywordFilter::new(&self.keywords));

        if let Some(key) = self.resolve_api_key()? {
            config = config.with_api_key(key);
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(StdDuration::from_secs(secs));
        }

        Ok(config)
    }
}
