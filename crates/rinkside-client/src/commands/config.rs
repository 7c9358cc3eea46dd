//! Configuration commands.

use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::secret;

const REDACTED: &str = "<redacted>";

/// Dump the current configuration to stdout.
///
/// A plain-text API key is replaced with a placeholder; secret references
/// are shown as written.
pub fn dump(config: &ClientConfig) -> ClientResult<()> {
    let toml_str = toml::to_string_pretty(&redacted(config))
        .map_err(|e| ClientError::Config(format!("failed to serialize config: {}", e)))?;
    println!("# config.toml ({})", ClientConfig::default_path().display());
    println!("{}", toml_str);

    Ok(())
}

fn redacted(config: &ClientConfig) -> ClientConfig {
    let mut config = config.clone();
    if let Some(ref key) = config.calendar.api_key
        && !secret::is_reference(key)
    {
        config.calendar.api_key = Some(REDACTED.to_string());
    }
    config
}

/// Validate the configuration.
///
/// Resolves the API key so that broken secret references show up here
/// rather than as an empty schedule.
pub fn validate(config: &ClientConfig) -> ClientResult<()> {
    let feed = config
        .calendar
        .to_feed_config(config.display.time_format)?;
    debug!(
        calendar_id = feed.calendar_id(),
        timezone = %feed.display_timezone,
        "validated feed configuration"
    );

    if feed.api_key().is_none() {
        println!(
            "warning: no API key configured; set calendar.api_key or {}",
            crate::config::ENV_API_KEY
        );
    }
    if feed.keywords.keywords().is_empty() {
        println!("warning: calendar.keywords is empty; no event will be shown");
    }

    println!("calendar: {}", config.calendar.calendar_id());
    println!("Configuration is valid.");
    Ok(())
}

/// Show the configuration file path.
pub fn path() -> ClientResult<()> {
    let config_path = ClientConfig::default_path();
    println!("config: {}", config_path.display());
    Ok(())
}
