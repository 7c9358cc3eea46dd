//! Schedule command: fetch the feed once and print it.

use rinkside_core::OutputFormat;
use rinkside_providers::CalendarFeedAdapter;
use tracing::{debug, error};

use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::render::{FAILED_TEXT, LOADING_TEXT, RenderOptions, render};

/// Fetches the schedule and prints it to stdout.
///
/// Fetch failures render as an empty schedule. Only a configuration that
/// cannot produce an adapter at all is reported as an error.
pub async fn run(config: &ClientConfig, format: OutputFormat) -> ClientResult<()> {
    let adapter = match build_adapter(config) {
        Ok(adapter) => adapter,
        Err(e) => {
            error!(error = %e, "failed to set up calendar feed");
            println!("{}", FAILED_TEXT);
            return Err(e);
        }
    };

    if format == OutputFormat::Table {
        eprintln!("{}", LOADING_TEXT);
    }

    let entries = adapter.fetch_schedule().await;
    debug!(entries = entries.len(), "schedule ready");

    let options = RenderOptions {
        long_dates: config.display.long_dates,
    };
    println!("{}", render(&entries, format, options)?);
    Ok(())
}

/// Builds the adapter from the loaded configuration.
pub fn build_adapter(config: &ClientConfig) -> ClientResult<CalendarFeedAdapter> {
    let feed = config
        .calendar
        .to_feed_config(config.display.time_format)?;
    Ok(CalendarFeedAdapter::new(feed)?)
}
