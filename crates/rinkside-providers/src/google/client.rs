//! Google Calendar API client.
//!
//! This module provides a low-level HTTP client for the events listing
//! endpoint: request building, error extraction, and response parsing.

use chrono::SecondsFormat;
use serde::Deserialize;
use tracing::debug;

use crate::error::{ProviderError, ProviderResult};
use crate::provider::{FetchOptions, FetchResult};
use crate::raw_event::RawEvent;

use super::config::GoogleConfig;

/// Google Calendar API client.
#[derive(Debug)]
pub struct GoogleCalendarClient {
    http_client: reqwest::Client,
    config: GoogleConfig,
}

impl GoogleCalendarClient {
    /// Creates a new client from `config`.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid or the HTTP client cannot be
    /// built.
    pub fn new(config: GoogleConfig) -> ProviderResult<Self> {
        config.validate().map_err(ProviderError::configuration)?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().map_err(|e| {
            ProviderError::internal(format!("failed to create HTTP client: {}", e)).with_source(e)
        })?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Lists events from a calendar with a single request.
    ///
    /// Entries that cannot be read as events are counted in
    /// [`FetchResult::skipped`] rather than failing the whole listing.
    pub async fn list_events(
        &self,
        calendar_id: &str,
        options: &FetchOptions,
    ) -> ProviderResult<FetchResult> {
        let url = self.config.events_url(calendar_id);
        let query = build_query(self.config.api_key.expose(), options);

        debug!(
            calendar_id,
            time_min = query_value(&query, "timeMin"),
            time_max = query_value(&query, "timeMax"),
            "requesting calendar events"
        );

        let response = self
            .http_client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| {
                // The request URL carries the API key.
                let e = e.without_url();
                let message = if e.is_timeout() {
                    "request timeout".to_string()
                } else if e.is_connect() {
                    format!("connection failed: {}", e)
                } else {
                    format!("request failed: {}", e)
                };
                ProviderError::network(message).with_source(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_from_response(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
                &body,
            ));
        }

        let body = response.text().await.map_err(|e| {
            let e = e.without_url();
            ProviderError::network(format!("failed to read response: {}", e)).with_source(e)
        })?;

        let result = parse_event_list(&body)?;
        debug!(
            calendar_id,
            events = result.events.len(),
            skipped = result.skipped,
            "fetched calendar events"
        );
        Ok(result)
    }
}

/// Builds the query string for the events listing.
pub(crate) fn build_query(api_key: &str, options: &FetchOptions) -> Vec<(&'static str, String)> {
    let mut query = vec![("key", api_key.to_string())];

    if let Some(ref window) = options.time_window {
        query.push((
            "timeMin",
            window.start.to_rfc3339_opts(SecondsFormat::Millis, true),
        ));
        query.push((
            "timeMax",
            window.end.to_rfc3339_opts(SecondsFormat::Millis, true),
        ));
    }

    query.push(("singleEvents", options.expand_recurring.to_string()));
    // The API only accepts startTime ordering for expanded listings.
    if options.expand_recurring {
        query.push(("orderBy", "startTime".to_string()));
    }

    if let Some(max) = options.max_results {
        query.push(("maxResults", max.to_string()));
    }
    if let Some(tz) = options.timezone {
        query.push(("timeZone", tz.name().to_string()));
    }
    if let Some(ref fields) = options.fields {
        query.push(("fields", fields.clone()));
    }

    query
}

fn query_value<'a>(query: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
    query
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.as_str())
}

/// Error envelope returned by Google APIs.
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

/// Builds the error for a non-success response.
///
/// The message is `error.message` from the body when present, the raw body
/// otherwise.
pub(crate) fn error_from_response(status: u16, status_text: &str, body: &str) -> ProviderError {
    let message = serde_json::from_str::<ApiErrorResponse>(body)
        .ok()
        .and_then(|r| r.error.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| body.trim().to_string());

    ProviderError::http(status, status_text, message).with_provider("google")
}

/// Parses an events listing body.
///
/// A body that is not a JSON object is an error. A missing or non-array
/// `items` is an empty listing.
pub(crate) fn parse_event_list(body: &str) -> ProviderResult<FetchResult> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        ProviderError::invalid_response(format!("failed to parse response: {}", e))
            .with_provider("google")
            .with_source(e)
    })?;

    let Some(object) = value.as_object() else {
        return Err(
            ProviderError::invalid_response("response is not a JSON object")
                .with_provider("google"),
        );
    };

    let Some(items) = object.get("items").and_then(serde_json::Value::as_array) else {
        return Ok(FetchResult::default());
    };

    let mut result = FetchResult::default();
    for item in items {
        match RawEvent::deserialize(item) {
            Ok(event) => result.events.push(event),
            Err(e) => {
                debug!("skipping unreadable calendar item: {}", e);
                result.skipped += 1;
            }
        }
    }
    Ok(result)
}
