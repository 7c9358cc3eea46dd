//! Google Calendar provider implementation.
//!
//! This module provides a [`GoogleProvider`] that reads events from a public
//! Google Calendar using the Calendar API v3 and an API key.
//!
//! # Features
//!
//! - One events-listing request per fetch, no retry
//! - Server-side recurring event expansion and start-time ordering
//! - Partial responses through a field mask
//! - Structured error messages extracted from failed responses
//!
//! # Example
//!
//! ```ignore
//! use rinkside_providers::google::{ApiKey, GoogleConfig, GoogleProvider};
//! use rinkside_providers::{CalendarProvider, FetchOptions};
//!
//! let provider = GoogleProvider::new(GoogleConfig::new(ApiKey::new("AIza...")))?;
//! let result = provider
//!     .fetch_events("abc@group.calendar.google.com", FetchOptions::new())
//!     .await?;
//! ```

mod client;
mod config;
mod provider;

pub use client::GoogleCalendarClient;
pub use config::{ApiKey, CALENDAR_API_BASE, GoogleConfig};
pub use provider::GoogleProvider;
