//! Core types: schedule entries, display time formatting, keyword filters, tracing

pub mod entry;
pub mod filter;
pub mod format;
pub mod time;
pub mod tracing;

pub use entry::ScheduleEntry;
pub use filter::{DEFAULT_KEYWORDS, KeywordFilter};
pub use format::{
    ALL_DAY_LABEL, OutputFormat, ScheduleFormatter, TimeFormat, format_long_date, ordinal_suffix,
};
pub use time::{DEFAULT_DISPLAY_TIMEZONE, EventTime, TimeWindow};
pub use crate::tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
