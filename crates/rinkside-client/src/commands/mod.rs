//! Subcommand implementations.

pub mod config;
pub mod format_date;
pub mod schedule;
