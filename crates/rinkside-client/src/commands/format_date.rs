//! `rinkside format-date`.

use rinkside_core::format_long_date;

use crate::error::ClientResult;

/// Prints `date` as `February 18th, 2026`.
///
/// Input that is not a recognised date is echoed back unchanged.
pub fn run(date: &str) -> ClientResult<()> {
    println!("{}", format_long_date(date.trim()));
    Ok(())
}
