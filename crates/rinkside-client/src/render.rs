//! Schedule output rendering.
//!
//! The table has four columns (Day, Date, Start, End), left-aligned and
//! separated by two spaces. JSON output is the entry list with camelCase
//! keys, the same shape a web front end consumes.

use rinkside_core::{OutputFormat, ScheduleEntry, format_long_date};

use crate::error::{ClientError, ClientResult};

/// Shown on stderr while the feed is being fetched.
pub const LOADING_TEXT: &str = "Loading schedule...";

/// Shown when the feed could not be set up at all.
pub const FAILED_TEXT: &str = "Failed to load schedule.";

/// Shown instead of an empty table.
pub const EMPTY_TEXT: &str = "No events scheduled";

const HEADERS: [&str; 4] = ["Day", "Date", "Start", "End"];
const COLUMN_GAP: &str = "  ";

/// Table rendering options.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Render the date column as `February 18th, 2026`.
    pub long_dates: bool,
}

/// Renders `entries` in the requested format.
pub fn render(
    entries: &[ScheduleEntry],
    format: OutputFormat,
    options: RenderOptions,
) -> ClientResult<String> {
    match format {
        OutputFormat::Table => Ok(render_table(entries, options)),
        OutputFormat::Json => render_json(entries),
    }
}

/// Renders the schedule table.
pub fn render_table(entries: &[ScheduleEntry], options: RenderOptions) -> String {
    if entries.is_empty() {
        return EMPTY_TEXT.to_string();
    }

    let rows: Vec<[String; 4]> = entries
        .iter()
        .map(|entry| {
            let date = if options.long_dates {
                format_long_date(&entry.date)
            } else {
                entry.date.clone()
            };
            [
                entry.day_of_week.clone(),
                date,
                entry.start_time.clone(),
                entry.end_time.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separator = widths.map(|w| "-".repeat(w));
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(&HEADERS, &widths));
    lines.push(format_row(&separator, &widths));
    lines.extend(rows.iter().map(|row| format_row(row, &widths)));
    lines.join("\n")
}

fn format_row<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = *width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    line.trim_end().to_string()
}

/// Renders the entries as a pretty-printed JSON array.
pub fn render_json(entries: &[ScheduleEntry]) -> ClientResult<String> {
    serde_json::to_string_pretty(entries)
        .map_err(|e| ClientError::Output(format!("failed to serialize schedule: {}", e)))
}
