//! The display-ready schedule row.

use serde::{Deserialize, Serialize};

/// One row of the schedule table.
///
/// All strings are already rendered in the display timezone; consumers show
/// them as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    /// Full weekday name, e.g. `Wednesday`.
    pub day_of_week: String,
    /// Numeric date, e.g. `2/18/2026`.
    pub date: String,
    /// Clock time or `All Day`.
    pub start_time: String,
    /// Clock time, empty for all-day entries.
    pub end_time: String,
    /// Event title as it appeared in the calendar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl ScheduleEntry {
    /// Returns `true` if this entry spans the whole day.
    pub fn is_all_day(&self) -> bool {
        self.start_time == crate::format::ALL_DAY_LABEL && self.end_time.is_empty()
    }
}
