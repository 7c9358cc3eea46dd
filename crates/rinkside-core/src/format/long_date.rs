//! Long-form ordinal dates, e.g. `February 18th, 2026`.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

/// `MM/DD/YYYY`, with or without zero padding.
static US_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").expect("Invalid US date regex")
});

/// `YYYY-MM-DD`, optionally followed by a time part (`T...`).
static ISO_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})(?:[T ].*)?$").expect("Invalid ISO date regex")
});

/// Returns the English ordinal suffix for a day of the month.
///
/// 11, 12 and 13 always take `th`.
pub fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Renders `input` as `Month Dth, YYYY`.
///
/// Accepts `MM/DD/YYYY` or an ISO date (a timestamp contributes the date as
/// written). Anything else is returned unchanged.
pub fn format_long_date(input: &str) -> String {
    match parse_display_date(input.trim()) {
        Some(date) => format!(
            "{} {}{}, {}",
            date.format("%B"),
            date.day(),
            ordinal_suffix(date.day()),
            date.year()
        ),
        None => input.to_string(),
    }
}

fn parse_display_date(input: &str) -> Option<NaiveDate> {
    if let Some(caps) = US_DATE_REGEX.captures(input) {
        return ymd(&caps[3], &caps[1], &caps[2]);
    }
    if let Some(caps) = ISO_DATE_REGEX.captures(input) {
        return ymd(&caps[1], &caps[2], &caps[3]);
    }
    None
}

fn ymd(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_suffixes() {
        let cases = [
            (1, "1st"),
            (2, "2nd"),
            (3, "3rd"),
            (4, "4th"),
            (11, "11th"),
            (12, "12th"),
            (13, "13th"),
            (21, "21st"),
            (22, "22nd"),
            (23, "23rd"),
            (30, "30th"),
            (31, "31st"),
        ];
        for (day, expected) in cases {
            assert_eq!(format!("{}{}", day, ordinal_suffix(day)), expected);
        }
    }

    #[test]
    fn us_date() {
        assert_eq!(format_long_date("02/18/2026"), "February 18th, 2026");
        assert_eq!(format_long_date("2/1/2026"), "February 1st, 2026");
        assert_eq!(format_long_date("12/22/2025"), "December 22nd, 2025");
    }

    #[test]
    fn iso_date() {
        assert_eq!(format_long_date("2026-02-18"), "February 18th, 2026");
        assert_eq!(format_long_date("2026-03-03"), "March 3rd, 2026");
    }

    #[test]
    fn iso_timestamp_uses_written_date() {
        assert_eq!(
            format_long_date("2026-02-18T23:30:00-05:00"),
            "February 18th, 2026"
        );
    }

    #[test]
    fn unparseable_input_is_returned_unchanged() {
        for input in ["", "soon", "13/45/2026", "2026-02-30", "Feb 18"] {
            assert_eq!(format_long_date(input), input);
        }
    }
}
