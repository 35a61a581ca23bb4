//! Formatting of competition date spans, like `Jan 15-17, 2026`.
//!
//! Dates are date-only `YYYY-MM-DD` strings, so no timezone is involved.

use chrono::{Datelike as _, NaiveDate};

/// The format of the dates exchanged with the data layer.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The error emitted when a date string isn't a valid `YYYY-MM-DD` date.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid date `{input}` (expected YYYY-MM-DD): {source}")]
pub struct DateError {
    /// The rejected input.
    pub input: String,
    /// The underlying parse error.
    pub source: chrono::ParseError,
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|source| DateError {
        input: input.to_owned(),
        source,
    })
}

/// Formats a date like `Jan 15, 2026`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Formats the span between two dates.
///
/// * A single day gives `Jan 15, 2026`.
/// * Days of the same month give `Jan 15-17, 2026`.
/// * Days of different months give `Jan 30 - Feb 2, 2026`. If the years differ too, both
///   dates are written in full: `Dec 30, 2025 - Jan 2, 2026`.
pub fn format_naive_date_range(start: NaiveDate, end: NaiveDate) -> String {
    if start == end {
        return format_date(start);
    }

    if start.year() == end.year() && start.month() == end.month() {
        return format!(
            "{} {}-{}, {}",
            start.format("%b"),
            start.day(),
            end.day(),
            start.year()
        );
    }

    let start = if start.year() == end.year() {
        start.format("%b %-d").to_string()
    } else {
        format_date(start)
    };
    format!("{start} - {}", format_date(end))
}

/// Formats the span between two `YYYY-MM-DD` dates.
///
/// See [`format_naive_date_range`] for the rendered forms.
pub fn format_date_range(start: &str, end: &str) -> Result<String, DateError> {
    Ok(format_naive_date_range(parse_date(start)?, parse_date(end)?))
}

/// Returns every day from `start` to `end`, both included.
///
/// The result is empty if `start` is after `end`.
pub fn naive_date_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|day| *day <= end).collect()
}

/// Returns every day from `start` to `end`, both included, as `YYYY-MM-DD` strings.
pub fn get_date_range(start: &str, end: &str) -> Result<Vec<String>, DateError> {
    let days = naive_date_range(parse_date(start)?, parse_date(end)?)
        .into_iter()
        .map(|day| day.format(DATE_FORMAT).to_string())
        .collect();
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::{format_date_range, get_date_range, parse_date};

    #[test]
    fn single_day() {
        assert_eq!(
            format_date_range("2026-01-15", "2026-01-15").unwrap(),
            "Jan 15, 2026"
        );
        assert_eq!(
            format_date_range("2026-03-05", "2026-03-05").unwrap(),
            "Mar 5, 2026"
        );
    }

    #[test]
    fn same_month() {
        assert_eq!(
            format_date_range("2026-01-15", "2026-01-17").unwrap(),
            "Jan 15-17, 2026"
        );
    }

    #[test]
    fn across_months() {
        assert_eq!(
            format_date_range("2026-01-30", "2026-02-02").unwrap(),
            "Jan 30 - Feb 2, 2026"
        );
    }

    #[test]
    fn across_years() {
        assert_eq!(
            format_date_range("2025-12-30", "2026-01-02").unwrap(),
            "Dec 30, 2025 - Jan 2, 2026"
        );
        assert_eq!(
            format_date_range("2025-01-15", "2026-01-17").unwrap(),
            "Jan 15, 2025 - Jan 17, 2026"
        );
    }

    #[test]
    fn invalid_dates() {
        assert!(format_date_range("2026-02-30", "2026-03-01").is_err());
        assert!(get_date_range("yesterday", "2026-03-01").is_err());
        assert_eq!(parse_date("").unwrap_err().input, "");
    }

    #[test]
    fn inclusive_range() {
        assert_eq!(
            get_date_range("2026-01-15", "2026-01-17").unwrap(),
            ["2026-01-15", "2026-01-16", "2026-01-17"]
        );
        assert_eq!(
            get_date_range("2026-01-15", "2026-01-15").unwrap(),
            ["2026-01-15"]
        );
        assert_eq!(
            get_date_range("2024-02-28", "2024-03-01").unwrap(),
            ["2024-02-28", "2024-02-29", "2024-03-01"]
        );
    }

    #[test]
    fn reversed_range_is_empty() {
        assert!(get_date_range("2026-01-17", "2026-01-15").unwrap().is_empty());
    }
}
