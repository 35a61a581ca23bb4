//! This module contains the [`Time`] struct, used to format and parse swim times.
//!
//! A time is stored as an integer count of milliseconds. Its text form is either `S.ss`
//! (under one minute) or `M:SS.ss`. The text grain is the hundredth of a second, so anything
//! below 10 ms is truncated when formatting.

use std::{fmt, str::FromStr};

use nom::{
    Parser as _,
    bytes::complete::{tag, take_while_m_n, take_while1},
    combinator::{all_consuming, opt},
    sequence::preceded,
};

/// The error emitted by the parse of the [`Time`] type.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    /// The input was empty, or only made of whitespace.
    #[error("empty time")]
    Empty,
    /// The input doesn't respect the `SS.ss` or `M:SS.ss` form.
    #[error("invalid time (must respect SS.ss or M:SS.ss form)")]
    Malformed,
    /// The seconds must roll into the minutes when a minutes part is given.
    #[error("seconds must be lower than 60 when minutes are given, got {0}")]
    SecondsOutOfRange(u64),
    /// The hundredths part is greater than 99.
    #[error("hundredths must be lower than 100, got {0}")]
    HundredthsOutOfRange(u64),
    /// The time is zero. There is no zero-duration swim.
    #[error("time must be positive")]
    NotPositive,
    /// The time is too large to be represented in milliseconds.
    #[error("time is too large")]
    Overflow,
}

/// A swim time, in milliseconds.
///
/// Its [`Display`](fmt::Display) implementation renders the time text, and its [`FromStr`]
/// implementation parses it back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Time(pub i64);

impl Time {
    /// Returns the time in milliseconds.
    #[inline]
    pub fn as_millis(self) -> i64 {
        self.0
    }

    /// Returns whether this is an actual time, meaning strictly positive.
    #[inline]
    pub fn is_set(self) -> bool {
        self.0 > 0
    }
}

impl From<i64> for Time {
    #[inline]
    fn from(ms: i64) -> Self {
        Self(ms)
    }
}

impl From<Time> for i64 {
    #[inline]
    fn from(time: Time) -> Self {
        time.0
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 <= 0 {
            return f.write_str("0.00");
        }

        let total_seconds = self.0 / 1_000;
        let hundredths = self.0 % 1_000 / 10;
        let (min, sec) = (total_seconds / 60, total_seconds % 60);

        if min == 0 {
            write!(f, "{sec}.{hundredths:02}")
        } else {
            write!(f, "{min}:{sec:02}.{hundredths:02}")
        }
    }
}

/// The digit groups of a time text, before any numeric conversion.
struct RawTime<'a> {
    minutes: Option<&'a str>,
    seconds: &'a str,
    hundredths: &'a str,
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn digits(input: &str) -> nom::IResult<&str, &str> {
    take_while1(is_digit).parse(input)
}

fn short_digits(input: &str) -> nom::IResult<&str, &str> {
    take_while_m_n(1, 2, is_digit).parse(input)
}

fn parse_raw_time(input: &str) -> nom::IResult<&str, RawTime<'_>> {
    let (input, first) = digits(input)?;
    let (input, seconds) = opt(preceded(tag(":"), short_digits)).parse(input)?;
    let (input, hundredths) = preceded(tag("."), short_digits).parse(input)?;

    let (minutes, seconds) = match seconds {
        Some(seconds) => (Some(first), seconds),
        None => (None, first),
    };

    Ok((
        input,
        RawTime {
            minutes,
            seconds,
            hundredths,
        },
    ))
}

fn parse_group(digits: &str) -> Result<u64, TimeParseError> {
    digits.parse().map_err(|_| TimeParseError::Overflow)
}

/// A single digit is read as tenths, so `"5"` means 50 hundredths.
fn parse_hundredths(digits: &str) -> Result<u64, TimeParseError> {
    let val = parse_group(digits)?;
    Ok(if digits.len() == 1 { val * 10 } else { val })
}

impl RawTime<'_> {
    fn to_millis(&self) -> Result<i64, TimeParseError> {
        let minutes = self.minutes.map(parse_group).transpose()?;
        let seconds = parse_group(self.seconds)?;
        let hundredths = parse_hundredths(self.hundredths)?;

        if minutes.is_some() && seconds >= 60 {
            return Err(TimeParseError::SecondsOutOfRange(seconds));
        }
        if hundredths > 99 {
            return Err(TimeParseError::HundredthsOutOfRange(hundredths));
        }

        let total = minutes
            .unwrap_or_default()
            .checked_mul(60)
            .and_then(|s| s.checked_add(seconds))
            .and_then(|s| s.checked_mul(1_000))
            .and_then(|ms| ms.checked_add(hundredths * 10))
            .and_then(|ms| i64::try_from(ms).ok())
            .ok_or(TimeParseError::Overflow)?;

        if total > 0 {
            Ok(total)
        } else {
            Err(TimeParseError::NotPositive)
        }
    }
}

impl FromStr for Time {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TimeParseError::Empty);
        }

        let (_, raw) = all_consuming(parse_raw_time)
            .parse(trimmed)
            .map_err(|_| TimeParseError::Malformed)?;
        raw.to_millis().map(Self)
    }
}

/// Formats the provided time in milliseconds, like `28.45` or `1:05.32`.
///
/// Non-positive times are rendered as `0.00`.
#[inline]
pub fn format_time(ms: i64) -> String {
    Time(ms).to_string()
}

/// Parses the provided time text into milliseconds.
///
/// Use `parse_time(text).ok()` if the failure reason doesn't matter.
#[inline]
pub fn parse_time(text: &str) -> Result<i64, TimeParseError> {
    text.parse::<Time>().map(Time::as_millis)
}

/// Parses the provided time text into milliseconds, or returns `0` if it is invalid.
#[inline]
pub fn parse_time_to_ms(text: &str) -> i64 {
    parse_time(text).unwrap_or_default()
}

/// Returns whether the provided time text is a valid time.
#[inline]
pub fn is_valid_time_string(text: &str) -> bool {
    parse_time(text).is_ok()
}

#[cfg(test)]
mod tests {
    use super::{
        Time, TimeParseError, format_time, is_valid_time_string, parse_time, parse_time_to_ms,
    };

    #[test]
    fn format_under_a_minute() {
        assert_eq!(format_time(28_450), "28.45");
        assert_eq!(format_time(5_070), "5.07");
        assert_eq!(format_time(10), "0.01");
    }

    #[test]
    fn format_with_minutes() {
        assert_eq!(format_time(65_320), "1:05.32");
        assert_eq!(format_time(60_000), "1:00.00");
        assert_eq!(format_time(1_000 * 60 * 125 + 9_990), "125:09.99");
    }

    #[test]
    fn format_truncates_below_hundredths() {
        assert_eq!(format_time(28_459), "28.45");
        assert_eq!(format_time(9), "0.00");
    }

    #[test]
    fn format_non_positive() {
        assert_eq!(format_time(0), "0.00");
        assert_eq!(format_time(-1), "0.00");
        assert_eq!(format_time(i64::MIN), "0.00");
    }

    #[test]
    fn parse_valid() {
        assert_eq!(parse_time("28.45"), Ok(28_450));
        assert_eq!(parse_time("1:05.32"), Ok(65_320));
        assert_eq!(parse_time("28.5"), Ok(28_500));
        assert_eq!(parse_time("1:5.3"), Ok(65_300));
        assert_eq!(parse_time("  59.99\t"), Ok(59_990));
        assert_eq!(parse_time("75.00"), Ok(75_000));
        assert_eq!(parse_time("0:30.00"), Ok(30_000));
    }

    #[test]
    fn parse_invalid() {
        assert_eq!(parse_time(""), Err(TimeParseError::Empty));
        assert_eq!(parse_time("   "), Err(TimeParseError::Empty));
        assert_eq!(parse_time("abc"), Err(TimeParseError::Malformed));
        assert_eq!(parse_time("-5.00"), Err(TimeParseError::Malformed));
        assert_eq!(parse_time("28"), Err(TimeParseError::Malformed));
        assert_eq!(parse_time("28."), Err(TimeParseError::Malformed));
        assert_eq!(parse_time(".45"), Err(TimeParseError::Malformed));
        assert_eq!(parse_time("28.456"), Err(TimeParseError::Malformed));
        assert_eq!(parse_time("1:005.00"), Err(TimeParseError::Malformed));
        assert_eq!(parse_time("1:02:03.00"), Err(TimeParseError::Malformed));
        assert_eq!(parse_time("28,45"), Err(TimeParseError::Malformed));
        assert_eq!(parse_time("١٢.٣٤"), Err(TimeParseError::Malformed));
    }

    #[test]
    fn parse_out_of_range() {
        assert_eq!(
            parse_time("1:75.00"),
            Err(TimeParseError::SecondsOutOfRange(75))
        );
        assert_eq!(
            parse_time("0:60.00"),
            Err(TimeParseError::SecondsOutOfRange(60))
        );
        assert_eq!(parse_time("0.00"), Err(TimeParseError::NotPositive));
        assert_eq!(parse_time("0:00.0"), Err(TimeParseError::NotPositive));
        assert_eq!(
            parse_time("99999999999999999999.00"),
            Err(TimeParseError::Overflow)
        );
    }

    #[test]
    fn parse_to_ms_defaults_to_zero() {
        assert_eq!(parse_time_to_ms("1:05.32"), 65_320);
        assert_eq!(parse_time_to_ms("nope"), 0);
    }

    #[test]
    fn validity_matches_parse() {
        for s in ["28.45", "1:05.32", "", "abc", "1:75.00", "0.00", "3.1"] {
            assert_eq!(is_valid_time_string(s), parse_time(s).is_ok(), "{s}");
        }
    }

    #[test]
    fn round_trip_at_hundredths_grain() {
        for ms in [1, 9, 10, 999, 1_000, 28_459, 59_999, 60_000, 65_321, 3_600_010] {
            let expected = ms / 10 * 10;
            let parsed = parse_time(&format_time(ms)).ok();
            if expected > 0 {
                assert_eq!(parsed, Some(expected), "{ms}");
            } else {
                assert_eq!(parsed, None, "{ms}");
            }
        }
    }

    #[test]
    fn time_from_str() {
        assert_eq!("1:05.32".parse(), Ok(Time(65_320)));
        assert_eq!(Time(65_320).to_string(), "1:05.32");
    }
}
