//! Validation of swimmer data imports.
//!
//! An import file holds a swimmer profile and the meets they swam, each with its times:
//!
//! ```json
//! {
//!   "swimmer": { "name": "Ada", "birth_date": "2012-04-02", "gender": "female" },
//!   "meets": [{
//!     "name": "Winter Open", "city": "Ottawa", "country": "Canada",
//!     "start_date": "2026-01-15", "end_date": "2026-01-17", "course_type": "25m",
//!     "times": [{ "event": "50FR", "time": "28.45", "event_date": "2026-01-15" }]
//!   }]
//! }
//! ```
//!
//! The validation turns it into an [`ImportPlan`], with typed values ready to be stored.
//! A swimmer error rejects the whole import, while an invalid meet is only skipped and reported,
//! unless [`ImportOptions::strict`] is set.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::{
    date_range::{DATE_FORMAT, DateError, parse_date},
    error::{SwimError, SwimResult},
    event::{CourseType, EventCode, Gender},
    time::Time,
};

/// The root of an import file.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct SwimmerImport {
    /// The swimmer profile.
    pub swimmer: SwimmerData,
    /// The meets of the swimmer.
    #[serde(default)]
    pub meets: Vec<MeetData>,
}

/// The swimmer profile, as written in an import file.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct SwimmerData {
    /// The name of the swimmer.
    pub name: String,
    /// The birth date, `YYYY-MM-DD`.
    pub birth_date: String,
    /// Either `female` or `male`.
    pub gender: String,
}

/// A meet, as written in an import file.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct MeetData {
    /// The name of the meet.
    pub name: String,
    /// The city of the meet.
    #[serde(default)]
    pub city: String,
    /// The country of the meet.
    #[serde(default)]
    pub country: String,
    /// The first day of the meet, `YYYY-MM-DD`.
    pub start_date: String,
    /// The last day of the meet, `YYYY-MM-DD`.
    pub end_date: String,
    /// Either `25m` or `50m`.
    pub course_type: String,
    /// The times swum at the meet.
    #[serde(default)]
    pub times: Vec<TimeData>,
}

/// A swim time, as written in an import file.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct TimeData {
    /// The event code, like `50FR`.
    pub event: String,
    /// The time text, like `28.45` or `1:05.32`.
    pub time: String,
    /// The day of the swim, `YYYY-MM-DD`.
    pub event_date: String,
    /// Optional notes.
    #[serde(default)]
    pub notes: String,
}

/// The logical errors of an import.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ImportError {
    /// The swimmer has no name.
    #[error("swimmer name is required")]
    SwimmerNameRequired,
    /// A meet has no name.
    #[error("meet name is required")]
    MeetNameRequired,
    /// A time has no event code.
    #[error("event is required")]
    EventRequired,
    /// A date field is invalid.
    #[error("invalid {field}: {source}")]
    InvalidDate {
        /// The name of the field.
        field: &'static str,
        /// The date error.
        source: DateError,
    },
    /// The meet ends before it starts.
    #[error("end_date cannot be before start_date")]
    EndBeforeStart,
    /// A time was swum outside of the days of its meet.
    #[error("event_date {date} is outside meet date range ({start} to {end})")]
    EventDateOutOfRange {
        /// The day of the swim.
        date: NaiveDate,
        /// The first day of the meet.
        start: NaiveDate,
        /// The last day of the meet.
        end: NaiveDate,
    },
    /// A time of a meet is invalid.
    #[error("time {index} validation failed: {source}")]
    InvalidTimeEntry {
        /// The 1-based position of the time in its meet.
        index: usize,
        /// The reason.
        source: Box<SwimError>,
    },
    /// The swimmer profile is invalid.
    #[error("Swimmer validation failed: {0}")]
    InvalidSwimmer(Box<SwimError>),
    /// A meet is invalid, and the import is strict.
    #[error("Meet {index} ({name}) validation failed: {source}")]
    InvalidMeet {
        /// The 1-based position of the meet in the file.
        index: usize,
        /// The name of the meet.
        name: String,
        /// The reason.
        source: Box<SwimError>,
    },
}

/// The options of [`validate_import`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ImportOptions {
    /// Whether a single invalid meet rejects the whole import.
    pub strict: bool,
}

/// A validated swimmer profile.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ParsedSwimmer {
    /// The name.
    pub name: String,
    /// The birth date.
    pub birth_date: NaiveDate,
    /// The gender.
    pub gender: Gender,
}

/// A validated meet with its times.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ParsedMeet {
    /// The name.
    pub name: String,
    /// The city.
    pub city: String,
    /// The country.
    pub country: String,
    /// The first day.
    pub start_date: NaiveDate,
    /// The last day.
    pub end_date: NaiveDate,
    /// The pool length.
    pub course_type: CourseType,
    /// The times of the meet, with at most one time per event.
    pub times: Vec<ParsedTime>,
    /// The number of times skipped because their event was already swum in this meet.
    pub skipped_duplicates: usize,
}

/// A validated swim time.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ParsedTime {
    /// The swum event.
    pub event: EventCode,
    /// The time in milliseconds.
    pub time: Time,
    /// The day of the swim.
    pub event_date: NaiveDate,
    /// Free notes.
    pub notes: String,
}

/// The outcome of a valid import.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ImportPlan {
    /// The swimmer profile.
    pub swimmer: ParsedSwimmer,
    /// The valid meets.
    pub meets: Vec<ParsedMeet>,
    /// The reasons of the skipped meets.
    pub errors: Vec<String>,
    /// The number of duplicate times skipped, over all meets.
    pub skipped_times: usize,
    /// The reasons of the skipped times, one per meet.
    pub skipped_reason: Vec<String>,
    /// Whether the import is worth storing: no error happened, or at least a meet is valid.
    pub success: bool,
}

impl ImportPlan {
    /// Returns the number of times in the valid meets.
    pub fn times_count(&self) -> usize {
        self.meets.iter().map(|m| m.times.len()).sum()
    }
}

fn required_date(field: &'static str, input: &str) -> Result<NaiveDate, ImportError> {
    parse_date(input).map_err(|source| ImportError::InvalidDate { field, source })
}

fn parse_swimmer(data: &SwimmerData) -> SwimResult<ParsedSwimmer> {
    if data.name.is_empty() {
        return Err(ImportError::SwimmerNameRequired.into());
    }
    let gender: Gender = data.gender.parse()?;
    let birth_date = required_date("birth_date", &data.birth_date)?;

    Ok(ParsedSwimmer {
        name: data.name.clone(),
        birth_date,
        gender,
    })
}

fn parse_time_entry(data: &TimeData, start: NaiveDate, end: NaiveDate) -> SwimResult<ParsedTime> {
    if data.event.is_empty() {
        return Err(ImportError::EventRequired.into());
    }
    let event: EventCode = data.event.parse()?;
    let time: Time = data.time.parse()?;
    let event_date = required_date("event_date", &data.event_date)?;

    if event_date < start || event_date > end {
        return Err(ImportError::EventDateOutOfRange {
            date: event_date,
            start,
            end,
        }
        .into());
    }

    Ok(ParsedTime {
        event,
        time,
        event_date,
        notes: data.notes.clone(),
    })
}

fn parse_meet(data: &MeetData) -> SwimResult<ParsedMeet> {
    if data.name.is_empty() {
        return Err(ImportError::MeetNameRequired.into());
    }
    let course_type: CourseType = data.course_type.parse()?;
    let start_date = required_date("start_date", &data.start_date)?;
    let end_date = required_date("end_date", &data.end_date)?;
    if end_date < start_date {
        return Err(ImportError::EndBeforeStart.into());
    }

    let mut seen = HashSet::with_capacity(data.times.len());
    let mut times = Vec::with_capacity(data.times.len());
    let mut skipped_duplicates = 0;

    for (i, entry) in data.times.iter().enumerate() {
        let parsed = parse_time_entry(entry, start_date, end_date).map_err(|e| {
            ImportError::InvalidTimeEntry {
                index: i + 1,
                source: Box::new(e),
            }
        })?;

        if seen.insert(parsed.event) {
            times.push(parsed);
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(meet = %data.name, event = %parsed.event, "skipping duplicate event");
            skipped_duplicates += 1;
        }
    }

    Ok(ParsedMeet {
        name: data.name.clone(),
        city: data.city.clone(),
        country: data.country.clone(),
        start_date,
        end_date,
        course_type,
        times,
        skipped_duplicates,
    })
}

/// Validates an import file.
///
/// It returns an error if the swimmer profile is invalid, or if a meet is invalid and the import
/// is strict. Otherwise, the invalid meets are reported in [`ImportPlan::errors`].
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip(data), fields(swimmer = %data.swimmer.name, meets = data.meets.len()))
)]
pub fn validate_import(data: &SwimmerImport, options: ImportOptions) -> SwimResult<ImportPlan> {
    let swimmer =
        parse_swimmer(&data.swimmer).map_err(|e| ImportError::InvalidSwimmer(Box::new(e)))?;

    let mut meets = Vec::with_capacity(data.meets.len());
    let mut errors = Vec::new();
    let mut skipped_times = 0;
    let mut skipped_reason = Vec::new();

    for (i, meet_data) in data.meets.iter().enumerate() {
        let meet = match parse_meet(meet_data) {
            Ok(meet) => meet,
            Err(e) => {
                let err = ImportError::InvalidMeet {
                    index: i + 1,
                    name: meet_data.name.clone(),
                    source: Box::new(e),
                };
                if options.strict {
                    return Err(err.into());
                }
                #[cfg(feature = "tracing")]
                tracing::warn!("skipping meet: {err}");
                errors.push(err.to_string());
                continue;
            }
        };

        if meet.skipped_duplicates > 0 {
            skipped_times += meet.skipped_duplicates;
            skipped_reason.push(format!(
                "Meet {} ({} to {}): {} duplicate event(s) skipped",
                meet.name,
                meet.start_date.format(DATE_FORMAT),
                meet.end_date.format(DATE_FORMAT),
                meet.skipped_duplicates
            ));
        }
        meets.push(meet);
    }

    let success = errors.is_empty() || !meets.is_empty();

    Ok(ImportPlan {
        swimmer,
        meets,
        errors,
        skipped_times,
        skipped_reason,
        success,
    })
}
