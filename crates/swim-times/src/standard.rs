//! Qualifying time standards, and their validation before they are stored.
//!
//! A standard is a named set of qualifying times for a course type and a gender, with one time
//! per event and age group. Standards are usually imported from a JSON file:
//!
//! ```json
//! {
//!   "name": "Provincial AA", "course_type": "50m", "gender": "female",
//!   "times": [{ "event": "50FR", "age_group": "13-14", "time_ms": 29500 }]
//! }
//! ```

use std::{fmt, str::FromStr};

use crate::{
    compare::{StandardComparison, compare_to_standard},
    error::{SwimError, SwimResult},
    event::{CourseType, EventCode, Gender},
    time::Time,
};

/// The longest name of a standard, in bytes.
pub const MAX_NAME_LEN: usize = 255;

/// The validation errors of a standard.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum StandardError {
    /// The standard has no name.
    #[error("name is required")]
    NameRequired,
    /// The name of the standard is too long.
    #[error("name must be at most 255 characters")]
    NameTooLong(usize),
    /// The age group isn't known.
    #[error("invalid age group: {0}")]
    AgeGroup(String),
    /// A qualifying time is zero or negative.
    #[error("time_ms must be greater than 0")]
    TimeNotPositive,
    /// A qualifying time of an imported standard is invalid.
    #[error("times[{index}]: {source}")]
    InvalidTime {
        /// The 0-based position of the time in the file.
        index: usize,
        /// The reason.
        source: Box<SwimError>,
    },
}

/// The age group a qualifying time applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum AgeGroup {
    /// 10 and under.
    #[serde(rename = "10U")]
    TenUnder,
    /// 11 and 12.
    #[serde(rename = "11-12")]
    Age11To12,
    /// 13 and 14.
    #[serde(rename = "13-14")]
    Age13To14,
    /// 15 to 17.
    #[serde(rename = "15-17")]
    Age15To17,
    /// Any age.
    #[serde(rename = "OPEN")]
    Open,
}

impl AgeGroup {
    /// All the age groups, youngest first.
    pub const ALL: &'static [AgeGroup] = &[
        AgeGroup::TenUnder,
        AgeGroup::Age11To12,
        AgeGroup::Age13To14,
        AgeGroup::Age15To17,
        AgeGroup::Open,
    ];

    /// Returns the age group as written in the data, like `13-14`.
    pub fn as_str(self) -> &'static str {
        match self {
            AgeGroup::TenUnder => "10U",
            AgeGroup::Age11To12 => "11-12",
            AgeGroup::Age13To14 => "13-14",
            AgeGroup::Age15To17 => "15-17",
            AgeGroup::Open => "OPEN",
        }
    }
}

impl fmt::Display for AgeGroup {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgeGroup {
    type Err = StandardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgeGroup::ALL
            .iter()
            .copied()
            .find(|group| group.as_str() == s)
            .ok_or_else(|| StandardError::AgeGroup(s.to_owned()))
    }
}

/// The description of a standard, as sent by a client.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct StandardInput {
    /// The name of the standard.
    pub name: String,
    /// An optional description.
    #[serde(default)]
    pub description: String,
    /// Either `25m` or `50m`.
    pub course_type: String,
    /// Either `female` or `male`.
    pub gender: String,
}

/// A qualifying time, as sent by a client.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct StandardTimeInput {
    /// The event code, like `50FR`.
    pub event: String,
    /// The age group, like `13-14`.
    pub age_group: String,
    /// The qualifying time in milliseconds.
    pub time_ms: i64,
}

/// A complete standard with its qualifying times, as written in an import file.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct StandardImport {
    /// The description of the standard.
    #[serde(flatten)]
    pub standard: StandardInput,
    /// The qualifying times.
    #[serde(default)]
    pub times: Vec<StandardTimeInput>,
}

/// A validated standard.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Standard {
    /// The name.
    pub name: String,
    /// The description, possibly empty.
    pub description: String,
    /// The pool length.
    pub course_type: CourseType,
    /// The gender.
    pub gender: Gender,
}

/// A validated qualifying time.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct StandardTime {
    /// The event.
    pub event: EventCode,
    /// The age group.
    pub age_group: AgeGroup,
    /// The qualifying time.
    pub time_ms: Time,
    /// The qualifying time text, like `29.50`.
    pub time_formatted: String,
}

/// A validated standard with its qualifying times.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct StandardWithTimes {
    /// The standard.
    #[serde(flatten)]
    pub standard: Standard,
    /// The qualifying times.
    pub times: Vec<StandardTime>,
}

impl StandardInput {
    /// Validates the description of a standard.
    pub fn validate(&self) -> SwimResult<Standard> {
        if self.name.is_empty() {
            return Err(StandardError::NameRequired.into());
        }
        if self.name.len() > MAX_NAME_LEN {
            return Err(StandardError::NameTooLong(self.name.len()).into());
        }
        let course_type: CourseType = self.course_type.parse()?;
        let gender: Gender = self.gender.parse()?;

        Ok(Standard {
            name: self.name.clone(),
            description: self.description.clone(),
            course_type,
            gender,
        })
    }
}

impl StandardTimeInput {
    /// Validates a qualifying time.
    pub fn validate(&self) -> SwimResult<StandardTime> {
        let event: EventCode = self.event.parse()?;
        let age_group: AgeGroup = self.age_group.parse()?;
        if self.time_ms <= 0 {
            return Err(StandardError::TimeNotPositive.into());
        }

        let time_ms = Time(self.time_ms);
        Ok(StandardTime {
            event,
            age_group,
            time_ms,
            time_formatted: time_ms.to_string(),
        })
    }
}

impl StandardImport {
    /// Validates a complete standard. The first invalid time rejects the whole standard.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), fields(standard = %self.standard.name, times = self.times.len()))
    )]
    pub fn validate(&self) -> SwimResult<StandardWithTimes> {
        let standard = self.standard.validate()?;
        let times = self
            .times
            .iter()
            .enumerate()
            .map(|(index, time)| {
                time.validate().map_err(|e| {
                    SwimError::from(StandardError::InvalidTime {
                        index,
                        source: Box::new(e),
                    })
                })
            })
            .collect::<SwimResult<Vec<_>>>()?;

        Ok(StandardWithTimes { standard, times })
    }
}

impl StandardWithTimes {
    /// Returns the qualifying time of an event for an age group, if any.
    pub fn time_for(&self, event: EventCode, age_group: AgeGroup) -> Option<&StandardTime> {
        self.times
            .iter()
            .find(|t| t.event == event && t.age_group == age_group)
    }

    /// Compares a swum time with the qualifying time of an event for an age group.
    ///
    /// See [`compare_to_standard`] for the meaning of `almost_threshold_pct`.
    pub fn compare(
        &self,
        event: EventCode,
        age_group: AgeGroup,
        time: i64,
        almost_threshold_pct: f64,
    ) -> Option<StandardComparison> {
        self.time_for(event, age_group)
            .map(|t| compare_to_standard(time, t.time_ms.as_millis(), almost_threshold_pct))
    }
}
