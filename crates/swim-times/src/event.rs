//! The catalog of swimming events, and the course types and genders they are swum in.

use std::{fmt, str::FromStr};

/// The error emitted when parsing an unknown event code, course type or gender.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EventParseError {
    /// The event code isn't in the catalog.
    #[error("invalid event code: {0}")]
    EventCode(String),
    /// The course type isn't `25m` nor `50m`.
    #[error("course_type must be '25m' or '50m', got: {0}")]
    CourseType(String),
    /// The gender isn't `female` nor `male`.
    #[error("gender must be 'female' or 'male', got: {0}")]
    Gender(String),
}

/// A swimming stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stroke {
    /// Freestyle (`FR`).
    Freestyle,
    /// Backstroke (`BK`).
    Backstroke,
    /// Breaststroke (`BR`).
    Breaststroke,
    /// Butterfly (`FL`).
    Butterfly,
    /// Individual medley (`IM`).
    IndividualMedley,
}

impl Stroke {
    /// Returns the two-letter suffix used in event codes.
    pub fn code(self) -> &'static str {
        match self {
            Stroke::Freestyle => "FR",
            Stroke::Backstroke => "BK",
            Stroke::Breaststroke => "BR",
            Stroke::Butterfly => "FL",
            Stroke::IndividualMedley => "IM",
        }
    }

    /// Returns the display name of the stroke.
    pub fn name(self) -> &'static str {
        match self {
            Stroke::Freestyle => "Freestyle",
            Stroke::Backstroke => "Backstroke",
            Stroke::Breaststroke => "Breaststroke",
            Stroke::Butterfly => "Butterfly",
            Stroke::IndividualMedley => "Individual Medley",
        }
    }
}

macro_rules! event_codes {
    ($($variant:ident => ($code:literal, $distance:literal, $stroke:ident)),* $(,)?) => {
        /// An individual swimming event, like `50FR` or `200IM`.
        ///
        /// The ordering follows the catalog: by stroke, then by distance.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[derive(serde::Serialize, serde::Deserialize)]
        pub enum EventCode {
            $(
                #[doc = concat!("The `", $code, "` event.")]
                #[serde(rename = $code)]
                $variant,
            )*
        }

        impl EventCode {
            /// All the events of the catalog.
            pub const ALL: &'static [EventCode] = &[$(EventCode::$variant),*];

            /// Returns the event code, like `100BK`.
            pub fn code(self) -> &'static str {
                match self {
                    $(EventCode::$variant => $code,)*
                }
            }

            /// Returns the distance of the event, in meters.
            pub fn distance(self) -> u16 {
                match self {
                    $(EventCode::$variant => $distance,)*
                }
            }

            /// Returns the stroke of the event.
            pub fn stroke(self) -> Stroke {
                match self {
                    $(EventCode::$variant => Stroke::$stroke,)*
                }
            }
        }

        impl FromStr for EventCode {
            type Err = EventParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($code => Ok(EventCode::$variant),)*
                    _ => Err(EventParseError::EventCode(s.to_owned())),
                }
            }
        }
    };
}

event_codes! {
    Free50 => ("50FR", 50, Freestyle),
    Free100 => ("100FR", 100, Freestyle),
    Free200 => ("200FR", 200, Freestyle),
    Free400 => ("400FR", 400, Freestyle),
    Free800 => ("800FR", 800, Freestyle),
    Free1500 => ("1500FR", 1500, Freestyle),
    Back50 => ("50BK", 50, Backstroke),
    Back100 => ("100BK", 100, Backstroke),
    Back200 => ("200BK", 200, Backstroke),
    Breast50 => ("50BR", 50, Breaststroke),
    Breast100 => ("100BR", 100, Breaststroke),
    Breast200 => ("200BR", 200, Breaststroke),
    Fly50 => ("50FL", 50, Butterfly),
    Fly100 => ("100FL", 100, Butterfly),
    Fly200 => ("200FL", 200, Butterfly),
    Medley200 => ("200IM", 200, IndividualMedley),
    Medley400 => ("400IM", 400, IndividualMedley),
}

impl EventCode {
    /// Returns the display name of the event, like `50m Freestyle`.
    pub fn name(self) -> String {
        format!("{}m {}", self.distance(), self.stroke().name())
    }
}

impl fmt::Display for EventCode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The length of the pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum CourseType {
    /// Short course, 25 meters.
    #[serde(rename = "25m")]
    Short,
    /// Long course, 50 meters.
    #[serde(rename = "50m")]
    Long,
}

impl CourseType {
    /// Returns the course type as written in the data, `25m` or `50m`.
    pub fn as_str(self) -> &'static str {
        match self {
            CourseType::Short => "25m",
            CourseType::Long => "50m",
        }
    }
}

impl fmt::Display for CourseType {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseType {
    type Err = EventParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "25m" => Ok(CourseType::Short),
            "50m" => Ok(CourseType::Long),
            _ => Err(EventParseError::CourseType(s.to_owned())),
        }
    }
}

/// The gender category of a swimmer or of a time standard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Women and girls.
    Female,
    /// Men and boys.
    Male,
}

impl Gender {
    /// Returns the gender as written in the data.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
        }
    }
}

impl fmt::Display for Gender {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = EventParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "female" => Ok(Gender::Female),
            "male" => Ok(Gender::Male),
            _ => Err(EventParseError::Gender(s.to_owned())),
        }
    }
}
