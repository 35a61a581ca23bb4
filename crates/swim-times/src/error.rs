//! A module containing the [`SwimError`] enum, which gathers the error types of this crate.

use crate::{
    date_range::DateError, event::EventParseError, import::ImportError, standard::StandardError,
    time::TimeParseError,
};

/// Represents any type of error that could happen when using this crate.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SwimError {
    /// A time text couldn't be parsed.
    #[error(transparent)]
    Time(#[from] TimeParseError),
    /// A date couldn't be parsed.
    #[error(transparent)]
    Date(#[from] DateError),
    /// An event code, course type or gender couldn't be parsed.
    #[error(transparent)]
    Event(#[from] EventParseError),
    /// An import file was rejected.
    #[error(transparent)]
    Import(#[from] ImportError),
    /// A time standard was rejected.
    #[error(transparent)]
    Standard(#[from] StandardError),
}

/// Represents the result of a computation that could return a [`SwimError`].
pub type SwimResult<T = ()> = Result<T, SwimError>;
