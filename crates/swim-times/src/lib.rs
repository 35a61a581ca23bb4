//! The main crate of the swim-times tracker.
//!
//! It contains the swim time codec, which converts between times in milliseconds and their text
//! form (`28.45`, `1:05.32`), and the utilities built on it: time comparisons, competition date
//! spans, the event catalog, qualifying standards, and the validation of swimmer data imports.
//!
//! If you wish to see the command-line tool, take a look at the `swimstats` package.

#![warn(missing_docs)]

mod env;

pub mod compare;
pub mod date_range;
pub mod error;
pub mod event;
pub mod import;
pub mod standard;
pub mod time;

pub use compare::{time_difference, time_difference_percent};
pub use date_range::{format_date_range, get_date_range};
pub use env::*;
pub use time::{Time, format_time, is_valid_time_string, parse_time, parse_time_to_ms};
