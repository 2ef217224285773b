//! Error types for civil date handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil date construction, parsing, or zone setup.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Month outside 1..=12.
    InvalidMonth(u32),
    /// Day outside 1..=31.
    InvalidDay(u32),
    /// A date string did not match `YYYY-MM-DD`.
    Parse(String),
    /// Day arithmetic left the representable year range.
    OutOfRange,
    /// UTC offset beyond ±14 hours.
    InvalidOffset(i32),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth(m) => write!(f, "month {m} outside 1..=12"),
            Self::InvalidDay(d) => write!(f, "day {d} outside 1..=31"),
            Self::Parse(msg) => write!(f, "date parse error: {msg}"),
            Self::OutOfRange => write!(f, "date outside representable range"),
            Self::InvalidOffset(min) => write!(f, "UTC offset {min} min exceeds 14 hours"),
        }
    }
}

impl Error for TimeError {}
