//! Error types for calendar conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

use hilal_time::TimeError;

use crate::locale::Locale;

/// Failure reported by a calendar oracle.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum OracleError {
    /// The instant has no civil date (non-finite or out of range).
    OutOfRange,
    /// The calendar backend refused the date.
    Backend(String),
}

impl Display for OracleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange => write!(f, "instant outside the oracle's range"),
            Self::Backend(msg) => write!(f, "calendar backend error: {msg}"),
        }
    }
}

impl Error for OracleError {}

impl From<TimeError> for OracleError {
    fn from(_: TimeError) -> Self {
        Self::OutOfRange
    }
}

/// Errors from Gregorian ↔ Hijri conversion.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConvertError {
    /// A field failed to parse or is out of range.
    InvalidDate,
    /// The oracle failed on a forward conversion.
    Oracle(OracleError),
    /// The reverse search scanned its whole window without a match.
    NotFound { scanned_days: u32 },
}

impl ConvertError {
    /// User-facing text for this error.
    pub fn message(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::InvalidDate, Locale::Arabic) => "تاريخ غير صالح",
            (Self::InvalidDate, Locale::English) => "invalid date",
            (Self::Oracle(_), Locale::Arabic) => "حدث خطأ في التحويل",
            (Self::Oracle(_), Locale::English) => "conversion error",
            (Self::NotFound { .. }, Locale::Arabic) => "لم يتم العثور على تاريخ مقابل",
            (Self::NotFound { .. }, Locale::English) => "no corresponding date found",
        }
    }
}

impl Display for ConvertError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate => write!(f, "invalid date"),
            Self::Oracle(e) => write!(f, "conversion error: {e}"),
            Self::NotFound { scanned_days } => {
                write!(f, "no corresponding date found in {scanned_days} days")
            }
        }
    }
}

impl Error for ConvertError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Oracle(e) => Some(e),
            _ => None,
        }
    }
}

impl From<OracleError> for ConvertError {
    fn from(e: OracleError) -> Self {
        Self::Oracle(e)
    }
}

impl From<TimeError> for ConvertError {
    fn from(_: TimeError) -> Self {
        Self::InvalidDate
    }
}
