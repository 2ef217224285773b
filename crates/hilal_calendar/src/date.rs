//! Date types for both calendars.

use crate::error::ConvertError;

/// Gregorian calendar date.
pub use hilal_time::CivilDate as CalendarDate;

/// Earliest Gregorian year accepted for conversion (start of the Hijri era).
pub const MIN_GREGORIAN_YEAR: i32 = 622;

/// Earliest Hijri year accepted for conversion.
pub const MIN_HIJRI_YEAR: i32 = 1;

/// Date in the Umm al-Qura Hijri calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HijriDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl HijriDate {
    /// Range-checked constructor: year ≥ 1, month 1..=12, day 1..=30.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, ConvertError> {
        let date = Self { year, month, day };
        date.validate()?;
        Ok(date)
    }

    /// Check the field ranges.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.year < MIN_HIJRI_YEAR
            || !(1..=12).contains(&self.month)
            || !(1..=30).contains(&self.day)
        {
            return Err(ConvertError::InvalidDate);
        }
        Ok(())
    }
}

impl std::fmt::Display for HijriDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02} AH", self.year, self.month, self.day)
    }
}
