//! Civil (proleptic Gregorian) calendar dates.
//!
//! Provides `CivilDate`, the canonical date representation shared by the
//! converter and the oracle seam. Construction range-checks fields; day
//! arithmetic goes through day numbers so impossible dates normalize.

use std::str::FromStr;

use crate::days::{civil_from_days, days_from_civil, weekday_from_days};
use crate::error::TimeError;

/// Civil calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    /// Range-checked constructor: month 1..=12, day 1..=31.
    ///
    /// The day is not checked against the month length. Use
    /// [`CivilDate::normalized`] to fold an impossible date such as
    /// 30 February into a real one.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidMonth(month));
        }
        if !(1..=31).contains(&day) {
            return Err(TimeError::InvalidDay(day));
        }
        Ok(Self { year, month, day })
    }

    /// Fold the date through its day number.
    pub fn normalized(self) -> Result<Self, TimeError> {
        Self::from_day_number(self.day_number())
    }

    /// Date for a day number (0 = 1970-01-01).
    pub fn from_day_number(days: i64) -> Result<Self, TimeError> {
        let (year, month, day) = civil_from_days(days);
        let year = i32::try_from(year).map_err(|_| TimeError::OutOfRange)?;
        Ok(Self { year, month, day })
    }

    /// Day number (0 = 1970-01-01).
    pub fn day_number(&self) -> i64 {
        days_from_civil(i64::from(self.year), self.month, i64::from(self.day))
    }

    /// Date `n` days later (earlier for negative `n`).
    pub fn add_days(&self, n: i64) -> Result<Self, TimeError> {
        let days = self
            .day_number()
            .checked_add(n)
            .ok_or(TimeError::OutOfRange)?;
        Self::from_day_number(days)
    }

    /// The following day.
    pub fn succ(&self) -> Result<Self, TimeError> {
        self.add_days(1)
    }

    /// Day of week, 0 = Sunday .. 6 = Saturday.
    pub fn weekday(&self) -> u32 {
        weekday_from_days(self.day_number())
    }
}

impl std::fmt::Display for CivilDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('-').collect();
        if parts.len() != 3 {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got {s}")));
        }
        let year: i32 = parts[0]
            .parse()
            .map_err(|e| TimeError::Parse(format!("year: {e}")))?;
        let month: u32 = parts[1]
            .parse()
            .map_err(|e| TimeError::Parse(format!("month: {e}")))?;
        let day: u32 = parts[2]
            .parse()
            .map_err(|e| TimeError::Parse(format!("day: {e}")))?;
        Self::new(year, month, day)
    }
}
