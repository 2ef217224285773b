//! Instants and fixed-offset reference zones.

use crate::civil::CivilDate;
use crate::error::TimeError;

/// Julian Date of 1970-01-01T00:00:00 UTC.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Minutes per day.
const MINUTES_PER_DAY: f64 = 1440.0;

/// Largest accepted UTC offset magnitude in minutes (UTC+14 / UTC-14).
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// A time zone with a fixed UTC offset and no daylight saving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReferenceZone {
    offset_minutes: i32,
}

impl ReferenceZone {
    /// Coordinated Universal Time.
    pub const UTC: Self = Self { offset_minutes: 0 };

    /// Asia/Riyadh (UTC+03:00 year-round).
    pub const RIYADH: Self = Self { offset_minutes: 180 };

    /// Zone with the given offset east of UTC, in minutes.
    pub fn from_offset_minutes(offset_minutes: i32) -> Result<Self, TimeError> {
        if offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(TimeError::InvalidOffset(offset_minutes));
        }
        Ok(Self { offset_minutes })
    }

    /// Offset east of UTC in minutes.
    pub fn offset_minutes(self) -> i32 {
        self.offset_minutes
    }
}

impl Default for ReferenceZone {
    fn default() -> Self {
        Self::RIYADH
    }
}

impl std::fmt::Display for ReferenceZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.offset_minutes < 0 { '-' } else { '+' };
        let abs = self.offset_minutes.abs();
        write!(f, "UTC{sign}{:02}:{:02}", abs / 60, abs % 60)
    }
}

/// An instant, stored as a UTC Julian Date.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Moment {
    jd_utc: f64,
}

impl Moment {
    /// Create a moment from a UTC Julian Date.
    pub fn from_jd_utc(jd_utc: f64) -> Self {
        Self { jd_utc }
    }

    /// The instant at local wall-clock `hour:minute` on `date` in `zone`.
    ///
    /// The date is folded through its day number first, so 30 February
    /// means 1 or 2 March.
    pub fn at_local_time(date: CivilDate, hour: u32, minute: u32, zone: ReferenceZone) -> Self {
        let local_minutes = f64::from(hour * 60 + minute) - f64::from(zone.offset_minutes);
        let jd = UNIX_EPOCH_JD + date.day_number() as f64 + local_minutes / MINUTES_PER_DAY;
        Self { jd_utc: jd }
    }

    /// Local noon on `date` in `zone`.
    ///
    /// Noon keeps the civil date stable under any projection within
    /// twelve hours of the zone.
    pub fn local_noon(date: CivilDate, zone: ReferenceZone) -> Self {
        Self::at_local_time(date, 12, 0, zone)
    }

    /// UTC Julian Date.
    pub fn as_jd_utc(self) -> f64 {
        self.jd_utc
    }

    /// Civil date of this instant as seen on a wall clock in `zone`.
    pub fn civil_date_in(self, zone: ReferenceZone) -> Result<CivilDate, TimeError> {
        if !self.jd_utc.is_finite() {
            return Err(TimeError::OutOfRange);
        }
        let local = self.jd_utc - UNIX_EPOCH_JD + f64::from(zone.offset_minutes) / MINUTES_PER_DAY;
        CivilDate::from_day_number(local.floor() as i64)
    }

    /// The same local time `n` days later.
    pub fn add_days(self, n: i64) -> Self {
        Self {
            jd_utc: self.jd_utc + n as f64,
        }
    }
}
