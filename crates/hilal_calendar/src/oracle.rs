//! Calendar oracle seam.
//!
//! The converter never computes Umm al-Qura dates itself. It asks an oracle
//! to project an instant into a calendar system as seen from a reference zone,
//! and treats the answer as authoritative. Month boundaries of Umm al-Qura
//! come from a sighting-adjusted table, not a closed-form rule, so the oracle
//! must be backed by that table.

use std::ops::RangeInclusive;

use hilal_time::{Moment, ReferenceZone};
use icu_calendar::islamic::IslamicUmmAlQura;
use icu_calendar::{Date, Ref};

use crate::error::OracleError;

/// Calendar systems an oracle can project into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarSystem {
    /// Proleptic Gregorian.
    Gregorian,
    /// Umm al-Qura Hijri (Saudi Arabia).
    IslamicUmmAlQura,
}

impl CalendarSystem {
    /// CLDR calendar identifier.
    pub fn identifier(self) -> &'static str {
        match self {
            Self::Gregorian => "gregorian",
            Self::IslamicUmmAlQura => "islamic-umalqura",
        }
    }
}

/// Date fields extracted from an oracle projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParts {
    /// Era code as reported by the backend (e.g. `"ah"`, `"ce"`).
    pub era: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateParts {
    /// Whether the fields equal `(year, month, day)`.
    pub fn matches(&self, year: i32, month: u32, day: u32) -> bool {
        self.year == year && self.month == month && self.day == day
    }
}

/// An authoritative calendar engine.
pub trait CalendarOracle {
    /// Project `instant` into `system` as observed on a wall clock in `zone`.
    fn format(
        &self,
        instant: Moment,
        system: CalendarSystem,
        zone: ReferenceZone,
    ) -> Result<DateParts, OracleError>;
}

impl<O: CalendarOracle + ?Sized> CalendarOracle for &O {
    fn format(
        &self,
        instant: Moment,
        system: CalendarSystem,
        zone: ReferenceZone,
    ) -> Result<DateParts, OracleError> {
        (**self).format(instant, system, zone)
    }
}

impl<O: CalendarOracle + ?Sized> CalendarOracle for Box<O> {
    fn format(
        &self,
        instant: Moment,
        system: CalendarSystem,
        zone: ReferenceZone,
    ) -> Result<DateParts, OracleError> {
        (**self).format(instant, system, zone)
    }
}

/// ISO years [`UmmAlQuraOracle`] will project into Umm al-Qura.
///
/// Outside the compiled data ICU4X falls back to astronomical calculation,
/// which panics in debug builds once the lunar-phase moment leaves `i32`.
/// Instants outside this window fail with [`OracleError::OutOfRange`].
pub const UMM_AL_QURA_ISO_YEARS: RangeInclusive<i32> = 1..=9999;

/// Oracle backed by the ICU4X compiled Umm al-Qura data.
#[derive(Debug, Clone)]
pub struct UmmAlQuraOracle {
    calendar: IslamicUmmAlQura,
}

impl UmmAlQuraOracle {
    /// Create an oracle using the compiled calendar data.
    pub fn new() -> Self {
        Self {
            calendar: IslamicUmmAlQura::new(),
        }
    }
}

impl Default for UmmAlQuraOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarOracle for UmmAlQuraOracle {
    fn format(
        &self,
        instant: Moment,
        system: CalendarSystem,
        zone: ReferenceZone,
    ) -> Result<DateParts, OracleError> {
        let civil = instant.civil_date_in(zone)?;
        match system {
            CalendarSystem::Gregorian => Ok(DateParts {
                era: if civil.year > 0 { "ce" } else { "bce" }.to_owned(),
                year: civil.year,
                month: civil.month,
                day: civil.day,
            }),
            CalendarSystem::IslamicUmmAlQura => {
                if !UMM_AL_QURA_ISO_YEARS.contains(&civil.year) {
                    return Err(OracleError::OutOfRange);
                }
                // civil_date_in yields month 1..=12 and day 1..=31
                let iso = Date::try_new_iso_date(civil.year, civil.month as u8, civil.day as u8)
                    .map_err(|e| OracleError::Backend(e.to_string()))?;
                let hijri = iso.to_calendar(Ref(&self.calendar));
                let year = hijri.year();
                Ok(DateParts {
                    era: year.era.0.as_str().to_owned(),
                    year: year.number,
                    month: hijri.month().ordinal,
                    day: hijri.day_of_month().0,
                })
            }
        }
    }
}
