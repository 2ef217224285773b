//! Test oracles.

#![allow(dead_code)]

use std::cell::Cell;

use hilal_calendar::{CalendarOracle, CalendarSystem, DateParts, OracleError};
use hilal_time::{Moment, ReferenceZone, days_from_civil};

/// Day number of 1 Muharram 1 AH in the arithmetic calendar (622-07-19).
fn islamic_epoch() -> i64 {
    days_from_civil(622, 7, 19)
}

fn days_from_tabular(year: i64, month: i64, day: i64) -> i64 {
    day + 29 * (month - 1)
        + (6 * month - 1).div_euclid(11)
        + (year - 1) * 354
        + (3 + 11 * year).div_euclid(30)
        + islamic_epoch()
        - 1
}

fn tabular_from_days(days: i64) -> (i64, i64, i64) {
    let year = (30 * (days - islamic_epoch()) + 10646).div_euclid(10631);
    let prior = days - days_from_tabular(year, 1, 1);
    let month = (11 * prior + 330).div_euclid(325);
    let day = days - days_from_tabular(year, month, 1) + 1;
    (year, month, day)
}

/// Deterministic stand-in for a platform calendar: the 30-year-cycle
/// arithmetic Islamic calendar. Counts calls and can fail on chosen days.
pub struct TabularOracle {
    pub fail_on_days: Vec<i64>,
    pub calls: Cell<u32>,
}

impl TabularOracle {
    pub fn new() -> Self {
        Self {
            fail_on_days: Vec::new(),
            calls: Cell::new(0),
        }
    }
}

impl CalendarOracle for TabularOracle {
    fn format(
        &self,
        instant: Moment,
        system: CalendarSystem,
        zone: ReferenceZone,
    ) -> Result<DateParts, OracleError> {
        self.calls.set(self.calls.get() + 1);
        let civil = instant.civil_date_in(zone)?;
        let days = civil.day_number();
        if self.fail_on_days.contains(&days) {
            return Err(OracleError::Backend(format!("scripted failure on {civil}")));
        }
        match system {
            CalendarSystem::Gregorian => Ok(DateParts {
                era: "ce".into(),
                year: civil.year,
                month: civil.month,
                day: civil.day,
            }),
            CalendarSystem::IslamicUmmAlQura => {
                let (y, m, d) = tabular_from_days(days);
                Ok(DateParts {
                    era: "ah".into(),
                    year: y as i32,
                    month: m as u32,
                    day: d as u32,
                })
            }
        }
    }
}
