//! Gregorian ↔ Hijri conversion.
//!
//! Forward conversion is a single oracle call. The oracle only projects
//! instants into a calendar, so the reverse direction is a bounded linear
//! scan: estimate the Gregorian year, then walk forward one civil day at a
//! time until the oracle reports the requested Hijri date.
//!
//! Every candidate is anchored at local noon in the reference zone. The
//! oracle projects through a zone, and a midnight-anchored instant could
//! fall on the neighbouring civil day.

use hilal_time::{Moment, ReferenceZone};
use log::{debug, warn};

use crate::date::{CalendarDate, HijriDate, MIN_GREGORIAN_YEAR};
use crate::error::ConvertError;
use crate::numerals::parse_number;
use crate::oracle::{CalendarOracle, CalendarSystem};

/// Days scanned by the reverse search.
///
/// About 5.5 solar years. The linear year estimate starts up to two years
/// before the target; the rest absorbs estimate error at the edges of the
/// oracle's range.
///
/// Each candidate is one oracle call. Inside the compiled Umm al-Qura data
/// (roughly 1300-1600 AH) a full scan takes well under a millisecond.
/// Outside it ICU4X computes every call astronomically and a single reverse
/// lookup can take seconds, so run such searches off the UI thread or lower
/// [`SearchConfig::max_days`].
pub const HIJRI_SEARCH_WINDOW_DAYS: u32 = 2000;

/// Ratio of a lunar year to a solar year, rounded down (354.37 / 365.25 ≈ 0.9702).
pub const LUNAR_SOLAR_YEAR_RATIO: f64 = 0.97;

/// Gregorian year of Hijri year 0 on the linear estimate (622 minus two years of slack).
pub const EPOCH_OFFSET_YEARS: f64 = 620.0;

/// Parameters for both conversion directions.
///
/// The cost of a reverse search grows with `max_days`; see
/// [`HIJRI_SEARCH_WINDOW_DAYS`] for the per-call cost outside the compiled
/// calendar data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Zone in which every instant is projected.
    pub zone: ReferenceZone,
    /// Upper bound on candidate days in the reverse search.
    pub max_days: u32,
    /// Multiplier of the Hijri year in the start-year estimate.
    pub year_ratio: f64,
    /// Additive term of the start-year estimate.
    pub epoch_offset_years: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            zone: ReferenceZone::RIYADH,
            max_days: HIJRI_SEARCH_WINDOW_DAYS,
            year_ratio: LUNAR_SOLAR_YEAR_RATIO,
            epoch_offset_years: EPOCH_OFFSET_YEARS,
        }
    }
}

impl SearchConfig {
    /// Same configuration with a different scan bound.
    pub fn with_max_days(mut self, max_days: u32) -> Self {
        self.max_days = max_days;
        self
    }

    /// Same configuration projected through a different zone.
    pub fn with_zone(mut self, zone: ReferenceZone) -> Self {
        self.zone = zone;
        self
    }
}

/// Gregorian year at which the reverse search starts.
///
/// `floor(hijri_year * year_ratio + epoch_offset_years)`.
pub fn estimate_gregorian_year(hijri_year: i32, config: &SearchConfig) -> i32 {
    let estimate = (f64::from(hijri_year) * config.year_ratio + config.epoch_offset_years).floor();
    estimate.clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
}

/// Parse one user-entered field, tolerating Arabic-Indic digits.
fn parse_field<T: TryFrom<i64>>(s: &str) -> Result<T, ConvertError> {
    let n = parse_number(s).ok_or(ConvertError::InvalidDate)?;
    T::try_from(n).map_err(|_| ConvertError::InvalidDate)
}

/// Convert user-entered Gregorian fields to a Hijri date.
///
/// Fields may use ASCII or Arabic-Indic digits. Unparsable fields, a year
/// before 622, a month outside 1..=12 or a day outside 1..=31 yield
/// [`ConvertError::InvalidDate`]. An impossible day such as 30 February is
/// folded forward into the next month rather than rejected.
pub fn gregorian_to_hijri<O: CalendarOracle>(
    oracle: &O,
    year: &str,
    month: &str,
    day: &str,
    config: &SearchConfig,
) -> Result<HijriDate, ConvertError> {
    let year: i32 = parse_field(year)?;
    let month: u32 = parse_field(month)?;
    let day: u32 = parse_field(day)?;
    let date = CalendarDate::new(year, month, day)?;
    gregorian_to_hijri_date(oracle, date, config)
}

/// Convert a Gregorian date to a Hijri date with one oracle call.
pub fn gregorian_to_hijri_date<O: CalendarOracle>(
    oracle: &O,
    date: CalendarDate,
    config: &SearchConfig,
) -> Result<HijriDate, ConvertError> {
    if date.year < MIN_GREGORIAN_YEAR {
        return Err(ConvertError::InvalidDate);
    }
    let instant = Moment::local_noon(date, config.zone);
    let parts = oracle.format(instant, CalendarSystem::IslamicUmmAlQura, config.zone)?;
    let hijri = HijriDate {
        year: parts.year,
        month: parts.month,
        day: parts.day,
    };
    debug!("{date} -> {hijri} (era {})", parts.era);
    Ok(hijri)
}

/// Convert user-entered Hijri fields to a Gregorian date.
///
/// Fields may use ASCII or Arabic-Indic digits. Unparsable fields, a year
/// below 1, a month outside 1..=12 or a day outside 1..=30 yield
/// [`ConvertError::InvalidDate`].
pub fn hijri_to_gregorian<O: CalendarOracle>(
    oracle: &O,
    year: &str,
    month: &str,
    day: &str,
    config: &SearchConfig,
) -> Result<CalendarDate, ConvertError> {
    let year: i32 = parse_field(year)?;
    let month: u32 = parse_field(month)?;
    let day: u32 = parse_field(day)?;
    hijri_to_gregorian_date(oracle, HijriDate { year, month, day }, config)
}

/// Find the Gregorian date the oracle maps to `target`.
///
/// Scans at most `config.max_days` candidates starting on 1 January of the
/// estimated year. A candidate on which the oracle fails is skipped. Only an
/// exact `(year, month, day)` match is accepted; there is no nearest-date
/// fallback.
pub fn hijri_to_gregorian_date<O: CalendarOracle>(
    oracle: &O,
    target: HijriDate,
    config: &SearchConfig,
) -> Result<CalendarDate, ConvertError> {
    target.validate()?;

    let start_year = estimate_gregorian_year(target.year, config);
    let start = CalendarDate::new(start_year, 1, 1)?;
    let start_instant = Moment::local_noon(start, config.zone);
    debug!(
        "searching {target} from {start}, up to {} days",
        config.max_days
    );

    let mut skipped = 0u32;
    for offset in 0..config.max_days {
        let instant = start_instant.add_days(i64::from(offset));
        match oracle.format(instant, CalendarSystem::IslamicUmmAlQura, config.zone) {
            Ok(parts) if parts.matches(target.year, target.month, target.day) => {
                let found = start.add_days(i64::from(offset))?;
                debug!("{target} -> {found} after {} candidates", offset + 1);
                return Ok(found);
            }
            Ok(_) => {}
            Err(e) => {
                skipped += 1;
                warn!("oracle failed on candidate {offset} of {target}, skipping: {e}");
            }
        }
    }

    debug!(
        "{target} not found in {} days ({skipped} skipped)",
        config.max_days
    );
    Err(ConvertError::NotFound {
        scanned_days: config.max_days,
    })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::error::OracleError;
    use crate::oracle::{DateParts, UmmAlQuraOracle};

    /// Toy calendar: Hijri (y, m, d) = Gregorian (y - 579, m, d).
    /// Candidates listed in `fail_on` make the oracle fail.
    struct ShiftOracle {
        fail_on: Vec<CalendarDate>,
        calls: Cell<u32>,
    }

    impl ShiftOracle {
        fn new() -> Self {
            Self {
                fail_on: Vec::new(),
                calls: Cell::new(0),
            }
        }
    }

    impl CalendarOracle for ShiftOracle {
        fn format(
            &self,
            instant: Moment,
            _system: CalendarSystem,
            zone: ReferenceZone,
        ) -> Result<DateParts, OracleError> {
            self.calls.set(self.calls.get() + 1);
            let civil = instant.civil_date_in(zone)?;
            if self.fail_on.contains(&civil) {
                return Err(OracleError::Backend("scripted failure".into()));
            }
            Ok(DateParts {
                era: "ah".into(),
                year: civil.year - 579,
                month: civil.month,
                day: civil.day,
            })
        }
    }

    struct BrokenOracle;

    impl CalendarOracle for BrokenOracle {
        fn format(
            &self,
            _instant: Moment,
            _system: CalendarSystem,
            _zone: ReferenceZone,
        ) -> Result<DateParts, OracleError> {
            Err(OracleError::Backend("calendar unavailable".into()))
        }
    }

    fn cfg() -> SearchConfig {
        SearchConfig::default()
    }

    #[test]
    fn estimate_matches_formula() {
        assert_eq!(estimate_gregorian_year(1445, &cfg()), 2021);
        assert_eq!(estimate_gregorian_year(1, &cfg()), 620);
        assert_eq!(estimate_gregorian_year(1500, &cfg()), 2075);
    }

    #[test]
    fn forward_uses_oracle() {
        let o = ShiftOracle::new();
        let h = gregorian_to_hijri(&o, "2024", "3", "11", &cfg()).unwrap();
        assert_eq!(h, HijriDate::new(1445, 3, 11).unwrap());
        assert_eq!(o.calls.get(), 1);
    }

    #[test]
    fn forward_accepts_arabic_digits() {
        let o = ShiftOracle::new();
        let h = gregorian_to_hijri(&o, "٢٠٢٤", "٣", "١١", &cfg()).unwrap();
        assert_eq!(h, HijriDate::new(1445, 3, 11).unwrap());
    }

    #[test]
    fn forward_rejects_bad_input() {
        let o = ShiftOracle::new();
        let c = cfg();
        assert_eq!(gregorian_to_hijri(&o, "621", "1", "1", &c), Err(ConvertError::InvalidDate));
        assert_eq!(gregorian_to_hijri(&o, "abc", "1", "1", &c), Err(ConvertError::InvalidDate));
        assert_eq!(gregorian_to_hijri(&o, "2024", "13", "1", &c), Err(ConvertError::InvalidDate));
        assert_eq!(gregorian_to_hijri(&o, "2024", "1", "", &c), Err(ConvertError::InvalidDate));
        assert_eq!(gregorian_to_hijri(&o, "2024", "-1", "1", &c), Err(ConvertError::InvalidDate));
        assert_eq!(o.calls.get(), 0);
    }

    #[test]
    fn forward_normalizes_impossible_day() {
        let o = ShiftOracle::new();
        let h = gregorian_to_hijri(&o, "2023", "2", "30", &cfg()).unwrap();
        assert_eq!((h.month, h.day), (3, 2));
    }

    #[test]
    fn forward_oracle_failure_is_conversion_error() {
        let r = gregorian_to_hijri(&BrokenOracle, "2024", "3", "11", &cfg());
        assert!(matches!(r, Err(ConvertError::Oracle(_))));
    }

    #[test]
    fn reverse_finds_exact_match() {
        let o = ShiftOracle::new();
        let g = hijri_to_gregorian(&o, "1445", "3", "11", &cfg()).unwrap();
        assert_eq!(g, CalendarDate::new(2024, 3, 11).unwrap());
    }

    #[test]
    fn reverse_skips_failing_candidates() {
        let mut o = ShiftOracle::new();
        // Every day of February 2024 fails; the match in March is still found.
        let feb1 = CalendarDate::new(2024, 2, 1).unwrap();
        o.fail_on = (0..29).map(|i| feb1.add_days(i).unwrap()).collect();
        let g = hijri_to_gregorian(&o, "1445", "3", "11", &cfg()).unwrap();
        assert_eq!(g, CalendarDate::new(2024, 3, 11).unwrap());
    }

    #[test]
    fn reverse_exhaustion_is_bounded() {
        let o = ShiftOracle::new();
        let c = cfg().with_max_days(30);
        let r = hijri_to_gregorian(&o, "1445", "3", "11", &c);
        assert_eq!(r, Err(ConvertError::NotFound { scanned_days: 30 }));
        assert_eq!(o.calls.get(), 30);
    }

    #[test]
    fn reverse_with_all_failures_exhausts() {
        let c = cfg().with_max_days(50);
        let r = hijri_to_gregorian(&BrokenOracle, "1445", "3", "11", &c);
        assert_eq!(r, Err(ConvertError::NotFound { scanned_days: 50 }));
    }

    #[test]
    fn reverse_rejects_bad_input() {
        let o = ShiftOracle::new();
        let c = cfg();
        assert_eq!(hijri_to_gregorian(&o, "0", "1", "1", &c), Err(ConvertError::InvalidDate));
        assert_eq!(hijri_to_gregorian(&o, "1445", "x", "1", &c), Err(ConvertError::InvalidDate));
        assert_eq!(hijri_to_gregorian(&o, "1445", "1", "31", &c), Err(ConvertError::InvalidDate));
        assert_eq!(o.calls.get(), 0);
    }

    #[test]
    fn forward_far_future_year_is_oracle_error() {
        let o = UmmAlQuraOracle::new();
        let r = gregorian_to_hijri(&o, "300000000", "1", "1", &cfg());
        assert_eq!(r, Err(ConvertError::Oracle(OracleError::OutOfRange)));
    }

    #[test]
    fn reverse_far_future_year_skips_to_not_found() {
        let o = UmmAlQuraOracle::new();
        let c = cfg().with_max_days(3);
        let r = hijri_to_gregorian(&o, "2147483647", "1", "1", &c);
        assert_eq!(r, Err(ConvertError::NotFound { scanned_days: 3 }));
    }

    #[test]
    fn roundtrip_through_toy_calendar() {
        let o = ShiftOracle::new();
        let c = cfg();
        let start = CalendarDate::new(2023, 12, 20).unwrap();
        for i in 0..40 {
            let g = start.add_days(i).unwrap();
            let h = gregorian_to_hijri_date(&o, g, &c).unwrap();
            let back = hijri_to_gregorian_date(&o, h, &c).unwrap();
            assert_eq!(back, g);
        }
    }
}
