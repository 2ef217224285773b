//! Gregorian ↔ Umm al-Qura Hijri date conversion.
//!
//! This crate provides:
//! - The `CalendarOracle` seam and an ICU4X-backed Umm al-Qura oracle
//! - Forward conversion (one oracle call) and reverse conversion (bounded
//!   day-by-day search against the oracle)
//! - Arabic-Indic ↔ ASCII numeral handling for user input and display
//! - Month names and long-form rendering in Arabic and English
//!
//! No Hijri arithmetic is implemented here: the oracle is the only source of
//! calendrical truth.

pub mod convert;
pub mod date;
pub mod display;
pub mod error;
pub mod locale;
pub mod months;
pub mod numerals;
pub mod oracle;

pub use convert::{
    EPOCH_OFFSET_YEARS, HIJRI_SEARCH_WINDOW_DAYS, LUNAR_SOLAR_YEAR_RATIO, SearchConfig,
    estimate_gregorian_year, gregorian_to_hijri, gregorian_to_hijri_date, hijri_to_gregorian,
    hijri_to_gregorian_date,
};
pub use date::{CalendarDate, HijriDate, MIN_GREGORIAN_YEAR, MIN_HIJRI_YEAR};
pub use display::{format_gregorian, format_hijri, gregorian_era_suffix, hijri_era_suffix};
pub use error::{ConvertError, OracleError};
pub use locale::Locale;
pub use months::{ALL_GREGORIAN_MONTHS, ALL_HIJRI_MONTHS, GregorianMonth, HijriMonth};
pub use numerals::{parse_number, to_arabic_indic_digits, to_ascii_digits};
pub use oracle::{
    CalendarOracle, CalendarSystem, DateParts, UMM_AL_QURA_ISO_YEARS, UmmAlQuraOracle,
};
