//! Civil date arithmetic and fixed-offset instants.
//!
//! This crate provides:
//! - Proleptic Gregorian calendar ↔ day-number conversion
//! - `CivilDate`, a range-checked date with lenient day normalization
//! - `Moment`, an instant stored as a UTC Julian Date
//! - `ReferenceZone`, a fixed UTC offset used to pin calendar projections

pub mod civil;
pub mod days;
pub mod error;
pub mod moment;

pub use civil::CivilDate;
pub use days::{civil_from_days, days_from_civil, days_in_month, is_leap_year, weekday_from_days};
pub use error::TimeError;
pub use moment::{Moment, ReferenceZone, UNIX_EPOCH_JD};
