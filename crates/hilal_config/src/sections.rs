//! Per-section configuration tables.

use std::time::Duration;

use hilal_calendar::{EPOCH_OFFSET_YEARS, HIJRI_SEARCH_WINDOW_DAYS, LUNAR_SOLAR_YEAR_RATIO, Locale};
use hilal_qibla::{ALIGNMENT_TOLERANCE_DEG, DEFAULT_LOCATION_TIMEOUT};
use serde::{Deserialize, Serialize};

/// Largest UTC offset accepted, in minutes (±14 h).
pub const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

/// `[calendar]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarSection {
    /// Offset of the zone all instants are projected through. Riyadh is +180.
    pub reference_utc_offset_minutes: i32,
    /// Candidate days scanned by the Hijri → Gregorian search.
    pub search_days: u32,
    /// Start-year estimate multiplier.
    pub year_ratio: f64,
    /// Start-year estimate offset.
    pub epoch_offset_years: f64,
}

impl Default for CalendarSection {
    fn default() -> Self {
        Self {
            reference_utc_offset_minutes: 180,
            search_days: HIJRI_SEARCH_WINDOW_DAYS,
            year_ratio: LUNAR_SOLAR_YEAR_RATIO,
            epoch_offset_years: EPOCH_OFFSET_YEARS,
        }
    }
}

impl CalendarSection {
    pub fn validate(&self) -> Result<(), String> {
        if self.reference_utc_offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
            return Err(format!(
                "reference_utc_offset_minutes must be within ±{MAX_UTC_OFFSET_MINUTES}, got {}",
                self.reference_utc_offset_minutes
            ));
        }
        if self.search_days == 0 {
            return Err("search_days must be greater than 0".to_string());
        }
        if !(self.year_ratio > 0.0 && self.year_ratio < 2.0) {
            return Err(format!(
                "year_ratio must be in (0, 2), got {}",
                self.year_ratio
            ));
        }
        if !self.epoch_offset_years.is_finite() {
            return Err("epoch_offset_years must be finite".to_string());
        }
        Ok(())
    }
}

/// `[qibla]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QiblaSection {
    /// Inclusive alignment tolerance in degrees.
    pub alignment_tolerance_deg: f64,
    /// Position request timeout.
    pub location_timeout_ms: u64,
    /// Ask for GPS-grade accuracy.
    pub high_accuracy: bool,
}

impl Default for QiblaSection {
    fn default() -> Self {
        Self {
            alignment_tolerance_deg: ALIGNMENT_TOLERANCE_DEG,
            location_timeout_ms: DEFAULT_LOCATION_TIMEOUT.as_millis() as u64,
            high_accuracy: true,
        }
    }
}

impl QiblaSection {
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=180.0).contains(&self.alignment_tolerance_deg) {
            return Err(format!(
                "alignment_tolerance_deg must be in [0, 180], got {}",
                self.alignment_tolerance_deg
            ));
        }
        if self.location_timeout_ms == 0 {
            return Err("location_timeout_ms must be greater than 0".to_string());
        }
        Ok(())
    }

    pub fn location_timeout(&self) -> Duration {
        Duration::from_millis(self.location_timeout_ms)
    }
}

/// `[display]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    /// `ar` or `en`.
    pub locale: String,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            locale: Locale::Arabic.tag().to_string(),
        }
    }
}

impl DisplaySection {
    pub fn validate(&self) -> Result<(), String> {
        self.locale.parse::<Locale>().map(|_| ())
    }
}
