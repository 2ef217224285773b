//! Configuration for the hilal tools.
//!
//! This crate provides:
//! - `HilalConfig`, loaded from TOML with every section optional
//! - Range validation with the offending section named in the error
//! - `HILAL_*` environment overrides
//! - Mapping onto the library crates' own settings structs
//!
//! ```toml
//! [calendar]
//! reference_utc_offset_minutes = 180
//! search_days = 2000
//!
//! [qibla]
//! alignment_tolerance_deg = 3.0
//!
//! [display]
//! locale = "en"
//! ```

pub mod error;
pub mod sections;

use std::env;
use std::path::Path;

use hilal_calendar::{Locale, SearchConfig};
use hilal_qibla::{LocationRequest, QiblaConfig};
use hilal_time::ReferenceZone;
use log::warn;
use serde::{Deserialize, Serialize};

pub use error::ConfigError;
pub use sections::{CalendarSection, DisplaySection, MAX_UTC_OFFSET_MINUTES, QiblaSection};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HilalConfig {
    #[serde(default)]
    pub calendar: CalendarSection,
    #[serde(default)]
    pub qibla: QiblaSection,
    #[serde(default)]
    pub display: DisplaySection,
}

impl HilalConfig {
    /// Load from a TOML file. Does not validate.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Check every section, returning the first failure.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid =
            |section: &'static str| move |message: String| ConfigError::Invalid { section, message };
        self.calendar.validate().map_err(invalid("calendar"))?;
        self.qibla.validate().map_err(invalid("qibla"))?;
        self.display.validate().map_err(invalid("display"))?;
        Ok(())
    }

    /// Apply overrides from the process environment.
    ///
    /// | Variable | Field |
    /// |----------|-------|
    /// | `HILAL_LOCALE` | `display.locale` |
    /// | `HILAL_SEARCH_DAYS` | `calendar.search_days` |
    /// | `HILAL_UTC_OFFSET_MINUTES` | `calendar.reference_utc_offset_minutes` |
    /// | `HILAL_ALIGNMENT_TOLERANCE_DEG` | `qibla.alignment_tolerance_deg` |
    ///
    /// Unparsable values are logged and ignored.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    #[must_use]
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("HILAL_LOCALE") {
            self.display.locale = val;
        }
        if let Some(n) = parse_var(&lookup, "HILAL_SEARCH_DAYS") {
            self.calendar.search_days = n;
        }
        if let Some(n) = parse_var(&lookup, "HILAL_UTC_OFFSET_MINUTES") {
            self.calendar.reference_utc_offset_minutes = n;
        }
        if let Some(x) = parse_var(&lookup, "HILAL_ALIGNMENT_TOLERANCE_DEG") {
            self.qibla.alignment_tolerance_deg = x;
        }
        self
    }

    /// Display locale. Falls back to Arabic if `display.locale` is unknown.
    pub fn locale(&self) -> Locale {
        self.display.locale.parse().unwrap_or_else(|e| {
            warn!("{e}; using ar");
            Locale::Arabic
        })
    }

    /// Settings for both conversion directions.
    pub fn search_config(&self) -> Result<SearchConfig, ConfigError> {
        let zone = ReferenceZone::from_offset_minutes(self.calendar.reference_utc_offset_minutes)
            .map_err(|e| ConfigError::Invalid {
                section: "calendar",
                message: e.to_string(),
            })?;
        Ok(SearchConfig {
            zone,
            max_days: self.calendar.search_days,
            year_ratio: self.calendar.year_ratio,
            epoch_offset_years: self.calendar.epoch_offset_years,
        })
    }

    /// Settings for a Qibla session.
    pub fn qibla_config(&self) -> QiblaConfig {
        QiblaConfig {
            alignment_tolerance_deg: self.qibla.alignment_tolerance_deg,
            location: LocationRequest {
                timeout: self.qibla.location_timeout(),
                high_accuracy: self.qibla.high_accuracy,
            },
        }
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("ignoring {key}={raw}: not a valid value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn defaults_validate() {
        let c = HilalConfig::default();
        c.validate().unwrap();
        assert_eq!(c.calendar.search_days, 2000);
        assert_eq!(c.calendar.reference_utc_offset_minutes, 180);
        assert_eq!(c.qibla.location_timeout_ms, 6000);
        assert_eq!(c.locale(), Locale::Arabic);
    }

    #[test]
    fn defaults_map_to_library_defaults() {
        let c = HilalConfig::default();
        assert_eq!(c.search_config().unwrap(), SearchConfig::default());
        assert_eq!(c.qibla_config(), QiblaConfig::default());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let c = HilalConfig::from_toml_str("[display]\nlocale = \"en\"\n").unwrap();
        assert_eq!(c.locale(), Locale::English);
        assert_eq!(c.calendar, CalendarSection::default());

        let c = HilalConfig::from_toml_str("[calendar]\nsearch_days = 400\n").unwrap();
        assert_eq!(c.calendar.search_days, 400);
        assert_eq!(c.calendar.year_ratio, 0.97);
    }

    #[test]
    fn integer_epoch_offset_accepted() {
        let c = HilalConfig::from_toml_str("[calendar]\nepoch_offset_years = 620\n").unwrap();
        assert_eq!(c.calendar.epoch_offset_years, 620.0);
    }

    #[test]
    fn bad_toml_is_parse_error() {
        assert!(matches!(
            HilalConfig::from_toml_str("[calendar]\nsearch_days = \"many\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn validation_names_section() {
        let mut c = HilalConfig::default();
        c.calendar.search_days = 0;
        let err = c.validate().unwrap_err();
        assert!(err.to_string().starts_with("[calendar]"), "{err}");

        let mut c = HilalConfig::default();
        c.qibla.alignment_tolerance_deg = 181.0;
        assert!(matches!(
            c.validate(),
            Err(ConfigError::Invalid { section: "qibla", .. })
        ));

        let mut c = HilalConfig::default();
        c.display.locale = "fr".into();
        assert!(matches!(
            c.validate(),
            Err(ConfigError::Invalid { section: "display", .. })
        ));
    }

    #[test]
    fn ratio_and_offset_bounds() {
        let mut c = HilalConfig::default();
        c.calendar.year_ratio = 0.0;
        assert!(c.validate().is_err());
        c.calendar.year_ratio = f64::NAN;
        assert!(c.validate().is_err());
        c.calendar.year_ratio = 0.97;
        c.calendar.reference_utc_offset_minutes = 841;
        assert!(c.validate().is_err());
        c.calendar.reference_utc_offset_minutes = -840;
        assert!(c.validate().is_ok());
    }

    #[test]
    fn overrides_apply() {
        let vars: HashMap<&str, &str> = [
            ("HILAL_LOCALE", "en"),
            ("HILAL_SEARCH_DAYS", "365"),
            ("HILAL_UTC_OFFSET_MINUTES", "-300"),
            ("HILAL_ALIGNMENT_TOLERANCE_DEG", "5.5"),
        ]
        .into_iter()
        .collect();
        let c = HilalConfig::default()
            .with_overrides_from(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(c.locale(), Locale::English);
        assert_eq!(c.calendar.search_days, 365);
        assert_eq!(c.search_config().unwrap().zone.offset_minutes(), -300);
        assert_eq!(c.qibla_config().alignment_tolerance_deg, 5.5);
    }

    #[test]
    fn bad_override_ignored() {
        let c = HilalConfig::default().with_overrides_from(|k| {
            (k == "HILAL_SEARCH_DAYS").then(|| "lots".to_string())
        });
        assert_eq!(c.calendar.search_days, 2000);
    }

    #[test]
    fn toml_roundtrip() {
        let mut c = HilalConfig::default();
        c.display.locale = "en".into();
        c.qibla.high_accuracy = false;
        let text = c.to_toml_string().unwrap();
        assert_eq!(HilalConfig::from_toml_str(&text).unwrap(), c);
    }
}
