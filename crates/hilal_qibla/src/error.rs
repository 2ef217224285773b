//! Error types for the Qibla screen's external inputs.

use std::error::Error;
use std::fmt::{Display, Formatter};

use hilal_calendar::Locale;

/// Failures of the geolocation or orientation inputs.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum QiblaError {
    /// Location denied, unavailable, or timed out.
    LocationUnavailable(String),
    /// No orientation sensor on this device.
    CompassUnsupported,
}

impl QiblaError {
    /// User-facing text for this error.
    pub fn message(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::LocationUnavailable(_), Locale::Arabic) => {
                "تعذر الوصول إلى الموقع، يرجى تفعيل GPS"
            }
            (Self::LocationUnavailable(_), Locale::English) => {
                "cannot access location; enable GPS"
            }
            (Self::CompassUnsupported, Locale::Arabic) => "البوصلة غير مدعومة على هذا الجهاز",
            (Self::CompassUnsupported, Locale::English) => {
                "compass not supported on this device"
            }
        }
    }
}

impl Display for QiblaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LocationUnavailable(reason) => write!(f, "location unavailable: {reason}"),
            Self::CompassUnsupported => write!(f, "compass not supported"),
        }
    }
}

impl Error for QiblaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_messages() {
        assert_eq!(
            QiblaError::LocationUnavailable("timeout".into()).message(Locale::English),
            "cannot access location; enable GPS"
        );
        assert_eq!(
            QiblaError::CompassUnsupported.message(Locale::English),
            "compass not supported on this device"
        );
    }

    #[test]
    fn display_keeps_reason() {
        let e = QiblaError::LocationUnavailable("permission denied".into());
        assert!(e.to_string().contains("permission denied"));
    }
}
