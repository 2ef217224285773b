//! Compass heading from device orientation readings.
//!
//! Platform compatibility shim, not sensor fusion: when the platform exposes
//! a vendor compass heading it is used as-is; otherwise the heading is taken
//! as `|alpha - 360|` from the generic orientation event. That derivation
//! only holds on platforms whose alpha runs counter-clockwise from north and
//! is not authoritative elsewhere.

use crate::bearing::normalize_360;

/// One device orientation event.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrientationReading {
    /// Vendor-specific compass heading in degrees, clockwise from north.
    pub compass_heading: Option<f64>,
    /// Z-axis rotation from the generic orientation event (0-360).
    pub alpha: Option<f64>,
    /// Whether alpha is referenced to Earth rather than the start pose.
    pub absolute: bool,
}

impl OrientationReading {
    /// Reading carrying a vendor compass heading.
    pub fn from_compass(heading_deg: f64) -> Self {
        Self {
            compass_heading: Some(heading_deg),
            alpha: None,
            absolute: true,
        }
    }

    /// Reading carrying only a generic alpha angle.
    pub fn from_alpha(alpha_deg: f64, absolute: bool) -> Self {
        Self {
            compass_heading: None,
            alpha: Some(alpha_deg),
            absolute,
        }
    }
}

/// Heading in degrees [0, 360), or `None` if the reading carries no usable angle.
pub fn heading_from_reading(reading: &OrientationReading) -> Option<f64> {
    let raw = match (reading.compass_heading, reading.alpha) {
        (Some(h), _) if h.is_finite() => h,
        (_, Some(alpha)) if alpha.is_finite() => (alpha - 360.0).abs(),
        _ => return None,
    };
    Some(normalize_360(raw))
}
