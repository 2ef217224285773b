//! Qibla compass session: one location fix, then a stream of headings.
//!
//! The session owns its heading subscription and releases it exactly once,
//! either through [`QiblaSession::close`] or on drop.

use std::sync::mpsc::{self, Receiver, TryRecvError};

use hilal_calendar::{Locale, to_arabic_indic_digits};
use log::{debug, info, warn};

use crate::alignment::{ALIGNMENT_TOLERANCE_DEG, AlignmentState, update_alignment_with_tolerance};
use crate::bearing::qibla_bearing;
use crate::error::QiblaError;
use crate::heading::{OrientationReading, heading_from_reading};
use crate::sensor::{HeadingSensor, LocationProvider, LocationRequest, SubscriptionId};

/// Session settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QiblaConfig {
    /// Inclusive alignment tolerance in degrees.
    pub alignment_tolerance_deg: f64,
    /// Options passed to the location provider.
    pub location: LocationRequest,
}

impl Default for QiblaConfig {
    fn default() -> Self {
        Self {
            alignment_tolerance_deg: ALIGNMENT_TOLERANCE_DEG,
            location: LocationRequest::default(),
        }
    }
}

/// What the screen shows in place of the bearing readout.
///
/// [`QiblaSession::start`] blocks until the location request resolves and
/// never returns a session in `Calculating`. That state is what a host shows
/// while `start` is still running, and is the `Default`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum QiblaStatus {
    /// Location request still pending.
    #[default]
    Calculating,
    /// Bearing known.
    Ready { bearing_deg: f64 },
    /// The location request failed. Not retried.
    LocationUnavailable,
}

impl QiblaStatus {
    /// Text for the readout area.
    pub fn message(&self, locale: Locale) -> String {
        match self {
            Self::Calculating => match locale {
                Locale::Arabic => "جاري حساب الاتجاه...".to_string(),
                Locale::English => "calculating direction...".to_string(),
            },
            Self::Ready { bearing_deg } => bearing_readout(*bearing_deg, locale),
            Self::LocationUnavailable => QiblaError::LocationUnavailable(String::new())
                .message(locale)
                .to_string(),
        }
    }
}

/// Whole-degree bearing readout, e.g. `118°` or `١١٨°`.
pub fn bearing_readout(bearing_deg: f64, locale: Locale) -> String {
    let text = format!("{}°", bearing_deg.round() as i64 % 360);
    match locale {
        Locale::Arabic => to_arabic_indic_digits(&text),
        Locale::English => text,
    }
}

/// Live compass state.
pub struct QiblaSession<S: HeadingSensor> {
    sensor: S,
    subscription: Option<SubscriptionId>,
    readings: Option<Receiver<OrientationReading>>,
    status: QiblaStatus,
    location_error: Option<QiblaError>,
    compass_error: Option<QiblaError>,
    tolerance_deg: f64,
    heading_deg: Option<f64>,
    alignment: Option<AlignmentState>,
}

impl<S: HeadingSensor> QiblaSession<S> {
    /// Request the position once, compute the bearing, and subscribe to headings.
    ///
    /// Neither failure is fatal: a location failure leaves the bearing unknown,
    /// and a subscription failure leaves the bearing readout without a live
    /// compass.
    pub fn start<L: LocationProvider>(location: &L, mut sensor: S, config: &QiblaConfig) -> Self {
        let (status, location_error) = match location.current_position(&config.location) {
            Ok(pos) => {
                let bearing_deg = qibla_bearing(pos);
                info!(
                    "qibla bearing {bearing_deg:.2} from ({:.4}, {:.4})",
                    pos.latitude_deg, pos.longitude_deg
                );
                (QiblaStatus::Ready { bearing_deg }, None)
            }
            Err(e) => {
                warn!("{e}");
                (QiblaStatus::LocationUnavailable, Some(e))
            }
        };

        let (tx, rx) = mpsc::channel();
        let (subscription, readings, compass_error) = match sensor.subscribe(tx) {
            Ok(id) => (Some(id), Some(rx), None),
            Err(e) => {
                warn!("{e}");
                (None, None, Some(e))
            }
        };

        Self {
            sensor,
            subscription,
            readings,
            status,
            location_error,
            compass_error,
            tolerance_deg: config.alignment_tolerance_deg,
            heading_deg: None,
            alignment: None,
        }
    }

    pub fn status(&self) -> QiblaStatus {
        self.status
    }

    /// Qibla bearing, once a location fix succeeded.
    pub fn bearing_deg(&self) -> Option<f64> {
        match self.status {
            QiblaStatus::Ready { bearing_deg } => Some(bearing_deg),
            _ => None,
        }
    }

    pub fn location_error(&self) -> Option<&QiblaError> {
        self.location_error.as_ref()
    }

    pub fn compass_error(&self) -> Option<&QiblaError> {
        self.compass_error.as_ref()
    }

    /// False when the heading subscription was refused.
    pub fn compass_supported(&self) -> bool {
        self.compass_error.is_none()
    }

    /// Whether headings are being received.
    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Last usable heading.
    pub fn heading_deg(&self) -> Option<f64> {
        self.heading_deg
    }

    /// Alignment for the last usable heading, if the bearing is known.
    pub fn alignment(&self) -> Option<AlignmentState> {
        self.alignment
    }

    /// Fold one reading into the session.
    ///
    /// Readings without a usable angle are ignored. Headings are tracked
    /// before the bearing is known but produce no alignment.
    pub fn apply_reading(&mut self, reading: &OrientationReading) -> Option<AlignmentState> {
        let heading = heading_from_reading(reading)?;
        self.heading_deg = Some(heading);
        let bearing = self.bearing_deg()?;
        let state = update_alignment_with_tolerance(bearing, heading, self.tolerance_deg);
        if self.alignment.map(|s| s.is_aligned) != Some(state.is_aligned) {
            debug!(
                "alignment {} (diff {:.2})",
                if state.is_aligned { "gained" } else { "lost" },
                state.difference_deg
            );
        }
        self.alignment = Some(state);
        Some(state)
    }

    /// Apply every queued reading, in arrival order. Returns the latest alignment.
    pub fn drain(&mut self) -> Option<AlignmentState> {
        loop {
            let next = match &self.readings {
                Some(rx) => rx.try_recv(),
                None => break,
            };
            match next {
                Ok(reading) => {
                    self.apply_reading(&reading);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    debug!("heading stream ended");
                    self.readings = None;
                    break;
                }
            }
        }
        self.alignment
    }

    /// Release the heading subscription. Further calls do nothing.
    pub fn close(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.sensor.unsubscribe(id);
            self.readings = None;
        }
    }
}

impl<S: HeadingSensor> Drop for QiblaSession<S> {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readout_digits() {
        assert_eq!(bearing_readout(118.49, Locale::English), "118°");
        assert_eq!(bearing_readout(58.5, Locale::Arabic), "٥٩°");
        assert_eq!(bearing_readout(359.7, Locale::English), "0°");
    }

    #[test]
    fn status_messages() {
        assert_eq!(
            QiblaStatus::Calculating.message(Locale::English),
            "calculating direction..."
        );
        assert_eq!(
            QiblaStatus::LocationUnavailable.message(Locale::English),
            "cannot access location; enable GPS"
        );
        assert_eq!(
            QiblaStatus::Ready { bearing_deg: 295.15 }.message(Locale::English),
            "295°"
        );
    }

    #[test]
    fn status_before_start_is_calculating() {
        assert_eq!(QiblaStatus::default(), QiblaStatus::Calculating);
    }

    #[test]
    fn default_config() {
        let c = QiblaConfig::default();
        assert_eq!(c.alignment_tolerance_deg, 3.0);
        assert!(c.location.high_accuracy);
    }
}
