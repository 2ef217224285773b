//! Seams for the platform's geolocation and orientation inputs.
//!
//! Location is a one-shot request with a bounded wait. Headings arrive as a
//! stream on whatever thread the platform sensor callback runs on, and are
//! delivered to subscribers over `mpsc` channels.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::{debug, info};

use crate::error::QiblaError;
use crate::geo::GeoCoordinate;
use crate::heading::OrientationReading;

/// Default wait for a position fix.
pub const DEFAULT_LOCATION_TIMEOUT: Duration = Duration::from_secs(6);

/// Options for a one-shot position request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationRequest {
    /// Give up after this long.
    pub timeout: Duration,
    /// Ask for GPS-grade accuracy rather than network location.
    pub high_accuracy: bool,
}

impl Default for LocationRequest {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_LOCATION_TIMEOUT,
            high_accuracy: true,
        }
    }
}

/// One-shot geolocation.
pub trait LocationProvider {
    /// Current position, or `QiblaError::LocationUnavailable` on denial,
    /// failure, or timeout.
    fn current_position(&self, request: &LocationRequest) -> Result<GeoCoordinate, QiblaError>;
}

/// A location known in advance (manual entry, saved city).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLocation(pub GeoCoordinate);

impl LocationProvider for FixedLocation {
    fn current_position(&self, _request: &LocationRequest) -> Result<GeoCoordinate, QiblaError> {
        if self.0.is_valid() {
            Ok(self.0)
        } else {
            Err(QiblaError::LocationUnavailable(format!(
                "invalid coordinate ({}, {})",
                self.0.latitude_deg, self.0.longitude_deg
            )))
        }
    }
}

/// Handle returned by [`HeadingSensor::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Continuous orientation stream.
pub trait HeadingSensor {
    /// Start delivering readings into `sink`.
    fn subscribe(&mut self, sink: Sender<OrientationReading>) -> Result<SubscriptionId, QiblaError>;

    /// Stop delivering readings for `id`. Unknown ids are ignored.
    fn unsubscribe(&mut self, id: SubscriptionId);
}

impl<S: HeadingSensor + ?Sized> HeadingSensor for &mut S {
    fn subscribe(&mut self, sink: Sender<OrientationReading>) -> Result<SubscriptionId, QiblaError> {
        (**self).subscribe(sink)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        (**self).unsubscribe(id)
    }
}

type Subscribers = Vec<(SubscriptionId, Sender<OrientationReading>)>;

/// Fan-out point between a platform orientation callback and its subscribers.
///
/// Clones share the same subscriber list, so the platform side can hold one
/// clone and [`push`](SensorFeed::push) readings from its own thread while a
/// session holds another.
#[derive(Debug, Clone)]
pub struct SensorFeed {
    supported: bool,
    subscribers: Arc<Mutex<Subscribers>>,
    next_id: Arc<AtomicU64>,
}

impl SensorFeed {
    /// Feed for a device with an orientation sensor.
    pub fn new() -> Self {
        Self {
            supported: true,
            subscribers: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Feed for a device without one: every subscription fails.
    pub fn unsupported() -> Self {
        Self {
            supported: false,
            ..Self::new()
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Subscribers> {
        self.subscribers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Deliver a reading to every live subscriber. Returns how many received it.
    ///
    /// Subscribers whose receiving end is gone are dropped.
    pub fn push(&self, reading: OrientationReading) -> usize {
        let mut subs = self.lock();
        subs.retain(|(id, tx)| {
            let alive = tx.send(reading).is_ok();
            if !alive {
                debug!("dropping disconnected heading subscriber {}", id.0);
            }
            alive
        });
        subs.len()
    }

    /// Number of active subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.lock().len()
    }
}

impl Default for SensorFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadingSensor for SensorFeed {
    fn subscribe(&mut self, sink: Sender<OrientationReading>) -> Result<SubscriptionId, QiblaError> {
        if !self.supported {
            return Err(QiblaError::CompassUnsupported);
        }
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock().push((id, sink));
        info!("heading subscription {} opened", id.0);
        Ok(id)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        let mut subs = self.lock();
        let before = subs.len();
        subs.retain(|(sid, _)| *sid != id);
        if subs.len() < before {
            info!("heading subscription {} closed", id.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;

    #[test]
    fn default_request() {
        let r = LocationRequest::default();
        assert_eq!(r.timeout, Duration::from_secs(6));
        assert!(r.high_accuracy);
    }

    #[test]
    fn fixed_location() {
        let loc = FixedLocation(GeoCoordinate::new(51.5, -0.1));
        assert!(loc.current_position(&LocationRequest::default()).is_ok());
        let bad = FixedLocation(GeoCoordinate::new(120.0, 0.0));
        assert!(matches!(
            bad.current_position(&LocationRequest::default()),
            Err(QiblaError::LocationUnavailable(_))
        ));
    }

    #[test]
    fn push_reaches_subscribers() {
        let mut feed = SensorFeed::new();
        let (tx, rx) = mpsc::channel();
        feed.subscribe(tx).unwrap();
        assert_eq!(feed.push(OrientationReading::from_compass(12.0)), 1);
        assert_eq!(rx.try_recv().unwrap().compass_heading, Some(12.0));
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let mut feed = SensorFeed::new();
        let (tx, rx) = mpsc::channel();
        let id = feed.subscribe(tx).unwrap();
        feed.unsubscribe(id);
        assert_eq!(feed.push(OrientationReading::from_compass(12.0)), 0);
        assert!(rx.try_recv().is_err());
        feed.unsubscribe(id);
        assert_eq!(feed.subscriber_count(), 0);
    }

    #[test]
    fn dropped_receiver_is_pruned() {
        let mut feed = SensorFeed::new();
        let (tx, rx) = mpsc::channel();
        feed.subscribe(tx).unwrap();
        drop(rx);
        assert_eq!(feed.push(OrientationReading::from_compass(1.0)), 0);
        assert_eq!(feed.subscriber_count(), 0);
    }

    #[test]
    fn unsupported_feed_rejects() {
        let mut feed = SensorFeed::unsupported();
        let (tx, _rx) = mpsc::channel();
        assert_eq!(feed.subscribe(tx), Err(QiblaError::CompassUnsupported));
    }

    #[test]
    fn clones_share_subscribers() {
        let mut feed = SensorFeed::new();
        let platform_side = feed.clone();
        let (tx, rx) = mpsc::channel();
        feed.subscribe(tx).unwrap();
        platform_side.push(OrientationReading::from_alpha(90.0, true));
        assert_eq!(rx.try_recv().unwrap().alpha, Some(90.0));
    }
}
