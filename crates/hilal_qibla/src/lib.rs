//! Qibla direction and compass alignment.
//!
//! This crate provides:
//! - Great-circle initial bearing from an observer to the Kaaba
//! - Heading derivation from device orientation readings
//! - Alignment against the bearing within a fixed angular tolerance
//! - Location and heading-sensor seams with a session that owns its
//!   subscription

pub mod alignment;
pub mod bearing;
pub mod error;
pub mod geo;
pub mod heading;
pub mod sensor;
pub mod session;

pub use alignment::{
    ALIGNMENT_TOLERANCE_DEG, AlignmentState, circular_difference, update_alignment,
    update_alignment_with_tolerance,
};
pub use bearing::{initial_bearing, normalize_360, qibla_bearing};
pub use error::QiblaError;
pub use geo::{GeoCoordinate, KAABA};
pub use heading::{OrientationReading, heading_from_reading};
pub use sensor::{
    DEFAULT_LOCATION_TIMEOUT, FixedLocation, HeadingSensor, LocationProvider, LocationRequest,
    SensorFeed, SubscriptionId,
};
pub use session::{QiblaConfig, QiblaSession, QiblaStatus, bearing_readout};
