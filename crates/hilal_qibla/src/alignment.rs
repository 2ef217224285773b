//! Alignment of the device heading with the Qibla bearing.

use crate::bearing::normalize_360;

/// Tolerance, in degrees, within which the device counts as facing the Qibla.
///
/// Consumer magnetometers cannot hold exact 0° alignment.
pub const ALIGNMENT_TOLERANCE_DEG: f64 = 3.0;

/// Derived compass state for one heading update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentState {
    /// Whether `difference_deg` is within the tolerance.
    pub is_aligned: bool,
    /// Smallest angle between heading and bearing, in [0, 180].
    pub difference_deg: f64,
    /// Needle rotation on screen: `bearing - heading`.
    pub needle_rotation_deg: f64,
    /// Compass face rotation on screen: `-heading`.
    pub dial_rotation_deg: f64,
}

/// Smallest angle between two directions, in [0, 180].
///
/// Symmetric in its arguments.
pub fn circular_difference(a_deg: f64, b_deg: f64) -> f64 {
    let diff = (normalize_360(a_deg) - normalize_360(b_deg)).abs();
    if diff > 180.0 { 360.0 - diff } else { diff }
}

/// Alignment state for a heading against the Qibla bearing, using
/// [`ALIGNMENT_TOLERANCE_DEG`].
pub fn update_alignment(bearing_deg: f64, heading_deg: f64) -> AlignmentState {
    update_alignment_with_tolerance(bearing_deg, heading_deg, ALIGNMENT_TOLERANCE_DEG)
}

/// Alignment state with an explicit tolerance (inclusive).
pub fn update_alignment_with_tolerance(
    bearing_deg: f64,
    heading_deg: f64,
    tolerance_deg: f64,
) -> AlignmentState {
    let difference_deg = circular_difference(bearing_deg, heading_deg);
    AlignmentState {
        is_aligned: difference_deg <= tolerance_deg,
        difference_deg,
        needle_rotation_deg: bearing_deg - heading_deg,
        dial_rotation_deg: -heading_deg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_alignment() {
        let s = update_alignment(118.0, 118.0);
        assert!(s.is_aligned);
        assert_eq!(s.difference_deg, 0.0);
        assert_eq!(s.needle_rotation_deg, 0.0);
    }

    #[test]
    fn threshold_is_inclusive() {
        assert!(update_alignment(3.0, 0.0).is_aligned);
        assert!(!update_alignment(3.0001, 0.0).is_aligned);
        assert!(update_alignment(100.0, 97.0).is_aligned);
    }

    #[test]
    fn wraps_across_north() {
        let s = update_alignment(359.0, 1.0);
        assert!((s.difference_deg - 2.0).abs() < 1e-12);
        assert!(s.is_aligned);
        let s = update_alignment(358.0, 2.0);
        assert!(!s.is_aligned);
    }

    #[test]
    fn opposite_direction() {
        let s = update_alignment(10.0, 190.0);
        assert_eq!(s.difference_deg, 180.0);
        assert!(!s.is_aligned);
    }

    #[test]
    fn symmetric() {
        let samples = [0.0, 1.5, 3.0, 58.48, 179.9, 180.0, 181.0, 270.0, 359.99];
        for &a in &samples {
            for &b in &samples {
                assert_eq!(
                    update_alignment(a, b).is_aligned,
                    update_alignment(b, a).is_aligned,
                    "{a} vs {b}"
                );
                assert_eq!(circular_difference(a, b), circular_difference(b, a));
            }
        }
    }

    #[test]
    fn rotations() {
        let s = update_alignment(58.5, 40.0);
        assert!((s.needle_rotation_deg - 18.5).abs() < 1e-12);
        assert_eq!(s.dial_rotation_deg, -40.0);
    }

    #[test]
    fn custom_tolerance() {
        assert!(update_alignment_with_tolerance(10.0, 15.0, 5.0).is_aligned);
        assert!(!update_alignment_with_tolerance(10.0, 15.0, 4.9).is_aligned);
    }
}
