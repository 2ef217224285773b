//! Great-circle initial bearing.

use crate::geo::{GeoCoordinate, KAABA};

/// Normalize an angle to [0, 360) degrees.
///
/// Tiny negative inputs whose `+ 360` rounds to exactly 360 map to 0, and
/// `-0.0` maps to `0.0`. NaN stays NaN.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    if r >= 360.0 { 0.0 } else { r + 0.0 }
}

/// Initial bearing in degrees [0, 360) along the great circle from `from`
/// to `to`, clockwise from true north.
///
/// ```text
/// Δλ = λ₂ − λ₁
/// y  = sin Δλ · cos φ₂
/// x  = cos φ₁ · sin φ₂ − sin φ₁ · cos φ₂ · cos Δλ
/// θ  = atan2(y, x)
/// ```
///
/// Coincident and antipodal points give a finite but arbitrary value. NaN
/// coordinates give NaN.
pub fn initial_bearing(from: GeoCoordinate, to: GeoCoordinate) -> f64 {
    let phi1 = from.latitude_rad();
    let phi2 = to.latitude_rad();
    let dlon = (to.longitude_deg - from.longitude_deg).to_radians();

    let y = dlon.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * dlon.cos();

    normalize_360(y.atan2(x).to_degrees())
}

/// Qibla direction from `observer`: the initial bearing toward the Kaaba.
pub fn qibla_bearing(observer: GeoCoordinate) -> f64 {
    initial_bearing(observer, KAABA)
}
