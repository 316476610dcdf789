//! Shared angle utilities.

/// Normalize an angle to [0, 360) degrees.
///
/// `rem_euclid` alone can round a tiny negative input up to exactly 360.0,
/// which would escape the half-open range; that result maps back to 0.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r == 360.0 { 0.0 } else { r }
}
