//! Moon's ecliptic longitude from a low-precision series.
//!
//! Mean longitude plus the four dominant periodic terms (evection, variation
//! and the main elliptic terms). Typical error is several tenths of a
//! degree, sufficient only for sign-level use.
//!
//! Source: truncated ELP-style lunar theory, four largest longitude terms.

use mystic_time::days_since_j2000;

use crate::util::normalize_360;

/// Tropical ecliptic longitude of the Moon in degrees, [0, 360).
pub fn moon_longitude_deg(jd: f64) -> f64 {
    let d = days_since_j2000(jd);
    // Mean longitude, mean anomaly, mean elongation from the Sun, degrees
    let lm = (218.316 + 13.176_396 * d).rem_euclid(360.0);
    let mm = (134.963 + 13.064_993 * d).rem_euclid(360.0);
    let el = (297.850 + 12.190_749 * d).rem_euclid(360.0);

    let mm_rad = mm.to_radians();
    let el_rad = el.to_radians();
    let lon = lm
        + 6.289 * mm_rad.sin()
        + 1.274 * (2.0 * el_rad - mm_rad).sin()
        + 0.658 * (2.0 * el_rad).sin()
        + 0.213 * (2.0 * mm_rad).sin();
    normalize_360(lon)
}
