//! Sun's ecliptic longitude from a low-precision series.
//!
//! First-order truncated series (mean longitude plus two equation-of-center
//! sine terms). Errors reach ~0.01 deg, which is fine for 30 degree sign
//! buckets but not for house cusps near a boundary. Adding further series
//! terms is out of scope; callers needing better should use a real
//! ephemeris.
//!
//! Source: low-precision solar coordinates, USNO Astronomical Almanac
//! approximate formulae.

use mystic_time::days_since_j2000;

use crate::util::normalize_360;

/// Tropical ecliptic longitude of the Sun in degrees, [0, 360).
pub fn sun_longitude_deg(jd: f64) -> f64 {
    let d = days_since_j2000(jd);
    // Mean longitude and mean anomaly, degrees
    let l = (280.460 + 0.985_647_4 * d).rem_euclid(360.0);
    let g = (357.528 + 0.985_600_3 * d).rem_euclid(360.0);
    let g_rad = g.to_radians();
    let lon = l + 1.915 * g_rad.sin() + 0.020 * (2.0 * g_rad).sin();
    normalize_360(lon)
}
