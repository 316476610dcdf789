//! Approximate ascendant (rising ecliptic point).
//!
//! Computes the ecliptic longitude crossing the eastern horizon from local
//! sidereal time, observer latitude, and the obliquity of the ecliptic.
//! The model ignores atmospheric refraction and assumes a spherical Earth,
//! which is acceptable for 30 degree sign buckets.
//!
//! The arctangent has a 180 degree period, so the principal value is
//! branch-corrected using the signs of cos(LST) and sin(LST).

use mystic_time::{gmst_deg, local_sidereal_time_deg};

use crate::error::AstroError;
use crate::location::GeoLocation;
use crate::obliquity::obliquity_of_ecliptic_deg;
use crate::util::normalize_360;

/// Latitudes within this many degrees of a pole are rejected: tan(latitude)
/// diverges and the ascendant is numerically meaningless.
pub const POLAR_EPSILON_DEG: f64 = 1e-4;

/// Ecliptic longitude of the ascendant in degrees, [0, 360).
///
/// `longitude_deg` is east-positive and must use the same convention as the
/// GMST addition (it does: LST = GMST + east longitude).
///
/// Fails with [`AstroError::PolarLatitude`] when the latitude is within
/// [`POLAR_EPSILON_DEG`] of +/-90, and with [`AstroError::NonFinite`] on
/// NaN/infinite input. Never returns NaN or infinity.
pub fn ascendant_longitude_deg(
    jd: f64,
    location: &GeoLocation,
) -> Result<f64, AstroError> {
    if !jd.is_finite() {
        return Err(AstroError::NonFinite("julian day"));
    }
    location.validate()?;
    if 90.0 - location.latitude_deg.abs() < POLAR_EPSILON_DEG {
        return Err(AstroError::PolarLatitude {
            latitude_deg: location.latitude_deg,
        });
    }

    let lst_deg = local_sidereal_time_deg(gmst_deg(jd), location.longitude_deg);
    let lst = lst_deg.to_radians();
    let lat = location.latitude_rad();
    let eps = obliquity_of_ecliptic_deg(jd).to_radians();

    let tan_asc = -lst.cos() / (lst.sin() * eps.sin() + lat.tan() * eps.cos());
    let mut asc = tan_asc.atan().to_degrees().rem_euclid(360.0);
    // Select the eastern-horizon branch of the 180-degree-periodic arctangent
    if lst.cos() > 0.0 {
        asc += 180.0;
    } else if lst.sin() < 0.0 {
        asc += 360.0;
    }
    let asc = normalize_360(asc);
    if !asc.is_finite() {
        return Err(AstroError::NonFinite("ascendant"));
    }
    Ok(asc)
}
