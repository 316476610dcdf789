//! Equal-house placement anchored at the ascendant.
//!
//! The 360 degree circle is divided into 12 houses of 30 degrees each,
//! with house 1 starting at the ascendant's longitude. This is the
//! equal-house system; no other house system is supported.

use mystic_astro::normalize_360;

use crate::error::ChartError;

/// Equal-house number (1-12) for a body at `planet_lon_deg` given the
/// ascendant at `asc_lon_deg`, both tropical ecliptic degrees.
///
/// Fails fast on NaN/infinite input.
pub fn house_from_longitude(planet_lon_deg: f64, asc_lon_deg: f64) -> Result<u8, ChartError> {
    if !planet_lon_deg.is_finite() {
        return Err(ChartError::NonFinite("planet longitude"));
    }
    if !asc_lon_deg.is_finite() {
        return Err(ChartError::NonFinite("ascendant longitude"));
    }
    let diff = normalize_360(planet_lon_deg - asc_lon_deg);
    // diff < 360 always, so the index is at most 11
    Ok((diff / 30.0).floor() as u8 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascendant_itself_is_house_one() {
        assert_eq!(house_from_longitude(123.4, 123.4).unwrap(), 1);
    }

    #[test]
    fn tiny_negative_offset_is_house_one() {
        // planet - asc = -1e-16: rem_euclid rounds to 360.0, which must not
        // overflow into a thirteenth house
        assert_eq!(house_from_longitude(-1e-16, 0.0).unwrap(), 1);
        assert_eq!(house_from_longitude(0.0, 1e-16).unwrap(), 1);
    }

    #[test]
    fn just_behind_ascendant_is_house_twelve() {
        let asc = 123.4;
        let planet = (asc - 0.001_f64).rem_euclid(360.0);
        assert_eq!(house_from_longitude(planet, asc).unwrap(), 12);
    }

    #[test]
    fn opposite_point_is_house_seven() {
        assert_eq!(house_from_longitude(303.4, 123.4).unwrap(), 7);
    }

    #[test]
    fn wrap_through_zero() {
        // Ascendant late in the circle, planet early: diff wraps
        assert_eq!(house_from_longitude(10.0, 350.0).unwrap(), 1);
        assert_eq!(house_from_longitude(25.0, 350.0).unwrap(), 2);
    }

    #[test]
    fn all_houses_reachable() {
        let asc = 45.0;
        for h in 0..12u8 {
            let planet = normalize_360(asc + h as f64 * 30.0 + 15.0);
            assert_eq!(house_from_longitude(planet, asc).unwrap(), h + 1);
        }
    }

    #[test]
    fn always_in_one_to_twelve() {
        for i in 0..720 {
            let h = house_from_longitude(i as f64 * 0.5, 77.7).unwrap();
            assert!((1..=12).contains(&h), "house out of range: {h}");
        }
    }

    #[test]
    fn nan_fails_fast() {
        assert_eq!(
            house_from_longitude(f64::NAN, 0.0),
            Err(ChartError::NonFinite("planet longitude"))
        );
        assert_eq!(
            house_from_longitude(0.0, f64::NEG_INFINITY),
            Err(ChartError::NonFinite("ascendant longitude"))
        );
    }
}
