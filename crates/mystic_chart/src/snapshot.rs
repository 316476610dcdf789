//! Full chart snapshot: the whole pipeline in one call.
//!
//! Validates the civil moment, converts to a Julian Day, computes Sun,
//! Moon, and ascendant longitudes, maps them to signs and equal houses,
//! and derives the lunar illumination. Pure and deterministic; two calls
//! with the same inputs produce identical snapshots.

use mystic_astro::{
    GeoLocation, MoonIllumination, ascendant_longitude_deg, moon_illumination,
    moon_longitude_deg, sun_longitude_deg,
};
use mystic_time::{CivilMoment, to_julian_day};

use crate::error::ChartError;
use crate::house::house_from_longitude;
use crate::sign::{ZodiacSign, sign_from_longitude};

/// Computed chart for one moment and place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSnapshot {
    /// Julian Day of the moment.
    pub jd: f64,
    /// Sun tropical ecliptic longitude, degrees [0, 360).
    pub sun_longitude_deg: f64,
    /// Moon tropical ecliptic longitude, degrees [0, 360).
    pub moon_longitude_deg: f64,
    /// Ascendant tropical ecliptic longitude, degrees [0, 360).
    pub ascendant_longitude_deg: f64,
    pub sun_sign: ZodiacSign,
    pub moon_sign: ZodiacSign,
    /// Sign on the first house cusp.
    pub ascendant_sign: ZodiacSign,
    /// Equal house (1-12) occupied by the Sun.
    pub sun_house: u8,
    /// Equal house (1-12) occupied by the Moon.
    pub moon_house: u8,
    pub illumination: MoonIllumination,
}

impl ChartSnapshot {
    /// Compute a full snapshot from a civil moment and location.
    ///
    /// The moment and location are validated first; any domain error
    /// (invalid calendar fields, polar latitude, non-finite input) is
    /// returned rather than propagated as NaN.
    pub fn compute(moment: &CivilMoment, location: &GeoLocation) -> Result<Self, ChartError> {
        moment.validate()?;
        let jd = to_julian_day(moment);

        let sun = sun_longitude_deg(jd);
        let moon = moon_longitude_deg(jd);
        let asc = ascendant_longitude_deg(jd, location)?;

        Ok(Self {
            jd,
            sun_longitude_deg: sun,
            moon_longitude_deg: moon,
            ascendant_longitude_deg: asc,
            sun_sign: sign_from_longitude(sun)?.sign,
            moon_sign: sign_from_longitude(moon)?.sign,
            ascendant_sign: sign_from_longitude(asc)?.sign,
            sun_house: house_from_longitude(sun, asc)?,
            moon_house: house_from_longitude(moon, asc)?,
            illumination: moon_illumination(sun, moon)?,
        })
    }
}
