//! Simplified Sun/Moon positions, lunar illumination, and the approximate
//! ascendant.
//!
//! This crate provides:
//! - Truncated-series ecliptic longitudes for the Sun and Moon
//! - Obliquity of the ecliptic (truncated IAU polynomial)
//! - Lunar illumination fraction and phase direction
//! - An approximate ascendant from time and geographic location
//!
//! Accuracy is deliberately limited: the solar series is good to ~0.01 deg,
//! the lunar series to several tenths of a degree, GMST is a linear model.
//! That is sufficient for 30 degree sign buckets and nothing finer; no
//! additional series terms belong here.
//!
//! All functions are pure. Longitudes are tropical ecliptic degrees in
//! [0, 360).

pub mod ascendant;
pub mod error;
pub mod illumination;
pub mod location;
pub mod lunar;
pub mod obliquity;
pub mod solar;
pub mod util;

pub use ascendant::ascendant_longitude_deg;
pub use error::AstroError;
pub use illumination::{MoonIllumination, PhaseDirection, moon_illumination};
pub use location::GeoLocation;
pub use lunar::moon_longitude_deg;
pub use obliquity::obliquity_of_ecliptic_deg;
pub use solar::sun_longitude_deg;
pub use util::normalize_360;
