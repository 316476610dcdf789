//! Geographic location of the observer.

use crate::error::AstroError;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive.
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Create a new geographic location.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }

    /// Check that both coordinates are finite and latitude is within
    /// [-90, 90].
    pub fn validate(&self) -> Result<(), AstroError> {
        if !self.latitude_deg.is_finite() {
            return Err(AstroError::NonFinite("latitude"));
        }
        if !self.longitude_deg.is_finite() {
            return Err(AstroError::NonFinite("longitude"));
        }
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(AstroError::InvalidLocation("latitude outside [-90, 90]"));
        }
        Ok(())
    }
}
