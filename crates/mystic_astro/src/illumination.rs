//! Lunar illumination fraction from Sun/Moon ecliptic longitudes.
//!
//! The phase angle is the Moon's elongation from the Sun taken in
//! [0, 360): 0 at new moon, 180 at full moon. The illuminated fraction is
//! `(1 - cos(phase)) / 2`, expressed here as a percentage rounded to one
//! decimal place.

use crate::error::AstroError;
use crate::util::normalize_360;

/// Whether the Moon is gaining or losing illumination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseDirection {
    /// Phase angle in (0, 180): illumination increasing.
    Waxing,
    /// Phase angle 0 or in [180, 360): illumination decreasing.
    /// The boundaries (exact new and full moon) count as waning.
    Waning,
}

impl PhaseDirection {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Waxing => "Waxing",
            Self::Waning => "Waning",
        }
    }
}

/// Lunar illumination result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonIllumination {
    /// Illuminated fraction as a percentage, [0.0, 100.0], one decimal.
    pub percent: f64,
    /// Waxing or waning.
    pub direction: PhaseDirection,
}

/// Illumination percentage and phase direction from Sun and Moon tropical
/// ecliptic longitudes (degrees, any representation; reduced internally).
///
/// Fails fast on NaN or infinite input.
pub fn moon_illumination(
    sun_lon_deg: f64,
    moon_lon_deg: f64,
) -> Result<MoonIllumination, AstroError> {
    if !sun_lon_deg.is_finite() {
        return Err(AstroError::NonFinite("sun longitude"));
    }
    if !moon_lon_deg.is_finite() {
        return Err(AstroError::NonFinite("moon longitude"));
    }
    let phase_deg = normalize_360(moon_lon_deg - sun_lon_deg);
    let raw = (1.0 - phase_deg.to_radians().cos()) * 50.0;
    // Clamp guards cos() rounding at the extremes before the one-decimal round
    let percent = (raw.clamp(0.0, 100.0) * 10.0).round() / 10.0;
    let direction = if phase_deg > 0.0 && phase_deg < 180.0 {
        PhaseDirection::Waxing
    } else {
        PhaseDirection::Waning
    };
    Ok(MoonIllumination { percent, direction })
}
