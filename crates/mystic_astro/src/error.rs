//! Error types for positional calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Domain errors from positional calculations.
///
/// All functions in this crate are total over their documented domain and
/// fail fast outside it; none ever returns NaN or infinity.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AstroError {
    /// An input angle or coordinate was NaN or infinite.
    NonFinite(&'static str),
    /// Latitude too close to a pole; the ascendant formula diverges.
    PolarLatitude { latitude_deg: f64 },
    /// Invalid geographic location parameter.
    InvalidLocation(&'static str),
}

impl Display for AstroError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFinite(what) => write!(f, "non-finite input: {what}"),
            Self::PolarLatitude { latitude_deg } => {
                write!(f, "latitude {latitude_deg} deg too close to a pole")
            }
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
        }
    }
}

impl Error for AstroError {}
