//! Error types for sign/house mapping and chart assembly.

use std::error::Error;
use std::fmt::{Display, Formatter};

use mystic_astro::AstroError;
use mystic_time::TimeError;

/// Errors from chart computations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// An input longitude was NaN or infinite.
    NonFinite(&'static str),
    /// Error from the position engine.
    Astro(AstroError),
    /// Error from civil time validation.
    Time(TimeError),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFinite(what) => write!(f, "non-finite input: {what}"),
            Self::Astro(e) => write!(f, "astro error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for ChartError {}

impl From<AstroError> for ChartError {
    fn from(e: AstroError) -> Self {
        Self::Astro(e)
    }
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
