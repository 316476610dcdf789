//! Civil time and simplified sidereal time for the chart engine.
//!
//! This crate provides:
//! - `CivilMoment`, the calendar date/time input type with validation
//! - Gregorian calendar → Julian Day conversion
//! - A simplified linear Greenwich Mean Sidereal Time model
//!
//! All functions are pure and stateless. The caller supplies local calendar
//! time which is interpreted as-is; no timezone handling is performed.

pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil::CivilMoment;
pub use error::TimeError;
pub use julian::{J2000_JD, days_since_j2000, to_julian_day};
pub use sidereal::{gmst_deg, local_sidereal_time_deg};
