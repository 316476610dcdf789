//! Zodiac sign and equal-house mapping over the position engine.
//!
//! This crate provides:
//! - The 12 tropical zodiac signs and their classical elements
//! - Longitude → sign lookup and equal-house placement
//! - `ChartSnapshot`, the full pipeline (civil moment + location →
//!   longitudes, signs, houses, illumination) in one call
//!
//! All mappings operate on longitudes reduced into [0, 360); non-finite
//! input fails fast rather than propagating NaN into a lookup.

pub mod error;
pub mod house;
pub mod sign;
pub mod snapshot;

pub use error::ChartError;
pub use house::house_from_longitude;
pub use sign::{ALL_SIGNS, Element, SignInfo, ZodiacSign, sign_from_longitude};
pub use snapshot::ChartSnapshot;
