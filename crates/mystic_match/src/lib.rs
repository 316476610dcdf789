//! Companion matching layered atop the chart engine.
//!
//! This crate consumes the engine's outputs (signs, houses, illumination)
//! as opaque inputs to a seeded, deterministic selection from fixed spirit
//! pools. Nothing here feeds back into the position engine.
//!
//! The selection signals:
//! - Sun sign element → primary familiar pool
//! - Moon sign element → guardian pool
//! - Birth-date tone, name vibration, bioregional tone → flavor text and
//!   the whisperer pick
//!
//! Same birth details and name always produce the same picks.

pub mod matcher;
pub mod rng;
pub mod spirit;
pub mod tone;

pub use matcher::{CompanionPick, CompanionRole, MatchReport, match_companions, match_for_moment};
pub use rng::SeededRng;
pub use spirit::{ALL_SPIRITS, Spirit, spirit_pool};
pub use tone::{Bioregion, Tone, Vibration, bioregion_from_latitude, tone_from_birth, vibration_from_name};
