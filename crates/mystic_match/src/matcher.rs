//! Companion selection from the chart snapshot and flavor signals.

use mystic_astro::GeoLocation;
use mystic_chart::{ChartError, ChartSnapshot, ZodiacSign};
use mystic_time::CivilMoment;

use crate::rng::SeededRng;
use crate::spirit::{ALL_SPIRITS, Spirit, spirit_pool};
use crate::tone::{
    Bioregion, Tone, Vibration, bioregion_from_latitude, tone_from_birth, vibration_from_name,
};

/// Role a picked spirit plays for the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompanionRole {
    PrimaryFamiliar,
    Guardian,
    Whisperer,
}

impl CompanionRole {
    pub fn name(&self) -> &'static str {
        match self {
            CompanionRole::PrimaryFamiliar => "Primary Familiar",
            CompanionRole::Guardian => "Guardian",
            CompanionRole::Whisperer => "Whisperer",
        }
    }
}

impl std::fmt::Display for CompanionRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One matched companion with the reason it was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanionPick {
    pub role: CompanionRole,
    pub spirit: Spirit,
    pub reason: String,
}

/// Full matching result for one subject.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchReport {
    pub snapshot: ChartSnapshot,
    pub tone: Tone,
    pub vibration: Vibration,
    pub bioregion: Bioregion,
    pub picks: [CompanionPick; 3],
}

/// RNG seed from birth details: day + month + year + hour + minute.
pub fn seed_from_birth(moment: &CivilMoment) -> u64 {
    (moment.day as i64
        + moment.month as i64
        + moment.year as i64
        + moment.hour as i64
        + moment.minute as i64) as u64
}

/// Pick three companions: a primary familiar from the Sun sign's element
/// pool, a guardian from the Moon sign's element pool, and a whisperer
/// from the union of all pools. Deterministic for a given rng state.
pub fn match_companions(
    sun_sign: ZodiacSign,
    moon_sign: ZodiacSign,
    vibration: Vibration,
    bioregion: Bioregion,
    rng: &mut SeededRng,
) -> [CompanionPick; 3] {
    let sun_element = sun_sign.element();
    let moon_element = moon_sign.element();

    let primary = *rng.pick(spirit_pool(sun_element));
    let guardian = *rng.pick(spirit_pool(moon_element));
    let whisperer = *rng.pick(&ALL_SPIRITS);

    [
        CompanionPick {
            role: CompanionRole::PrimaryFamiliar,
            spirit: primary,
            reason: format!("Born under {} ({})", sun_sign.name(), sun_element.name()),
        },
        CompanionPick {
            role: CompanionRole::Guardian,
            spirit: guardian,
            reason: format!("Moon in {} ({})", moon_sign.name(), moon_element.name()),
        },
        CompanionPick {
            role: CompanionRole::Whisperer,
            spirit: whisperer,
            reason: format!("Phonetic vibe: {vibration}, bioregion: {bioregion}"),
        },
    ]
}

/// Compute the chart snapshot for a birth moment and run the full match.
pub fn match_for_moment(
    name: &str,
    moment: &CivilMoment,
    location: &GeoLocation,
) -> Result<MatchReport, ChartError> {
    let snapshot = ChartSnapshot::compute(moment, location)?;
    let tone = tone_from_birth(moment.day, moment.month);
    let vibration = vibration_from_name(name);
    let bioregion = bioregion_from_latitude(location.latitude_deg);
    let mut rng = SeededRng::new(seed_from_birth(moment));
    let picks = match_companions(
        snapshot.sun_sign,
        snapshot.moon_sign,
        vibration,
        bioregion,
        &mut rng,
    );
    Ok(MatchReport {
        snapshot,
        tone,
        vibration,
        bioregion,
        picks,
    })
}
