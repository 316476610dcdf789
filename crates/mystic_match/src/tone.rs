//! Flavor signals derived from birth details, name, and latitude.
//!
//! These feed the whisperer reason text and the report; none of them
//! affects the position engine.

/// Birth-date tone, from (day + month) mod 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Fiery,
    Airy,
    Earthy,
    Watery,
}

impl Tone {
    pub fn name(&self) -> &'static str {
        match self {
            Tone::Fiery => "fiery",
            Tone::Airy => "airy",
            Tone::Earthy => "earthy",
            Tone::Watery => "watery",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Phonetic vibration, from the vowel count of the name mod 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vibration {
    Angelic,
    Animal,
    Spirit,
    Elemental,
}

impl Vibration {
    pub fn name(&self) -> &'static str {
        match self {
            Vibration::Angelic => "angelic",
            Vibration::Animal => "animal",
            Vibration::Spirit => "spirit",
            Vibration::Elemental => "elemental",
        }
    }
}

impl std::fmt::Display for Vibration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Latitude band. Longitude plays no part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bioregion {
    Tropical,
    Temperate,
    Boreal,
}

impl Bioregion {
    pub fn name(&self) -> &'static str {
        match self {
            Bioregion::Tropical => "tropical",
            Bioregion::Temperate => "temperate",
            Bioregion::Boreal => "boreal",
        }
    }
}

impl std::fmt::Display for Bioregion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Tone from the birth day-of-month and month.
pub fn tone_from_birth(day: u32, month: u32) -> Tone {
    match (day + month) % 4 {
        0 => Tone::Fiery,
        1 => Tone::Airy,
        2 => Tone::Earthy,
        _ => Tone::Watery,
    }
}

/// Vibration from the count of ASCII vowels in the lowercased name.
pub fn vibration_from_name(name: &str) -> Vibration {
    let vowels = name
        .to_lowercase()
        .chars()
        .filter(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
        .count();
    match vowels % 4 {
        0 => Vibration::Angelic,
        1 => Vibration::Animal,
        2 => Vibration::Spirit,
        _ => Vibration::Elemental,
    }
}

/// Bioregion from the absolute latitude: below 15 tropical, below 45
/// temperate, otherwise boreal.
pub fn bioregion_from_latitude(latitude_deg: f64) -> Bioregion {
    let lat_abs = latitude_deg.abs();
    if lat_abs < 15.0 {
        Bioregion::Tropical
    } else if lat_abs < 45.0 {
        Bioregion::Temperate
    } else {
        Bioregion::Boreal
    }
}
