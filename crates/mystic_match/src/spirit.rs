//! Fixed spirit pools, three per element.

use mystic_chart::Element;

/// A spirit companion candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spirit {
    pub name: &'static str,
    pub glyph: &'static str,
    pub element: Element,
}

impl std::fmt::Display for Spirit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.glyph)
    }
}

const fn spirit(name: &'static str, glyph: &'static str, element: Element) -> Spirit {
    Spirit { name, glyph, element }
}

pub const FIRE_SPIRITS: [Spirit; 3] = [
    spirit("Phoenix", "\u{1F525}", Element::Fire),
    spirit("Dragon", "\u{1F525}", Element::Fire),
    spirit("Salamander", "\u{1F525}", Element::Fire),
];

pub const EARTH_SPIRITS: [Spirit; 3] = [
    spirit("Wolf", "\u{1F43A}", Element::Earth),
    spirit("Stag", "\u{1F98C}", Element::Earth),
    spirit("Tortoise", "\u{1F422}", Element::Earth),
];

pub const AIR_SPIRITS: [Spirit; 3] = [
    spirit("Raven", "\u{1FAB6}", Element::Air),
    spirit("Hawk", "\u{1F985}", Element::Air),
    spirit("Sphinx", "\u{1F981}\u{1FAB6}", Element::Air),
];

pub const WATER_SPIRITS: [Spirit; 3] = [
    spirit("Otter", "\u{1F9A6}", Element::Water),
    spirit("Koi", "\u{1F41F}", Element::Water),
    spirit("Selkie", "\u{1F9DC}\u{200D}\u{2640}\u{FE0F}", Element::Water),
];

/// All twelve spirits, grouped fire, earth, air, water.
pub const ALL_SPIRITS: [Spirit; 12] = [
    FIRE_SPIRITS[0],
    FIRE_SPIRITS[1],
    FIRE_SPIRITS[2],
    EARTH_SPIRITS[0],
    EARTH_SPIRITS[1],
    EARTH_SPIRITS[2],
    AIR_SPIRITS[0],
    AIR_SPIRITS[1],
    AIR_SPIRITS[2],
    WATER_SPIRITS[0],
    WATER_SPIRITS[1],
    WATER_SPIRITS[2],
];

/// The three spirits of an element.
pub fn spirit_pool(element: Element) -> &'static [Spirit; 3] {
    match element {
        Element::Fire => &FIRE_SPIRITS,
        Element::Earth => &EARTH_SPIRITS,
        Element::Air => &AIR_SPIRITS,
        Element::Water => &WATER_SPIRITS,
    }
}
