//! Body armor and headgear.

use encounter_core::{Armor, Features, Headgear, Stat, StatLine};

// ============================================================================
// Armor
// ============================================================================

pub const BARE: Armor = Armor {
    name: "bare",
    description: "defense +2.",
    bonus: StatLine::ZERO.with(Stat::Defense, 2),
};

pub const CAPE: Armor = Armor {
    name: "cape",
    description: "fortune +1, insulation +1.",
    bonus: StatLine::ZERO.with(Stat::Fortune, 1).with(Stat::Insulation, 1),
};

pub const LIGHT_MAIL: Armor = Armor {
    name: "light mail",
    description: "damage reduction +1.",
    bonus: StatLine::ZERO.with(Stat::Reduction, 1),
};

pub const HEAVY_MAIL: Armor = Armor {
    name: "heavy mail",
    description: "damage reduction +2, insulation -2.",
    bonus: StatLine::ZERO
        .with(Stat::Reduction, 2)
        .with(Stat::Insulation, -2),
};

pub const SUIT_OF_PLATE: Armor = Armor {
    name: "suit of plate",
    description: "damage reduction +3, skill -2, insulation -2.",
    bonus: StatLine::ZERO
        .with(Stat::Reduction, 3)
        .with(Stat::Skill, -2)
        .with(Stat::Insulation, -2),
};

pub const ARMORS: [Armor; 5] = [BARE, CAPE, LIGHT_MAIL, HEAVY_MAIL, SUIT_OF_PLATE];

// ============================================================================
// Headgear
// ============================================================================

pub const WINGED_HELM: Headgear = Headgear {
    name: "winged helm",
    description: "defense +1, insulation -1.",
    bonus: StatLine::ZERO.with(Stat::Defense, 1).with(Stat::Insulation, -1),
    features: Features::empty(),
};

pub const STAG_HELM: Headgear = Headgear {
    name: "stag helm",
    description: "damage reduction +1, skill -2.",
    bonus: StatLine::ZERO.with(Stat::Reduction, 1).with(Stat::Skill, -2),
    features: Features::empty(),
};

pub const MOON_CIRCLET: Headgear = Headgear {
    name: "moon circlet",
    description: "fortune +1, defense -1.",
    bonus: StatLine::ZERO.with(Stat::Fortune, 1).with(Stat::Defense, -1),
    features: Features::empty(),
};

pub const BLACK_HOOD: Headgear = Headgear {
    name: "black hood",
    description: "skill +1, fortune -1.",
    bonus: StatLine::ZERO.with(Stat::Skill, 1).with(Stat::Fortune, -1),
    features: Features::empty(),
};

pub const FLAMING_TOPKNOT: Headgear = Headgear {
    name: "flaming topknot",
    description: "resist pinning, defense -1.",
    bonus: StatLine::ZERO.with(Stat::Defense, -1),
    features: Features::RESIST_PIN,
};

pub const HEADGEARS: [Headgear; 5] = [
    WINGED_HELM,
    STAG_HELM,
    MOON_CIRCLET,
    BLACK_HOOD,
    FLAMING_TOPKNOT,
];
