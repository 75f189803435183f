//! Arms. Only the primary weapon's bonuses, speed, features, damage type
//! and actions apply; the reserve waits for a swap.

use encounter_core::{ActionSet, DamageType, Features, SpeedTier, Stat, StatLine, Weapon};

pub const SHIELD_AND_SWORD: Weapon = Weapon {
    name: "shield and sword",
    description: "slashing, skill +1, defense +2, stab, resist pinning.",
    bonus: StatLine::ZERO.with(Stat::Skill, 1).with(Stat::Defense, 2),
    damage_type: DamageType::Sharp,
    speed: SpeedTier::Normal,
    features: Features::RESIST_PIN,
    actions: ActionSet::STAB,
};

pub const SHIELD_AND_CLUB: Weapon = Weapon {
    name: "shield and club",
    description: "blunt, power +1, defense +2, smash, resist pinning.",
    bonus: StatLine::ZERO.with(Stat::Power, 1).with(Stat::Defense, 2),
    damage_type: DamageType::Blunt,
    speed: SpeedTier::Normal,
    features: Features::RESIST_PIN,
    actions: ActionSet::SMASH,
};

pub const BEARDED_AXE: Weapon = Weapon {
    name: "bearded axe",
    description: "slashing, power +3, defense -2, smash, charge, slow.",
    bonus: StatLine::ZERO.with(Stat::Power, 3).with(Stat::Defense, -2),
    damage_type: DamageType::Sharp,
    speed: SpeedTier::Slow,
    features: Features::CHARGE,
    actions: ActionSet::SMASH,
};

pub const SHIELD_AND_SPEAR: Weapon = Weapon {
    name: "shield and spear",
    description: "piercing, defense +2, charge, reach, resist pinning.",
    bonus: StatLine::ZERO.with(Stat::Defense, 2),
    damage_type: DamageType::Pierce,
    speed: SpeedTier::Normal,
    features: Features::RESIST_PIN
        .union(Features::REACH)
        .union(Features::CHARGE),
    actions: ActionSet::empty(),
};

pub const DAGGER_AND_WHIP: Weapon = Weapon {
    name: "dagger and whip",
    description: "slashing, skill +2, stab, reach, fast.",
    bonus: StatLine::ZERO.with(Stat::Skill, 2),
    damage_type: DamageType::Sharp,
    speed: SpeedTier::Fast,
    features: Features::REACH,
    actions: ActionSet::STAB,
};

pub const PAIRED_SWORDS: Weapon = Weapon {
    name: "paired swords",
    description: "slashing, skill +1, power +1, stab, fast.",
    bonus: StatLine::ZERO.with(Stat::Skill, 1).with(Stat::Power, 1),
    damage_type: DamageType::Sharp,
    speed: SpeedTier::Fast,
    features: Features::empty(),
    actions: ActionSet::STAB,
};

pub const POLEARM: Weapon = Weapon {
    name: "polearm",
    description: "piercing, power +2, smash, charge, reach, slow.",
    bonus: StatLine::ZERO.with(Stat::Power, 2),
    damage_type: DamageType::Pierce,
    speed: SpeedTier::Slow,
    features: Features::CHARGE.union(Features::REACH),
    actions: ActionSet::SMASH,
};

pub const BASTARD_SWORD: Weapon = Weapon {
    name: "bastard sword",
    description: "slashing, power +2, stab.",
    bonus: StatLine::ZERO.with(Stat::Power, 2),
    damage_type: DamageType::Sharp,
    speed: SpeedTier::Normal,
    features: Features::empty(),
    actions: ActionSet::STAB,
};

pub const ALL: [Weapon; 8] = [
    SHIELD_AND_SWORD,
    SHIELD_AND_CLUB,
    BEARDED_AXE,
    SHIELD_AND_SPEAR,
    DAGGER_AND_WHIP,
    PAIRED_SWORDS,
    POLEARM,
    BASTARD_SWORD,
];

pub fn by_name(name: &str) -> Option<Weapon> {
    ALL.into_iter().find(|w| w.name.eq_ignore_ascii_case(name))
}
