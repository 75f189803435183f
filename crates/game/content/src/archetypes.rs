//! Combat roles. Each grants base-stat bonuses, features and special actions.

use encounter_core::{ActionSet, Archetype, Features, Stat, StatLine};

pub const GENDARME: Archetype = Archetype {
    name: "gendarme",
    description: "stamina +6, skill +4, defense +4, riposte.",
    bonus: StatLine::ZERO
        .with(Stat::Stamina, 6)
        .with(Stat::Skill, 4)
        .with(Stat::Defense, 4),
    features: Features::RIPOSTE,
    actions: ActionSet::empty(),
};

pub const FURIOSO: Archetype = Archetype {
    name: "furioso",
    description: "stamina +12, skill +2, defense +2, hack and slash, savagery.",
    bonus: StatLine::ZERO
        .with(Stat::Stamina, 12)
        .with(Stat::Skill, 2)
        .with(Stat::Defense, 2),
    features: Features::SAVAGERY,
    actions: ActionSet::HACK_AND_SLASH,
};

pub const HEATHEN: Archetype = Archetype {
    name: "heathen",
    description: "stamina +3, skill +4, defense +4, prowl, dirty trick.",
    bonus: StatLine::ZERO
        .with(Stat::Stamina, 3)
        .with(Stat::Skill, 4)
        .with(Stat::Defense, 4),
    features: Features::empty(),
    actions: ActionSet::PROWL.union(ActionSet::DIRTY_TRICK),
};

pub const DIABOLIST: Archetype = Archetype {
    name: "diabolist",
    description: "fortune +3, diablerie.",
    bonus: StatLine::ZERO.with(Stat::Fortune, 3),
    features: Features::empty(),
    actions: ActionSet::DIABLERIE,
};

pub const HERALD: Archetype = Archetype {
    name: "herald",
    description: "stamina +3, skill +2, defense +2, fortune +1, rally, decisive order, deliverance.",
    bonus: StatLine::ZERO
        .with(Stat::Stamina, 3)
        .with(Stat::Skill, 2)
        .with(Stat::Defense, 2)
        .with(Stat::Fortune, 1),
    features: Features::empty(),
    actions: ActionSet::RALLY
        .union(ActionSet::DECISIVE_ORDER)
        .union(ActionSet::DELIVERANCE),
};

/// Every archetype, in menu order.
pub const ALL: [Archetype; 5] = [GENDARME, FURIOSO, HEATHEN, DIABOLIST, HERALD];

pub fn by_name(name: &str) -> Option<Archetype> {
    ALL.into_iter().find(|a| a.name.eq_ignore_ascii_case(name))
}
