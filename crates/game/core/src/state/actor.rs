//! Combatants and the gear that shapes them.

use core::fmt;

use bitflags::bitflags;
use strum::{Display, EnumIter};

use crate::action::{ActionKind, ActionSet};
use crate::ai::LogicProfile;
use crate::stats::{StatDeltas, StatLine, Stats};

/// Unique identifier of an actor across both sides of an encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(pub u32);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which roster an actor fights for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    Party,
    Enemies,
}

impl Side {
    pub const fn opposite(self) -> Self {
        match self {
            Self::Party => Self::Enemies,
            Self::Enemies => Self::Party,
        }
    }
}

/// Turn-order tier within a round. Declaration order is acting order.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum SpeedTier {
    Fast,
    #[default]
    Normal,
    Slow,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum DamageType {
    #[default]
    Blunt,
    Sharp,
    Pierce,
    Hellfire,
}

bitflags! {
    /// Passive traits granted by archetypes and gear.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Features: u8 {
        /// Fights from a distance: never locked into melee, halts momentum.
        const REACH = 1 << 0;
        /// Extra damage when attacking from outside melee.
        const CHARGE = 1 << 1;
        /// Counter-attacks a missed attacker while guarding.
        const RIPOSTE = 1 << 2;
        /// Shrugs off some pins.
        const RESIST_PIN = 1 << 3;
        /// Becomes enraged when badly wounded.
        const SAVAGERY = 1 << 4;
    }
}

impl Features {
    /// Lowercase feature names, for menus and summaries.
    pub fn names(self) -> Vec<&'static str> {
        self.iter_names()
            .map(|(name, _)| match name {
                "REACH" => "reach",
                "CHARGE" => "charge",
                "RIPOSTE" => "riposte",
                "RESIST_PIN" => "resist pin",
                _ => "savagery",
            })
            .collect()
    }
}

/// A combat role granting stats, features and special actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Archetype {
    pub name: &'static str,
    pub description: &'static str,
    pub bonus: StatDeltas,
    pub features: Features,
    pub actions: ActionSet,
}

/// Wielded arms. Only the primary slot applies its bonuses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Weapon {
    pub name: &'static str,
    pub description: &'static str,
    pub bonus: StatDeltas,
    pub damage_type: DamageType,
    pub speed: SpeedTier,
    pub features: Features,
    pub actions: ActionSet,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Armor {
    pub name: &'static str,
    pub description: &'static str,
    pub bonus: StatDeltas,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Headgear {
    pub name: &'static str,
    pub description: &'static str,
    pub bonus: StatDeltas,
    pub features: Features,
}

/// Everything derived from innate traits plus equipment.
///
/// Rebuilt whenever gear or archetype changes, never during action lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Loadout {
    speed: SpeedTier,
    damage_type: DamageType,
    features: Features,
    catalog: Vec<ActionKind>,
}

/// A combat participant. Actors outlive encounters; encounters only borrow them.
#[derive(Clone, Debug)]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    pub description: String,
    pub stats: Stats,
    /// AI profile. `None` means a human chooses for this actor.
    pub logic: Option<LogicProfile>,

    innate_speed: SpeedTier,
    innate_features: Features,
    archetype: Option<Archetype>,
    arms: [Option<Weapon>; 2],
    armor: Option<Armor>,
    headgear: Option<Headgear>,
    loadout: Loadout,
}

impl Actor {
    pub fn new(id: ActorId, name: impl Into<String>) -> Self {
        let mut actor = Self {
            id,
            name: name.into(),
            description: String::new(),
            stats: Stats::default(),
            logic: None,
            innate_speed: SpeedTier::Normal,
            innate_features: Features::empty(),
            archetype: None,
            arms: [None, None],
            armor: None,
            headgear: None,
            loadout: Loadout {
                speed: SpeedTier::Normal,
                damage_type: DamageType::Blunt,
                features: Features::empty(),
                catalog: Vec::new(),
            },
        };
        actor.rebuild();
        actor
    }

    // ========================================================================
    // Builder
    // ========================================================================

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_logic(mut self, logic: LogicProfile) -> Self {
        self.logic = Some(logic);
        self
    }

    pub fn with_stats(mut self, base: StatLine) -> Self {
        self.stats = Stats::new(base);
        self
    }

    pub fn with_speed(mut self, speed: SpeedTier) -> Self {
        self.innate_speed = speed;
        self.rebuild();
        self
    }

    pub fn with_features(mut self, features: Features) -> Self {
        self.innate_features = features;
        self.rebuild();
        self
    }

    pub fn with_archetype(mut self, archetype: Archetype) -> Self {
        self.give_archetype(archetype);
        self
    }

    pub fn with_armor(mut self, armor: Armor) -> Self {
        self.wear_armor(armor);
        self
    }

    pub fn with_headgear(mut self, headgear: Headgear) -> Self {
        self.wear_headgear(headgear);
        self
    }

    pub fn with_arms(mut self, primary: Weapon, reserve: Option<Weapon>) -> Self {
        self.equip_arms(primary);
        self.arms[1] = reserve;
        self
    }

    // ========================================================================
    // Equipment
    // ========================================================================

    /// Replaces the archetype, moving its bonuses onto base and current stats.
    pub fn give_archetype(&mut self, archetype: Archetype) {
        if let Some(old) = self.archetype.replace(archetype) {
            self.stats.unadjust(&old.bonus);
        }
        self.stats.adjust(&archetype.bonus);
        self.rebuild();
    }

    /// Wields `weapon` in the primary slot, returning what was held before.
    pub fn equip_arms(&mut self, weapon: Weapon) -> Option<Weapon> {
        let previous = self.arms[0].replace(weapon);
        if let Some(old) = previous {
            self.stats.unadjust(&old.bonus);
        }
        self.stats.adjust(&weapon.bonus);
        self.rebuild();
        previous
    }

    /// Places `weapon` in the reserve slot without wielding it.
    pub fn stow_arms(&mut self, weapon: Option<Weapon>) {
        self.arms[1] = weapon;
    }

    pub fn wear_armor(&mut self, armor: Armor) {
        if let Some(old) = self.armor.replace(armor) {
            self.stats.unadjust(&old.bonus);
        }
        self.stats.adjust(&armor.bonus);
    }

    pub fn wear_headgear(&mut self, headgear: Headgear) {
        if let Some(old) = self.headgear.replace(headgear) {
            self.stats.unadjust(&old.bonus);
        }
        self.stats.adjust(&headgear.bonus);
        self.rebuild();
    }

    /// Exchanges primary and reserve arms. Returns false when there is no
    /// reserve weapon to draw.
    pub fn swap_arms(&mut self) -> bool {
        let Some(reserve) = self.arms[1].take() else {
            return false;
        };
        let sheathed = self.equip_arms(reserve);
        self.arms[1] = sheathed;
        true
    }

    /// Rolls every current stat back to base.
    pub fn refresh(&mut self) {
        self.stats.refresh();
    }

    fn rebuild(&mut self) {
        let primary = self.arms[0];
        let mut features = self.innate_features;
        let mut archetype_actions = ActionSet::empty();
        if let Some(archetype) = &self.archetype {
            features |= archetype.features;
            archetype_actions = archetype.actions;
        }
        if let Some(weapon) = &primary {
            features |= weapon.features;
        }
        if let Some(headgear) = &self.headgear {
            features |= headgear.features;
        }
        let arms_actions = primary.map(|w| w.actions).unwrap_or_default();

        self.loadout = Loadout {
            speed: primary.map(|w| w.speed).unwrap_or(self.innate_speed),
            damage_type: primary.map(|w| w.damage_type).unwrap_or_default(),
            features,
            catalog: ActionSet::catalog(archetype_actions, arms_actions),
        };
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn is_human(&self) -> bool {
        self.logic.is_none()
    }

    pub fn speed(&self) -> SpeedTier {
        self.loadout.speed
    }

    pub fn damage_type(&self) -> DamageType {
        self.loadout.damage_type
    }

    pub fn features(&self) -> Features {
        self.loadout.features
    }

    pub fn has(&self, feature: Features) -> bool {
        self.loadout.features.contains(feature)
    }

    /// Every action this actor knows, in menu order: archetype, arms, base.
    pub fn catalog(&self) -> &[ActionKind] {
        &self.loadout.catalog
    }

    pub fn archetype(&self) -> Option<&Archetype> {
        self.archetype.as_ref()
    }

    pub fn primary_arms(&self) -> Option<&Weapon> {
        self.arms[0].as_ref()
    }

    pub fn reserve_arms(&self) -> Option<&Weapon> {
        self.arms[1].as_ref()
    }

    pub fn armor(&self) -> Option<&Armor> {
        self.armor.as_ref()
    }

    pub fn headgear(&self) -> Option<&Headgear> {
        self.headgear.as_ref()
    }

    /// What observers learn about this actor.
    pub fn observed(&self) -> &str {
        if self.description.is_empty() {
            &self.name
        } else {
            &self.description
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Stat;

    const AXE: Weapon = Weapon {
        name: "axe",
        description: "",
        bonus: StatLine::ZERO.with(Stat::Power, 3).with(Stat::Defense, -2),
        damage_type: DamageType::Sharp,
        speed: SpeedTier::Slow,
        features: Features::CHARGE,
        actions: ActionSet::SMASH,
    };

    const WHIP: Weapon = Weapon {
        name: "whip",
        description: "",
        bonus: StatLine::ZERO.with(Stat::Skill, 2),
        damage_type: DamageType::Sharp,
        speed: SpeedTier::Fast,
        features: Features::REACH,
        actions: ActionSet::STAB,
    };

    #[test]
    fn unarmed_actor_fights_blunt_at_normal_speed() {
        let actor = Actor::new(ActorId(1), "peasant");
        assert_eq!(actor.speed(), SpeedTier::Normal);
        assert_eq!(actor.damage_type(), DamageType::Blunt);
        assert_eq!(actor.stats.current, StatLine::ACTOR_DEFAULT);
        assert!(actor.catalog().contains(&ActionKind::Fight));
        assert!(actor.is_human());
    }

    #[test]
    fn arms_shift_base_and_current() {
        let actor = Actor::new(ActorId(1), "raider").with_arms(AXE, Some(WHIP));
        assert_eq!(actor.stats.base.power, 4);
        assert_eq!(actor.stats.current.defense, 8);
        assert_eq!(actor.speed(), SpeedTier::Slow);
        assert!(actor.has(Features::CHARGE));
        assert!(actor.catalog().contains(&ActionKind::Smash));
    }

    #[test]
    fn swap_moves_bonuses_and_keeps_wounds() {
        let mut actor = Actor::new(ActorId(1), "raider").with_arms(AXE, Some(WHIP));
        actor.stats.current.stamina = 5;

        assert!(actor.swap_arms());
        assert_eq!(actor.stats.current.stamina, 5);
        assert_eq!(actor.stats.base.power, 1);
        assert_eq!(actor.stats.base.skill, 12);
        assert_eq!(actor.speed(), SpeedTier::Fast);
        assert!(actor.has(Features::REACH));
        assert!(!actor.has(Features::CHARGE));
        assert!(actor.catalog().contains(&ActionKind::Stab));
        assert!(!actor.catalog().contains(&ActionKind::Smash));
        assert_eq!(actor.reserve_arms().map(|w| w.name), Some("axe"));
    }

    #[test]
    fn swap_without_reserve_does_nothing() {
        let mut actor = Actor::new(ActorId(1), "raider").with_arms(AXE, None);
        assert!(!actor.swap_arms());
        assert_eq!(actor.primary_arms().map(|w| w.name), Some("axe"));
    }

    #[test]
    fn refresh_restores_current_to_base() {
        let mut actor = Actor::new(ActorId(1), "raider").with_arms(AXE, None);
        actor.stats.current.stamina = 0;
        actor.stats.current.power += 2;
        actor.refresh();
        assert_eq!(actor.stats.current, actor.stats.base);
    }
}
