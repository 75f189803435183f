//! Actor statistics.
//!
//! Every stat exists twice: a base value (what the actor is built with)
//! and a current value (what combat has done to it). Equipment shifts both,
//! damage and timed buffs only touch the current value, and
//! [`Stats::refresh`] rolls current back to base between encounters.

use strum::{Display, EnumIter};

/// The seven numeric stats of an actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum Stat {
    /// Hit points before KO.
    Stamina,
    /// Accuracy; the adder of attack tests.
    Skill,
    /// Difficulty opponents must beat to hit.
    Defense,
    /// Adder of fate and summoning tests.
    Fortune,
    /// Flat damage added to attacks.
    Power,
    /// Subtracted from physical damage.
    Reduction,
    /// Subtracted from hellfire.
    Insulation,
}

/// One value per [`Stat`]. Doubles as a set of deltas for equipment and buffs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatLine {
    pub stamina: i32,
    pub skill: i32,
    pub defense: i32,
    pub fortune: i32,
    pub power: i32,
    pub reduction: i32,
    pub insulation: i32,
}

/// Deltas share the layout of a stat line.
pub type StatDeltas = StatLine;

impl StatLine {
    pub const ZERO: Self = Self {
        stamina: 0,
        skill: 0,
        defense: 0,
        fortune: 0,
        power: 0,
        reduction: 0,
        insulation: 0,
    };

    /// Baseline of an unequipped actor.
    pub const ACTOR_DEFAULT: Self = Self {
        stamina: 12,
        skill: 10,
        defense: 10,
        fortune: 10,
        power: 1,
        reduction: 0,
        insulation: 0,
    };

    /// Returns a copy with `stat` set to `value` (builder pattern).
    #[must_use]
    pub const fn with(mut self, stat: Stat, value: i32) -> Self {
        match stat {
            Stat::Stamina => self.stamina = value,
            Stat::Skill => self.skill = value,
            Stat::Defense => self.defense = value,
            Stat::Fortune => self.fortune = value,
            Stat::Power => self.power = value,
            Stat::Reduction => self.reduction = value,
            Stat::Insulation => self.insulation = value,
        }
        self
    }

    pub const fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Stamina => self.stamina,
            Stat::Skill => self.skill,
            Stat::Defense => self.defense,
            Stat::Fortune => self.fortune,
            Stat::Power => self.power,
            Stat::Reduction => self.reduction,
            Stat::Insulation => self.insulation,
        }
    }

    pub fn get_mut(&mut self, stat: Stat) -> &mut i32 {
        match stat {
            Stat::Stamina => &mut self.stamina,
            Stat::Skill => &mut self.skill,
            Stat::Defense => &mut self.defense,
            Stat::Fortune => &mut self.fortune,
            Stat::Power => &mut self.power,
            Stat::Reduction => &mut self.reduction,
            Stat::Insulation => &mut self.insulation,
        }
    }

    pub fn apply(&mut self, deltas: &StatDeltas) {
        self.stamina += deltas.stamina;
        self.skill += deltas.skill;
        self.defense += deltas.defense;
        self.fortune += deltas.fortune;
        self.power += deltas.power;
        self.reduction += deltas.reduction;
        self.insulation += deltas.insulation;
    }

    pub fn revert(&mut self, deltas: &StatDeltas) {
        self.stamina -= deltas.stamina;
        self.skill -= deltas.skill;
        self.defense -= deltas.defense;
        self.fortune -= deltas.fortune;
        self.power -= deltas.power;
        self.reduction -= deltas.reduction;
        self.insulation -= deltas.insulation;
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Base/current pairs for all seven stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub base: StatLine,
    pub current: StatLine,
}

impl Stats {
    pub const fn new(base: StatLine) -> Self {
        Self {
            base,
            current: base,
        }
    }

    /// Restores every current value to its base.
    pub fn refresh(&mut self) {
        self.current = self.base;
    }

    /// Shifts base and current together (equipment changes).
    pub fn adjust(&mut self, deltas: &StatDeltas) {
        self.base.apply(deltas);
        self.current.apply(deltas);
    }

    /// Undoes a previous [`Stats::adjust`].
    pub fn unadjust(&mut self, deltas: &StatDeltas) {
        self.base.revert(deltas);
        self.current.revert(deltas);
    }

    /// Low stamina: at or below half of base (never below 1).
    pub fn is_low_stamina(&self) -> bool {
        self.current.stamina <= (self.base.stamina / 2).max(1)
    }

    /// Current stamina as a fraction of base, for target preference.
    pub fn stamina_fraction(&self) -> f32 {
        self.current.stamina as f32 / self.base.stamina.max(1) as f32
    }

    /// Restores stamina, capped at base. Returns the amount actually gained.
    pub fn restore_stamina(&mut self, amount: i32) -> i32 {
        let before = self.current.stamina;
        self.current.stamina = (before + amount).min(self.base.stamina.max(before));
        self.current.stamina - before
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new(StatLine::ACTOR_DEFAULT)
    }
}
