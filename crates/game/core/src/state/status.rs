//! Per-encounter status of each actor.
//!
//! Flags live in a fixed struct so that reset passes are exhaustive: the
//! conditions cleared by each pass are listed once in [`Condition`].

use strum::{Display, EnumIter};

use super::SpeedTier;

/// Conditions that come and go during combat and are narrated when they do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum Condition {
    Guard,
    Block,
    Hide,
    Vulnerable,
    Daze,
    Blind,
    Pin,
    Disable,
}

impl Condition {
    /// Cleared when an actor becomes active, before it acts.
    pub const SOFT: [Self; 4] = [Self::Guard, Self::Block, Self::Hide, Self::Vulnerable];

    /// Cleared after an actor has acted.
    pub const HARD: [Self; 4] = [Self::Daze, Self::Disable, Self::Pin, Self::Blind];

    /// Narration suffix when the condition is imposed.
    pub const fn caused(self) -> &'static str {
        match self {
            Self::Guard => "raises their guard",
            Self::Block => "stands ready to intercept attackers",
            Self::Hide => "slips out of sight",
            Self::Vulnerable => "is vulnerable",
            Self::Daze => "is dazed",
            Self::Blind => "is blinded",
            Self::Pin => "is pinned",
            Self::Disable => "is disabled",
        }
    }

    /// Narration suffix when the condition ends.
    pub const fn cleared(self) -> &'static str {
        match self {
            Self::Guard => "is no longer guarding",
            Self::Block => "is no longer blocking",
            Self::Hide => "is no longer hidden",
            Self::Vulnerable => "is no longer vulnerable",
            Self::Daze => "is no longer dazed",
            Self::Blind => "is no longer blinded",
            Self::Pin => "is no longer pinned",
            Self::Disable => "is no longer disabled",
        }
    }
}

/// Status record of one actor for the duration of one encounter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorStatus {
    pub party: bool,
    pub active: bool,
    pub done: bool,
    /// Knocked out. Terminal for the encounter.
    pub ko: bool,
    pub melee: bool,
    pub momentum: bool,
    pub guard: bool,
    pub block: bool,
    pub hide: bool,
    pub speed: SpeedTier,
    pub vulnerable: bool,
    pub daze: bool,
    pub blind: bool,
    pub pin: bool,
    pub disable: bool,
    pub enraged: bool,
}

impl ActorStatus {
    pub fn new(party: bool, speed: SpeedTier) -> Self {
        Self {
            party,
            speed,
            ..Self::default()
        }
    }

    pub const fn has(&self, condition: Condition) -> bool {
        match condition {
            Condition::Guard => self.guard,
            Condition::Block => self.block,
            Condition::Hide => self.hide,
            Condition::Vulnerable => self.vulnerable,
            Condition::Daze => self.daze,
            Condition::Blind => self.blind,
            Condition::Pin => self.pin,
            Condition::Disable => self.disable,
        }
    }

    /// Sets a condition, returning true if the flag actually changed.
    pub fn set(&mut self, condition: Condition, value: bool) -> bool {
        let flag = match condition {
            Condition::Guard => &mut self.guard,
            Condition::Block => &mut self.block,
            Condition::Hide => &mut self.hide,
            Condition::Vulnerable => &mut self.vulnerable,
            Condition::Daze => &mut self.daze,
            Condition::Blind => &mut self.blind,
            Condition::Pin => &mut self.pin,
            Condition::Disable => &mut self.disable,
        };
        let changed = *flag != value;
        *flag = value;
        changed
    }

    /// Dazed or vulnerable: easy pickings for opportunists.
    pub const fn is_soft(&self) -> bool {
        self.daze || self.vulnerable
    }

    /// Knocks the actor out. KO implies out of melee.
    pub fn knock_out(&mut self) {
        self.ko = true;
        self.melee = false;
        self.active = false;
    }

    /// Bracketed flags for turn headers and target menus, e.g. `(melee)(daze)`.
    pub fn summary(&self) -> String {
        let flags = [
            ("ko", self.ko),
            ("melee", self.melee),
            ("momentum", self.momentum),
            ("guard", self.guard),
            ("block", self.block),
            ("hide", self.hide),
            ("vulnerable", self.vulnerable),
            ("daze", self.daze),
            ("blind", self.blind),
            ("pin", self.pin),
            ("disable", self.disable),
            ("enraged", self.enraged),
        ];
        flags
            .iter()
            .filter(|(_, on)| *on)
            .map(|(name, _)| format!("({name})"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn set_reports_changes_only() {
        let mut status = ActorStatus::default();
        for condition in Condition::iter() {
            assert!(status.set(condition, true));
            assert!(!status.set(condition, true));
            assert!(status.has(condition));
            assert!(status.set(condition, false));
            assert!(!status.has(condition));
        }
    }

    #[test]
    fn reset_passes_cover_every_condition_once() {
        let seen: std::collections::HashSet<Condition> = Condition::SOFT
            .iter()
            .chain(Condition::HARD.iter())
            .copied()
            .collect();
        assert_eq!(seen.len(), Condition::SOFT.len() + Condition::HARD.len());
        assert_eq!(seen.len(), Condition::iter().count());
    }

    #[test]
    fn daze_or_vulnerable_is_soft() {
        let mut status = ActorStatus::default();
        assert!(!status.is_soft());
        status.set(Condition::Pin, true);
        assert!(!status.is_soft());
        status.set(Condition::Daze, true);
        assert!(status.is_soft());
        status.set(Condition::Daze, false);
        status.set(Condition::Vulnerable, true);
        assert!(status.is_soft());
    }

    #[test]
    fn knock_out_leaves_melee() {
        let mut status = ActorStatus::new(true, SpeedTier::Fast);
        status.melee = true;
        status.knock_out();
        assert!(status.ko);
        assert!(!status.melee);
        assert_eq!(status.summary(), "(ko)");
    }
}
