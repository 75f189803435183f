//! Timed stat modifiers.
//!
//! A registry holds at most one entry per actor. Reapplying a buff replaces
//! the previous entry; the engine reverts the old deltas first so buffs
//! refresh rather than stack.

use std::collections::BTreeMap;

use strum::Display;

use super::{ActorId, SpeedTier};
use crate::stats::StatDeltas;

/// The two independently tracked buff registries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuffKind {
    /// Reduction and power (stone skin).
    #[strum(serialize = "stone skin")]
    Ward,
    /// Power and speed (devil's dust).
    #[strum(serialize = "devil's dust")]
    Frenzy,
}

/// One timed modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Buff {
    /// Upkeeps left before the buff expires.
    pub duration: u32,
    pub deltas: StatDeltas,
    /// Speed imposed while the buff lasts.
    pub speed: Option<SpeedTier>,
}

impl Buff {
    pub fn new(duration: u32, deltas: StatDeltas) -> Self {
        Self {
            duration: duration.max(1),
            deltas,
            speed: None,
        }
    }

    pub fn with_speed(mut self, speed: SpeedTier) -> Self {
        self.speed = Some(speed);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuffRegistry {
    entries: BTreeMap<ActorId, Buff>,
}

impl BuffRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, actor: ActorId) -> Option<&Buff> {
        self.entries.get(&actor)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stores `buff`, returning the entry it replaces.
    pub fn insert(&mut self, actor: ActorId, buff: Buff) -> Option<Buff> {
        self.entries.insert(actor, buff)
    }

    pub fn remove(&mut self, actor: ActorId) -> Option<Buff> {
        self.entries.remove(&actor)
    }

    /// Counts every entry down by one and removes those that reach zero.
    ///
    /// Returns the expired entries; reverting their deltas is the caller's job.
    pub fn tick(&mut self) -> Vec<(ActorId, Buff)> {
        let mut expired = Vec::new();
        self.entries.retain(|&actor, buff| {
            buff.duration = buff.duration.saturating_sub(1);
            if buff.duration == 0 {
                expired.push((actor, *buff));
                false
            } else {
                true
            }
        });
        expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{Stat, StatLine};

    #[test]
    fn entries_expire_after_their_duration() {
        let mut registry = BuffRegistry::new();
        let deltas = StatLine::ZERO.with(Stat::Reduction, 3);
        registry.insert(ActorId(1), Buff::new(2, deltas));
        registry.insert(ActorId(2), Buff::new(1, deltas));

        let expired = registry.tick();
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].0, ActorId(2));
        assert_eq!(registry.get(ActorId(1)).map(|b| b.duration), Some(1));

        let expired = registry.tick();
        assert_eq!(expired[0].0, ActorId(1));
        assert!(registry.is_empty());
    }

    #[test]
    fn insert_replaces_previous_entry() {
        let mut registry = BuffRegistry::new();
        let first = Buff::new(1, StatLine::ZERO.with(Stat::Power, 1));
        let second = Buff::new(4, StatLine::ZERO.with(Stat::Power, 2));
        assert_eq!(registry.insert(ActorId(1), first), None);
        assert_eq!(registry.insert(ActorId(1), second), Some(first));
        assert_eq!(registry.len(), 1);
    }
}
