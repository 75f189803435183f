//! Action kind enumeration - every action an actor can take on its turn.

use bitflags::bitflags;
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

/// Types of actions that can be performed.
///
/// Declaration order is the canonical order used to list an action set.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum ActionKind {
    // ========================================================================
    // Base actions
    // ========================================================================
    /// Melee attack.
    Fight,
    /// Knock the target off balance without damage.
    Trip,
    /// Ranged attack that pins.
    Skirmish,
    Guard,
    Block,
    Retreat,
    Aid,
    Swap,
    #[strum(serialize = "use item")]
    UseItem,
    Observe,

    // ========================================================================
    // Arms actions
    // ========================================================================
    /// Precise strike that ignores reduction.
    Stab,
    /// Heavy strike that dazes.
    Smash,

    // ========================================================================
    // Archetype actions
    // ========================================================================
    #[strum(serialize = "hack and slash")]
    HackAndSlash,
    Prowl,
    #[strum(serialize = "dirty trick")]
    DirtyTrick,
    Diablerie,
    Rally,
    #[strum(serialize = "decisive order")]
    DecisiveOrder,
    Deliverance,
}

impl ActionKind {
    pub const fn flag(self) -> ActionSet {
        match self {
            Self::Fight => ActionSet::FIGHT,
            Self::Trip => ActionSet::TRIP,
            Self::Skirmish => ActionSet::SKIRMISH,
            Self::Guard => ActionSet::GUARD,
            Self::Block => ActionSet::BLOCK,
            Self::Retreat => ActionSet::RETREAT,
            Self::Aid => ActionSet::AID,
            Self::Swap => ActionSet::SWAP,
            Self::UseItem => ActionSet::USE_ITEM,
            Self::Observe => ActionSet::OBSERVE,
            Self::Stab => ActionSet::STAB,
            Self::Smash => ActionSet::SMASH,
            Self::HackAndSlash => ActionSet::HACK_AND_SLASH,
            Self::Prowl => ActionSet::PROWL,
            Self::DirtyTrick => ActionSet::DIRTY_TRICK,
            Self::Diablerie => ActionSet::DIABLERIE,
            Self::Rally => ActionSet::RALLY,
            Self::DecisiveOrder => ActionSet::DECISIVE_ORDER,
            Self::Deliverance => ActionSet::DELIVERANCE,
        }
    }

    /// One-line menu description.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Fight => "attack an opponent in melee.",
            Self::Trip => "look for an opening to daze an opponent.",
            Self::Skirmish => "attack from a distance and pin the target.",
            Self::Guard => "raise your guard until your next turn.",
            Self::Block => "guard and intercept attackers.",
            Self::Retreat => "break away from melee.",
            Self::Aid => "steady an ally or lend them momentum.",
            Self::Swap => "change to your secondary arms.",
            Self::UseItem => "use an item from the party inventory.",
            Self::Observe => "study the opposition.",
            Self::Stab => "strike weak points, ignoring armor.",
            Self::Smash => "wind up a heavy, dazing blow.",
            Self::HackAndSlash => "a reckless flurry of blows.",
            Self::Prowl => "strike without committing to melee.",
            Self::DirtyTrick => "a low blow that slips out of melee.",
            Self::Diablerie => "call a demon from hell to cast spells.",
            Self::Rally => "steady and embolden every ally.",
            Self::DecisiveOrder => "command an ally to act at once.",
            Self::Deliverance => "restore an ally and lift their afflictions.",
        }
    }
}

bitflags! {
    /// Ordered capability set of action kinds.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ActionSet: u32 {
        const FIGHT = 1 << 0;
        const TRIP = 1 << 1;
        const SKIRMISH = 1 << 2;
        const GUARD = 1 << 3;
        const BLOCK = 1 << 4;
        const RETREAT = 1 << 5;
        const AID = 1 << 6;
        const SWAP = 1 << 7;
        const USE_ITEM = 1 << 8;
        const OBSERVE = 1 << 9;
        const STAB = 1 << 10;
        const SMASH = 1 << 11;
        const HACK_AND_SLASH = 1 << 12;
        const PROWL = 1 << 13;
        const DIRTY_TRICK = 1 << 14;
        const DIABLERIE = 1 << 15;
        const RALLY = 1 << 16;
        const DECISIVE_ORDER = 1 << 17;
        const DELIVERANCE = 1 << 18;
    }
}

impl ActionSet {
    /// Actions every actor knows.
    pub const BASE: Self = Self::FIGHT
        .union(Self::TRIP)
        .union(Self::SKIRMISH)
        .union(Self::GUARD)
        .union(Self::BLOCK)
        .union(Self::RETREAT)
        .union(Self::AID)
        .union(Self::SWAP)
        .union(Self::USE_ITEM)
        .union(Self::OBSERVE);

    /// Attacks taken away by disable.
    pub const DIRECT_ATTACKS: Self = Self::SKIRMISH
        .union(Self::FIGHT)
        .union(Self::SMASH)
        .union(Self::TRIP)
        .union(Self::STAB);

    /// Actions that need to close in, lost while pinned at a distance.
    pub const CLOSE_IN: Self = Self::FIGHT
        .union(Self::SMASH)
        .union(Self::TRIP)
        .union(Self::STAB)
        .union(Self::BLOCK);

    /// Ranged stances that cannot be taken while engaged.
    pub const RANGED: Self = Self::SKIRMISH.union(Self::BLOCK);

    pub fn has(self, kind: ActionKind) -> bool {
        self.contains(kind.flag())
    }

    /// Kinds in this set, in canonical order.
    pub fn kinds(self) -> impl Iterator<Item = ActionKind> {
        ActionKind::iter().filter(move |kind| self.has(*kind))
    }

    /// Menu-ordered catalog: archetype actions, then arms actions, then base
    /// actions, each kind listed once.
    pub fn catalog(archetype: Self, arms: Self) -> Vec<ActionKind> {
        let mut seen = Self::empty();
        let mut catalog = Vec::new();
        for group in [archetype, arms, Self::BASE] {
            for kind in group.difference(seen).kinds() {
                catalog.push(kind);
            }
            seen |= group;
        }
        catalog
    }
}

impl FromIterator<ActionKind> for ActionSet {
    fn from_iter<I: IntoIterator<Item = ActionKind>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, kind| set | kind.flag())
    }
}
