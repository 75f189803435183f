//! The mutable aggregate of one encounter.

use std::collections::{BTreeMap, BTreeSet};

use super::{
    Actor, ActorId, ActorStatus, BuffKind, BuffRegistry, Inventory, Side, SpeedTier,
};
use crate::action::ActionKind;
use crate::error::EncounterError;

/// Position of an actor inside the borrowed rosters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Slot {
    id: ActorId,
    side: Side,
    index: usize,
}

/// Temporary speed imposed by a scene event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SpeedOverride {
    pub actor: ActorId,
    pub restore: SpeedTier,
    /// Round at whose start the original speed comes back.
    pub until_round: u32,
}

/// State of one battle. Borrows both rosters; owns only per-encounter data.
pub struct EncounterState<'a> {
    party: &'a mut [Actor],
    enemies: &'a mut [Actor],
    inventory: Option<&'a mut Inventory>,
    round: u32,
    slots: Vec<Slot>,
    statuses: BTreeMap<ActorId, ActorStatus>,
    ward: BuffRegistry,
    frenzy: BuffRegistry,
    pub(crate) speed_overrides: Vec<SpeedOverride>,
    spent: BTreeSet<(ActorId, ActionKind)>,
}

impl<'a> EncounterState<'a> {
    /// Creates the state for a fresh encounter at round 1.
    ///
    /// Every actor gets a clean status whose speed is its loadout speed.
    pub fn new(party: &'a mut [Actor], enemies: &'a mut [Actor]) -> Result<Self, EncounterError> {
        if party.is_empty() {
            return Err(EncounterError::EmptyParty);
        }
        if enemies.is_empty() {
            return Err(EncounterError::EmptyRoster);
        }

        let mut slots = Vec::with_capacity(party.len() + enemies.len());
        let mut statuses = BTreeMap::new();
        let sides = [(Side::Party, &*party), (Side::Enemies, &*enemies)];
        for (side, roster) in sides {
            for (index, actor) in roster.iter().enumerate() {
                let status = ActorStatus::new(side == Side::Party, actor.speed());
                if statuses.insert(actor.id, status).is_some() {
                    return Err(EncounterError::DuplicateActor(actor.id));
                }
                slots.push(Slot {
                    id: actor.id,
                    side,
                    index,
                });
            }
        }

        Ok(Self {
            party,
            enemies,
            inventory: None,
            round: 1,
            slots,
            statuses,
            ward: BuffRegistry::new(),
            frenzy: BuffRegistry::new(),
            speed_overrides: Vec::new(),
            spent: BTreeSet::new(),
        })
    }

    /// Gives the party access to a shared inventory.
    pub fn with_inventory(mut self, inventory: &'a mut Inventory) -> Self {
        self.inventory = Some(inventory);
        self
    }

    // ========================================================================
    // Rounds
    // ========================================================================

    pub fn round(&self) -> u32 {
        self.round
    }

    pub(crate) fn advance_round(&mut self) -> u32 {
        self.round += 1;
        self.round
    }

    // ========================================================================
    // Actors
    // ========================================================================

    fn slot(&self, id: ActorId) -> Option<Slot> {
        self.slots.iter().copied().find(|slot| slot.id == id)
    }

    /// Every actor id, party first, each side in roster order.
    pub fn order(&self) -> Vec<ActorId> {
        self.slots.iter().map(|slot| slot.id).collect()
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        let slot = self.slot(id)?;
        match slot.side {
            Side::Party => self.party.get(slot.index),
            Side::Enemies => self.enemies.get(slot.index),
        }
    }

    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        let slot = self.slot(id)?;
        match slot.side {
            Side::Party => self.party.get_mut(slot.index),
            Side::Enemies => self.enemies.get_mut(slot.index),
        }
    }

    /// Display name, or an empty string for an unknown id.
    pub fn name(&self, id: ActorId) -> &str {
        self.actor(id).map(|a| a.name.as_str()).unwrap_or_default()
    }

    pub fn side(&self, id: ActorId) -> Option<Side> {
        self.slot(id).map(|slot| slot.side)
    }

    // ========================================================================
    // Status
    // ========================================================================

    pub fn status(&self, id: ActorId) -> Option<&ActorStatus> {
        self.statuses.get(&id)
    }

    pub fn status_mut(&mut self, id: ActorId) -> Option<&mut ActorStatus> {
        self.statuses.get_mut(&id)
    }

    /// Applies `f` to an actor's status if the actor takes part.
    pub fn update(&mut self, id: ActorId, f: impl FnOnce(&mut ActorStatus)) {
        if let Some(status) = self.statuses.get_mut(&id) {
            f(status);
        }
    }

    /// Reads a status flag through `f`; unknown actors read as default.
    pub fn check(&self, id: ActorId, f: impl FnOnce(&ActorStatus) -> bool) -> bool {
        self.statuses.get(&id).is_some_and(f)
    }

    pub fn is_ko(&self, id: ActorId) -> bool {
        self.check(id, |s| s.ko)
    }

    pub fn in_melee(&self, id: ActorId) -> bool {
        self.check(id, |s| s.melee)
    }

    // ========================================================================
    // Sides
    // ========================================================================

    /// All actors of a side, KO'd or not.
    pub fn members(&self, side: Side) -> Vec<ActorId> {
        self.slots
            .iter()
            .filter(|slot| slot.side == side)
            .map(|slot| slot.id)
            .collect()
    }

    /// Non-KO actors of a side.
    pub fn standing(&self, side: Side) -> Vec<ActorId> {
        self.slots
            .iter()
            .filter(|slot| slot.side == side && !self.is_ko(slot.id))
            .map(|slot| slot.id)
            .collect()
    }

    /// Non-KO actors opposing `id`.
    pub fn opponents(&self, id: ActorId) -> Vec<ActorId> {
        match self.side(id) {
            Some(side) => self.standing(side.opposite()),
            None => Vec::new(),
        }
    }

    /// Non-KO actors on the same side as `id`, excluding `id` itself.
    pub fn allies(&self, id: ActorId) -> Vec<ActorId> {
        match self.side(id) {
            Some(side) => self
                .standing(side)
                .into_iter()
                .filter(|&ally| ally != id)
                .collect(),
            None => Vec::new(),
        }
    }

    /// True when every member of `side` is KO'd.
    pub fn is_side_down(&self, side: Side) -> bool {
        self.members(side).iter().all(|&id| self.is_ko(id))
    }

    /// The side left standing once the other is fully KO'd.
    pub fn victor(&self) -> Option<Side> {
        if self.is_side_down(Side::Enemies) {
            Some(Side::Party)
        } else if self.is_side_down(Side::Party) {
            Some(Side::Enemies)
        } else {
            None
        }
    }

    // ========================================================================
    // Resources
    // ========================================================================

    /// Shared inventory, reachable by party members only.
    pub fn inventory_for(&mut self, id: ActorId) -> Option<&mut Inventory> {
        if self.side(id) != Some(Side::Party) {
            return None;
        }
        self.inventory.as_deref_mut()
    }

    pub fn buffs(&self, kind: BuffKind) -> &BuffRegistry {
        match kind {
            BuffKind::Ward => &self.ward,
            BuffKind::Frenzy => &self.frenzy,
        }
    }

    pub(crate) fn buffs_mut(&mut self, kind: BuffKind) -> &mut BuffRegistry {
        match kind {
            BuffKind::Ward => &mut self.ward,
            BuffKind::Frenzy => &mut self.frenzy,
        }
    }

    /// Records a use of `action` by `id`. Returns false if already recorded.
    pub fn spend(&mut self, id: ActorId, action: ActionKind) -> bool {
        self.spent.insert((id, action))
    }

    pub fn is_spent(&self, id: ActorId, action: ActionKind) -> bool {
        self.spent.contains(&(id, action))
    }
}
