//! Actors, their per-encounter status and the encounter aggregate.
//!
//! [`Actor`] values persist between encounters and carry stats and gear.
//! [`EncounterState`] borrows them for one battle and adds everything that
//! only makes sense during it: status flags, buffs, the round counter and
//! the party's shared inventory.
mod actor;
mod buff;
mod encounter;
mod inventory;
mod scene;
mod status;
mod tracker;

pub use actor::{
    Actor, ActorId, Archetype, Armor, DamageType, Features, Headgear, Side, SpeedTier, Weapon,
};
pub use buff::{Buff, BuffKind, BuffRegistry};
pub use encounter::EncounterState;
pub use inventory::{Consumable, Inventory};
pub use scene::{Scene, SceneEvent};
pub use status::{ActorStatus, Condition};
