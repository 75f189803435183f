//! Deterministic rules for turn-based tactical encounters.
//!
//! `encounter-core` defines the canonical rules (stat tests, conditions,
//! actions, AI temperaments, scheduling) and exposes pure APIs that any
//! front end can drive. Dice, narration and human input are injected
//! through [`env::EncounterEnv`], and every encounter runs through
//! [`engine::EncounterEngine`].
pub mod action;
pub mod ai;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;
pub mod stats;

pub use action::{ActionKind, ActionSet, Outcome, perform, stat_test};
pub use ai::{LogicProfile, SelectAction, SelectTarget, TargetView};
pub use config::EncounterConfig;
pub use engine::{EncounterEngine, EncounterOutcome, Phase, run_encounter};
pub use env::{
    Choice, Dice, EncounterEnv, InputProvider, PcgDice, RecordingReporter, Reporter,
    ScriptedDice, ScriptedInput, TracingReporter,
};
pub use error::{EncounterError, ErrorSeverity, GameError, InventoryError};
pub use state::{
    Actor, ActorId, ActorStatus, Archetype, Armor, Buff, BuffKind, Condition, Consumable,
    DamageType, EncounterState, Features, Headgear, Inventory, Scene, SceneEvent, Side, SpeedTier,
    Weapon,
};
pub use stats::{Stat, StatLine, Stats};
