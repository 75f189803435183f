//! Handlers for every action kind, grouped by what they do.
//!
//! - `attack`: direct strikes (fight, smash, stab, trip, ...)
//! - `stance`: guard, block, retreat, swap, observe
//! - `support`: aid, rally, decisive order, deliverance
//! - `diablerie`: summoning and spells
//! - `item`: the shared party inventory
//!
//! Handlers never fail. A missing target or a spent resource is narrated
//! and the turn ends.

pub mod attack;
pub mod diablerie;
pub mod item;
pub mod stance;
pub mod support;

use super::ActionKind;
use super::targeting::{choose_target, filter_targets};
use crate::env::EncounterEnv;
use crate::state::{ActorId, Condition, EncounterState};

/// Resolves a target among the legal opponents, narrating when none is left.
pub(crate) fn pick_target(
    state: &EncounterState<'_>,
    env: &mut EncounterEnv<'_>,
    actor: ActorId,
    kind: ActionKind,
) -> Option<ActorId> {
    let candidates = filter_targets(state, actor);
    pick_among(state, env, actor, kind, &candidates)
}

pub(crate) fn pick_among(
    state: &EncounterState<'_>,
    env: &mut EncounterEnv<'_>,
    actor: ActorId,
    kind: ActionKind,
    candidates: &[ActorId],
) -> Option<ActorId> {
    if candidates.is_empty() {
        env.report(format!("{} finds no one to {kind}.", state.name(actor)));
        return None;
    }
    choose_target(
        state,
        env,
        actor,
        candidates,
        &format!("Choose a target for {kind}."),
    )
}

/// Resolves a standing ally other than the actor.
pub(crate) fn pick_ally(
    state: &EncounterState<'_>,
    env: &mut EncounterEnv<'_>,
    actor: ActorId,
    kind: ActionKind,
) -> Option<ActorId> {
    let allies = state.allies(actor);
    if allies.is_empty() {
        return None;
    }
    choose_target(state, env, actor, &allies, &format!("Choose an ally for {kind}."))
}

/// Imposes a condition on an actor still standing.
pub(crate) fn afflict(
    state: &mut EncounterState<'_>,
    env: &mut EncounterEnv<'_>,
    id: ActorId,
    condition: Condition,
) {
    if state.is_ko(id) {
        return;
    }
    match condition {
        Condition::Pin => state.cause_pin(env, id),
        Condition::Disable => state.cause_disable(env, id),
        other => state.cause(env, id, other),
    }
}

/// Lifts daze and vulnerable. Returns whether the ally needed steadying.
pub(crate) fn steady(
    state: &mut EncounterState<'_>,
    env: &mut EncounterEnv<'_>,
    id: ActorId,
) -> bool {
    let shaken = state.check(id, |s| s.is_soft());
    if shaken {
        state.remove(env, id, Condition::Vulnerable);
        state.remove(env, id, Condition::Daze);
    }
    shaken
}

pub(crate) fn lose_momentum(state: &mut EncounterState<'_>, id: ActorId) {
    state.update(id, |s| s.momentum = false);
}
