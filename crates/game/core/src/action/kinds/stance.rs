//! Stances and utility actions that need no stat test.

use super::lose_momentum;
use crate::env::EncounterEnv;
use crate::state::{ActorId, Condition, EncounterState};

pub fn guard(state: &mut EncounterState<'_>, env: &mut EncounterEnv<'_>, actor: ActorId) {
    state.cause(env, actor, Condition::Guard);
}

/// Guards and intercepts attackers approaching from range.
pub fn block(state: &mut EncounterState<'_>, env: &mut EncounterEnv<'_>, actor: ActorId) {
    state.update(actor, |s| s.guard = true);
    state.cause(env, actor, Condition::Block);
}

pub fn retreat(state: &mut EncounterState<'_>, env: &mut EncounterEnv<'_>, actor: ActorId) {
    state.update(actor, |s| {
        s.melee = false;
        s.momentum = false;
    });
    env.report(format!("{} retreats from melee.", state.name(actor)));
}

/// Draws the reserve weapon. Stats, features, weapon actions and damage
/// type follow the new primary.
pub fn swap(state: &mut EncounterState<'_>, env: &mut EncounterEnv<'_>, actor: ActorId) {
    if let Some(hero) = state.actor_mut(actor) {
        let sheathed = hero.primary_arms().map(|w| w.name);
        let drawn = hero.reserve_arms().map(|w| w.name);
        match (hero.swap_arms(), drawn) {
            (true, Some(drawn)) => env.report(format!(
                "{} sheathes {} and equips {drawn}.",
                hero.name,
                sheathed.unwrap_or("nothing")
            )),
            _ => env.report(format!("{} has no other weapons.", hero.name)),
        }
    }
    lose_momentum(state, actor);
}

/// Reports what the standing opposition looks like.
pub fn observe(state: &mut EncounterState<'_>, env: &mut EncounterEnv<'_>, actor: ActorId) {
    let seen: Vec<&str> = state
        .opponents(actor)
        .into_iter()
        .filter_map(|id| state.actor(id))
        .map(|a| a.observed())
        .collect();
    if seen.is_empty() {
        env.report("There are no enemies to observe.");
    } else {
        env.report(format!("You observe: {}.", seen.join(", ")));
    }
}
