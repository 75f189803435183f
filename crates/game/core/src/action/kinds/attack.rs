//! Direct strikes.
//!
//! Every strike follows the same shape: pick a target, roll damage, maybe
//! close into melee, run a modified stat test, then branch on the outcome.
//! The tables below list what differs per strike.
//!
//! | strike         | melee        | charge | adder | hit            | critical        |
//! |----------------|--------------|--------|-------|----------------|-----------------|
//! | fight          | unless reach | yes    | 0     | dmg            | dmg+4           |
//! | smash          | unless reach | yes    | -4    | dmg+2, daze    | dmg+6, daze     |
//! | hack and slash | unless reach | yes    | +4    | dmg            | dmg+4           |
//! | stab           | always       | yes    | -4    | dmg+1d4 pierce | dmg+4 pierce    |
//! | trip           | unless reach | no     | +4    | daze           | daze, disable   |
//! | prowl          | never        | no     | 0     | dmg            | dmg+4           |
//! | dirty trick    | leaves melee | no     | +4    | daze           | daze, disable   |
//! | skirmish       | never        | no     | 0     | 1d6 pierce, pin| 1d6+4, pin      |

use super::{afflict, lose_momentum, pick_among, pick_target};
use crate::action::ActionKind;
use crate::action::check::{Outcome, stat_test};
use crate::action::combat::{
    charge_bonus, combat_modifiers, damage, riposte, seize_momentum, weapon_damage,
};
use crate::action::targeting::filter_targets;
use crate::config::EncounterConfig;
use crate::env::EncounterEnv;
use crate::state::{ActorId, Condition, DamageType, EncounterState, Features};

/// Attack test with the strike's own adder offset on top of the modifiers.
fn attack_test(
    state: &EncounterState<'_>,
    env: &mut EncounterEnv<'_>,
    attacker: ActorId,
    target: ActorId,
    offset: i32,
) -> Outcome {
    let (adder, difficulty) = combat_modifiers(state, env, attacker, target);
    stat_test(env, adder + offset, difficulty)
}

/// Engages both actors unless the attacker fights with reach.
fn close_in(state: &mut EncounterState<'_>, attacker: ActorId, target: ActorId) {
    if !state.actor(attacker).is_some_and(|a| a.has(Features::REACH)) {
        state.engage(attacker, target);
    }
}

/// Damage against the target's reduction with the attacker's weapon type.
fn strike(
    state: &mut EncounterState<'_>,
    env: &mut EncounterEnv<'_>,
    attacker: ActorId,
    target: ActorId,
    power: i32,
) {
    let reduction = state.actor(target).map_or(0, |t| t.stats.current.reduction);
    let damage_type = state
        .actor(attacker)
        .map_or(DamageType::default(), |a| a.damage_type());
    damage(state, env, target, power, reduction, damage_type);
    seize_momentum(state, attacker, target);
}

/// Narrates a miss and drops the attacker's momentum. Riposte is separate
/// so callers can slot their own penalties in between.
fn deflected(
    state: &mut EncounterState<'_>,
    env: &mut EncounterEnv<'_>,
    attacker: ActorId,
    target: ActorId,
) {
    env.report(format!("{} deflects the attack.", state.name(target)));
    lose_momentum(state, attacker);
}

pub fn fight(state: &mut EncounterState<'_>, env: &mut EncounterEnv<'_>, actor: ActorId) {
    let Some(target) = pick_target(state, env, actor, ActionKind::Fight) else {
        return;
    };
    let power = weapon_damage(state, env, actor) + charge_bonus(state, env, actor, target);
    close_in(state, actor, target);
    env.report(format!(
        "{} attacks {} in melee.",
        state.name(actor),
        state.name(target)
    ));

    match attack_test(state, env, actor, target, 0) {
        Outcome::Success => strike(state, env, actor, target, power),
        Outcome::Critical => strike(
            state,
            env,
            actor,
            target,
            power + EncounterConfig::CRITICAL_DAMAGE,
        ),
        Outcome::Failure => {
            deflected(state, env, actor, target);
            riposte(state, env, actor, target);
        }
    }
}

pub fn smash(state: &mut EncounterState<'_>, env: &mut EncounterEnv<'_>, actor: ActorId) {
    let Some(target) = pick_target(state, env, actor, ActionKind::Smash) else {
        return;
    };
    let power = weapon_damage(state, env, actor) + charge_bonus(state, env, actor, target);
    close_in(state, actor, target);
    env.report(format!(
        "{} winds up for a heavy attack against {}.",
        state.name(actor),
        state.name(target)
    ));

    let outcome = attack_test(state, env, actor, target, -EncounterConfig::PRECISE_PENALTY);
    match outcome {
        Outcome::Success | Outcome::Critical => {
            let bonus = if outcome == Outcome::Critical { 6 } else { 2 };
            strike(state, env, actor, target, power + bonus);
            afflict(state, env, target, Condition::Daze);
        }
        Outcome::Failure => {
            deflected(state, env, actor, target);
            afflict(state, env, actor, Condition::Vulnerable);
            riposte(state, env, actor, target);
        }
    }
}

/// Reckless flurry: easier to land, always leaves the attacker open.
pub fn hack_and_slash(state: &mut EncounterState<'_>, env: &mut EncounterEnv<'_>, actor: ActorId) {
    let Some(target) = pick_target(state, env, actor, ActionKind::HackAndSlash) else {
        return;
    };
    let power = weapon_damage(state, env, actor) + charge_bonus(state, env, actor, target);
    close_in(state, actor, target);
    env.report(format!(
        "{} attacks {} with a flurry of blows.",
        state.name(actor),
        state.name(target)
    ));

    let outcome = attack_test(state, env, actor, target, EncounterConfig::OPENING_BONUS);
    match outcome {
        Outcome::Success => strike(state, env, actor, target, power),
        Outcome::Critical => strike(
            state,
            env,
            actor,
            target,
            power + EncounterConfig::CRITICAL_DAMAGE,
        ),
        Outcome::Failure => deflected(state, env, actor, target),
    }
    afflict(state, env, actor, Condition::Vulnerable);
    if outcome == Outcome::Failure {
        riposte(state, env, actor, target);
    }
}

/// Precise strike at weak points. Ignores reduction.
pub fn stab(state: &mut EncounterState<'_>, env: &mut EncounterEnv<'_>, actor: ActorId) {
    let Some(target) = pick_target(state, env, actor, ActionKind::Stab) else {
        return;
    };
    let power = weapon_damage(state, env, actor) + charge_bonus(state, env, actor, target);
    state.engage(actor, target);
    env.report(format!(
        "{} aims at {}'s weak points.",
        state.name(actor),
        state.name(target)
    ));

    let outcome = attack_test(state, env, actor, target, -EncounterConfig::PRECISE_PENALTY);
    let power = match outcome {
        Outcome::Success => power + env.roll(EncounterConfig::DAMAGE_DIE),
        Outcome::Critical => power + EncounterConfig::CRITICAL_DAMAGE,
        Outcome::Failure => {
            deflected(state, env, actor, target);
            riposte(state, env, actor, target);
            return;
        }
    };
    damage(state, env, target, power, 0, DamageType::Pierce);
    seize_momentum(state, actor, target);
}

/// Looks for an opening to daze. Deals no damage.
pub fn trip(state: &mut EncounterState<'_>, env: &mut EncounterEnv<'_>, actor: ActorId) {
    let Some(target) = pick_target(state, env, actor, ActionKind::Trip) else {
        return;
    };
    close_in(state, actor, target);
    env.report(format!(
        "{} looks for an opening against {}.",
        state.name(actor),
        state.name(target)
    ));
    let outcome = attack_test(state, env, actor, target, EncounterConfig::OPENING_BONUS);
    unbalance(state, env, actor, target, outcome);
}

/// Strikes without committing to melee. From outside melee any standing
/// opponent is in reach, and one already engaged takes an extra 1d4.
pub fn prowl(state: &mut EncounterState<'_>, env: &mut EncounterEnv<'_>, actor: ActorId) {
    let roaming = !state.in_melee(actor);
    let candidates = if roaming {
        state.opponents(actor)
    } else {
        filter_targets(state, actor)
    };
    let Some(target) = pick_among(state, env, actor, ActionKind::Prowl, &candidates) else {
        return;
    };

    let mut power = weapon_damage(state, env, actor);
    if roaming && state.in_melee(target) {
        power += env.roll(EncounterConfig::DAMAGE_DIE);
    }
    env.report(format!(
        "{} prowls toward {}.",
        state.name(actor),
        state.name(target)
    ));

    match attack_test(state, env, actor, target, 0) {
        Outcome::Success => strike(state, env, actor, target, power),
        Outcome::Critical => strike(
            state,
            env,
            actor,
            target,
            power + EncounterConfig::CRITICAL_DAMAGE,
        ),
        Outcome::Failure => {
            deflected(state, env, actor, target);
            riposte(state, env, actor, target);
        }
    }
}

/// A low blow from inside melee. The actor slips out of melee afterwards.
pub fn dirty_trick(state: &mut EncounterState<'_>, env: &mut EncounterEnv<'_>, actor: ActorId) {
    if !state.in_melee(actor) {
        env.report(format!(
            "{} is not in melee and cannot use dirty trick.",
            state.name(actor)
        ));
        return;
    }
    let Some(target) = pick_target(state, env, actor, ActionKind::DirtyTrick) else {
        return;
    };
    if !state.in_melee(target) {
        env.report(format!(
            "{} cannot use dirty trick on a target outside melee.",
            state.name(actor)
        ));
        return;
    }

    env.report(format!(
        "{} attempts a dirty trick on {}.",
        state.name(actor),
        state.name(target)
    ));
    let outcome = attack_test(state, env, actor, target, EncounterConfig::OPENING_BONUS);
    state.update(actor, |s| s.melee = false);
    unbalance(state, env, actor, target, outcome);
}

/// Shared outcome of trip and dirty trick.
fn unbalance(
    state: &mut EncounterState<'_>,
    env: &mut EncounterEnv<'_>,
    actor: ActorId,
    target: ActorId,
    outcome: Outcome,
) {
    if outcome == Outcome::Failure {
        deflected(state, env, actor, target);
        riposte(state, env, actor, target);
        return;
    }
    seize_momentum(state, actor, target);
    afflict(state, env, target, Condition::Daze);
    if outcome == Outcome::Critical {
        afflict(state, env, target, Condition::Disable);
    }
}

/// Ranged attack that pins. Never engages and never keeps momentum.
pub fn skirmish(state: &mut EncounterState<'_>, env: &mut EncounterEnv<'_>, actor: ActorId) {
    let Some(target) = pick_target(state, env, actor, ActionKind::Skirmish) else {
        return;
    };
    let power = env.roll(EncounterConfig::SKIRMISH_DIE);
    env.report(format!(
        "{} takes aim at {} and attacks from a distance.",
        state.name(actor),
        state.name(target)
    ));
    lose_momentum(state, actor);

    let outcome = attack_test(state, env, actor, target, 0);
    let power = match outcome {
        Outcome::Success => power,
        Outcome::Critical => power + EncounterConfig::CRITICAL_DAMAGE,
        Outcome::Failure => {
            env.report(format!("{} misses.", state.name(actor)));
            return;
        }
    };
    let reduction = state.actor(target).map_or(0, |t| t.stats.current.reduction);
    damage(state, env, target, power, reduction, DamageType::Pierce);
    lose_momentum(state, target);
    afflict(state, env, target, Condition::Pin);
}
