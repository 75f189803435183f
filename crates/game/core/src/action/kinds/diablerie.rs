//! Diablerie: bargaining with hell for a spell.
//!
//! The caster picks a spell and the rank of the demon to summon, then tests
//! current fortune against the rank. Failure lashes back as hellfire; success
//! spends a point of fortune and casts. Higher ranks are harder to bind but
//! strengthen the spell by one step per two ranks above a lord.

use strum::{Display, EnumIter, IntoEnumIterator};

use super::{afflict, pick_target};
use crate::action::ActionKind;
use crate::action::check::stat_test;
use crate::action::combat::damage;
use crate::config::EncounterConfig;
use crate::env::{Choice, EncounterEnv};
use crate::state::{ActorId, Buff, BuffKind, Condition, DamageType, EncounterState};
use crate::stats::{Stat, StatLine};

/// Difficulty of the fortune test resisting wail and locust swarm.
const SPELL_SAVE_BASE: i32 = 15;
const INFERNO_MIN: i32 = 7;
const INFERNO_MAX: i32 = 12;
const BACKLASH_BONUS: i32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum Spell {
    Inferno,
    Wail,
    #[strum(serialize = "locust swarm")]
    LocustSwarm,
    #[strum(serialize = "stone skin")]
    StoneSkin,
}

impl Spell {
    pub const fn description(self) -> &'static str {
        match self {
            Self::Inferno => "hellfire engulfs a single target.",
            Self::Wail => "a soul-wail that breaks melee, pins and dazes.",
            Self::LocustSwarm => "a swarm that ends all melee and blinds.",
            Self::StoneSkin => "hardens the caster's skin for four rounds.",
        }
    }
}

/// Demon rank. Declaration order is ascending difficulty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum Rank {
    Lord,
    Count,
    Duke,
}

impl Rank {
    /// Difficulty of binding the demon.
    pub const fn difficulty(self) -> i32 {
        match self {
            Self::Lord => 8,
            Self::Count => 10,
            Self::Duke => 12,
        }
    }

    /// Power steps above a lord.
    pub const fn steps(self) -> i32 {
        (self.difficulty() - Self::Lord.difficulty()) / 2
    }
}

pub fn diablerie(state: &mut EncounterState<'_>, env: &mut EncounterEnv<'_>, actor: ActorId) {
    let Some(caster) = state.actor(actor) else {
        return;
    };
    let name = caster.name.clone();
    let fortune = caster.stats.current.fortune;
    let (spell, rank) = if caster.is_human() {
        (choose_spell(env), choose_rank(env))
    } else {
        (random_of(env, Spell::Inferno), random_of(env, Rank::Lord))
    };

    env.report(format!("{name} summons a {rank} of hell to cast {spell}."));
    tracing::debug!(caster = %actor, %spell, %rank, "diablerie");

    if !stat_test(env, fortune, rank.difficulty()).is_hit() {
        env.report(format!(
            "the {rank} resists the summons and lashes out at {name}."
        ));
        let backlash = env.roll(EncounterConfig::DAMAGE_DIE) + BACKLASH_BONUS;
        let insulation = state.actor(actor).map_or(0, |a| a.stats.current.insulation);
        damage(state, env, actor, backlash, insulation, DamageType::Hellfire);
        return;
    }

    if let Some(caster) = state.actor_mut(actor) {
        caster.stats.current.fortune = (caster.stats.current.fortune - 1).max(0);
        env.report(format!(
            "{name}'s fortune is bound to the spell ({} remaining).",
            caster.stats.current.fortune
        ));
    }

    match spell {
        Spell::Inferno => inferno(state, env, actor, rank),
        Spell::Wail => wail(state, env, actor, rank),
        Spell::LocustSwarm => locust_swarm(state, env, actor, rank),
        Spell::StoneSkin => stone_skin(state, env, actor, rank),
    }
}

fn choose_spell(env: &mut EncounterEnv<'_>) -> Spell {
    let spells: Vec<Spell> = Spell::iter().collect();
    let options: Vec<Choice> = spells
        .iter()
        .map(|s| Choice::new(s.to_string(), s.description()))
        .collect();
    env.choose("Choose a spell.", &options)
        .and_then(|i| spells.get(i).copied())
        .unwrap_or(Spell::Inferno)
}

fn choose_rank(env: &mut EncounterEnv<'_>) -> Rank {
    let ranks: Vec<Rank> = Rank::iter().collect();
    let options: Vec<Choice> = ranks
        .iter()
        .map(|r| Choice::new(format!("summon {r}"), format!("difficulty {}", r.difficulty())))
        .collect();
    env.choose("Choose a rank for the summoning.", &options)
        .and_then(|i| ranks.get(i).copied())
        .unwrap_or(Rank::Lord)
}

fn random_of<T: IntoEnumIterator + Copy>(env: &mut EncounterEnv<'_>, fallback: T) -> T {
    let all: Vec<T> = T::iter().collect();
    env.pick(all.len())
        .and_then(|i| all.get(i).copied())
        .unwrap_or(fallback)
}

fn inferno(state: &mut EncounterState<'_>, env: &mut EncounterEnv<'_>, actor: ActorId, rank: Rank) {
    let Some(target) = pick_target(state, env, actor, ActionKind::Diablerie) else {
        return;
    };
    let power = env.range(INFERNO_MIN, INFERNO_MAX) + 3 * rank.steps();
    env.report(format!(
        "the {rank} unleashes inferno upon {}!",
        state.name(target)
    ));
    let insulation = state.actor(target).map_or(0, |t| t.stats.current.insulation);
    damage(state, env, target, power, insulation, DamageType::Hellfire);
}

/// Opponents when the caster stands apart, otherwise everyone locked in
/// melee (the caster included).
fn area_targets(state: &EncounterState<'_>, actor: ActorId) -> Vec<ActorId> {
    if state.in_melee(actor) {
        state
            .order()
            .into_iter()
            .filter(|&id| !state.is_ko(id) && state.in_melee(id))
            .collect()
    } else {
        state.opponents(actor)
    }
}

fn resists(state: &EncounterState<'_>, env: &mut EncounterEnv<'_>, id: ActorId, rank: Rank) -> bool {
    let fortune = state.actor(id).map_or(0, |a| a.stats.current.fortune);
    stat_test(env, fortune, SPELL_SAVE_BASE + 2 * rank.steps()).is_hit()
}

fn wail(state: &mut EncounterState<'_>, env: &mut EncounterEnv<'_>, actor: ActorId, rank: Rank) {
    let targets = area_targets(state, actor);
    if targets.is_empty() {
        return;
    }
    env.report(format!(
        "the {rank} releases a soul-wail that rends the field!"
    ));
    for id in targets {
        state.update(id, |s| {
            s.melee = false;
            s.momentum = false;
            s.guard = false;
        });
        afflict(state, env, id, Condition::Pin);
        if !resists(state, env, id, rank) {
            afflict(state, env, id, Condition::Daze);
        }
        if rank >= Rank::Count {
            afflict(state, env, id, Condition::Disable);
        }
    }
}

fn locust_swarm(state: &mut EncounterState<'_>, env: &mut EncounterEnv<'_>, actor: ActorId, rank: Rank) {
    let targets = area_targets(state, actor);
    if targets.is_empty() {
        return;
    }
    env.report(format!("the {rank} unleashes a locust swarm!"));
    for id in state.order() {
        state.update(id, |s| s.melee = false);
    }
    for id in targets {
        state.update(id, |s| {
            s.momentum = false;
            s.guard = false;
        });
        if !resists(state, env, id, rank) {
            afflict(state, env, id, Condition::Blind);
        }
        if rank >= Rank::Count {
            afflict(state, env, id, Condition::Disable);
        }
    }
}

fn stone_skin(state: &mut EncounterState<'_>, env: &mut EncounterEnv<'_>, actor: ActorId, rank: Rank) {
    let reduction = 3 + rank.steps();
    let power = rank.steps();
    let name = state.name(actor).to_owned();
    env.report(format!("the {rank} cloaks {name} in hardened skin!"));
    env.report(format!(
        "{name} gains +{reduction} reduction and +{power} power for {} rounds.",
        EncounterConfig::BUFF_ROUNDS
    ));
    let deltas = StatLine::ZERO
        .with(Stat::Reduction, reduction)
        .with(Stat::Power, power);
    state.apply_buff(BuffKind::Ward, actor, Buff::new(EncounterConfig::BUFF_ROUNDS, deltas));
}
