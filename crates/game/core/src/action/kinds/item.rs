//! Consumables drawn from the party's shared inventory.

use super::{lose_momentum, pick_target};
use crate::action::{ActionKind, filter_targets};
use crate::action::combat::damage;
use crate::config::EncounterConfig;
use crate::env::{Choice, EncounterEnv};
use crate::state::{ActorId, Buff, BuffKind, Consumable, DamageType, EncounterState, SpeedTier};
use crate::stats::{Stat, StatLine};

const FRENZY_POWER: i32 = 2;

pub fn use_item(state: &mut EncounterState<'_>, env: &mut EncounterEnv<'_>, actor: ActorId) {
    let is_human = state.actor(actor).is_some_and(|a| a.is_human());
    let name = state.name(actor).to_owned();

    let Some(items) = state.inventory_for(actor).map(|inv| inv.items().to_vec()) else {
        env.report("No party inventory available.");
        lose_momentum(state, actor);
        return;
    };
    if items.is_empty() {
        env.report("The party has no items to use.");
        lose_momentum(state, actor);
        return;
    }

    let slot = if is_human {
        let options: Vec<Choice> = items
            .iter()
            .map(|item| Choice::new(item.to_string(), item.description()))
            .collect();
        env.choose("Choose an item to use.", &options)
    } else {
        env.pick(items.len())
    };
    let Some((slot, item)) = slot.and_then(|i| items.get(i).map(|&item| (i, item))) else {
        lose_momentum(state, actor);
        return;
    };

    // Spent whether or not it finds a target.
    if let Some(inventory) = state.inventory_for(actor)
        && let Err(err) = inventory.remove(slot)
    {
        tracing::warn!(%actor, %err, "inventory slot vanished");
        lose_momentum(state, actor);
        return;
    }

    env.report(format!("{name} uses {item}."));
    tracing::debug!(%actor, %item, "use item");
    match item {
        Consumable::Elixir => elixir(state, env, actor),
        Consumable::FireBomb => fire_bomb(state, env, actor),
        Consumable::DevilsDust => devils_dust(state, env, actor),
    }
    lose_momentum(state, actor);
}

fn elixir(state: &mut EncounterState<'_>, env: &mut EncounterEnv<'_>, actor: ActorId) {
    let amount = env.range(EncounterConfig::RESTORE_MIN, EncounterConfig::RESTORE_MAX);
    let restored = state
        .actor_mut(actor)
        .map_or(0, |a| a.stats.restore_stamina(amount));
    env.report(format!(
        "{} drinks the elixir and restores {restored} stamina.",
        state.name(actor)
    ));
}

/// Hellfire that always lands; only insulation softens it.
fn fire_bomb(state: &mut EncounterState<'_>, env: &mut EncounterEnv<'_>, actor: ActorId) {
    if filter_targets(state, actor).is_empty() {
        env.report(format!(
            "No target available for {}'s fire bomb.",
            state.name(actor)
        ));
        return;
    }
    let Some(target) = pick_target(state, env, actor, ActionKind::UseItem) else {
        return;
    };
    env.report(format!(
        "{}'s fire bomb explodes on {}!",
        state.name(actor),
        state.name(target)
    ));
    let power = env.range(EncounterConfig::RESTORE_MIN, EncounterConfig::RESTORE_MAX);
    let insulation = state.actor(target).map_or(0, |t| t.stats.current.insulation);
    damage(state, env, target, power, insulation, DamageType::Hellfire);
}

fn devils_dust(state: &mut EncounterState<'_>, env: &mut EncounterEnv<'_>, actor: ActorId) {
    env.report(format!(
        "{} inhales the devil's dust and feels more powerful!",
        state.name(actor)
    ));
    let buff = Buff::new(
        EncounterConfig::BUFF_ROUNDS,
        StatLine::ZERO.with(Stat::Power, FRENZY_POWER),
    )
    .with_speed(SpeedTier::Fast);
    state.apply_buff(BuffKind::Frenzy, actor, buff);
}
