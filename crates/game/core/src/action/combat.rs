//! Combat math shared by every attack: modifiers, triggers and damage.

use super::check::{Outcome, stat_test};
use crate::config::EncounterConfig;
use crate::env::EncounterEnv;
use crate::state::{ActorId, Condition, DamageType, EncounterState, Features, SpeedTier};

/// Adder and difficulty of an attack after status modifiers.
///
/// | condition            | effect            |
/// |----------------------|-------------------|
/// | attacker momentum    | +4 adder, unless the target has reach |
/// | attacker daze        | -4 adder          |
/// | defender guard       | +4 difficulty     |
/// | defender daze        | -4 difficulty     |
/// | defender vulnerable  | -4 difficulty     |
pub fn combat_modifiers(
    state: &EncounterState<'_>,
    env: &mut EncounterEnv<'_>,
    attacker: ActorId,
    target: ActorId,
) -> (i32, i32) {
    let (Some(a), Some(t)) = (state.actor(attacker), state.actor(target)) else {
        return (0, 0);
    };
    let (Some(a_status), Some(t_status)) = (state.status(attacker), state.status(target)) else {
        return (0, 0);
    };

    let mut adder = a.stats.current.skill;
    let mut difficulty = t.stats.current.defense;

    if a_status.momentum {
        if t.has(Features::REACH) {
            env.report(format!("{} halts {}'s momentum.", t.name, a.name));
        } else {
            adder += EncounterConfig::MOMENTUM_BONUS;
        }
    }
    if a_status.daze {
        adder -= EncounterConfig::DAZE_PENALTY;
    }
    if t_status.guard {
        difficulty += EncounterConfig::GUARD_BONUS;
    }
    if t_status.daze {
        difficulty -= EncounterConfig::DAZE_PENALTY;
    }
    if t_status.vulnerable {
        difficulty -= EncounterConfig::VULNERABLE_PENALTY;
    }
    (adder, difficulty)
}

/// Current power plus 1d4.
pub fn weapon_damage(state: &EncounterState<'_>, env: &mut EncounterEnv<'_>, attacker: ActorId) -> i32 {
    let power = state.actor(attacker).map_or(0, |a| a.stats.current.power);
    power + env.roll(EncounterConfig::DAMAGE_DIE)
}

/// Extra 1d4 for charging into melee, unless the target's reach staggers it.
pub fn charge_bonus(
    state: &EncounterState<'_>,
    env: &mut EncounterEnv<'_>,
    attacker: ActorId,
    target: ActorId,
) -> i32 {
    let charging = !state.in_melee(attacker)
        && state.actor(attacker).is_some_and(|a| a.has(Features::CHARGE));
    if !charging {
        return 0;
    }
    if state.actor(target).is_some_and(|t| t.has(Features::REACH)) {
        env.report(format!(
            "{} staggers {}'s charge.",
            state.name(target),
            state.name(attacker)
        ));
        return 0;
    }
    env.report(format!("{} charges furiously into battle.", state.name(attacker)));
    env.roll(EncounterConfig::DAMAGE_DIE)
}

/// Momentum flows to the attacker and away from the target.
pub fn seize_momentum(state: &mut EncounterState<'_>, attacker: ActorId, target: ActorId) {
    state.update(attacker, |s| s.momentum = true);
    state.update(target, |s| s.momentum = false);
}

/// Applies damage after reduction. A blow that would drop the target gets
/// one fortune save; success leaves the target at exactly 1 stamina.
pub fn damage(
    state: &mut EncounterState<'_>,
    env: &mut EncounterEnv<'_>,
    target: ActorId,
    power: i32,
    reduction: i32,
    damage_type: DamageType,
) {
    let Some(actor) = state.actor(target) else {
        return;
    };
    let dealt = (power - reduction).max(0);
    let fortune = actor.stats.current.fortune;
    let fateful = dealt >= actor.stats.current.stamina;

    let spared = fateful
        && stat_test(env, fortune, EncounterConfig::FORTUNE_SAVE_BASE + dealt).is_hit();

    let Some(actor) = state.actor_mut(target) else {
        return;
    };
    actor.stats.current.stamina -= dealt;
    let name = actor.name.clone();
    env.report(format!("{name} takes {dealt} damage."));
    tracing::debug!(actor = %target, dealt, damage_type = %damage_type, "damage");

    if fateful {
        env.report(format!("{name}'s fate is about to be decided."));
        if spared {
            actor.stats.current.stamina = 1;
            env.report(format!("{name} is spared by fortune and clings to life."));
            return;
        }
    }

    if actor.stats.current.stamina < 1 {
        actor.stats.current.stamina = 0;
        state.update(target, |s| s.knock_out());
        env.report(knockout_line(&name, damage_type));
        tracing::debug!(actor = %target, "knocked out");
    }
}

fn knockout_line(name: &str, damage_type: DamageType) -> String {
    match damage_type {
        DamageType::Blunt => format!("{name} is beaten to a bloody pulp."),
        DamageType::Sharp => format!("{name} is hacked to pieces."),
        DamageType::Pierce => format!("{name}'s lung is punctured and they collapse."),
        DamageType::Hellfire => format!("{name}'s body crumbles to cinders and dust."),
    }
}

/// A guarding defender with riposte punishes a missed attack.
pub fn riposte(
    state: &mut EncounterState<'_>,
    env: &mut EncounterEnv<'_>,
    attacker: ActorId,
    defender: ActorId,
) {
    let ready = state.check(defender, |s| s.guard && !s.ko)
        && state.actor(defender).is_some_and(|d| d.has(Features::RIPOSTE));
    if !ready {
        return;
    }

    env.report(format!(
        "{} seizes the moment and counter-attacks.",
        state.name(defender)
    ));
    let power = weapon_damage(state, env, defender);
    let (adder, difficulty) = combat_modifiers(state, env, defender, attacker);
    let outcome = stat_test(env, adder, difficulty);
    let Some((reduction, damage_type)) = state
        .actor(attacker)
        .zip(state.actor(defender))
        .map(|(a, d)| (a.stats.current.reduction, d.damage_type()))
    else {
        return;
    };

    match outcome {
        Outcome::Success => damage(state, env, attacker, power, reduction, damage_type),
        Outcome::Critical => damage(
            state,
            env,
            attacker,
            power + EncounterConfig::CRITICAL_DAMAGE,
            reduction,
            damage_type,
        ),
        Outcome::Failure => {
            env.report(format!("{} misses.", state.name(defender)));
            return;
        }
    }
    state.update(attacker, |s| s.momentum = false);
}

/// Badly wounded actors with savagery fly into a rage once per encounter:
/// +2 power, +2 reduction, fast and vulnerable.
pub fn savagery(state: &mut EncounterState<'_>, env: &mut EncounterEnv<'_>, id: ActorId) {
    if state.check(id, |s| s.ko || s.enraged) {
        return;
    }
    let Some(actor) = state.actor_mut(id) else {
        return;
    };
    let stats = actor.stats;
    if !actor.has(Features::SAVAGERY) || stats.current.stamina >= stats.base.stamina / 2 + 1 {
        return;
    }

    actor.stats.current.power += 2;
    actor.stats.current.reduction += 2;
    env.report(format!(
        "{} is enraged and grows stronger from their wounds.",
        actor.name
    ));
    state.update(id, |s| {
        s.enraged = true;
        s.speed = SpeedTier::Fast;
    });
    state.cause(env, id, Condition::Vulnerable);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{RecordingReporter, ScriptedDice, ScriptedInput};
    use crate::state::Actor;
    use crate::stats::{Stat, StatLine};

    struct Harness {
        dice: ScriptedDice,
        reporter: RecordingReporter,
        input: ScriptedInput,
    }

    impl Harness {
        fn new(dice: ScriptedDice) -> Self {
            Self {
                dice,
                reporter: RecordingReporter::new(),
                input: ScriptedInput::default(),
            }
        }

        fn env(&mut self) -> EncounterEnv<'_> {
            EncounterEnv::new(&mut self.dice, &mut self.reporter, &mut self.input)
        }
    }

    fn duo(target: Actor) -> (Vec<Actor>, Vec<Actor>) {
        (vec![Actor::new(ActorId(1), "Ada")], vec![target])
    }

    #[test]
    fn lethal_blow_triggers_exactly_one_fortune_save() {
        let target = Actor::new(ActorId(2), "Brute")
            .with_stats(StatLine::ACTOR_DEFAULT.with(Stat::Stamina, 5));
        let (mut party, mut enemies) = duo(target);
        let mut state = EncounterState::new(&mut party, &mut enemies).unwrap();
        // fortune 10 + 20 vs difficulty 17: success
        let mut harness = Harness::new(ScriptedDice::new([20]));

        damage(&mut state, &mut harness.env(), ActorId(2), 10, 3, DamageType::Blunt);

        assert_eq!(state.actor(ActorId(2)).unwrap().stats.current.stamina, 1);
        assert!(!state.is_ko(ActorId(2)));
        assert_eq!(harness.dice.remaining(), 0);
        assert_eq!(harness.reporter.count("fate is about to be decided"), 1);
        assert!(harness.reporter.mentions("spared by fortune"));
    }

    #[test]
    fn failed_fortune_save_knocks_out() {
        let target = Actor::new(ActorId(2), "Brute")
            .with_stats(StatLine::ACTOR_DEFAULT.with(Stat::Stamina, 5));
        let (mut party, mut enemies) = duo(target);
        let mut state = EncounterState::new(&mut party, &mut enemies).unwrap();
        state.update(ActorId(2), |s| s.melee = true);
        let mut harness = Harness::new(ScriptedDice::new([1]));

        damage(&mut state, &mut harness.env(), ActorId(2), 10, 3, DamageType::Sharp);

        assert_eq!(state.actor(ActorId(2)).unwrap().stats.current.stamina, 0);
        assert!(state.is_ko(ActorId(2)));
        assert!(!state.in_melee(ActorId(2)));
        assert!(harness.reporter.mentions("Brute is hacked to pieces."));
    }

    #[test]
    fn glancing_blows_never_heal() {
        let (mut party, mut enemies) = duo(Actor::new(ActorId(2), "Brute"));
        let mut state = EncounterState::new(&mut party, &mut enemies).unwrap();
        let mut harness = Harness::new(ScriptedDice::always(10));

        damage(&mut state, &mut harness.env(), ActorId(2), 2, 5, DamageType::Blunt);

        assert_eq!(state.actor(ActorId(2)).unwrap().stats.current.stamina, 12);
        assert!(harness.reporter.mentions("Brute takes 0 damage."));
    }

    #[test]
    fn modifiers_follow_the_table() {
        let (mut party, mut enemies) = duo(Actor::new(ActorId(2), "Brute"));
        let mut state = EncounterState::new(&mut party, &mut enemies).unwrap();
        let mut harness = Harness::new(ScriptedDice::always(1));

        state.update(ActorId(1), |s| {
            s.momentum = true;
            s.daze = true;
        });
        state.update(ActorId(2), |s| {
            s.guard = true;
            s.vulnerable = true;
            s.daze = true;
        });
        let (adder, difficulty) = combat_modifiers(&state, &mut harness.env(), ActorId(1), ActorId(2));
        assert_eq!(adder, 10 + 4 - 4);
        assert_eq!(difficulty, 10 + 4 - 4 - 4);
    }

    #[test]
    fn reach_halts_momentum_and_staggers_charges() {
        let target = Actor::new(ActorId(2), "Pikeman").with_features(Features::REACH);
        let (mut party, mut enemies) = duo(target);
        party[0] = Actor::new(ActorId(1), "Ada").with_features(Features::CHARGE);
        let mut state = EncounterState::new(&mut party, &mut enemies).unwrap();
        let mut harness = Harness::new(ScriptedDice::always(3));

        state.update(ActorId(1), |s| s.momentum = true);
        let (adder, _) = combat_modifiers(&state, &mut harness.env(), ActorId(1), ActorId(2));
        assert_eq!(adder, 10);
        assert_eq!(charge_bonus(&state, &mut harness.env(), ActorId(1), ActorId(2)), 0);
        assert!(harness.reporter.mentions("Pikeman halts Ada's momentum."));
        assert!(harness.reporter.mentions("Pikeman staggers Ada's charge."));
    }

    #[test]
    fn savagery_enrages_once() {
        let brute = Actor::new(ActorId(2), "Bosh").with_features(Features::SAVAGERY);
        let (mut party, mut enemies) = duo(brute);
        let mut state = EncounterState::new(&mut party, &mut enemies).unwrap();
        let mut harness = Harness::new(ScriptedDice::always(1));

        savagery(&mut state, &mut harness.env(), ActorId(2));
        assert!(!state.check(ActorId(2), |s| s.enraged));

        state.actor_mut(ActorId(2)).unwrap().stats.current.stamina = 6;
        savagery(&mut state, &mut harness.env(), ActorId(2));
        savagery(&mut state, &mut harness.env(), ActorId(2));

        let status = *state.status(ActorId(2)).unwrap();
        assert!(status.enraged && status.vulnerable);
        assert_eq!(status.speed, SpeedTier::Fast);
        assert_eq!(state.actor(ActorId(2)).unwrap().stats.current.power, 3);
        assert_eq!(harness.reporter.count("is enraged"), 1);
    }
}
