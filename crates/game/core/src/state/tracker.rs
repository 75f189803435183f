//! Status transitions, buffs and scene events.
//!
//! Every transition that changes a flag is narrated; idempotent calls are
//! silent.

use super::{
    ActorId, Buff, BuffKind, Condition, EncounterState, Features, SceneEvent, Side, SpeedTier,
    encounter::SpeedOverride,
};
use crate::config::EncounterConfig;
use crate::env::EncounterEnv;

impl EncounterState<'_> {
    // ========================================================================
    // Conditions
    // ========================================================================

    /// Imposes a condition. Silent if the actor already has it.
    pub fn cause(&mut self, env: &mut EncounterEnv<'_>, id: ActorId, condition: Condition) {
        let changed = self
            .status_mut(id)
            .is_some_and(|status| status.set(condition, true));
        if changed {
            env.report(format!("{} {}.", self.name(id), condition.caused()));
        }
    }

    /// Lifts a condition. Silent if the actor does not have it.
    pub fn remove(&mut self, env: &mut EncounterEnv<'_>, id: ActorId, condition: Condition) {
        let changed = self
            .status_mut(id)
            .is_some_and(|status| status.set(condition, false));
        if changed {
            env.report(format!("{} {}.", self.name(id), condition.cleared()));
        }
    }

    /// Pins an actor. Rage prevents it; resist pin shrugs it off on a 4.
    pub fn cause_pin(&mut self, env: &mut EncounterEnv<'_>, id: ActorId) {
        if self.check(id, |s| s.enraged) {
            env.report(format!(
                "{}'s rage prevents them from being pinned.",
                self.name(id)
            ));
            return;
        }
        let resists = self.actor(id).is_some_and(|a| a.has(Features::RESIST_PIN));
        if resists {
            let roll = env.roll(EncounterConfig::RESIST_PIN_DIE) as u32;
            if roll >= EncounterConfig::RESIST_PIN_FACE {
                env.report(format!("{} resists being pinned.", self.name(id)));
                return;
            }
        }
        self.cause(env, id, Condition::Pin);
    }

    /// Disables an actor unless rage prevents it.
    pub fn cause_disable(&mut self, env: &mut EncounterEnv<'_>, id: ActorId) {
        if self.check(id, |s| s.enraged) {
            env.report(format!(
                "{}'s rage prevents them from being disabled.",
                self.name(id)
            ));
            return;
        }
        self.cause(env, id, Condition::Disable);
    }

    /// Clears guard, block, hide and vulnerable as the actor becomes active.
    pub fn soft_reset(&mut self, env: &mut EncounterEnv<'_>, id: ActorId) {
        for condition in Condition::SOFT {
            self.remove(env, id, condition);
        }
    }

    /// Clears daze, disable, pin and blind once the actor has acted.
    pub fn hard_reset(&mut self, env: &mut EncounterEnv<'_>, id: ActorId) {
        for condition in Condition::HARD {
            self.remove(env, id, condition);
        }
    }

    /// Engages two actors in melee.
    pub fn engage(&mut self, attacker: ActorId, target: ActorId) {
        self.update(attacker, |s| s.melee = true);
        self.update(target, |s| s.melee = true);
    }

    /// Melee needs both sides. Unless each side has an actor in melee, melee
    /// ends for everyone. Returns true if any flag was cleared.
    pub fn check_melee(&mut self, env: &mut EncounterEnv<'_>) -> bool {
        let engaged = |side: Side| {
            self.members(side)
                .into_iter()
                .any(|id| self.in_melee(id))
        };
        if engaged(Side::Party) && engaged(Side::Enemies) {
            return false;
        }

        let mut cleared = false;
        for id in self.order() {
            self.update(id, |s| {
                cleared |= s.melee;
                s.melee = false;
            });
        }
        if cleared {
            env.report("No melee.");
        }
        cleared
    }

    // ========================================================================
    // Buffs
    // ========================================================================

    /// Applies a timed buff, replacing (and reverting) any earlier buff of
    /// the same kind on the same actor.
    pub fn apply_buff(&mut self, kind: BuffKind, id: ActorId, buff: Buff) {
        if let Some(previous) = self.buffs_mut(kind).insert(id, buff) {
            self.revert_buff(id, &previous);
        }
        if let Some(actor) = self.actor_mut(id) {
            actor.stats.current.apply(&buff.deltas);
        }
        if let Some(speed) = buff.speed {
            self.update(id, |s| s.speed = speed);
        }
    }

    fn revert_buff(&mut self, id: ActorId, buff: &Buff) {
        let natural = self.actor_mut(id).map(|actor| {
            actor.stats.current.revert(&buff.deltas);
            actor.speed()
        });
        if buff.speed.is_some()
            && let Some(natural) = natural
        {
            self.update(id, |s| {
                if !s.enraged {
                    s.speed = natural;
                }
            });
        }
    }

    /// Counts both registries down by one upkeep and reverts what expires.
    pub fn tick_buffs(&mut self, env: &mut EncounterEnv<'_>) {
        for kind in [BuffKind::Ward, BuffKind::Frenzy] {
            let expired = self.buffs_mut(kind).tick();
            for (id, buff) in expired {
                self.revert_buff(id, &buff);
                if !self.is_ko(id) {
                    env.report(format!("{}'s {kind} wears off.", self.name(id)));
                }
            }
        }
    }

    // ========================================================================
    // Scene events
    // ========================================================================

    /// Applies a scene's one-shot event at encounter start.
    pub fn apply_event(&mut self, env: &mut EncounterEnv<'_>, event: SceneEvent) {
        match event {
            SceneEvent::Ambush => {
                let until_round = self.round() + 1;
                for id in self.members(Side::Party) {
                    let Some(restore) = self.status(id).map(|s| s.speed) else {
                        continue;
                    };
                    self.update(id, |s| s.speed = SpeedTier::Slow);
                    self.speed_overrides.push(SpeedOverride {
                        actor: id,
                        restore,
                        until_round,
                    });
                }
                env.report("Ambush! The party is caught off guard.");
            }
            SceneEvent::Braced(side) => {
                for id in self.members(side) {
                    self.cause(env, id, Condition::Guard);
                }
            }
            SceneEvent::Emboldened(side) => {
                for id in self.members(side) {
                    self.update(id, |s| s.momentum = true);
                }
                env.report(format!("The {side} surge forward with momentum."));
            }
            SceneEvent::Exposed(side) => {
                for id in self.members(side) {
                    self.cause(env, id, Condition::Vulnerable);
                }
            }
        }
    }

    /// Gives back speeds taken by scene events whose time has run out.
    pub fn restore_speed_overrides(&mut self, env: &mut EncounterEnv<'_>) {
        let round = self.round();
        let (due, pending): (Vec<_>, Vec<_>) = self
            .speed_overrides
            .drain(..)
            .partition(|o| o.until_round <= round);
        self.speed_overrides = pending;
        for entry in due {
            let speed = self
                .buffs(BuffKind::Frenzy)
                .get(entry.actor)
                .and_then(|buff| buff.speed)
                .unwrap_or(entry.restore);
            self.update(entry.actor, |s| {
                if !s.enraged {
                    s.speed = speed;
                }
            });
            if !self.is_ko(entry.actor) {
                env.report(format!("{} regains their footing.", self.name(entry.actor)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{RecordingReporter, ScriptedDice, ScriptedInput};
    use crate::state::Actor;
    use crate::stats::{Stat, StatLine};

    fn pair() -> (Vec<Actor>, Vec<Actor>) {
        (
            vec![Actor::new(ActorId(1), "Ada")],
            vec![
                Actor::new(ActorId(2), "Brute").with_features(Features::RESIST_PIN),
            ],
        )
    }

    #[test]
    fn cause_is_idempotent_and_narrated_once() {
        let (mut party, mut enemies) = pair();
        let mut state = EncounterState::new(&mut party, &mut enemies).unwrap();
        let (mut dice, mut reporter, mut input) =
            (ScriptedDice::always(1), RecordingReporter::new(), ScriptedInput::default());
        let mut env = EncounterEnv::new(&mut dice, &mut reporter, &mut input);

        state.cause(&mut env, ActorId(1), Condition::Daze);
        state.cause(&mut env, ActorId(1), Condition::Daze);
        state.remove(&mut env, ActorId(1), Condition::Vulnerable);
        drop(env);

        assert_eq!(reporter.count("Ada is dazed."), 1);
        assert!(!reporter.mentions("vulnerable"));
    }

    #[test]
    fn resist_pin_holds_on_a_four() {
        let (mut party, mut enemies) = pair();
        let mut state = EncounterState::new(&mut party, &mut enemies).unwrap();
        let (mut dice, mut reporter, mut input) =
            (ScriptedDice::new([4, 1]), RecordingReporter::new(), ScriptedInput::default());
        let mut env = EncounterEnv::new(&mut dice, &mut reporter, &mut input);

        state.cause_pin(&mut env, ActorId(2));
        assert!(!state.check(ActorId(2), |s| s.pin));
        state.cause_pin(&mut env, ActorId(2));
        assert!(state.check(ActorId(2), |s| s.pin));
        drop(env);

        assert!(reporter.mentions("Brute resists being pinned."));
        assert_eq!(reporter.count("Brute is pinned."), 1);
    }

    #[test]
    fn rage_blocks_pin_and_disable() {
        let (mut party, mut enemies) = pair();
        let mut state = EncounterState::new(&mut party, &mut enemies).unwrap();
        let (mut dice, mut reporter, mut input) =
            (ScriptedDice::always(1), RecordingReporter::new(), ScriptedInput::default());
        let mut env = EncounterEnv::new(&mut dice, &mut reporter, &mut input);

        state.update(ActorId(1), |s| s.enraged = true);
        state.cause_pin(&mut env, ActorId(1));
        state.cause_disable(&mut env, ActorId(1));
        assert!(!state.check(ActorId(1), |s| s.pin || s.disable));
        drop(env);

        assert!(reporter.mentions("rage prevents them from being pinned"));
        assert!(reporter.mentions("rage prevents them from being disabled"));
    }

    #[test]
    fn melee_check_clears_one_sided_melee_and_is_idempotent() {
        let (mut party, mut enemies) = pair();
        let mut state = EncounterState::new(&mut party, &mut enemies).unwrap();
        let (mut dice, mut reporter, mut input) =
            (ScriptedDice::always(1), RecordingReporter::new(), ScriptedInput::default());
        let mut env = EncounterEnv::new(&mut dice, &mut reporter, &mut input);

        state.engage(ActorId(1), ActorId(2));
        assert!(!state.check_melee(&mut env));
        assert!(state.in_melee(ActorId(1)));

        state.update(ActorId(2), |s| s.melee = false);
        assert!(state.check_melee(&mut env));
        assert!(!state.in_melee(ActorId(1)));
        let snapshot: Vec<_> = state.order().iter().map(|&id| *state.status(id).unwrap()).collect();
        assert!(!state.check_melee(&mut env));
        let again: Vec<_> = state.order().iter().map(|&id| *state.status(id).unwrap()).collect();
        assert_eq!(snapshot, again);
        drop(env);

        assert_eq!(reporter.count("No melee."), 1);
    }

    #[test]
    fn buffs_revert_after_their_duration() {
        let (mut party, mut enemies) = pair();
        let mut state = EncounterState::new(&mut party, &mut enemies).unwrap();
        let (mut dice, mut reporter, mut input) =
            (ScriptedDice::always(1), RecordingReporter::new(), ScriptedInput::default());
        let mut env = EncounterEnv::new(&mut dice, &mut reporter, &mut input);

        let before = state.actor(ActorId(1)).unwrap().stats.current;
        let deltas = StatLine::ZERO.with(Stat::Reduction, 3).with(Stat::Power, 1);
        state.apply_buff(BuffKind::Ward, ActorId(1), Buff::new(3, deltas));

        for _ in 0..2 {
            state.tick_buffs(&mut env);
            let current = state.actor(ActorId(1)).unwrap().stats.current;
            assert_eq!(current.reduction, before.reduction + 3);
        }
        state.tick_buffs(&mut env);
        assert_eq!(state.actor(ActorId(1)).unwrap().stats.current, before);
        drop(env);

        assert!(reporter.mentions("Ada's stone skin wears off."));
    }

    #[test]
    fn reapplied_buff_refreshes_instead_of_stacking() {
        let (mut party, mut enemies) = pair();
        let mut state = EncounterState::new(&mut party, &mut enemies).unwrap();
        let (mut dice, mut reporter, mut input) =
            (ScriptedDice::always(1), RecordingReporter::new(), ScriptedInput::default());
        let mut env = EncounterEnv::new(&mut dice, &mut reporter, &mut input);

        let before = state.actor(ActorId(1)).unwrap().stats.current.power;
        let dust = Buff::new(4, StatLine::ZERO.with(Stat::Power, 2)).with_speed(SpeedTier::Fast);
        state.apply_buff(BuffKind::Frenzy, ActorId(1), dust);
        state.tick_buffs(&mut env);
        state.apply_buff(BuffKind::Frenzy, ActorId(1), dust);

        assert_eq!(state.actor(ActorId(1)).unwrap().stats.current.power, before + 2);
        assert_eq!(state.buffs(BuffKind::Frenzy).get(ActorId(1)).map(|b| b.duration), Some(4));
        assert_eq!(state.status(ActorId(1)).map(|s| s.speed), Some(SpeedTier::Fast));

        for _ in 0..4 {
            state.tick_buffs(&mut env);
        }
        assert_eq!(state.actor(ActorId(1)).unwrap().stats.current.power, before);
        assert_eq!(state.status(ActorId(1)).map(|s| s.speed), Some(SpeedTier::Normal));
    }

    #[test]
    fn ambush_slows_the_party_for_one_round() {
        let (mut party, mut enemies) = pair();
        let mut state = EncounterState::new(&mut party, &mut enemies).unwrap();
        let (mut dice, mut reporter, mut input) =
            (ScriptedDice::always(1), RecordingReporter::new(), ScriptedInput::default());
        let mut env = EncounterEnv::new(&mut dice, &mut reporter, &mut input);

        state.apply_event(&mut env, SceneEvent::Ambush);
        assert_eq!(state.status(ActorId(1)).map(|s| s.speed), Some(SpeedTier::Slow));
        state.restore_speed_overrides(&mut env);
        assert_eq!(state.status(ActorId(1)).map(|s| s.speed), Some(SpeedTier::Slow));

        state.advance_round();
        state.restore_speed_overrides(&mut env);
        assert_eq!(state.status(ActorId(1)).map(|s| s.speed), Some(SpeedTier::Normal));
    }

    #[test]
    fn ambush_ending_keeps_a_frenzied_pace() {
        let (mut party, mut enemies) = pair();
        let mut state = EncounterState::new(&mut party, &mut enemies).unwrap();
        let (mut dice, mut reporter, mut input) =
            (ScriptedDice::always(1), RecordingReporter::new(), ScriptedInput::default());
        let mut env = EncounterEnv::new(&mut dice, &mut reporter, &mut input);

        state.apply_event(&mut env, SceneEvent::Ambush);
        let dust = Buff::new(4, StatLine::ZERO.with(Stat::Power, 2)).with_speed(SpeedTier::Fast);
        state.apply_buff(BuffKind::Frenzy, ActorId(1), dust);

        state.tick_buffs(&mut env);
        state.advance_round();
        state.restore_speed_overrides(&mut env);
        assert_eq!(state.status(ActorId(1)).map(|s| s.speed), Some(SpeedTier::Fast));

        for _ in 0..3 {
            state.tick_buffs(&mut env);
        }
        assert_eq!(state.status(ActorId(1)).map(|s| s.speed), Some(SpeedTier::Normal));
    }

    #[test]
    fn braced_guards_only_the_named_side() {
        let (mut party, mut enemies) = pair();
        let mut state = EncounterState::new(&mut party, &mut enemies).unwrap();
        let (mut dice, mut reporter, mut input) =
            (ScriptedDice::always(1), RecordingReporter::new(), ScriptedInput::default());
        let mut env = EncounterEnv::new(&mut dice, &mut reporter, &mut input);

        state.apply_event(&mut env, SceneEvent::Braced(Side::Enemies));

        assert!(state.check(ActorId(2), |s| s.guard));
        assert!(state.check(ActorId(1), |s| !s.guard));
    }

    #[test]
    fn emboldened_grants_momentum_to_the_named_side() {
        let (mut party, mut enemies) = pair();
        let mut state = EncounterState::new(&mut party, &mut enemies).unwrap();
        let (mut dice, mut reporter, mut input) =
            (ScriptedDice::always(1), RecordingReporter::new(), ScriptedInput::default());
        let mut env = EncounterEnv::new(&mut dice, &mut reporter, &mut input);

        state.apply_event(&mut env, SceneEvent::Emboldened(Side::Party));

        assert!(state.check(ActorId(1), |s| s.momentum));
        assert!(state.check(ActorId(2), |s| !s.momentum));
    }

    #[test]
    fn exposed_leaves_only_the_named_side_vulnerable() {
        let (mut party, mut enemies) = pair();
        let mut state = EncounterState::new(&mut party, &mut enemies).unwrap();
        let (mut dice, mut reporter, mut input) =
            (ScriptedDice::always(1), RecordingReporter::new(), ScriptedInput::default());
        let mut env = EncounterEnv::new(&mut dice, &mut reporter, &mut input);

        state.apply_event(&mut env, SceneEvent::Exposed(Side::Enemies));

        assert!(state.check(ActorId(2), |s| s.vulnerable));
        assert!(state.check(ActorId(1), |s| !s.vulnerable));
    }
}
