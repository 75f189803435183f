//! Actions that help allies instead of hurting opponents.

use super::{lose_momentum, pick_ally, steady};
use crate::action::{ActionKind, choose_action, filter_actions, perform};
use crate::ai::decide_action;
use crate::config::EncounterConfig;
use crate::env::EncounterEnv;
use crate::state::{ActorId, Condition, EncounterState};

/// Orders an ally may receive.
const ORDERS: [ActionKind; 3] = [ActionKind::Fight, ActionKind::Skirmish, ActionKind::Retreat];

/// Steadies a shaken ally, or lends momentum to a steady one.
pub fn aid(state: &mut EncounterState<'_>, env: &mut EncounterEnv<'_>, actor: ActorId) {
    let Some(ally) = pick_ally(state, env, actor, ActionKind::Aid) else {
        env.report(format!("{} has no ally to aid.", state.name(actor)));
        return;
    };
    if steady(state, env, ally) {
        env.report(format!(
            "{} aids {}, steadying them.",
            state.name(actor),
            state.name(ally)
        ));
    } else {
        state.update(ally, |s| s.momentum = true);
        env.report(format!(
            "{} aids {}, granting momentum.",
            state.name(actor),
            state.name(ally)
        ));
    }
    lose_momentum(state, actor);
}

/// Aid for every ally at once. The first rally always works; later ones
/// falter on a 1 on d2.
pub fn rally(state: &mut EncounterState<'_>, env: &mut EncounterEnv<'_>, actor: ActorId) {
    let first = state.spend(actor, ActionKind::Rally);
    if !first && env.roll(EncounterConfig::RALLY_DIE) == 1 {
        env.report(format!("{}'s rally falters.", state.name(actor)));
        lose_momentum(state, actor);
        return;
    }

    let allies = state.allies(actor);
    if allies.is_empty() {
        env.report(format!(
            "{} rallies, but no allies respond.",
            state.name(actor)
        ));
        lose_momentum(state, actor);
        return;
    }
    for ally in allies {
        if !steady(state, env, ally) {
            state.update(ally, |s| s.momentum = true);
        }
    }
    env.report(format!("{} rallies the party.", state.name(actor)));
    lose_momentum(state, actor);
}

/// Commands an ally to act immediately. Once per actor per encounter.
pub fn decisive_order(state: &mut EncounterState<'_>, env: &mut EncounterEnv<'_>, actor: ActorId) {
    let name = state.name(actor).to_owned();
    if state.is_spent(actor, ActionKind::DecisiveOrder) {
        env.report(format!(
            "{name} has already issued a decisive order this encounter."
        ));
        lose_momentum(state, actor);
        return;
    }
    let Some(ally) = pick_ally(state, env, actor, ActionKind::DecisiveOrder) else {
        env.report(format!("{name} has no ally to command."));
        lose_momentum(state, actor);
        return;
    };

    let legal = state
        .status(ally)
        .map(|status| filter_actions(&ORDERS, status))
        .unwrap_or_default();
    if legal.is_empty() {
        env.report(format!(
            "{} cannot act on the decisive order.",
            state.name(ally)
        ));
        lose_momentum(state, actor);
        return;
    }

    // The commander chooses: by menu if human, otherwise the ally's own
    // temperament (or the commander's, for an ally without one).
    let commander = state.actor(actor).and_then(|a| a.logic);
    let order = match commander {
        None => choose_action(
            env,
            &legal,
            &format!("Choose an order for {}.", state.name(ally)),
        ),
        Some(own) => {
            let profile = state.actor(ally).and_then(|a| a.logic).unwrap_or(own);
            decide_action(state, ally, profile, legal)
        }
    };

    state.spend(actor, ActionKind::DecisiveOrder);
    if let Some(order) = order {
        env.report(format!(
            "{name} issues a decisive order to {}.",
            state.name(ally)
        ));
        tracing::debug!(commander = %actor, ally = %ally, %order, "decisive order");
        perform(state, env, ally, order);
    }
    lose_momentum(state, actor);
}

/// Restores an ally and lifts their afflictions. Once per actor per encounter.
pub fn deliverance(state: &mut EncounterState<'_>, env: &mut EncounterEnv<'_>, actor: ActorId) {
    let name = state.name(actor).to_owned();
    if state.is_spent(actor, ActionKind::Deliverance) {
        env.report(format!(
            "{name} has already used deliverance this encounter."
        ));
        lose_momentum(state, actor);
        return;
    }
    let Some(ally) = pick_ally(state, env, actor, ActionKind::Deliverance) else {
        env.report(format!("{name} has no ally to aid with deliverance."));
        lose_momentum(state, actor);
        return;
    };

    let amount = env.range(EncounterConfig::RESTORE_MIN, EncounterConfig::RESTORE_MAX);
    let restored = state
        .actor_mut(ally)
        .map_or(0, |a| a.stats.restore_stamina(amount));
    for condition in [
        Condition::Vulnerable,
        Condition::Daze,
        Condition::Pin,
        Condition::Disable,
    ] {
        state.remove(env, ally, condition);
    }
    env.report(format!(
        "{name} delivers salvation to {}, restoring {restored} stamina.",
        state.name(ally)
    ));
    state.spend(actor, ActionKind::Deliverance);
    lose_momentum(state, actor);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::LogicProfile;
    use crate::env::{RecordingReporter, ScriptedDice, ScriptedInput};
    use crate::state::Actor;

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

    fn party() -> Vec<Actor> {
        vec![
            Actor::new(ActorId(1), "Herald"),
            Actor::new(ActorId(2), "Valeria"),
            Actor::new(ActorId(3), "Bosh"),
        ]
    }

    #[test]
    fn aid_steadies_a_shaken_ally() {
        let mut party = party();
        let mut enemies = vec![Actor::new(ActorId(9), "Skitter")];
        let mut state = EncounterState::new(&mut party, &mut enemies).unwrap();
        state.update(ActorId(2), |s| s.daze = true);
        state.update(ActorId(1), |s| s.momentum = true);
        let mut harness = Harness::new(ScriptedDice::always(1));

        aid(&mut state, &mut harness.env(), ActorId(1));

        assert!(state.check(ActorId(2), |s| !s.daze && !s.momentum));
        assert!(!state.check(ActorId(1), |s| s.momentum));
        assert!(harness.reporter.mentions("Herald aids Valeria, steadying them."));
    }

    #[test]
    fn aid_without_allies_is_narrated() {
        let mut party = vec![Actor::new(ActorId(1), "Herald")];
        let mut enemies = vec![Actor::new(ActorId(9), "Skitter")];
        let mut state = EncounterState::new(&mut party, &mut enemies).unwrap();
        let mut harness = Harness::new(ScriptedDice::always(1));

        aid(&mut state, &mut harness.env(), ActorId(1));
        assert!(harness.reporter.mentions("Herald has no ally to aid."));
    }

    #[test]
    fn second_rally_can_falter() {
        let mut party = party();
        let mut enemies = vec![Actor::new(ActorId(9), "Skitter")];
        let mut state = EncounterState::new(&mut party, &mut enemies).unwrap();
        let mut harness = Harness::new(ScriptedDice::always(1));

        rally(&mut state, &mut harness.env(), ActorId(1));
        assert!(state.check(ActorId(2), |s| s.momentum));
        assert!(state.check(ActorId(3), |s| s.momentum));

        rally(&mut state, &mut harness.env(), ActorId(1));
        assert!(harness.reporter.mentions("Herald's rally falters."));
        assert_eq!(harness.reporter.count("rallies the party"), 1);
    }

    #[test]
    fn decisive_order_makes_the_ally_act_once() {
        let mut party = party();
        let mut enemies = vec![Actor::new(ActorId(9), "Skitter")];
        let mut state = EncounterState::new(&mut party, &mut enemies).unwrap();
        // Human commander: ally menu -> Valeria, order menu -> fight
        // (skirmish is listed second). Fight rolls d4 then d20.
        let mut harness = Harness::new(ScriptedDice::always(1));

        decisive_order(&mut state, &mut harness.env(), ActorId(1));
        assert!(harness.reporter.mentions("Herald issues a decisive order to Valeria."));
        assert!(harness.reporter.mentions("Valeria attacks Skitter in melee."));
        assert!(state.is_spent(ActorId(1), ActionKind::DecisiveOrder));

        decisive_order(&mut state, &mut harness.env(), ActorId(1));
        assert!(harness.reporter.mentions("already issued a decisive order"));
    }

    #[test]
    fn ai_commander_uses_the_ally_profile() {
        let mut party = vec![
            Actor::new(ActorId(1), "Herald").with_logic(LogicProfile::Aggressive),
            Actor::new(ActorId(2), "Sonja").with_logic(LogicProfile::Disruptive),
        ];
        let mut enemies = vec![Actor::new(ActorId(9), "Skitter")];
        let mut state = EncounterState::new(&mut party, &mut enemies).unwrap();
        let mut harness = Harness::new(ScriptedDice::always(1));

        decisive_order(&mut state, &mut harness.env(), ActorId(1));
        assert!(harness.reporter.mentions("Sonja takes aim at Skitter"));
        assert!(!state.in_melee(ActorId(2)));
    }

    #[test]
    fn deliverance_restores_and_cleanses_once() {
        let mut party = party();
        let mut enemies = vec![Actor::new(ActorId(9), "Skitter")];
        let mut state = EncounterState::new(&mut party, &mut enemies).unwrap();
        state.actor_mut(ActorId(2)).unwrap().stats.current.stamina = 2;
        state.update(ActorId(2), |s| {
            s.pin = true;
            s.disable = true;
        });
        // range(7, 12) with a face of 6 lands on 12
        let mut harness = Harness::new(ScriptedDice::always(6));

        deliverance(&mut state, &mut harness.env(), ActorId(1));

        assert_eq!(state.actor(ActorId(2)).unwrap().stats.current.stamina, 12);
        assert!(state.check(ActorId(2), |s| !s.pin && !s.disable));
        assert!(harness.reporter.mentions("restoring 10 stamina"));

        deliverance(&mut state, &mut harness.env(), ActorId(1));
        assert!(harness.reporter.mentions("already used deliverance"));
    }
}
