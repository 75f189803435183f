//! Turn scheduling and encounter execution.
//!
//! The [`EncounterEngine`] owns the [`EncounterState`] for one battle and
//! drives it through three phases:
//!
//! - `Round`: one eligible actor takes a turn per step
//! - `Upkeep`: round bookkeeping once nobody is left to act
//! - `End`: one side is knocked out, or the round limit ran out
//!
//! Each call to [`EncounterEngine::step`] advances exactly one transition,
//! so callers can interleave pauses or inspection between turns.

mod turns;

use crate::action::{choose_action, filter_actions, perform, savagery};
use crate::ai::decide_action;
use crate::config::EncounterConfig;
use crate::env::EncounterEnv;
use crate::error::EncounterError;
use crate::state::{Actor, ActorId, EncounterState, Inventory, Scene, SceneEvent, Side};

/// Scheduler phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Round,
    Upkeep,
    End,
}

/// How an encounter finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterOutcome {
    /// Winning side. `None` when the round limit ran out first.
    pub victor: Option<Side>,
    /// Round during which the encounter ended.
    pub rounds: u32,
}

impl EncounterOutcome {
    pub fn is_victory_for(&self, side: Side) -> bool {
        self.victor == Some(side)
    }
}

/// Drives one encounter from its first round to its end.
pub struct EncounterEngine<'s, 'e> {
    state: EncounterState<'s>,
    env: EncounterEnv<'e>,
    config: EncounterConfig,
    phase: Phase,
}

impl<'s, 'e> EncounterEngine<'s, 'e> {
    pub fn new(state: EncounterState<'s>, env: EncounterEnv<'e>, config: EncounterConfig) -> Self {
        Self {
            state,
            env,
            config,
            phase: Phase::Round,
        }
    }

    /// Announces the first round and applies the scene's opening event.
    pub fn start(&mut self, event: Option<SceneEvent>) {
        self.env
            .major_report(format!("Round {}", self.state.round()));
        if let Some(event) = event {
            tracing::debug!(?event, "scene event");
            self.state.apply_event(&mut self.env, event);
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &EncounterState<'s> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut EncounterState<'s> {
        &mut self.state
    }

    /// Advances one transition and returns the phase that follows it.
    pub fn step(&mut self) -> Phase {
        match self.phase {
            Phase::Round => self.round_step(),
            Phase::Upkeep => self.upkeep(),
            Phase::End => {}
        }
        self.phase
    }

    /// Steps until the encounter ends.
    pub fn run(&mut self) -> EncounterOutcome {
        while self.step() != Phase::End {}
        self.outcome()
    }

    pub fn outcome(&self) -> EncounterOutcome {
        EncounterOutcome {
            victor: self.state.victor(),
            rounds: self.state.round(),
        }
    }

    // ========================================================================
    // Round
    // ========================================================================

    fn round_step(&mut self) {
        for id in self.state.order() {
            savagery(&mut self.state, &mut self.env, id);
        }

        let Some(actor) = turns::next_actor(&self.state) else {
            self.phase = Phase::Upkeep;
            return;
        };
        self.take_turn(actor);

        self.state.check_melee(&mut self.env);
        if let Some(victor) = self.state.victor() {
            self.env.report("Encounter over.");
            tracing::info!(%victor, rounds = self.state.round(), "encounter over");
            self.phase = Phase::End;
        }
    }

    fn take_turn(&mut self, id: ActorId) {
        self.state.update(id, |s| s.active = true);
        self.state.soft_reset(&mut self.env, id);

        let summary = self
            .state
            .status(id)
            .map(|s| s.summary())
            .unwrap_or_default();
        let name = self.state.name(id).to_owned();
        self.env.report(format!("{name}'s turn {summary}"));

        let (logic, catalog) = match self.state.actor(id) {
            Some(actor) => (actor.logic, actor.catalog().to_vec()),
            None => return,
        };
        let legal = self
            .state
            .status(id)
            .map(|status| filter_actions(&catalog, status))
            .unwrap_or_default();

        let chosen = match logic {
            Some(profile) => decide_action(&self.state, id, profile, legal),
            None => choose_action(&mut self.env, &legal, &format!("What will {name} do?")),
        };
        match chosen {
            Some(kind) => perform(&mut self.state, &mut self.env, id, kind),
            None => self.env.report(format!("{name} hesitates.")),
        }

        self.state.update(id, |s| {
            s.active = false;
            s.done = true;
        });
        if !self.state.is_ko(id) {
            self.state.hard_reset(&mut self.env, id);
        }
    }

    // ========================================================================
    // Upkeep
    // ========================================================================

    fn upkeep(&mut self) {
        self.env
            .report(format!("Round {} upkeep", self.state.round()));
        if self.state.round() >= self.config.round_limit {
            self.env.report("The encounter ends in a stalemate.");
            tracing::info!(rounds = self.state.round(), "round limit reached");
            self.phase = Phase::End;
            return;
        }
        let round = self.state.advance_round();

        self.env.major_report(format!("Round {round}"));
        tracing::info!(round, "new round");
        for id in self.state.order() {
            self.state.update(id, |s| {
                s.done = false;
                s.active = false;
            });
        }
        self.state.tick_buffs(&mut self.env);
        self.state.restore_speed_overrides(&mut self.env);
        self.phase = Phase::Round;
    }
}

/// Runs one scene against `party` to the end.
///
/// Fails only when the encounter cannot be assembled (an empty roster or a
/// duplicated actor id).
pub fn run_encounter(
    party: &mut [Actor],
    scene: &mut Scene,
    inventory: Option<&mut Inventory>,
    env: EncounterEnv<'_>,
    config: EncounterConfig,
) -> Result<EncounterOutcome, EncounterError> {
    let event = scene.event;
    let mut state = EncounterState::new(party, &mut scene.roster)?;
    if let Some(inventory) = inventory {
        state = state.with_inventory(inventory);
    }
    tracing::info!(scene = %scene.name, "encounter start");

    let mut engine = EncounterEngine::new(state, env, config);
    engine.start(event);
    Ok(engine.run())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{RecordingReporter, ScriptedDice, ScriptedInput};
    use crate::stats::{Stat, StatLine};

    #[test]
    fn stalemate_at_the_round_limit() {
        let sturdy = StatLine::ACTOR_DEFAULT
            .with(Stat::Stamina, 1000)
            .with(Stat::Defense, 40);
        let mut party = vec![Actor::new(ActorId(1), "Valeria").with_stats(sturdy)];
        let mut scene = Scene::new(
            "stalemate",
            vec![Actor::new(ActorId(2), "Skitter").with_stats(sturdy)],
        );
        let mut dice = ScriptedDice::always(1);
        let mut reporter = RecordingReporter::new();
        let mut input = ScriptedInput::default();

        let outcome = run_encounter(
            &mut party,
            &mut scene,
            None,
            EncounterEnv::new(&mut dice, &mut reporter, &mut input),
            EncounterConfig::with_round_limit(3),
        )
        .unwrap();

        assert_eq!(outcome.victor, None);
        assert_eq!(outcome.rounds, 3);
        assert!(reporter.mentions("The encounter ends in a stalemate."));
        assert_eq!(reporter.count("Valeria's turn"), 3);
    }

    #[test]
    fn empty_rosters_are_rejected() {
        let mut party = vec![Actor::new(ActorId(1), "Valeria")];
        let mut scene = Scene::new("empty", Vec::new());
        let mut dice = ScriptedDice::always(1);
        let mut reporter = RecordingReporter::new();
        let mut input = ScriptedInput::default();

        let result = run_encounter(
            &mut party,
            &mut scene,
            None,
            EncounterEnv::new(&mut dice, &mut reporter, &mut input),
            EncounterConfig::new(),
        );
        assert_eq!(result, Err(EncounterError::EmptyRoster));
    }
}
