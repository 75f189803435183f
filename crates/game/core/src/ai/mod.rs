//! Decision making for computer-controlled actors.
//!
//! Each AI actor carries a [`LogicProfile`]. The profile answers two
//! questions through the [`SelectAction`] and [`SelectTarget`] capabilities:
//! which legal action to take, and which candidate to aim it at.
//!
//! Action choice runs a small behavior tree per profile (see [`presets`])
//! followed by a shared fallback. Target choice applies the profile's
//! preference rule and breaks ties with the encounter dice.

mod context;
pub mod nodes;
pub mod presets;
pub mod tree;

pub use context::AiContext;
pub use tree::{Behavior, Status};

use strum::{Display, EnumIter};

use crate::action::ActionKind;
use crate::env::EncounterEnv;
use crate::state::{ActorId, EncounterState};

/// Personality of a computer-controlled actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum LogicProfile {
    /// Avoids melee and pins from range.
    Disruptive,
    /// Presses the attack against the weakest opponent.
    Aggressive,
    /// Guards first, strikes the healthiest opponent.
    Defensive,
    /// Adapts to how the opposition stands.
    Reactive,
    // Scripted bestiary profiles: fallback choices, random targets.
    Minion,
    Grunt,
    Nemesis,
}

/// Picks an action from the legal set recorded in the context.
pub trait SelectAction {
    fn select_action(&self, ctx: &mut AiContext) -> Option<ActionKind>;
}

/// Picks one of the offered candidates.
pub trait SelectTarget {
    fn select_target(&self, candidates: &[TargetView], env: &mut EncounterEnv<'_>)
    -> Option<ActorId>;
}

impl SelectAction for LogicProfile {
    fn select_action(&self, ctx: &mut AiContext) -> Option<ActionKind> {
        if let Some(tree) = presets::tree_for(*self) {
            tree.tick(ctx);
        }
        if ctx.choice().is_none() {
            presets::fallback().tick(ctx);
        }
        let choice = ctx.choice();
        tracing::trace!(actor = %ctx.actor, profile = %self, ?choice, "ai action");
        choice
    }
}

impl SelectTarget for LogicProfile {
    fn select_target(
        &self,
        candidates: &[TargetView],
        env: &mut EncounterEnv<'_>,
    ) -> Option<ActorId> {
        match self {
            Self::Aggressive => candidates
                .iter()
                .min_by(|a, b| a.fraction().total_cmp(&b.fraction()))
                .map(|t| t.id),
            // First of equally healthy candidates wins.
            Self::Defensive => candidates
                .iter()
                .rev()
                .max_by(|a, b| a.fraction().total_cmp(&b.fraction()))
                .map(|t| t.id),
            Self::Disruptive => pick_preferring(candidates, env, |t| !t.melee && !t.pin),
            Self::Reactive => {
                pick_preferring(candidates, env, |t| t.is_soft() || t.is_low())
            }
            Self::Minion | Self::Grunt | Self::Nemesis => pick_any(candidates, env),
        }
    }
}

fn pick_any(candidates: &[TargetView], env: &mut EncounterEnv<'_>) -> Option<ActorId> {
    env.pick(candidates.len())
        .and_then(|index| candidates.get(index))
        .map(|t| t.id)
}

fn pick_preferring(
    candidates: &[TargetView],
    env: &mut EncounterEnv<'_>,
    prefer: impl Fn(&TargetView) -> bool,
) -> Option<ActorId> {
    let preferred: Vec<TargetView> = candidates.iter().copied().filter(|t| prefer(t)).collect();
    if preferred.is_empty() {
        pick_any(candidates, env)
    } else {
        pick_any(&preferred, env)
    }
}

/// Snapshot of a candidate as the preference rules see it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetView {
    pub id: ActorId,
    pub current_stamina: i32,
    pub base_stamina: i32,
    pub melee: bool,
    pub pin: bool,
    pub daze: bool,
    pub vulnerable: bool,
    pub guard: bool,
    pub block: bool,
}

impl TargetView {
    pub fn of(state: &EncounterState<'_>, id: ActorId) -> Option<Self> {
        let actor = state.actor(id)?;
        let status = state.status(id)?;
        Some(Self {
            id,
            current_stamina: actor.stats.current.stamina,
            base_stamina: actor.stats.base.stamina,
            melee: status.melee,
            pin: status.pin,
            daze: status.daze,
            vulnerable: status.vulnerable,
            guard: status.guard,
            block: status.block,
        })
    }

    /// Mirrors `ActorStatus::is_soft` for the snapshot.
    pub fn is_soft(&self) -> bool {
        self.daze || self.vulnerable
    }

    /// At or below half of base stamina (never below 1).
    pub fn is_low(&self) -> bool {
        self.current_stamina <= (self.base_stamina / 2).max(1)
    }

    pub fn fraction(&self) -> f32 {
        self.current_stamina as f32 / self.base_stamina.max(1) as f32
    }
}

/// Asks an AI actor's profile for one of `legal`.
pub fn decide_action(
    state: &EncounterState<'_>,
    actor: ActorId,
    profile: LogicProfile,
    legal: Vec<ActionKind>,
) -> Option<ActionKind> {
    if legal.is_empty() {
        return None;
    }
    let mut ctx = AiContext::new(state, actor, legal);
    profile.select_action(&mut ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{RecordingReporter, ScriptedDice, ScriptedInput};
    use ActionKind::*;

    fn view(id: u32, current: i32) -> TargetView {
        TargetView {
            id: ActorId(id),
            current_stamina: current,
            base_stamina: 12,
            melee: false,
            pin: false,
            daze: false,
            vulnerable: false,
            guard: false,
            block: false,
        }
    }

    fn ctx(legal: &[ActionKind]) -> AiContext {
        let mut ctx = AiContext::detached(ActorId(1), legal.to_vec());
        ctx.opponents = vec![view(10, 12)];
        ctx
    }

    #[test]
    fn aggressive_follows_its_priority() {
        let mut c = ctx(&[Guard, Trip, Smash, Skirmish]);
        assert_eq!(LogicProfile::Aggressive.select_action(&mut c), Some(Smash));
    }

    #[test]
    fn defensive_blocks_first() {
        let mut c = ctx(&[Fight, Guard, Block]);
        assert_eq!(LogicProfile::Defensive.select_action(&mut c), Some(Block));
    }

    #[test]
    fn disruptive_retreats_from_melee() {
        let mut c = ctx(&[Fight, Retreat, Trip]);
        c.in_melee = true;
        assert_eq!(LogicProfile::Disruptive.select_action(&mut c), Some(Retreat));

        let mut c = ctx(&[Fight, Skirmish, Trip]);
        assert_eq!(LogicProfile::Disruptive.select_action(&mut c), Some(Skirmish));
    }

    #[test]
    fn reactive_skirmishes_opponents_at_range() {
        let mut c = ctx(&[Fight, Skirmish, Guard]);
        assert_eq!(LogicProfile::Reactive.select_action(&mut c), Some(Skirmish));
    }

    #[test]
    fn reactive_finishes_softened_opponents() {
        let mut c = ctx(&[Guard, Smash, Fight]);
        c.in_melee = true;
        c.momentum = true;
        c.opponents = vec![TargetView { melee: true, daze: true, ..view(10, 12) }];
        assert_eq!(LogicProfile::Reactive.select_action(&mut c), Some(Fight));
    }

    #[test]
    fn reactive_commits_then_falls_back() {
        // Softened opponent but no finisher legal: guard is skipped.
        let mut c = ctx(&[Observe, Guard, Skirmish]);
        c.in_melee = true;
        c.momentum = true;
        c.opponents = vec![TargetView { melee: true, vulnerable: true, ..view(10, 12) }];
        assert_eq!(LogicProfile::Reactive.select_action(&mut c), Some(Skirmish));
    }

    #[test]
    fn reactive_guards_when_nothing_stands_out() {
        let mut c = ctx(&[Fight, Guard]);
        c.in_melee = true;
        c.momentum = true;
        c.opponents = vec![TargetView { melee: true, ..view(10, 12) }];
        assert_eq!(LogicProfile::Reactive.select_action(&mut c), Some(Guard));
    }

    #[test]
    fn scripted_profiles_use_the_fallback_chain() {
        for profile in [LogicProfile::Minion, LogicProfile::Grunt, LogicProfile::Nemesis] {
            let mut c = ctx(&[Observe, Guard, Skirmish]);
            assert_eq!(profile.select_action(&mut c), Some(Skirmish));
            let mut c = ctx(&[Observe, Aid]);
            assert_eq!(profile.select_action(&mut c), Some(Observe));
        }
        assert_eq!(LogicProfile::Minion.select_action(&mut ctx(&[])), None);
    }

    #[test]
    fn target_preferences() {
        let mut dice = ScriptedDice::always(1);
        let mut reporter = RecordingReporter::new();
        let mut input = ScriptedInput::default();
        let mut env = EncounterEnv::new(&mut dice, &mut reporter, &mut input);

        let views = [view(10, 9), view(11, 3), view(12, 12), view(13, 12)];
        assert_eq!(
            LogicProfile::Aggressive.select_target(&views, &mut env),
            Some(ActorId(11))
        );
        assert_eq!(
            LogicProfile::Defensive.select_target(&views, &mut env),
            Some(ActorId(12))
        );

        let mut engaged = views;
        engaged[0].melee = true;
        engaged[1].pin = true;
        assert_eq!(
            LogicProfile::Disruptive.select_target(&engaged, &mut env),
            Some(ActorId(12))
        );
        assert_eq!(
            LogicProfile::Reactive.select_target(&views, &mut env),
            Some(ActorId(11))
        );
        assert_eq!(LogicProfile::Grunt.select_target(&[], &mut env), None);
    }
}
