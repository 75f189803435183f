//! Action domain.
//!
//! An actor's catalog is the union of archetype, weapon and base actions
//! ([`ActionSet::catalog`]). [`filter_actions`] narrows it to what the actor's
//! status allows this turn, and [`perform`] resolves the chosen kind against
//! the encounter.
//!
//! # Module Structure
//!
//! - `kind`: `ActionKind` and the `ActionSet` flags
//! - `available`: status-based legality
//! - `check`: the d20 stat test
//! - `combat`: modifiers, damage, riposte and savagery
//! - `targeting`: legal targets and target selection
//! - `kinds`: one handler per action kind

pub mod available;
pub mod check;
pub mod combat;
pub mod kind;
pub mod kinds;
pub mod targeting;

pub use available::filter_actions;
pub use check::{Outcome, stat_test};
pub use combat::{combat_modifiers, damage, riposte, savagery};
pub use kind::{ActionKind, ActionSet};
pub use targeting::{choose_target, filter_targets};

use crate::env::{Choice, EncounterEnv};
use crate::state::{ActorId, EncounterState};
use kinds::{attack, diablerie, item, stance, support};

/// Resolves `kind` for `actor`. Handlers narrate their own failures, so
/// performing never errors.
pub fn perform(
    state: &mut EncounterState<'_>,
    env: &mut EncounterEnv<'_>,
    actor: ActorId,
    kind: ActionKind,
) {
    tracing::debug!(%actor, action = %kind, round = state.round(), "perform");
    match kind {
        ActionKind::Fight => attack::fight(state, env, actor),
        ActionKind::Trip => attack::trip(state, env, actor),
        ActionKind::Skirmish => attack::skirmish(state, env, actor),
        ActionKind::Stab => attack::stab(state, env, actor),
        ActionKind::Smash => attack::smash(state, env, actor),
        ActionKind::HackAndSlash => attack::hack_and_slash(state, env, actor),
        ActionKind::Prowl => attack::prowl(state, env, actor),
        ActionKind::DirtyTrick => attack::dirty_trick(state, env, actor),
        ActionKind::Guard => stance::guard(state, env, actor),
        ActionKind::Block => stance::block(state, env, actor),
        ActionKind::Retreat => stance::retreat(state, env, actor),
        ActionKind::Swap => stance::swap(state, env, actor),
        ActionKind::Observe => stance::observe(state, env, actor),
        ActionKind::Aid => support::aid(state, env, actor),
        ActionKind::Rally => support::rally(state, env, actor),
        ActionKind::DecisiveOrder => support::decisive_order(state, env, actor),
        ActionKind::Deliverance => support::deliverance(state, env, actor),
        ActionKind::UseItem => item::use_item(state, env, actor),
        ActionKind::Diablerie => diablerie::diablerie(state, env, actor),
    }
}

/// Asks the human player to pick one of `legal`.
pub fn choose_action(
    env: &mut EncounterEnv<'_>,
    legal: &[ActionKind],
    prompt: &str,
) -> Option<ActionKind> {
    let options: Vec<Choice> = legal
        .iter()
        .map(|kind| Choice::new(kind.to_string(), kind.description()))
        .collect();
    env.choose(prompt, &options)
        .and_then(|index| legal.get(index).copied())
}
