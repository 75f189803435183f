//! Legal targets and how one gets picked.

use crate::ai::{SelectTarget, TargetView};
use crate::env::{Choice, EncounterEnv};
use crate::state::{ActorId, EncounterState};

/// Opponents `actor` may attack right now.
///
/// Starts from non-KO opponents. Blind actors may only strike opponents in
/// melee, and only while engaged themselves. Actors in melee are restricted
/// to melee opponents; otherwise blockers intercept if any opponent blocks.
pub fn filter_targets(state: &EncounterState<'_>, actor: ActorId) -> Vec<ActorId> {
    let Some(status) = state.status(actor) else {
        return Vec::new();
    };
    let opponents = state.opponents(actor);

    if status.blind && !status.melee {
        return Vec::new();
    }
    if status.melee {
        return opponents
            .into_iter()
            .filter(|&id| state.in_melee(id))
            .collect();
    }

    let blockers: Vec<ActorId> = opponents
        .iter()
        .copied()
        .filter(|&id| state.check(id, |s| s.block))
        .collect();
    if blockers.is_empty() { opponents } else { blockers }
}

/// Snapshot of candidates for AI preference rules.
pub fn target_views(state: &EncounterState<'_>, candidates: &[ActorId]) -> Vec<TargetView> {
    candidates
        .iter()
        .filter_map(|&id| TargetView::of(state, id))
        .collect()
}

/// Picks one of `candidates` for `actor`: AI actors follow their profile's
/// preference, humans answer a menu.
pub fn choose_target(
    state: &EncounterState<'_>,
    env: &mut EncounterEnv<'_>,
    actor: ActorId,
    candidates: &[ActorId],
    prompt: &str,
) -> Option<ActorId> {
    if candidates.is_empty() {
        return None;
    }
    let logic = state.actor(actor).and_then(|a| a.logic);
    match logic {
        Some(profile) => {
            let views = target_views(state, candidates);
            profile.select_target(&views, env)
        }
        None => {
            let options: Vec<Choice> = candidates
                .iter()
                .map(|&id| {
                    let flags = state.status(id).map(|s| s.summary()).unwrap_or_default();
                    Choice::new(state.name(id), flags)
                })
                .collect();
            env.choose(prompt, &options)
                .and_then(|index| candidates.get(index).copied())
        }
    }
}
